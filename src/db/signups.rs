//! Signup operations.

use super::Db;
use crate::error::AppError;
use crate::models::Signup;

impl Db {
    /// All signups of a user, oldest first.
    pub async fn load_signups(&self, user_id: i64) -> Result<Vec<Signup>, AppError> {
        sqlx::query_as::<_, Signup>("SELECT * FROM signups WHERE user_id = ? ORDER BY id")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Sign a user up for an event.
    pub async fn insert_signup(
        &self,
        event_id: i64,
        user_id: i64,
        status: &str,
    ) -> Result<Signup, AppError> {
        let now = chrono::Utc::now();
        sqlx::query_as::<_, Signup>(
            r#"
            INSERT INTO signups (event_id, user_id, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .bind(status)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }
}
