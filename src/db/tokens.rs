//! Token lookups.

use super::Db;
use crate::error::AppError;
use crate::models::{NewToken, Token};

impl Db {
    /// Find a token matching both `id` and `secret`.
    pub async fn find_token(&self, id: i64, secret: &str) -> Result<Option<Token>, AppError> {
        sqlx::query_as::<_, Token>("SELECT * FROM tokens WHERE id = ? AND secret = ?")
            .bind(id)
            .bind(secret)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Store a token. Tokens are issued by the login flow, not through the API.
    pub async fn insert_token(&self, token: &NewToken) -> Result<Token, AppError> {
        let now = chrono::Utc::now();
        sqlx::query_as::<_, Token>(
            r#"
            INSERT INTO tokens (secret, nusid, email, fullname, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&token.secret)
        .bind(&token.nusid)
        .bind(&token.email)
        .bind(&token.fullname)
        .bind(&token.status)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }
}
