// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User operations.

use super::{is_unique_violation, Db};
use crate::error::AppError;
use crate::models::{NewUser, User};

impl Db {
    /// Get a user by primary key.
    pub async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the user registered under a NUSNET ID.
    pub async fn find_user_by_nusid(&self, nusid: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE nusid = ?")
            .bind(nusid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a user.
    ///
    /// Returns `None` if a user with the same NUSNET ID already exists.
    pub async fn insert_user(&self, user: &NewUser) -> Result<Option<User>, AppError> {
        let now = chrono::Utc::now();
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (nusid, nickname, user_type, email, fullname, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&user.nusid)
        .bind(&user.nickname)
        .bind(&user.user_type)
        .bind(&user.email)
        .bind(&user.fullname)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(Some(user)),
            Err(e) if is_unique_violation(&e) => Ok(None),
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    /// Update the nickname column only.
    pub async fn update_user_nickname(&self, id: i64, nickname: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET nickname = ?, updated_at = ? WHERE id = ?")
            .bind(nickname)
            .bind(chrono::Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a user. Their signups and organized events go with them.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
