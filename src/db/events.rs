// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event operations.
//!
//! Locations are encoded on the way in and decoded on the way out, so
//! callers only ever see [`Event`] with a typed [`crate::models::Location`].

use super::Db;
use crate::error::AppError;
use crate::models::{Event, EventRow, NewEvent};

impl Db {
    /// Get an event by primary key.
    pub async fn find_event(&self, id: i64) -> Result<Option<Event>, AppError> {
        let row = sqlx::query_as::<_, EventRow>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        row.load_location().map(Some).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Event {} has an unreadable location: {}", id, e))
        })
    }

    /// Insert an event.
    pub async fn insert_event(&self, event: &NewEvent) -> Result<Event, AppError> {
        let location_json = event.location.save()?;
        let now = chrono::Utc::now();

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events
                (title, time_begin, time_end, location_json, event_type, organizer_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&event.title)
        .bind(event.time_begin)
        .bind(event.time_end)
        .bind(location_json)
        .bind(&event.event_type)
        .bind(event.organizer_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.load_location()?)
    }

    /// Delete an event and its signups.
    pub async fn delete_event(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_find_event_with_corrupt_location() {
        let db = Db::in_memory().await.unwrap();
        let organizer = db
            .insert_user(&NewUser {
                nusid: "E0300001".to_string(),
                nickname: "Host".to_string(),
                user_type: "student".to_string(),
                email: "host@u.nus.edu".to_string(),
                fullname: "Host Person".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        let now = chrono::Utc::now();
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO events
                (title, time_begin, time_end, location_json, event_type, organizer_id, created_at, updated_at)
            VALUES ('Broken', ?, ?, '{"type":"hybrid"}', 'social', ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(organizer.id)
        .bind(now)
        .bind(now)
        .fetch_one(&db.pool)
        .await
        .unwrap();

        let err = db.find_event(id).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)), "{err:?}");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
