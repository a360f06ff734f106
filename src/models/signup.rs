//! Signup model: a user's registration for an event.

use chrono::{DateTime, Utc};

/// Signup row linking a user to an event.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Signup {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
