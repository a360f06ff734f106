//! User model for storage and API.

use crate::jsonapi::{
    LinkBuilder, Relationship, RelationshipData, Resource, ResourceIdentifier,
};
use crate::models::Signup;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Registered user. At most one per NUSNET ID.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    /// NUSNET ID, copied from the token that created this user
    pub nusid: String,
    pub nickname: String,
    pub user_type: String,
    pub email: String,
    pub fullname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Not a column; filled in by `Db::load_signups` when needed.
    #[sqlx(skip)]
    pub signups: Vec<Signup>,
}

/// Fields required to insert a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub nusid: String,
    pub nickname: String,
    pub user_type: String,
    pub email: String,
    pub fullname: String,
}

/// Client-supplied user attributes. Anything else in the payload is ignored.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(length(min = 1, max = 64))]
    pub nickname: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
}

/// User attributes as rendered in API responses.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS), ts(export))]
pub struct UserAttributes {
    pub nusid: String,
    pub nickname: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub email: String,
    pub fullname: String,
}

impl Resource for User {
    const TYPE: &'static str = "user";

    fn id(&self) -> i64 {
        self.id
    }

    fn attributes(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(UserAttributes {
            nusid: self.nusid.clone(),
            nickname: self.nickname.clone(),
            user_type: self.user_type.clone(),
            email: self.email.clone(),
            fullname: self.fullname.clone(),
        })
    }

    fn relationships(&self, _links: LinkBuilder<'_>) -> BTreeMap<String, Relationship> {
        let signups = self
            .signups
            .iter()
            .map(|signup| ResourceIdentifier::new("signup", signup.id))
            .collect();

        BTreeMap::from([(
            "signups".to_string(),
            Relationship {
                data: Some(RelationshipData::Many(signups)),
                links: None,
            },
        )])
    }
}
