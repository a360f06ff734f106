// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Authentication token model.

use crate::jsonapi::Resource;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Status value that allows a token to authorize requests.
pub const TOKEN_STATUS_ACTIVE: &str = "active";

/// Token row. Tokens are issued outside this API and only ever read here.
#[derive(Clone, sqlx::FromRow)]
pub struct Token {
    pub id: i64,
    pub secret: String,
    /// NUSNET ID of the token holder
    pub nusid: String,
    pub email: String,
    pub fullname: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Token {
    pub fn is_active(&self) -> bool {
        self.status == TOKEN_STATUS_ACTIVE
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("id", &self.id)
            .field("nusid", &self.nusid)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Fields required to store a new token.
#[derive(Debug, Clone)]
pub struct NewToken {
    pub secret: String,
    pub nusid: String,
    pub email: String,
    pub fullname: String,
    pub status: String,
}

#[derive(Serialize)]
struct TokenAttributes<'a> {
    nusid: &'a str,
    email: &'a str,
    fullname: &'a str,
    status: &'a str,
}

impl Resource for Token {
    const TYPE: &'static str = "token";

    fn id(&self) -> i64 {
        self.id
    }

    // The secret never leaves the server.
    fn attributes(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(TokenAttributes {
            nusid: &self.nusid,
            email: &self.email,
            fullname: &self.fullname,
            status: &self.status,
        })
    }
}
