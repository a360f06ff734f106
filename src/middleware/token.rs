// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token authentication middleware.
//!
//! Resolves the `X-Token-ID` / `X-Token-Secret` headers to an active
//! [`Token`] and, when one exists, the [`User`] registered under the same
//! NUSNET ID. Both are handed to handlers as a [`RequestContext`] request
//! extension.

use crate::db::Db;
use crate::error::{AppError, Result};
use crate::models::{Token, User};
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

pub const TOKEN_ID_HEADER: &str = "x-token-id";
pub const TOKEN_SECRET_HEADER: &str = "x-token-secret";

/// Per-request authentication state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub token: Token,
    /// `None` if the token holder has not created a user yet.
    pub user: Option<User>,
}

/// Credentials as sent by the client.
#[derive(Debug)]
struct TokenCredentials {
    id: i64,
    secret: String,
}

impl TokenCredentials {
    /// Read the credentials in order: the id must be present and positive
    /// before the secret is looked at.
    fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let id: i64 = header_str(headers, TOKEN_ID_HEADER)
            .and_then(|value| value.trim().parse().ok())
            .ok_or_else(token_missing)?;

        if id <= 0 {
            return Err(AppError::BadRequest("invalid token ID".to_string()));
        }

        let secret = header_str(headers, TOKEN_SECRET_HEADER)
            .ok_or_else(token_missing)?
            .to_string();

        Ok(Self { id, secret })
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name)?.to_str().ok()
}

fn token_missing() -> AppError {
    AppError::Unauthorized("token missing".to_string())
}

/// Resolve request headers to a [`RequestContext`].
pub async fn authenticate(db: &Db, headers: &HeaderMap) -> Result<RequestContext> {
    let credentials = TokenCredentials::from_headers(headers)?;

    let token = db
        .find_token(credentials.id, &credentials.secret)
        .await?
        .ok_or_else(|| AppError::Unauthorized("invalid token information".to_string()))?;

    if !token.is_active() {
        tracing::warn!(token_id = token.id, status = %token.status, "Rejected inactive token");
        return Err(AppError::Unauthorized("token is not active".to_string()));
    }

    // No user yet is fine: the client is expected to create one.
    let user = db.find_user_by_nusid(&token.nusid).await?;

    tracing::debug!(
        token_id = token.id,
        user_id = user.as_ref().map(|u| u.id),
        "Token authenticated"
    );

    Ok(RequestContext { token, user })
}

/// Middleware that requires a valid, active token.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let context = authenticate(&state.db, request.headers()).await?;
    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}
