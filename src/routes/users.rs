// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User resource routes.
//!
//! ```text
//! GET    /api/user/self
//! POST   /api/user
//! GET    /api/user/{id}
//! PATCH  /api/user          (target id taken from the payload)
//! DELETE /api/user/self     (also /api/user/{id}; always deletes the caller)
//! ```

use crate::error::{AppError, Result};
use crate::jsonapi::{self, JsonApi, Resource};
use crate::middleware::RequestContext;
use crate::models::user::UserRequest;
use crate::models::{NewUser, User};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use validator::Validate;

const USER_EXISTS: &str = "a user linked to this NUSNET ID has been created before";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/user",
            post(create_user).patch(update_user).put(update_user),
        )
        .route("/api/user/self", get(get_self).delete(delete_self))
        .route("/api/user/{id}", get(get_user).delete(delete_self))
}

fn parse_user_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid user id: {raw}")))
}

fn validate(request: &UserRequest) -> Result<()> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Get the caller's own user.
async fn get_self(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<JsonApi> {
    // 404 tells the client it still has to create the user.
    let mut user = ctx
        .user
        .ok_or_else(|| AppError::NotFound("user has not been created".to_string()))?;

    user.signups = state.db.load_signups(user.id).await?;
    JsonApi::ok(&user, state.links())
}

/// Create the user for the caller's token.
///
/// Only `nickname` and `type` are taken from the request; identity fields
/// come from the token.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    body: Bytes,
) -> Result<JsonApi> {
    if ctx.user.is_some() {
        return Err(AppError::Forbidden(USER_EXISTS.to_string()));
    }

    let payload = jsonapi::parse_payload::<UserRequest>(&body, User::TYPE)?;
    validate(&payload.attributes)?;

    let UserRequest {
        nickname: Some(nickname),
        user_type: Some(user_type),
    } = payload.attributes
    else {
        return Err(AppError::BadRequest(
            "nickname and type MUST be provided".to_string(),
        ));
    };

    let new_user = NewUser {
        nusid: ctx.token.nusid.clone(),
        nickname,
        user_type,
        email: ctx.token.email.clone(),
        fullname: ctx.token.fullname.clone(),
    };

    let user = state
        .db
        .insert_user(&new_user)
        .await?
        .ok_or_else(|| AppError::Forbidden(USER_EXISTS.to_string()))?;

    tracing::info!(user_id = user.id, nusid = %user.nusid, "User created");
    JsonApi::created(&user, state.links())
}

/// Get any user by id.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<JsonApi> {
    let id = parse_user_id(&id)?;
    let mut user = state
        .db
        .find_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound("user does not exist".to_string()))?;

    user.signups = state.db.load_signups(user.id).await?;
    JsonApi::ok(&user, state.links())
}

/// Update the caller's user. Only the nickname can change.
///
/// Responds with the record as it was before the update.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    body: Bytes,
) -> Result<JsonApi> {
    let payload = jsonapi::parse_payload::<UserRequest>(&body, User::TYPE)?;
    // A missing data.id is rejected as 400 rather than looked up as id 0.
    let id = payload.numeric_id()?;

    let user = state
        .db
        .find_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound("user does not exist".to_string()))?;

    if ctx.token.nusid != user.nusid {
        return Err(AppError::Forbidden(
            "you can only update your own data".to_string(),
        ));
    }

    if let Some(nickname) = &payload.attributes.nickname {
        validate(&payload.attributes)?;
        state.db.update_user_nickname(user.id, nickname).await?;
        tracing::info!(user_id = user.id, "User nickname updated");
    }

    JsonApi::ok(&user, state.links())
}

/// Delete the caller's user. A path id, if any, is ignored.
async fn delete_self(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<StatusCode> {
    let user = ctx.user.ok_or_else(|| {
        AppError::Forbidden("you have to be a registered user to terminate yourself".to_string())
    })?;

    state.db.delete_user(user.id).await?;

    tracing::info!(user_id = user.id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
