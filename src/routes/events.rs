// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event resource routes.

use crate::error::{AppError, Result};
use crate::jsonapi::{self, JsonApi, Resource};
use crate::middleware::RequestContext;
use crate::models::event::EventRequest;
use crate::models::{Event, NewEvent, User};
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

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/event", post(create_event))
        .route("/api/event/{id}", get(get_event).delete(delete_event))
}

fn parse_event_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid event id: {raw}")))
}

fn registered_user(ctx: RequestContext, action: &str) -> Result<User> {
    ctx.user.ok_or_else(|| {
        AppError::Forbidden(format!("you have to be a registered user to {action}"))
    })
}

/// Get an event by id.
async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<JsonApi> {
    let id = parse_event_id(&id)?;
    let event = state
        .db
        .find_event(id)
        .await?
        .ok_or_else(|| AppError::NotFound("event does not exist".to_string()))?;

    JsonApi::ok(&event, state.links())
}

/// Create an event organized by the caller.
async fn create_event(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    body: Bytes,
) -> Result<JsonApi> {
    let organizer = registered_user(ctx, "create events")?;

    let payload = jsonapi::parse_payload::<EventRequest>(&body, Event::TYPE)?;
    payload
        .attributes
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let EventRequest {
        title: Some(title),
        time_begin: Some(time_begin),
        time_end: Some(time_end),
        location: Some(location),
        event_type: Some(event_type),
    } = payload.attributes
    else {
        return Err(AppError::BadRequest(
            "title, time_begin, time_end, location and type MUST be provided".to_string(),
        ));
    };

    if time_end < time_begin {
        return Err(AppError::BadRequest(
            "time_end must not be earlier than time_begin".to_string(),
        ));
    }

    let event = state
        .db
        .insert_event(&NewEvent {
            title,
            time_begin,
            time_end,
            location,
            event_type,
            organizer_id: organizer.id,
        })
        .await?;

    tracing::info!(event_id = event.id, organizer_id = organizer.id, "Event created");
    JsonApi::created(&event, state.links())
}

/// Delete an event. Only its organizer may do so.
async fn delete_event(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let user = registered_user(ctx, "delete events")?;
    let id = parse_event_id(&id)?;

    let event = state
        .db
        .find_event(id)
        .await?
        .ok_or_else(|| AppError::NotFound("event does not exist".to_string()))?;

    if !event.is_organized_by(&user) {
        return Err(AppError::Forbidden(
            "you can only delete your own events".to_string(),
        ));
    }

    state.db.delete_event(event.id).await?;

    tracing::info!(event_id = event.id, "Event deleted");
    Ok(StatusCode::NO_CONTENT)
}
