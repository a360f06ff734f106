//! Token resource routes.

use crate::error::Result;
use crate::jsonapi::JsonApi;
use crate::middleware::RequestContext;
use crate::AppState;
use axum::{extract::State, routing::get, Extension, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/token/self", get(get_token_self))
}

/// Return the token used to authenticate this request.
async fn get_token_self(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<JsonApi> {
    JsonApi::ok(&ctx.token, state.links())
}
