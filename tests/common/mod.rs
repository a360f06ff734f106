// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use schrodinger_box::config::Config;
use schrodinger_box::db::Db;
use schrodinger_box::jsonapi::MEDIA_TYPE;
use schrodinger_box::middleware::token::{TOKEN_ID_HEADER, TOKEN_SECRET_HEADER};
use schrodinger_box::models::{NewToken, NewUser, Token, User};
use schrodinger_box::routes::create_router;
use schrodinger_box::AppState;
use std::sync::Arc;

/// Create a test app backed by a fresh in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = Db::in_memory()
        .await
        .expect("Failed to create in-memory database");

    let state = Arc::new(AppState { config, db });

    (create_router(state.clone()), state)
}

/// Store a token for `nusid` with the given status.
#[allow(dead_code)]
pub async fn seed_token(db: &Db, nusid: &str, status: &str) -> Token {
    db.insert_token(&NewToken {
        secret: format!("secret-{nusid}"),
        nusid: nusid.to_string(),
        email: format!("{}@u.nus.edu", nusid.to_lowercase()),
        fullname: format!("Student {nusid}"),
        status: status.to_string(),
    })
    .await
    .expect("Failed to insert token")
}

/// Register a user for the holder of `token`.
#[allow(dead_code)]
pub async fn seed_user(db: &Db, token: &Token, nickname: &str) -> User {
    db.insert_user(&NewUser {
        nusid: token.nusid.clone(),
        nickname: nickname.to_string(),
        user_type: "student".to_string(),
        email: token.email.clone(),
        fullname: token.fullname.clone(),
    })
    .await
    .expect("Failed to insert user")
    .expect("User already exists")
}

/// Build a request carrying `token`'s credentials.
#[allow(dead_code)]
pub fn authed_request(
    method: &str,
    uri: &str,
    token: &Token,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(TOKEN_ID_HEADER, token.id.to_string())
        .header(TOKEN_SECRET_HEADER, &token.secret);

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, MEDIA_TYPE)
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

/// The `detail` of the first JSON:API error in `body`.
#[allow(dead_code)]
pub fn error_detail(body: &serde_json::Value) -> &str {
    body["errors"][0]["detail"].as_str().unwrap_or_default()
}
