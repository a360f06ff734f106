// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use schrodinger_box::error::AppError;
use schrodinger_box::jsonapi::MEDIA_TYPE;

mod common;

#[test]
fn test_error_status_mapping() {
    let cases = [
        (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
        (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
        (AppError::Forbidden("x".into()), StatusCode::FORBIDDEN),
        (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
        (
            AppError::Database("x".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::Internal(anyhow::anyhow!("x")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, status) in cases {
        assert_eq!(err.status(), status, "{err}");
    }
}

#[tokio::test]
async fn test_error_response_body() {
    let response = AppError::Forbidden("you can only update your own data".into()).into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        MEDIA_TYPE
    );

    let body = common::body_json(response).await;
    assert_eq!(body["errors"][0]["status"], "403");
    assert_eq!(body["errors"][0]["title"], "Forbidden");
    assert_eq!(
        common::error_detail(&body),
        "you can only update your own data"
    );
}

#[tokio::test]
async fn test_database_error_details_are_not_leaked() {
    let response =
        AppError::Database("no such table: users (SELECT * FROM users)".into()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_json(response).await;
    assert_eq!(common::error_detail(&body), "database error");
}
