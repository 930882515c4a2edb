//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values and need no
//! database.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use flavors_api::error::AppError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn database_error_returns_500_with_raw_message() {
    let err = AppError::Database(sqlx::Error::PoolClosed);
    let expected = sqlx::Error::PoolClosed.to_string();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], expected);
}

#[tokio::test]
async fn every_store_failure_collapses_to_500() {
    let errors = [
        sqlx::Error::PoolTimedOut,
        sqlx::Error::RowNotFound,
        sqlx::Error::Protocol("unexpected message".into()),
    ];

    for err in errors {
        let (status, json) = error_to_response(AppError::from(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].is_string());
    }
}

#[tokio::test]
async fn bad_request_returns_400() {
    let err = AppError::BadRequest("invalid body".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid body");
}

#[tokio::test]
async fn error_body_has_only_error_field() {
    let (_, json) = error_to_response(AppError::BadRequest("x".into())).await;
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert!(obj.contains_key("error"));
}
