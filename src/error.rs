use std::any::Any;

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use log::error;
use sea_orm::DbErr;
use thiserror::Error;

use crate::responses::responses::MessageResponse;

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything a handler can fail with, mapped to a response exactly once
/// below. Store and anomaly details stay in the server log; clients only
/// ever see the generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("not authenticated")]
    Unauthorized,
    #[error("{0}")]
    Internal(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Not authenticated".to_string()),
            ApiError::Internal(detail) => {
                error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            ApiError::Database(err) => {
                error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };
        (status, Json(MessageResponse { message })).into_response()
    }
}

/// Last-resort handler for panics escaping a route, wired through
/// `CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Handler panicked: {}", detail);
    let body = serde_json::json!({ "message": "Something went wrong!" }).to_string();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}
