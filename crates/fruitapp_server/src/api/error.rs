//! HTTP error mapping for repository failures.
//!
//! # Invariants
//! - Validation failures map to 400 with a JSON error body.
//! - Storage and corrupt-row failures map to 500 and are logged; the wire
//!   body never leaks SQL detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fruitapp_core::{FruitId, RepoError};
use log::error;
use serde_json::json;

/// Handler-level error carrying the HTTP status and client-facing message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(id: FruitId) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("fruit not found: {id}"),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            RepoError::Db(err) => {
                error!("event=repo_error module=api status=error kind=db error={err}");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "storage unavailable".to_string(),
                }
            }
            RepoError::InvalidData(message) => {
                error!("event=repo_error module=api status=error kind=invalid_data error={message}");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "invalid persisted data".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
