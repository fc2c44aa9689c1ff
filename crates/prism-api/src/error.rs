use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use prism_types::api::ErrorBody;

/// Everything a handler can fail with. Each variant carries the literal
/// message the client contract expects; nothing propagates past the
/// handler boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required input.
    #[error("{0}")]
    Validation(&'static str),

    /// Body that could not be parsed as the endpoint's JSON shape.
    #[error("{0}")]
    BadBody(String),

    /// Duplicate username on registration.
    #[error("{0}")]
    Conflict(&'static str),

    /// Bad credentials. Deliberately the same message for unknown user
    /// and wrong password.
    #[error("{0}")]
    Unauthorized(&'static str),

    /// No user with the requested uid.
    #[error("{0}")]
    NotFound(&'static str),

    /// Wrong HTTP verb for the route.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Store connectivity failure or any other uncaught fault.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadBody(_) | ApiError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Extractor rejections stay inside the `{"error": ...}` contract instead
/// of leaking axum's plain-text bodies.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            error!("Unhandled failure: {:#}", e);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
