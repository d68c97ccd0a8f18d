use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use journal_core::errors::Error as CoreError;
use thiserror::Error;

use crate::models::ApiResponse;

/// Failure of a request. Every variant is reported to the client as a 500
/// with the uniform envelope; the underlying cause is only logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}: {source}")]
    Operation {
        message: &'static str,
        #[source]
        source: CoreError,
    },
    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("Invalid path parameter: {0}")]
    Path(#[from] PathRejection),
    #[error("Request timed out")]
    Timeout,
    #[error("Middleware failure: {0}")]
    Middleware(BoxError),
}

impl From<BoxError> for ApiError {
    fn from(err: BoxError) -> Self {
        if err.is::<tower::timeout::error::Elapsed>() {
            ApiError::Timeout
        } else {
            ApiError::Middleware(err)
        }
    }
}

impl ApiError {
    /// Message shown to the client.
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Operation { message, .. } => message,
            ApiError::Body(_) => "Invalid request body",
            ApiError::Path(_) => "Invalid id",
            ApiError::Timeout => "Request timed out",
            ApiError::Middleware(_) => "Request failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        let body = Json(ApiResponse::failure(self.public_message()));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error handler for fallible middleware such as the request timeout.
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    ApiError::from(err)
}

/// Attaches the fixed client-facing failure message of an operation to a
/// core result.
pub trait OrFail<T> {
    fn or_fail(self, message: &'static str) -> ApiResult<T>;
}

impl<T> OrFail<T> for journal_core::Result<T> {
    fn or_fail(self, message: &'static str) -> ApiResult<T> {
        self.map_err(|source| ApiError::Operation { message, source })
    }
}
