use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fennel_shortener::ShortenError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ShortenError> for ApiError {
    fn from(value: ShortenError) -> Self {
        match value {
            ShortenError::NotFound(_) => Self::NotFound,
            ShortenError::InvalidUrl(message) => Self::BadRequest(message),
            ShortenError::Store(message) => Self::Internal(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::Internal(ref message) => {
                // Store failures are surfaced, never swallowed, but the
                // detail stays out of the response body.
                error!(error = %message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
