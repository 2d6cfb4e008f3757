//! Booking API errors
//!
//! Every failure, including malformed request bodies and query strings, is
//! answered with an [`ErrorBody`] (`{ "detail": "..." }`), the body format
//! the booking client reads its messages from.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unknown table or booking (404)
    #[error("{0}")]
    NotFound(String),

    /// Request rejected by a booking rule (400)
    #[error("{0}")]
    BadRequest(String),

    /// Request could not be decoded (status chosen by the extractor)
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidRequest { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, detail = %self, "Request rejected");
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
