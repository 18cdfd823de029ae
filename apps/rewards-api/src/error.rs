//! Error types for the Rewards API.
//!
//! The error taxonomy at the boundary is deliberately coarse: a submitted
//! receipt is either accepted or invalid, and a points lookup either finds
//! the id or it does not. The core never surfaces a rejection reason, so
//! the HTTP layer owns the user-facing wording.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Rewards API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The submitted receipt failed validation (or could not be read as a
    /// receipt at all).
    #[error("The receipt is invalid")]
    InvalidReceipt,

    /// No stored receipt under the requested identifier.
    #[error("No receipt found for that id")]
    ReceiptNotFound,
}

impl ApiError {
    /// The HTTP status this error maps to.
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidReceipt => StatusCode::BAD_REQUEST,
            ApiError::ReceiptNotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::InvalidReceipt.to_string(), "The receipt is invalid");
        assert_eq!(
            ApiError::ReceiptNotFound.to_string(),
            "No receipt found for that id"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidReceipt.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ReceiptNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
