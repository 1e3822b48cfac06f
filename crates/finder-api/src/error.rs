//! API error types and JSON error bodies.
//!
//! Dialog failures are answered in speech by the skill itself; only envelopes
//! that cannot be read or callers that are not allowed in end up here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use finder_dialog::DialogError;

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g. "bad_request", "forbidden").
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug)]
pub enum ApiError {
    /// 400 - the body is not a readable request envelope.
    BadRequest(String),
    /// 403 - the envelope was issued for another application id.
    Forbidden(String),
    /// 413 - the body exceeds the configured limit.
    PayloadTooLarge(String),
    /// 500 - unexpected server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg),
            ApiError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", msg)
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DialogError> for ApiError {
    fn from(err: DialogError) -> Self {
        match err {
            DialogError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_is_bad_request() {
        let err: ApiError = DialogError::InvalidRequest("no intent".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(msg) if msg == "no intent"));
    }

    #[test]
    fn test_other_dialog_errors_are_internal() {
        let err: ApiError = DialogError::Storage("disk full".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_forbidden_status() {
        let resp = ApiError::Forbidden("wrong skill".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
