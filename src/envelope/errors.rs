//! Envelope construction errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::Envelope;
use crate::observability::{log_event_with_fields, Event};

/// Result type for envelope construction
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

/// Errors raised while building a response envelope
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// `result` must be a keyed object naming the data it carries
    #[error("Envelope data must be a JSON object, got {0}")]
    InvalidPayloadShape(&'static str),
}

impl EnvelopeError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            EnvelopeError::InvalidPayloadShape(_) => "SHOWDB_INVALID_PAYLOAD_SHAPE",
        }
    }
}

impl IntoResponse for EnvelopeError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        log_event_with_fields(Event::RequestFailed, &[("code", self.code()), ("message", &message)]);
        Envelope::status(StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shape_display() {
        let err = EnvelopeError::InvalidPayloadShape("array");
        assert!(err.to_string().contains("array"));
        assert_eq!(err.code(), "SHOWDB_INVALID_PAYLOAD_SHAPE");
    }

    #[test]
    fn test_into_response_is_server_error() {
        let response = EnvelopeError::InvalidPayloadShape("number").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
