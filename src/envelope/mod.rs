//! # Response Envelope
//!
//! Every response leaving the API has the same shape:
//!
//! ```json
//! { "code": 200, "success": true, "message": "", "result": { "shows": [] } }
//! ```
//!
//! - `success` is derived from `code` (`200 <= code < 300`), never supplied
//! - `result` is either `null` or a keyed object (`{"shows": [...]}`,
//!   a single record), never a bare array or scalar
//! - `code` doubles as the HTTP status of the transport response

mod errors;

pub use errors::{EnvelopeError, EnvelopeResult};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: u16,
    pub success: bool,
    pub message: String,
    pub result: Option<Value>,
}

impl Envelope {
    /// Build an envelope from optional data, a status and a message.
    ///
    /// Fails with [`EnvelopeError::InvalidPayloadShape`] when `data` is present
    /// but is not a JSON object.
    pub fn new(
        data: Option<Value>,
        status: StatusCode,
        message: impl Into<String>,
    ) -> EnvelopeResult<Self> {
        if let Some(value) = &data {
            if !value.is_object() {
                return Err(EnvelopeError::InvalidPayloadShape(json_kind(value)));
            }
        }

        Ok(Self {
            code: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            result: data,
        })
    }

    /// 200 with data and an empty message
    pub fn ok(data: Value) -> EnvelopeResult<Self> {
        Self::new(Some(data), StatusCode::OK, "")
    }

    /// Envelope without a result. Cannot fail.
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            result: None,
        }
    }

    /// HTTP status carried by this envelope
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_derived_from_status() {
        for code in [100u16, 199, 200, 201, 204, 299, 300, 301, 404, 422, 500] {
            let status = StatusCode::from_u16(code).unwrap();
            let envelope = Envelope::new(None, status, "").unwrap();
            assert_eq!(envelope.code, code);
            assert_eq!(envelope.success, (200..300).contains(&code), "code {}", code);
        }
    }

    #[test]
    fn test_non_object_data_rejected() {
        for data in [json!([1, 2]), json!(3), json!("shows"), json!(true), Value::Null] {
            let err = Envelope::new(Some(data), StatusCode::OK, "").unwrap_err();
            assert!(matches!(err, EnvelopeError::InvalidPayloadShape(_)));
        }
    }

    #[test]
    fn test_ok_defaults() {
        let envelope = Envelope::ok(json!({"content": "hello world!"})).unwrap();
        assert_eq!(envelope.code, 200);
        assert!(envelope.success);
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.result, Some(json!({"content": "hello world!"})));
    }

    #[test]
    fn test_missing_result_serializes_as_null() {
        let envelope = Envelope::status(StatusCode::NOT_FOUND, "No show with this id exists");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "code": 404,
                "success": false,
                "message": "No show with this id exists",
                "result": null
            })
        );
    }

    #[test]
    fn test_into_response_uses_code_as_status() {
        let response = Envelope::status(StatusCode::UNPROCESSABLE_ENTITY, "nope").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
