//! # Show Errors
//!
//! Every variant is answered with an envelope; none of them stop the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::datastore::DatastoreError;
use crate::envelope::{Envelope, EnvelopeError};
use crate::observability::{log_event_with_fields, Event};

/// Result type for show operations
pub type ShowResult<T> = Result<T, ShowError>;

/// Errors raised by the show handlers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No record with the requested id
    #[error("No show with this id exists")]
    NotFound,

    /// Create body lacks `name`
    #[error("Please provide a show name")]
    MissingName,

    /// Create body lacks `episodes_seen`
    #[error("Please provide number of episodes seen")]
    MissingEpisodesSeen,

    /// Update body is not a JSON object
    #[error("Please provide the fields to update")]
    InvalidPatch,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Handler tried to wrap a non-object result
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// Datastore failure
    #[error(transparent)]
    Datastore(DatastoreError),
}

impl From<DatastoreError> for ShowError {
    fn from(err: DatastoreError) -> Self {
        match err {
            // The record vanished between the existence check and the write
            DatastoreError::NotFound { .. } => ShowError::NotFound,
            other => ShowError::Datastore(other),
        }
    }
}

impl ShowError {
    /// Get HTTP status code for this error
    ///
    /// Client mistakes answer 4xx. A malformed envelope payload or a datastore
    /// fault is never caused by the request, so those answer 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShowError::NotFound => StatusCode::NOT_FOUND,
            ShowError::MissingName
            | ShowError::MissingEpisodesSeen
            | ShowError::InvalidPatch => StatusCode::UNPROCESSABLE_ENTITY,
            ShowError::Envelope(_) | ShowError::Datastore(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Envelope sent back to the client
    pub fn to_envelope(&self) -> Envelope {
        Envelope::status(self.status_code(), self.to_string())
    }
}

impl IntoResponse for ShowError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = status.as_u16().to_string();
        let message = self.to_string();
        let event = if status.is_server_error() {
            Event::RequestFailed
        } else {
            Event::RequestRejected
        };
        log_event_with_fields(event, &[("status", &code), ("message", &message)]);

        self.to_envelope().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ShowError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ShowError::MissingName.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ShowError::MissingEpisodesSeen.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ShowError::from(DatastoreError::LockPoisoned).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ShowError::from(DatastoreError::IdsExhausted {
                collection: "shows".to_string(),
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_datastore_not_found_maps_to_not_found() {
        let err = ShowError::from(DatastoreError::NotFound {
            collection: "shows".to_string(),
            id: 3,
        });
        assert_eq!(err, ShowError::NotFound);
    }

    #[test]
    fn test_envelope_carries_message() {
        let envelope = ShowError::MissingName.to_envelope();
        assert_eq!(envelope.code, 422);
        assert!(!envelope.success);
        assert_eq!(envelope.message, "Please provide a show name");
        assert_eq!(envelope.result, None);
    }
}
