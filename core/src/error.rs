//! Error types shared by every service in this crate.
//!
//! # Design
//! Remote failures keep the numeric status next to the rendered diagnostic
//! so callers can branch on the code without parsing the message. Decode
//! failures carry the original `serde_json::Error` untouched.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A caller-supplied argument was rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A success response carried a body that is not the expected JSON.
    #[error("deserialization failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The transport could not complete the exchange.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ServiceError {
    /// The originating HTTP status, for remote failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_message_verbatim() {
        let err = ServiceError::Status {
            status: 404,
            message: "Received a failure response from service: 404 NotFound. Body: (null)"
                .to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Received a failure response from service: 404 NotFound. Body: (null)"
        );
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn non_status_errors_have_no_status_code() {
        let err = ServiceError::InvalidArgument("City cannot be empty.".to_string());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.to_string(), "invalid argument: City cannot be empty.");
    }

    #[test]
    fn json_errors_convert_to_decode() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ServiceError = json_err.into();
        assert!(matches!(err, ServiceError::Decode(_)));
    }
}
