//! Errors returned by [`IdentityServiceClient`](crate::IdentityServiceClient).

use std::time::Duration;

use agidentity_api::ErrorResponse;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Everything that can go wrong with a call.
///
/// `Network` and `Timeout` mean the service was never heard from;
/// `Service` means it answered but not with what was asked for.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client was built with unusable settings.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// An input failed a local precondition; no request was sent.
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    /// Connecting to or talking with the service failed.
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service did not answer within the configured timeout.
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout {
        url: String,
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a failure status or a body that does not
    /// match the expected response type.
    #[error("{url} returned {status}: {message}")]
    Service {
        url: String,
        status: u16,
        /// Machine-readable code from an [`ErrorResponse`] body, if any.
        code: Option<String>,
        message: String,
    },
}

impl ClientError {
    /// `true` for transport failures, including timeouts.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// HTTP status of a `Service` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn transport(url: &str, timeout: Duration, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                timeout,
                source,
            }
        } else {
            Self::Network {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Build a `Service` error from a non-success response body.
    ///
    /// Prefers the structured `{error, code}` body; falls back to the raw
    /// text, then to the status reason phrase when the body is empty.
    pub(crate) fn from_error_body(url: &str, status: StatusCode, body: &str) -> Self {
        let (code, message) = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(e) => ((!e.code.is_empty()).then_some(e.code), e.error),
            Err(_) if !body.trim().is_empty() => (None, body.trim().to_string()),
            Err(_) => (
                None,
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            ),
        };
        Self::Service {
            url: url.to_string(),
            status: status.as_u16(),
            code,
            message,
        }
    }

    /// Build a `Service` error for a success response that failed to decode.
    pub(crate) fn undecodable(url: &str, status: StatusCode, err: serde_json::Error) -> Self {
        Self::Service {
            url: url.to_string(),
            status: status.as_u16(),
            code: None,
            message: format!("unexpected response body: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://localhost:3000/api/decrypt";

    #[test]
    fn structured_error_body() {
        let body = r#"{"error":"context mismatch","code":"decryption_failed"}"#;
        let err = ClientError::from_error_body(URL, StatusCode::BAD_REQUEST, body);
        match err {
            ClientError::Service {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(code.as_deref(), Some("decryption_failed"));
                assert_eq!(message, "context mismatch");
            }
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[test]
    fn plain_text_error_body() {
        let err = ClientError::from_error_body(URL, StatusCode::BAD_GATEWAY, "  upstream down\n");
        assert!(err.is_service());
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), format!("{URL} returned 502: upstream down"));
    }

    #[test]
    fn empty_error_body_uses_reason_phrase() {
        let err = ClientError::from_error_body(URL, StatusCode::INTERNAL_SERVER_ERROR, "");
        match err {
            ClientError::Service { code, message, .. } => {
                assert!(code.is_none());
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[test]
    fn validation_is_neither_network_nor_service() {
        let err = ClientError::Validation { field: "message" };
        assert!(!err.is_network());
        assert!(!err.is_service());
        assert_eq!(err.to_string(), "message must not be empty");
    }
}
