//! Error type for the items API client.
//!
//! # Design
//! One client-visible error kind. A call either succeeds with a 2xx response
//! or fails with `TransportError`; the client does not distinguish 4xx from
//! 5xx from a connection that never produced a response, and it does not
//! surface the response body's error detail. The `reason` string exists for
//! Display and logging only — callers must not branch on it.

use thiserror::Error;

/// Uniform failure raised when a remote call does not complete successfully.
#[derive(Debug, Error)]
#[error("item request failed: {reason}")]
pub struct TransportError {
    reason: String,
}

impl TransportError {
    pub(crate) fn status(status: reqwest::StatusCode) -> Self {
        Self {
            reason: format!("server responded with status {status}"),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_the_status_code() {
        let err = TransportError::status(reqwest::StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn is_a_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<TransportError>();
    }
}
