//! The coaching provider boundary trait and its error type.

use async_trait::async_trait;
use coach_core::{ChatMessage, PerformanceProfile, Recommendation};
use std::time::Duration;
use thiserror::Error;

/// Errors a coaching provider can produce.
///
/// The application layer treats every variant identically, as "the remote
/// call did not produce a usable result", and substitutes fallback
/// content. The variants exist so the failure can be logged precisely and
/// so callers that do retry (none in the core) can tell transient failures
/// from permanent ones.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// The request never produced an HTTP response (connect/timeout/DNS).
    #[error("Provider request failed: {message}")]
    Request {
        message: String,
        is_retryable: bool,
    },

    /// The service answered with a non-success status.
    #[error("Provider returned an error response: {message}")]
    Process {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// The response body could not be interpreted.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// The provider is missing required configuration.
    #[error("Provider configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    /// Whether retrying the same call could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request { is_retryable, .. } => *is_retryable,
            Self::Process { is_retryable, .. } => *is_retryable,
            Self::MalformedResponse(_) | Self::Configuration(_) => false,
        }
    }

    /// The HTTP status code behind this error, if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Process { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

/// The two operations the engine needs from a remote reasoning service.
///
/// Implementations must be cheap to share behind an `Arc`; the engine holds
/// one provider per panel and issues one call per generation request or
/// chat turn.
#[async_trait]
pub trait CoachingProvider: Send + Sync {
    /// Derives a recommendation batch from a performance profile.
    ///
    /// The profile is forwarded verbatim; shape interpretation is the
    /// service's concern.
    async fn recommendations(
        &self,
        profile: &PerformanceProfile,
    ) -> Result<Vec<Recommendation>, ProviderError>;

    /// Produces the coach's reply to one chat turn.
    ///
    /// `history` is the transcript prior to the current message; the
    /// message itself travels separately.
    async fn chat(
        &self,
        message: &str,
        profile: &PerformanceProfile,
        history: &[ChatMessage],
    ) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryability_per_variant() {
        let transient = ProviderError::Request {
            message: "connection refused".to_string(),
            is_retryable: true,
        };
        assert!(transient.is_retryable());

        let malformed = ProviderError::MalformedResponse("not json".to_string());
        assert!(!malformed.is_retryable());
    }

    #[test]
    fn test_status_code_only_on_process_errors() {
        let process = ProviderError::Process {
            status_code: Some(503),
            message: "unavailable".to_string(),
            is_retryable: true,
            retry_after: None,
        };
        assert_eq!(process.status_code(), Some(503));

        let config = ProviderError::Configuration("no api url".to_string());
        assert_eq!(config.status_code(), None);
    }
}
