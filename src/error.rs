//! Probe error types
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// Error produced by a single HTTP probe.
///
/// Every variant is caught at the check boundary and rendered into a failed
/// check line; nothing propagates past the check that produced it.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request exceeded its deadline
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection refused, DNS failure or another transport error
    #[error("connection failed: {0}")]
    Network(String),

    /// Endpoint responded with a non-success HTTP status
    #[error("HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Body failed to parse or a required JSON field is missing
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Model listing parsed but no entry matched the target name
    #[error("model {model} not found ({available} models listed)")]
    ModelNotFound {
        /// Target model name substring
        model: String,
        /// Number of models the endpoint listed
        available: usize,
    },
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
