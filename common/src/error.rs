//! The single failure kind of a startup fetch.

use thiserror::Error;

/// Why a fetch failed. All causes are handled the same way (logged, last good
/// list kept); the cause is carried for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with HTTP {status}")]
    Status { status: u16 },
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// 401/403: most likely an expired or missing token.
    pub fn is_auth(&self) -> bool {
        matches!(self, FetchError::Status { status: 401 | 403 })
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}
