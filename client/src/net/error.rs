//! Failure classification for provider fetches.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a provider request did not yield usable data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ProviderError {
    /// Map a non-success HTTP status onto an error.
    pub fn from_status(status: u16) -> Self {
        Self::Status(status)
    }

    /// Whether the failure means "nobody is signed in" rather than an outage.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}
