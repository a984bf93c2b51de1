//! Error types for port operations.

/// Spell source failures, one per request.
///
/// The Aggregator decides what a failure means: fatal for the class list,
/// recovered for everything below it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// The provider answered with a non-success status.
    #[error("Request to {endpoint} failed with status {status}")]
    RequestFailed { endpoint: String, status: u16 },

    /// The request never produced a response (connect, timeout, TLS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The body did not decode into the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl SourceError {
    pub fn request_failed(endpoint: impl ToString, status: u16) -> Self {
        Self::RequestFailed {
            endpoint: endpoint.to_string(),
            status,
        }
    }

    pub fn network(message: impl ToString) -> Self {
        Self::Network(message.to_string())
    }

    pub fn malformed(message: impl ToString) -> Self {
        Self::MalformedResponse(message.to_string())
    }

    /// Check if the provider answered but the payload was unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}
