//! Error types for issue tracker operations.

/// Errors that can occur while browsing issues.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied value cannot be used to build a request.
    ///
    /// Raised before any network activity takes place.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be completed (DNS, connect, timeout, body read).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The tracker answered with a non-success HTTP status.
    #[error("unexpected response status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, as returned by the tracker.
        body: String,
    },

    /// The response body does not match the expected JSON shape.
    #[error("failed to decode issues response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns true when the failure happened while talking to the tracker.
    ///
    /// Both connection level failures and non-success statuses count.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}

/// A specialized Result type for issue tracker operations.
pub type Result<T> = std::result::Result<T, Error>;
