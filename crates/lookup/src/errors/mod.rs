//! Error types and retry classification for the lookup crate.
//!
//! This module provides:
//! - [`GatewayError`]: failures reported by a [`LookupGateway`](crate::gateway::LookupGateway)
//! - [`LookupError`]: the outcome surfaced by [`CompoundResolver::resolve`](crate::resolver::CompoundResolver::resolve)
//! - [`RetryClass`]: classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors returned by a lookup gateway operation.
///
/// `Status` is an expected outcome (the service answered, just not with
/// success) and is routed through the resolver's state machine. The other
/// variants are transport-level and abort the resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The service answered with a non-success HTTP status.
    #[error("Unsuccessful response: HTTP {status}")]
    Status {
        /// The HTTP status code returned by the service
        status: u16,
    },

    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Returns true for an answered-but-unsuccessful request.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Errors that can occur while resolving a compound query.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The query was rejected before any network call.
    #[error("{0}")]
    InvalidQuery(String),

    /// No data was found at some search stage.
    /// The message is fixed per failure site and safe to show to users.
    #[error("{0}")]
    LookupFailed(String),

    /// An unexpected I/O-level failure while talking to the gateway.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl LookupError {
    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chemtrack_lookup::errors::{LookupError, RetryClass};
    ///
    /// let error = LookupError::Transport("connection refused".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = LookupError::LookupFailed("No matches found in PubChem".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::InvalidQuery(_) | Self::LookupFailed(_) => RetryClass::Never,
            Self::Transport(_) => RetryClass::WithBackoff,
        }
    }
}

impl From<GatewayError> for LookupError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Transport(message) | GatewayError::Decode(message) => {
                Self::Transport(message)
            }
            GatewayError::Status { status } => Self::Transport(format!("HTTP {}", status)),
        }
    }
}
