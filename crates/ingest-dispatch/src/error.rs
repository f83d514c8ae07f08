//! Error types for the dispatcher.

use thiserror::Error;

/// Configuration errors raised while building a dispatcher.
///
/// Sending never returns these; see [`crate::DispatchResult`].
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Endpoint is not a valid absolute URL
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Header name or value cannot be sent
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors from the register/login steps of a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Request never got an answer
    #[error("{step} request failed: {source}")]
    Transport {
        step: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{step} failed with status {status}: {body}")]
    Rejected {
        step: &'static str,
        status: u16,
        body: String,
    },

    /// Login succeeded but the response carried no token
    #[error("login response did not contain a token")]
    MissingToken,
}
