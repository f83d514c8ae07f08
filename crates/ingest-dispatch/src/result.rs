//! Outcome of a single dispatch.

use serde::Serialize;

/// Either the HTTP status code the endpoint answered with, or a description
/// of the transport failure that prevented an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchResult {
    Status(u16),
    Error(String),
}

impl DispatchResult {
    /// Whether this result falls in the success band `[200, 300)`.
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Status(code) if (200..300).contains(code))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            DispatchResult::Status(code) => Some(*code),
            DispatchResult::Error(_) => None,
        }
    }
}

impl std::fmt::Display for DispatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchResult::Status(code) => write!(f, "status {code}"),
            DispatchResult::Error(e) => write!(f, "error: {e}"),
        }
    }
}
