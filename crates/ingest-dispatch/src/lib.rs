//! Request dispatcher for the ingest load generator.
//!
//! A [`Dispatcher`] turns one [`Envelope`] into one outbound request and
//! reports what happened as a [`DispatchResult`]. Transport failures are
//! values, never errors: the caller decides how to classify them.
//!
//! - [`HttpDispatcher`] - POSTs the JSON envelope to a fixed endpoint
//! - [`SessionClient`] - register/login/poll client used by the session scenario
//!
//! Nothing here retries. Non-2xx responses are reported as plain status codes.

pub mod config;
pub mod error;
pub mod http;
pub mod result;
pub mod session;

pub use config::DispatchConfig;
pub use error::{DispatchError, SessionError};
pub use http::HttpDispatcher;
pub use result::DispatchResult;
pub use session::SessionClient;

use async_trait::async_trait;
use ingest_generator::Envelope;

/// Sends envelopes somewhere and reports the outcome.
///
/// Implementations must not fail: every transport problem is folded into
/// [`DispatchResult::Error`].
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Send one envelope.
    async fn send(&self, envelope: &Envelope) -> DispatchResult;
}
