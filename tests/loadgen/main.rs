//! Load generator integration tests.
//!
//! Everything runs in-process: stub dispatchers for the driver and replay
//! paths, and a loopback axum server for the HTTP dispatcher and the
//! session scenario.

mod driver;
mod http_dispatch;
mod replay;
mod scenario;
mod stub_server;
