//! Stub [`Dispatcher`]s for exercising the driver and replay paths without a network.
//!
//! Used by the unit tests in this crate and by the integration tests under `tests/`.

use async_trait::async_trait;
use ingest_dispatch::{DispatchResult, Dispatcher};
use ingest_generator::Envelope;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Answers every envelope with the same status code.
#[derive(Debug, Default)]
pub struct FixedStatusDispatcher {
    status: u16,
    calls: AtomicUsize,
}

impl FixedStatusDispatcher {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dispatcher for FixedStatusDispatcher {
    async fn send(&self, _envelope: &Envelope) -> DispatchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DispatchResult::Status(self.status)
    }
}

/// Answers 200, 500, 200, 500, ... in call order.
#[derive(Debug, Default)]
pub struct AlternatingDispatcher {
    calls: AtomicUsize,
}

impl AlternatingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dispatcher for AlternatingDispatcher {
    async fn send(&self, _envelope: &Envelope) -> DispatchResult {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        // Yield so concurrent units interleave
        tokio::task::yield_now().await;
        if call % 2 == 0 {
            DispatchResult::Status(200)
        } else {
            DispatchResult::Status(500)
        }
    }
}

/// Keeps a copy of every envelope and answers 200.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    envelopes: Mutex<Vec<Envelope>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn envelopes(&self) -> Vec<Envelope> {
        self.envelopes.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn send(&self, envelope: &Envelope) -> DispatchResult {
        if let Ok(mut envelopes) = self.envelopes.lock() {
            envelopes.push(envelope.clone());
        }
        DispatchResult::Status(200)
    }
}

/// Holds each send open for `delay` and tracks the peak number of concurrent sends.
#[derive(Debug, Default)]
pub struct ConcurrencyProbe {
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ConcurrencyProbe {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dispatcher for ConcurrencyProbe {
    async fn send(&self, _envelope: &Envelope) -> DispatchResult {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        DispatchResult::Status(204)
    }
}
