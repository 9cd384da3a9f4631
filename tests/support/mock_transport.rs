use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use echogate::{Acknowledger, StageResponse};

/// Acknowledger that counts invocations and answers with a canned response.
pub struct CountingAcknowledger {
    calls: AtomicUsize,
}

impl Default for CountingAcknowledger {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingAcknowledger {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Acknowledger for CountingAcknowledger {
    async fn acknowledge(&self) -> anyhow::Result<StageResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(StageResponse::ok("acknowledged"))
    }
}

/// Acknowledger whose transport is broken.
pub struct FailingAcknowledger;

#[async_trait]
impl Acknowledger for FailingAcknowledger {
    async fn acknowledge(&self) -> anyhow::Result<StageResponse> {
        Err(anyhow::anyhow!("transport unavailable"))
    }
}
