use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use echogate::{EventHandler, EventRequest, StageResponse};

/// Downstream handler that counts invocations and returns a fixed response.
pub struct RecordingHandler {
    calls: AtomicUsize,
    response: StageResponse,
}

impl RecordingHandler {
    pub fn new(response: StageResponse) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventHandler for RecordingHandler {
    async fn handle(&self, _request: &EventRequest) -> anyhow::Result<StageResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Downstream handler that always fails.
pub struct FailingHandler;

#[async_trait]
impl EventHandler for FailingHandler {
    async fn handle(&self, _request: &EventRequest) -> anyhow::Result<StageResponse> {
        Err(anyhow::anyhow!("listener blew up"))
    }
}
