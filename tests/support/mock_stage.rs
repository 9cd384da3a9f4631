use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use echogate::{Acknowledge, EventRequest, Forward, Stage, StageResponse};

/// Transparent stage that records its name before forwarding, so tests can
/// assert the order stages ran in.
pub struct NamedStage {
    name: &'static str,
    seen: Arc<Mutex<Vec<&'static str>>>,
}

impl NamedStage {
    pub fn new(name: &'static str, seen: Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self { name, seen }
    }
}

#[async_trait]
impl Stage for NamedStage {
    async fn process(
        &self,
        _request: &EventRequest,
        _acknowledge: Acknowledge<'_>,
        forward: Forward<'_>,
    ) -> anyhow::Result<StageResponse> {
        self.seen.lock().unwrap().push(self.name);
        forward.call().await
    }
}

/// Stage that acknowledges every event, cutting the chain short.
pub struct AlwaysAckStage;

#[async_trait]
impl Stage for AlwaysAckStage {
    async fn process(
        &self,
        _request: &EventRequest,
        acknowledge: Acknowledge<'_>,
        _forward: Forward<'_>,
    ) -> anyhow::Result<StageResponse> {
        acknowledge.call().await
    }
}
