use async_trait::async_trait;
use tracing::debug;

use crate::pipeline::{Acknowledge, EventRequest, Forward, Stage, StageResponse};

use super::self_event::SelfEventDetector;

/// Pipeline stage that short-circuits events generated by the bot itself.
///
/// Suppressed events are acknowledged to the transport so they are neither
/// retried nor reported as unhandled; everything else is forwarded
/// untouched. Malformed payloads degrade to forwarding rather than being
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct SelfEventFilterStage {
    detector: SelfEventDetector,
}

impl SelfEventFilterStage {
    pub fn new(detector: SelfEventDetector) -> Self {
        Self { detector }
    }
}

#[async_trait]
impl Stage for SelfEventFilterStage {
    async fn process(
        &self,
        request: &EventRequest,
        acknowledge: Acknowledge<'_>,
        forward: Forward<'_>,
    ) -> anyhow::Result<StageResponse> {
        let context = &request.context;
        let is_self = self.detector.is_self_event(
            context.authorization.as_ref(),
            context.actor_user_id.as_deref(),
            &request.body,
        );

        if is_self {
            // DEBUG tier only; the host's subscriber decides whether it shows.
            debug!(event = ?request.body.get("event"), "Skipped self event");
            acknowledge.call().await
        } else {
            forward.call().await
        }
    }
}
