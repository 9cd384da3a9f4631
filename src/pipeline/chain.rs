use std::sync::Arc;

use async_trait::async_trait;

use super::request::EventRequest;
use super::response::StageResponse;
use super::stage::{Acknowledge, Forward, Stage, StageFuture};

/// Transport-side seam producing the terminal acknowledgement response.
///
/// Invoked when a stage decides the event is handled and must not travel
/// any further ("received, do not retry, do not treat as unhandled").
#[async_trait]
pub trait Acknowledger: Send + Sync {
    async fn acknowledge(&self) -> anyhow::Result<StageResponse>;
}

/// Downstream remainder of the pipeline: listener dispatch, handlers,
/// whatever the host runs once every stage has forwarded.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, request: &EventRequest) -> anyhow::Result<StageResponse>;
}

/// Chain-of-responsibility dispatcher.
///
/// Orders stages in front of the downstream handler and threads the
/// continuation through them: each stage gets an [`Acknowledge`] built from
/// the transport seam and a [`Forward`] into the rest of the chain. Holds no
/// per-request state, so one instance serves any number of in-flight
/// requests concurrently.
pub struct Pipeline<A, H>
where
    A: Acknowledger,
    H: EventHandler,
{
    stages: Vec<Arc<dyn Stage>>,
    acknowledger: Arc<A>,
    handler: Arc<H>,
}

impl<A, H> Pipeline<A, H>
where
    A: Acknowledger,
    H: EventHandler,
{
    /// Create a pipeline with no stages; [`Pipeline::with_stage`] appends.
    ///
    /// # Arguments
    ///
    /// * `acknowledger` - The transport seam answering acknowledgements
    /// * `handler` - The downstream handler run when every stage forwards
    pub fn new(acknowledger: Arc<A>, handler: Arc<H>) -> Self {
        Self {
            stages: Vec::new(),
            acknowledger,
            handler,
        }
    }

    /// Append a stage; stages run in registration order.
    pub fn with_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Run one event through the chain.
    ///
    /// Resolves to whatever terminal value the run produced: the
    /// acknowledgement response if a stage suppressed the event, the
    /// downstream handler's response otherwise. Errors from stages, the
    /// acknowledger or the handler surface here unchanged.
    pub async fn dispatch(&self, request: &EventRequest) -> anyhow::Result<StageResponse> {
        self.run_from(0, request).await
    }

    fn run_from<'a>(&'a self, index: usize, request: &'a EventRequest) -> StageFuture<'a> {
        Box::pin(async move {
            let Some(stage) = self.stages.get(index) else {
                return self.handler.handle(request).await;
            };

            let acknowledge =
                Acknowledge::new(move || async move { self.acknowledger.acknowledge().await });
            let forward = Forward::new(move || self.run_from(index + 1, request));

            stage.process(request, acknowledge, forward).await
        })
    }
}
