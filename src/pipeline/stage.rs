use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use super::request::EventRequest;
use super::response::StageResponse;

/// Boxed future produced by the pipeline continuations.
pub type StageFuture<'a> =
    Pin<Box<dyn Future<Output = anyhow::Result<StageResponse>> + Send + 'a>>;

/// Single-shot capability: report the current event as handled and stop the
/// pipeline here.
///
/// Consuming `self` on call makes a second invocation impossible.
pub struct Acknowledge<'a> {
    run: Box<dyn FnOnce() -> StageFuture<'a> + Send + 'a>,
}

impl<'a> Acknowledge<'a> {
    pub fn new<F, Fut>(run: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = anyhow::Result<StageResponse>> + Send + 'a,
    {
        Self {
            run: Box::new(move || {
                let fut: StageFuture<'a> = Box::pin(run());
                fut
            }),
        }
    }

    /// Finalize handling and return the transport's terminal response.
    pub async fn call(self) -> anyhow::Result<StageResponse> {
        (self.run)().await
    }
}

/// Single-shot capability: hand control to the remainder of the pipeline
/// and return its result.
pub struct Forward<'a> {
    run: Box<dyn FnOnce() -> StageFuture<'a> + Send + 'a>,
}

impl<'a> Forward<'a> {
    pub fn new<F, Fut>(run: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = anyhow::Result<StageResponse>> + Send + 'a,
    {
        Self {
            run: Box::new(move || {
                let fut: StageFuture<'a> = Box::pin(run());
                fut
            }),
        }
    }

    /// Run the remaining stages and the downstream handler.
    pub async fn call(self) -> anyhow::Result<StageResponse> {
        (self.run)().await
    }
}

/// One link in the inbound processing chain.
///
/// A stage either terminates the run via `acknowledge` or passes control on
/// via `forward`, and returns whichever result it obtained. Errors coming
/// out of either capability belong to the host pipeline and must not be
/// swallowed or transformed here.
#[async_trait]
pub trait Stage: Send + Sync {
    async fn process(
        &self,
        request: &EventRequest,
        acknowledge: Acknowledge<'_>,
        forward: Forward<'_>,
    ) -> anyhow::Result<StageResponse>;
}
