mod chain;
mod request;
mod response;
mod stage;

// Re-export public API
pub use chain::{Acknowledger, EventHandler, Pipeline};
pub use request::{AuthorizationResult, EventRequest, RequestContext};
pub use response::StageResponse;
pub use stage::{Acknowledge, Forward, Stage, StageFuture};
