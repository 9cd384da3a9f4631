//! Keep a chat bot from reacting to its own traffic.
//!
//! A bot that posts a message receives that message back as an inbound event
//! notification; dispatching it like any other event produces feedback loops.
//! This crate provides a pipeline stage that detects events generated by the
//! bot's own identity and acknowledges them without forwarding, except for an
//! allow-list of event kinds that stay meaningful regardless of origin
//! (channel-membership transitions by default).
//!
//! The stage plugs into a chain-of-responsibility [`Pipeline`]: each
//! [`Stage`] receives the request plus two single-shot capabilities,
//! [`Acknowledge`] (terminate here, report the event as handled) and
//! [`Forward`] (hand control to the rest of the chain).

pub mod filter;
pub mod pipeline;

// Re-exports for convenience
pub use filter::{AllowList, KEPT_EVENT_TYPES, SelfEventDetector, SelfEventFilterStage};
pub use pipeline::{
    Acknowledge, Acknowledger, AuthorizationResult, EventHandler, EventRequest, Forward, Pipeline,
    RequestContext, Stage, StageFuture, StageResponse,
};
