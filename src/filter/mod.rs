mod allow_list;
mod self_event;
mod stage;

// Re-export public API
pub use allow_list::{AllowList, KEPT_EVENT_TYPES};
pub use self_event::SelfEventDetector;
pub use stage::SelfEventFilterStage;
