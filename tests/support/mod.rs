// Mock collaborators for pipeline testing
//
// Not every test binary uses every mock.
#![allow(dead_code)]

pub mod mock_handler;
pub mod mock_stage;
pub mod mock_transport;

pub use mock_handler::{FailingHandler, RecordingHandler};
pub use mock_stage::{AlwaysAckStage, NamedStage};
pub use mock_transport::{CountingAcknowledger, FailingAcknowledger};
