//! Shared test mocks and utilities for the advertisement lifecycle engine.

mod clock;
mod command;

pub use clock::FixedClock;
pub use command::{FailingCommand, RecordingCommand};
