//! Test commands — `Command` implementations that work with any context.

use std::sync::{Arc, Mutex};

use adflow_core::command::Command;
use adflow_core::error::DomainError;
use uuid::Uuid;

/// A command that appends its label to a shared log when executed. Used to
/// observe execution order without touching the context.
#[derive(Debug, Clone)]
pub struct RecordingCommand {
    label: String,
    log: Arc<Mutex<Vec<String>>>,
    correlation_id: Uuid,
}

impl RecordingCommand {
    /// Create a command that records `label` into `log`.
    #[must_use]
    pub fn new(label: impl Into<String>, log: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            label: label.into(),
            log: Arc::clone(log),
            correlation_id: Uuid::new_v4(),
        }
    }
}

impl<C> Command<C> for RecordingCommand {
    fn command_type(&self) -> &'static str {
        "test.recording"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// # Panics
    ///
    /// Panics if the shared log mutex is poisoned.
    fn execute(&self, _context: &mut C) -> Result<(), DomainError> {
        self.log.lock().unwrap().push(self.label.clone());
        Ok(())
    }
}

/// A command that always fails with the configured error. Useful for testing
/// how a run behaves when one unit of work aborts.
#[derive(Debug, Clone)]
pub struct FailingCommand {
    error: DomainError,
    correlation_id: Uuid,
}

impl FailingCommand {
    /// Create a command that returns `error` on every execution.
    #[must_use]
    pub fn new(error: DomainError) -> Self {
        Self {
            error,
            correlation_id: Uuid::new_v4(),
        }
    }
}

impl<C> Command<C> for FailingCommand {
    fn command_type(&self) -> &'static str {
        "test.failing"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn execute(&self, _context: &mut C) -> Result<(), DomainError> {
        Err(self.error.clone())
    }
}
