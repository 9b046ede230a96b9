//! Command abstractions.

use std::fmt;

use uuid::Uuid;

use crate::error::DomainError;

/// Trait that all commands implement.
///
/// A command is a deferred, parameterless unit of work: everything it needs
/// is bound at construction time except the execution context `C`, which
/// holds the operators the command is allowed to invoke.
pub trait Command<C>: Send + Sync + fmt::Debug {
    /// The type name for this command (for logging/routing).
    fn command_type(&self) -> &'static str;

    /// Correlation ID to trace this command through the system.
    fn correlation_id(&self) -> Uuid;

    /// Runs the command against `context`.
    ///
    /// # Errors
    ///
    /// Returns the `DomainError` raised by the underlying operation.
    fn execute(&self, context: &mut C) -> Result<(), DomainError>;
}

type CommandFn<C> = dyn Fn(&mut C) -> Result<(), DomainError> + Send + Sync;

/// A command backed by a closure.
pub struct FnCommand<C> {
    command_type: &'static str,
    correlation_id: Uuid,
    run: Box<CommandFn<C>>,
}

impl<C> FnCommand<C> {
    /// Wraps `run` as a command with a fresh correlation ID.
    pub fn new<F>(command_type: &'static str, run: F) -> Self
    where
        F: Fn(&mut C) -> Result<(), DomainError> + Send + Sync + 'static,
    {
        Self {
            command_type,
            correlation_id: Uuid::new_v4(),
            run: Box::new(run),
        }
    }
}

impl<C> fmt::Debug for FnCommand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand")
            .field("command_type", &self.command_type)
            .field("correlation_id", &self.correlation_id)
            .finish_non_exhaustive()
    }
}

impl<C> Command<C> for FnCommand<C> {
    fn command_type(&self) -> &'static str {
        self.command_type
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn execute(&self, context: &mut C) -> Result<(), DomainError> {
        (self.run)(context)
    }
}
