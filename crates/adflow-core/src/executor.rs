//! FIFO command executor.
//!
//! The executor owns an ordered queue of commands and runs them one after the
//! other against a shared context. Ordering is part of the contract: later
//! lifecycle stages rely on earlier ones having already run.

use std::collections::VecDeque;

use tracing::{info_span, warn};

use crate::command::Command;
use crate::error::DomainError;

/// An ordered queue of commands executed against a context of type `C`.
pub struct Executor<C> {
    queue: VecDeque<Box<dyn Command<C>>>,
}

impl<C> Executor<C> {
    /// Creates an executor with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Appends a command to the tail of the queue.
    pub fn add(&mut self, command: impl Command<C> + 'static) {
        self.queue.push_back(Box::new(command));
    }

    /// Appends an already boxed command to the tail of the queue.
    pub fn add_boxed(&mut self, command: Box<dyn Command<C>>) {
        self.queue.push_back(command);
    }

    /// Number of commands waiting to run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` when no command is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Type names of the queued commands, in execution order.
    #[must_use]
    pub fn pending_command_types(&self) -> Vec<&'static str> {
        self.queue.iter().map(|command| command.command_type()).collect()
    }

    /// Runs every queued command in FIFO order and returns how many ran.
    ///
    /// The queue is always empty when this returns. A failing command stops
    /// the run: commands queued after it are discarded without executing.
    ///
    /// # Errors
    ///
    /// Returns the first `DomainError` raised by a command.
    pub fn run_all(&mut self, context: &mut C) -> Result<usize, DomainError> {
        let mut queue = std::mem::take(&mut self.queue);
        let mut executed = 0;

        while let Some(command) = queue.pop_front() {
            let span = info_span!(
                "command",
                command_type = command.command_type(),
                correlation_id = %command.correlation_id(),
            );
            let _entered = span.enter();

            if let Err(err) = command.execute(context) {
                warn!(
                    error = %err,
                    executed,
                    discarded = queue.len(),
                    "command failed, aborting run"
                );
                return Err(err);
            }
            executed += 1;
        }

        Ok(executed)
    }
}

impl<C> Default for Executor<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for Executor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("queue", &self.queue)
            .finish()
    }
}
