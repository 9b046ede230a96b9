//! Application layer: command handlers, the execution context they run
//! against, and read-only query views.

pub mod command_handlers;
pub mod desk;
pub mod query_handlers;
