//! Domain layer: the advertisement record, its registry, and the lifecycle
//! operators.

pub mod advertisement;
pub mod archive;
pub mod commands;
pub mod payment;
pub mod processing;
pub mod registry;
pub mod review;
