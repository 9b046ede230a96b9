//! Adflow Core — shared workflow abstractions.
//!
//! This crate defines the traits and types every bounded context depends on:
//! the clock, the command and executor pair, and the domain error type. It
//! contains no advertising logic.

pub mod clock;
pub mod command;
pub mod error;
pub mod executor;
