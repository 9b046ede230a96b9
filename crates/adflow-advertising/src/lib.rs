//! Adflow Advertising — the advertisement lifecycle bounded context.
//!
//! Records are captured by a [`Registry`](domain::registry::Registry), then
//! move through review, payment, approval, forwarding to the processing
//! center, and finally archival. Each stage is a small stateless operator in
//! [`domain`]; [`application`] wraps those calls as queueable commands that
//! run against an [`AdvertisingDesk`](application::desk::AdvertisingDesk).

pub mod application;
pub mod domain;
