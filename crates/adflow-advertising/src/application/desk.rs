//! The execution context that lifecycle commands run against.

use std::fmt;

use adflow_core::clock::Clock;

use crate::domain::archive::ArchiveManager;
use crate::domain::payment::PaymentProcessor;
use crate::domain::processing::ProcessingCenter;
use crate::domain::registry::Registry;

/// Bundles the registry and the lifecycle operators for one staff member.
///
/// Commands receive the desk mutably when executed; it is the only way they
/// reach records, so every record is enumerated through its registry.
pub struct AdvertisingDesk {
    /// Owns the captured advertisements and the approval step.
    pub registry: Registry,
    /// Confirms payments.
    pub payments: PaymentProcessor,
    /// Receives forwarded advertisements.
    pub processing: ProcessingCenter,
    /// Holds the archived advertisement identifiers.
    pub archive: ArchiveManager,
    clock: Box<dyn Clock>,
}

impl AdvertisingDesk {
    /// Creates a desk around `registry` that reads dates from `clock`.
    #[must_use]
    pub fn new(registry: Registry, clock: impl Clock + 'static) -> Self {
        Self {
            registry,
            payments: PaymentProcessor,
            processing: ProcessingCenter,
            archive: ArchiveManager::new(),
            clock: Box::new(clock),
        }
    }

    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl fmt::Debug for AdvertisingDesk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvertisingDesk")
            .field("registry", &self.registry)
            .field("archive", &self.archive)
            .finish_non_exhaustive()
    }
}
