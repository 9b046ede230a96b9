//! Commands for the advertising context.
//!
//! Each command binds the arguments of one lifecycle call at construction
//! time so it can be queued and run later.

use uuid::Uuid;

use super::advertisement::{AdvertId, AdvertisementDetails};

/// Command to capture a new advertisement.
#[derive(Debug, Clone)]
pub struct CaptureAdvertisement {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The details to validate and register.
    pub details: AdvertisementDetails,
}

/// Command to review an advertisement's suitability.
#[derive(Debug, Clone)]
pub struct ReviewAdvertisement {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The advertisement identifier.
    pub advert_id: AdvertId,
}

/// Command to confirm payment for an advertisement.
#[derive(Debug, Clone)]
pub struct ConfirmPayment {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The advertisement identifier.
    pub advert_id: AdvertId,
}

/// Command to approve an advertisement for forwarding.
#[derive(Debug, Clone)]
pub struct ApproveAdvertisement {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The advertisement identifier.
    pub advert_id: AdvertId,
}

/// Command to forward an advertisement to the processing center.
#[derive(Debug, Clone)]
pub struct ForwardAdvertisement {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The advertisement identifier.
    pub advert_id: AdvertId,
}

/// Command to archive every unused advertisement in the registry.
#[derive(Debug, Clone)]
pub struct ArchiveUnusedAdvertisements {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

macro_rules! targeted_constructor {
    ($($command:ident),+ $(,)?) => {
        $(
            impl $command {
                /// Creates the command with a fresh correlation ID.
                #[must_use]
                pub fn new(advert_id: AdvertId) -> Self {
                    Self {
                        correlation_id: Uuid::new_v4(),
                        advert_id,
                    }
                }
            }
        )+
    };
}

targeted_constructor!(
    ReviewAdvertisement,
    ConfirmPayment,
    ApproveAdvertisement,
    ForwardAdvertisement,
);

impl CaptureAdvertisement {
    /// Creates the command with a fresh correlation ID.
    #[must_use]
    pub fn new(details: AdvertisementDetails) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            details,
        }
    }
}

impl ArchiveUnusedAdvertisements {
    /// Creates the command with a fresh correlation ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
        }
    }
}

impl Default for ArchiveUnusedAdvertisements {
    fn default() -> Self {
        Self::new()
    }
}
