//! Payment confirmation.

use tracing::{debug, info};

use super::advertisement::Advertisement;

/// Records payment confirmations. There is no gateway: confirmation takes
/// effect immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    /// Marks the advertisement as paid. Confirming twice is allowed and
    /// leaves the record unchanged.
    pub fn confirm(&self, ad: &mut Advertisement) {
        if ad.is_paid() {
            debug!(advert_id = %ad.id(), "payment already confirmed");
        }
        ad.mark_paid();
        info!(advert_id = %ad.id(), "payment confirmed");
    }

    /// Returns whether payment has been confirmed.
    #[must_use]
    pub fn check_status(&self, ad: &Advertisement) -> bool {
        ad.is_paid()
    }
}
