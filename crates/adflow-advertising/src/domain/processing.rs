//! Forwarding to the processing center for publication.

use serde::Serialize;
use tracing::{info, warn};

use super::advertisement::Advertisement;

/// Result of handing an advertisement to the processing center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForwardingOutcome {
    /// The record was approved and paid and is now processed.
    Processed,
    /// The record was not eligible; nothing changed.
    Rejected,
}

/// Admits approved, paid advertisements into the published state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessingCenter;

impl ProcessingCenter {
    /// Sets `is_processed` when the record is approved and paid. Receiving a
    /// record that is already processed processes it again with no change.
    pub fn receive(&self, ad: &mut Advertisement) -> ForwardingOutcome {
        if ad.is_ready_for_publication() {
            ad.mark_processed();
            info!(advert_id = %ad.id(), "advertisement processed for publication");
            ForwardingOutcome::Processed
        } else {
            warn!(
                advert_id = %ad.id(),
                status = %ad.review_status(),
                is_paid = ad.is_paid(),
                "cannot process advertisement"
            );
            ForwardingOutcome::Rejected
        }
    }
}
