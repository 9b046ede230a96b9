//! Query handlers for the advertising context.
//!
//! These return read-only, serializable views of the registry and archive
//! for reporting.

use chrono::NaiveDate;
use serde::Serialize;

use super::desk::AdvertisingDesk;
use crate::domain::advertisement::{AdvertId, Advertisement, ReviewStatus};
use crate::domain::registry::Registry;

/// Read-only view of an advertisement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvertisementView {
    /// The advertisement identifier.
    pub advert_id: AdvertId,
    /// Name of the advertiser.
    pub advertiser_name: String,
    /// The advertisement copy.
    pub content: String,
    /// Requested placement.
    pub placement_preference: String,
    /// Date the advertisement should appear.
    pub appearance_date: NaiveDate,
    /// Requested size.
    pub size: String,
    /// Current review status.
    pub review_status: ReviewStatus,
    /// Whether payment has been confirmed.
    pub is_paid: bool,
    /// Whether the processing center accepted it for publication.
    pub is_processed: bool,
    /// Whether it has been archived.
    pub is_archived: bool,
}

impl From<&Advertisement> for AdvertisementView {
    fn from(ad: &Advertisement) -> Self {
        Self {
            advert_id: ad.id().clone(),
            advertiser_name: ad.advertiser_name().to_owned(),
            content: ad.content().to_owned(),
            placement_preference: ad.placement_preference().to_owned(),
            appearance_date: ad.appearance_date(),
            size: ad.size().to_owned(),
            review_status: ad.review_status(),
            is_paid: ad.is_paid(),
            is_processed: ad.is_processed(),
            is_archived: ad.is_archived(),
        }
    }
}

/// Lists every advertisement in capture order.
#[must_use]
pub fn list_advertisements(registry: &Registry) -> Vec<AdvertisementView> {
    registry
        .advertisements()
        .iter()
        .map(AdvertisementView::from)
        .collect()
}

/// Lists advertisements with the given review status, in capture order.
#[must_use]
pub fn advertisements_by_status(registry: &Registry, status: ReviewStatus) -> Vec<AdvertisementView> {
    registry
        .filter_by_status(status)
        .into_iter()
        .map(AdvertisementView::from)
        .collect()
}

/// Lists archived advertisements in the order they were archived.
#[must_use]
pub fn archived_advertisements(desk: &AdvertisingDesk) -> Vec<AdvertisementView> {
    desk.archive
        .get_archived(&desk.registry)
        .into_iter()
        .map(AdvertisementView::from)
        .collect()
}
