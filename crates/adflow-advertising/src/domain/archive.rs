//! Archival of advertisements that were never published.

use chrono::{Months, NaiveDate};
use tracing::{debug, info};

use super::advertisement::{AdvertId, Advertisement};
use super::registry::Registry;

/// How long an unprocessed advertisement may sit before it is archived.
pub const RETENTION_MONTHS: u32 = 6;

/// Returns the cutoff date: records appearing strictly before it are stale.
///
/// Month subtraction clamps to the last day of the target month, so the
/// cutoff for 31 August is 28 or 29 February.
#[must_use]
pub fn retention_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(RETENTION_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Keeps the list of archived advertisements.
///
/// The archive stores identifiers only; the records themselves stay owned by
/// the registry that captured them.
#[derive(Debug, Clone, Default)]
pub struct ArchiveManager {
    archived: Vec<AdvertId>,
}

impl ArchiveManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is already in the archive.
    #[must_use]
    pub fn contains(&self, id: &AdvertId) -> bool {
        self.archived.contains(id)
    }

    /// Archives every record that was never processed and whose appearance
    /// date is strictly older than [`RETENTION_MONTHS`] before `today`.
    ///
    /// Records are appended in input order and flagged as archived. Records
    /// already in the archive are skipped. Returns the identifiers archived
    /// by this call.
    pub fn archive_unused(&mut self, ads: &mut [Advertisement], today: NaiveDate) -> Vec<AdvertId> {
        let cutoff = retention_cutoff(today);
        let mut newly_archived = Vec::new();

        for ad in ads.iter_mut() {
            if ad.is_processed() || ad.appearance_date() >= cutoff || self.contains(ad.id()) {
                debug!(advert_id = %ad.id(), %cutoff, "advertisement not eligible for archival");
                continue;
            }
            ad.mark_archived();
            self.archived.push(ad.id().clone());
            newly_archived.push(ad.id().clone());
            info!(
                advert_id = %ad.id(),
                appearance_date = %ad.appearance_date(),
                "advertisement archived"
            );
        }

        newly_archived
    }

    /// Archived identifiers in append order.
    #[must_use]
    pub fn archived_ids(&self) -> &[AdvertId] {
        &self.archived
    }

    /// Resolves the archive against the registry that owns the records, in
    /// append order. Identifiers the registry does not know are skipped.
    #[must_use]
    pub fn get_archived<'a>(&self, registry: &'a Registry) -> Vec<&'a Advertisement> {
        self.archived
            .iter()
            .filter_map(|id| registry.get(id).ok())
            .collect()
    }
}
