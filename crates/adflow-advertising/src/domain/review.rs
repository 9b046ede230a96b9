//! Suitability review.

use tracing::{debug, info};

use super::advertisement::{Advertisement, ReviewStatus};

/// Content marker that causes an advertisement to be rejected.
pub const REJECTION_MARKER: &str = "inappropriate";

/// Classifies advertisements by scanning their content.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewProcess;

impl ReviewProcess {
    /// Sets `review_status` to `Rejected` when the content contains
    /// [`REJECTION_MARKER`] (case-sensitive), otherwise to `Approved`.
    ///
    /// Content never changes after capture, so assessing twice yields the
    /// same status. A record already marked `NotPaid` keeps that status.
    pub fn assess(&self, ad: &mut Advertisement) -> ReviewStatus {
        if ad.review_status() == ReviewStatus::NotPaid {
            debug!(advert_id = %ad.id(), "not-paid advertisement left as is");
            return ReviewStatus::NotPaid;
        }
        let status = if ad.content().contains(REJECTION_MARKER) {
            ReviewStatus::Rejected
        } else {
            ReviewStatus::Approved
        };
        ad.set_review_status(status);
        info!(advert_id = %ad.id(), %status, "advertisement assessed");
        status
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::ReviewProcess;
    use crate::domain::advertisement::{AdvertId, Advertisement, AdvertisementDetails, ReviewStatus};

    fn with_content(content: &str) -> Advertisement {
        Advertisement::new(
            AdvertId::sequence(1),
            AdvertisementDetails {
                advertiser_name: "Advertiser".into(),
                contact_info: "contact@example.com".into(),
                content: content.into(),
                placement_preference: "Front Page".into(),
                appearance_date: None,
                size: "Large".into(),
            },
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_assess_approves_clean_content() {
        let mut ad = with_content("This is a valid ad.");

        let status = ReviewProcess.assess(&mut ad);

        assert_eq!(status, ReviewStatus::Approved);
        assert_eq!(ad.review_status(), ReviewStatus::Approved);
    }

    #[test]
    fn test_assess_rejects_flagged_content() {
        let mut ad = with_content("This ad is inappropriate.");

        assert_eq!(ReviewProcess.assess(&mut ad), ReviewStatus::Rejected);
        assert_eq!(ad.review_status(), ReviewStatus::Rejected);
    }

    #[test]
    fn test_assess_marker_match_is_case_sensitive() {
        let mut ad = with_content("Nothing INAPPROPRIATE here");

        assert_eq!(ReviewProcess.assess(&mut ad), ReviewStatus::Approved);
    }

    #[test]
    fn test_assess_is_idempotent() {
        for content in ["clean copy", "inappropriate copy"] {
            let mut once = with_content(content);
            let mut twice = with_content(content);

            ReviewProcess.assess(&mut once);
            ReviewProcess.assess(&mut twice);
            ReviewProcess.assess(&mut twice);

            assert_eq!(once.review_status(), twice.review_status());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_assess_does_not_reopen_not_paid_record() {
        let mut ad = with_content("clean copy");
        ad.set_review_status(ReviewStatus::NotPaid);

        assert_eq!(ReviewProcess.assess(&mut ad), ReviewStatus::NotPaid);
        assert_eq!(ad.review_status(), ReviewStatus::NotPaid);
    }

    #[test]
    fn test_assess_touches_only_review_status() {
        let mut ad = with_content("clean copy");
        let before = ad.clone();

        ReviewProcess.assess(&mut ad);

        assert_eq!(ad.is_paid(), before.is_paid());
        assert_eq!(ad.is_processed(), before.is_processed());
        assert_eq!(ad.is_archived(), before.is_archived());
        assert_eq!(ad.content(), before.content());
    }
}
