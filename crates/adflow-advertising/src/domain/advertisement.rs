//! The advertisement record and its status values.

use std::fmt;

use adflow_core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registry-scoped advertisement identifier, e.g. `A001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvertId(String);

impl AdvertId {
    /// Builds the identifier for the `n`th record of a registry.
    #[must_use]
    pub fn sequence(n: usize) -> Self {
        Self(format!("A{n:03}"))
    }

    /// Borrows the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdvertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AdvertId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Review state of an advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Captured but not yet assessed.
    #[default]
    Pending,
    /// Content passed review.
    Approved,
    /// Content failed review.
    Rejected,
    /// Passed review but was unpaid when approval ran.
    NotPaid,
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
            Self::NotPaid => write!(f, "not_paid"),
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "not_paid" => Ok(Self::NotPaid),
            _ => Err(format!("Invalid review status: {s}")),
        }
    }
}

/// Details supplied when capturing an advertisement.
///
/// `appearance_date` is optional here so that a missing date can be reported
/// as a validation failure rather than being unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvertisementDetails {
    /// Name of the advertiser.
    pub advertiser_name: String,
    /// How to reach the advertiser.
    pub contact_info: String,
    /// The advertisement copy.
    pub content: String,
    /// Requested placement, e.g. "Front Page".
    pub placement_preference: String,
    /// Date the advertisement should appear.
    pub appearance_date: Option<NaiveDate>,
    /// Requested size.
    pub size: String,
}

/// An advertisement tracked through its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    id: AdvertId,
    advertiser_name: String,
    contact_info: String,
    content: String,
    placement_preference: String,
    appearance_date: NaiveDate,
    size: String,
    review_status: ReviewStatus,
    is_paid: bool,
    is_processed: bool,
    is_archived: bool,
}

impl Advertisement {
    /// Builds a fresh record. Only the registry calls this, after validation.
    pub(crate) fn new(
        id: AdvertId,
        details: AdvertisementDetails,
        appearance_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            advertiser_name: details.advertiser_name,
            contact_info: details.contact_info,
            content: details.content,
            placement_preference: details.placement_preference,
            appearance_date,
            size: details.size,
            review_status: ReviewStatus::Pending,
            is_paid: false,
            is_processed: false,
            is_archived: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &AdvertId {
        &self.id
    }

    #[must_use]
    pub fn advertiser_name(&self) -> &str {
        &self.advertiser_name
    }

    #[must_use]
    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn placement_preference(&self) -> &str {
        &self.placement_preference
    }

    #[must_use]
    pub fn appearance_date(&self) -> NaiveDate {
        self.appearance_date
    }

    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    #[must_use]
    pub fn review_status(&self) -> ReviewStatus {
        self.review_status
    }

    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    #[must_use]
    pub fn is_processed(&self) -> bool {
        self.is_processed
    }

    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.is_archived
    }

    /// Returns `true` when the record may be handed to the processing center.
    #[must_use]
    pub fn is_ready_for_publication(&self) -> bool {
        self.review_status == ReviewStatus::Approved && self.is_paid
    }

    /// Guard for callers that must not publish unpaid advertisements.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PaymentRequired` if payment has not been
    /// confirmed.
    pub fn ensure_paid_before_publication(&self) -> Result<(), DomainError> {
        if self.is_paid {
            Ok(())
        } else {
            Err(DomainError::PaymentRequired(self.id.to_string()))
        }
    }

    pub(crate) fn set_review_status(&mut self, status: ReviewStatus) {
        self.review_status = status;
    }

    pub(crate) fn mark_paid(&mut self) {
        self.is_paid = true;
    }

    pub(crate) fn mark_processed(&mut self) {
        self.is_processed = true;
    }

    pub(crate) fn mark_archived(&mut self) {
        self.is_archived = true;
    }
}

impl fmt::Display for Advertisement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Advertiser: {}, Content: {}, Size: {}, Status: {}",
            self.id, self.advertiser_name, self.content, self.size, self.review_status
        )
    }
}

#[cfg(test)]
mod tests {
    use adflow_core::error::DomainError;
    use chrono::NaiveDate;

    use super::{AdvertId, Advertisement, AdvertisementDetails, ReviewStatus};

    fn sample() -> Advertisement {
        Advertisement::new(
            AdvertId::sequence(1),
            AdvertisementDetails {
                advertiser_name: "Advertiser A".into(),
                contact_info: "contact@a.com".into(),
                content: "Valid content".into(),
                placement_preference: "Front Page".into(),
                appearance_date: None,
                size: "Large".into(),
            },
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_sequence_id_is_zero_padded() {
        assert_eq!(AdvertId::sequence(1).as_str(), "A001");
        assert_eq!(AdvertId::sequence(42).as_str(), "A042");
        assert_eq!(AdvertId::sequence(1234).as_str(), "A1234");
    }

    #[test]
    fn test_new_record_starts_pending_and_unpaid() {
        let ad = sample();

        assert_eq!(ad.review_status(), ReviewStatus::Pending);
        assert!(!ad.is_paid());
        assert!(!ad.is_processed());
        assert!(!ad.is_archived());
    }

    #[test]
    fn test_ensure_paid_before_publication_rejects_unpaid_record() {
        let mut ad = sample();

        assert_eq!(
            ad.ensure_paid_before_publication(),
            Err(DomainError::PaymentRequired("A001".into()))
        );

        ad.mark_paid();
        assert_eq!(ad.ensure_paid_before_publication(), Ok(()));
    }

    #[test]
    fn test_review_status_round_trips_through_display() {
        for status in [
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
            ReviewStatus::NotPaid,
        ] {
            assert_eq!(status.to_string().parse::<ReviewStatus>(), Ok(status));
        }
        assert!("Not Paid".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn test_display_summarises_record() {
        assert_eq!(
            sample().to_string(),
            "ID: A001, Advertiser: Advertiser A, Content: Valid content, Size: Large, Status: pending"
        );
    }
}
