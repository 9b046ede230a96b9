//! The registry owns captured advertisements.
//!
//! It validates input at capture time, assigns sequential identifiers, answers
//! status queries, and owns the approval step that gates forwarding.

use adflow_core::error::DomainError;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::advertisement::{AdvertId, Advertisement, AdvertisementDetails, ReviewStatus};
use super::review::ReviewProcess;

/// Longest accepted `size` value, in characters.
pub const MAX_SIZE_LEN: usize = 1000;

/// The marketing staff member a registry works for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffMember {
    /// Staff identifier, e.g. `M001`.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl StaffMember {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Result of running approval on an advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalOutcome {
    /// Approved and paid: eligible for forwarding. No field changed.
    ApprovedForForwarding,
    /// Approved but unpaid: status moved to `NotPaid`.
    MarkedNotPaid,
    /// Status was not `Approved`; nothing changed.
    Skipped(ReviewStatus),
}

/// Owning collection of advertisements for one staff member.
#[derive(Debug, Clone)]
pub struct Registry {
    staff: StaffMember,
    advertisements: Vec<Advertisement>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(staff: StaffMember) -> Self {
        Self {
            staff,
            advertisements: Vec::new(),
        }
    }

    #[must_use]
    pub fn staff(&self) -> &StaffMember {
        &self.staff
    }

    /// Validates `details`, registers a new advertisement and returns it.
    ///
    /// The identifier is `A` followed by the record count plus one, padded to
    /// three digits.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first field that is empty
    /// or missing, or `size` when it exceeds [`MAX_SIZE_LEN`] characters.
    /// Returns `DomainError::DuplicateRecord` if the generated identifier is
    /// already registered.
    pub fn capture(&mut self, details: AdvertisementDetails) -> Result<&Advertisement, DomainError> {
        let appearance_date = validate(&details)?;
        let id = AdvertId::sequence(self.advertisements.len() + 1);
        if self.advertisements.iter().any(|ad| ad.id() == &id) {
            return Err(DomainError::DuplicateRecord(id.to_string()));
        }

        self.advertisements
            .push(Advertisement::new(id, details, appearance_date));
        let ad = &self.advertisements[self.advertisements.len() - 1];
        info!(
            staff_id = %self.staff.id,
            advert_id = %ad.id(),
            advertiser = ad.advertiser_name(),
            "advertisement captured"
        );
        Ok(ad)
    }

    /// Looks up an advertisement by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RecordNotFound` if no record has this identifier.
    pub fn get(&self, id: &AdvertId) -> Result<&Advertisement, DomainError> {
        self.advertisements
            .iter()
            .find(|ad| ad.id() == id)
            .ok_or_else(|| DomainError::RecordNotFound(id.to_string()))
    }

    /// Mutable lookup by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RecordNotFound` if no record has this identifier.
    pub fn get_mut(&mut self, id: &AdvertId) -> Result<&mut Advertisement, DomainError> {
        self.advertisements
            .iter_mut()
            .find(|ad| ad.id() == id)
            .ok_or_else(|| DomainError::RecordNotFound(id.to_string()))
    }

    /// Looks up an advertisement by zero-based capture position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RecordNotFound` if `position` is out of range.
    pub fn at(&self, position: usize) -> Result<&Advertisement, DomainError> {
        self.advertisements
            .get(position)
            .ok_or_else(|| DomainError::RecordNotFound(format!("position {position}")))
    }

    /// All advertisements in capture order.
    #[must_use]
    pub fn advertisements(&self) -> &[Advertisement] {
        &self.advertisements
    }

    pub(crate) fn advertisements_mut(&mut self) -> &mut [Advertisement] {
        &mut self.advertisements
    }

    /// Identifiers of all advertisements in capture order.
    #[must_use]
    pub fn ids(&self) -> Vec<AdvertId> {
        self.advertisements.iter().map(|ad| ad.id().clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.advertisements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.advertisements.is_empty()
    }

    /// Advertisements whose review status equals `status`, in capture order.
    #[must_use]
    pub fn filter_by_status(&self, status: ReviewStatus) -> Vec<&Advertisement> {
        self.advertisements
            .iter()
            .filter(|ad| ad.review_status() == status)
            .collect()
    }

    /// Runs the suitability review on the identified advertisement.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RecordNotFound` if no record has this identifier.
    pub fn review(&mut self, id: &AdvertId) -> Result<ReviewStatus, DomainError> {
        let ad = self.get_mut(id)?;
        Ok(ReviewProcess.assess(ad))
    }

    /// Gates the identified advertisement for forwarding.
    ///
    /// An approved, unpaid advertisement moves to `NotPaid`. That move is
    /// one-way: confirming payment later does not restore `Approved`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RecordNotFound` if no record has this identifier.
    pub fn approve(&mut self, id: &AdvertId) -> Result<ApprovalOutcome, DomainError> {
        let staff_id = self.staff.id.clone();
        let ad = self.get_mut(id)?;

        let outcome = match ad.review_status() {
            ReviewStatus::Approved if ad.is_paid() => {
                info!(%staff_id, advert_id = %id, "advertisement approved for processing");
                ApprovalOutcome::ApprovedForForwarding
            }
            ReviewStatus::Approved => {
                ad.set_review_status(ReviewStatus::NotPaid);
                warn!(%staff_id, advert_id = %id, "advertisement cannot be approved: not paid");
                ApprovalOutcome::MarkedNotPaid
            }
            other => {
                debug!(%staff_id, advert_id = %id, status = %other, "advertisement cannot be approved");
                ApprovalOutcome::Skipped(other)
            }
        };
        Ok(outcome)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(StaffMember::new("M001", "John Doe"))
    }
}

fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn validate(details: &AdvertisementDetails) -> Result<NaiveDate, DomainError> {
    require("advertiser_name", &details.advertiser_name)?;
    require("contact_info", &details.contact_info)?;
    require("content", &details.content)?;
    require("placement_preference", &details.placement_preference)?;
    let appearance_date = details
        .appearance_date
        .ok_or_else(|| DomainError::validation("appearance_date", "must be provided"))?;
    require("size", &details.size)?;
    if details.size.chars().count() > MAX_SIZE_LEN {
        return Err(DomainError::validation(
            "size",
            format!("must be at most {MAX_SIZE_LEN} characters"),
        ));
    }
    Ok(appearance_date)
}

#[cfg(test)]
mod tests {
    use adflow_core::error::DomainError;
    use chrono::NaiveDate;

    use super::{ApprovalOutcome, MAX_SIZE_LEN, Registry, StaffMember};
    use crate::domain::advertisement::{AdvertId, AdvertisementDetails, ReviewStatus};
    use crate::domain::payment::PaymentProcessor;

    fn details(content: &str) -> AdvertisementDetails {
        AdvertisementDetails {
            advertiser_name: "Advertiser A".into(),
            contact_info: "contact@a.com".into(),
            content: content.into(),
            placement_preference: "Front Page".into(),
            appearance_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            size: "Large".into(),
        }
    }

    fn field_of(err: DomainError) -> &'static str {
        match err {
            DomainError::Validation { field, .. } => field,
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_capture_assigns_sequential_ids_from_a001() {
        // Arrange
        let mut registry = Registry::new(StaffMember::new("M001", "John Doe"));

        // Act
        let ids: Vec<String> = (0..12)
            .map(|_| registry.capture(details("ad")).unwrap().id().to_string())
            .collect();

        // Assert
        assert_eq!(ids[0], "A001");
        assert_eq!(ids[1], "A002");
        assert_eq!(ids[11], "A012");
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn test_capture_initialises_status_fields() {
        let mut registry = Registry::default();

        let ad = registry.capture(details("Valid ad content")).unwrap();

        assert_eq!(ad.review_status(), ReviewStatus::Pending);
        assert!(!ad.is_paid());
        assert!(!ad.is_processed());
        assert!(!ad.is_archived());
        assert_eq!(ad.placement_preference(), "Front Page");
    }

    #[test]
    fn test_capture_names_each_empty_field() {
        let cases: [(&str, fn(&mut AdvertisementDetails)); 5] = [
            ("advertiser_name", |d: &mut AdvertisementDetails| d.advertiser_name.clear()),
            ("contact_info", |d: &mut AdvertisementDetails| d.contact_info.clear()),
            ("content", |d: &mut AdvertisementDetails| d.content.clear()),
            ("placement_preference", |d: &mut AdvertisementDetails| d.placement_preference.clear()),
            ("size", |d: &mut AdvertisementDetails| d.size.clear()),
        ];

        for (expected, blank) in cases {
            let mut registry = Registry::default();
            let mut input = details("ad");
            blank(&mut input);

            let err = registry.capture(input).unwrap_err();

            assert_eq!(field_of(err), expected);
            assert!(registry.is_empty());
        }
    }

    #[test]
    fn test_capture_requires_appearance_date() {
        let mut registry = Registry::default();
        let mut input = details("ad");
        input.appearance_date = None;

        assert_eq!(field_of(registry.capture(input).unwrap_err()), "appearance_date");
    }

    #[test]
    fn test_capture_bounds_size_length() {
        let mut registry = Registry::default();
        let mut at_limit = details("ad");
        at_limit.size = "x".repeat(MAX_SIZE_LEN);
        let mut over_limit = details("ad");
        over_limit.size = "x".repeat(MAX_SIZE_LEN + 1);

        assert!(registry.capture(at_limit).is_ok());
        assert_eq!(field_of(registry.capture(over_limit).unwrap_err()), "size");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_failed_capture_does_not_consume_an_id() {
        let mut registry = Registry::default();
        let mut bad = details("ad");
        bad.contact_info.clear();

        let _ = registry.capture(bad);
        let ad = registry.capture(details("ad")).unwrap();

        assert_eq!(ad.id().as_str(), "A001");
    }

    #[test]
    fn test_filter_by_status_keeps_insertion_order() {
        let mut registry = Registry::default();
        for content in ["one", "inappropriate two", "three", "four"] {
            registry.capture(details(content)).unwrap();
        }
        for id in registry.ids() {
            registry.review(&id).unwrap();
        }

        let approved: Vec<&str> = registry
            .filter_by_status(ReviewStatus::Approved)
            .into_iter()
            .map(|ad| ad.id().as_str())
            .collect();

        assert_eq!(approved, vec!["A001", "A003", "A004"]);
        assert_eq!(registry.filter_by_status(ReviewStatus::Rejected).len(), 1);
        assert!(registry.filter_by_status(ReviewStatus::NotPaid).is_empty());
    }

    #[test]
    fn test_lookup_of_unknown_id_is_record_not_found() {
        let mut registry = Registry::default();
        let missing = AdvertId::from("A404");

        assert_eq!(
            registry.approve(&missing),
            Err(DomainError::RecordNotFound("A404".into()))
        );
        assert!(registry.review(&missing).is_err());
        assert!(registry.at(0).is_err());
    }

    #[test]
    fn test_approve_paid_record_keeps_it_approved() {
        let mut registry = Registry::default();
        let id = registry.capture(details("ad")).unwrap().id().clone();
        registry.review(&id).unwrap();
        PaymentProcessor.confirm(registry.get_mut(&id).unwrap());

        let outcome = registry.approve(&id).unwrap();

        assert_eq!(outcome, ApprovalOutcome::ApprovedForForwarding);
        assert_eq!(registry.get(&id).unwrap().review_status(), ReviewStatus::Approved);
    }

    #[test]
    fn test_approve_unpaid_record_is_one_way_not_paid() {
        // Arrange
        let mut registry = Registry::default();
        let id = registry.capture(details("ad")).unwrap().id().clone();
        registry.review(&id).unwrap();

        // Act
        let outcome = registry.approve(&id).unwrap();
        PaymentProcessor.confirm(registry.get_mut(&id).unwrap());
        let second = registry.approve(&id).unwrap();

        // Assert
        assert_eq!(outcome, ApprovalOutcome::MarkedNotPaid);
        assert_eq!(second, ApprovalOutcome::Skipped(ReviewStatus::NotPaid));
        let ad = registry.get(&id).unwrap();
        assert_eq!(ad.review_status(), ReviewStatus::NotPaid);
        assert!(ad.is_paid());
    }

    #[test]
    fn test_approve_skips_pending_and_rejected_records() {
        let mut registry = Registry::default();
        let pending = registry.capture(details("ad")).unwrap().id().clone();
        let rejected = registry.capture(details("inappropriate")).unwrap().id().clone();
        registry.review(&rejected).unwrap();

        assert_eq!(
            registry.approve(&pending).unwrap(),
            ApprovalOutcome::Skipped(ReviewStatus::Pending)
        );
        assert_eq!(
            registry.approve(&rejected).unwrap(),
            ApprovalOutcome::Skipped(ReviewStatus::Rejected)
        );
        assert_eq!(registry.get(&pending).unwrap().review_status(), ReviewStatus::Pending);
    }
}
