//! The six-advertisement demonstration scenario.
//!
//! Six submissions are captured, reviewed, paid for selectively, approved,
//! forwarded and archived. Appearance dates are derived from the desk clock
//! so the outcome is the same whenever the runner is started.

use adflow_advertising::application::command_handlers::handle_archive_unused;
use adflow_advertising::application::desk::AdvertisingDesk;
use adflow_advertising::application::query_handlers::{
    AdvertisementView, archived_advertisements, list_advertisements,
};
use adflow_advertising::domain::advertisement::{AdvertId, AdvertisementDetails};
use adflow_advertising::domain::commands::{
    ApproveAdvertisement, ArchiveUnusedAdvertisements, CaptureAdvertisement, ConfirmPayment,
    ForwardAdvertisement, ReviewAdvertisement,
};
use adflow_advertising::domain::registry::StaffMember;
use adflow_core::executor::Executor;
use chrono::{Days, Months, NaiveDate};
use serde::Serialize;
use tracing::{info, info_span};

use crate::config::RunMode;
use crate::error::AppError;

/// Capture positions whose payment is confirmed.
pub const PAID_POSITIONS: [usize; 3] = [0, 2, 4];

/// Final state of the desk, for printing.
#[derive(Debug, Serialize)]
pub struct Report {
    pub staff: StaffMember,
    pub advertisements: Vec<AdvertisementView>,
    pub archived: Vec<AdvertisementView>,
}

impl Report {
    #[must_use]
    pub fn from_desk(desk: &AdvertisingDesk) -> Self {
        Self {
            staff: desk.registry.staff().clone(),
            advertisements: list_advertisements(&desk.registry),
            archived: archived_advertisements(desk),
        }
    }
}

fn submission(
    advertiser: &str,
    contact: &str,
    content: &str,
    placement: &str,
    appearance_date: NaiveDate,
    size: &str,
) -> AdvertisementDetails {
    AdvertisementDetails {
        advertiser_name: advertiser.to_string(),
        contact_info: contact.to_string(),
        content: content.to_string(),
        placement_preference: placement.to_string(),
        appearance_date: Some(appearance_date),
        size: size.to_string(),
    }
}

/// The six demonstration submissions. The second and fifth carry flagged
/// content, the fourth is never paid, and the sixth appeared well over six
/// months before `today`.
#[must_use]
pub fn submissions(today: NaiveDate) -> Vec<AdvertisementDetails> {
    let ahead = |days| today + Days::new(days);
    vec![
        submission("Advertiser A", "contact@a.com", "This is a valid ad.", "Front Page", ahead(45), "Large"),
        submission("Advertiser B", "contact@b.com", "This ad is inappropriate.", "Back Page", ahead(70), "Medium"),
        submission("Advertiser C", "contact@c.com", "Another valid ad.", "Middle Page", ahead(95), "Small"),
        submission("Advertiser D", "contact@d.com", "Valid ad but not paid.", "Front Page", ahead(122), "Large"),
        submission("Advertiser E", "contact@e.com", "This content is inappropriate.", "Back Page", ahead(131), "Medium"),
        submission("Advertiser F", "contact@f.com", "Old ad for archival.", "Middle Page", today - Months::new(22), "Small"),
    ]
}

/// Runs every lifecycle stage against `desk` in the requested mode.
///
/// # Errors
///
/// Returns `AppError::Domain` if any lifecycle operation fails.
pub fn run(desk: &mut AdvertisingDesk, mode: RunMode) -> Result<(), AppError> {
    let today = desk.clock().today();
    match mode {
        RunMode::Direct => run_direct(desk, submissions(today)),
        RunMode::Queued => run_queued(desk, submissions(today)),
    }
}

fn run_direct(desk: &mut AdvertisingDesk, details: Vec<AdvertisementDetails>) -> Result<(), AppError> {
    info_span!("stage", name = "capture").in_scope(|| -> Result<(), AppError> {
        for submission in details {
            desk.registry.capture(submission)?;
        }
        Ok(())
    })?;
    let ids = desk.registry.ids();

    info_span!("stage", name = "review").in_scope(|| -> Result<(), AppError> {
        for id in &ids {
            desk.registry.review(id)?;
        }
        Ok(())
    })?;

    info_span!("stage", name = "payment").in_scope(|| -> Result<(), AppError> {
        for id in paid(&ids) {
            let ad = desk.registry.get_mut(id)?;
            desk.payments.confirm(ad);
        }
        Ok(())
    })?;

    info_span!("stage", name = "approval").in_scope(|| -> Result<(), AppError> {
        for id in &ids {
            desk.registry.approve(id)?;
        }
        Ok(())
    })?;

    info_span!("stage", name = "forwarding").in_scope(|| -> Result<(), AppError> {
        for id in &ids {
            let ad = desk.registry.get_mut(id)?;
            desk.processing.receive(ad);
        }
        Ok(())
    })?;

    info_span!("stage", name = "archival").in_scope(|| {
        handle_archive_unused(&ArchiveUnusedAdvertisements::new(), desk);
    });
    Ok(())
}

fn run_queued(desk: &mut AdvertisingDesk, details: Vec<AdvertisementDetails>) -> Result<(), AppError> {
    let mut executor = Executor::new();

    for submission in details {
        executor.add(CaptureAdvertisement::new(submission));
    }
    drain(&mut executor, desk, "capture")?;
    let ids = desk.registry.ids();

    for id in &ids {
        executor.add(ReviewAdvertisement::new(id.clone()));
    }
    drain(&mut executor, desk, "review")?;

    for id in paid(&ids) {
        executor.add(ConfirmPayment::new(id.clone()));
    }
    drain(&mut executor, desk, "payment")?;

    for id in &ids {
        executor.add(ApproveAdvertisement::new(id.clone()));
    }
    drain(&mut executor, desk, "approval")?;

    for id in &ids {
        executor.add(ForwardAdvertisement::new(id.clone()));
    }
    drain(&mut executor, desk, "forwarding")?;

    executor.add(ArchiveUnusedAdvertisements::new());
    drain(&mut executor, desk, "archival")
}

fn drain(
    executor: &mut Executor<AdvertisingDesk>,
    desk: &mut AdvertisingDesk,
    stage: &'static str,
) -> Result<(), AppError> {
    let span = info_span!("stage", name = stage);
    let _entered = span.enter();
    let executed = executor.run_all(desk)?;
    info!(executed, "stage complete");
    Ok(())
}

fn paid(ids: &[AdvertId]) -> impl Iterator<Item = &AdvertId> {
    PAID_POSITIONS.iter().filter_map(|&position| ids.get(position))
}
