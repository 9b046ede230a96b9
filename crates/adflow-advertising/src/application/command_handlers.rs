//! Command handlers for the advertising context.
//!
//! Each handler performs one lifecycle call against an [`AdvertisingDesk`].
//! The command types implement [`Command`] by delegating to these handlers so
//! they can be queued on an [`Executor`](adflow_core::executor::Executor).

use adflow_core::command::Command;
use adflow_core::error::DomainError;
use tracing::info;
use uuid::Uuid;

use super::desk::AdvertisingDesk;
use crate::domain::advertisement::{AdvertId, ReviewStatus};
use crate::domain::commands::{
    ApproveAdvertisement, ArchiveUnusedAdvertisements, CaptureAdvertisement, ConfirmPayment,
    ForwardAdvertisement, ReviewAdvertisement,
};
use crate::domain::processing::ForwardingOutcome;
use crate::domain::registry::ApprovalOutcome;

/// Handles the `CaptureAdvertisement` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the details are incomplete.
pub fn handle_capture(
    command: &CaptureAdvertisement,
    desk: &mut AdvertisingDesk,
) -> Result<AdvertId, DomainError> {
    let ad = desk.registry.capture(command.details.clone())?;
    Ok(ad.id().clone())
}

/// Handles the `ReviewAdvertisement` command.
///
/// # Errors
///
/// Returns `DomainError::RecordNotFound` if the advertisement is unknown.
pub fn handle_review(
    command: &ReviewAdvertisement,
    desk: &mut AdvertisingDesk,
) -> Result<ReviewStatus, DomainError> {
    desk.registry.review(&command.advert_id)
}

/// Handles the `ConfirmPayment` command.
///
/// # Errors
///
/// Returns `DomainError::RecordNotFound` if the advertisement is unknown.
pub fn handle_confirm_payment(
    command: &ConfirmPayment,
    desk: &mut AdvertisingDesk,
) -> Result<(), DomainError> {
    let ad = desk.registry.get_mut(&command.advert_id)?;
    desk.payments.confirm(ad);
    Ok(())
}

/// Handles the `ApproveAdvertisement` command.
///
/// # Errors
///
/// Returns `DomainError::RecordNotFound` if the advertisement is unknown.
pub fn handle_approve(
    command: &ApproveAdvertisement,
    desk: &mut AdvertisingDesk,
) -> Result<ApprovalOutcome, DomainError> {
    desk.registry.approve(&command.advert_id)
}

/// Handles the `ForwardAdvertisement` command.
///
/// # Errors
///
/// Returns `DomainError::RecordNotFound` if the advertisement is unknown.
pub fn handle_forward(
    command: &ForwardAdvertisement,
    desk: &mut AdvertisingDesk,
) -> Result<ForwardingOutcome, DomainError> {
    let ad = desk.registry.get_mut(&command.advert_id)?;
    Ok(desk.processing.receive(ad))
}

/// Handles the `ArchiveUnusedAdvertisements` command, using the desk clock
/// for the current date. Returns the identifiers archived by this run.
pub fn handle_archive_unused(
    command: &ArchiveUnusedAdvertisements,
    desk: &mut AdvertisingDesk,
) -> Vec<AdvertId> {
    let today = desk.clock().today();
    let archived = desk
        .archive
        .archive_unused(desk.registry.advertisements_mut(), today);
    info!(
        correlation_id = %command.correlation_id,
        %today,
        archived = archived.len(),
        "archive run complete"
    );
    archived
}

macro_rules! impl_command {
    ($command:ty, $name:literal, |$cmd:ident, $desk:ident| $body:expr) => {
        impl Command<AdvertisingDesk> for $command {
            fn command_type(&self) -> &'static str {
                $name
            }

            fn correlation_id(&self) -> Uuid {
                self.correlation_id
            }

            fn execute(&self, desk: &mut AdvertisingDesk) -> Result<(), DomainError> {
                let $cmd = self;
                let $desk = desk;
                $body
            }
        }
    };
}

impl_command!(CaptureAdvertisement, "advertising.capture", |cmd, desk| {
    handle_capture(cmd, desk).map(drop)
});
impl_command!(ReviewAdvertisement, "advertising.review", |cmd, desk| {
    handle_review(cmd, desk).map(drop)
});
impl_command!(ConfirmPayment, "advertising.confirm_payment", |cmd, desk| {
    handle_confirm_payment(cmd, desk)
});
impl_command!(ApproveAdvertisement, "advertising.approve", |cmd, desk| {
    handle_approve(cmd, desk).map(drop)
});
impl_command!(ForwardAdvertisement, "advertising.forward", |cmd, desk| {
    handle_forward(cmd, desk).map(drop)
});
impl_command!(ArchiveUnusedAdvertisements, "advertising.archive_unused", |cmd, desk| {
    handle_archive_unused(cmd, desk);
    Ok(())
});
