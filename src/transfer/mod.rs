//! Sending money from one of the accounts to a recipient.
//!
//! The form is checked on every change and the review button is only enabled
//! once the transfer is complete. Confirming a transfer does not change any
//! balances.

mod draft;
mod endpoints;
mod notice;
mod page;

pub use draft::{ConfirmedTransfer, Recipient, TransferDraft, TransferEvent, TransferStage};
pub use endpoints::{confirm_transfer, review_transfer, validate_transfer};
pub use notice::{NOTICE_COOKIE, TransferNotice, take_transfer_notice};
pub use page::get_transfer_page;
