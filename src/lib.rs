//! Magic Bank is a demo banking dashboard for a USD and a EUR account.
//!
//! This library provides a web server that directly serves HTML pages. The
//! pages use [htmx](https://htmx.org) for the interactive parts: filtering an
//! account's transactions, checking a transfer as it is typed and confirming
//! it. All data is mocked in memory and no money is ever moved.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod account;
mod alert;
mod app_state;
mod currency;
mod dashboard;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod layout;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod settings;
mod static_pages;
#[cfg(test)]
mod test_utils;
mod timezone;
mod transaction;
mod transfer;

pub use account::{Account, Bank};
pub use app_state::AppState;
pub use currency::Currency;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{Direction, Transaction};
pub use transfer::{ConfirmedTransfer, Recipient, TransferDraft, TransferEvent, TransferStage};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
