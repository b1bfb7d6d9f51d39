//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::{Error, account::Bank, timezone::get_local_offset};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The accounts and transactions served by the app.
    pub bank: Arc<Bank>,
}

impl AppState {
    /// Create a new [AppState] serving the demo accounts.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(local_timezone: &str) -> Result<Self, Error> {
        Self::with_bank(local_timezone, Bank::with_mock_data())
    }

    /// Create a new [AppState] serving the accounts in `bank`.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn with_bank(local_timezone: &str, bank: Bank) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            bank: Arc::new(bank),
        })
    }
}
