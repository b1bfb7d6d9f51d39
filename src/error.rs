//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A currency code that the bank does not hold an account in.
    #[error("unsupported currency code \"{0}\"")]
    InvalidCurrency(String),

    /// The transfer amount is not a number greater than zero.
    #[error("\"{0}\" is not a valid transfer amount")]
    InvalidAmount(String),

    /// The transfer is missing the source account or a recipient detail.
    #[error("the transfer is missing required details")]
    IncompleteTransfer,

    /// The account statement could not be written as CSV.
    ///
    /// Callers should pass in the original error as a string.
    #[error("could not export the account statement: {0}")]
    StatementExport(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::StatementExport(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StatementExport(_) => {
                tracing::error!("{self}");
                InternalServerError {
                    description: "Statement Unavailable",
                    fix: "The statement could not be generated. Please try again later.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidCurrency(code) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Unknown account".to_owned(),
                    details: format!(
                        "There is no account held in \"{code}\". Choose the USD or EUR account."
                    ),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "\"{amount}\" is not a valid amount. Enter a number greater than zero."
                    ),
                },
            ),
            Error::IncompleteTransfer => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Transfer details missing".to_owned(),
                    details: "Select a source account and fill in the recipient's name, \
                        IBAN and BIC before reviewing the transfer."
                        .to_owned(),
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::ErrorSimple {
                    message: "The requested resource could not be found.".to_owned(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
