//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/settings/{tab}', use [format_endpoint].

use crate::currency::Currency;

/// The dashboard, which is also the landing page.
pub const DASHBOARD_VIEW: &str = "/";
/// The page for displaying an account's balance and transaction history.
pub const ACCOUNT_DETAILS_VIEW: &str = "/account-details";
/// The route for downloading an account's transactions as a CSV file.
pub const ACCOUNT_STATEMENT: &str = "/account-details/statement";
/// The page for initiating a transfer.
pub const TRANSFER_VIEW: &str = "/transfer";
/// The page for managing account settings.
pub const SETTINGS_VIEW: &str = "/settings";
/// The terms of service.
pub const TERMS_VIEW: &str = "/terms";
/// The privacy policy.
pub const PRIVACY_VIEW: &str = "/privacy";
/// Help and support.
pub const HELP_VIEW: &str = "/help";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route that re-renders the transfer review button as the form changes.
pub const TRANSFER_VALIDATE: &str = "/api/transfer/validate";
/// The route that renders the transfer confirmation dialog.
pub const TRANSFER_REVIEW: &str = "/api/transfer/review";
/// The route for confirming a transfer.
pub const TRANSFER_CONFIRM: &str = "/api/transfer/confirm";
/// The route for saving one tab of the settings page.
pub const SETTINGS_API: &str = "/api/settings/{tab}";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/settings/{tab}', '{tab}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: impl std::fmt::Display) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}

/// The account details page for the account held in `currency`.
pub fn account_details_url(currency: Currency) -> String {
    format!("{ACCOUNT_DETAILS_VIEW}?currency={}", currency.code())
}

/// The CSV statement for the account held in `currency`.
pub fn account_statement_url(currency: Currency) -> String {
    format!("{ACCOUNT_STATEMENT}?currency={}", currency.code())
}

/// The transfer page with the account held in `currency` pre-selected.
pub fn transfer_url(currency: Currency) -> String {
    format!("{TRANSFER_VIEW}?currency={}", currency.code())
}
