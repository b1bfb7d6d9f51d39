//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    account::{get_account_details_page, get_account_statement},
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    settings::{get_settings_page, save_settings},
    static_pages::{get_help_page, get_privacy_page, get_terms_page},
    transfer::{confirm_transfer, get_transfer_page, review_transfer, validate_transfer},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::ACCOUNT_DETAILS_VIEW, get(get_account_details_page))
        .route(endpoints::ACCOUNT_STATEMENT, get(get_account_statement))
        .route(endpoints::TRANSFER_VIEW, get(get_transfer_page))
        .route(endpoints::SETTINGS_VIEW, get(get_settings_page))
        .route(endpoints::TERMS_VIEW, get(get_terms_page))
        .route(endpoints::PRIVACY_VIEW, get(get_privacy_page))
        .route(endpoints::HELP_VIEW, get(get_help_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::TRANSFER_VALIDATE, post(validate_transfer))
        .route(endpoints::TRANSFER_REVIEW, post(review_transfer))
        .route(endpoints::TRANSFER_CONFIRM, post(confirm_transfer))
        .route(endpoints::SETTINGS_API, post(save_settings));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
