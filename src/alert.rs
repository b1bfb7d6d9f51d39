//! Alert system for displaying success and error messages to users.
//!
//! Alerts are either swapped into the `#alert-container` element by htmx or
//! rendered directly into a page as a toast that dismisses itself.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// How long a toast stays on screen before it is dismissed.
pub const TOAST_DURATION_MS: u32 = 5000;

/// An alert message with success or error styling.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A success message with extra details.
    Success { message: String, details: String },
    /// A success message on its own.
    SuccessSimple { message: String },
    /// An error message with extra details.
    Error { message: String, details: String },
    /// An error message on its own.
    ErrorSimple { message: String },
}

impl Alert {
    fn is_success(&self) -> bool {
        matches!(self, Alert::Success { .. } | Alert::SuccessSimple { .. })
    }

    fn parts(&self) -> (&str, Option<&str>) {
        match self {
            Alert::Success { message, details } | Alert::Error { message, details } => {
                (message.as_str(), Some(details.as_str()))
            }
            Alert::SuccessSimple { message } | Alert::ErrorSimple { message } => (message.as_str(), None),
        }
    }

    /// Render the alert as a dismissable panel.
    pub fn into_html(self) -> Markup {
        self.render(None)
    }

    /// Render the alert as a toast that removes itself after [TOAST_DURATION_MS].
    pub fn into_toast_html(self) -> Markup {
        self.render(Some(TOAST_DURATION_MS))
    }

    fn render(&self, dismiss_after_ms: Option<u32>) -> Markup {
        let (message, details) = self.parts();
        let style = if self.is_success() {
            "flex items-start gap-3 p-4 mb-4 rounded-lg border border-green-300 \
            bg-green-50 text-green-800 dark:bg-gray-800 dark:text-green-400 \
            dark:border-green-800"
        } else {
            "flex items-start gap-3 p-4 mb-4 rounded-lg border border-red-300 \
            bg-red-50 text-red-800 dark:bg-gray-800 dark:text-red-400 \
            dark:border-red-800"
        };

        html!(
            div
                role="alert"
                class=(style)
                data-dismiss-after=[dismiss_after_ms]
            {
                div class="flex-1"
                {
                    p class="font-semibold" { (message) }

                    @if let Some(details) = details {
                        @if !details.is_empty() {
                            p class="text-sm" { (details) }
                        }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="text-sm font-medium opacity-70 hover:opacity-100"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "✕"
                }
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        let status_code = if self.is_success() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status_code, Html(self.into_html().into_string())).into_response()
    }
}
