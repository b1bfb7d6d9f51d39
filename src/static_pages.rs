//! The pages linked from the footer: terms of service, privacy policy and help.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{CARD_DESCRIPTION_STYLE, card, link},
    layout::{PageLayout, breadcrumb, page},
    navigation::ActivePage,
    timezone::current_local_year,
};

/// The state needed to render the footer pages.
#[derive(Debug, Clone)]
pub struct StaticPageState {
    pub local_timezone: String,
}

impl FromRef<AppState> for StaticPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

fn static_page(
    state: &StaticPageState,
    title: &str,
    sections: &[(&str, Markup)],
) -> Result<Response, Error> {
    let year = current_local_year(&state.local_timezone)?;
    let layout = PageLayout {
        title,
        active_page: ActivePage::Other,
        year,
    };

    let content = html!(
        div class="flex flex-col gap-6 max-w-3xl"
        {
            (breadcrumb(title))
            h1 class="text-2xl font-bold tracking-tight" { (title) }

            @for (heading, body) in sections {
                (card(heading, None, body))
            }
        }
    );

    Ok(page(layout, &content).into_response())
}

fn paragraph(text: &str) -> Markup {
    html!(p class=(CARD_DESCRIPTION_STYLE) { (text) })
}

pub async fn get_terms_page(State(state): State<StaticPageState>) -> Result<Response, Error> {
    static_page(
        &state,
        "Terms of Service",
        &[
            (
                "Demonstration only",
                paragraph(
                    "Magic Bank is a demonstration. The accounts, balances and \
                    transactions shown are fictional.",
                ),
            ),
            (
                "No real money",
                paragraph(
                    "Transfers are never sent. Confirming a transfer only shows a \
                    notification and does not change any balance.",
                ),
            ),
        ],
    )
}

pub async fn get_privacy_page(State(state): State<StaticPageState>) -> Result<Response, Error> {
    static_page(
        &state,
        "Privacy Policy",
        &[
            (
                "What we store",
                paragraph(
                    "Nothing. Details entered into the transfer and settings forms are \
                    not saved.",
                ),
            ),
            (
                "Cookies",
                paragraph(
                    "A short-lived cookie carries the confirmation message from a \
                    transfer to the next page. It is removed as soon as it is shown.",
                ),
            ),
        ],
    )
}

pub async fn get_help_page(State(state): State<StaticPageState>) -> Result<Response, Error> {
    let transfers = html!(
        p class=(CARD_DESCRIPTION_STYLE)
        {
            "Open the " (link(endpoints::TRANSFER_VIEW, "transfer page"))
            ", pick the account to send from, fill in the recipient's name, IBAN and \
            BIC, enter an amount and review the transfer before confirming it."
        }
    );
    let history = html!(
        p class=(CARD_DESCRIPTION_STYLE)
        {
            "Each account's history can be filtered by description and downloaded \
            as a CSV statement from its details page."
        }
    );

    static_page(
        &state,
        "Help & Support",
        &[("Sending money", transfers), ("Transaction history", history)],
    )
}
