//! The dashboard: an overview of every account.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    account::{Bank, balance_card},
    html::{CARD_DESCRIPTION_STYLE, card},
    layout::{PageLayout, page},
    navigation::ActivePage,
    timezone::current_local_year,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The mock accounts shown as balance cards.
    pub bank: Arc<Bank>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            bank: state.bank.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display a balance card for each account and a short welcome message.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let year = current_local_year(&state.local_timezone)?;

    let layout = PageLayout {
        title: "Dashboard",
        active_page: ActivePage::Dashboard,
        year,
    };

    Ok(page(layout, &dashboard_view(&state.bank)).into_response())
}

fn dashboard_view(bank: &Bank) -> Markup {
    let welcome = html!(
        p class=(CARD_DESCRIPTION_STYLE)
        {
            "You can view detailed transaction history for each currency account or \
            initiate a new transfer using the buttons on the cards above. Your user \
            settings and notifications can be accessed from the menu at the top right."
        }
    );

    html!(
        div class="flex flex-col gap-6"
        {
            div
            {
                h1 class="text-3xl font-bold tracking-tight" { "Dashboard" }
                p class=(CARD_DESCRIPTION_STYLE) { "An overview of your multi-currency accounts." }
            }

            section class="grid gap-6 md:grid-cols-2"
            {
                @for account in bank.accounts() {
                    (balance_card(account))
                }
            }

            (card(
                "Welcome to Magic Bank",
                Some("Your central hub for managing international finances with clarity and ease."),
                &welcome,
            ))
        }
    )
}

#[cfg(test)]
mod dashboard_tests {
    use std::sync::Arc;

    use axum::extract::State;
    use scraper::Selector;

    use crate::{
        Error,
        account::Bank,
        dashboard::{DashboardState, get_dashboard_page},
        test_utils::{assert_content_type, assert_status_ok, assert_valid_html, parse_html_document},
    };

    fn get_state(local_timezone: &str) -> DashboardState {
        DashboardState {
            bank: Arc::new(Bank::with_mock_data()),
            local_timezone: local_timezone.to_owned(),
        }
    }

    #[tokio::test]
    async fn shows_a_card_per_account() {
        let response = get_dashboard_page(State(get_state("Etc/UTC")))
            .await
            .expect("Could not render dashboard");

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let balances: Vec<(String, String)> = html
            .select(&Selector::parse("article[data-account]").unwrap())
            .map(|card| {
                let code = card.value().attr("data-account").unwrap_or_default().to_owned();
                let balance = card
                    .select(&Selector::parse("[data-balance]").unwrap())
                    .next()
                    .expect("No balance found")
                    .text()
                    .collect::<String>()
                    .trim()
                    .to_owned();
                (code, balance)
            })
            .collect();

        assert_eq!(
            balances,
            vec![
                ("USD".to_owned(), "$10,250.75".to_owned()),
                ("EUR".to_owned(), "€4,550.00".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn shows_welcome_card() {
        let response = get_dashboard_page(State(get_state("Etc/UTC")))
            .await
            .expect("Could not render dashboard");

        let html = parse_html_document(response).await;
        let titles: Vec<String> = html
            .select(&Selector::parse("section h2").unwrap())
            .map(|title| title.text().collect())
            .collect();
        assert!(
            titles.contains(&"Welcome to Magic Bank".to_owned()),
            "got {titles:?}"
        );
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let result = get_dashboard_page(State(get_state("Not/AZone"))).await;

        assert_eq!(
            result.err(),
            Some(Error::InvalidTimezoneError("Not/AZone".to_owned()))
        );
    }
}
