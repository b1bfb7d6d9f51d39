//! The three step transfer page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    account::{Bank, account_selector},
    currency::{Currency, parse_currency_hint},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_DESCRIPTION_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        card,
    },
    layout::{PageLayout, breadcrumb, page},
    navigation::ActivePage,
    timezone::current_local_year,
    transfer::draft::TransferDraft,
};

/// The element the review button is swapped into on every form change.
pub const REVIEW_BUTTON_ID: &str = "review-button";
/// The element that shows the selected account's currency next to the amount.
pub const AMOUNT_CURRENCY_ID: &str = "amount-currency";
/// The element the review dialog is swapped into.
pub const DIALOG_CONTAINER_ID: &str = "dialog-container";

/// The state needed for [get_transfer_page].
#[derive(Debug, Clone)]
pub struct TransferState {
    pub bank: Arc<Bank>,
    pub local_timezone: String,
}

impl FromRef<AppState> for TransferState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            bank: state.bank.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TransferQuery {
    /// Preselects the account with this currency code.
    ///
    /// Unknown codes are ignored and no account is selected.
    pub currency: Option<String>,
}

/// Render the transfer page, preselecting the account from the `currency` query parameter.
pub async fn get_transfer_page(
    State(state): State<TransferState>,
    Query(query): Query<TransferQuery>,
) -> Result<Response, Error> {
    let year = current_local_year(&state.local_timezone)?;
    let draft = TransferDraft::new(parse_currency_hint(query.currency.as_deref()));

    let layout = PageLayout {
        title: "Transfer",
        active_page: ActivePage::Transfer,
        year,
    };

    Ok(page(layout, &transfer_view(&draft, &state.bank)).into_response())
}

fn transfer_view(draft: &TransferDraft, bank: &Bank) -> Markup {
    let account_step = account_selector(draft.account, bank);

    let recipient_step = html!(
        div class="grid gap-4"
        {
            (text_input("name", "Recipient Name", "Jane Doe", &draft.recipient.name))
            (text_input("iban", "IBAN", "DE89 3704 0044 0532 0130 00", &draft.recipient.iban))
            (text_input("bic", "BIC / SWIFT", "COBADEFFXXX", &draft.recipient.bic))
        }
    );

    let amount_step = html!(
        label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

        div class="flex items-center gap-2"
        {
            input
                id="amount"
                type="number"
                name="amount"
                placeholder="0.00"
                min="0.01"
                step="0.01"
                value=(draft.amount)
                required
                class=(FORM_TEXT_INPUT_STYLE);

            (amount_currency(draft.account, false))
        }
    );

    html!(
        div class="flex flex-col gap-6 max-w-3xl"
        {
            (breadcrumb("Transfer"))

            div
            {
                h1 class="text-2xl font-bold" { "Send Money" }
                p class=(CARD_DESCRIPTION_STYLE) { "Transfer funds from one of your accounts." }
            }

            // htmx halts requests from an invalid form, so browser validation
            // would leave a stale review button behind.
            form
                id="transfer-form"
                novalidate
                hx-post=(endpoints::TRANSFER_VALIDATE)
                hx-trigger="input changed delay:100ms, change"
                hx-target={ "#" (REVIEW_BUTTON_ID) }
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="flex flex-col gap-6"
            {
                (card("Step 1: Select Account", Some("Choose the account to send money from."), &account_step))
                (card("Step 2: Recipient Details", Some("Who are you sending money to?"), &recipient_step))
                (card("Step 3: Amount", Some("How much would you like to send?"), &amount_step))

                div class="flex justify-end"
                {
                    (review_button(draft.is_reviewable()))
                }
            }

            div id=(DIALOG_CONTAINER_ID) {}
        }
    )
}

fn text_input(name: &str, label: &str, placeholder: &str, value: &str) -> Markup {
    html!(
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                id=(name)
                type="text"
                name=(name)
                placeholder=(placeholder)
                value=(value)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    )
}

/// The button that opens the review dialog, enabled only for a reviewable transfer.
///
/// It posts the enclosing transfer form, so it must be rendered inside it.
pub fn review_button(enabled: bool) -> Markup {
    html!(
        button
            id=(REVIEW_BUTTON_ID)
            type="button"
            hx-post=(endpoints::TRANSFER_REVIEW)
            hx-target={ "#" (DIALOG_CONTAINER_ID) }
            hx-swap="innerHTML"
            hx-target-error="#alert-container"
            disabled[!enabled]
            class={ (BUTTON_PRIMARY_STYLE) " disabled:opacity-50 disabled:cursor-not-allowed" }
        {
            "Review Transfer"
        }
    )
}

/// The currency code shown next to the amount, or "N/A" before an account is picked.
///
/// With `out_of_band` set, htmx swaps it in place of the existing element.
pub fn amount_currency(account: Option<Currency>, out_of_band: bool) -> Markup {
    html!(
        span
            id=(AMOUNT_CURRENCY_ID)
            hx-swap-oob=[out_of_band.then_some("true")]
            class="font-semibold text-gray-500 dark:text-gray-400"
        {
            (account.map(Currency::code).unwrap_or("N/A"))
        }
    )
}

#[cfg(test)]
mod transfer_page_tests {
    use std::sync::Arc;

    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use scraper::{Html, Selector};

    use crate::{
        account::Bank,
        endpoints,
        test_utils::{assert_form_input, assert_hx_endpoint, assert_valid_html, must_get_form, parse_html_document},
        transfer::page::{TransferQuery, TransferState, get_transfer_page},
    };

    async fn render(currency: Option<&str>) -> Html {
        let state = TransferState {
            bank: Arc::new(Bank::with_mock_data()),
            local_timezone: "Etc/UTC".to_owned(),
        };
        let query = TransferQuery {
            currency: currency.map(str::to_owned),
        };

        let response = get_transfer_page(State(state), Query(query))
            .await
            .expect("Could not render transfer page");

        assert_eq!(response.status(), StatusCode::OK);
        parse_html_document(response).await
    }

    fn checked_accounts(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("input[type=radio][checked]").unwrap())
            .filter_map(|input| input.value().attr("value"))
            .map(str::to_owned)
            .collect()
    }

    fn text_of(html: &Html, selector: &str) -> String {
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap_or_else(|| panic!("No {selector} found"))
            .text()
            .collect::<String>()
            .trim()
            .to_owned()
    }

    #[tokio::test]
    async fn renders_form() {
        let html = render(None).await;

        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::TRANSFER_VALIDATE, "hx-post");
        assert_form_input(&form, "name", "text");
        assert_form_input(&form, "iban", "text");
        assert_form_input(&form, "bic", "text");
        assert_form_input(&form, "amount", "number");

        let radios = html
            .select(&Selector::parse("input[type=radio][name=account]").unwrap())
            .count();
        assert_eq!(radios, 2);
    }

    #[tokio::test]
    async fn every_change_reaches_the_server() {
        let html = render(None).await;

        let form = must_get_form(&html);
        assert_eq!(form.value().attr("id"), Some("transfer-form"));
        assert!(
            form.value().attr("novalidate").is_some(),
            "want transfer form to skip browser validation"
        );
    }

    #[tokio::test]
    async fn nothing_selected_without_currency() {
        let html = render(None).await;

        assert!(checked_accounts(&html).is_empty());
        assert_eq!(text_of(&html, "#amount-currency"), "N/A");
    }

    #[tokio::test]
    async fn currency_preselects_account() {
        let html = render(Some("eur")).await;

        assert_eq!(checked_accounts(&html), vec!["EUR"]);
        assert_eq!(text_of(&html, "#amount-currency"), "EUR");
    }

    #[tokio::test]
    async fn unknown_currency_is_ignored() {
        let html = render(Some("GBP")).await;

        assert!(checked_accounts(&html).is_empty());
    }

    #[tokio::test]
    async fn review_button_starts_disabled() {
        let html = render(Some("USD")).await;

        let button = html
            .select(&Selector::parse("#review-button").unwrap())
            .next()
            .expect("No review button found");
        assert!(button.value().attr("disabled").is_some());
        assert_eq!(button.value().attr("hx-post"), Some(endpoints::TRANSFER_REVIEW));
        assert_eq!(button.value().attr("hx-target"), Some("#dialog-container"));
    }

    #[tokio::test]
    async fn has_dialog_container() {
        let html = render(None).await;

        assert!(
            html.select(&Selector::parse("div#dialog-container").unwrap())
                .next()
                .is_some()
        );
    }
}
