//! The account details page: balance, searchable transaction history and statement download.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use axum_htmx::HxTarget;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    account::Bank,
    currency::{Currency, format_currency, parse_currency_hint},
    endpoints,
    html::{BUTTON_SECONDARY_STYLE, CARD_DESCRIPTION_STYLE, CARD_STYLE, FORM_TEXT_INPUT_STYLE},
    layout::{PageLayout, breadcrumb, page},
    navigation::ActivePage,
    timezone::current_local_year,
    transaction::{Transaction, filter_transactions, transaction_list_item},
    transfer::take_transfer_notice,
};

/// The id of the element that search requests re-render.
const TRANSACTION_LIST_ID: &str = "transaction-list";

/// The state needed for [get_account_details_page].
#[derive(Debug, Clone)]
pub struct AccountDetailsState {
    /// The mock accounts and their histories.
    pub bank: Arc<Bank>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for AccountDetailsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            bank: state.bank.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountDetailsQuery {
    /// The account to show. Missing or unknown codes show the USD account.
    pub currency: Option<String>,
    /// Only show transactions whose description contains this text.
    #[serde(default)]
    pub search: String,
}

/// Display an account's balance and transaction history.
///
/// Requests from the search box only get the transaction list back. Full page
/// renders show, and clear, any notice left by a confirmed transfer.
pub async fn get_account_details_page(
    State(state): State<AccountDetailsState>,
    HxTarget(target): HxTarget,
    jar: CookieJar,
    Query(query): Query<AccountDetailsQuery>,
) -> Result<Response, Error> {
    let currency = parse_currency_hint(query.currency.as_deref()).unwrap_or(Currency::Usd);
    let transactions = state.bank.transactions(currency);
    let matches = filter_transactions(&transactions, &query.search);

    if target.as_deref() == Some(TRANSACTION_LIST_ID) {
        return Ok(transaction_list(&matches).into_response());
    }

    let year = current_local_year(&state.local_timezone)?;
    let (jar, notice) = take_transfer_notice(jar);
    let toast = notice.map(|notice| notice.into_alert().into_toast_html());

    let layout = PageLayout {
        title: "Account Details",
        active_page: ActivePage::Account(currency),
        year,
    };
    let content = account_details_view(
        currency,
        state.bank.balance(currency),
        &query.search,
        &matches,
        toast,
    );

    Ok((jar, page(layout, &content)).into_response())
}

fn account_details_view(
    currency: Currency,
    balance: f64,
    search: &str,
    transactions: &[&Transaction],
    toast: Option<Markup>,
) -> Markup {
    let account_name = currency.account_name();

    html!(
        @if let Some(toast) = toast {
            div id="toast-container" class="fixed top-4 right-4 z-50 w-full max-w-sm"
            {
                (toast)
            }
        }

        div class="flex flex-col gap-6"
        {
            (breadcrumb(&account_name))

            section class={ (CARD_STYLE) " p-6 flex flex-col sm:flex-row sm:items-end justify-between gap-4" }
            {
                div
                {
                    h1 class="text-2xl font-bold" { (account_name) }
                    p class=(CARD_DESCRIPTION_STYLE) { "Total Balance" }
                    p
                        class="text-4xl font-extrabold tracking-tight tabular-nums"
                        data-total-balance
                    {
                        (format_currency(balance, currency))
                    }
                }

                a
                    href=(endpoints::transfer_url(currency))
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Transfer →"
                }
            }

            section class=(CARD_STYLE)
            {
                header
                    class="flex flex-col sm:flex-row sm:items-center justify-between gap-4
                        p-6 pb-4 border-b border-gray-200 dark:border-gray-700"
                {
                    h2 class="text-xl font-semibold" { "Transaction History" }

                    div class="flex items-center gap-2"
                    {
                        input
                            type="search"
                            name="search"
                            value=(search)
                            placeholder="Filter transactions..."
                            aria-label="Filter transactions"
                            hx-get=(endpoints::account_details_url(currency))
                            hx-trigger="input changed delay:200ms, keyup[key=='Enter'], search"
                            hx-target={ "#" (TRANSACTION_LIST_ID) }
                            hx-swap="outerHTML"
                            hx-include="this"
                            class=(FORM_TEXT_INPUT_STYLE);

                        a
                            href=(endpoints::account_statement_url(currency))
                            download
                            class={ (BUTTON_SECONDARY_STYLE) " whitespace-nowrap" }
                        {
                            "Statement"
                        }
                    }
                }

                (transaction_list(transactions))
            }
        }
    )
}

fn transaction_list(transactions: &[&Transaction]) -> Markup {
    html!(
        div id=(TRANSACTION_LIST_ID)
        {
            @if transactions.is_empty() {
                p class="p-8 text-center text-gray-500 dark:text-gray-400"
                {
                    "No transactions found for your search."
                }
            } @else {
                ul
                {
                    @for transaction in transactions {
                        (transaction_list_item(transaction))
                    }
                }
            }
        }
    )
}
