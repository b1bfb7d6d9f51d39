//! The card that summarises one account on the dashboard.

use maud::{Markup, html};

use crate::{
    account::Account,
    currency::format_decimal,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_DESCRIPTION_STYLE, CARD_STYLE},
};

/// Render the balance of `account` with links to its history and to start a transfer from it.
pub fn balance_card(account: &Account) -> Markup {
    let currency = account.currency;

    html!(
        article
            class={ (CARD_STYLE) " flex flex-col w-full max-w-sm hover:shadow-lg transition-shadow" }
            data-account=(currency.code())
        {
            header class="p-6 pb-2"
            {
                h2 class="text-2xl font-bold flex items-center gap-3"
                {
                    span aria-hidden="true" class="text-gray-500" { "🏦" }
                    (currency.account_name())
                }
                p class=(CARD_DESCRIPTION_STYLE) { "Your available balance" }
            }

            div class="flex-1 flex items-center justify-center p-6"
            {
                span
                    class="text-5xl font-extrabold tracking-tight text-gray-800 dark:text-white"
                    data-balance
                {
                    (currency.symbol()) (format_decimal(account.balance))
                }
            }

            footer
                class="flex gap-3 p-4 border-t border-gray-200 bg-gray-50
                    dark:border-gray-700 dark:bg-gray-900/40 rounded-b-lg"
            {
                a
                    href=(endpoints::account_details_url(currency))
                    class={ (BUTTON_PRIMARY_STYLE) " flex-1 text-center" }
                {
                    "View History"
                }

                a
                    href=(endpoints::transfer_url(currency))
                    class={ (BUTTON_SECONDARY_STYLE) " flex-1 text-center" }
                {
                    "Transfer →"
                }
            }
        }
    )
}
