//! Cards for picking which account a transfer is sent from.

use maud::{Markup, html};

use crate::{
    account::Bank,
    currency::{Currency, format_currency},
};

/// The name of the form field the selected currency code is submitted under.
pub const ACCOUNT_FIELD: &str = "account";

const OPTION_STYLE: &str = "flex items-center gap-3 p-4 rounded-lg border bg-white \
    dark:bg-gray-800 cursor-pointer transition hover:border-blue-600 \
    border-gray-300 dark:border-gray-600 \
    has-[:checked]:border-2 has-[:checked]:border-blue-600 has-[:checked]:bg-blue-50 \
    has-[:checked]:dark:bg-blue-600/20";

fn currency_icon(currency: Currency) -> Markup {
    let style = match currency {
        Currency::Usd => "text-green-600",
        Currency::Eur => "text-blue-600",
    };

    html!(
        span class={ "text-2xl w-6 text-center " (style) } aria-hidden="true" { (currency.symbol()) }
    )
}

/// Render one selectable card per account in `bank`.
///
/// The card for `selected`, if any, is checked. Changing the selection fires a
/// `change` event on the enclosing form, which reports the chosen code under
/// [ACCOUNT_FIELD].
pub fn account_selector(selected: Option<Currency>, bank: &Bank) -> Markup {
    html!(
        fieldset
            class="grid grid-cols-1 md:grid-cols-2 gap-4"
            aria-label="Select source account"
        {
            @for account in bank.accounts() {
                @let code = account.currency.code();
                @let id = format!("account-{code}");

                label for=(id) class=(OPTION_STYLE)
                {
                    (currency_icon(account.currency))

                    div class="flex-1"
                    {
                        p class="font-semibold" { (account.currency.account_name()) }
                        p class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            "Balance: " (format_currency(account.balance, account.currency))
                        }
                    }

                    input
                        type="radio"
                        id=(id)
                        name=(ACCOUNT_FIELD)
                        value=(code)
                        checked[selected == Some(account.currency)]
                        class="h-4 w-4 text-blue-600";
                }
            }
        }
    )
}

#[cfg(test)]
mod account_selector_tests {
    use scraper::{Html, Selector};

    use crate::{
        account::{Bank, account_selector},
        currency::Currency,
        test_utils::assert_valid_html,
    };

    fn checked_values(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("input[type=radio][checked]").unwrap())
            .filter_map(|input| input.value().attr("value"))
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn renders_one_option_per_account() {
        let bank = Bank::with_mock_data();

        let html = Html::parse_fragment(&account_selector(None, &bank).into_string());

        assert_valid_html(&html);
        let values: Vec<&str> = html
            .select(&Selector::parse("input[type=radio]").unwrap())
            .filter_map(|input| input.value().attr("value"))
            .collect();
        assert_eq!(values, vec!["USD", "EUR"]);
        assert!(checked_values(&html).is_empty());
    }

    #[test]
    fn only_selected_option_is_checked() {
        let bank = Bank::with_mock_data();

        let eur = Html::parse_fragment(&account_selector(Some(Currency::Eur), &bank).into_string());
        let usd = Html::parse_fragment(&account_selector(Some(Currency::Usd), &bank).into_string());

        assert_eq!(checked_values(&eur), vec!["EUR"]);
        assert_eq!(checked_values(&usd), vec!["USD"]);
    }

    #[test]
    fn shows_formatted_balances() {
        let bank = Bank::with_mock_data();

        let html = Html::parse_fragment(&account_selector(None, &bank).into_string());

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Balance: $10,250.75"), "got {text}");
        assert!(text.contains("Balance: €4,550.00"), "got {text}");
    }
}
