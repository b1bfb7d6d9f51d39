//! Transactions recorded against an account and how they are listed.

use maud::{Markup, html};
use serde::Serialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::currency::{Currency, format_currency};

/// Whether money came into or left the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Money paid into the account.
    Credit,
    /// Money paid out of the account.
    Debit,
}

impl Direction {
    /// The sign shown in front of amounts moving in this direction.
    pub fn sign(self) -> char {
        match self {
            Direction::Credit => '+',
            Direction::Debit => '−',
        }
    }
}

/// A single, read-only entry in an account's history.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// A unique identifier, e.g. "tx-usd-1".
    pub id: String,
    /// When the transaction happened.
    pub date: Date,
    /// A brief description of the transaction or the payee.
    pub description: String,
    /// The amount of the transaction. Always positive, see `direction`.
    pub amount: f64,
    /// Whether the amount was paid in or out.
    pub direction: Direction,
    /// The account balance after this transaction.
    pub balance: f64,
    /// The currency of the owning account.
    pub currency: Currency,
}

impl Transaction {
    /// The amount with its sign and currency, e.g. "+ $3,500.00" or "− €450.00".
    pub fn signed_amount(&self) -> String {
        format!(
            "{} {}",
            self.direction.sign(),
            format_currency(self.amount, self.currency)
        )
    }
}

/// Keep the transactions whose description contains `search`, ignoring case.
///
/// An empty `search` keeps everything. The original order is preserved.
pub fn filter_transactions<'a>(transactions: &'a [Transaction], search: &str) -> Vec<&'a Transaction> {
    if search.is_empty() {
        return transactions.iter().collect();
    }

    let needle = search.to_lowercase();

    transactions
        .iter()
        .filter(|transaction| transaction.description.to_lowercase().contains(&needle))
        .collect()
}

const DATE_ATTRIBUTE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

pub(crate) fn date_datetime_attr(date: Date) -> String {
    date.format(DATE_ATTRIBUTE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Render one row of an account's transaction history.
pub fn transaction_list_item(transaction: &Transaction) -> Markup {
    let (icon, icon_style, amount_style) = match transaction.direction {
        Direction::Credit => ("↑", "text-green-500", "text-green-600 dark:text-green-400"),
        Direction::Debit => ("↓", "text-red-500", "text-gray-900 dark:text-white"),
    };
    let date = date_datetime_attr(transaction.date);

    html!(
        li
            class="flex items-center justify-between p-4 border-b border-gray-200
                dark:border-gray-700 hover:bg-gray-50 dark:hover:bg-gray-700/50"
            data-transaction-id=(transaction.id)
        {
            div class="flex items-center gap-4 min-w-0"
            {
                span class={ "text-xl shrink-0 " (icon_style) } aria-hidden="true" { (icon) }

                div class="min-w-0"
                {
                    p
                        class="font-semibold text-gray-800 dark:text-white truncate"
                        title=(transaction.description)
                    {
                        (transaction.description)
                    }
                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        time datetime=(date) { (date) }
                    }
                }
            }

            div class="text-right ml-4 shrink-0"
            {
                p class={ "font-semibold tabular-nums " (amount_style) } data-amount
                {
                    (transaction.signed_amount())
                }
                p class="text-sm tabular-nums text-gray-500 dark:text-gray-400" data-balance
                {
                    (format_currency(transaction.balance, transaction.currency))
                }
            }
        }
    )
}

#[cfg(test)]
pub(crate) mod test_utils {
    use time::Date;

    use crate::{
        currency::Currency,
        transaction::{Direction, Transaction},
    };

    pub(crate) fn transaction(
        id: &str,
        date: Date,
        description: &str,
        amount: f64,
        direction: Direction,
        balance: f64,
    ) -> Transaction {
        Transaction {
            id: id.to_owned(),
            date,
            description: description.to_owned(),
            amount,
            direction,
            balance,
            currency: Currency::Usd,
        }
    }
}

#[cfg(test)]
mod filter_transactions_tests {
    use time::macros::date;

    use crate::transaction::{
        Direction, Transaction, filter_transactions, test_utils::transaction,
    };

    fn get_transactions() -> Vec<Transaction> {
        vec![
            transaction(
                "1",
                date!(2024 - 07 - 28),
                "Transfer to John Appleseed",
                500.0,
                Direction::Debit,
                10250.75,
            ),
            transaction(
                "2",
                date!(2024 - 07 - 27),
                "Salary Deposit - Acme Corp",
                3500.0,
                Direction::Credit,
                10750.75,
            ),
            transaction(
                "3",
                date!(2024 - 07 - 24),
                "Coffee Shop",
                5.5,
                Direction::Debit,
                5950.74,
            ),
        ]
    }

    #[test]
    fn empty_search_returns_everything_in_order() {
        let transactions = get_transactions();

        let filtered = filter_transactions(&transactions, "");

        let want: Vec<&Transaction> = transactions.iter().collect();
        assert_eq!(filtered, want);
    }

    #[test]
    fn matches_substring_ignoring_case() {
        let transactions = get_transactions();

        let filtered = filter_transactions(&transactions, "aCmE");

        assert_eq!(filtered, vec![&transactions[1]]);
    }

    #[test]
    fn keeps_original_order_of_matches() {
        let transactions = get_transactions();

        let filtered = filter_transactions(&transactions, "o");

        let ids: Vec<&str> = filtered.iter().map(|tx| tx.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn no_match_returns_empty() {
        let transactions = get_transactions();

        let filtered = filter_transactions(&transactions, "zzz-not-here");

        assert!(filtered.is_empty());
    }
}
