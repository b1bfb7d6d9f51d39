use time::macros::date;

use crate::{
    currency::Currency,
    transaction::{Direction, Transaction},
};

/// The money held in one currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The currency the account is held in. There is one account per currency.
    pub currency: Currency,
    /// The available balance.
    pub balance: f64,
}

/// The in-memory dataset the application serves: every account and its history.
///
/// The dataset is fixed at start-up and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Bank {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
}

impl Bank {
    /// Create a bank from `accounts` and their `transactions`.
    ///
    /// Transactions are listed in the order given.
    pub fn new(accounts: Vec<Account>, transactions: Vec<Transaction>) -> Self {
        Self {
            accounts,
            transactions,
        }
    }

    /// The demo dataset with one USD and one EUR account.
    pub fn with_mock_data() -> Self {
        let accounts = vec![
            Account {
                currency: Currency::Usd,
                balance: 10250.75,
            },
            Account {
                currency: Currency::Eur,
                balance: 4550.00,
            },
        ];

        let transactions = vec![
            mock_transaction(
                "tx-usd-1",
                date!(2024 - 07 - 28),
                "Transfer to John Appleseed",
                500.00,
                Direction::Debit,
                10250.75,
                Currency::Usd,
            ),
            mock_transaction(
                "tx-usd-2",
                date!(2024 - 07 - 27),
                "Salary Deposit - Acme Corp",
                3500.00,
                Direction::Credit,
                10750.75,
                Currency::Usd,
            ),
            mock_transaction(
                "tx-usd-3",
                date!(2024 - 07 - 26),
                "Online Shopping - TechStore",
                199.99,
                Direction::Debit,
                7250.75,
                Currency::Usd,
            ),
            mock_transaction(
                "tx-usd-4",
                date!(2024 - 07 - 25),
                "Incoming Wire - Client Payment",
                1500.00,
                Direction::Credit,
                7450.74,
                Currency::Usd,
            ),
            mock_transaction(
                "tx-usd-5",
                date!(2024 - 07 - 24),
                "Coffee Shop",
                5.50,
                Direction::Debit,
                5950.74,
                Currency::Usd,
            ),
            mock_transaction(
                "tx-eur-1",
                date!(2024 - 07 - 28),
                "Hotel Booking - Paris",
                450.00,
                Direction::Debit,
                4550.00,
                Currency::Eur,
            ),
            mock_transaction(
                "tx-eur-2",
                date!(2024 - 07 - 26),
                "EU Stock Dividend",
                120.50,
                Direction::Credit,
                5000.00,
                Currency::Eur,
            ),
            mock_transaction(
                "tx-eur-3",
                date!(2024 - 07 - 25),
                "Restaurant \"Le Bon\"",
                85.70,
                Direction::Debit,
                4879.50,
                Currency::Eur,
            ),
            mock_transaction(
                "tx-eur-4",
                date!(2024 - 07 - 22),
                "Refund from Online Store",
                49.99,
                Direction::Credit,
                4965.20,
                Currency::Eur,
            ),
        ];

        Self::new(accounts, transactions)
    }

    /// All accounts, in the order they were added.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The account held in `currency`, if there is one.
    pub fn account(&self, currency: Currency) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.currency == currency)
    }

    /// The balance of the account held in `currency`, or zero if there is no such account.
    pub fn balance(&self, currency: Currency) -> f64 {
        self.account(currency)
            .map(|account| account.balance)
            .unwrap_or_default()
    }

    /// The history of the account held in `currency`, most recent first.
    pub fn transactions(&self, currency: Currency) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.currency == currency)
            .cloned()
            .collect()
    }
}

fn mock_transaction(
    id: &str,
    date: time::Date,
    description: &str,
    amount: f64,
    direction: Direction,
    balance: f64,
    currency: Currency,
) -> Transaction {
    Transaction {
        id: id.to_owned(),
        date,
        description: description.to_owned(),
        amount,
        direction,
        balance,
        currency,
    }
}

#[cfg(test)]
mod bank_tests {
    use crate::{
        account::{Account, Bank},
        currency::Currency,
    };

    #[test]
    fn mock_data_has_one_account_per_currency() {
        let bank = Bank::with_mock_data();

        for currency in Currency::ALL {
            let matching = bank
                .accounts()
                .iter()
                .filter(|account| account.currency == currency)
                .count();
            assert_eq!(matching, 1, "want one {currency} account, got {matching}");
        }
    }

    #[test]
    fn transactions_belong_to_requested_account() {
        let bank = Bank::with_mock_data();

        let usd = bank.transactions(Currency::Usd);
        let eur = bank.transactions(Currency::Eur);

        assert_eq!(usd.len(), 5);
        assert_eq!(eur.len(), 4);
        assert!(usd.iter().all(|tx| tx.currency == Currency::Usd));
        assert!(eur.iter().all(|tx| tx.currency == Currency::Eur));
    }

    #[test]
    fn balance_matches_most_recent_transaction() {
        let bank = Bank::with_mock_data();

        for currency in Currency::ALL {
            let latest = &bank.transactions(currency)[0];
            assert_eq!(bank.balance(currency), latest.balance);
        }
    }

    #[test]
    fn transaction_amounts_are_positive() {
        let bank = Bank::with_mock_data();

        for currency in Currency::ALL {
            assert!(bank.transactions(currency).iter().all(|tx| tx.amount > 0.0));
        }
    }

    #[test]
    fn missing_account_has_zero_balance() {
        let bank = Bank::new(
            vec![Account {
                currency: Currency::Usd,
                balance: 1.0,
            }],
            vec![],
        );

        assert_eq!(bank.account(Currency::Eur), None);
        assert_eq!(bank.balance(Currency::Eur), 0.0);
        assert!(bank.transactions(Currency::Eur).is_empty());
    }
}
