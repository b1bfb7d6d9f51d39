//! Downloads an account's transaction history as a CSV statement.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    account::Bank,
    currency::{Currency, parse_currency_hint},
    transaction::{Direction, Transaction, date_datetime_attr},
};

/// The state needed for [get_account_statement].
#[derive(Debug, Clone)]
pub struct StatementState {
    pub bank: Arc<Bank>,
}

impl FromRef<AppState> for StatementState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            bank: state.bank.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatementQuery {
    pub currency: Option<String>,
}

/// One line of the CSV statement.
#[derive(Debug, Serialize)]
struct StatementRow<'a> {
    date: String,
    description: &'a str,
    direction: Direction,
    amount: String,
    balance: String,
    currency: Currency,
}

impl<'a> From<&'a Transaction> for StatementRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            date: date_datetime_attr(transaction.date),
            description: &transaction.description,
            direction: transaction.direction,
            amount: format!("{:.2}", transaction.amount),
            balance: format!("{:.2}", transaction.balance),
            currency: transaction.currency,
        }
    }
}

/// Respond with the account's full history as a CSV file attachment.
///
/// Like the account details page, a missing or unknown currency selects the USD account.
pub async fn get_account_statement(
    State(state): State<StatementState>,
    Query(query): Query<StatementQuery>,
) -> Result<Response, Error> {
    let currency = parse_currency_hint(query.currency.as_deref()).unwrap_or(Currency::Usd);
    let transactions = state.bank.transactions(currency);

    let body = write_statement(&transactions)
        .inspect_err(|error| tracing::error!("could not write {currency} statement: {error}"))?;
    let filename = format!(
        "attachment; filename=\"{}-statement.csv\"",
        currency.code().to_lowercase()
    );

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (CONTENT_DISPOSITION, filename),
        ],
        body,
    )
        .into_response())
}

fn write_statement(transactions: &[Transaction]) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(vec![]);

    for transaction in transactions {
        writer.serialize(StatementRow::from(transaction))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::StatementExport(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::StatementExport(error.to_string()))
}

#[cfg(test)]
mod statement_tests {
    use std::sync::Arc;

    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };

    use crate::{
        account::{
            Bank,
            statement::{StatementQuery, StatementState, get_account_statement},
        },
        test_utils::get_header,
    };

    async fn get_statement(currency: Option<&str>) -> (StatusCode, String, String) {
        let state = StatementState {
            bank: Arc::new(Bank::with_mock_data()),
        };
        let query = StatementQuery {
            currency: currency.map(str::to_owned),
        };

        let response = get_account_statement(State(state), Query(query))
            .await
            .expect("Could not get statement");

        let status = response.status();
        let disposition = get_header(&response, "content-disposition");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        (
            status,
            disposition,
            String::from_utf8_lossy(&body).to_string(),
        )
    }

    #[tokio::test]
    async fn exports_eur_history_as_csv() {
        let (status, disposition, body) = get_statement(Some("EUR")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(disposition, "attachment; filename=\"eur-statement.csv\"");

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "date,description,direction,amount,balance,currency");
        assert_eq!(lines[1], "2024-07-28,Hotel Booking - Paris,debit,450.00,4550.00,EUR");
        assert_eq!(lines[3], "2024-07-25,\"Restaurant \"\"Le Bon\"\"\",debit,85.70,4879.50,EUR");
        assert_eq!(lines.len(), 5);
    }

    #[tokio::test]
    async fn defaults_to_usd() {
        let (_, disposition, body) = get_statement(None).await;

        assert_eq!(disposition, "attachment; filename=\"usd-statement.csv\"");
        assert_eq!(body.lines().count(), 6);
        assert!(body.lines().skip(1).all(|line| line.ends_with(",USD")));
    }
}
