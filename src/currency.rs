//! The currencies the bank holds accounts in and how amounts in them are displayed.

use std::{fmt::Display, str::FromStr, sync::OnceLock};

use numfmt::{Formatter, Precision};
use serde::Serialize;

use crate::Error;

/// A currency that an account can be held in.
///
/// The bank holds exactly one account per currency, so the currency doubles
/// as the account's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollars.
    Usd,
    /// Euros.
    Eur,
}

impl Currency {
    /// Every supported currency, in display order.
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Eur];

    /// The ISO 4217 code, e.g. "USD".
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// The symbol placed in front of formatted amounts.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// The name shown for the account held in this currency.
    pub fn account_name(self) -> String {
        format!("{} Account", self.code())
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    /// Parse a currency code, ignoring case.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(Error::InvalidCurrency(code.to_owned())),
        }
    }
}

/// Parse an optional currency hint, discarding anything that is not a supported code.
pub fn parse_currency_hint(hint: Option<&str>) -> Option<Currency> {
    hint.and_then(|code| code.parse().ok())
}

/// Format `amount` with the currency symbol, thousands separators and two
/// decimal places, e.g. "$10,250.75" or "-€5.50".
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let sign = if amount < 0.0 && amount.abs() >= 0.005 {
        "-"
    } else {
        ""
    };

    format!("{sign}{}{}", currency.symbol(), format_decimal(amount.abs()))
}

/// Format a non-negative `amount` with thousands separators and two decimal
/// places, e.g. "25,430.50".
pub fn format_decimal(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let whole = if whole == 0 {
        // numfmt hardcodes zero as "0"
        "0".to_owned()
    } else {
        get_thousands_separator_formatter().fmt_string(whole)
    };

    format!("{whole}.{fraction:02}")
}

fn get_thousands_separator_formatter() -> &'static Formatter {
    static FORMATTER: OnceLock<Formatter> = OnceLock::new();

    FORMATTER.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .expect("a comma is a valid separator")
            .precision(Precision::Decimals(0))
    })
}

#[cfg(test)]
mod currency_tests {
    use crate::{
        Error,
        currency::{Currency, parse_currency_hint},
    };

    #[test]
    fn parses_codes_ignoring_case() {
        assert_eq!("USD".parse::<Currency>(), Ok(Currency::Usd));
        assert_eq!("eur".parse::<Currency>(), Ok(Currency::Eur));
        assert_eq!("Eur".parse::<Currency>(), Ok(Currency::Eur));
    }

    #[test]
    fn rejects_unsupported_codes() {
        assert_eq!(
            "GBP".parse::<Currency>(),
            Err(Error::InvalidCurrency("GBP".to_owned()))
        );
        assert_eq!(
            "".parse::<Currency>(),
            Err(Error::InvalidCurrency("".to_owned()))
        );
    }

    #[test]
    fn invalid_hints_are_discarded() {
        assert_eq!(parse_currency_hint(Some("usd")), Some(Currency::Usd));
        assert_eq!(parse_currency_hint(Some("JPY")), None);
        assert_eq!(parse_currency_hint(None), None);
    }

    #[test]
    fn account_name_uses_code() {
        assert_eq!(Currency::Usd.account_name(), "USD Account");
        assert_eq!(Currency::Eur.account_name(), "EUR Account");
    }
}
