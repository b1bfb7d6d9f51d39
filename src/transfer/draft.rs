//! The transfer being filled in and the stages it moves through.

use serde::Deserialize;

use crate::{
    Error,
    currency::{Currency, parse_currency_hint},
};

/// Who the money is being sent to.
///
/// The fields are free text; only their presence is checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipient {
    /// The account holder's name.
    pub name: String,
    /// The recipient's International Bank Account Number.
    pub iban: String,
    /// The recipient bank's BIC / SWIFT code.
    pub bic: String,
}

impl Recipient {
    /// Whether the name, IBAN and BIC have all been filled in.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.iban.is_empty() && !self.bic.is_empty()
    }

    /// The IBAN with everything but the last four characters hidden, for logs.
    pub fn masked_iban(&self) -> String {
        let compact: Vec<char> = self.iban.chars().filter(|c| !c.is_whitespace()).collect();
        let visible = compact.len().saturating_sub(4);

        compact
            .iter()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { *c })
            .collect()
    }
}

/// Where a [TransferDraft] is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStage {
    /// Some details are missing or invalid, so the transfer cannot be reviewed.
    Editing,
    /// Every detail is present and the transfer can be reviewed and confirmed.
    Reviewable,
}

/// A change the user makes to the transfer form.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferEvent {
    /// The account to send from was picked.
    AccountSelected(Currency),
    /// The recipient's name was edited.
    RecipientNameChanged(String),
    /// The recipient's IBAN was edited.
    IbanChanged(String),
    /// The recipient's BIC was edited.
    BicChanged(String),
    /// The amount was edited. The text is kept exactly as typed.
    AmountChanged(String),
}

/// The transfer form as submitted by the browser.
///
/// Missing fields are treated as empty so that partially filled forms can be
/// validated on every keystroke.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferForm {
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub iban: String,
    #[serde(default)]
    pub bic: String,
    #[serde(default)]
    pub amount: String,
}

/// The transfer as the user is filling it in.
///
/// The amount is kept exactly as typed and only parsed when it is needed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferDraft {
    /// The account to send from, if one has been picked.
    pub account: Option<Currency>,
    /// Who to send the money to.
    pub recipient: Recipient,
    /// The amount as typed by the user.
    pub amount: String,
}

impl From<TransferForm> for TransferDraft {
    fn from(form: TransferForm) -> Self {
        Self {
            account: parse_currency_hint(form.account.as_deref()),
            recipient: Recipient {
                name: form.name,
                iban: form.iban,
                bic: form.bic,
            },
            amount: form.amount,
        }
    }
}

impl TransferDraft {
    /// Start a transfer, optionally from the account held in `account`.
    pub fn new(account: Option<Currency>) -> Self {
        Self {
            account,
            ..Default::default()
        }
    }

    /// Apply a single change from the form.
    pub fn apply(&mut self, event: TransferEvent) {
        match event {
            TransferEvent::AccountSelected(currency) => self.account = Some(currency),
            TransferEvent::RecipientNameChanged(name) => self.recipient.name = name,
            TransferEvent::IbanChanged(iban) => self.recipient.iban = iban,
            TransferEvent::BicChanged(bic) => self.recipient.bic = bic,
            TransferEvent::AmountChanged(amount) => self.amount = amount,
        }
    }

    /// The amount as a number, if it parses to a finite number.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
    }

    fn positive_amount(&self) -> Option<f64> {
        self.parsed_amount().filter(|amount| *amount > 0.0)
    }

    /// Whether the transfer can be reviewed: an account is selected, the
    /// amount is greater than zero and the recipient is complete.
    pub fn is_reviewable(&self) -> bool {
        self.account.is_some() && self.positive_amount().is_some() && self.recipient.is_complete()
    }

    pub fn stage(&self) -> TransferStage {
        if self.is_reviewable() {
            TransferStage::Reviewable
        } else {
            TransferStage::Editing
        }
    }

    /// Finalise the draft.
    ///
    /// # Errors
    /// Returns [Error::IncompleteTransfer] if the account or a recipient detail
    /// is missing, or [Error::InvalidAmount] if the amount is not a number
    /// greater than zero.
    pub fn confirm(self) -> Result<ConfirmedTransfer, Error> {
        let from = self.account.ok_or(Error::IncompleteTransfer)?;

        if !self.recipient.is_complete() {
            return Err(Error::IncompleteTransfer);
        }

        let amount = self
            .positive_amount()
            .ok_or_else(|| Error::InvalidAmount(self.amount.clone()))?;

        Ok(ConfirmedTransfer {
            from,
            recipient: self.recipient,
            amount,
        })
    }
}

/// A transfer the user has confirmed.
///
/// Confirming a transfer does not move any money; the balances shown
/// elsewhere stay the same.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedTransfer {
    /// The account the money is sent from.
    pub from: Currency,
    /// Who the money is sent to.
    pub recipient: Recipient,
    /// How much is sent, always greater than zero.
    pub amount: f64,
}

impl ConfirmedTransfer {
    /// The amount and currency, e.g. "250.50 EUR".
    pub fn display_amount(&self) -> String {
        format!("{:.2} {}", self.amount, self.from.code())
    }
}
