//! The one-off notification shown after a transfer is confirmed.
//!
//! Confirming a transfer redirects to the account details page, so the
//! notification is handed over in a short-lived cookie that the next page
//! render consumes.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{alert::Alert, transfer::draft::ConfirmedTransfer};

/// The name of the cookie that carries a pending [TransferNotice].
pub const NOTICE_COOKIE: &str = "transfer_notice";

const NOTICE_MAX_AGE: Duration = Duration::minutes(1);

/// What the user is told after confirming a transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferNotice {
    /// The amount and currency, e.g. "250.50 EUR".
    pub amount: String,
    /// The recipient's name.
    pub recipient: String,
}

impl From<&ConfirmedTransfer> for TransferNotice {
    fn from(transfer: &ConfirmedTransfer) -> Self {
        Self {
            amount: transfer.display_amount(),
            recipient: transfer.recipient.name.clone(),
        }
    }
}

impl TransferNotice {
    pub fn into_alert(self) -> Alert {
        Alert::Success {
            message: "Your transfer has been initiated.".to_owned(),
            details: format!("Sending {} to {}.", self.amount, self.recipient),
        }
    }
}

/// Store `notice` in `jar` so the next page can show it.
pub fn set_transfer_notice(jar: CookieJar, notice: &TransferNotice) -> CookieJar {
    let value = match serde_urlencoded::to_string(notice) {
        Ok(value) => value,
        Err(error) => {
            tracing::error!("could not encode transfer notice {notice:?}: {error}");
            return jar;
        }
    };

    jar.add(
        Cookie::build((NOTICE_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .max_age(NOTICE_MAX_AGE),
    )
}

/// Remove the pending notice from `jar`, returning it if there was a valid one.
pub fn take_transfer_notice(jar: CookieJar) -> (CookieJar, Option<TransferNotice>) {
    let Some(cookie) = jar.get(NOTICE_COOKIE) else {
        return (jar, None);
    };

    let notice = serde_urlencoded::from_str::<TransferNotice>(cookie.value())
        .inspect_err(|error| tracing::warn!("discarding malformed transfer notice: {error}"))
        .ok();

    (jar.remove(Cookie::build(NOTICE_COOKIE).path("/")), notice)
}

#[cfg(test)]
mod transfer_notice_tests {
    use axum_extra::extract::cookie::{Cookie, CookieJar};

    use crate::{
        alert::Alert,
        currency::Currency,
        transfer::{
            draft::{ConfirmedTransfer, Recipient},
            notice::{NOTICE_COOKIE, TransferNotice, set_transfer_notice, take_transfer_notice},
        },
    };

    fn notice() -> TransferNotice {
        TransferNotice::from(&ConfirmedTransfer {
            from: Currency::Eur,
            recipient: Recipient {
                name: "Jane Doe; Sons & Co".to_owned(),
                iban: "DE89370400440532013000".to_owned(),
                bic: "COBADEFFXXX".to_owned(),
            },
            amount: 250.5,
        })
    }

    #[test]
    fn describes_the_transfer() {
        let alert = notice().into_alert();

        assert_eq!(
            alert,
            Alert::Success {
                message: "Your transfer has been initiated.".to_owned(),
                details: "Sending 250.50 EUR to Jane Doe; Sons & Co.".to_owned(),
            }
        );
    }

    #[test]
    fn notice_survives_the_cookie() {
        let jar = set_transfer_notice(CookieJar::new(), &notice());

        let (_, got) = take_transfer_notice(jar);

        assert_eq!(got, Some(notice()));
    }

    #[test]
    fn cookie_value_is_url_encoded() {
        let jar = set_transfer_notice(CookieJar::new(), &notice());

        let value = jar.get(NOTICE_COOKIE).expect("No notice cookie").value().to_owned();

        assert!(!value.contains(' '), "got {value}");
        assert!(!value.contains(';'), "got {value}");
    }

    #[test]
    fn taking_the_notice_removes_it() {
        let jar = set_transfer_notice(CookieJar::new(), &notice());

        let (jar, _) = take_transfer_notice(jar);

        assert!(jar.get(NOTICE_COOKIE).is_none());
    }

    #[test]
    fn no_cookie_no_notice() {
        let (_, got) = take_transfer_notice(CookieJar::new());

        assert_eq!(got, None);
    }

    #[test]
    fn malformed_cookie_is_discarded() {
        let jar = CookieJar::new().add(Cookie::new(NOTICE_COOKIE, "amount=1"));

        let (jar, got) = take_transfer_notice(jar);

        assert_eq!(got, None);
        assert!(jar.get(NOTICE_COOKIE).is_none());
    }
}
