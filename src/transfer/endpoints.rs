//! The htmx endpoints behind the transfer form: validation, review and confirmation.

use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_DESCRIPTION_STYLE, CARD_TITLE_STYLE},
    transfer::{
        draft::{ConfirmedTransfer, TransferDraft, TransferForm},
        notice::{TransferNotice, set_transfer_notice},
        page::{amount_currency, review_button},
    },
};

/// Re-check the transfer form after a change.
///
/// Responds with the review button, enabled only if the transfer can be
/// reviewed, and an out-of-band update of the amount's currency label.
pub async fn validate_transfer(Form(form): Form<TransferForm>) -> Markup {
    let draft = TransferDraft::from(form);

    html!(
        (review_button(draft.is_reviewable()))
        (amount_currency(draft.account, true))
    )
}

/// Show the details of the transfer for the user to check before confirming.
///
/// The draft is checked again here, so a request that skips the form's
/// validation gets an error alert instead of a dialog.
pub async fn review_transfer(Form(form): Form<TransferForm>) -> Response {
    let draft = TransferDraft::from(form);
    let typed_amount = draft.amount.trim().to_owned();

    match draft.confirm() {
        Ok(transfer) => review_dialog(&transfer, &typed_amount).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Confirm the transfer and redirect to the source account's details page.
///
/// No money is moved. The transfer is logged and the user is told it has been
/// initiated on the next page.
pub async fn confirm_transfer(jar: CookieJar, Form(form): Form<TransferForm>) -> Response {
    let transfer = match TransferDraft::from(form).confirm() {
        Ok(transfer) => transfer,
        Err(error) => return error.into_alert_response(),
    };

    tracing::info!(
        from = transfer.from.code(),
        recipient = %transfer.recipient.name,
        iban = %transfer.recipient.masked_iban(),
        bic = %transfer.recipient.bic,
        amount = transfer.amount,
        "transfer confirmed"
    );

    let jar = set_transfer_notice(jar, &TransferNotice::from(&transfer));

    (
        jar,
        HxRedirect(endpoints::account_details_url(transfer.from)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

/// `typed_amount` is posted back to confirm unchanged. Rounding is only for display.
fn review_dialog(transfer: &ConfirmedTransfer, typed_amount: &str) -> Markup {
    let code = transfer.from.code();
    let details = [
        ("From Account", transfer.from.account_name()),
        ("To Recipient", transfer.recipient.name.clone()),
        ("IBAN", transfer.recipient.iban.clone()),
        ("BIC", transfer.recipient.bic.clone()),
        ("Amount", transfer.display_amount()),
    ];

    html!(
        dialog
            open
            id="review-dialog"
            aria-labelledby="review-dialog-title"
            class="fixed inset-0 z-50 m-auto w-full max-w-md rounded-lg border
                border-gray-200 bg-white p-6 shadow-lg text-gray-900
                dark:border-gray-700 dark:bg-gray-800 dark:text-white
                backdrop:bg-black/50"
        {
            h2 id="review-dialog-title" class=(CARD_TITLE_STYLE) { "Review Your Transfer" }
            p class=(CARD_DESCRIPTION_STYLE) { "Please confirm the details below are correct." }

            dl class="my-6 grid grid-cols-[auto_1fr] gap-x-4 gap-y-3 text-sm"
            {
                @for (label, value) in details {
                    dt class="text-gray-500 dark:text-gray-400" { (label) }
                    dd class="font-medium text-right break-all" data-field=(label) { (value) }
                }
            }

            form
                hx-post=(endpoints::TRANSFER_CONFIRM)
                hx-target-error="#alert-container"
                class="flex justify-end gap-2"
            {
                input type="hidden" name="account" value=(code);
                input type="hidden" name="name" value=(transfer.recipient.name);
                input type="hidden" name="iban" value=(transfer.recipient.iban);
                input type="hidden" name="bic" value=(transfer.recipient.bic);
                input type="hidden" name="amount" value=(typed_amount);

                button
                    type="button"
                    class=(BUTTON_SECONDARY_STYLE)
                    onclick="this.closest('dialog').remove()"
                {
                    "Cancel"
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Confirm & Send" }
            }
        }
    )
}


#[cfg(test)]
mod review_transfer_tests {
    use axum::{Form, http::StatusCode};
    use scraper::Selector;

    use crate::{
        endpoints,
        test_utils::{
            assert_form_submit_button_with_text, assert_hx_endpoint, assert_valid_html,
            parse_html_fragment,
        },
        transfer::{draft::TransferForm, endpoints::review_transfer},
    };

    fn complete_form() -> TransferForm {
        TransferForm {
            account: Some("EUR".to_owned()),
            name: "Jane Doe".to_owned(),
            iban: "DE89 3704 0044 0532 0130 00".to_owned(),
            bic: "COBADEFFXXX".to_owned(),
            amount: "250.5".to_owned(),
        }
    }

    #[tokio::test]
    async fn shows_transfer_details() {
        let response = review_transfer(Form(complete_form())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        assert!(
            html.select(&Selector::parse("dialog[open]").unwrap())
                .next()
                .is_some(),
            "No open dialog found"
        );

        let field = |name: &str| {
            html.select(&Selector::parse(&format!("dd[data-field=\"{name}\"]")).unwrap())
                .next()
                .unwrap_or_else(|| panic!("No {name} field found"))
                .text()
                .collect::<String>()
        };
        assert_eq!(field("From Account"), "EUR Account");
        assert_eq!(field("To Recipient"), "Jane Doe");
        assert_eq!(field("IBAN"), "DE89 3704 0044 0532 0130 00");
        assert_eq!(field("Amount"), "250.50 EUR");
    }

    #[tokio::test]
    async fn confirm_form_carries_transfer() {
        let response = review_transfer(Form(complete_form())).await;
        let html = parse_html_fragment(response).await;

        let form = html
            .select(&Selector::parse("dialog form").unwrap())
            .next()
            .expect("No confirm form found");
        assert_hx_endpoint(&form, endpoints::TRANSFER_CONFIRM, "hx-post");
        assert_form_submit_button_with_text(&form, "Confirm & Send");

        let hidden: Vec<(&str, &str)> = form
            .select(&Selector::parse("input[type=hidden]").unwrap())
            .map(|input| {
                (
                    input.value().attr("name").unwrap_or_default(),
                    input.value().attr("value").unwrap_or_default(),
                )
            })
            .collect();
        assert_eq!(
            hidden,
            vec![
                ("account", "EUR"),
                ("name", "Jane Doe"),
                ("iban", "DE89 3704 0044 0532 0130 00"),
                ("bic", "COBADEFFXXX"),
                ("amount", "250.5"),
            ]
        );
    }

    #[tokio::test]
    async fn rejects_incomplete_transfer() {
        let response = review_transfer(Form(TransferForm {
            bic: String::new(),
            ..complete_form()
        }))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Transfer details missing"), "got {text}");
    }

    #[tokio::test]
    async fn rejects_non_positive_amount() {
        let response = review_transfer(Form(TransferForm {
            amount: "-3".to_owned(),
            ..complete_form()
        }))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
