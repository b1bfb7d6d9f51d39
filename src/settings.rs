//! The settings page with its profile, security and notification tabs.
//!
//! None of the settings are stored. Saving a tab only tells the user so.

use std::{fmt, str::FromStr};

use axum::{
    extract::{FromRef, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxTarget;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    alert::Alert,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_DESCRIPTION_STYLE, FORM_CHECKBOX_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, card,
    },
    layout::{PageLayout, page},
    navigation::ActivePage,
    timezone::current_local_year,
};

const SETTINGS_PANEL_ID: &str = "settings-panel";

/// A tab on the settings page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Profile,
    Security,
    Notifications,
}

impl SettingsTab {
    const ALL: [SettingsTab; 3] = [
        SettingsTab::Profile,
        SettingsTab::Security,
        SettingsTab::Notifications,
    ];

    fn slug(self) -> &'static str {
        match self {
            SettingsTab::Profile => "profile",
            SettingsTab::Security => "security",
            SettingsTab::Notifications => "notifications",
        }
    }

    fn title(self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Security => "Security",
            SettingsTab::Notifications => "Notifications",
        }
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SettingsTab {
    type Err = Error;

    fn from_str(tab: &str) -> Result<Self, Self::Err> {
        SettingsTab::ALL
            .into_iter()
            .find(|candidate| candidate.slug().eq_ignore_ascii_case(tab))
            .ok_or(Error::NotFound)
    }
}

/// The state needed for [get_settings_page].
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub local_timezone: String,
}

impl FromRef<AppState> for SettingsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SettingsQuery {
    /// The tab to open. Missing or unknown tabs open the profile tab.
    pub tab: Option<String>,
}

/// Display the settings page, or just the tab panel for htmx tab switches.
pub async fn get_settings_page(
    State(state): State<SettingsState>,
    HxTarget(target): HxTarget,
    Query(query): Query<SettingsQuery>,
) -> Result<Response, Error> {
    let tab = query
        .tab
        .as_deref()
        .and_then(|tab| tab.parse().ok())
        .unwrap_or_default();

    if target.as_deref() == Some(SETTINGS_PANEL_ID) {
        return Ok(settings_panel(tab).into_response());
    }

    let year = current_local_year(&state.local_timezone)?;
    let layout = PageLayout {
        title: "Settings",
        active_page: ActivePage::Settings,
        year,
    };

    Ok(page(layout, &settings_view(tab)).into_response())
}

/// Pretend to save the settings on `tab`.
///
/// Responds with a success alert saying nothing was stored, or a 404 alert
/// for an unknown tab.
pub async fn save_settings(Path(tab): Path<String>) -> Response {
    let tab = match tab.parse::<SettingsTab>() {
        Ok(tab) => tab,
        Err(error) => return error.into_alert_response(),
    };

    tracing::debug!("ignoring save request for the {tab} settings");

    (
        StatusCode::OK,
        Alert::Success {
            message: format!("{} settings saved", tab.title()),
            details: "This is a demo account, so nothing has been stored.".to_owned(),
        }
        .into_html(),
    )
        .into_response()
}

fn settings_view(tab: SettingsTab) -> Markup {
    html!(
        div class="flex flex-col gap-6 max-w-3xl"
        {
            div
            {
                h1 class="text-2xl font-bold tracking-tight md:text-3xl" { "Settings" }
                p class=(CARD_DESCRIPTION_STYLE) { "Manage your account settings and preferences." }
            }

            (settings_panel(tab))
        }
    )
}

fn tab_list(active: SettingsTab) -> Markup {
    html!(
        nav
            role="tablist"
            aria-label="Settings"
            class="grid grid-cols-1 md:grid-cols-3 md:w-fit gap-1 p-1 rounded-lg bg-gray-100 dark:bg-gray-800"
        {
            @for tab in SettingsTab::ALL {
                @let is_active = tab == active;
                @let style = if is_active {
                    "px-4 py-1.5 rounded-md text-sm font-medium text-center bg-white shadow-sm \
                    text-gray-900 dark:bg-gray-900 dark:text-white"
                } else {
                    "px-4 py-1.5 rounded-md text-sm font-medium text-center text-gray-500 \
                    hover:text-gray-900 dark:text-gray-400 dark:hover:text-white"
                };
                @let url = format!("{}?tab={}", endpoints::SETTINGS_VIEW, tab);

                a
                    href=(url)
                    role="tab"
                    aria-selected=(if is_active { "true" } else { "false" })
                    hx-get=(url)
                    hx-target={ "#" (SETTINGS_PANEL_ID) }
                    hx-swap="outerHTML"
                    hx-push-url="true"
                    class=(style)
                {
                    (tab.title())
                }
            }
        }
    )
}

fn settings_panel(tab: SettingsTab) -> Markup {
    let content = match tab {
        SettingsTab::Profile => profile_tab(),
        SettingsTab::Security => security_tab(),
        SettingsTab::Notifications => notifications_tab(),
    };

    html!(
        div id=(SETTINGS_PANEL_ID) class="flex flex-col gap-4" data-tab=(tab.slug())
        {
            (tab_list(tab))

            div role="tabpanel" { (content) }
        }
    )
}

fn settings_form(tab: SettingsTab, fields: &Markup, button_text: &str) -> Markup {
    html!(
        form
            hx-post=(endpoints::format_endpoint(endpoints::SETTINGS_API, tab))
            hx-target="#alert-container"
            hx-target-error="#alert-container"
            class="flex flex-col gap-4"
        {
            (fields)

            div
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { (button_text) }
            }
        }
    )
}

fn profile_tab() -> Markup {
    let fields = html!(
        div
        {
            label for="name" class=(FORM_LABEL_STYLE) { "Full Name" }
            input id="name" type="text" name="name" value="John Doe" class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="email" class=(FORM_LABEL_STYLE) { "Email" }
            input
                id="email"
                type="email"
                name="email"
                value="john.doe@magicbank.com"
                readonly
                class=(FORM_TEXT_INPUT_STYLE);
            p class="mt-1 text-xs text-gray-500 dark:text-gray-400"
            {
                "Email address cannot be changed for security reasons."
            }
        }
    );

    card(
        "Profile Information",
        Some("Update your personal details here."),
        &settings_form(SettingsTab::Profile, &fields, "Save Changes"),
    )
}

fn password_field(id: &str, label: &str) -> Markup {
    let name = id.replace('-', "_");

    html!(
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { (label) }
            input
                id=(id)
                type="password"
                name=(name)
                autocomplete="off"
                class=(FORM_TEXT_INPUT_STYLE);
        }
    )
}

fn toggle(id: &str, label: &str, description: &str, checked: bool) -> Markup {
    let name = id.replace('-', "_");

    html!(
        div class="flex items-center justify-between gap-4 rounded-lg border border-gray-200 p-4 dark:border-gray-700"
        {
            div
            {
                label for=(id) class="font-medium" { (label) }
                p class=(CARD_DESCRIPTION_STYLE) { (description) }
            }

            input
                id=(id)
                type="checkbox"
                name=(name)
                role="switch"
                checked[checked]
                class=(FORM_CHECKBOX_STYLE);
        }
    )
}

fn security_tab() -> Markup {
    let fields = html!(
        fieldset class="flex flex-col gap-4 rounded-lg border border-gray-200 p-4 dark:border-gray-700"
        {
            legend class="px-1 font-semibold" { "Change Password" }

            (password_field("current-password", "Current Password"))
            (password_field("new-password", "New Password"))
            (password_field("confirm-password", "Confirm New Password"))
        }

        (toggle(
            "two-factor",
            "Two-Factor Authentication",
            "Secure your account with an extra layer of protection.",
            false,
        ))
    );

    card(
        "Security",
        Some("Change your password and manage account security."),
        &settings_form(SettingsTab::Security, &fields, "Update Password"),
    )
}

fn notifications_tab() -> Markup {
    let fields = html!(
        (toggle(
            "email-notifications",
            "Email Notifications",
            "Receive important updates about your account activity.",
            true,
        ))
        (toggle(
            "push-notifications",
            "Push Notifications",
            "Get real-time alerts on your mobile device.",
            false,
        ))
        (toggle(
            "marketing-updates",
            "Marketing Updates",
            "Receive news about new features and special offers.",
            false,
        ))
    );

    card(
        "Notifications",
        Some("Manage how you receive notifications from us."),
        &settings_form(SettingsTab::Notifications, &fields, "Save Preferences"),
    )
}


#[cfg(test)]
mod save_settings_tests {
    use axum::{extract::Path, http::StatusCode};

    use crate::{settings::save_settings, test_utils::parse_html_fragment};

    #[tokio::test]
    async fn says_nothing_was_stored() {
        let response = save_settings(Path("security".to_owned())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Security settings saved"), "got {text}");
        assert!(text.contains("nothing has been stored"), "got {text}");
    }

    #[tokio::test]
    async fn unknown_tab_is_not_found() {
        let response = save_settings(Path("billing".to_owned())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
