//! This file defines the templates and a convenience function for creating the sidebar navigation.

use maud::{Markup, html};

use crate::{currency::Currency, endpoints};

/// The page the user is currently looking at, used to highlight its sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    Dashboard,
    Account(Currency),
    Transfer,
    Settings,
    /// A page without a sidebar link, e.g. the terms of service.
    Other,
}

/// Template for a link in the sidebar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link {
    url: String,
    title: String,
    icon: &'static str,
    is_current: bool,
}

impl Link {
    fn new(url: impl Into<String>, title: impl Into<String>, icon: &'static str, is_current: bool) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            icon,
            is_current,
        }
    }

    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "flex items-center justify-center xl:justify-start gap-3 rounded-lg px-3 py-2 \
            bg-gray-100 text-blue-700 dark:bg-gray-800 dark:text-blue-400"
        } else {
            "flex items-center justify-center xl:justify-start gap-3 rounded-lg px-3 py-2 \
            text-gray-500 hover:text-blue-700 dark:text-gray-400 dark:hover:text-blue-400"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                title=(self.title)
                aria-current=[self.is_current.then_some("page")]
            {
                span class="w-5 text-center" aria-hidden="true" { (self.icon) }
                span class="hidden xl:inline" { (self.title) }
                span class="sr-only xl:hidden" { (self.title) }
            }
        )
    }
}

pub struct Sidebar {
    links: Vec<Link>,
}

impl Sidebar {
    /// Get the sidebar.
    ///
    /// The link for `active_page`, if it has one, will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_page: ActivePage) -> Sidebar {
        let mut links = vec![Link::new(
            endpoints::DASHBOARD_VIEW,
            "Dashboard",
            "▦",
            active_page == ActivePage::Dashboard,
        )];

        for currency in Currency::ALL {
            links.push(Link::new(
                endpoints::account_details_url(currency),
                currency.account_name(),
                currency.symbol(),
                active_page == ActivePage::Account(currency),
            ));
        }

        links.push(Link::new(
            endpoints::TRANSFER_VIEW,
            "Transfers",
            "⇄",
            active_page == ActivePage::Transfer,
        ));

        Sidebar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            aside
                class="fixed inset-y-0 left-0 z-10 hidden w-14 flex-col border-r
                    border-gray-200 bg-white sm:flex xl:w-60 dark:border-gray-700
                    dark:bg-gray-900"
            {
                nav class="flex flex-col items-center gap-4 px-2 sm:py-5 xl:items-stretch"
                {
                    a
                        href=(endpoints::DASHBOARD_VIEW)
                        class="flex h-9 items-center justify-center gap-2 rounded-full
                            bg-blue-600 px-3 text-lg font-semibold text-white
                            xl:justify-start xl:px-4"
                    {
                        span aria-hidden="true" { "◆" }
                        span class="hidden xl:inline" { "Magic Bank" }
                        span class="sr-only" { "Magic Bank" }
                    }

                    @for link in self.links {
                        (link.into_html())
                    }
                }
            }
        )
    }
}
