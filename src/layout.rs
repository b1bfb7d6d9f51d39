//! The shell shared by every page: sidebar, header, content area and footer.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{LINK_STYLE, base},
    navigation::{ActivePage, Sidebar},
};

/// What the shell needs to know about the page being rendered.
#[derive(Debug, Clone, Copy)]
pub struct PageLayout<'a> {
    /// Shown in the browser tab and the header.
    pub title: &'a str,
    /// Which sidebar link to highlight.
    pub active_page: ActivePage,
    /// The current year in the server's timezone, for the copyright notice.
    pub year: i32,
}

fn header(title: &str, active_page: ActivePage) -> Markup {
    let settings_style = if active_page == ActivePage::Settings {
        "rounded-full px-3 py-1.5 text-sm font-medium bg-blue-50 text-blue-700 \
        dark:bg-blue-900/30 dark:text-blue-200"
    } else {
        "rounded-full px-3 py-1.5 text-sm font-medium text-gray-600 \
        hover:bg-gray-100 hover:text-blue-700 dark:text-gray-300 dark:hover:bg-gray-800"
    };

    html!(
        header
            class="sticky top-0 z-30 flex h-14 items-center justify-between gap-4
                border-b border-gray-200 bg-white px-4 sm:static sm:h-auto
                sm:border-0 sm:bg-transparent sm:px-6 dark:border-gray-700
                dark:bg-gray-900 sm:dark:bg-transparent"
        {
            p class="text-lg font-semibold" { (title) }

            nav aria-label="User menu"
            {
                a
                    href=(endpoints::SETTINGS_VIEW)
                    class=(settings_style)
                    aria-current=[(active_page == ActivePage::Settings).then_some("page")]
                {
                    "Settings"
                }
            }
        }
    )
}

fn footer(year: i32) -> Markup {
    html!(
        footer class="mt-auto border-t border-gray-200 dark:border-gray-700"
        {
            div
                class="flex flex-col sm:flex-row items-center justify-between gap-2
                    px-4 py-4 text-sm text-gray-500 dark:text-gray-400"
            {
                p { "© " (year) " Magic Bank. All rights reserved." }

                nav class="flex gap-4 sm:gap-6"
                {
                    a href=(endpoints::TERMS_VIEW) class="hover:text-blue-700" { "Terms of Service" }
                    a href=(endpoints::PRIVACY_VIEW) class="hover:text-blue-700" { "Privacy Policy" }
                    a href=(endpoints::HELP_VIEW) class="hover:text-blue-700" { "Help & Support" }
                }
            }
        }
    )
}

/// Wrap `content` in the sidebar, header and footer and render the full document.
pub fn page(layout: PageLayout<'_>, content: &Markup) -> Markup {
    let body = html!(
        div class="flex min-h-screen w-full flex-col"
        {
            (Sidebar::new(layout.active_page).into_html())

            div class="flex flex-1 flex-col sm:gap-4 sm:py-4 sm:pl-14 xl:pl-60"
            {
                (header(layout.title, layout.active_page))

                main class="flex-1 p-4 sm:px-6 sm:py-0 text-gray-900 dark:text-white"
                {
                    (content)
                }

                (footer(layout.year))
            }
        }
    );

    base(layout.title, &body)
}

/// A trail of links from the dashboard to the current page.
pub fn breadcrumb(current: &str) -> Markup {
    html!(
        nav aria-label="Breadcrumb" class="hidden md:flex text-sm text-gray-500 dark:text-gray-400"
        {
            ol class="flex items-center gap-2"
            {
                li
                {
                    a href=(endpoints::DASHBOARD_VIEW) class=(LINK_STYLE) { "Dashboard" }
                }
                li aria-hidden="true" { "›" }
                li aria-current="page" class="text-gray-900 dark:text-white" { (current) }
            }
        }
    )
}
