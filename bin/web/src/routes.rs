//! Application route table.

use crate::pages::{AboutPage, HomePage, NotFoundPage};
use leptos::prelude::*;
use waymark_core::{RenderFailure, RouteTable, RouteTableError};

/// Pages reachable through the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    I18nDemo,
    NotFound,
}

impl Page {
    /// Document title shown while the page is active.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::I18nDemo => "Internationalization",
            Self::NotFound => "Not Found",
        }
    }

    /// Label used for the page's nav link.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::I18nDemo => "i18n",
            other => other.title(),
        }
    }

    /// Renders the page's content.
    ///
    /// # Errors
    ///
    /// Returns a `RenderFailure` if the page cannot produce its output.
    pub fn render(self) -> Result<AnyView, RenderFailure> {
        match self {
            Self::Home => Ok(view! { <HomePage/> }.into_any()),
            Self::About => Ok(view! { <AboutPage/> }.into_any()),
            Self::I18nDemo => crate::pages::i18n_demo::render(),
            Self::NotFound => Ok(view! { <NotFoundPage/> }.into_any()),
        }
        .map_err(|failure| failure.in_page(format!("{self:?}")))
    }
}

/// Builds the application's route table.
///
/// # Errors
///
/// Returns an error if the declarations are inconsistent.
pub fn app_routes() -> waymark_core::Result<RouteTable<Page>, RouteTableError> {
    RouteTable::builder()
        .route("/", Page::Home)
        .route("/about", Page::About)
        .route("/i18n", Page::I18nDemo)
        .route("*", Page::NotFound)
        .build()
}

/// Paths of the pages linked from the header, in declaration order.
pub fn nav_links(table: &RouteTable<Page>) -> Vec<(String, Page)> {
    table
        .entries()
        .filter(|entry| !entry.pattern().is_fallback())
        .map(|entry| (entry.pattern().to_string(), *entry.handler()))
        .collect()
}
