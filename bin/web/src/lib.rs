//! waymark web application.
//!
//! This crate provides the Leptos single-page application: the route
//! table, the shared layout, the pages, the render boundary and the toast
//! provider, plus the axum server that renders it.

#![allow(non_snake_case)]

pub mod app;
pub mod boundary;
pub mod config;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod toast;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::config::{TOAST_META_NAME, toast_config_from_meta};
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let content = meta_content(TOAST_META_NAME);
    let toast_config = toast_config_from_meta(content.as_deref());
    leptos::mount::hydrate_body(move || {
        provide_context(toast_config);
        view! { <App/> }
    });
}

/// Reads the `content` attribute of the `<meta name=...>` tag in the page.
#[cfg(feature = "hydrate")]
fn meta_content(name: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?
        .get_attribute("content")
}
