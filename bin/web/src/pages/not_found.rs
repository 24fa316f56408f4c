//! Fallback page for paths no route matches.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Page rendered by the wildcard route.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    let location = use_location();

    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{move || location.pathname.get()}</code> "."</p>
            <a href="/">"Back to home"</a>
        </div>
    }
}
