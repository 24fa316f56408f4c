//! Home page component.

use leptos::prelude::*;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"waymark"</h1>
            <p>"A minimal single-page application scaffold."</p>
            <p>"Use the links above to move between pages."</p>
        </div>
    }
}
