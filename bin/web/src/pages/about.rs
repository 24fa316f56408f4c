//! About page component.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About"</h1>
            <p>
                "waymark wires a router, a shared layout, an error boundary and a "
                "toast provider together. Every page renders inside the same chrome."
            </p>
        </div>
    }
}
