//! Internationalization demo page.

use crate::toast::try_use_toasts;
use leptos::prelude::*;
use waymark_core::{Catalog, Locale, RenderFailure, ToastLevel};

/// Keys the page displays.
const KEYS: [&str; 4] = [
    "i18n.title",
    "i18n.greeting",
    "i18n.description",
    "i18n.choose",
];

/// Renders the page after checking the catalog covers every key it shows.
///
/// # Errors
///
/// Returns a `RenderFailure` naming the first missing message.
pub fn render() -> Result<AnyView, RenderFailure> {
    let catalog = Catalog::builtin();
    for key in KEYS {
        catalog
            .lookup(Locale::default(), key)
            .map_err(|e| RenderFailure::new(e.to_string()))?;
    }
    Ok(view! { <I18nDemoPage catalog/> }.into_any())
}

/// Page showing catalog messages in a switchable locale.
#[component]
pub fn I18nDemoPage(catalog: Catalog) -> impl IntoView {
    let locale = RwSignal::new(Locale::default());
    let toasts = try_use_toasts();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let preferred = window().navigator().language();
        locale.set(Locale::negotiate(preferred.as_deref()));
    });

    // Every key was checked against the default locale in `render`.
    let text = move |key: &'static str| catalog.lookup(locale.get(), key).unwrap_or(key);

    let switch_to = move |next: Locale| {
        if locale.get_untracked() == next {
            return;
        }
        locale.set(next);
        if let Some(toasts) = toasts {
            let message = catalog
                .format(next, "i18n.switched", &[("language", next.native_name())])
                .unwrap_or_else(|e| e.to_string());
            toasts.push(ToastLevel::Info, message);
        }
    };

    view! {
        <div class="i18n-page">
            <h1>{move || text("i18n.title")}</h1>
            <p class="greeting">{move || text("i18n.greeting")}</p>
            <p>{move || text("i18n.description")}</p>
            <section class="locale-picker" lang=move || locale.get().tag()>
                <h2>{move || text("i18n.choose")}</h2>
                {Locale::ALL
                    .into_iter()
                    .map(move |option| {
                        view! {
                            <button
                                class="locale-button"
                                class:active=move || locale.get() == option
                                on:click=move |_| switch_to(option)
                            >
                                {option.native_name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_covers_page_keys() {
        let catalog = Catalog::builtin();
        for locale in Locale::ALL {
            for key in KEYS {
                assert!(catalog.lookup(locale, key).is_ok(), "{locale} lacks {key}");
            }
        }
    }
}
