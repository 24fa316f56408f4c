//! Toast notifications.
//!
//! [`ToastProvider`] is mounted once at the application root. It owns the
//! [`ToastQueue`] through a [`ToastContext`] handed down via Leptos context,
//! and renders the single notification region. Components obtain the
//! context with [`use_toasts`] and push messages into it.

use crate::config::{TOAST_META_NAME, ToastSettings};
use leptos::prelude::*;
use waymark_core::{Toast, ToastConfig, ToastId, ToastLevel, ToastQueue};

/// Capability to push and dismiss toasts.
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
    config: ToastConfig,
}

impl ToastContext {
    fn new(config: ToastConfig) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(config.max_visible)),
            config,
        }
    }

    /// Enqueues a message.
    ///
    /// Returns `None` once the provider has been torn down.
    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> Option<ToastId> {
        let id = self.queue.try_update(|q| q.push(level, message))?;
        self.schedule_visible();
        Some(id)
    }

    /// Removes a toast before its timer fires.
    pub fn dismiss(&self, id: ToastId) {
        let removed = self.queue.try_update(|q| q.dismiss(id)).flatten();
        if removed.is_some() {
            self.schedule_visible();
        }
    }

    /// Toasts currently on screen.
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.with(|q| q.visible().cloned().collect())
    }

    /// Starts the retirement timer for every toast that just became visible.
    fn schedule_visible(&self) {
        let newly = self
            .queue
            .try_update(ToastQueue::take_newly_visible)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        for id in newly {
            let this = *self;
            set_timeout(move || this.dismiss(id), self.config.display_duration);
        }

        #[cfg(not(feature = "hydrate"))]
        if !newly.is_empty() {
            tracing::debug!(
                count = newly.len(),
                duration_ms = u64::try_from(self.config.display_duration.as_millis())
                    .unwrap_or(u64::MAX),
                "Toast timers only run in the browser"
            );
        }
    }
}

/// Returns the toast capability from the enclosing [`ToastProvider`].
///
/// # Panics
///
/// Panics if called outside a `ToastProvider`.
pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Returns the toast capability if a provider is mounted.
pub fn try_use_toasts() -> Option<ToastContext> {
    use_context::<ToastContext>()
}

/// Provides a fresh [`ToastContext`] unless one is already in scope.
fn install_toasts() -> Option<ToastContext> {
    if try_use_toasts().is_some() {
        return None;
    }

    let config = use_context::<ToastConfig>().unwrap_or_default();
    let toasts = ToastContext::new(config);
    provide_context(toasts);
    tracing::debug!(
        max_visible = config.max_visible,
        duration_ms = u64::try_from(config.display_duration.as_millis()).unwrap_or(u64::MAX),
        "Toast provider initialized"
    );
    Some(toasts)
}

/// Mounts the toast queue and its notification region.
///
/// The display settings come from a [`ToastConfig`] in context, provided by
/// the server while rendering and by `hydrate()` in the browser. They
/// default otherwise.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let Some(toasts) = install_toasts() else {
        tracing::warn!("ToastProvider mounted twice, reusing the outer provider");
        return children().into_any();
    };

    on_cleanup(move || {
        toasts.queue.try_update(ToastQueue::clear);
        tracing::debug!("Toast provider torn down");
    });

    view! {
        {children()}
        <ToastRegion toasts/>
    }
    .into_any()
}

/// Writes the [`ToastConfig`] in context into the page head, for the
/// browser to pick up at hydration.
#[component]
pub fn ToastSettingsMeta() -> impl IntoView {
    let settings = ToastSettings::from(use_context::<ToastConfig>().unwrap_or_default());
    let content = settings
        .to_meta_content()
        .inspect_err(|e| tracing::warn!(error = %e, "Failed to encode toast settings"))
        .ok();

    content.map(|content| view! { <meta name=TOAST_META_NAME content=content/> })
}

/// The on-screen list of visible toasts.
#[component]
fn ToastRegion(toasts: ToastContext) -> impl IntoView {
    view! {
        <div class="toast-region" role="status" aria-live="polite">
            <For
                each=move || toasts.visible()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast toast-{}", toast.level.as_str());
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
