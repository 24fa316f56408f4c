//! Render boundary around the routed page.
//!
//! [`RenderBoundary`] owns one [`Boundary`] for its lifetime and exposes it
//! to descendants as a [`BoundaryScope`]. Pages render through
//! [`BoundaryScope::guard`]; the first failure switches the whole boundary
//! to its fallback until the user resets it.

use leptos::prelude::*;
use waymark_core::{Boundary, Outcome, RenderFailure};

/// Handle to the nearest render boundary.
#[derive(Clone, Copy)]
pub struct BoundaryScope {
    boundary: RwSignal<Boundary>,
}

impl BoundaryScope {
    fn new() -> Self {
        Self {
            boundary: RwSignal::new(Boundary::new()),
        }
    }

    /// The captured failure, tracked.
    pub fn failure(&self) -> Option<RenderFailure> {
        self.boundary.with(|b| b.failure().cloned())
    }

    fn failure_untracked(&self) -> Option<RenderFailure> {
        self.boundary.with_untracked(|b| b.failure().cloned())
    }

    /// Runs a fallible render under this boundary.
    ///
    /// Once the boundary has failed the render is skipped and the fallback
    /// is returned instead.
    pub fn guard(&self, render: impl FnOnce() -> Result<AnyView, RenderFailure>) -> AnyView {
        if let Some(failure) = self.failure_untracked() {
            return fallback_view(failure, *self);
        }

        // The page renders outside the signal lock.
        let result = render();
        let outcome = self
            .boundary
            .try_update_untracked(|b| b.render(move || result));

        match outcome {
            Some(Outcome::Rendered(view)) => view,
            Some(Outcome::Fallback(failure)) => {
                // Notify only on the Normal -> Failed transition.
                self.boundary.notify();
                fallback_view(failure, *self)
            }
            None => ().into_any(),
        }
    }

    /// Returns the boundary to normal rendering.
    pub fn reset(&self) {
        self.boundary.update(Boundary::reset);
    }
}

/// Returns the nearest [`BoundaryScope`].
///
/// # Panics
///
/// Panics if called outside a `RenderBoundary`.
pub fn use_boundary() -> BoundaryScope {
    expect_context::<BoundaryScope>()
}

fn fallback_view(failure: RenderFailure, scope: BoundaryScope) -> AnyView {
    view! { <RenderFailureView failure scope/> }.into_any()
}

/// Catches render failures of its children and shows a fallback instead.
#[component]
pub fn RenderBoundary(children: ChildrenFn) -> impl IntoView {
    let scope = BoundaryScope::new();
    provide_context(scope);

    move || match scope.failure() {
        None => children().into_any(),
        Some(failure) => fallback_view(failure, scope),
    }
}

/// Fallback shown while a boundary is failed.
#[component]
fn RenderFailureView(failure: RenderFailure, scope: BoundaryScope) -> impl IntoView {
    view! {
        <div class="render-failure" role="alert">
            <h1>"Something went wrong"</h1>
            <p>"This page could not be displayed."</p>
            <pre class="render-failure-detail">{failure.to_string()}</pre>
            <button class="retry-button" on:click=move |_| scope.reset()>
                "Try again"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn successful_render_keeps_boundary_normal() {
        let owner = Owner::new();
        owner.with(|| {
            let scope = BoundaryScope::new();
            let _view = scope.guard(|| Ok(().into_any()));
            assert!(scope.failure_untracked().is_none());
        });
    }

    #[test]
    fn failed_render_is_captured_and_terminal() {
        let owner = Owner::new();
        owner.with(|| {
            let scope = BoundaryScope::new();
            let _view = scope.guard(|| Err(RenderFailure::new("boom").in_page("About")));
            assert_eq!(
                scope.failure_untracked().map(|f| f.to_string()),
                Some("failed to render About: boom".to_string())
            );

            let called = Cell::new(false);
            let _view = scope.guard(|| {
                called.set(true);
                Ok(().into_any())
            });
            assert!(!called.get());
            assert!(scope.failure_untracked().is_some());
        });
    }

    #[test]
    fn reset_allows_rendering_again() {
        let owner = Owner::new();
        owner.with(|| {
            let scope = BoundaryScope::new();
            let _view = scope.guard(|| Err(RenderFailure::new("boom")));
            scope.reset();
            assert!(scope.failure_untracked().is_none());

            let called = Cell::new(false);
            let _view = scope.guard(|| {
                called.set(true);
                Ok(().into_any())
            });
            assert!(called.get());
        });
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use crate::layout::Layout;
    use crate::routes::Page;

    #[test]
    fn failing_page_is_replaced_but_header_remains() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <Layout links=vec![("/".to_string(), Page::Home)]>
                    <RenderBoundary>
                        {move || {
                            use_boundary()
                                .guard(|| Err(RenderFailure::new("broken page").in_page("Home")))
                        }}
                    </RenderBoundary>
                </Layout>
            }
            .to_html();

            assert_eq!(html.matches("class=\"header\"").count(), 1);
            assert!(html.contains("class=\"logo\""));
            assert_eq!(html.matches("class=\"render-failure\"").count(), 1);
            assert!(html.contains("broken page"));
            assert!(!html.contains("home-page"));
        });
    }

    #[test]
    fn healthy_page_renders_without_fallback() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <RenderBoundary>
                    {move || use_boundary().guard(|| Page::About.render())}
                </RenderBoundary>
            }
            .to_html();

            assert!(html.contains("about-page"));
            assert!(!html.contains("render-failure"));
        });
    }
}
