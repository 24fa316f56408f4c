//! Two-state supervisor for fallible page renders.
//!
//! A [`Boundary`] starts `Normal` and runs the render it is handed. The
//! first render that fails moves it to `Failed`, where it stays until
//! [`Boundary::reset`] is called; no further renders are attempted.

use std::fmt;

/// A failure raised synchronously while producing a page's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    message: String,
    page: Option<String>,
}

impl RenderFailure {
    /// Creates a failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            page: None,
        }
    }

    /// Records which page was rendering.
    #[must_use]
    pub fn in_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the page that failed, if known.
    #[must_use]
    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.page {
            Some(page) => write!(f, "failed to render {page}: {}", self.message),
            None => write!(f, "failed to render: {}", self.message),
        }
    }
}

impl std::error::Error for RenderFailure {}

/// Boundary state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoundaryState {
    /// Children render as-is.
    #[default]
    Normal,
    /// A render failed; the fallback is shown.
    Failed(RenderFailure),
}

/// Result of rendering through a boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The render succeeded.
    Rendered(T),
    /// The boundary is failed; show the fallback for this failure.
    Fallback(RenderFailure),
}

impl<T> Outcome<T> {
    /// Returns true if the fallback should be shown.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Supervisor wrapping a fallible render.
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    state: BoundaryState,
}

impl Boundary {
    /// Creates a boundary in the `Normal` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &BoundaryState {
        &self.state
    }

    /// Returns the captured failure while `Failed`.
    #[must_use]
    pub const fn failure(&self) -> Option<&RenderFailure> {
        match &self.state {
            BoundaryState::Normal => None,
            BoundaryState::Failed(failure) => Some(failure),
        }
    }

    /// Returns true once a render has failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.state, BoundaryState::Failed(_))
    }

    /// Runs `render` unless the boundary has already failed.
    ///
    /// A failing render moves the boundary to `Failed` and its failure is
    /// kept for the fallback view.
    pub fn render<T>(&mut self, render: impl FnOnce() -> Result<T, RenderFailure>) -> Outcome<T> {
        if let Some(failure) = self.failure() {
            return Outcome::Fallback(failure.clone());
        }

        match render() {
            Ok(output) => Outcome::Rendered(output),
            Err(failure) => {
                tracing::error!(
                    page = failure.page().unwrap_or("unknown"),
                    error = %failure.message(),
                    "Render failed, showing boundary fallback"
                );
                self.state = BoundaryState::Failed(failure.clone());
                Outcome::Fallback(failure)
            }
        }
    }

    /// Returns to `Normal` so children render again.
    pub fn reset(&mut self) {
        if let Some(failure) = self.failure() {
            tracing::info!(error = %failure, "Boundary reset");
        }
        self.state = BoundaryState::Normal;
    }
}
