//! FIFO queue of transient notifications.
//!
//! The queue only orders and limits toasts. Timing is left to the caller:
//! when a toast first becomes visible it is reported once by
//! [`ToastQueue::take_newly_visible`], and the caller retires it after
//! [`ToastConfig::display_duration`].

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// Identifier of a toast, unique within its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast_{}", self.0)
    }
}

/// Severity of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Returns the level as a lowercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub level: ToastLevel,
    pub message: String,
    shown: bool,
}

impl Toast {
    /// Returns true once the toast has been displayed.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.shown
    }
}

/// Display settings for toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    /// How long a visible toast stays before it is retired.
    pub display_duration: Duration,
    /// How many toasts are visible at once.
    pub max_visible: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display_duration: Duration::from_millis(4000),
            max_visible: 3,
        }
    }
}

/// FIFO toast queue.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(ToastConfig::default().max_visible)
    }
}

impl ToastQueue {
    /// Creates an empty queue showing at most `max_visible` toasts.
    ///
    /// A limit of zero is raised to one.
    #[must_use]
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            max_visible: max_visible.max(1),
        }
    }

    /// Enqueues a toast at the back of the queue.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let message = message.into();
        tracing::debug!(%id, level = level.as_str(), message = %message, "Toast queued");
        self.toasts.push_back(Toast {
            id,
            level,
            message,
            shown: false,
        });
        id
    }

    /// Removes a toast, returning it if it was queued.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Toast> {
        let index = self.toasts.iter().position(|t| t.id == id)?;
        let toast = self.toasts.remove(index);
        if toast.is_some() {
            tracing::debug!(%id, "Toast retired");
        }
        toast
    }

    /// Iterates the toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().take(self.max_visible)
    }

    /// Marks newly visible toasts as shown and returns their ids.
    ///
    /// Each id is returned exactly once over the lifetime of the toast.
    pub fn take_newly_visible(&mut self) -> Vec<ToastId> {
        self.toasts
            .iter_mut()
            .take(self.max_visible)
            .filter(|t| !t.shown)
            .map(|t| {
                t.shown = true;
                t.id
            })
            .collect()
    }

    /// Drops every toast.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Number of queued toasts, visible or waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages<'a>(toasts: impl Iterator<Item = &'a Toast>) -> Vec<&'a str> {
        toasts.map(|t| t.message.as_str()).collect()
    }

    #[test]
    fn ids_increase_monotonically() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastLevel::Info, "a");
        let b = queue.push(ToastLevel::Info, "b");
        assert!(b > a);
        assert_eq!(a.to_string(), "toast_1");
    }

    #[test]
    fn visible_is_fifo_and_bounded() {
        let mut queue = ToastQueue::new(2);
        queue.push(ToastLevel::Info, "a");
        queue.push(ToastLevel::Success, "b");
        queue.push(ToastLevel::Error, "c");

        assert_eq!(messages(queue.visible()), vec!["a", "b"]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn dismiss_promotes_waiting_toast() {
        let mut queue = ToastQueue::new(1);
        let a = queue.push(ToastLevel::Info, "a");
        queue.push(ToastLevel::Info, "b");

        assert_eq!(queue.take_newly_visible(), vec![a]);
        let removed = queue.dismiss(a).expect("toast should be queued");
        assert_eq!(removed.message, "a");

        let newly = queue.take_newly_visible();
        assert_eq!(newly.len(), 1);
        assert_eq!(messages(queue.visible()), vec!["b"]);
    }

    #[test]
    fn newly_visible_reported_once() {
        let mut queue = ToastQueue::new(2);
        let a = queue.push(ToastLevel::Info, "a");
        assert_eq!(queue.take_newly_visible(), vec![a]);
        assert!(queue.take_newly_visible().is_empty());

        let b = queue.push(ToastLevel::Info, "b");
        queue.push(ToastLevel::Info, "c");
        assert_eq!(queue.take_newly_visible(), vec![b]);
    }

    #[test]
    fn waiting_toast_is_not_shown() {
        let mut queue = ToastQueue::new(1);
        queue.push(ToastLevel::Info, "a");
        let b = queue.push(ToastLevel::Info, "b");
        queue.take_newly_visible();

        let waiting = queue
            .toasts
            .iter()
            .find(|t| t.id == b)
            .expect("b should be queued");
        assert!(!waiting.is_shown());
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastLevel::Info, "a");
        queue.dismiss(a);
        assert!(queue.dismiss(a).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        let mut queue = ToastQueue::new(0);
        queue.push(ToastLevel::Warning, "a");
        assert_eq!(queue.visible().count(), 1);
    }

    #[test]
    fn clear_empties_queue() {
        let mut queue = ToastQueue::default();
        queue.push(ToastLevel::Info, "a");
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn config_defaults() {
        let config = ToastConfig::default();
        assert_eq!(config.display_duration, Duration::from_secs(4));
        assert_eq!(config.max_visible, 3);
    }
}
