//! Core building blocks for the waymark single-page application.
//!
//! This crate holds everything that does not depend on a UI framework:
//!
//! - **Routes**: an ordered route table with a mandatory terminal wildcard
//! - **Boundaries**: the two-state supervisor around fallible page renders
//! - **Toasts**: a FIFO notification queue with bounded visibility
//! - **Messages**: the small built-in catalog behind the i18n demo page

pub mod boundary;
pub mod error;
pub mod i18n;
pub mod route;
pub mod toast;

pub use boundary::{Boundary, BoundaryState, Outcome, RenderFailure};
pub use error::Result;
pub use i18n::{Catalog, I18nError, Locale};
pub use route::{RouteEntry, RoutePattern, RouteTable, RouteTableBuilder, RouteTableError};
pub use toast::{Toast, ToastConfig, ToastId, ToastLevel, ToastQueue};
