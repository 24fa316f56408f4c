//! Error handling foundation for waymark.
//!
//! This module provides only the `Result` type alias using rootcause.
//! Each module defines its own domain error type next to the code that
//! raises it (`RouteTableError`, `I18nError`), and callers add context
//! via rootcause's `.context()` as errors propagate.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
