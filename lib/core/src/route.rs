//! Ordered route table with first-match-wins resolution.
//!
//! A table is a list of `(pattern, handler)` entries declared once at
//! startup. Exact patterns are tried in declaration order and the single
//! wildcard entry (`*`) is always tried last, so every path resolves to
//! exactly one handler.

use rootcause::Report;
use std::fmt;
use std::str::FromStr;

/// The literal used to declare the wildcard fallback.
pub const WILDCARD: &str = "*";

/// Errors raised while declaring a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// A pattern could not be parsed.
    InvalidPattern { pattern: String, reason: String },
    /// Two entries share the same exact pattern.
    DuplicatePattern { pattern: String },
    /// More than one wildcard entry was declared.
    MultipleFallbacks,
    /// No wildcard entry was declared.
    MissingFallback,
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid route pattern '{pattern}': {reason}")
            }
            Self::DuplicatePattern { pattern } => {
                write!(f, "duplicate route pattern '{pattern}'")
            }
            Self::MultipleFallbacks => write!(f, "more than one '{WILDCARD}' route declared"),
            Self::MissingFallback => write!(f, "no '{WILDCARD}' fallback route declared"),
        }
    }
}

impl std::error::Error for RouteTableError {}

/// A pattern matched against the current URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoutePattern {
    /// Matches one normalized path exactly.
    Exact(String),
    /// Matches any path. Only evaluated when no exact pattern matches.
    Any,
}

impl RoutePattern {
    /// Returns true if this is the wildcard pattern.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Tests an already-normalized path against this pattern.
    ///
    /// Exact patterns compare ASCII case-insensitively.
    #[must_use]
    pub fn matches(&self, normalized_path: &str) -> bool {
        match self {
            Self::Exact(path) => path.eq_ignore_ascii_case(normalized_path),
            Self::Any => true,
        }
    }
}

impl FromStr for RoutePattern {
    type Err = RouteTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| RouteTableError::InvalidPattern {
            pattern: s.to_string(),
            reason: reason.to_string(),
        };

        if s == WILDCARD {
            return Ok(Self::Any);
        }
        if !s.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        if let Some(c) = s
            .chars()
            .find(|c| matches!(c, '*' | '?' | '#') || c.is_whitespace())
        {
            return Err(invalid(&format!("unexpected character {c:?}")));
        }

        Ok(Self::Exact(normalize_path(s)))
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(path) => f.write_str(path),
            Self::Any => f.write_str(WILDCARD),
        }
    }
}

/// A single route declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<H> {
    pattern: RoutePattern,
    handler: H,
}

impl<H> RouteEntry<H> {
    /// Returns the entry's pattern.
    #[must_use]
    pub const fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Returns the handler bound to the pattern.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }
}

/// Normalizes a URL path for matching.
///
/// Drops the query string and fragment, collapses repeated slashes and
/// removes a trailing slash. The empty path becomes `/`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());

    let mut normalized = String::with_capacity(end + 1);
    for segment in path[..end].split('/').filter(|s| !s.is_empty()) {
        normalized.push('/');
        normalized.push_str(segment);
    }

    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Builder for a validated [`RouteTable`].
#[derive(Debug)]
pub struct RouteTableBuilder<H> {
    declared: Vec<(String, H)>,
}

impl<H> Default for RouteTableBuilder<H> {
    fn default() -> Self {
        Self {
            declared: Vec::new(),
        }
    }
}

impl<H> RouteTableBuilder<H> {
    /// Declares a route. Use `"*"` for the fallback.
    #[must_use]
    pub fn route(mut self, pattern: impl Into<String>, handler: H) -> Self {
        self.declared.push((pattern.into(), handler));
        self
    }

    /// Validates the declarations and builds the table.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid, an exact pattern is
    /// declared twice, or the table does not have exactly one fallback.
    pub fn build(self) -> Result<RouteTable<H>, Report<RouteTableError>> {
        let mut exact: Vec<RouteEntry<H>> = Vec::with_capacity(self.declared.len());
        let mut fallback = None;

        for (raw, handler) in self.declared {
            let pattern: RoutePattern = raw.parse()?;

            if pattern.is_fallback() {
                if fallback.is_some() {
                    return Err(RouteTableError::MultipleFallbacks.into());
                }
                fallback = Some(RouteEntry { pattern, handler });
                continue;
            }

            let path = pattern.to_string();
            if exact.iter().any(|entry| entry.pattern.matches(&path)) {
                return Err(RouteTableError::DuplicatePattern { pattern: path }.into());
            }
            exact.push(RouteEntry { pattern, handler });
        }

        let fallback = fallback.ok_or(RouteTableError::MissingFallback)?;
        tracing::debug!(
            routes = exact.len(),
            "Route table built with terminal fallback"
        );

        Ok(RouteTable { exact, fallback })
    }
}

/// An immutable, validated route table.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    exact: Vec<RouteEntry<H>>,
    fallback: RouteEntry<H>,
}

impl<H> RouteTable<H> {
    /// Starts declaring a table.
    #[must_use]
    pub fn builder() -> RouteTableBuilder<H> {
        RouteTableBuilder::default()
    }

    /// Selects the entry for `path`.
    ///
    /// Exact entries are tried in declaration order; the first match
    /// wins. The fallback is returned when none match.
    #[must_use]
    pub fn resolve(&self, path: &str) -> &RouteEntry<H> {
        let normalized = normalize_path(path);
        self.exact
            .iter()
            .find(|entry| entry.pattern.matches(&normalized))
            .unwrap_or(&self.fallback)
    }

    /// Iterates entries in evaluation order, fallback last.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<H>> {
        self.exact.iter().chain(std::iter::once(&self.fallback))
    }

    /// Number of entries including the fallback.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len() + 1
    }

    /// Always false; a valid table holds at least the fallback.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}
