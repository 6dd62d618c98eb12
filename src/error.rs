//! Error type for page setup.
//!
//! The interaction core never fails. Everything here comes from wiring the
//! page: reading the embedded manifest and finding or binding DOM nodes.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned while loading content or binding the page.
#[derive(Debug, thiserror::Error)]
pub enum AtelierError {
    /// The embedded content manifest is not valid JSON for [`crate::content::Content`].
    #[error("failed to parse content manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    /// The manifest parsed but lacks an entry the page needs.
    #[error("content manifest has no {0}")]
    MissingContent(String),
    /// No `window` or `document` (not running in a browser).
    #[error("browser environment unavailable: {0}")]
    NoBrowser(&'static str),
    /// A required element id is missing from the page.
    #[error("element #{0} not found")]
    MissingElement(String),
    /// A DOM call rejected its arguments.
    #[error("{context}: {detail}")]
    Dom {
        /// The operation that failed.
        context: &'static str,
        /// The browser's description of the failure.
        detail: String,
    },
}

impl AtelierError {
    /// Wrap a browser exception. `detail` is the exception's debug rendering.
    #[must_use]
    pub fn dom(context: &'static str, detail: impl std::fmt::Debug) -> Self {
        Self::Dom { context, detail: format!("{detail:?}") }
    }
}
