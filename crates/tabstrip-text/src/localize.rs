#![forbid(unsafe_code)]

//! Label localization hook.
//!
//! A tab stores its raw label and the localized form derived from it. The
//! derivation is owned by the host; the widget only calls
//! [`Localizer::localize`] whenever the raw text or the localizer changes.

use ahash::AHashMap;

/// Turns a raw label into its display form.
pub trait Localizer {
    fn localize(&self, text: &str) -> String;
}

/// Returns labels unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn localize(&self, text: &str) -> String {
        text.to_string()
    }
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String,
{
    fn localize(&self, text: &str) -> String {
        self(text)
    }
}

/// Message-catalog localizer. Unknown keys pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct CatalogLocalizer {
    entries: AHashMap<String, String>,
}

impl CatalogLocalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a translation.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for CatalogLocalizer {
    fn localize(&self, text: &str) -> String {
        self.entries
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
