//! Localized text resolution.
//!
//! The pipeline never fails on a missing translation: providers fall back to
//! the key itself, so an incomplete catalog degrades to visible keys instead
//! of aborting a compilation.

pub mod catalog;

pub use catalog::MessageCatalog;

use std::fmt;

/// A culture tag such as `en` or `de-DE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture(String);

impl Culture {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parent culture (`de-DE` → `de`), if any.
    pub fn parent(&self) -> Option<Culture> {
        self.0.rfind('-').map(|idx| Culture(self.0[..idx].to_string()))
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Culture plus type context handed to text resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageContext<'a> {
    pub culture: &'a Culture,
    /// Declared type of the node currently being compiled.
    pub dto_type: &'a str,
    /// Root type whose compilation led to this node.
    pub origin_dto_type: &'a str,
}

/// Resolves localized display text for a key.
///
/// Implementations are shared across concurrent compilation requests: they
/// must be safe for concurrent calls and must not fail for unknown keys.
pub trait LanguageProvider: Send + Sync {
    fn text(&self, key: &str, ctx: &LanguageContext<'_>) -> String;
}

/// Provider that echoes the key back; used when no catalogs are configured.
#[derive(Debug, Default)]
pub struct PassthroughProvider;

impl LanguageProvider for PassthroughProvider {
    fn text(&self, key: &str, _ctx: &LanguageContext<'_>) -> String {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::language::*;

    #[test]
    fn test_culture_parent_chain() {
        let culture = Culture::new("de-DE");
        assert_eq!(culture.parent(), Some(Culture::new("de")));
        assert_eq!(Culture::new("de").parent(), None);
    }

    #[test]
    fn test_culture_parent_keeps_leading_segments() {
        let culture = Culture::new("zh-Hant-TW");
        assert_eq!(culture.parent(), Some(Culture::new("zh-Hant")));
    }

    #[test]
    fn test_passthrough_returns_key() {
        let culture = Culture::new("en");
        let ctx = LanguageContext {
            culture: &culture,
            dto_type: "Customer",
            origin_dto_type: "Customer",
        };
        assert_eq!(PassthroughProvider.text("Customer.Name", &ctx), "Customer.Name");
    }
}
