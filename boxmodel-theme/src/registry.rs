//! # Theme Registry
//!
//! The immutable catalog of named [ThemeRecord]s.
//!
//! The built-in registry is created once, on first use, and shared read-only
//! for the rest of the process:
//!
//! ```rust
//! use boxmodel_theme::registry::ThemeRegistry;
//!
//! let registry = ThemeRegistry::builtin();
//! assert_eq!(registry.len(), 36);
//!
//! let arc = registry.get("ArcDark").unwrap();
//! assert_eq!(arc.background_color, "#2F343F");
//!
//! // Owned copies for callers that want to tweak a preset.
//! let mut mine = registry.resolve("Nerdy").unwrap();
//! mine.max_items = 12;
//! assert_eq!(registry.get("Nerdy").unwrap().max_items, 8);
//! ```

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::presets::build_theme_registry;
use crate::theme::ThemeRecord;

/// A read-only mapping from theme name to [ThemeRecord], in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeRegistry {
    themes: IndexMap<String, ThemeRecord>,
}

static BUILTIN: OnceLock<ThemeRegistry> = OnceLock::new();

impl ThemeRegistry {
    pub(crate) fn from_map(themes: IndexMap<String, ThemeRecord>) -> Self {
        Self { themes }
    }

    /// The process-wide catalog of built-in presets.
    pub fn builtin() -> &'static ThemeRegistry {
        BUILTIN.get_or_init(build_theme_registry)
    }

    /// Look up a theme by its exact name.
    pub fn get(&self, name: &str) -> Option<&ThemeRecord> {
        self.themes.get(name)
    }

    /// Get an owned copy of a theme, or [ThemeError::ThemeNotFound].
    pub fn resolve(&self, name: &str) -> ThemeResult<ThemeRecord> {
        self.get(name).cloned().ok_or_else(|| ThemeError::not_found(name))
    }

    /// Check whether a theme with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the registry holds no themes.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Theme names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// `(name, record)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeRecord)> {
        self.themes.iter().map(|(name, theme)| (name.as_str(), theme))
    }

    /// Names containing `query`, ignoring case and surrounding whitespace.
    ///
    /// An empty query matches every theme.
    pub fn search<'a>(&'a self, query: &str) -> Vec<&'a str> {
        let needle = query.trim().to_lowercase();
        self.names()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ThemeRegistry {
    type Item = (&'a String, &'a ThemeRecord);
    type IntoIter = indexmap::map::Iter<'a, String, ThemeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.themes.iter()
    }
}
