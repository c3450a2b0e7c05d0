//! # Theme Resolver
//!
//! Turns theme names, theme files and configuration into [ThemeRecord]s.
//!
//! The resolver combines the built-in [ThemeRegistry] with user themes loaded
//! from `.theme` files. Presets always win: a user theme can never take a
//! preset's name.
//!
//! ## Usage Examples
//!
//! ```rust
//! use boxmodel_theme::config::{ColorScheme, ThemeConfig, ThemeSource};
//! use boxmodel_theme::theme_resolver::ThemeResolver;
//!
//! let resolver = ThemeResolver::new();
//! let nerdy = resolver.resolve("Nerdy").unwrap();
//! assert_eq!(nerdy.max_items, 8);
//!
//! // An unknown dark theme falls back to the configured fallback.
//! let config = ThemeConfig::new().with_dark_theme(ThemeSource::preset("Nope"));
//! let resolved = resolver.resolve_scheme(&config, ColorScheme::Dark).unwrap();
//! assert_eq!(resolved.name, "Bright");
//! ```

use std::path::Path;

use indexmap::IndexMap;

use crate::config::{ColorScheme, ThemeConfig, ThemeSource};
use crate::error::{ThemeError, ThemeResult};
use crate::file::{read_theme_file, theme_name_from_path};
use crate::registry::ThemeRegistry;
use crate::theme::ThemeRecord;

/// A theme record together with the name it was resolved under.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    /// Preset or user theme name, or the file stem for file sources.
    /// A file stem never equals a preset name.
    pub name: String,
    /// The resolved record.
    pub record: ThemeRecord,
}

/// Resolves themes from the built-in presets and registered user themes.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    presets: &'static ThemeRegistry,
    user_themes: IndexMap<String, ThemeRecord>,
}

impl ThemeResolver {
    /// Create a resolver over the built-in presets, without user themes.
    pub fn new() -> Self {
        Self {
            presets: ThemeRegistry::builtin(),
            user_themes: IndexMap::new(),
        }
    }

    /// The built-in presets.
    pub fn presets(&self) -> &'static ThemeRegistry {
        self.presets
    }

    /// Resolve a theme by exact name: presets first, then user themes.
    pub fn resolve(&self, name: &str) -> ThemeResult<ThemeRecord> {
        self.get(name).cloned().ok_or_else(|| ThemeError::not_found(name))
    }

    /// Borrow a theme by exact name.
    pub fn get(&self, name: &str) -> Option<&ThemeRecord> {
        self.presets.get(name).or_else(|| self.user_themes.get(name))
    }

    /// Resolve a theme source. File sources are read on top of their `base`.
    pub fn resolve_source(&self, source: &ThemeSource) -> ThemeResult<ResolvedTheme> {
        match source {
            ThemeSource::Preset(name) => Ok(ResolvedTheme {
                name: name.clone(),
                record: self.resolve(name)?,
            }),
            ThemeSource::File(path) => {
                let name = self.file_theme_name(path)?;
                let record = read_theme_file(path, self.presets)?;
                log::info!("Loaded theme '{}' from {:?}", name, path);
                Ok(ResolvedTheme { name, record })
            },
        }
    }

    /// The name a theme file provides: its file stem.
    ///
    /// A stem that is empty or names a preset is rejected, so a file can never
    /// be reported under a preset's name.
    pub fn file_theme_name(&self, path: &Path) -> ThemeResult<String> {
        match theme_name_from_path(path) {
            Some(name) if !name.trim().is_empty() && !self.presets.contains(&name) => Ok(name),
            name => Err(ThemeError::InvalidThemeName {
                name: name.unwrap_or_else(|| path.display().to_string()),
            }),
        }
    }

    /// Resolve the theme configured for `scheme`.
    ///
    /// If it cannot be resolved, the configured fallback is tried instead.
    /// The error of the fallback is returned if both fail.
    pub fn resolve_scheme(
        &self,
        config: &ThemeConfig,
        scheme: ColorScheme,
    ) -> ThemeResult<ResolvedTheme> {
        let source = config.source_for(scheme);
        match self.resolve_source(&source) {
            Ok(resolved) => Ok(resolved),
            Err(e) => {
                let fallback = config.fallback();
                log::warn!(
                    "Failed to resolve theme {} for {:?} mode: {}. Using fallback {}",
                    source,
                    scheme,
                    e,
                    fallback
                );
                self.resolve_source(&fallback)
            },
        }
    }

    /// Whether a preset or user theme with this exact name exists.
    pub fn is_theme_available(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `name` is a user theme.
    pub fn is_user_theme(&self, name: &str) -> bool {
        self.user_themes.contains_key(name)
    }

    /// All theme names: presets in registration order, then user themes.
    pub fn available_themes(&self) -> Vec<&str> {
        self.presets
            .names()
            .chain(self.user_themes.keys().map(String::as_str))
            .collect()
    }

    /// User theme names in registration order.
    pub fn user_themes(&self) -> impl Iterator<Item = &str> {
        self.user_themes.keys().map(String::as_str)
    }

    /// Names of presets and user themes containing `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.available_themes()
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Register a user theme, replacing an earlier user theme of that name.
    ///
    /// Preset names and empty names are rejected.
    pub fn register_user_theme(
        &mut self,
        name: impl Into<String>,
        record: ThemeRecord,
    ) -> ThemeResult<()> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || self.presets.contains(trimmed) {
            return Err(ThemeError::InvalidThemeName { name });
        }

        log::debug!("Registered user theme '{}'", trimmed);
        self.user_themes.insert(trimmed.to_string(), record);
        Ok(())
    }

    /// Remove a user theme, returning its record.
    pub fn remove_user_theme(&mut self, name: &str) -> Option<ThemeRecord> {
        self.user_themes.shift_remove(name)
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new()
    }
}
