//! # Theme Configuration
//!
//! Chooses which theme the frontend uses in light mode and in dark mode, and
//! which theme to fall back to when the chosen one cannot be resolved.
//!
//! ## Environment Variables
//!
//! ```bash
//! export BOXMODEL_THEME=Nerdy                 # both modes
//! export BOXMODEL_THEME_LIGHT=SolarizedBrightBlue
//! export BOXMODEL_THEME_DARK=file:/home/me/Ember.theme
//! export BOXMODEL_THEME_FALLBACK=Bright
//! export BOXMODEL_THEME_CONFIG=/home/me/.config/boxmodel/theme.toml
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! light = "Bright"
//! dark = "ArcDark"
//! fallback = "Dark"
//! ```
//!
//! ## Programmatic Configuration
//!
//! ```rust
//! use boxmodel_theme::config::{ColorScheme, ThemeConfig, ThemeSource};
//!
//! let config = ThemeConfig::new()
//!     .with_dark_theme(ThemeSource::preset("BreezeDark"))
//!     .with_fallback_theme(ThemeSource::preset("Dark"));
//!
//! assert_eq!(config.source_for(ColorScheme::Dark), ThemeSource::preset("BreezeDark"));
//! assert_eq!(config.source_for(ColorScheme::Light), ThemeSource::preset("Bright"));
//! ```

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ThemeError, ThemeResult};

/// Preset used in light mode unless configured otherwise.
pub const DEFAULT_LIGHT_THEME: &str = "Bright";
/// Preset used in dark mode unless configured otherwise.
pub const DEFAULT_DARK_THEME: &str = "Dark";

/// Theme used for both color schemes.
pub const ENV_THEME: &str = "BOXMODEL_THEME";
/// Theme used in light mode.
pub const ENV_THEME_LIGHT: &str = "BOXMODEL_THEME_LIGHT";
/// Theme used in dark mode.
pub const ENV_THEME_DARK: &str = "BOXMODEL_THEME_DARK";
/// Fallback theme.
pub const ENV_THEME_FALLBACK: &str = "BOXMODEL_THEME_FALLBACK";
/// Path of a TOML configuration file.
pub const ENV_THEME_CONFIG: &str = "BOXMODEL_THEME_CONFIG";

/// The system color scheme a theme is chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Light mode.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

/// Where a theme comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThemeSource {
    /// A theme by name: a built-in preset or a loaded user theme.
    Preset(String),
    /// A `.theme` file.
    File(PathBuf),
}

impl ThemeSource {
    /// A theme by name.
    pub fn preset(name: impl Into<String>) -> Self {
        Self::Preset(name.into())
    }

    /// Parse a source: `file:<path>` selects a file, anything else is a
    /// theme name. Names are case sensitive.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        match source.strip_prefix("file:") {
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::Preset(source.to_string()),
        }
    }
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeSource::Preset(name) => f.write_str(name),
            ThemeSource::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

/// Theme selection for both color schemes.
///
/// Unset entries fall back to [DEFAULT_LIGHT_THEME] and [DEFAULT_DARK_THEME];
/// they stay unset so that [ThemeConfig::merge] only overrides what another
/// configuration layer actually sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    light_theme: Option<ThemeSource>,
    dark_theme: Option<ThemeSource>,
    fallback_theme: Option<ThemeSource>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeSection {
    light: Option<String>,
    dark: Option<String>,
    fallback: Option<String>,
}

impl ThemeConfig {
    /// Create a configuration using the default presets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables or use defaults.
    ///
    /// `BOXMODEL_THEME` sets both schemes, `BOXMODEL_THEME_LIGHT` and
    /// `BOXMODEL_THEME_DARK` override one scheme each. A file named by
    /// `BOXMODEL_THEME_CONFIG` is merged on top; if it cannot be read it is
    /// ignored with a warning.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(theme) = lookup(ENV_THEME) {
            let source = ThemeSource::parse(&theme);
            config.light_theme = Some(source.clone());
            config.dark_theme = Some(source);
        }
        if let Some(theme) = lookup(ENV_THEME_LIGHT) {
            config.light_theme = Some(ThemeSource::parse(&theme));
        }
        if let Some(theme) = lookup(ENV_THEME_DARK) {
            config.dark_theme = Some(ThemeSource::parse(&theme));
        }
        if let Some(theme) = lookup(ENV_THEME_FALLBACK) {
            config.fallback_theme = Some(ThemeSource::parse(&theme));
        }

        if let Some(config_path) = lookup(ENV_THEME_CONFIG) {
            match Self::from_file(&config_path) {
                Ok(file_config) => config.merge(file_config),
                Err(e) => log::warn!("Ignoring theme config {:?}: {}", config_path, e),
            }
        }

        config
    }

    /// Load theme configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(ThemeError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            ThemeError::Serialization(details) => ThemeError::parse_error(path, details),
            other => other,
        })
    }

    /// Load theme configuration from TOML content.
    ///
    /// ```rust
    /// use boxmodel_theme::config::{ColorScheme, ThemeConfig, ThemeSource};
    ///
    /// let config = ThemeConfig::from_toml(r#"
    /// [theme]
    /// dark = "ArcDark"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.source_for(ColorScheme::Dark), ThemeSource::preset("ArcDark"));
    /// ```
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ThemeError::Serialization(e.to_string()))?;

        Ok(Self {
            light_theme: file.theme.light.as_deref().map(ThemeSource::parse),
            dark_theme: file.theme.dark.as_deref().map(ThemeSource::parse),
            fallback_theme: file.theme.fallback.as_deref().map(ThemeSource::parse),
        })
    }

    /// Set the light mode theme.
    pub fn with_light_theme(mut self, theme: ThemeSource) -> Self {
        self.light_theme = Some(theme);
        self
    }

    /// Set the dark mode theme.
    pub fn with_dark_theme(mut self, theme: ThemeSource) -> Self {
        self.dark_theme = Some(theme);
        self
    }

    /// Set the fallback theme.
    pub fn with_fallback_theme(mut self, theme: ThemeSource) -> Self {
        self.fallback_theme = Some(theme);
        self
    }

    /// Set the theme for one color scheme.
    pub fn set_theme(&mut self, scheme: ColorScheme, theme: ThemeSource) {
        match scheme {
            ColorScheme::Light => self.light_theme = Some(theme),
            ColorScheme::Dark => self.dark_theme = Some(theme),
        }
    }

    /// The theme used for a color scheme.
    pub fn source_for(&self, scheme: ColorScheme) -> ThemeSource {
        match scheme {
            ColorScheme::Light => self
                .light_theme
                .clone()
                .unwrap_or_else(|| ThemeSource::preset(DEFAULT_LIGHT_THEME)),
            ColorScheme::Dark => self
                .dark_theme
                .clone()
                .unwrap_or_else(|| ThemeSource::preset(DEFAULT_DARK_THEME)),
        }
    }

    /// The fallback theme: the configured one, or the light default.
    pub fn fallback(&self) -> ThemeSource {
        self.fallback_theme
            .clone()
            .unwrap_or_else(|| ThemeSource::preset(DEFAULT_LIGHT_THEME))
    }

    /// Merge another configuration layer on top of this one.
    ///
    /// Every entry set in `other` replaces the entry here.
    pub fn merge(&mut self, other: ThemeConfig) {
        if other.light_theme.is_some() {
            self.light_theme = other.light_theme;
        }
        if other.dark_theme.is_some() {
            self.dark_theme = other.dark_theme;
        }
        if other.fallback_theme.is_some() {
            self.fallback_theme = other.fallback_theme;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::new();
        assert_eq!(config.source_for(ColorScheme::Light), ThemeSource::preset("Bright"));
        assert_eq!(config.source_for(ColorScheme::Dark), ThemeSource::preset("Dark"));
        assert_eq!(config.fallback(), ThemeSource::preset("Bright"));
    }

    #[test]
    fn test_parse_source() {
        assert_eq!(ThemeSource::parse(" ArcDark "), ThemeSource::preset("ArcDark"));
        assert_eq!(
            ThemeSource::parse("file:/tmp/Ember.theme"),
            ThemeSource::File(PathBuf::from("/tmp/Ember.theme"))
        );
        assert_eq!(ThemeSource::parse("file:/tmp/x.theme").to_string(), "file:/tmp/x.theme");
    }

    #[test]
    fn test_env_overrides() {
        let config = ThemeConfig::from_lookup(lookup(&[
            (ENV_THEME, "Nerdy"),
            (ENV_THEME_DARK, "BreezeDark"),
            (ENV_THEME_FALLBACK, "Spotlight"),
        ]));
        assert_eq!(config.source_for(ColorScheme::Light), ThemeSource::preset("Nerdy"));
        assert_eq!(config.source_for(ColorScheme::Dark), ThemeSource::preset("BreezeDark"));
        assert_eq!(config.fallback(), ThemeSource::preset("Spotlight"));
    }

    #[test]
    fn test_env_config_file_is_merged() {
        let dir = std::env::temp_dir().join("boxmodel_theme_config_env");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("theme.toml");
        fs::write(&path, "[theme]\nlight = \"Tiffany\"\n").unwrap();

        let config = ThemeConfig::from_lookup(lookup(&[
            (ENV_THEME, "Nerdy"),
            (ENV_THEME_CONFIG, path.to_str().unwrap()),
        ]));
        assert_eq!(config.source_for(ColorScheme::Light), ThemeSource::preset("Tiffany"));
        assert_eq!(config.source_for(ColorScheme::Dark), ThemeSource::preset("Nerdy"));
    }

    #[test]
    fn test_from_toml() {
        let config = ThemeConfig::from_toml(
            r#"
            [theme]
            light = "SolarizedBrightCyan"
            dark = "file:themes/Ember.theme"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.source_for(ColorScheme::Light),
            ThemeSource::preset("SolarizedBrightCyan")
        );
        assert_eq!(
            config.source_for(ColorScheme::Dark),
            ThemeSource::File(PathBuf::from("themes/Ember.theme"))
        );
        assert_eq!(ThemeConfig::from_toml("").unwrap(), ThemeConfig::new());
        assert!(ThemeConfig::from_toml("[theme]\nlight = 3\n").is_err());
        assert!(ThemeConfig::from_toml("[theme]\nmode = \"dark\"\n").is_err());
    }

    #[test]
    fn test_from_file_checks_extension() {
        assert!(matches!(
            ThemeConfig::from_file("theme.json"),
            Err(ThemeError::UnsupportedConfigFormat { .. })
        ));
        assert!(matches!(
            ThemeConfig::from_file("/definitely/not/here.toml"),
            Err(ThemeError::ThemeFileNotFound { .. })
        ));
    }

    #[test]
    fn test_merge_only_overrides_set_entries() {
        let mut base = ThemeConfig::new()
            .with_light_theme(ThemeSource::preset("Tiffany"))
            .with_dark_theme(ThemeSource::preset("ArcDark"));
        let layer = ThemeConfig::new().with_dark_theme(ThemeSource::preset("BreezeDark"));
        base.merge(layer);
        assert_eq!(base.source_for(ColorScheme::Light), ThemeSource::preset("Tiffany"));
        assert_eq!(base.source_for(ColorScheme::Dark), ThemeSource::preset("BreezeDark"));
    }
}
