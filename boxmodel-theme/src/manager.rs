use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::{ColorScheme, ThemeConfig, ThemeSource};
use crate::error::{ThemeError, ThemeResult};
use crate::file::{apply_overlay, read_theme_table, save_theme_as};
use crate::properties::{ThemeProperty, ThemeValue};
use crate::theme::{presets, ThemeRecord};
use crate::theme_resolver::{ResolvedTheme, ThemeResolver};

/// Holds the active theme and switches it at runtime.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current: ThemeRecord,
    current_name: String,
    config: ThemeConfig,
    resolver: ThemeResolver,
    scheme: ColorScheme,
}

impl ThemeManager {
    /// Create a theme manager in light mode with the `Bright` preset.
    pub fn new() -> Self {
        Self {
            current: presets::bright(),
            current_name: crate::config::DEFAULT_LIGHT_THEME.to_string(),
            config: ThemeConfig::new(),
            resolver: ThemeResolver::new(),
            scheme: ColorScheme::Light,
        }
    }

    /// Create a theme manager showing the theme `config` selects for `scheme`.
    pub fn with_config(config: ThemeConfig, scheme: ColorScheme) -> ThemeResult<Self> {
        Self::with_resolver(ThemeResolver::new(), config, scheme)
    }

    /// Like [ThemeManager::with_config], with user themes already loaded.
    pub fn with_resolver(
        resolver: ThemeResolver,
        config: ThemeConfig,
        scheme: ColorScheme,
    ) -> ThemeResult<Self> {
        let ResolvedTheme { name, record } = resolver.resolve_scheme(&config, scheme)?;
        Ok(Self {
            current: record,
            current_name: name,
            config,
            resolver,
            scheme,
        })
    }

    /// Create a theme manager from the environment, or the defaults if the
    /// configured themes cannot be resolved.
    pub fn from_env_or_default() -> Self {
        match Self::with_config(ThemeConfig::from_env_or_default(), ColorScheme::Light) {
            Ok(manager) => manager,
            Err(e) => {
                log::warn!("Failed to load configured theme: {}. Using defaults", e);
                Self::new()
            },
        }
    }

    /// The active theme.
    pub fn current(&self) -> &ThemeRecord {
        &self.current
    }

    /// Name of the active theme. After applying a theme file this is the
    /// file stem.
    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// The active color scheme.
    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// The theme selection per color scheme.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// The resolver used for theme lookups.
    pub fn resolver(&self) -> &ThemeResolver {
        &self.resolver
    }

    /// Whether the active theme differs from the theme it was loaded as.
    pub fn is_modified(&self) -> bool {
        self.resolver
            .get(&self.current_name)
            .map_or(true, |theme| theme != &self.current)
    }

    /// Switch to a preset or user theme by exact name.
    ///
    /// The active theme is unchanged if the name is unknown.
    pub fn switch_theme(&mut self, name: &str) -> ThemeResult<()> {
        let record = self.resolver.resolve(name)?;
        self.set_current(name.to_string(), record);
        Ok(())
    }

    /// Switch to the theme configured for `scheme`.
    pub fn apply_color_scheme(&mut self, scheme: ColorScheme) -> ThemeResult<()> {
        let ResolvedTheme { name, record } = self.resolver.resolve_scheme(&self.config, scheme)?;
        self.scheme = scheme;
        self.set_current(name, record);
        Ok(())
    }

    /// Use the theme `name` in light mode.
    pub fn set_light_theme(&mut self, name: &str) -> ThemeResult<()> {
        self.set_scheme_theme(ColorScheme::Light, name)
    }

    /// Use the theme `name` in dark mode.
    pub fn set_dark_theme(&mut self, name: &str) -> ThemeResult<()> {
        self.set_scheme_theme(ColorScheme::Dark, name)
    }

    fn set_scheme_theme(&mut self, scheme: ColorScheme, name: &str) -> ThemeResult<()> {
        if !self.resolver.is_theme_available(name) {
            return Err(ThemeError::not_found(name));
        }
        self.config.set_theme(scheme, ThemeSource::preset(name));
        if self.scheme == scheme {
            self.switch_theme(name)?;
        }
        Ok(())
    }

    /// Apply a theme file on top of the active theme.
    ///
    /// Only the properties in the file change; the `base` key is ignored.
    /// The file stem becomes the theme name, so a file named after a preset
    /// is rejected. Returns the properties that were set.
    pub fn apply_theme_file(&mut self, path: impl AsRef<Path>) -> ThemeResult<Vec<ThemeProperty>> {
        let path = path.as_ref();
        let name = self.resolver.file_theme_name(path)?;
        let table = read_theme_table(path)?;
        let applied = apply_overlay(&mut self.current, &table)
            .map_err(|e| ThemeError::parse_error(path, e.to_string()))?;

        self.current_name = name;
        log::info!(
            "Applied {} properties from {:?} to theme '{}'",
            applied.len(),
            path,
            self.current_name
        );
        Ok(applied)
    }

    /// Get a property of the active theme.
    pub fn property(&self, property: ThemeProperty) -> ThemeValue {
        self.current.property(property)
    }

    /// Set a property of the active theme.
    pub fn set_property(&mut self, property: ThemeProperty, value: ThemeValue) -> ThemeResult<()> {
        self.current.set_property(property, value)
    }

    /// Save the active theme as `<dir>/<name>.theme` and register it as a
    /// user theme, which becomes the active theme's name.
    pub fn save_current_as(&mut self, dir: impl AsRef<Path>, name: &str) -> ThemeResult<PathBuf> {
        let name = name.trim();
        if self.resolver.presets().contains(name) {
            return Err(ThemeError::InvalidThemeName {
                name: name.to_string(),
            });
        }

        let path = save_theme_as(&self.current, dir, name)?;
        self.resolver.register_user_theme(name, self.current.clone())?;
        self.current_name = name.to_string();
        Ok(path)
    }

    /// Register a user theme with the resolver.
    pub fn register_user_theme(&mut self, name: &str, record: ThemeRecord) -> ThemeResult<()> {
        self.resolver.register_user_theme(name, record)
    }

    /// Remove a user theme. The active theme is kept even if it was this one.
    pub fn remove_user_theme(&mut self, name: &str) -> Option<ThemeRecord> {
        self.resolver.remove_user_theme(name)
    }

    fn set_current(&mut self, name: String, record: ThemeRecord) {
        log::info!("Switched theme to '{}'", name);
        self.current = record;
        self.current_name = name;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe theme manager that can be shared across the application.
pub type SharedThemeManager = Arc<RwLock<ThemeManager>>;

/// Create a new shared theme manager.
pub fn create_shared_theme_manager() -> SharedThemeManager {
    Arc::new(RwLock::new(ThemeManager::new()))
}
