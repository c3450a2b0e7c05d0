// SPDX-License-Identifier: LGPL-3.0-only
use anyhow::Result;
use boxmodel_theme::config::ThemeConfig;
use serde::Deserialize;
use smol::fs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// Prefix of the XDG directories the launcher reads from.
pub const XDG_PREFIX: &str = "boxmodel";

/// The main configuration structure for the application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,
    /// Launcher window behaviour
    #[serde(default)]
    pub window: WindowSettings,
    /// Any other sections are captured here
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

/// The `[general]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralSettings {
    /// Enables debug output.
    pub debug: Option<bool>,
    /// Log filter, e.g. `"info"`.
    pub log_level: Option<String>,
}

/// The `[window]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowSettings {
    /// Center the window on the screen when showing it.
    pub show_centered: Option<bool>,
    /// Hide the window when it loses focus.
    pub hide_on_focus_loss: Option<bool>,
    /// Hide instead of quitting when the window is closed.
    pub hide_on_close: Option<bool>,
    /// Clear the input when the window is hidden.
    pub clear_on_hide: Option<bool>,
    /// Show the window on the screen under the mouse.
    pub follow_mouse: Option<bool>,
    /// Keep the window above other windows.
    pub always_on_top: Option<bool>,
    /// Draw the shadow with the window system instead of the theme.
    pub display_system_shadow: Option<bool>,
}

impl Config {
    fn defaults() -> Self {
        Self {
            general: GeneralSettings {
                debug: Some(false),
                log_level: None,
            },
            window: WindowSettings {
                show_centered: Some(true),
                hide_on_focus_loss: Some(true),
                hide_on_close: Some(true),
                clear_on_hide: Some(true),
                follow_mouse: Some(true),
                always_on_top: Some(true),
                display_system_shadow: Some(false),
            },
            other: HashMap::new(),
        }
    }
}

/// Registry for managing application settings.
pub struct SettingsRegistry {
    config: Config,
    /// Theme selection merged from every `theme.toml`.
    pub theme_config: ThemeConfig,
}

impl SettingsRegistry {
    /// Create a new SettingsRegistry and load configuration from standard locations.
    pub async fn new() -> Result<Self> {
        let mut registry = Self::with_defaults();
        registry.load().await?;
        Ok(registry)
    }

    /// Create a SettingsRegistry holding the defaults, without loading anything.
    pub fn with_defaults() -> Self {
        Self {
            config: Config::defaults(),
            theme_config: ThemeConfig::new(),
        }
    }

    /// Load configuration from standard locations in precedence order.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/boxmodel/config.toml (and XDG_DATA_DIRS)
    /// 2. System Config: /etc/xdg/boxmodel/config.toml (and XDG_CONFIG_DIRS)
    /// 3. User Config: ~/.config/boxmodel/config.toml (XDG_CONFIG_HOME)
    ///
    /// `theme.toml` is loaded from the same locations into [SettingsRegistry::theme_config].
    pub async fn load(&mut self) -> Result<()> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;

        for path in Self::candidate_files(&xdg_dirs, "config.toml") {
            self.load_file(&path).await;
        }
        for path in Self::candidate_files(&xdg_dirs, "theme.toml") {
            self.load_theme_file(&path).await;
        }

        Ok(())
    }

    fn candidate_files(xdg_dirs: &BaseDirectories, filename: &str) -> Vec<PathBuf> {
        // 1. System data directories, 2. system config directories
        let mut paths: Vec<PathBuf> = xdg_dirs.find_data_files(filename).rev().collect();
        paths.extend(xdg_dirs.find_config_files(filename).rev());

        // 3. User config directory
        let user_config_path = xdg_dirs.get_config_home().join(filename);
        if user_config_path.exists() && !paths.contains(&user_config_path) {
            paths.push(user_config_path);
        }

        paths
    }

    /// Directory holding the user's `.theme` files.
    pub fn user_theme_dir() -> Result<PathBuf> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;
        Ok(xdg_dirs.get_data_home().join("themes"))
    }

    async fn load_theme_file(&mut self, path: &Path) {
        log::info!("Loading theme config from: {:?}", path);
        match fs::read_to_string(path).await {
            Ok(content) => match ThemeConfig::from_toml(&content) {
                Ok(loaded_config) => {
                    self.theme_config.merge(loaded_config);
                },
                Err(e) => {
                    log::warn!("Failed to parse theme config {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read theme config {:?}: {}", path, e);
            },
        }
    }

    async fn load_file(&mut self, path: &Path) {
        log::info!("Loading config from: {:?}", path);
        match fs::read_to_string(path).await {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(loaded_config) => {
                    self.merge(loaded_config);
                },
                Err(e) => {
                    log::error!("Failed to parse config file {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
            },
        }
    }

    /// Merge a loaded config into the current config.
    fn merge(&mut self, other: Config) {
        // General
        if let Some(debug) = other.general.debug {
            self.config.general.debug = Some(debug);
        }
        if other.general.log_level.is_some() {
            self.config.general.log_level = other.general.log_level;
        }

        // Window
        let window = &mut self.config.window;
        let loaded = other.window;
        for (current, value) in [
            (&mut window.show_centered, loaded.show_centered),
            (&mut window.hide_on_focus_loss, loaded.hide_on_focus_loss),
            (&mut window.hide_on_close, loaded.hide_on_close),
            (&mut window.clear_on_hide, loaded.clear_on_hide),
            (&mut window.follow_mouse, loaded.follow_mouse),
            (&mut window.always_on_top, loaded.always_on_top),
            (&mut window.display_system_shadow, loaded.display_system_shadow),
        ] {
            if value.is_some() {
                *current = value;
            }
        }

        // Other
        self.config.other.extend(other.other);
    }

    /// Get the current configuration.
    pub fn get(&self) -> &Config {
        &self.config
    }

    /// Load configuration from multiple custom paths asynchronously.
    ///
    /// Files named `theme.toml` are read as theme configuration, everything
    /// else as `config.toml`. Later paths override earlier ones.
    pub async fn load_from_paths_async(&mut self, paths: Vec<PathBuf>) -> Vec<Result<()>> {
        let mut results = Vec::new();

        for path in paths {
            let result = async {
                let content = fs::read_to_string(&path)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to read config file {:?}: {}", path, e))?;

                if path.file_name().map_or(false, |name| name == "theme.toml") {
                    let loaded = ThemeConfig::from_toml(&content).map_err(|e| {
                        anyhow::anyhow!("Failed to parse theme config {:?}: {}", path, e)
                    })?;
                    self.theme_config.merge(loaded);
                } else {
                    let loaded_config: Config = toml::from_str(&content).map_err(|e| {
                        anyhow::anyhow!("Failed to parse config file {:?}: {}", path, e)
                    })?;
                    self.merge(loaded_config);
                }
                Ok(())
            }
            .await;

            results.push(result);
        }

        results
    }

    /// Reload configuration asynchronously (re-runs the full load process).
    pub async fn reload_async(&mut self) -> Result<()> {
        *self = Self::with_defaults();
        self.load().await
    }
}
