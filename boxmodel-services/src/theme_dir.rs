// SPDX-License-Identifier: LGPL-3.0-only
//! Discovery and loading of user `.theme` files.

use anyhow::{Context, Result};
use boxmodel_theme::file::{is_theme_file, save_theme_as, theme_from_str, theme_name_from_path};
use boxmodel_theme::theme_resolver::ThemeResolver;
use boxmodel_theme::ThemeRecord;
use smol::fs;
use smol::stream::StreamExt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::settings::SettingsRegistry;

/// Outcome of loading a theme directory.
#[derive(Debug, Default)]
pub struct ThemeLoadReport {
    /// Names of the themes that were registered, in load order.
    pub loaded: Vec<String>,
    /// Files that were skipped, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// A directory of user `.theme` files.
#[derive(Debug, Clone)]
pub struct ThemeDirectory {
    path: PathBuf,
}

impl ThemeDirectory {
    /// Use `path` as theme directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The user's theme directory, `$XDG_DATA_HOME/boxmodel/themes`.
    pub fn user() -> Result<Self> {
        Ok(Self::new(SettingsRegistry::user_theme_dir()?))
    }

    /// The directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All `.theme` files in the directory, sorted by path.
    ///
    /// Symlinks count when they point at a file; dangling links are skipped.
    /// A missing directory has no themes.
    pub async fn theme_files(&self) -> Result<Vec<PathBuf>> {
        let mut entries = match fs::read_dir(&self.path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to list themes in {:?}", self.path))
            },
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.try_next().await? {
            let path = entry.path();
            if !is_theme_file(&path) {
                continue;
            }
            match fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => files.push(path),
                Ok(_) => {},
                Err(e) => log::debug!("Ignoring unreadable theme entry {:?}: {}", path, e),
            }
        }
        files.sort();
        Ok(files)
    }

    /// Load a single theme file. The theme name is the file stem.
    pub async fn load_theme(&self, path: &Path, resolver: &ThemeResolver) -> Result<(String, ThemeRecord)> {
        let name = theme_name_from_path(path)
            .with_context(|| format!("Theme file {:?} has no usable name", path))?;
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read theme file {:?}", path))?;
        let record = theme_from_str(&content, path, resolver.presets())?;
        Ok((name, record))
    }

    /// Register every theme in the directory with `resolver`.
    ///
    /// Files that fail to load and names that belong to a preset are skipped
    /// and logged.
    pub async fn load_into(&self, resolver: &mut ThemeResolver) -> Result<ThemeLoadReport> {
        let mut report = ThemeLoadReport::default();

        for path in self.theme_files().await? {
            let loaded = self.load_theme(&path, resolver).await.and_then(|(name, record)| {
                resolver.register_user_theme(name.clone(), record)?;
                Ok(name)
            });

            match loaded {
                Ok(name) => {
                    log::info!("Loaded user theme '{}' from {:?}", name, path);
                    report.loaded.push(name);
                },
                Err(e) => {
                    log::warn!("Skipping theme file {:?}: {}", path, e);
                    report.skipped.push((path, e.to_string()));
                },
            }
        }

        Ok(report)
    }

    /// Save `record` in this directory as `<name>.theme`.
    pub fn save(&self, record: &ThemeRecord, name: &str) -> Result<PathBuf> {
        Ok(save_theme_as(record, &self.path, name)?)
    }
}
