//! # Theme Files
//!
//! Themes can be saved to and loaded from `.theme` files. A theme file is
//! TOML whose keys are [ThemeProperty] keys:
//!
//! ```toml
//! base = "Dark"                 # optional, defaults to "Bright"
//! highlight_color = "#ff9020"
//! border_size = 2
//! font_name = "Fira Sans"
//! ```
//!
//! Files written by [write_theme_file] carry every property. Files written by
//! hand may carry only a few; the rest is taken from the `base` preset when
//! the file is loaded on its own, or from the current theme when it is
//! applied as an overlay.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{ThemeError, ThemeResult};
use crate::properties::{ThemeProperty, ThemeValue};
use crate::registry::ThemeRegistry;
use crate::theme::ThemeRecord;

/// Extension of theme files, without the dot.
pub const THEME_FILE_EXTENSION: &str = "theme";

/// Key naming the preset a theme file is layered on.
pub const BASE_KEY: &str = "base";

/// Preset used when a theme file names no base.
pub const DEFAULT_BASE: &str = "Bright";

/// Serialize a record into theme file text.
pub fn to_theme_string(record: &ThemeRecord) -> ThemeResult<String> {
    let mut table = toml::Table::new();
    for property in ThemeProperty::ALL {
        table.insert(property.as_str().to_string(), record.property(property).to_toml());
    }
    Ok(toml::to_string(&table)?)
}

/// Write every property of `record` to `path`.
pub fn write_theme_file(record: &ThemeRecord, path: impl AsRef<Path>) -> ThemeResult<()> {
    let path = path.as_ref();
    fs::write(path, to_theme_string(record)?)?;
    log::info!("Wrote theme file {:?}", path);
    Ok(())
}

/// Save `record` as `<dir>/<name>.theme`.
///
/// The name must not be empty and must not already exist in `dir`. The file is
/// created exclusively, so an existing file is never overwritten.
pub fn save_theme_as(record: &ThemeRecord, dir: impl AsRef<Path>, name: &str) -> ThemeResult<PathBuf> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(ThemeError::InvalidThemeName {
            name: name.to_string(),
        });
    }

    let dir = dir.as_ref();
    let content = to_theme_string(record)?;
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}.{}", name, THEME_FILE_EXTENSION));
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(ThemeError::ThemeAlreadyExists {
                name: name.to_string(),
                path,
            });
        },
        Err(e) => return Err(e.into()),
    };
    file.write_all(content.as_bytes())?;
    log::info!("Saved theme '{}' to {:?}", name, path);
    Ok(path)
}

/// Parse theme file text into a TOML table.
pub fn parse_theme_table(content: &str, path: impl AsRef<Path>) -> ThemeResult<toml::Table> {
    content
        .parse::<toml::Table>()
        .map_err(|e| ThemeError::parse_error(path.as_ref(), e.to_string()))
}

/// Apply every property present in `table` to `record`.
///
/// Unknown keys are skipped with a warning. If any known key carries an
/// invalid value, `record` is left unchanged and the error is returned.
/// Returns the properties that were set.
pub fn apply_overlay(record: &mut ThemeRecord, table: &toml::Table) -> ThemeResult<Vec<ThemeProperty>> {
    let mut updated = record.clone();
    let mut applied = Vec::new();

    for (key, value) in table {
        if key == BASE_KEY {
            continue;
        }
        let property = match key.parse::<ThemeProperty>() {
            Ok(property) => property,
            Err(_) => {
                log::warn!("Skipping unknown theme property '{}'", key);
                continue;
            },
        };
        updated.set_property(property, ThemeValue::from_toml(property, value)?)?;
        applied.push(property);
    }

    *record = updated;
    Ok(applied)
}

/// Load a theme file on top of its `base` preset from `registry`.
pub fn read_theme_file(path: impl AsRef<Path>, registry: &ThemeRegistry) -> ThemeResult<ThemeRecord> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ThemeError::file_not_found(path));
    }
    let content = fs::read_to_string(path)?;
    theme_from_str(&content, path, registry)
}

/// Build a record from theme file text read from `path`.
pub fn theme_from_str(
    content: &str,
    path: impl AsRef<Path>,
    registry: &ThemeRegistry,
) -> ThemeResult<ThemeRecord> {
    let path = path.as_ref();
    let table = parse_theme_table(content, path)?;

    let base = match table.get(BASE_KEY) {
        None => DEFAULT_BASE,
        Some(toml::Value::String(name)) => name.as_str(),
        Some(other) => {
            return Err(ThemeError::parse_error(
                path,
                format!("'{}' must be a string, found {}", BASE_KEY, other.type_str()),
            ))
        },
    };

    let mut record = registry.resolve(base)?;
    apply_overlay(&mut record, &table)
        .map_err(|e| ThemeError::parse_error(path, e.to_string()))?;
    Ok(record)
}

/// Read and parse a theme file without interpreting it.
pub fn read_theme_table(path: impl AsRef<Path>) -> ThemeResult<toml::Table> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ThemeError::file_not_found(path));
    }
    let content = fs::read_to_string(path)?;
    parse_theme_table(&content, path)
}

/// The theme name a file provides: its file stem.
pub fn theme_name_from_path(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

/// Whether `path` has the theme file extension.
pub fn is_theme_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext == THEME_FILE_EXTENSION)
}
