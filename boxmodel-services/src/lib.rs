// SPDX-License-Identifier: LGPL-3.0-only
pub mod settings;
pub mod theme_dir;
pub mod watcher;

// Re-export commonly used types
pub use settings::{Config, GeneralSettings, SettingsRegistry, WindowSettings};
pub use theme_dir::{ThemeDirectory, ThemeLoadReport};
pub use watcher::{ThemeDirChange, ThemeDirWatcher, WatchError};
