#![warn(missing_docs)]

//! # BoxModel Theming System
//!
//! Theme presets and theme handling for the BoxModel launcher frontend.
//! A theme is a flat [ThemeRecord](theme::ThemeRecord) of sizes, one font
//! and colors. A fixed catalog of 36 presets ships with the crate.
//!
//! ## Overview
//!
//! - **[ThemeRecord](theme::ThemeRecord)**: The value type describing one theme
//! - **[ThemeRegistry](registry::ThemeRegistry)**: The read-only catalog of presets
//! - **[ThemeProperty](properties::ThemeProperty)**: Type-safe property keys
//! - **[ThemeConfig](config::ThemeConfig)**: Theme selection for light and dark mode
//! - **[ThemeResolver](theme_resolver::ThemeResolver)**: Presets plus user themes
//! - **[ThemeManager](manager::ThemeManager)**: The active theme and runtime switching
//!
//! ## Quick Start
//!
//! ```rust
//! use boxmodel_theme::registry::ThemeRegistry;
//!
//! let registry = ThemeRegistry::builtin();
//! let theme = registry.get("SolarizedDarkCyan").unwrap();
//! assert_eq!(theme.highlight_color, "#2aa198");
//! ```
//!
//! ## Accent Families
//!
//! Most presets are a base preset with a different accent color. Deriving an
//! accent variant overwrites exactly four fields: highlight, selection, border
//! and the settings button hover color.
//!
//! ```rust
//! use boxmodel_theme::color::Color;
//! use boxmodel_theme::properties::ThemeProperty;
//! use boxmodel_theme::registry::ThemeRegistry;
//!
//! let registry = ThemeRegistry::builtin();
//! let dark = registry.get("Dark").unwrap();
//! let violet = registry.get("DarkViolet").unwrap();
//!
//! assert_eq!(dark.with_accent(Color::from_rgb(0x9020FF)), *violet);
//! assert_eq!(violet.diff(dark), ThemeProperty::ACCENT.to_vec());
//! ```
//!
//! ## Theme Switching
//!
//! ```rust
//! use boxmodel_theme::config::ColorScheme;
//! use boxmodel_theme::manager::ThemeManager;
//!
//! let mut manager = ThemeManager::new();
//! manager.set_dark_theme("ArcDark").unwrap();
//! manager.apply_color_scheme(ColorScheme::Dark).unwrap();
//! assert_eq!(manager.current_name(), "ArcDark");
//! ```
//!
//! ## Theme Files
//!
//! Themes are stored as TOML `.theme` files. See [file] for the format.

/// Contains the [color::Color] type.
pub mod color;
/// Contains the [config::ThemeConfig] struct for theme configuration.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains reading and writing of `.theme` files.
pub mod file;
/// Contains theme management and runtime switching.
pub mod manager;
/// Contains type-safe theme properties and values.
pub mod properties;
/// Contains the [registry::ThemeRegistry] of built-in presets.
pub mod registry;
/// Contains serde helpers for [color::Color] fields.
pub mod serde_color;
/// Contains the [theme::ThemeRecord] struct and the built-in presets.
pub mod theme;
/// Contains the [theme_resolver::ThemeResolver] for resolving themes by name, file or configuration.
pub mod theme_resolver;

pub use registry::ThemeRegistry;
pub use theme::presets::build_theme_registry;
pub use theme::ThemeRecord;
