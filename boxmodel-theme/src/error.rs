//! # Theme Error Types
//!
//! This module provides the error types for the theming system. Building the
//! preset registry never fails; everything here comes from lookups, theme files
//! and configuration.

use std::path::PathBuf;
use thiserror::Error;

use crate::properties::ThemeProperty;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// Theme file was not found.
    #[error("Theme file not found: {path:?}")]
    ThemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme or configuration file.
    #[error("Failed to parse theme file {path:?}: {details}")]
    ThemeParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// A property key that no theme record has.
    #[error("Unknown theme property '{key}'")]
    UnknownProperty {
        /// The offending key.
        key: String,
    },

    /// A value of the wrong kind or range for a property.
    #[error("Invalid value for property {property}: {details}")]
    InvalidPropertyValue {
        /// The property being set.
        property: ThemeProperty,
        /// What was wrong with the value.
        details: String,
    },

    /// A string that is not a `#RRGGBB` or `#AARRGGBB` color.
    #[error("Invalid color '{value}': {details}")]
    InvalidColor {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        details: String,
    },

    /// Theme names must not be empty, contain path separators or reuse a
    /// preset name.
    #[error("Invalid theme name '{name}'")]
    InvalidThemeName {
        /// The rejected name.
        name: String,
    },

    /// A theme file with this name exists already.
    #[error("Theme '{name}' already exists at {path:?}")]
    ThemeAlreadyExists {
        /// The theme name.
        name: String,
        /// The existing file.
        path: PathBuf,
    },

    /// Configuration file with an extension we cannot read.
    #[error("Unsupported configuration file format: {path:?}. Use .toml")]
    UnsupportedConfigFormat {
        /// The rejected path.
        path: PathBuf,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThemeFileNotFound { path: path.into() }
    }

    /// Create a theme parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ThemeParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an unknown property error.
    pub fn unknown_property(key: impl Into<String>) -> Self {
        Self::UnknownProperty { key: key.into() }
    }

    /// Create an invalid property value error.
    pub fn invalid_value(property: ThemeProperty, details: impl Into<String>) -> Self {
        Self::InvalidPropertyValue {
            property,
            details: details.into(),
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            details: details.into(),
        }
    }

    /// Whether this error is a failed name lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ThemeNotFound { .. })
    }
}

impl From<toml::ser::Error> for ThemeError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
