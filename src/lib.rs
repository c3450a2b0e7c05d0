#![warn(missing_docs)]

//! Theme presets, theme files and settings for the BoxModel launcher frontend.

pub use boxmodel_theme as theme;
#[cfg(feature = "services")]
pub use boxmodel_services as services;

/// A "prelude" for users of the boxmodel crates.
///
/// Importing this module brings into scope the most common types
/// needed to look up, switch and store themes.
///
/// ```rust
/// use boxmodel::prelude::*;
///
/// let theme = ThemeRegistry::builtin().resolve("BreezeDark").unwrap();
/// assert_eq!(theme.window_width, 400);
/// ```
pub mod prelude {
    pub use crate::theme::color::Color;
    pub use crate::theme::config::{ColorScheme, ThemeConfig, ThemeSource};
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::manager::{create_shared_theme_manager, SharedThemeManager, ThemeManager};
    pub use crate::theme::properties::{ThemeProperty, ThemeValue};
    pub use crate::theme::theme_resolver::ThemeResolver;
    pub use crate::theme::{build_theme_registry, ThemeRecord, ThemeRegistry};

    // Services
    #[cfg(feature = "services")]
    pub use crate::services::{SettingsRegistry, ThemeDirChange, ThemeDirWatcher, ThemeDirectory};
}
