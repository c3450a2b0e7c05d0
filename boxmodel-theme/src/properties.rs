use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::ThemeError;

/// Type-safe keys for every attribute of a [ThemeRecord](crate::theme::ThemeRecord).
///
/// The string form of each key is exactly the field name used in theme files,
/// so `ThemeProperty::from_str(p.as_str()) == Ok(p)` for every property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeProperty {
    // Sizes
    InputFontSize,
    ItemTitleFontSize,
    ItemDescriptionFontSize,
    IconSize,
    MaxItems,
    Spacing,
    Padding,
    Radius,
    BorderSize,
    SettingsButtonSize,
    AnimationDuration,
    WindowWidth,
    ShadowSize,

    // Font
    FontName,

    // Colors
    ShadowColor,
    ForegroundColor,
    BackgroundColor,
    HighlightColor,
    BorderColor,
    InputColor,
    CursorColor,
    SelectionColor,
    SettingsButtonColor,
    SettingsButtonHoverColor,
}

/// The kind of value a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// A non-negative integer (pixels, item counts, milliseconds).
    Size,
    /// A font family name.
    Font,
    /// A [Color].
    Color,
}

impl ThemeProperty {
    /// Every property, in the order the frontend lists its settable properties.
    pub const ALL: [ThemeProperty; 24] = [
        ThemeProperty::InputFontSize,
        ThemeProperty::ItemTitleFontSize,
        ThemeProperty::ItemDescriptionFontSize,
        ThemeProperty::IconSize,
        ThemeProperty::MaxItems,
        ThemeProperty::Spacing,
        ThemeProperty::Padding,
        ThemeProperty::Radius,
        ThemeProperty::BorderSize,
        ThemeProperty::SettingsButtonSize,
        ThemeProperty::AnimationDuration,
        ThemeProperty::WindowWidth,
        ThemeProperty::ShadowSize,
        ThemeProperty::FontName,
        ThemeProperty::ShadowColor,
        ThemeProperty::ForegroundColor,
        ThemeProperty::BackgroundColor,
        ThemeProperty::HighlightColor,
        ThemeProperty::BorderColor,
        ThemeProperty::InputColor,
        ThemeProperty::CursorColor,
        ThemeProperty::SelectionColor,
        ThemeProperty::SettingsButtonColor,
        ThemeProperty::SettingsButtonHoverColor,
    ];

    /// The four properties an accent color replaces, in [ThemeProperty::ALL] order.
    pub const ACCENT: [ThemeProperty; 4] = [
        ThemeProperty::HighlightColor,
        ThemeProperty::BorderColor,
        ThemeProperty::SelectionColor,
        ThemeProperty::SettingsButtonHoverColor,
    ];

    /// Get the key of this property as written in theme files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeProperty::InputFontSize => "input_fontsize",
            ThemeProperty::ItemTitleFontSize => "item_title_fontsize",
            ThemeProperty::ItemDescriptionFontSize => "item_description_fontsize",
            ThemeProperty::IconSize => "icon_size",
            ThemeProperty::MaxItems => "max_items",
            ThemeProperty::Spacing => "spacing",
            ThemeProperty::Padding => "padding",
            ThemeProperty::Radius => "radius",
            ThemeProperty::BorderSize => "border_size",
            ThemeProperty::SettingsButtonSize => "settingsbutton_size",
            ThemeProperty::AnimationDuration => "animation_duration",
            ThemeProperty::WindowWidth => "window_width",
            ThemeProperty::ShadowSize => "shadow_size",
            ThemeProperty::FontName => "font_name",
            ThemeProperty::ShadowColor => "shadow_color",
            ThemeProperty::ForegroundColor => "foreground_color",
            ThemeProperty::BackgroundColor => "background_color",
            ThemeProperty::HighlightColor => "highlight_color",
            ThemeProperty::BorderColor => "border_color",
            ThemeProperty::InputColor => "input_color",
            ThemeProperty::CursorColor => "cursor_color",
            ThemeProperty::SelectionColor => "selection_color",
            ThemeProperty::SettingsButtonColor => "settingsbutton_color",
            ThemeProperty::SettingsButtonHoverColor => "settingsbutton_hover_color",
        }
    }

    /// Get the kind of value this property holds.
    pub fn kind(&self) -> PropertyKind {
        match self {
            ThemeProperty::FontName => PropertyKind::Font,
            ThemeProperty::ShadowColor
            | ThemeProperty::ForegroundColor
            | ThemeProperty::BackgroundColor
            | ThemeProperty::HighlightColor
            | ThemeProperty::BorderColor
            | ThemeProperty::InputColor
            | ThemeProperty::CursorColor
            | ThemeProperty::SelectionColor
            | ThemeProperty::SettingsButtonColor
            | ThemeProperty::SettingsButtonHoverColor => PropertyKind::Color,
            _ => PropertyKind::Size,
        }
    }
}

impl fmt::Display for ThemeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeProperty {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeProperty::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ThemeError::unknown_property(s))
    }
}

/// A value that can be stored in a theme property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValue {
    /// Size, count or duration value.
    Size(u32),
    /// Font family name.
    Font(String),
    /// Color value.
    Color(Color),
}

impl ThemeValue {
    /// Get the kind of this value.
    pub fn kind(&self) -> PropertyKind {
        match self {
            ThemeValue::Size(_) => PropertyKind::Size,
            ThemeValue::Font(_) => PropertyKind::Font,
            ThemeValue::Color(_) => PropertyKind::Color,
        }
    }

    /// Get the value as a size if it is one.
    pub fn as_size(&self) -> Option<u32> {
        match self {
            ThemeValue::Size(size) => Some(*size),
            _ => None,
        }
    }

    /// Get the value as a color if it is one.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            ThemeValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Get the value as a font name if it is one.
    pub fn as_font(&self) -> Option<&str> {
        match self {
            ThemeValue::Font(font) => Some(font),
            _ => None,
        }
    }

    /// Parse the textual form of a value for `property`.
    ///
    /// Sizes are decimal integers, colors are hex strings and fonts are taken
    /// verbatim.
    pub fn parse(property: ThemeProperty, text: &str) -> Result<Self, ThemeError> {
        let text = text.trim();
        match property.kind() {
            PropertyKind::Size => text
                .parse::<u32>()
                .map(ThemeValue::Size)
                .map_err(|e| ThemeError::invalid_value(property, e.to_string())),
            PropertyKind::Color => Color::from_hex(text)
                .map(ThemeValue::Color)
                .map_err(|e| ThemeError::invalid_value(property, e.to_string())),
            PropertyKind::Font if text.is_empty() => {
                Err(ThemeError::invalid_value(property, "font name is empty"))
            },
            PropertyKind::Font => Ok(ThemeValue::Font(text.to_string())),
        }
    }

    /// Convert a TOML value into a value for `property`.
    pub fn from_toml(property: ThemeProperty, value: &toml::Value) -> Result<Self, ThemeError> {
        match (property.kind(), value) {
            (PropertyKind::Size, toml::Value::Integer(n)) => u32::try_from(*n)
                .map(ThemeValue::Size)
                .map_err(|_| ThemeError::invalid_value(property, format!("{} is out of range", n))),
            (_, toml::Value::String(text)) => Self::parse(property, text),
            (kind, other) => Err(ThemeError::invalid_value(
                property,
                format!("expected a {:?} value, found {}", kind, other.type_str()),
            )),
        }
    }

    /// Convert this value into its TOML representation.
    pub fn to_toml(&self) -> toml::Value {
        match self {
            ThemeValue::Size(size) => toml::Value::Integer(i64::from(*size)),
            ThemeValue::Font(font) => toml::Value::String(font.clone()),
            ThemeValue::Color(color) => toml::Value::String(color.to_hex()),
        }
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeValue::Size(size) => write!(f, "{}", size),
            ThemeValue::Font(font) => f.write_str(font),
            ThemeValue::Color(color) => write!(f, "{}", color),
        }
    }
}
