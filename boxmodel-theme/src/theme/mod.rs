//! # Theme Records
//!
//! A [ThemeRecord] is the complete set of sizing and color attributes the box
//! model frontend reads to draw itself. Records are plain values: cloning one
//! produces a fully independent copy, which is how every derived preset is
//! built.
//!
//! ## Usage Examples
//!
//! ```rust
//! use boxmodel_theme::color::Color;
//! use boxmodel_theme::properties::{ThemeProperty, ThemeValue};
//! use boxmodel_theme::theme::presets;
//!
//! let bright = presets::bright();
//!
//! // Derive an accent variant; the base is left untouched.
//! let orange = bright.with_accent(Color::from_rgb(0xff9f3f));
//! assert_eq!(orange.diff(&bright), ThemeProperty::ACCENT.to_vec());
//!
//! // Access by key, the way theme files and property editors do.
//! let key: ThemeProperty = "max_items".parse().unwrap();
//! assert_eq!(bright.property(key), ThemeValue::Size(5));
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ThemeError, ThemeResult};
use crate::properties::{ThemeProperty, ThemeValue};

/// Accent families and their colors.
pub mod palette;
/// The built-in presets and the registry builder.
pub mod presets;

/// One visual preset of the box model frontend.
///
/// Every field is always present; there is no partially populated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeRecord {
    /// Font size of the input line.
    pub input_fontsize: u32,
    /// Font size of result item titles.
    pub item_title_fontsize: u32,
    /// Font size of result item descriptions.
    pub item_description_fontsize: u32,
    /// Edge length of result item icons.
    pub icon_size: u32,
    /// Number of result items shown before scrolling.
    pub max_items: u32,
    /// Space between elements.
    pub spacing: u32,
    /// Inner padding of the frame.
    pub padding: u32,
    /// Corner radius of the frame.
    pub radius: u32,
    /// Border width; 0 disables the border.
    pub border_size: u32,
    /// Edge length of the settings button.
    pub settingsbutton_size: u32,
    /// Animation duration in milliseconds.
    pub animation_duration: u32,
    /// Window width.
    pub window_width: u32,
    /// Shadow size; 0 disables the shadow.
    pub shadow_size: u32,
    /// Font family.
    pub font_name: String,
    /// Drop shadow color.
    #[serde(with = "crate::serde_color")]
    pub shadow_color: Color,
    /// Main text color.
    #[serde(with = "crate::serde_color")]
    pub foreground_color: Color,
    /// Frame background.
    #[serde(with = "crate::serde_color")]
    pub background_color: Color,
    /// Accent for selected items.
    #[serde(with = "crate::serde_color")]
    pub highlight_color: Color,
    /// Frame border.
    #[serde(with = "crate::serde_color")]
    pub border_color: Color,
    /// Input line text.
    #[serde(with = "crate::serde_color")]
    pub input_color: Color,
    /// Input cursor.
    #[serde(with = "crate::serde_color")]
    pub cursor_color: Color,
    /// Selected item frame.
    #[serde(with = "crate::serde_color")]
    pub selection_color: Color,
    /// Settings button.
    #[serde(with = "crate::serde_color")]
    pub settingsbutton_color: Color,
    /// Settings button under the mouse.
    #[serde(with = "crate::serde_color")]
    pub settingsbutton_hover_color: Color,
}

impl ThemeRecord {
    /// Return a copy with the accent color applied.
    ///
    /// Replaces exactly `highlight_color`, `selection_color`, `border_color`
    /// and `settingsbutton_hover_color`.
    pub fn with_accent(&self, accent: Color) -> Self {
        Self {
            highlight_color: accent,
            selection_color: accent,
            border_color: accent,
            settingsbutton_hover_color: accent,
            ..self.clone()
        }
    }

    /// Get the value of a property.
    pub fn property(&self, property: ThemeProperty) -> ThemeValue {
        use ThemeProperty as P;
        match property {
            P::InputFontSize => ThemeValue::Size(self.input_fontsize),
            P::ItemTitleFontSize => ThemeValue::Size(self.item_title_fontsize),
            P::ItemDescriptionFontSize => ThemeValue::Size(self.item_description_fontsize),
            P::IconSize => ThemeValue::Size(self.icon_size),
            P::MaxItems => ThemeValue::Size(self.max_items),
            P::Spacing => ThemeValue::Size(self.spacing),
            P::Padding => ThemeValue::Size(self.padding),
            P::Radius => ThemeValue::Size(self.radius),
            P::BorderSize => ThemeValue::Size(self.border_size),
            P::SettingsButtonSize => ThemeValue::Size(self.settingsbutton_size),
            P::AnimationDuration => ThemeValue::Size(self.animation_duration),
            P::WindowWidth => ThemeValue::Size(self.window_width),
            P::ShadowSize => ThemeValue::Size(self.shadow_size),
            P::FontName => ThemeValue::Font(self.font_name.clone()),
            P::ShadowColor => ThemeValue::Color(self.shadow_color),
            P::ForegroundColor => ThemeValue::Color(self.foreground_color),
            P::BackgroundColor => ThemeValue::Color(self.background_color),
            P::HighlightColor => ThemeValue::Color(self.highlight_color),
            P::BorderColor => ThemeValue::Color(self.border_color),
            P::InputColor => ThemeValue::Color(self.input_color),
            P::CursorColor => ThemeValue::Color(self.cursor_color),
            P::SelectionColor => ThemeValue::Color(self.selection_color),
            P::SettingsButtonColor => ThemeValue::Color(self.settingsbutton_color),
            P::SettingsButtonHoverColor => ThemeValue::Color(self.settingsbutton_hover_color),
        }
    }

    /// Set the value of a property.
    ///
    /// Fails with [ThemeError::InvalidPropertyValue] if the value is of the
    /// wrong kind; the record is left unchanged in that case.
    pub fn set_property(&mut self, property: ThemeProperty, value: ThemeValue) -> ThemeResult<()> {
        if value.kind() != property.kind() {
            return Err(ThemeError::invalid_value(
                property,
                format!("expected a {:?} value, got {:?}", property.kind(), value),
            ));
        }

        use ThemeProperty as P;
        match (property, value) {
            (P::FontName, ThemeValue::Font(font)) => {
                if font.trim().is_empty() {
                    return Err(ThemeError::invalid_value(property, "font name is empty"));
                }
                self.font_name = font;
            },
            (_, ThemeValue::Size(size)) => *self.size_mut(property) = size,
            (_, ThemeValue::Color(color)) => *self.color_mut(property) = color,
            (_, ThemeValue::Font(_)) => unreachable!("kind checked above"),
        }
        Ok(())
    }

    /// List the properties whose values differ from `other`, in
    /// [ThemeProperty::ALL] order.
    pub fn diff(&self, other: &ThemeRecord) -> Vec<ThemeProperty> {
        ThemeProperty::ALL
            .iter()
            .copied()
            .filter(|p| self.property(*p) != other.property(*p))
            .collect()
    }

    fn size_mut(&mut self, property: ThemeProperty) -> &mut u32 {
        use ThemeProperty as P;
        match property {
            P::InputFontSize => &mut self.input_fontsize,
            P::ItemTitleFontSize => &mut self.item_title_fontsize,
            P::ItemDescriptionFontSize => &mut self.item_description_fontsize,
            P::IconSize => &mut self.icon_size,
            P::MaxItems => &mut self.max_items,
            P::Spacing => &mut self.spacing,
            P::Padding => &mut self.padding,
            P::Radius => &mut self.radius,
            P::BorderSize => &mut self.border_size,
            P::SettingsButtonSize => &mut self.settingsbutton_size,
            P::AnimationDuration => &mut self.animation_duration,
            P::WindowWidth => &mut self.window_width,
            P::ShadowSize => &mut self.shadow_size,
            other => unreachable!("{} is not a size property", other),
        }
    }

    fn color_mut(&mut self, property: ThemeProperty) -> &mut Color {
        use ThemeProperty as P;
        match property {
            P::ShadowColor => &mut self.shadow_color,
            P::ForegroundColor => &mut self.foreground_color,
            P::BackgroundColor => &mut self.background_color,
            P::HighlightColor => &mut self.highlight_color,
            P::BorderColor => &mut self.border_color,
            P::InputColor => &mut self.input_color,
            P::CursorColor => &mut self.cursor_color,
            P::SelectionColor => &mut self.selection_color,
            P::SettingsButtonColor => &mut self.settingsbutton_color,
            P::SettingsButtonHoverColor => &mut self.settingsbutton_hover_color,
            other => unreachable!("{} is not a color property", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyKind;

    #[test]
    fn test_with_accent_touches_four_fields() {
        let base = presets::dark();
        let accent = Color::from_rgb(0x123456);
        let derived = base.with_accent(accent);

        assert_eq!(derived.diff(&base), ThemeProperty::ACCENT.to_vec());
        for property in ThemeProperty::ACCENT {
            assert_eq!(derived.property(property), ThemeValue::Color(accent));
        }
    }

    #[test]
    fn test_copies_are_independent() {
        let base = presets::bright();
        let mut copy = base.clone();
        copy.border_color = Color::from_rgb(0x010203);
        copy.font_name.push_str(" Mono");

        assert_eq!(base.border_color, Color::from_rgb(0xa0a0a0));
        assert_eq!(base.font_name, "Roboto");
    }

    #[test]
    fn test_property_get_set() {
        let mut record = presets::bright();
        for property in ThemeProperty::ALL {
            let value = record.property(property);
            assert_eq!(value.kind(), property.kind());
            record.set_property(property, value.clone()).unwrap();
            assert_eq!(record.property(property), value);
        }

        record
            .set_property(ThemeProperty::WindowWidth, ThemeValue::Size(800))
            .unwrap();
        assert_eq!(record.window_width, 800);

        record
            .set_property(
                ThemeProperty::CursorColor,
                ThemeValue::Color(Color::from_rgb(0x00ff00)),
            )
            .unwrap();
        assert_eq!(record.cursor_color, "#00FF00");
    }

    #[test]
    fn test_set_property_rejects_wrong_kind() {
        let mut record = presets::bright();
        let before = record.clone();

        let err = record
            .set_property(ThemeProperty::BorderColor, ThemeValue::Size(3))
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidPropertyValue { .. }));
        assert!(record
            .set_property(ThemeProperty::FontName, ThemeValue::Font(String::new()))
            .is_err());
        assert_eq!(record, before);
    }

    #[test]
    fn test_json_round_trip() {
        let record = presets::spotlight();
        let json = serde_json::to_string(&record).unwrap();
        let back: ThemeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert!(json.contains("\"shadow_color\":\"#70000000\""));
    }

    #[test]
    fn test_toml_round_trip() {
        let record = presets::nerdy();
        let text = toml::to_string(&record).unwrap();
        let back: ThemeRecord = toml::from_str(&text).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialize_requires_every_field() {
        let mut value = serde_json::to_value(presets::bright()).unwrap();
        value.as_object_mut().unwrap().remove("cursor_color");
        assert!(serde_json::from_value::<ThemeRecord>(value).is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_color() {
        let mut value = serde_json::to_value(presets::bright()).unwrap();
        value["highlight_color"] = serde_json::Value::from("#12345");
        assert!(serde_json::from_value::<ThemeRecord>(value).is_err());
    }

    #[test]
    fn test_diff_lists_nothing_for_equal_records() {
        assert!(presets::arc_dark().diff(&presets::arc_dark()).is_empty());
        let sizes = presets::bright()
            .diff(&presets::nerdy())
            .into_iter()
            .filter(|p| p.kind() == PropertyKind::Size)
            .count();
        assert!(sizes > 0);
    }
}
