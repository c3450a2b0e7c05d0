//! The built-in presets.
//!
//! Derived presets are built from copies of their base, then dependent fields
//! are copied from the new values once. A dependent field is a plain value:
//! changing `foreground_color` later does not move `border_color` along.

use indexmap::IndexMap;

use crate::color::Color;
use crate::registry::ThemeRegistry;
use crate::theme::palette::{
    AccentFamily, BRIGHT_ACCENTS, DARK_ACCENTS, SOLARIZED_BRIGHT_ACCENTS, SOLARIZED_DARK_ACCENTS,
    SOLARIZED_YELLOW,
};
use crate::theme::ThemeRecord;

/// The base preset every other derived preset starts from.
pub fn bright() -> ThemeRecord {
    let foreground_color = Color::from_rgb(0xa0a0a0);
    let background_color = Color::from_rgb(0xFFFFFF);
    let highlight_color = Color::from_rgb(0x606060);

    ThemeRecord {
        input_fontsize: 36,
        item_title_fontsize: 26,
        item_description_fontsize: 12,
        icon_size: 48,
        max_items: 5,
        spacing: 6,
        padding: 6,
        radius: 16,
        border_size: 6,
        settingsbutton_size: 16,
        animation_duration: 200,
        window_width: 640,
        font_name: "Roboto".to_string(),
        shadow_size: 30,
        shadow_color: Color::from_argb(0x40000000),
        foreground_color,
        background_color,
        highlight_color,
        border_color: foreground_color,
        input_color: foreground_color,
        cursor_color: foreground_color,
        selection_color: highlight_color,
        settingsbutton_hover_color: highlight_color,
        settingsbutton_color: background_color,
    }
}

/// `Bright` with a dark grey palette.
pub fn dark() -> ThemeRecord {
    let mut theme = bright();
    theme.foreground_color = Color::from_rgb(0x808080);
    theme.background_color = Color::from_rgb(0x404040);
    theme.highlight_color = Color::from_rgb(0xE0E0E0);
    theme.border_color = theme.foreground_color;
    theme.input_color = theme.foreground_color;
    theme.cursor_color = theme.foreground_color;
    theme.settingsbutton_color = theme.background_color;
    theme.settingsbutton_hover_color = theme.highlight_color;
    theme.selection_color = theme.highlight_color;
    theme
}

/// Solarized light, built on top of `Dark`.
pub fn solarized_bright_yellow() -> ThemeRecord {
    let mut theme = dark();
    theme.background_color = Color::from_rgb(0xfdf6e3);
    theme.foreground_color = Color::from_rgb(0x839496);
    theme.highlight_color = SOLARIZED_YELLOW;
    recompute_solarized_dependents(&mut theme);
    theme
}

/// Solarized dark: `SolarizedBrightYellow` with a dark background.
pub fn solarized_dark_yellow() -> ThemeRecord {
    let mut theme = solarized_bright_yellow();
    theme.background_color = Color::from_rgb(0x002b36);
    theme.highlight_color = SOLARIZED_YELLOW;
    recompute_solarized_dependents(&mut theme);
    theme
}

// Unlike Bright and Dark, the Solarized themes draw the border in the
// highlight color.
fn recompute_solarized_dependents(theme: &mut ThemeRecord) {
    theme.input_color = theme.foreground_color;
    theme.cursor_color = theme.foreground_color;
    theme.settingsbutton_color = theme.background_color;
    theme.settingsbutton_hover_color = theme.highlight_color;
    theme.selection_color = theme.highlight_color;
    theme.border_color = theme.highlight_color;
}

/// Light blue with a brown highlight.
pub fn tiffany() -> ThemeRecord {
    let mut theme = bright();
    theme.background_color = Color::from_rgb(0xe2f2fa);
    theme.foreground_color = Color::from_rgb(0x73BDE4);
    theme.highlight_color = Color::from_rgb(0xa47a51);
    theme.border_color = Color::from_rgb(0x1d6a87);
    theme.input_color = theme.foreground_color;
    theme.cursor_color = theme.foreground_color;
    theme.settingsbutton_color = theme.background_color;
    theme.settingsbutton_hover_color = theme.highlight_color;
    theme.selection_color = theme.highlight_color;
    theme
}

/// Compact, monospaced, green on black.
pub fn nerdy() -> ThemeRecord {
    let mut theme = bright();
    theme.icon_size = 36;
    theme.input_fontsize = 26;
    theme.item_title_fontsize = 18;
    theme.item_description_fontsize = 11;
    theme.max_items = 8;
    theme.spacing = 6;
    theme.radius = 6;
    theme.border_size = 1;
    theme.settingsbutton_size = 14;
    theme.window_width = 600;
    theme.font_name = "monospace".to_string();
    theme.background_color = Color::from_rgb(0x202020);
    theme.foreground_color = Color::from_rgb(0x808080);
    theme.highlight_color = Color::from_rgb(0x00FF00);
    theme.border_color = Color::from_rgb(0x404040);
    theme.cursor_color = theme.highlight_color;
    theme.input_color = theme.highlight_color;
    theme.selection_color = theme.foreground_color;
    theme.settingsbutton_color = Color::from_rgb(0x303030);
    theme.settingsbutton_hover_color = theme.highlight_color;
    theme
}

/// Sizing and shadow shared by `Spotlight` and the Arc themes. Every
/// color except `shadow_color` is a placeholder the callers overwrite.
fn flat_layout() -> ThemeRecord {
    ThemeRecord {
        icon_size: 38,
        input_fontsize: 28,
        item_title_fontsize: 20,
        item_description_fontsize: 12,
        max_items: 5,
        spacing: 6,
        shadow_size: 30,
        radius: 8,
        padding: 8,
        border_size: 0,
        settingsbutton_size: 15,
        window_width: 600,
        animation_duration: 200,
        font_name: "Roboto".to_string(),
        shadow_color: Color::from_argb(0x70000000),
        foreground_color: Color::BLACK,
        background_color: Color::BLACK,
        highlight_color: Color::BLACK,
        border_color: Color::BLACK,
        input_color: Color::BLACK,
        cursor_color: Color::BLACK,
        selection_color: Color::BLACK,
        settingsbutton_color: Color::BLACK,
        settingsbutton_hover_color: Color::BLACK,
    }
}

/// macOS Spotlight look-alike.
pub fn spotlight() -> ThemeRecord {
    ThemeRecord {
        background_color: Color::from_rgb(0xffffff),
        foreground_color: Color::from_rgb(0x808080),
        highlight_color: Color::from_rgb(0x303030),
        border_color: Color::from_rgb(0xffffff),
        input_color: Color::from_rgb(0x303030),
        cursor_color: Color::from_rgb(0x303030),
        selection_color: Color::from_rgb(0xc0c0c0),
        settingsbutton_color: Color::from_rgb(0xffffff),
        settingsbutton_hover_color: Color::from_rgb(0xa0a0a0),
        ..flat_layout()
    }
}

/// Matches the Arc Dark GTK theme.
pub fn arc_dark() -> ThemeRecord {
    ThemeRecord {
        border_size: 1,
        background_color: Color::from_rgb(0x2F343F),
        foreground_color: Color::from_rgb(0xc2c2c2),
        highlight_color: Color::from_rgb(0xffffff),
        border_color: Color::from_rgb(0x262A32),
        input_color: Color::from_rgb(0xffffff),
        cursor_color: Color::from_rgb(0xffffff),
        selection_color: Color::from_rgb(0xc0c0c0),
        settingsbutton_color: Color::from_rgb(0x666A73),
        settingsbutton_hover_color: Color::from_rgb(0xffffff),
        ..flat_layout()
    }
}

/// Arc Dark on a neutral grey background.
pub fn arc_grey_dark() -> ThemeRecord {
    ThemeRecord {
        border_size: 1,
        background_color: Color::from_rgb(0x404040),
        foreground_color: Color::from_rgb(0xc2c2c2),
        highlight_color: Color::from_rgb(0xffffff),
        border_color: Color::from_rgb(0x2d2f3b),
        input_color: Color::from_rgb(0xffffff),
        cursor_color: Color::from_rgb(0xffffff),
        selection_color: Color::from_rgb(0xc0c0c0),
        settingsbutton_color: Color::from_rgb(0x2d2f3b),
        settingsbutton_hover_color: Color::from_rgb(0x000000),
        ..flat_layout()
    }
}

/// Matches KDE Breeze Dark. Square, shadowless and narrow.
pub fn breeze_dark() -> ThemeRecord {
    ThemeRecord {
        icon_size: 38,
        input_fontsize: 28,
        item_title_fontsize: 20,
        item_description_fontsize: 12,
        max_items: 8,
        spacing: 6,
        shadow_size: 0,
        radius: 0,
        padding: 4,
        border_size: 0,
        settingsbutton_size: 15,
        window_width: 400,
        animation_duration: 200,
        font_name: "Roboto".to_string(),
        background_color: Color::from_rgb(0x32373b),
        foreground_color: Color::from_rgb(0xffffff),
        highlight_color: Color::from_rgb(0x61abff),
        border_color: Color::from_rgb(0x5595df),
        input_color: Color::from_rgb(0xffffff),
        cursor_color: Color::from_rgb(0xffffff),
        selection_color: Color::from_rgb(0xc0c0c0),
        settingsbutton_color: Color::from_rgb(0x222629),
        settingsbutton_hover_color: Color::from_rgb(0x5595df),
        shadow_color: Color::from_argb(0x70000000),
    }
}

fn insert_family(themes: &mut IndexMap<String, ThemeRecord>, base: &ThemeRecord, family: &AccentFamily) {
    for (name, color) in family.variants() {
        themes.insert(name, base.with_accent(color));
    }
}

/// Build the full catalog of built-in presets.
///
/// The result holds 36 themes in registration order. Prefer
/// [ThemeRegistry::builtin] unless you need an owned copy.
pub fn build_theme_registry() -> ThemeRegistry {
    let mut themes = IndexMap::with_capacity(36);

    let bright = bright();
    themes.insert("Bright".to_string(), bright.clone());
    insert_family(&mut themes, &bright, &BRIGHT_ACCENTS);

    let dark = dark();
    themes.insert("Dark".to_string(), dark.clone());
    insert_family(&mut themes, &dark, &DARK_ACCENTS);

    let solarized_bright = solarized_bright_yellow();
    themes.insert("SolarizedBrightYellow".to_string(), solarized_bright.clone());
    insert_family(&mut themes, &solarized_bright, &SOLARIZED_BRIGHT_ACCENTS);

    let solarized_dark = solarized_dark_yellow();
    themes.insert("SolarizedDarkYellow".to_string(), solarized_dark.clone());
    insert_family(&mut themes, &solarized_dark, &SOLARIZED_DARK_ACCENTS);

    themes.insert("Tiffany".to_string(), tiffany());
    themes.insert("Nerdy".to_string(), nerdy());
    themes.insert("Spotlight".to_string(), spotlight());
    themes.insert("ArcDark".to_string(), arc_dark());
    themes.insert("ArcGreyDark".to_string(), arc_grey_dark());
    themes.insert("BreezeDark".to_string(), breeze_dark());

    log::debug!("Built {} theme presets", themes.len());
    ThemeRegistry::from_map(themes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{ThemeProperty, ThemeValue};

    fn assert_family(registry: &ThemeRegistry, base: &ThemeRecord, family: &AccentFamily) {
        for accent in family.accents {
            let name = family.theme_name(accent);
            let derived = registry.get(&name).unwrap();
            assert_eq!(derived.diff(base), ThemeProperty::ACCENT.to_vec(), "{}", name);
            assert_eq!(derived.highlight_color, accent.color, "{}", name);
            assert_eq!(derived.selection_color, accent.color, "{}", name);
            assert_eq!(derived.border_color, accent.color, "{}", name);
            assert_eq!(derived.settingsbutton_hover_color, accent.color, "{}", name);
        }
    }

    #[test]
    fn test_registry_has_36_unique_names() {
        let registry = build_theme_registry();
        assert_eq!(registry.len(), 36);
        let mut names: Vec<&str> = registry.names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 36);
    }

    #[test]
    fn test_registration_order() {
        let registry = build_theme_registry();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names[0], "Bright");
        assert_eq!(names[1], "BrightOrange");
        assert_eq!(names[7], "Dark");
        assert_eq!(names[14], "SolarizedBrightYellow");
        assert_eq!(names[22], "SolarizedDarkYellow");
        assert_eq!(&names[30..], &["Tiffany", "Nerdy", "Spotlight", "ArcDark", "ArcGreyDark", "BreezeDark"]);
    }

    #[test]
    fn test_bright_aliases() {
        let bright = bright();
        assert_eq!(bright.border_color, bright.foreground_color);
        assert_eq!(bright.input_color, bright.foreground_color);
        assert_eq!(bright.cursor_color, bright.foreground_color);
        assert_eq!(bright.selection_color, bright.highlight_color);
        assert_eq!(bright.settingsbutton_hover_color, bright.highlight_color);
        assert_eq!(bright.settingsbutton_color, bright.background_color);
        assert_eq!(bright.shadow_color, "#40000000");
    }

    // Every property of each base preset, in `ThemeProperty::ALL` order.
    const GOLDEN: [(&str, [&str; 24]); 10] = [
        ("Bright", [
            "36", "26", "12", "48", "5", "6", "6", "16", "6", "16", "200", "640", "30", "Roboto",
            "#40000000", "#a0a0a0", "#ffffff", "#606060", "#a0a0a0",
            "#a0a0a0", "#a0a0a0", "#606060", "#ffffff", "#606060",
        ]),
        ("Dark", [
            "36", "26", "12", "48", "5", "6", "6", "16", "6", "16", "200", "640", "30", "Roboto",
            "#40000000", "#808080", "#404040", "#e0e0e0", "#808080",
            "#808080", "#808080", "#e0e0e0", "#404040", "#e0e0e0",
        ]),
        ("SolarizedBrightYellow", [
            "36", "26", "12", "48", "5", "6", "6", "16", "6", "16", "200", "640", "30", "Roboto",
            "#40000000", "#839496", "#fdf6e3", "#b58900", "#b58900",
            "#839496", "#839496", "#b58900", "#fdf6e3", "#b58900",
        ]),
        ("SolarizedDarkYellow", [
            "36", "26", "12", "48", "5", "6", "6", "16", "6", "16", "200", "640", "30", "Roboto",
            "#40000000", "#839496", "#002b36", "#b58900", "#b58900",
            "#839496", "#839496", "#b58900", "#002b36", "#b58900",
        ]),
        ("Tiffany", [
            "36", "26", "12", "48", "5", "6", "6", "16", "6", "16", "200", "640", "30", "Roboto",
            "#40000000", "#73bde4", "#e2f2fa", "#a47a51", "#1d6a87",
            "#73bde4", "#73bde4", "#a47a51", "#e2f2fa", "#a47a51",
        ]),
        ("Nerdy", [
            "26", "18", "11", "36", "8", "6", "6", "6", "1", "14", "200", "600", "30", "monospace",
            "#40000000", "#808080", "#202020", "#00ff00", "#404040",
            "#00ff00", "#00ff00", "#808080", "#303030", "#00ff00",
        ]),
        ("Spotlight", [
            "28", "20", "12", "38", "5", "6", "8", "8", "0", "15", "200", "600", "30", "Roboto",
            "#70000000", "#808080", "#ffffff", "#303030", "#ffffff",
            "#303030", "#303030", "#c0c0c0", "#ffffff", "#a0a0a0",
        ]),
        ("ArcDark", [
            "28", "20", "12", "38", "5", "6", "8", "8", "1", "15", "200", "600", "30", "Roboto",
            "#70000000", "#c2c2c2", "#2f343f", "#ffffff", "#262a32",
            "#ffffff", "#ffffff", "#c0c0c0", "#666a73", "#ffffff",
        ]),
        ("ArcGreyDark", [
            "28", "20", "12", "38", "5", "6", "8", "8", "1", "15", "200", "600", "30", "Roboto",
            "#70000000", "#c2c2c2", "#404040", "#ffffff", "#2d2f3b",
            "#ffffff", "#ffffff", "#c0c0c0", "#2d2f3b", "#000000",
        ]),
        ("BreezeDark", [
            "28", "20", "12", "38", "8", "6", "4", "0", "0", "15", "200", "400", "0", "Roboto",
            "#70000000", "#ffffff", "#32373b", "#61abff", "#5595df",
            "#ffffff", "#ffffff", "#c0c0c0", "#222629", "#5595df",
        ]),
    ];

    #[test]
    fn test_base_presets_match_golden_values() {
        let registry = build_theme_registry();
        for (name, values) in GOLDEN {
            let theme = registry.get(name).unwrap();
            for (property, text) in ThemeProperty::ALL.into_iter().zip(values) {
                let expected = ThemeValue::parse(property, text).unwrap();
                assert_eq!(theme.property(property), expected, "{} {}", name, property.as_str());
            }
        }
    }

    #[test]
    fn test_accent_families() {
        let registry = build_theme_registry();
        assert_family(&registry, &bright(), &BRIGHT_ACCENTS);
        assert_family(&registry, &dark(), &DARK_ACCENTS);
        assert_family(&registry, &solarized_bright_yellow(), &SOLARIZED_BRIGHT_ACCENTS);
        assert_family(&registry, &solarized_dark_yellow(), &SOLARIZED_DARK_ACCENTS);
    }

    #[test]
    fn test_dark_overrides_only_palette() {
        let dark = dark();
        let expected = vec![
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
        assert_eq!(dark.diff(&bright()), expected);
        assert_eq!(dark.border_color, "#808080");
        assert_eq!(dark.input_color, "#808080");
        assert_eq!(dark.settingsbutton_color, "#404040");
        assert_eq!(dark.selection_color, "#E0E0E0");
        assert_eq!(dark.settingsbutton_hover_color, "#E0E0E0");
    }

    #[test]
    fn test_solarized_dark_keeps_foreground() {
        let bright = solarized_bright_yellow();
        let dark = solarized_dark_yellow();
        assert_eq!(dark.foreground_color, bright.foreground_color);
        assert_ne!(dark.background_color, bright.background_color);
        assert_eq!(dark.border_color, SOLARIZED_YELLOW);
        assert_eq!(dark.settingsbutton_color, "#002b36");
        assert_eq!(bright.settingsbutton_color, "#fdf6e3");
        assert_eq!(bright.input_color, "#839496");
    }

    #[test]
    fn test_standalone_presets() {
        let tiffany = tiffany();
        assert_eq!(tiffany.border_color, "#1d6a87");
        assert_eq!(tiffany.input_color, "#73BDE4");
        assert_eq!(tiffany.radius, 16);

        let nerdy = nerdy();
        assert_eq!(nerdy.font_name, "monospace");
        assert_eq!(nerdy.max_items, 8);
        assert_eq!(nerdy.padding, 6);
        assert_eq!(nerdy.input_color, "#00FF00");
        assert_eq!(nerdy.selection_color, "#808080");
        assert_eq!(nerdy.shadow_color, "#40000000");

        let spotlight = spotlight();
        assert_eq!(spotlight.border_size, 0);
        assert_eq!(spotlight.settingsbutton_hover_color, "#a0a0a0");

        let grey = arc_grey_dark();
        assert_eq!(grey.settingsbutton_hover_color, "#000000");

        let breeze = breeze_dark();
        assert_eq!(breeze.shadow_size, 0);
        assert_eq!(breeze.radius, 0);
        assert_eq!(breeze.window_width, 400);
        assert_eq!(breeze.shadow_color, "#70000000");
    }

    #[test]
    fn test_arc_dark_lookup() {
        let registry = build_theme_registry();
        let arc = registry.get("ArcDark").unwrap();
        assert_eq!(arc.background_color, "#2F343F");
        assert_eq!(arc.border_size, 1);
        assert_eq!(arc.max_items, 5);
    }

    #[test]
    fn test_derived_copy_does_not_touch_source() {
        let registry = build_theme_registry();
        let mut orange = registry.resolve("BrightOrange").unwrap();
        orange.border_color = Color::from_rgb(0x000001);
        assert_eq!(registry.get("Bright").unwrap().border_color, "#a0a0a0");
        assert_eq!(registry.get("BrightOrange").unwrap().border_color, "#ff9f3f");
    }
}
