use crate::color::Color;

/// A named accent color within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    /// Suffix appended to the family prefix, e.g. `"Orange"`.
    pub name: &'static str,
    /// The color written to the four accent fields.
    pub color: Color,
}

/// A group of presets that share a base record and differ only in their
/// accent color.
#[derive(Debug, Clone, Copy)]
pub struct AccentFamily {
    /// Prefix of every theme name in the family, e.g. `"SolarizedDark"`.
    pub prefix: &'static str,
    /// The accents of this family, in registration order.
    pub accents: &'static [Accent],
}

impl AccentFamily {
    /// Full theme name of an accent in this family.
    pub fn theme_name(&self, accent: &Accent) -> String {
        format!("{}{}", self.prefix, accent.name)
    }

    /// Iterate `(theme name, accent color)` pairs.
    pub fn variants(&self) -> impl Iterator<Item = (String, Color)> + '_ {
        self.accents
            .iter()
            .map(move |accent| (self.theme_name(accent), accent.color))
    }
}

const fn accent(name: &'static str, rgb: u32) -> Accent {
    Accent {
        name,
        color: Color::from_rgb(rgb),
    }
}

/// Accents derived from `Bright`.
pub const BRIGHT_ACCENTS: AccentFamily = AccentFamily {
    prefix: "Bright",
    accents: &[
        accent("Orange", 0xff9f3f),
        accent("Magenta", 0xff3f9f),
        accent("Mint", 0x3fff9f),
        accent("Green", 0x9fff3f),
        accent("Blue", 0x3f9fff),
        accent("Violet", 0x9f3fff),
    ],
};

/// Accents derived from `Dark`.
pub const DARK_ACCENTS: AccentFamily = AccentFamily {
    prefix: "Dark",
    accents: &[
        accent("Orange", 0xFF9020),
        accent("Magenta", 0xFF2090),
        accent("Mint", 0x20FF90),
        accent("Green", 0x90FF20),
        accent("Blue", 0x2090FF),
        accent("Violet", 0x9020FF),
    ],
};

/// The Solarized accent colors, shared by both Solarized families.
const SOLARIZED: &[Accent] = &[
    accent("Orange", 0xcb4b16),
    accent("Red", 0xdc322f),
    accent("Magenta", 0xd33682),
    accent("Cyan", 0x2aa198),
    accent("Violet", 0x6c71c4),
    accent("Blue", 0x268bd2),
    accent("Green", 0x859900),
];

/// Accents derived from `SolarizedBrightYellow`.
pub const SOLARIZED_BRIGHT_ACCENTS: AccentFamily = AccentFamily {
    prefix: "SolarizedBright",
    accents: SOLARIZED,
};

/// Accents derived from `SolarizedDarkYellow`.
pub const SOLARIZED_DARK_ACCENTS: AccentFamily = AccentFamily {
    prefix: "SolarizedDark",
    accents: SOLARIZED,
};

/// The Solarized yellow, the highlight of both Solarized base themes.
pub const SOLARIZED_YELLOW: Color = Color::from_rgb(0xb58900);
