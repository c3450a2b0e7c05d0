//! Custom serialization helpers for [Color](crate::color::Color)

use serde::{Deserialize, Deserializer, Serializer};

use crate::color::Color;

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&color.to_hex())
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    Color::from_hex(hex.trim()).map_err(Error::custom)
}
