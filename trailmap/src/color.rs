//! Packed ARGB colors.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ColorParseError;

/// 32-bit color packed as `0xAARRGGBB`.
///
/// Every `u32` is a valid color, so a `Color` can never hold an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    /// Opaque blue, the default trail color.
    pub const BLUE: Color = Color(0xFF2196F3);
    /// Opaque green.
    pub const GREEN: Color = Color(0xFF4CAF50);
    /// Opaque red.
    pub const RED: Color = Color(0xFFF44336);
    /// Opaque orange.
    pub const ORANGE: Color = Color(0xFFFF9800);
    /// Opaque purple.
    pub const PURPLE: Color = Color(0xFF9C27B0);

    /// Creates a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Packed `0xAARRGGBB` value.
    pub const fn argb(&self) -> u32 {
        self.0
    }

    /// Alpha channel.
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Channels in `[r, g, b, a]` order, as most renderers expect them.
    pub const fn to_rgba(&self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `#AARRGGBB`, `0xAARRGGBB`, `AARRGGBB` or `#RRGGBB` (opaque).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let value = match digits.len() {
            6 | 8 => u32::from_str_radix(digits, 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))?,
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        if digits.len() == 6 {
            Ok(Self(0xFF000000 | value))
        } else {
            Ok(Self(value))
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels() {
        let color = Color::from_argb(0x3300FF00);
        assert_eq!(color.alpha(), 0x33);
        assert_eq!(color.red(), 0);
        assert_eq!(color.green(), 0xFF);
        assert_eq!(color.blue(), 0);
        assert_eq!(color.to_rgba(), [0, 0xFF, 0, 0x33]);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Color::BLUE.to_string(), "#FF2196F3");
        assert_eq!("#FF2196F3".parse::<Color>(), Ok(Color::BLUE));
        assert_eq!("0x3300ff00".parse::<Color>(), Ok(Color::from_argb(0x3300FF00)));
        assert_eq!("F44336".parse::<Color>(), Ok(Color::RED));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "#FFF".parse::<Color>(),
            Err(ColorParseError::InvalidLength(3))
        );
        assert!(matches!(
            "#GG2196F3".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            "+2196F3".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_hex_string() {
        let json = serde_json::to_string(&Color::ORANGE).expect("serialize");
        assert_eq!(json, "\"#FFFF9800\"");
        let back: Color = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Color::ORANGE);
    }
}
