//! Color types and utilities

use serde::{Deserialize, Serialize};

/// RGBA color with f32 components (0.0 to 1.0)
///
/// Deserializes from either a component table (`{ r, g, b, a }`, alpha
/// defaulting to 1.0) or a hex string (`"#RRGGBB"` / `"#RRGGBBAA"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_hex(value)),
            8 => Some(Self::from_rgba8(
                ((value >> 24) & 0xFF) as u8,
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            )),
            _ => None,
        }
    }

    /// Create a grayscale color
    pub fn gray(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linear interpolation between two colors, `t` in 0.0..=1.0
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Components {
        r: f32,
        g: f32,
        b: f32,
        #[serde(default = "opaque")]
        a: f32,
    },
}

fn opaque() -> f32 {
    1.0
}

impl TryFrom<ColorRepr> for Color {
    type Error = String;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(text) => {
                Color::parse_hex(&text).ok_or_else(|| format!("invalid hex color `{text}`"))
            }
            ColorRepr::Components { r, g, b, a } => Ok(Color::new(r, g, b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formats() {
        assert_eq!(Color::from_hex(0xFF0000), Color::RED);
        assert_eq!(Color::parse_hex("#0000ff"), Some(Color::BLUE));
        assert_eq!(Color::parse_hex("00ff0080").map(|c| c.g), Some(1.0));
        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_deserialize_both_forms() {
        let hex: Color = serde_json::from_str("\"#ffffff\"").unwrap();
        assert_eq!(hex, Color::WHITE);

        let table: Color = serde_json::from_str(r#"{"r": 0.0, "g": 0.0, "b": 1.0}"#).unwrap();
        assert_eq!(table, Color::BLUE);

        assert!(serde_json::from_str::<Color>("\"#nothex\"").is_err());
    }

    #[test]
    fn test_lerp_clamps() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::gray(0.5));
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 4.0), Color::WHITE);
    }
}
