//! RGBA colour parsing and formatting for shader uniforms.

use crate::error::ColorError;

/// 8-bit per channel RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Parse `#RRGGBBAA` (the leading `#` is optional).
    pub fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        let s = hex.strip_prefix('#').unwrap_or(hex);
        if s.len() != 8 || !s.is_ascii() {
            return Err(ColorError::Length(hex.to_string()));
        }
        // from_str_radix alone would accept a leading '+'
        if !s.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| ColorError::Digit(hex.to_string()))
        };

        Ok(Rgba {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: channel(6)?,
        })
    }

    /// Channels normalized to 0.0..=1.0
    pub fn to_normalized(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Format as a shader `vec4(...)` literal using shortest float form
    pub fn to_vec4_literal(self) -> String {
        let [r, g, b, a] = self.to_normalized();
        format!("vec4({},{},{},{})", r, g, b, a)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Format back as `#RRGGBBAA`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}
