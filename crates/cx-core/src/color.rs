//! 8-bit RGBA colors with CSS hex parsing and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-premultiplied sRGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    /// `#000`
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// `#00f`
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 | 4 => {
                let mut ch = [255u8; 4];
                for (slot, &c) in ch.iter_mut().zip(bytes) {
                    *slot = hex_val(c)? * 17;
                }
                Some(Self::rgba(ch[0], ch[1], ch[2], ch[3]))
            }
            6 | 8 => {
                let mut ch = [255u8; 4];
                for (slot, pair) in ch.iter_mut().zip(bytes.chunks_exact(2)) {
                    *slot = hex_val(pair[0])? << 4 | hex_val(pair[1])?;
                }
                Some(Self::rgba(ch[0], ch[1], ch[2], ch[3]))
            }
            _ => None,
        }
    }

    /// CSS hex notation; the alpha pair is only emitted when not opaque.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands_each_digit() {
        assert_eq!(Color::from_hex("#00f"), Some(Color::BLUE));
        assert_eq!(Color::from_hex("#000"), Some(Color::BLACK));
        assert_eq!(Color::from_hex("f008"), Some(Color::rgba(255, 0, 0, 0x88)));
    }

    #[test]
    fn long_hex_reads_pairs() {
        assert_eq!(Color::from_hex("#1C1C1E"), Some(Color::rgb(0x1c, 0x1c, 0x1e)));
        assert_eq!(
            Color::from_hex("#4fc3f780"),
            Some(Color::rgba(0x4f, 0xc3, 0xf7, 0x80))
        );
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(Color::from_hex("#12"), None);
        assert_eq!(Color::from_hex("#gg0"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn css_output_drops_opaque_alpha() {
        assert_eq!(Color::BLUE.to_css(), "#0000ff");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_css(), "#01020304");
        assert_eq!(Color::from_hex(&Color::WHITE.to_css()), Some(Color::WHITE));
    }
}
