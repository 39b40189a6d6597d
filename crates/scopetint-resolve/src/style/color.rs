//! Color literal decoding for theme settings.
//!
//! Two encodings are accepted:
//!
//! - 7 characters, `#RRGGBB` — the six hex digits decode to an RGB triplet.
//! - 9 characters, `#RRGGBBAA` — only the leading six digits decode; the
//!   trailing two are dropped, not interpreted as alpha. Theme files in the
//!   wild carry this form and the historical behavior is to truncate it, so
//!   that is what we do.
//!
//! Any other length is an unsupported encoding. At resolution level the
//! failure is soft: the attribute is left unset and styling falls back to the
//! cascade base.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A 24-bit RGB color decoded from a theme document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Builds a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        let digits = match literal.strip_prefix('#') {
            Some(digits) => digits,
            None => return Err(ParseColorError::MissingHashPrefix),
        };
        if !digits.is_ascii() {
            return Err(ParseColorError::InvalidHexDigit(literal.to_string()));
        }
        let digits = match digits.len() {
            6 => digits,
            // 9-character form: keep the leading six digits, drop the rest.
            8 => &digits[..6],
            len => return Err(ParseColorError::UnsupportedLength(len + 1)),
        };
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ParseColorError::InvalidHexDigit(literal.to_string()))
        };
        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
