//! Terminal adapter: resolved attributes to `console` styles.
//!
//! The resolver itself makes no assumption about the rendering surface; this
//! module is one concrete bridge for consumers painting into a terminal.

use console::{Color as TermColor, Style};

use super::attributes::{FontStyle, StyleAttributes};
use super::color::Color;

/// Converts an RGB color to the nearest ANSI 256-color palette index.
///
/// Grayscale values map onto the 24-step ramp (232–255); everything else maps
/// into the 6×6×6 color cube (16–231).
///
/// # Example
///
/// ```rust
/// use scopetint_resolve::{rgb_to_ansi256, Color};
///
/// assert_eq!(rgb_to_ansi256(Color::new(255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256(Color::new(0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256(color: Color) -> u8 {
    let Color { r, g, b } = color;
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

impl StyleAttributes {
    /// Builds a `console::Style` applying every attribute this style sets.
    ///
    /// Unset attributes leave the terminal defaults in place, mirroring how
    /// the cascade treats them.
    pub fn to_console_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.foreground {
            style = style.fg(TermColor::Color256(rgb_to_ansi256(fg)));
        }
        if let Some(bg) = self.background {
            style = style.bg(TermColor::Color256(rgb_to_ansi256(bg)));
        }
        if let Some(flags) = self.font_style {
            if flags.contains(FontStyle::BOLD) {
                style = style.bold();
            }
            if flags.contains(FontStyle::ITALIC) {
                style = style.italic();
            }
            if flags.contains(FontStyle::UNDERLINE) {
                style = style.underlined();
            }
        }
        style
    }
}
