//! Style attributes cascaded onto spans of text.
//!
//! Every field of [`StyleAttributes`] is optional: `None` means "not
//! specified", which is distinct from specified-as-empty. The cascade relies
//! on that distinction — only fields a rule actually sets override the layers
//! beneath it.

use bitflags::bitflags;
use serde_yaml::{Mapping, Value};
use tracing::warn;

use super::color::Color;

bitflags! {
    /// Font-style flags carried by a theme rule.
    ///
    /// Flags are independent: a rule may set any combination.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FontStyle: u8 {
        const ITALIC = 1 << 0;
        const UNDERLINE = 1 << 1;
        const BOLD = 1 << 2;
    }
}

impl FontStyle {
    /// Decodes a raw `fontStyle` value.
    ///
    /// Presence of the keyword anywhere in the string sets the flag; words
    /// like `normal` (and anything unrecognized) are ignored.
    pub fn parse(raw: &str) -> FontStyle {
        let mut flags = FontStyle::empty();
        if raw.contains("italic") {
            flags |= FontStyle::ITALIC;
        }
        if raw.contains("underline") {
            flags |= FontStyle::UNDERLINE;
        }
        if raw.contains("bold") {
            flags |= FontStyle::BOLD;
        }
        flags
    }
}

/// Visual attributes resolved for a scope: optional colors plus font-style
/// flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleAttributes {
    /// Text color, if the rule sets one.
    pub foreground: Option<Color>,
    /// Background color, if the rule sets one.
    pub background: Option<Color>,
    /// Font-style flags, if the rule carries a `fontStyle` field at all.
    pub font_style: Option<FontStyle>,
}

impl StyleAttributes {
    /// Decodes the `settings` mapping of one theme entry.
    ///
    /// Unknown keys are ignored. A color that does not decode is logged and
    /// left unset rather than failing the rule. A `fontStyle` field that is
    /// present but names no known keyword yields an explicitly empty flag set,
    /// which still overrides inherited flags during the cascade.
    pub fn from_raw(settings: &Mapping) -> StyleAttributes {
        StyleAttributes {
            foreground: color_field(settings, "foreground"),
            background: color_field(settings, "background"),
            font_style: settings
                .get("fontStyle")
                .and_then(Value::as_str)
                .map(FontStyle::parse),
        }
    }

    /// Overlays `layer` on top of `self`.
    ///
    /// Only fields the layer explicitly sets replace the current value; unset
    /// fields never override.
    pub fn apply(&mut self, layer: &StyleAttributes) {
        if let Some(fg) = layer.foreground {
            self.foreground = Some(fg);
        }
        if let Some(bg) = layer.background {
            self.background = Some(bg);
        }
        if let Some(flags) = layer.font_style {
            self.font_style = Some(flags);
        }
    }

    /// True if no attribute is set.
    pub fn is_unset(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.font_style.is_none()
    }

    /// True if the resolved flags include bold.
    pub fn bold(&self) -> bool {
        self.font_style.is_some_and(|flags| flags.contains(FontStyle::BOLD))
    }

    /// True if the resolved flags include italic.
    pub fn italic(&self) -> bool {
        self.font_style.is_some_and(|flags| flags.contains(FontStyle::ITALIC))
    }

    /// True if the resolved flags include underline.
    pub fn underline(&self) -> bool {
        self.font_style.is_some_and(|flags| flags.contains(FontStyle::UNDERLINE))
    }
}

fn color_field(settings: &Mapping, key: &str) -> Option<Color> {
    let raw = settings.get(key)?.as_str()?;
    match raw.parse::<Color>() {
        Ok(color) => Some(color),
        Err(err) => {
            warn!(key, value = raw, error = %err, "ignoring undecodable color");
            None
        }
    }
}
