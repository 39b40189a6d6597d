//! Style primitives: colors, font-style flags, and the attribute set the
//! resolver cascades.
//!
//! The central type is [`StyleAttributes`]. Each of its fields is optional so
//! the cascade can distinguish "this rule says nothing about the background"
//! from "this rule sets no background": only explicitly-set fields propagate
//! when rules are layered (see [`StyleAttributes::apply`]).

mod attributes;
mod color;
mod term;

pub use attributes::{FontStyle, StyleAttributes};
pub use color::Color;
pub use term::rgb_to_ansi256;
