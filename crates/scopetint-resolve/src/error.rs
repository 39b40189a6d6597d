//! Error types for theme construction and style decoding.
//!
//! Construction-time failures ([`ParseThemeError`]) are surfaced to the loader
//! as result values. Decoding failures for individual colors and selectors
//! ([`ParseColorError`], [`ParseSelectorError`]) are soft at resolution level:
//! callers degrade to "attribute unset" or "rule never matches" instead of
//! failing the whole theme.

use std::fmt;

/// Error type for theme document construction.
///
/// These errors are fatal for the single theme being built; other themes in a
/// catalog remain usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseThemeError {
    /// The document has no settings entry without a `scope` key.
    ///
    /// Every theme document must carry one such entry: it supplies the global
    /// attributes used as the cascade base.
    MissingGlobalSettings,

    /// The document's top-level structure is not a theme (wrong value kinds
    /// for the document, `name`, or `settings`).
    UnexpectedShape(String),

    /// The raw text could not be deserialized into a document at all.
    Deserialize(String),
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseThemeError::MissingGlobalSettings => {
                write!(f, "theme document has no global settings entry")
            }
            ParseThemeError::UnexpectedShape(msg) => {
                write!(f, "malformed theme document: {}", msg)
            }
            ParseThemeError::Deserialize(msg) => {
                write!(f, "theme document does not deserialize: {}", msg)
            }
        }
    }
}

impl std::error::Error for ParseThemeError {}

impl From<serde_yaml::Error> for ParseThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ParseThemeError::Deserialize(err.to_string())
    }
}

impl From<serde_json::Error> for ParseThemeError {
    fn from(err: serde_json::Error) -> Self {
        ParseThemeError::Deserialize(err.to_string())
    }
}

/// Error type for color literal decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The literal does not start with `#`.
    MissingHashPrefix,

    /// The literal is neither the 7-character nor the 9-character encoding.
    UnsupportedLength(usize),

    /// A character in the parsed portion is not a hex digit.
    InvalidHexDigit(String),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::MissingHashPrefix => {
                write!(f, "color literal must start with '#'")
            }
            ParseColorError::UnsupportedLength(len) => {
                write!(f, "unsupported color literal length {} (expected 7 or 9)", len)
            }
            ParseColorError::InvalidHexDigit(literal) => {
                write!(f, "invalid hex digit in color literal '{}'", literal)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for selector compilation.
///
/// The comma/space mini-language cannot currently fail to compile, so this is
/// the contract point for richer pattern syntax (regex terms, operators). Theme
/// construction already routes it through the skip-and-log path, keeping a bad
/// rule from aborting the rest of the theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSelectorError {
    /// The pattern text could not be compiled into a selector.
    InvalidPattern {
        /// The offending pattern text.
        pattern: String,
        /// What the compiler objected to.
        message: String,
    },
}

impl fmt::Display for ParseSelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSelectorError::InvalidPattern { pattern, message } => {
                write!(f, "invalid scope selector '{}': {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for ParseSelectorError {}
