//! # Scopetint — theme catalog and scope-based style resolution
//!
//! `scopetint` resolves visual styling for spans of source text: given a
//! lexical scope label produced by a tokenizer (say `keyword.control.ruby`)
//! and a theme of selector-keyed style rules, it answers "what color and
//! font style does this token get?". This crate layers a named catalog with
//! an atomically swappable active theme over the resolution core, which it
//! re-exports from `scopetint-resolve`.
//!
//! ## Quick Start
//!
//! ```rust
//! use scopetint::{Theme, ThemeCatalog};
//!
//! let mut catalog = ThemeCatalog::new();
//! let theme = Theme::from_yaml(r##"
//! name: Twilight
//! settings:
//!   - settings: {foreground: "#F8F8F8", background: "#141414"}
//!   - scope: keyword.control
//!     settings: {foreground: "#CDA869", fontStyle: bold}
//! "##).unwrap();
//! catalog.add_theme("twilight", theme);
//! catalog.set_active("twilight").unwrap();
//!
//! let style = catalog.active().style_for_scope("keyword.control.ruby");
//! assert!(style.bold());
//! ```
//!
//! ## For renderers
//!
//! Hold the `Arc<Theme>` from [`ThemeCatalog::active`] for the duration of a
//! paint, resolve scopes against it, and subscribe with
//! [`ThemeCatalog::on_change`] to know when to repaint. Callers that memoize
//! resolved styles per scope should invalidate on that notification.

pub mod catalog;
mod error;

pub use catalog::{ChangeListener, ThemeCatalog, FALLBACK_THEME_NAME, THEME_EXTENSIONS};
pub use error::CatalogError;

// Core resolution types, re-exported from scopetint-resolve.
pub use scopetint_resolve::{
    rgb_to_ansi256, Color, FontStyle, ParseColorError, ParseSelectorError, ParseThemeError,
    Selector, Specificity, StyleAttributes, StyleRule, Theme,
};
