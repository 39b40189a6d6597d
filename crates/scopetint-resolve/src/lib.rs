//! # Scopetint Resolve — scope-to-style resolution core
//!
//! `scopetint-resolve` turns theme documents into ordered selector/style
//! rules and resolves the cascaded style for a lexical scope label such as
//! `keyword.control.ruby`. It is the resolution foundation for the
//! `scopetint` catalog crate, but has no filesystem or catalog dependency and
//! can be used on its own.
//!
//! ## Core Concepts
//!
//! - [`Selector`]: a CSS-like scope pattern — comma-separated alternatives of
//!   space-separated terms — that ranks its own matches by [`Specificity`]
//! - [`Theme`]: global attributes plus document-ordered [`StyleRule`]s, with
//!   [`Theme::style_for_scope`] producing the cascaded result
//! - [`StyleAttributes`]: optional foreground/background [`Color`]s and
//!   [`FontStyle`] flags, where unset fields never override during the cascade
//!
//! ## Quick Start
//!
//! ```rust
//! use scopetint_resolve::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! name: Monokai-ish
//! settings:
//!   - settings: {foreground: "#F8F8F2", background: "#272822"}
//!   - scope: keyword
//!     settings: {foreground: "#F92672"}
//!   - scope: keyword.control
//!     settings: {fontStyle: bold}
//! "##).unwrap();
//!
//! let style = theme.style_for_scope("keyword.control.ruby");
//! assert!(style.bold());
//! assert_eq!(style.foreground.unwrap().to_string(), "#F92672");
//! ```
//!
//! ## Matching semantics
//!
//! Term matching is substring containment over the scope string, not path
//! prefixing; alternatives are tried first-match-wins. Both behaviors follow
//! the theme format this engine consumes and are documented on [`Selector`].

mod error;
pub mod selector;
pub mod style;
pub mod theme;

pub use error::{ParseColorError, ParseSelectorError, ParseThemeError};
pub use selector::{Selector, Specificity};
pub use style::{rgb_to_ansi256, Color, FontStyle, StyleAttributes};
pub use theme::{StyleRule, Theme};
