//! Themes: ordered style rules plus global attributes, and the scope → style
//! cascade.
//!
//! A theme document is a mapping with optional `name`/`uuid` metadata and a
//! `settings` sequence. The first entry whose only key is `settings` supplies
//! the theme's global attributes; every later entry pairing a `scope` selector
//! string with a `settings` mapping becomes a [`StyleRule`]. Rule order is the
//! document order — ranking by specificity happens at resolution time, never
//! at construction time.
//!
//! ## Resolution
//!
//! [`Theme::matching_rules`] returns every rule matching a scope, most
//! specific first, with equal specificities keeping document order (the sort
//! is stable). [`Theme::style_for_scope`] folds that list into one concrete
//! [`StyleAttributes`]: the global attributes are the base, then matching
//! rules overlay from least to most specific, each overriding only the fields
//! it actually sets.
//!
//! Construction is best-effort per rule: an entry with a non-string selector,
//! a missing `settings` mapping, or a selector that fails to compile is logged
//! and skipped, and the rest of the theme still loads. Only a document without
//! a global settings entry is rejected outright.

use serde_yaml::Value;
use tracing::warn;

use crate::error::ParseThemeError;
use crate::selector::{Selector, Specificity};
use crate::style::StyleAttributes;

/// One selector → attributes pairing from a theme document.
#[derive(Debug, Clone)]
pub struct StyleRule {
    /// The scope selector this rule targets.
    pub selector: Selector,
    /// The attributes the rule contributes when it matches.
    pub attributes: StyleAttributes,
}

/// An immutable parsed theme.
///
/// Reconstructed wholesale on reload; resolution never mutates it, so shared
/// references are safe across threads.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    name: Option<String>,
    uuid: Option<String>,
    global: StyleAttributes,
    rules: Vec<StyleRule>,
}

impl Theme {
    /// Creates a theme with the given global attributes and no rules.
    pub fn new(global: StyleAttributes) -> Theme {
        Theme {
            name: None,
            uuid: None,
            global,
            rules: Vec::new(),
        }
    }

    /// Appends a rule, returning the theme for chaining.
    ///
    /// Rules keep insertion order, exactly like document order on parse.
    pub fn add_rule(mut self, selector: Selector, attributes: StyleAttributes) -> Theme {
        self.rules.push(StyleRule { selector, attributes });
        self
    }

    /// Sets the name on this theme, returning it for chaining.
    ///
    /// Useful when the name is known separately from the document, e.g. from
    /// a filename.
    pub fn with_name(mut self, name: impl Into<String>) -> Theme {
        self.name = Some(name.into());
        self
    }

    /// Builds a theme from an already-parsed document value.
    ///
    /// # Errors
    ///
    /// [`ParseThemeError::UnexpectedShape`] if the document or its `settings`
    /// entry has the wrong kind, [`ParseThemeError::MissingGlobalSettings`] if
    /// no entry supplies global attributes. Individually malformed rule
    /// entries are skipped with a warning, not errors.
    pub fn from_value(doc: &Value) -> Result<Theme, ParseThemeError> {
        let doc = doc.as_mapping().ok_or_else(|| {
            ParseThemeError::UnexpectedShape("theme document must be a mapping".to_string())
        })?;
        let name = doc.get("name").and_then(Value::as_str).map(str::to_string);
        let uuid = doc.get("uuid").and_then(Value::as_str).map(str::to_string);
        let entries = doc
            .get("settings")
            .and_then(Value::as_sequence)
            .ok_or_else(|| {
                ParseThemeError::UnexpectedShape("`settings` must be a sequence".to_string())
            })?;

        let mut global = None;
        let mut rules = Vec::new();
        for entry in entries {
            let entry = match entry.as_mapping() {
                Some(entry) => entry,
                None => {
                    warn!("skipping non-mapping settings entry");
                    continue;
                }
            };
            let scope = match entry.get("scope") {
                Some(scope) => scope,
                None => {
                    // The first entry carrying nothing but `settings` is the
                    // global entry; later ones (and stray entries) are ignored.
                    if global.is_none() && entry.len() == 1 {
                        if let Some(settings) = entry.get("settings").and_then(Value::as_mapping) {
                            global = Some(StyleAttributes::from_raw(settings));
                        }
                    }
                    continue;
                }
            };
            let raw_selector = match scope.as_str() {
                Some(raw) => raw,
                None => {
                    warn!("skipping rule whose scope is not a string");
                    continue;
                }
            };
            let settings = match entry.get("settings").and_then(Value::as_mapping) {
                Some(settings) => settings,
                None => {
                    warn!(selector = raw_selector, "skipping rule without a settings mapping");
                    continue;
                }
            };
            match Selector::parse(raw_selector) {
                Ok(selector) => rules.push(StyleRule {
                    selector,
                    attributes: StyleAttributes::from_raw(settings),
                }),
                Err(err) => {
                    warn!(selector = raw_selector, error = %err, "skipping rule with uncompilable selector");
                }
            }
        }

        let global = global.ok_or(ParseThemeError::MissingGlobalSettings)?;
        Ok(Theme {
            name,
            uuid,
            global,
            rules,
        })
    }

    /// Parses a theme from YAML text.
    ///
    /// # Errors
    ///
    /// [`ParseThemeError::Deserialize`] on syntax errors, otherwise the same
    /// errors as [`Theme::from_value`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use scopetint_resolve::Theme;
    ///
    /// let theme = Theme::from_yaml(r##"
    /// name: Twilight
    /// settings:
    ///   - settings: {foreground: "#F8F8F8", background: "#141414"}
    ///   - scope: keyword.control
    ///     settings: {foreground: "#CDA869", fontStyle: bold}
    /// "##).unwrap();
    ///
    /// assert!(theme.style_for_scope("keyword.control.ruby").bold());
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Theme, ParseThemeError> {
        let doc: Value = serde_yaml::from_str(yaml)?;
        Theme::from_value(&doc)
    }

    /// Parses a theme from JSON text.
    ///
    /// Same document shape and errors as [`Theme::from_yaml`].
    pub fn from_json(json: &str) -> Result<Theme, ParseThemeError> {
        let doc: serde_json::Value = serde_json::from_str(json)?;
        let doc = serde_yaml::to_value(doc)?;
        Theme::from_value(&doc)
    }

    /// The theme name, if the document (or a loader) supplied one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The document's uuid, if present.
    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    /// The attributes used as the cascade base and the no-match fallback.
    pub fn global_attributes(&self) -> &StyleAttributes {
        &self.global
    }

    /// The style rules in document order.
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Every rule matching `scope`, most specific first.
    ///
    /// The sort is stable, so rules with equal specificity keep their document
    /// order. This ordered list is the primitive the cascade builds on;
    /// consumers wanting their own layering policy can fold it directly.
    pub fn matching_rules(&self, scope: &str) -> Vec<(Specificity, &StyleRule)> {
        let mut matched: Vec<(Specificity, &StyleRule)> = self
            .rules
            .iter()
            .filter_map(|rule| {
                rule.selector
                    .specificity_if_matches(scope)
                    .map(|specificity| (specificity, rule))
            })
            .collect();
        matched.sort_by(|a, b| b.0.cmp(&a.0));
        matched
    }

    /// The cascaded attributes for `scope`.
    ///
    /// Starts from the global attributes and overlays matching rules from
    /// least to most specific; each rule overrides only the fields it sets.
    /// With no matching rule the global attributes come back unchanged. Pure
    /// over immutable data — the same scope always resolves identically.
    pub fn style_for_scope(&self, scope: &str) -> StyleAttributes {
        let mut style = self.global;
        for (_, rule) in self.matching_rules(scope).iter().rev() {
            style.apply(&rule.attributes);
        }
        style
    }
}
