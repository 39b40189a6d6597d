//! Scope selector parsing, matching, and specificity.
//!
//! A selector is a comma-separated list of alternatives (ORs); each
//! alternative is a whitespace-separated list of terms (ANDs). A term like
//! `keyword.control` matches a scope when the scope string *contains* it as a
//! substring — deliberately not path-prefix matching, so `able` matches
//! `variable.parameter`. That quirk is load-bearing for existing themes and is
//! kept isolated here so a token-boundary rule could replace it without
//! touching callers.
//!
//! Specificity approximates CSS: the more dotted atoms a selector names, the
//! more precisely it targets a scope, and the higher it ranks when several
//! rules match.
//!
//! # Example
//!
//! ```rust
//! use scopetint_resolve::Selector;
//!
//! let selector: Selector = "string, constant.numeric".parse().unwrap();
//! assert_eq!(selector.specificity_if_matches("constant.numeric.integer"), Some(2));
//! assert_eq!(selector.specificity_if_matches("comment.line"), None);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSelectorError;

/// Integer rank measuring how precisely a selector targets a scope.
///
/// A single term's specificity is its dot-separated atom count (`keyword.if`
/// counts 2); an AND-group sums its terms.
pub type Specificity = u32;

/// One scope-matching pattern: OR of AND term groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    raw: String,
    alternatives: Vec<Alternative>,
}

/// A single comma-separated branch of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Alternative {
    raw: String,
    terms: Vec<String>,
}

/// Counts the dot/space-separated atoms in a pattern.
fn atom_count(pattern: &str) -> Specificity {
    pattern
        .split(|c: char| c == '.' || c.is_whitespace())
        .filter(|atom| !atom.is_empty())
        .count() as Specificity
}

impl Alternative {
    fn parse(raw: &str) -> Self {
        Alternative {
            raw: raw.to_string(),
            terms: raw.split_whitespace().map(str::to_string).collect(),
        }
    }

    fn specificity(&self) -> Specificity {
        self.terms.iter().map(|term| atom_count(term)).sum()
    }
}

impl Selector {
    /// Compiles a raw selector string.
    ///
    /// The current mini-language always compiles; the fallible signature is
    /// where richer pattern syntax would report [`ParseSelectorError`].
    pub fn parse(raw: &str) -> Result<Selector, ParseSelectorError> {
        let alternatives = raw
            .split(',')
            .map(str::trim)
            .map(Alternative::parse)
            .collect();
        Ok(Selector {
            raw: raw.to_string(),
            alternatives,
        })
    }

    /// The selector text as it appeared in the theme document.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Tests this selector against a scope, returning the specificity of the
    /// first matching alternative.
    ///
    /// Alternatives are tried in written order and the scan stops at the first
    /// match — a later alternative is never consulted even if it would rank
    /// higher. Per alternative: exact string equality with the scope wins
    /// immediately with the alternative's own atom count; otherwise the
    /// alternative matches when every term is a substring of the scope, with
    /// specificity summed over the terms. An alternative with no terms (empty
    /// string after trimming) matches every scope with specificity 0.
    pub fn specificity_if_matches(&self, scope: &str) -> Option<Specificity> {
        for alternative in &self.alternatives {
            if alternative.raw == scope {
                return Some(atom_count(&alternative.raw));
            }
            if alternative
                .terms
                .iter()
                .all(|term| scope.contains(term.as_str()))
            {
                return Some(alternative.specificity());
            }
        }
        None
    }

    /// True if the selector matches the scope, without ranking it.
    pub fn matches(&self, scope: &str) -> bool {
        self.specificity_if_matches(scope).is_some()
    }
}

impl FromStr for Selector {
    type Err = ParseSelectorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Selector::parse(raw)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
