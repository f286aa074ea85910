//! Field directive parsing.
//!
//! Directives are key/value pairs attached to a field declaration. The
//! external resolver extracts the raw metadata text (in the original Go
//! source this is the `reset:"..."` struct tag) and hands it over; parsing
//! happens once during model construction, never at walk time.
//!
//! The only recognized key is [`NONIL`]; unknown keys are kept but ignored,
//! so future directives do not break older generators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Directive key forcing allocation of an empty, non-nil container or
/// reference instead of nil.
pub const NONIL: &str = "nonil";

/// Parsed per-field directive map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directives {
    entries: BTreeMap<String, String>,
}

impl Directives {
    /// Create an empty directive map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse directive metadata text.
    ///
    /// The text is a whitespace- or comma-separated list of `key` or
    /// `key=value` tokens. A bare `key` maps to the empty value.
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();
        for token in text.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            match token.split_once('=') {
                Some((key, value)) => entries.insert(key.to_string(), value.to_string()),
                None => entries.insert(token.to_string(), String::new()),
            };
        }
        Self { entries }
    }

    /// Whether a directive key is present.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Value of a directive key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the `nonil` directive is set on this field.
    pub fn force_non_nil(&self) -> bool {
        self.has(NONIL)
    }

    /// Whether no directives are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(Directives::parse("").is_empty());
        assert!(Directives::parse("  ,  ").is_empty());
    }

    #[test]
    fn test_parse_bare_key() {
        let d = Directives::parse("nonil");
        assert!(d.has(NONIL));
        assert!(d.force_non_nil());
        assert_eq!(d.get(NONIL), Some(""));
    }

    #[test]
    fn test_parse_key_value_list() {
        let d = Directives::parse("nonil, note=keep");
        assert!(d.force_non_nil());
        assert_eq!(d.get("note"), Some("keep"));
    }

    #[test]
    fn test_unknown_keys_are_ignored_but_kept() {
        let d = Directives::parse("future=1");
        assert!(!d.force_non_nil());
        assert!(d.has("future"));
    }
}
