//! Localization lookup threaded through every rendering call.
//!
//! The core never resolves strings through global state. Callers pass a [`Localizer`]; any
//! `Fn(&str) -> String` qualifies, which keeps tests down to a closure or a small table.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{CardError, CardResult};

/// Resolves a localization key to display text.
///
/// Implementations must be total over the keys the core references
/// ([`crate::constants::LOCALIZATION_KEYS`] plus every template label key). A missing key
/// is a caller configuration problem, not a render failure.
pub trait Localizer {
    fn localize(&self, key: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String,
{
    fn localize(&self, key: &str) -> String {
        self(key)
    }
}

/// Key -> text table for one culture.
///
/// Missing keys resolve to the key itself and are logged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    entries: BTreeMap<String, String>,
}

impl StringTable {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse a string table from a flat YAML mapping of key to text.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidInput`] if the YAML is not a mapping of strings.
    pub fn parse_yaml(yaml_text: &str) -> CardResult<Self> {
        serde_yaml::from_str(yaml_text)
            .map_err(|e| CardError::InvalidInput(format!("invalid string table: {e}")))
    }

    /// Returns the keys from `required` that this table does not define.
    pub fn missing_keys<'a>(&self, required: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        required
            .into_iter()
            .filter(|key| !self.entries.contains_key(*key))
            .collect()
    }
}

impl Localizer for StringTable {
    fn localize(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => {
                tracing::warn!(key, "missing localization key");
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_localizers() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.localize("title"), "TITLE");
    }

    #[test]
    fn table_resolves_known_and_falls_back_to_key() {
        let table = StringTable::parse_yaml("NewRequestTitle: New request\n").expect("parse");
        assert_eq!(table.localize("NewRequestTitle"), "New request");
        assert_eq!(table.localize("Unknown"), "Unknown");
    }

    #[test]
    fn reports_missing_keys() {
        let table = StringTable::parse_yaml("A: a\nB: b\n").expect("parse");
        assert_eq!(table.missing_keys(["A", "C", "B", "D"]), vec!["C", "D"]);
    }

    #[test]
    fn rejects_nested_tables() {
        let err = StringTable::parse_yaml("A:\n  nested: true\n").expect_err("nested");
        assert!(matches!(err, CardError::InvalidInput(msg) if msg.contains("string table")));
    }
}
