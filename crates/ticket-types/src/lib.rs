//! Keys shared by the ticket card crates.
//!
//! Field ids, localization keys and choice values all bind stored data to a template. A key
//! is compared byte for byte against what a ticket stores, so [`TemplateKey`] refuses text it
//! would otherwise have to normalize.

use std::fmt;

/// Reasons a raw string is not a usable [`TemplateKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("cannot be empty")]
    Empty,
    /// Leading or trailing whitespace would silently stop matching stored values.
    #[error("'{0}' has leading or trailing whitespace")]
    SurroundingWhitespace(String),
}

/// A non-blank template key held exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateKey(String);

impl TemplateKey {
    pub fn new(raw: &str) -> Result<Self, KeyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(KeyError::Empty);
        }
        if trimmed.len() != raw.len() {
            return Err(KeyError::SurroundingWhitespace(raw.to_owned()));
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TemplateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns `true` when `value` is absent or holds only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_key_exactly() {
        let key = TemplateKey::new("issue_occurred_on").expect("valid key");
        assert_eq!(key.as_str(), "issue_occurred_on");
        assert_eq!(key.to_string(), "issue_occurred_on");
    }

    #[test]
    fn rejects_blank_keys() {
        assert_eq!(TemplateKey::new(""), Err(KeyError::Empty));
        assert_eq!(TemplateKey::new(" \t\n"), Err(KeyError::Empty));
    }

    #[test]
    fn rejects_padded_keys() {
        assert_eq!(
            TemplateKey::new(" floor "),
            Err(KeyError::SurroundingWhitespace(" floor ".into()))
        );
        assert!(matches!(
            TemplateKey::new("floor\n"),
            Err(KeyError::SurroundingWhitespace(_))
        ));
        assert!(TemplateKey::new("asset tag").is_ok());
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(None));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some(" x ")));
    }
}
