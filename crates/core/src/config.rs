//! Card rendering configuration.
//!
//! Configuration is resolved once at process startup and passed into the assembler. The
//! core never reads process-wide environment variables while rendering, so concurrent
//! render calls always see the same settings.

use crate::constants::DEFAULT_CARD_VERSION;
use crate::{CardError, CardResult};

/// Card configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardConfig {
    card_version: String,
    include_dynamic_fields: bool,
}

impl CardConfig {
    /// Create a new `CardConfig`.
    pub fn new(card_version: String, include_dynamic_fields: bool) -> CardResult<Self> {
        if card_version.trim().is_empty() {
            return Err(CardError::InvalidInput(
                "card_version cannot be empty".into(),
            ));
        }

        Ok(Self {
            card_version,
            include_dynamic_fields,
        })
    }

    pub fn card_version(&self) -> &str {
        &self.card_version
    }

    pub fn include_dynamic_fields(&self) -> bool {
        self.include_dynamic_fields
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            card_version: DEFAULT_CARD_VERSION.to_string(),
            include_dynamic_fields: true,
        }
    }
}

/// Parse the card schema version from an optional raw value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_CARD_VERSION`].
pub fn card_version_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_CARD_VERSION.to_string())
}

/// Parse the dynamic-fields switch from an optional raw value.
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off` (case-insensitive). Absent or blank
/// values keep the default of `true`.
pub fn include_dynamic_fields_from_env_value(value: Option<String>) -> CardResult<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None => Ok(true),
        Some("true" | "1" | "yes" | "on") => Ok(true),
        Some("false" | "0" | "no" | "off") => Ok(false),
        Some(other) => Err(CardError::InvalidInput(format!(
            "include_dynamic_fields must be a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_card_version() {
        let err = CardConfig::new("  ".into(), true).expect_err("blank version");
        assert!(matches!(err, CardError::InvalidInput(msg) if msg.contains("card_version")));
    }

    #[test]
    fn card_version_defaults_when_unset() {
        assert_eq!(card_version_from_env_value(None), DEFAULT_CARD_VERSION);
        assert_eq!(card_version_from_env_value(Some(" ".into())), DEFAULT_CARD_VERSION);
        assert_eq!(card_version_from_env_value(Some(" 1.4 ".into())), "1.4");
    }

    #[test]
    fn parses_dynamic_fields_switch() {
        assert!(include_dynamic_fields_from_env_value(None).expect("default"));
        assert!(include_dynamic_fields_from_env_value(Some("ON".into())).expect("on"));
        assert!(!include_dynamic_fields_from_env_value(Some("0".into())).expect("off"));

        let err = include_dynamic_fields_from_env_value(Some("maybe".into()))
            .expect_err("not a boolean");
        assert!(matches!(err, CardError::InvalidInput(msg) if msg.contains("maybe")));
    }
}
