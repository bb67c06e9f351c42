//! Loading of the files and environment the CLI renders from.

use std::path::Path;

use anyhow::Context;
use ticket_cards_core::config::{
    card_version_from_env_value, include_dynamic_fields_from_env_value,
};
use ticket_cards_core::constants::LOCALIZATION_KEYS;
use ticket_cards_core::{
    CardConfig, CompiledTemplate, FieldTemplate, StringTable, TemplateCompiler, TicketDetail,
};

/// Environment variable holding the card schema version.
pub const CARD_VERSION_ENV: &str = "TICKET_CARDS_VERSION";

/// Environment variable switching the template-driven block of the new ticket card.
pub const DYNAMIC_FIELDS_ENV: &str = "TICKET_CARDS_DYNAMIC_FIELDS";

/// Resolve card configuration from raw environment values.
pub fn card_config(
    card_version: Option<String>,
    dynamic_fields: Option<String>,
) -> anyhow::Result<CardConfig> {
    let include_dynamic_fields = include_dynamic_fields_from_env_value(dynamic_fields)?;
    Ok(CardConfig::new(
        card_version_from_env_value(card_version),
        include_dynamic_fields,
    )?)
}

pub fn load_template(path: &Path) -> anyhow::Result<CompiledTemplate> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read template {}", path.display()))?;
    let template = FieldTemplate::parse_yaml(&yaml)?;
    Ok(TemplateCompiler::compile(&template)?)
}

pub fn load_strings(path: &Path) -> anyhow::Result<StringTable> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read string table {}", path.display()))?;
    Ok(StringTable::parse_yaml(&yaml)?)
}

pub fn load_ticket(path: &Path) -> anyhow::Result<TicketDetail> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read ticket {}", path.display()))?;
    serde_yaml::from_str(&yaml).with_context(|| format!("invalid ticket {}", path.display()))
}

/// Keys the card may resolve that `strings` does not define.
pub fn missing_strings<'a>(strings: &StringTable, template: &'a CompiledTemplate) -> Vec<&'a str> {
    let mut keys: Vec<&'a str> = LOCALIZATION_KEYS.to_vec();
    for field in template.fields() {
        keys.push(field.label_key.as_str());
        keys.extend(field.choices.iter().map(|choice| choice.label_key.as_str()));
    }
    strings.missing_keys(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TEMPLATE: &str = r#"fields:
  - id: description
    label_key: DescriptionText
    type: multiline_text
    required: true
  - id: category
    label_key: CategoryTypeText
    type: choice
    choices:
      - value: Hardware
        label_key: HardwareChoice
"#;

    const TICKET: &str = r#"ticket_id: "7f4c2e9d-4b0a-4f3a-9a2c-0e9a6b5d1c88"
request_number: "17"
category: Hardware
description: ""
issue_occurred_on: "2026-10-01T08:30:00Z"
additional_properties: '{"floor": "3"}'
"#;

    #[test]
    fn loads_template_and_ticket_from_files() {
        let dir = TempDir::new().expect("tempdir");
        let template_path = dir.path().join("template.yaml");
        let ticket_path = dir.path().join("ticket.yaml");
        fs::write(&template_path, TEMPLATE).expect("write template");
        fs::write(&ticket_path, TICKET).expect("write ticket");

        let template = load_template(&template_path).expect("template");
        assert_eq!(template.len(), 2);

        let ticket = load_ticket(&ticket_path).expect("ticket");
        assert_eq!(ticket.request_number, "17");
        assert_eq!(ticket.additional_properties.as_deref(), Some(r#"{"floor": "3"}"#));
    }

    #[test]
    fn reports_missing_file_path() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("nope.yaml");
        let err = load_template(&missing).expect_err("missing file");
        assert!(format!("{err:#}").contains("nope.yaml"));
    }

    #[test]
    fn lists_missing_strings_including_template_labels() {
        let dir = TempDir::new().expect("tempdir");
        let template_path = dir.path().join("template.yaml");
        let strings_path = dir.path().join("strings.yaml");
        fs::write(&template_path, TEMPLATE).expect("write template");

        let mut strings_yaml: String = LOCALIZATION_KEYS
            .iter()
            .map(|key| format!("{key}: text\n"))
            .collect();
        strings_yaml.push_str("HardwareChoice: Hardware\n");
        fs::write(&strings_path, strings_yaml).expect("write strings");

        let template = load_template(&template_path).expect("template");
        let strings = load_strings(&strings_path).expect("strings");
        assert!(missing_strings(&strings, &template).is_empty());

        let partial = StringTable::parse_yaml("NewRequestTitle: New\n").expect("strings");
        let missing = missing_strings(&partial, &template);
        assert!(missing.contains(&"HardwareChoice"));
        assert!(!missing.contains(&"NewRequestTitle"));
    }

    #[test]
    fn config_from_raw_values() {
        let config = card_config(None, None).expect("defaults");
        assert_eq!(config.card_version(), "1.2");
        assert!(config.include_dynamic_fields());

        let config = card_config(Some("1.5".into()), Some("off".into())).expect("explicit");
        assert_eq!(config.card_version(), "1.5");
        assert!(!config.include_dynamic_fields());

        assert!(card_config(None, Some("perhaps".into())).is_err());
    }
}
