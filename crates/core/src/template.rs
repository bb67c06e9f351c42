//! Field templates: the stored wire model and its compiled form.
//!
//! Administrators configure a [`FieldTemplate`] as YAML. The wire model keeps the field type as
//! a raw string so that an unknown type is reported as
//! [`CardError::UnsupportedFieldType`] instead of a generic schema error. The
//! [`TemplateCompiler`] turns the wire model into a [`CompiledTemplate`] whose descriptors are
//! fully validated and typed; the renderer only ever sees compiled descriptors.
//!
//! Compilation is pure and independent of any ticket. Field order is the display order and
//! is preserved end to end.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use ticket_types::TemplateKey;

use crate::{CardError, CardResult};

// ============================================================================
// Wire types
// ============================================================================

/// Stored field template: an ordered list of field definitions.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FieldTemplate {
    pub fields: Vec<FieldDefinition>,
}

/// One field of a stored template.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FieldDefinition {
    pub id: String,
    pub label_key: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub choices: Vec<ChoiceDefinition>,
}

/// One option of a choice field.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChoiceDefinition {
    pub value: String,
    pub label_key: String,
}

impl FieldTemplate {
    /// Parse a field template from YAML text.
    ///
    /// Uses `serde_path_to_error` to report the path of the failing field
    /// (e.g. `fields[2].required`) when the YAML does not match the wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidTemplate`] if the YAML is not a valid template mapping,
    /// any field has an unexpected type, or unknown keys are present.
    pub fn parse_yaml(yaml_text: &str) -> CardResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        match serde_path_to_error::deserialize::<_, FieldTemplate>(deserializer) {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() {
                    "<root>"
                } else {
                    path.as_str()
                };
                Err(CardError::InvalidTemplate(format!(
                    "template schema mismatch at {path}: {source}"
                )))
            }
        }
    }
}

// ============================================================================
// Compiled types
// ============================================================================

/// Closed set of field types the renderer understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    MultilineText,
    Choice,
    /// A date on which something already happened; future dates are invalid.
    Date,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::MultilineText => "multiline_text",
            FieldType::Choice => "choice",
            FieldType::Date => "date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = CardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "text" => Ok(FieldType::Text),
            "multiline_text" => Ok(FieldType::MultilineText),
            "choice" => Ok(FieldType::Choice),
            "date" => Ok(FieldType::Date),
            other => Err(CardError::UnsupportedFieldType(other.to_string())),
        }
    }
}

/// A validated field descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: TemplateKey,
    pub label_key: TemplateKey,
    pub field_type: FieldType,
    pub required: bool,
    /// Options in display order; empty unless `field_type` is [`FieldType::Choice`].
    pub choices: Vec<ChoiceOption>,
}

/// A validated choice option.
///
/// `value` is the machine-readable payload bound to the ticket; `label_key` is only used for
/// display, so labels can be re-localized without breaking data binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: TemplateKey,
    pub label_key: TemplateKey,
}

/// Ordered, validated field descriptors ready for annotation and rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompiledTemplate {
    fields: Vec<FieldDescriptor>,
}

impl CompiledTemplate {
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns the descriptor with the given id.
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// Compiler
// ============================================================================

/// Template compilation.
pub struct TemplateCompiler;

impl TemplateCompiler {
    /// Validate a stored template and convert it into typed descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidTemplate`] if:
    /// - a field id or label key is blank or has leading/trailing whitespace,
    /// - two fields share an id,
    /// - a choice field has no options, or repeats an option value,
    /// - a non-choice field declares options,
    /// - an option value or label key is blank or padded.
    ///
    /// Returns [`CardError::UnsupportedFieldType`] if a field type is not recognised.
    pub fn compile(template: &FieldTemplate) -> CardResult<CompiledTemplate> {
        let mut seen_ids = BTreeSet::new();
        let mut fields = Vec::with_capacity(template.fields.len());

        for (index, definition) in template.fields.iter().enumerate() {
            let id = template_key(&definition.id, || format!("fields[{index}].id"))?;

            if !seen_ids.insert(id.clone()) {
                return Err(CardError::InvalidTemplate(format!(
                    "duplicate field id '{id}'"
                )));
            }

            let label_key =
                template_key(&definition.label_key, || format!("field '{id}' label_key"))?;

            let field_type: FieldType = definition.field_type.parse()?;
            let choices = compile_choices(&id, field_type, &definition.choices)?;

            fields.push(FieldDescriptor {
                id,
                label_key,
                field_type,
                required: definition.required,
                choices,
            });
        }

        Ok(CompiledTemplate { fields })
    }
}

/// `context` names the offending key in the error message.
fn template_key(raw: &str, context: impl FnOnce() -> String) -> CardResult<TemplateKey> {
    TemplateKey::new(raw)
        .map_err(|err| CardError::InvalidTemplate(format!("{} {err}", context())))
}

fn compile_choices(
    id: &TemplateKey,
    field_type: FieldType,
    definitions: &[ChoiceDefinition],
) -> CardResult<Vec<ChoiceOption>> {
    if field_type != FieldType::Choice {
        if !definitions.is_empty() {
            return Err(CardError::InvalidTemplate(format!(
                "field '{id}' of type {field_type} cannot declare choices"
            )));
        }
        return Ok(Vec::new());
    }

    if definitions.is_empty() {
        return Err(CardError::InvalidTemplate(format!(
            "choice field '{id}' must declare at least one choice"
        )));
    }

    let mut seen_values = BTreeSet::new();
    definitions
        .iter()
        .map(|choice| {
            let value = template_key(&choice.value, || format!("choice value of field '{id}'"))?;
            if !seen_values.insert(value.clone()) {
                return Err(CardError::InvalidTemplate(format!(
                    "choice field '{id}' repeats value '{value}'"
                )));
            }
            let label_key = template_key(&choice.label_key, || {
                format!("label_key of choice '{value}' in field '{id}'")
            })?;
            Ok(ChoiceOption { value, label_key })
        })
        .collect()
}
