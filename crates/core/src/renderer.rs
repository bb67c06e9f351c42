//! Maps annotated fields to card elements.

use chrono::{NaiveDate, Utc};
use ticket_types::is_blank;

use crate::constants::{
    CHOICE_PLACEHOLDER_TEXT, DATE_FORMAT, DATE_VALIDATION_TEXT, REQUIRED_FIELD_VALIDATION_TEXT,
};
use crate::elements::{CardElement, Choice, ColumnPair, Input, InputKind, TextBlock};
use crate::localization::Localizer;
use crate::template::FieldType;
use crate::validation::{AnnotatedField, ValidationAnnotator};

/// Per-call rendering inputs: the localization lookup and the date treated as today.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    localizer: &'a dyn Localizer,
    today: NaiveDate,
}

impl<'a> RenderContext<'a> {
    pub fn new(localizer: &'a dyn Localizer, today: NaiveDate) -> Self {
        Self { localizer, today }
    }

    /// Context whose "today" is the current UTC calendar date.
    pub fn utc_today(localizer: &'a dyn Localizer) -> Self {
        Self::new(localizer, Utc::now().date_naive())
    }

    pub fn localize(&self, key: &str) -> String {
        self.localizer.localize(key)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn annotator(&self) -> ValidationAnnotator {
        ValidationAnnotator::new(self.today)
    }
}

/// Stateless element factory.
pub struct ElementRenderer;

impl ElementRenderer {
    /// Render one field: its label, its input, then an inline marker when validation failed.
    ///
    /// The marker always follows the input and never replaces it.
    pub fn render_field(field: &AnnotatedField<'_>, ctx: &RenderContext<'_>) -> Vec<CardElement> {
        let descriptor = field.descriptor;

        let mut label = ctx.localize(descriptor.label_key.as_str());
        if descriptor.required {
            label.push_str(" *");
        }

        let kind = match descriptor.field_type {
            FieldType::Text => InputKind::Text { multiline: false },
            FieldType::MultilineText => InputKind::Text { multiline: true },
            FieldType::Choice => InputKind::Choice {
                placeholder: ctx.localize(CHOICE_PLACEHOLDER_TEXT),
                choices: descriptor
                    .choices
                    .iter()
                    .map(|option| Choice {
                        title: ctx.localize(option.label_key.as_str()),
                        value: option.value.to_string(),
                    })
                    .collect(),
            },
            FieldType::Date => InputKind::Date {
                max: ctx.today().format(DATE_FORMAT).to_string(),
            },
        };

        let value = (!is_blank(Some(field.value.as_str()))).then(|| field.value.clone());

        let mut elements = vec![
            CardElement::TextBlock(TextBlock::plain(label)),
            CardElement::Input(Input {
                id: descriptor.id.to_string(),
                value,
                required: descriptor.required,
                kind,
            }),
        ];

        if field.validation_failed {
            let message_key = match descriptor.field_type {
                FieldType::Date => DATE_VALIDATION_TEXT,
                FieldType::Text | FieldType::MultilineText | FieldType::Choice => {
                    REQUIRED_FIELD_VALIDATION_TEXT
                }
            };
            elements.push(CardElement::TextBlock(TextBlock::validation_marker(
                ctx.localize(message_key),
            )));
        }

        elements
    }

    /// Render a read-only label/value row. An empty value still yields an (empty) cell.
    pub fn render_column_pair(label: impl Into<String>, value: Option<&str>) -> CardElement {
        CardElement::ColumnPair(ColumnPair {
            label: label.into(),
            value: value.unwrap_or_default().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{ChoiceOption, FieldDescriptor};
    use ticket_types::TemplateKey;

    fn text(s: &str) -> TemplateKey {
        TemplateKey::new(s).expect("valid key")
    }

    fn descriptor(id: &str, field_type: FieldType, required: bool) -> FieldDescriptor {
        FieldDescriptor {
            id: text(id),
            label_key: text(&format!("{id}Label")),
            field_type,
            required,
            choices: Vec::new(),
        }
    }

    fn bracketed(key: &str) -> String {
        format!("[{key}]")
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("date")
    }

    #[test]
    fn text_field_renders_label_then_input() {
        let field_descriptor = descriptor("floor", FieldType::Text, false);
        let field = AnnotatedField {
            descriptor: &field_descriptor,
            value: "3".into(),
            validation_failed: false,
        };
        let ctx = RenderContext::new(&bracketed, today());

        let elements = ElementRenderer::render_field(&field, &ctx);
        assert_eq!(elements.len(), 2);
        assert!(matches!(&elements[0], CardElement::TextBlock(b) if b.text == "[floorLabel]"));
        match &elements[1] {
            CardElement::Input(input) => {
                assert_eq!(input.id, "floor");
                assert_eq!(input.value.as_deref(), Some("3"));
                assert_eq!(input.kind, InputKind::Text { multiline: false });
            }
            other => panic!("expected input, got {other:?}"),
        }
    }

    #[test]
    fn failed_field_gets_marker_after_input() {
        let field_descriptor = descriptor("description", FieldType::MultilineText, true);
        let field = AnnotatedField {
            descriptor: &field_descriptor,
            value: "   ".into(),
            validation_failed: true,
        };
        let ctx = RenderContext::new(&bracketed, today());

        let elements = ElementRenderer::render_field(&field, &ctx);
        assert_eq!(elements.len(), 3);
        assert!(matches!(&elements[0], CardElement::TextBlock(b) if b.text == "[descriptionLabel] *"));
        assert!(matches!(&elements[1], CardElement::Input(i) if i.value.is_none() && i.required));
        match &elements[2] {
            CardElement::TextBlock(block) => {
                assert!(block.is_validation_marker());
                assert_eq!(block.text, "[RequiredFieldValidationText]");
            }
            other => panic!("expected marker, got {other:?}"),
        }
    }

    #[test]
    fn prefilled_value_keeps_its_whitespace() {
        let field_descriptor = descriptor("description", FieldType::MultilineText, true);
        let field = AnnotatedField {
            descriptor: &field_descriptor,
            value: "  indented first line\nsecond line\n".into(),
            validation_failed: false,
        };
        let ctx = RenderContext::new(&bracketed, today());

        let elements = ElementRenderer::render_field(&field, &ctx);
        assert!(matches!(
            &elements[1],
            CardElement::Input(i) if i.value.as_deref() == Some("  indented first line\nsecond line\n")
        ));
    }

    #[test]
    fn choice_labels_are_localized_but_values_stay_raw() {
        let mut field_descriptor = descriptor("category", FieldType::Choice, false);
        field_descriptor.choices = vec![
            ChoiceOption {
                value: text("Hardware"),
                label_key: text("HardwareChoice"),
            },
            ChoiceOption {
                value: text("Software"),
                label_key: text("SoftwareChoice"),
            },
        ];
        let field = AnnotatedField {
            descriptor: &field_descriptor,
            value: "Software".into(),
            validation_failed: false,
        };
        let ctx = RenderContext::new(&bracketed, today());

        let elements = ElementRenderer::render_field(&field, &ctx);
        match &elements[1] {
            CardElement::Input(Input {
                value,
                kind: InputKind::Choice { choices, placeholder },
                ..
            }) => {
                assert_eq!(value.as_deref(), Some("Software"));
                assert_eq!(placeholder, "[ChoicePlaceholderText]");
                assert_eq!(
                    choices,
                    &vec![
                        Choice {
                            title: "[HardwareChoice]".into(),
                            value: "Hardware".into()
                        },
                        Choice {
                            title: "[SoftwareChoice]".into(),
                            value: "Software".into()
                        },
                    ]
                );
            }
            other => panic!("expected choice input, got {other:?}"),
        }
    }

    #[test]
    fn date_field_is_capped_at_today_and_uses_date_marker() {
        let field_descriptor = descriptor("issue_occurred_on", FieldType::Date, false);
        let field = AnnotatedField {
            descriptor: &field_descriptor,
            value: "2030-01-01".into(),
            validation_failed: true,
        };
        let ctx = RenderContext::new(&bracketed, today());

        let elements = ElementRenderer::render_field(&field, &ctx);
        assert!(matches!(
            &elements[1],
            CardElement::Input(Input { kind: InputKind::Date { max }, .. }) if max == "2026-10-16"
        ));
        assert!(matches!(
            &elements[2],
            CardElement::TextBlock(b) if b.text == "[DateValidationText]"
        ));
    }

    #[test]
    fn empty_column_value_is_kept() {
        let element = ElementRenderer::render_column_pair("Request type", None);
        assert_eq!(
            element,
            CardElement::ColumnPair(ColumnPair {
                label: "Request type".into(),
                value: String::new(),
            })
        );
    }
}
