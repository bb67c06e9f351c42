//! Field-level validation annotations.
//!
//! The annotator derives, per field, whether a validation marker must be shown. It reads the
//! ticket values and never changes them.
//!
//! Rules in validation mode:
//! - text, multiline text and choice fields fail when required and blank;
//! - date fields fail when the value is absent, is the zero sentinel (`0001-01-01`), cannot
//!   be read as a date, or lies strictly after today. Date fields record when something
//!   already happened, so they are checked whether or not the template marks them required.
//!
//! Dates are compared as UTC calendar dates. `YYYY-MM-DD` values are taken as-is; RFC 3339
//! values are converted to UTC before the date is taken.

use chrono::{DateTime, NaiveDate, Utc};
use ticket_types::is_blank;

use crate::constants::DATE_FORMAT;
use crate::template::{FieldDescriptor, FieldType};
use crate::values::TicketValues;

/// A field descriptor paired with its current value and validation outcome.
///
/// Created fresh for each render; borrows the descriptor from the compiled template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedField<'a> {
    pub descriptor: &'a FieldDescriptor,
    /// Current value; empty when the ticket has none.
    pub value: String,
    pub validation_failed: bool,
}

/// Computes validation annotations against a fixed "today".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationAnnotator {
    today: NaiveDate,
}

impl ValidationAnnotator {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Annotate `fields` in order.
    ///
    /// With `show_validation` false (first display of a form) no field is flagged.
    pub fn annotate<'a>(
        &self,
        fields: &'a [FieldDescriptor],
        values: &TicketValues,
        show_validation: bool,
    ) -> Vec<AnnotatedField<'a>> {
        fields
            .iter()
            .map(|descriptor| {
                let value = values.get(descriptor.id.as_str());
                AnnotatedField {
                    descriptor,
                    value: value.unwrap_or_default().to_string(),
                    validation_failed: show_validation && self.field_fails(descriptor, value),
                }
            })
            .collect()
    }

    fn field_fails(&self, descriptor: &FieldDescriptor, value: Option<&str>) -> bool {
        match descriptor.field_type {
            FieldType::Text | FieldType::MultilineText | FieldType::Choice => {
                descriptor.required && is_blank(value)
            }
            FieldType::Date => self.date_fails(value),
        }
    }

    /// Returns `true` when `value` is not an acceptable past-or-present date.
    pub fn date_fails(&self, value: Option<&str>) -> bool {
        match value.and_then(parse_date_value) {
            None => true,
            Some(date) => is_zero_sentinel(date) || date > self.today,
        }
    }
}

/// Read a stored date value as a UTC calendar date.
pub fn parse_date_value(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

fn is_zero_sentinel(date: NaiveDate) -> bool {
    NaiveDate::from_ymd_opt(1, 1, 1).map_or(false, |zero| date <= zero)
}
