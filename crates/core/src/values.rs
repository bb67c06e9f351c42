//! Field values of a ticket.
//!
//! The additional-properties payload is stored as a serialized JSON object. Values are
//! strings, though numbers and booleans written by older clients are accepted and kept in
//! their JSON text form.
//! [`FieldValueStore`] is the only place that payload is encoded or decoded; everything else
//! works on the typed [`FieldValues`] mapping.
//!
//! Round-trip law: for every mapping `m`, `load(save(m)) == m`. `BTreeMap` keeps key order
//! stable, so `save` is also deterministic.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::constants::{
    CATEGORY_FIELD_ID, DATE_FORMAT, DESCRIPTION_FIELD_ID, ISSUE_OCCURRED_ON_FIELD_ID,
    REQUEST_TYPE_FIELD_ID,
};
use crate::ticket::TicketDetail;
use crate::{CardError, CardResult};

/// Typed additional-properties mapping (field id -> value).
pub type FieldValues = BTreeMap<String, String>;

/// Encode/decode operations for the additional-properties payload.
///
/// This is a zero-sized type used for namespacing; all methods are associated functions.
pub struct FieldValueStore;

impl FieldValueStore {
    /// Decode a serialized additional-properties payload.
    ///
    /// An absent, empty or whitespace-only payload (and a JSON `null`) decodes to an empty
    /// mapping.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MalformedData`] if the payload is not a JSON object, or if any
    /// value is `null`, an array or a nested object.
    pub fn load(serialized: Option<&str>) -> CardResult<FieldValues> {
        let serialized = match serialized.map(str::trim) {
            None | Some("") => return Ok(FieldValues::new()),
            Some(s) => s,
        };

        let decoded: Option<BTreeMap<String, StoredValue>> =
            serde_json::from_str(serialized).map_err(CardError::MalformedData)?;
        Ok(decoded
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, value.into_text()))
            .collect())
    }

    /// Encode a mapping as a JSON object with keys in sorted order.
    pub fn save(values: &FieldValues) -> String {
        let object: serde_json::Map<String, serde_json::Value> = values
            .iter()
            .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
            .collect();
        serde_json::Value::Object(object).to_string()
    }
}

/// A single stored property value.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl StoredValue {
    fn into_text(self) -> String {
        match self {
            StoredValue::Text(text) => text,
            StoredValue::Number(number) => number.to_string(),
            StoredValue::Flag(flag) => flag.to_string(),
        }
    }
}

/// Current values of a ticket keyed by field id.
///
/// Built fresh for each render and only ever read by the annotator and renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketValues {
    values: FieldValues,
    /// Keys decoded from the additional-properties payload.
    additional_keys: BTreeSet<String>,
}

impl TicketValues {
    /// Values with nothing filled in (first display of the new-ticket form).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Values that all count as additional properties.
    pub fn from_values(values: FieldValues) -> Self {
        let additional_keys = values.keys().cloned().collect();
        Self {
            values,
            additional_keys,
        }
    }

    /// Build values from a ticket's scalars and its additional properties.
    ///
    /// The well-known scalars are stored under their fixed field ids. When an additional
    /// property uses the same id, the scalar wins.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MalformedData`] if the additional properties cannot be decoded.
    pub fn from_ticket(ticket: &TicketDetail) -> CardResult<Self> {
        let mut values = FieldValueStore::load(ticket.additional_properties.as_deref())?;
        let additional_keys = values.keys().cloned().collect();
        values.extend(scalar_values(ticket));
        Ok(Self {
            values,
            additional_keys,
        })
    }

    /// Like [`TicketValues::from_ticket`], but a malformed payload is logged and treated as
    /// empty.
    pub fn from_ticket_lenient(ticket: &TicketDetail) -> Self {
        match Self::from_ticket(ticket) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    ticket_id = %ticket.ticket_id,
                    "ignoring additional properties: {}",
                    e
                );
                Self {
                    values: scalar_values(ticket).collect(),
                    additional_keys: BTreeSet::new(),
                }
            }
        }
    }

    /// Returns the raw value for `id`, if any.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Iterate over all values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate, in key order, over the keys stored as additional properties.
    ///
    /// A key shared with a well-known scalar yields the scalar's value.
    pub fn additional_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(key, _)| self.additional_keys.contains(*key))
    }
}

fn scalar_values(ticket: &TicketDetail) -> impl Iterator<Item = (String, String)> {
    let occurred_on = ticket
        .issue_occurred_on
        .map(|date| date.format(DATE_FORMAT).to_string());

    [
        (CATEGORY_FIELD_ID, ticket.category.clone()),
        (REQUEST_TYPE_FIELD_ID, ticket.request_type.clone()),
        (DESCRIPTION_FIELD_ID, ticket.description.clone()),
        (ISSUE_OCCURRED_ON_FIELD_ID, occurred_on),
    ]
    .into_iter()
    .filter_map(|(id, value)| value.map(|v| (id.to_string(), v)))
}
