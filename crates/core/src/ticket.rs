//! Ticket state supplied by the ticket store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A support ticket as handed to the card assembler.
///
/// The well-known scalars are typed fields. Anything an administrator added through the
/// field template lives in `additional_properties` as a serialized key/value map, decoded
/// only through [`crate::FieldValueStore`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketDetail {
    /// Opaque identifier carried by edit and withdraw actions.
    pub ticket_id: Uuid,

    /// Human-facing request number (displayed as `#<number>`).
    pub request_number: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub request_type: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// When the issue was first observed.
    #[serde(default)]
    pub issue_occurred_on: Option<DateTime<Utc>>,

    /// Serialized additional-properties map (JSON object keyed by field id).
    #[serde(default)]
    pub additional_properties: Option<String>,
}
