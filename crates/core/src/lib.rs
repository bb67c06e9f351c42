//! # Ticket cards core
//!
//! Renders support-ticket cards for a chat interface from an administrator-configured field
//! template and the current state of a ticket.
//!
//! Pipeline:
//! - [`FieldValueStore`] decodes the ticket's additional properties;
//! - [`TemplateCompiler`] validates a stored [`FieldTemplate`];
//! - [`ValidationAnnotator`] decides per field whether a validation marker is shown;
//! - [`ElementRenderer`] turns annotated fields into [`CardElement`]s;
//! - [`CardAssembler`] adds titles, notices and actions and returns a [`CardPayload`].
//!
//! Rendering is synchronous and keeps no state between calls. Localization and "today" are
//! passed in through a [`RenderContext`].
//!
//! **No transport concerns**: delivering cards to a chat channel, storing tickets and
//! deciding which card to show belong to the host.

pub mod assembler;
pub mod config;
pub mod constants;
pub mod elements;
mod error;
pub mod localization;
pub mod renderer;
pub mod template;
pub mod ticket;
pub mod validation;
pub mod values;
pub mod withdraw;

pub use assembler::{CardAssembler, DetailOutcome};
pub use config::CardConfig;
pub use elements::{
    ActionCommand, CardAction, CardElement, CardPayload, Choice, ColumnPair, Input, InputKind,
    SubmitBehaviour, TextBlock,
};
pub use error::{CardError, CardResult};
pub use localization::{Localizer, StringTable};
pub use renderer::{ElementRenderer, RenderContext};
pub use template::{
    CompiledTemplate, FieldDefinition, FieldDescriptor, FieldTemplate, FieldType,
    TemplateCompiler,
};
pub use ticket::TicketDetail;
pub use validation::{AnnotatedField, ValidationAnnotator};
pub use values::{FieldValueStore, FieldValues, TicketValues};
