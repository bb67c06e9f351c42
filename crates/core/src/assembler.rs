//! Card compositions.
//!
//! Two compositions exist:
//! - new ticket: title, the template-driven field block (when enabled), then the notice;
//! - ticket detail: confirmation title, descriptive text, the fixed labeled rows
//!   (request number, category, request type), the dynamic rows, the description, then the
//!   edit / withdraw / new-request actions.
//!
//! Element order is the visible reading order and never varies between calls. Each call builds
//! a fresh tree; the template and ticket are only read.

use std::collections::BTreeSet;

use uuid::Uuid;

use crate::config::CardConfig;
use crate::constants::{
    CATEGORY_FIELD_ID, CATEGORY_TYPE_TEXT, DESCRIPTION_FIELD_ID, DESCRIPTION_TEXT,
    EDIT_TICKET_ACTION_TEXT, FIRST_OBSERVED_TEXT, ISSUE_OCCURRED_ON_FIELD_ID,
    NEW_REQUEST_BUTTON_TEXT, NEW_REQUEST_NOTICE_TEXT, NEW_REQUEST_TITLE, REQUEST_NUMBER_TEXT,
    REQUEST_SUBMITTED_CONTENT, REQUEST_SUBMITTED_TEXT, REQUEST_TYPE_FIELD_ID, REQUEST_TYPE_TEXT,
    REQUEST_UPDATED_TEXT, WITHDRAW_REQUEST_ACTION_TEXT,
};
use crate::elements::{
    ActionCommand, CardAction, CardElement, CardPayload, Spacing, SubmitBehaviour, TextBlock,
};
use crate::renderer::{ElementRenderer, RenderContext};
use crate::template::CompiledTemplate;
use crate::ticket::TicketDetail;
use crate::values::TicketValues;
use crate::withdraw;
use crate::{CardError, CardResult};

/// Field ids shown in the fixed part of the detail card rather than the dynamic block.
const FIXED_DETAIL_FIELD_IDS: [&str; 3] =
    [CATEGORY_FIELD_ID, REQUEST_TYPE_FIELD_ID, DESCRIPTION_FIELD_ID];

/// Which confirmation the detail card announces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailOutcome {
    Submitted,
    Edited,
}

/// Composes rendered fields and fixed chrome into complete cards.
#[derive(Clone, Debug, Default)]
pub struct CardAssembler {
    config: CardConfig,
}

impl CardAssembler {
    pub fn new(config: CardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Build the "create ticket" card.
    ///
    /// `ticket` pre-fills the form. With `show_validation` the fields are annotated against
    /// the ticket's current values, which makes the ticket mandatory.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MissingTicketState`] if `show_validation` is set without a ticket.
    pub fn new_ticket_card(
        &self,
        template: &CompiledTemplate,
        ticket: Option<&TicketDetail>,
        show_validation: bool,
        ctx: &RenderContext<'_>,
    ) -> CardResult<CardPayload> {
        if show_validation && ticket.is_none() {
            return Err(CardError::MissingTicketState);
        }

        let mut elements = vec![CardElement::TextBlock(TextBlock::title(
            ctx.localize(NEW_REQUEST_TITLE),
        ))];

        if self.config.include_dynamic_fields() {
            let values = ticket
                .map(TicketValues::from_ticket_lenient)
                .unwrap_or_default();
            let annotated = ctx
                .annotator()
                .annotate(template.fields(), &values, show_validation);
            for field in &annotated {
                elements.extend(ElementRenderer::render_field(field, ctx));
            }
        }

        elements.push(CardElement::TextBlock(
            TextBlock::plain(ctx.localize(NEW_REQUEST_NOTICE_TEXT)).with_spacing(Spacing::Small),
        ));

        let card = CardPayload::new(self.config.card_version(), elements);
        tracing::debug!(
            fields = template.len(),
            show_validation,
            markers = card.validation_marker_count(),
            "assembled new ticket card"
        );
        Ok(card)
    }

    /// Build the confirmation card shown after a ticket was submitted or edited.
    ///
    /// A malformed additional-properties payload is logged and the dynamic block falls back
    /// to the ticket's scalar fields.
    pub fn ticket_detail_card(
        &self,
        template: &CompiledTemplate,
        ticket: &TicketDetail,
        outcome: DetailOutcome,
        ctx: &RenderContext<'_>,
    ) -> CardPayload {
        let values = TicketValues::from_ticket_lenient(ticket);

        let title_key = match outcome {
            DetailOutcome::Submitted => REQUEST_SUBMITTED_TEXT,
            DetailOutcome::Edited => REQUEST_UPDATED_TEXT,
        };

        let request_number = format!("#{}", ticket.request_number);

        let mut elements = vec![
            CardElement::TextBlock(TextBlock::title(ctx.localize(title_key))),
            CardElement::TextBlock(
                TextBlock::plain(ctx.localize(REQUEST_SUBMITTED_CONTENT))
                    .with_spacing(Spacing::None),
            ),
            ElementRenderer::render_column_pair(
                ctx.localize(REQUEST_NUMBER_TEXT),
                Some(request_number.as_str()),
            ),
            ElementRenderer::render_column_pair(
                ctx.localize(CATEGORY_TYPE_TEXT),
                ticket.category.as_deref(),
            ),
            ElementRenderer::render_column_pair(
                ctx.localize(REQUEST_TYPE_TEXT),
                ticket.request_type.as_deref(),
            ),
        ];

        elements.extend(dynamic_detail_rows(template, &values, ctx));

        elements.push(ElementRenderer::render_column_pair(
            ctx.localize(DESCRIPTION_TEXT),
            ticket.description.as_deref(),
        ));

        elements.extend(self.detail_actions(ticket.ticket_id, ctx));

        let card = CardPayload::new(self.config.card_version(), elements);
        tracing::debug!(
            ticket_id = %ticket.ticket_id,
            ?outcome,
            elements = card.elements().len(),
            "assembled ticket detail card"
        );
        card
    }

    /// Build the withdraw confirmation card on its own.
    pub fn withdraw_confirmation_card(
        &self,
        ticket_id: Uuid,
        ctx: &RenderContext<'_>,
    ) -> CardPayload {
        withdraw::confirmation_card(self.config.card_version(), ticket_id, ctx)
    }

    fn detail_actions(&self, ticket_id: Uuid, ctx: &RenderContext<'_>) -> [CardElement; 3] {
        let new_request_text = ctx.localize(NEW_REQUEST_BUTTON_TEXT);
        [
            CardElement::Action(CardAction::Submit {
                title: ctx.localize(EDIT_TICKET_ACTION_TEXT),
                command: ActionCommand::Edit,
                payload: ActionCommand::ticket_payload(ticket_id),
                behaviour: SubmitBehaviour::TaskFetch,
            }),
            CardElement::Action(CardAction::ShowCard {
                title: ctx.localize(WITHDRAW_REQUEST_ACTION_TEXT),
                card: Box::new(self.withdraw_confirmation_card(ticket_id, ctx)),
            }),
            CardElement::Action(CardAction::Submit {
                title: new_request_text.clone(),
                command: ActionCommand::NewRequest,
                payload: None,
                behaviour: SubmitBehaviour::MessageBack {
                    text: new_request_text,
                },
            }),
        ]
    }
}

/// Rows for template fields outside the fixed block, then for additional properties the
/// template does not describe.
fn dynamic_detail_rows(
    template: &CompiledTemplate,
    values: &TicketValues,
    ctx: &RenderContext<'_>,
) -> Vec<CardElement> {
    let mut rows = Vec::new();
    let mut described = BTreeSet::new();

    for field in template.fields() {
        let id = field.id.as_str();
        described.insert(id);
        if FIXED_DETAIL_FIELD_IDS.contains(&id) {
            continue;
        }
        rows.push(ElementRenderer::render_column_pair(
            ctx.localize(field.label_key.as_str()),
            values.get(id),
        ));
    }

    for (key, value) in values.additional_properties() {
        if described.contains(key) || FIXED_DETAIL_FIELD_IDS.contains(&key) {
            continue;
        }
        let label = if key == ISSUE_OCCURRED_ON_FIELD_ID {
            ctx.localize(FIRST_OBSERVED_TEXT)
        } else {
            key.to_string()
        };
        rows.push(ElementRenderer::render_column_pair(label, Some(value)));
    }

    rows
}
