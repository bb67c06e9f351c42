//! Withdraw confirmation sub-card.

use uuid::Uuid;

use crate::constants::{WITHDRAW_CONFIRMATION_TEXT, WITHDRAW_CONFIRM_ACTION_TEXT};
use crate::elements::{
    ActionCommand, CardAction, CardElement, CardPayload, SubmitBehaviour, TextBlock,
};
use crate::renderer::RenderContext;

/// Build the card revealed by the detail card's withdraw action.
///
/// Assembled on its own so it can be embedded, or sent standalone by a host that asks
/// for confirmation in a separate message.
pub fn confirmation_card(version: &str, ticket_id: Uuid, ctx: &RenderContext<'_>) -> CardPayload {
    CardPayload::new(
        version,
        vec![
            CardElement::TextBlock(TextBlock::plain(ctx.localize(WITHDRAW_CONFIRMATION_TEXT))),
            CardElement::Action(CardAction::Submit {
                title: ctx.localize(WITHDRAW_CONFIRM_ACTION_TEXT),
                command: ActionCommand::Withdraw,
                payload: ActionCommand::ticket_payload(ticket_id),
                behaviour: SubmitBehaviour::Post,
            }),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn carries_ticket_id_in_withdraw_action() {
        let ticket_id = Uuid::parse_str("a4f91c6d-3b2e-4c5f-9d7a-1e8b6c0a9f12").expect("uuid");
        let localize = |key: &str| key.to_string();
        let ctx = RenderContext::new(&localize, NaiveDate::from_ymd_opt(2026, 10, 16).expect("date"));

        let card = confirmation_card("1.2", ticket_id, &ctx);
        assert_eq!(card.version, "1.2");
        assert_eq!(card.body().count(), 1);

        let actions: Vec<&CardAction> = card.actions().collect();
        assert_eq!(actions.len(), 1);
        match actions[0] {
            CardAction::Submit {
                command, payload, ..
            } => {
                assert_eq!(*command, ActionCommand::Withdraw);
                assert_eq!(
                    payload.as_deref(),
                    Some("a4f91c6d-3b2e-4c5f-9d7a-1e8b6c0a9f12")
                );
            }
            other => panic!("expected submit action, got {other:?}"),
        }
    }
}
