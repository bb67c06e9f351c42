//! Channel-agnostic card tree.
//!
//! Every node is one variant of the closed [`CardElement`] enum, so rendering code is checked
//! exhaustively at compile time. The tree serializes with a `type` tag per node; turning it
//! into a concrete chat protocol is the transport's job.

use serde::Serialize;
use uuid::Uuid;

/// A finished card: body elements followed by action elements, in reading order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardPayload {
    pub version: String,
    elements: Vec<CardElement>,
}

impl CardPayload {
    pub(crate) fn new(version: impl Into<String>, elements: Vec<CardElement>) -> Self {
        Self {
            version: version.into(),
            elements,
        }
    }

    /// All elements in reading order.
    pub fn elements(&self) -> &[CardElement] {
        &self.elements
    }

    /// Non-action elements.
    pub fn body(&self) -> impl Iterator<Item = &CardElement> {
        self.elements
            .iter()
            .filter(|e| !matches!(e, CardElement::Action(_)))
    }

    pub fn actions(&self) -> impl Iterator<Item = &CardAction> {
        self.elements.iter().filter_map(|e| match e {
            CardElement::Action(action) => Some(action),
            _ => None,
        })
    }

    /// Number of inline validation markers in the body.
    pub fn validation_marker_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, CardElement::TextBlock(block) if block.is_validation_marker()))
            .count()
    }
}

/// One node of the card tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardElement {
    TextBlock(TextBlock),
    Input(Input),
    ColumnPair(ColumnPair),
    Action(CardAction),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub text: String,
    pub weight: TextWeight,
    pub size: TextSize,
    pub color: TextColor,
    pub spacing: Spacing,
    pub wrap: bool,
}

impl TextBlock {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: TextWeight::Default,
            size: TextSize::Default,
            color: TextColor::Default,
            spacing: Spacing::Default,
            wrap: true,
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self {
            weight: TextWeight::Bolder,
            size: TextSize::Large,
            wrap: false,
            ..Self::plain(text)
        }
    }

    /// Attention-coloured text placed directly after a field that failed validation.
    pub fn validation_marker(text: impl Into<String>) -> Self {
        Self {
            color: TextColor::Attention,
            spacing: Spacing::Small,
            ..Self::plain(text)
        }
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn is_validation_marker(&self) -> bool {
        self.color == TextColor::Attention
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextWeight {
    Default,
    Bolder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    Default,
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextColor {
    Default,
    Attention,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    Default,
    None,
    Small,
}

/// An input bound to a template field id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Input {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub required: bool,
    #[serde(flatten)]
    pub kind: InputKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum InputKind {
    Text {
        multiline: bool,
    },
    Choice {
        placeholder: String,
        choices: Vec<Choice>,
    },
    Date {
        /// Latest selectable date (`YYYY-MM-DD`).
        max: String,
    },
}

/// A choice option: localized `title` for display, raw `value` for data binding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub title: String,
    pub value: String,
}

/// Read-only label/value row. Both cells are always present so columns stay aligned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnPair {
    pub label: String,
    pub value: String,
}

/// An interactive action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CardAction {
    Submit {
        title: String,
        command: ActionCommand,
        /// Opaque payload interpreted by the conversation on the other side.
        #[serde(skip_serializing_if = "Option::is_none")]
        payload: Option<String>,
        behaviour: SubmitBehaviour,
    },
    /// Reveals an independently assembled sub-card.
    ShowCard {
        title: String,
        card: Box<CardPayload>,
    },
}

impl CardAction {
    pub fn title(&self) -> &str {
        match self {
            CardAction::Submit { title, .. } | CardAction::ShowCard { title, .. } => title,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ActionCommand {
    #[serde(rename = "edit")]
    Edit,
    #[serde(rename = "withdraw")]
    Withdraw,
    #[serde(rename = "new-request")]
    NewRequest,
}

impl ActionCommand {
    /// Payload carried by ticket-scoped commands.
    pub fn ticket_payload(ticket_id: Uuid) -> Option<String> {
        Some(ticket_id.to_string())
    }
}

/// How the host should deliver a submit action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmitBehaviour {
    /// Post the action data back to the conversation without echoing any text.
    Post,
    /// Open a task module (dialog) in the host.
    TaskFetch,
    /// Post `text` back into the conversation as if the user had typed it.
    MessageBack { text: String },
}
