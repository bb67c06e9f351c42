/// Errors raised while building ticket cards.
///
/// `MalformedData` is the only recoverable variant: callers that can live without the
/// additional properties treat them as empty. Every other variant aborts the render, and the
/// caller must not present a partially assembled card.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("malformed additional properties: {0}")]
    MalformedData(#[source] serde_json::Error),
    #[error("invalid field template: {0}")]
    InvalidTemplate(String),
    #[error("validation was requested without a ticket state")]
    MissingTicketState,
    #[error("unsupported field type '{0}'")]
    UnsupportedFieldType(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type CardResult<T> = std::result::Result<T, CardError>;
