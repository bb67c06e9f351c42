//! Constants used throughout the ticket cards core crate.
//!
//! Field ids of the well-known ticket scalars and every localization key the core
//! resolves live here so that string tables can be checked against one list.

/// Default card schema version stamped on every payload.
pub const DEFAULT_CARD_VERSION: &str = "1.2";

/// Field id of the ticket category scalar.
pub const CATEGORY_FIELD_ID: &str = "category";

/// Field id of the request type scalar.
pub const REQUEST_TYPE_FIELD_ID: &str = "request_type";

/// Field id of the free-text description scalar.
pub const DESCRIPTION_FIELD_ID: &str = "description";

/// Field id of the "when did the issue first occur" scalar.
pub const ISSUE_OCCURRED_ON_FIELD_ID: &str = "issue_occurred_on";

/// Date format used for date values and date picker bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const NEW_REQUEST_TITLE: &str = "NewRequestTitle";
pub const NEW_REQUEST_NOTICE_TEXT: &str = "NewRequestNoticeText";
pub const REQUEST_SUBMITTED_TEXT: &str = "RequestSubmittedText";
pub const REQUEST_UPDATED_TEXT: &str = "RequestUpdatedText";
pub const REQUEST_SUBMITTED_CONTENT: &str = "RequestSubmittedContent";
pub const REQUEST_NUMBER_TEXT: &str = "RequestNumberText";
pub const CATEGORY_TYPE_TEXT: &str = "CategoryTypeText";
pub const REQUEST_TYPE_TEXT: &str = "RequestTypeText";
pub const DESCRIPTION_TEXT: &str = "DescriptionText";
pub const FIRST_OBSERVED_TEXT: &str = "FirstObservedText";
pub const EDIT_TICKET_ACTION_TEXT: &str = "EditTicketActionText";
pub const WITHDRAW_REQUEST_ACTION_TEXT: &str = "WithdrawRequestActionText";
pub const NEW_REQUEST_BUTTON_TEXT: &str = "NewRequestButtonText";
pub const WITHDRAW_CONFIRMATION_TEXT: &str = "WithdrawConfirmationText";
pub const WITHDRAW_CONFIRM_ACTION_TEXT: &str = "WithdrawConfirmActionText";
pub const REQUIRED_FIELD_VALIDATION_TEXT: &str = "RequiredFieldValidationText";
pub const DATE_VALIDATION_TEXT: &str = "DateValidationText";
pub const CHOICE_PLACEHOLDER_TEXT: &str = "ChoicePlaceholderText";

/// Every localization key the core may resolve.
pub const LOCALIZATION_KEYS: &[&str] = &[
    NEW_REQUEST_TITLE,
    NEW_REQUEST_NOTICE_TEXT,
    REQUEST_SUBMITTED_TEXT,
    REQUEST_UPDATED_TEXT,
    REQUEST_SUBMITTED_CONTENT,
    REQUEST_NUMBER_TEXT,
    CATEGORY_TYPE_TEXT,
    REQUEST_TYPE_TEXT,
    DESCRIPTION_TEXT,
    FIRST_OBSERVED_TEXT,
    EDIT_TICKET_ACTION_TEXT,
    WITHDRAW_REQUEST_ACTION_TEXT,
    NEW_REQUEST_BUTTON_TEXT,
    WITHDRAW_CONFIRMATION_TEXT,
    WITHDRAW_CONFIRM_ACTION_TEXT,
    REQUIRED_FIELD_VALIDATION_TEXT,
    DATE_VALIDATION_TEXT,
    CHOICE_PLACEHOLDER_TEXT,
];
