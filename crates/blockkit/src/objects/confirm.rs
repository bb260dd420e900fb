//! Confirmation dialog object

use super::text::{PlainText, TextObject};
use blockkit_core::{run_validators, within_length, Attributes, FormationError, JsonObject, Validator};

/// Confirmation dialog shown before an interactive element fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmObject {
    /// Dialog title
    pub title: PlainText,
    /// Explanatory body
    pub text: TextObject,
    /// Confirm button label
    pub confirm: PlainText,
    /// Deny button label
    pub deny: PlainText,
}

impl ConfirmObject {
    /// Maximum title length
    pub const TITLE_MAX_LENGTH: usize = 100;
    /// Maximum body length
    pub const TEXT_MAX_LENGTH: usize = 300;
    /// Maximum confirm/deny label length
    pub const LABEL_MAX_LENGTH: usize = 30;

    /// Create dialog with the default "Yes"/"No" buttons
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<PlainText>, text: impl Into<TextObject>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            confirm: PlainText::new("Yes"),
            deny: PlainText::new("No"),
        }
    }

    /// With confirm button label
    #[inline]
    #[must_use]
    pub fn with_confirm(mut self, confirm: impl Into<PlainText>) -> Self {
        self.confirm = confirm.into();
        self
    }

    /// With deny button label
    #[inline]
    #[must_use]
    pub fn with_deny(mut self, deny: impl Into<PlainText>) -> Self {
        self.deny = deny.into();
        self
    }
}

validator_table!(VALIDATORS: ConfirmObject => [
    Validator::new(
        "title_length",
        format!("title attribute cannot exceed {} characters", ConfirmObject::TITLE_MAX_LENGTH),
        |c: &ConfirmObject| within_length(c.title.text(), ConfirmObject::TITLE_MAX_LENGTH),
    ),
    Validator::new(
        "text_length",
        format!("text attribute cannot exceed {} characters", ConfirmObject::TEXT_MAX_LENGTH),
        |c: &ConfirmObject| within_length(c.text.text(), ConfirmObject::TEXT_MAX_LENGTH),
    ),
    Validator::new(
        "confirm_length",
        format!("confirm attribute cannot exceed {} characters", ConfirmObject::LABEL_MAX_LENGTH),
        |c: &ConfirmObject| within_length(c.confirm.text(), ConfirmObject::LABEL_MAX_LENGTH),
    ),
    Validator::new(
        "deny_length",
        format!("deny attribute cannot exceed {} characters", ConfirmObject::LABEL_MAX_LENGTH),
        |c: &ConfirmObject| within_length(c.deny.text(), ConfirmObject::LABEL_MAX_LENGTH),
    ),
]);

impl JsonObject for ConfirmObject {
    fn object_name(&self) -> &'static str {
        "ConfirmObject"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .object("title", &self.title)
            .object("text", &self.text)
            .object("confirm", &self.confirm)
            .object("deny", &self.deny)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}
