//! Date picker element

use super::{action_id_length, placeholder_length, InteractiveElement, Placeholder};
use crate::objects::{ConfirmObject, PlainText};
use blockkit_core::{run_validators, Attributes, FormationError, JsonObject, Validator};
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("date regex")
});

/// Calendar date picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerElement {
    /// Interaction identifier
    pub action_id: String,
    /// Text shown before a date is picked
    pub placeholder: Option<PlainText>,
    /// Date selected on load, `YYYY-MM-DD`
    pub initial_date: Option<String>,
    /// Confirmation dialog shown after a pick
    pub confirm: Option<ConfirmObject>,
}

impl DatePickerElement {
    /// Create date picker
    #[inline]
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            initial_date: None,
            confirm: None,
        }
    }

    /// With placeholder
    #[inline]
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<PlainText>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// With initial date
    #[inline]
    #[must_use]
    pub fn with_initial_date(mut self, date: impl Into<String>) -> Self {
        self.initial_date = Some(date.into());
        self
    }

    /// With confirmation dialog
    #[inline]
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmObject) -> Self {
        self.confirm = Some(confirm);
        self
    }
}

impl InteractiveElement for DatePickerElement {
    fn action_id(&self) -> &str {
        &self.action_id
    }
}

impl Placeholder for DatePickerElement {
    fn placeholder(&self) -> Option<&PlainText> {
        self.placeholder.as_ref()
    }
}

validator_table!(VALIDATORS: DatePickerElement => [
    action_id_length(),
    placeholder_length(),
    Validator::new(
        "initial_date_valid",
        "initial_date attribute must be in format 'YYYY-MM-DD'",
        |d: &DatePickerElement| d.initial_date.as_deref().map_or(true, |date| DATE_RE.is_match(date)),
    ),
]);

impl JsonObject for DatePickerElement {
    fn object_name(&self) -> &'static str {
        "DatePickerElement"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "datepicker")
            .field("action_id", &self.action_id)
            .optional_object("placeholder", self.placeholder.as_ref())
            .field("initial_date", &self.initial_date)
            .optional_object("confirm", self.confirm.as_ref())
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}
