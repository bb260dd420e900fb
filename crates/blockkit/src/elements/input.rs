//! Plain-text input element

use super::{action_id_length, placeholder_length, InteractiveElement, Placeholder};
use crate::objects::PlainText;
use blockkit_core::{run_validators, Attributes, FormationError, JsonObject, Validator};

/// Free-text field; only valid inside an input block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainTextInputElement {
    /// Interaction identifier
    pub action_id: String,
    /// Text shown while empty
    pub placeholder: Option<PlainText>,
    /// Prefilled value
    pub initial_value: Option<String>,
    /// Render as a multi-line text area
    pub multiline: Option<bool>,
    /// Minimum accepted length
    pub min_length: Option<u32>,
    /// Maximum accepted length
    pub max_length: Option<u32>,
}

impl PlainTextInputElement {
    /// Largest accepted `min_length`
    pub const MIN_LENGTH_MAX: u32 = 3000;

    /// Create input
    #[inline]
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            initial_value: None,
            multiline: None,
            min_length: None,
            max_length: None,
        }
    }

    /// With placeholder
    #[inline]
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<PlainText>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// With prefilled value
    #[inline]
    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// With multi-line flag
    #[inline]
    #[must_use]
    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = Some(multiline);
        self
    }

    /// With minimum length
    #[inline]
    #[must_use]
    pub fn with_min_length(mut self, min_length: u32) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// With maximum length
    #[inline]
    #[must_use]
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl InteractiveElement for PlainTextInputElement {
    fn action_id(&self) -> &str {
        &self.action_id
    }
}

impl Placeholder for PlainTextInputElement {
    fn placeholder(&self) -> Option<&PlainText> {
        self.placeholder.as_ref()
    }
}

validator_table!(VALIDATORS: PlainTextInputElement => [
    action_id_length(),
    placeholder_length(),
    Validator::new(
        "min_length_limit",
        format!("min_length cannot exceed {}", PlainTextInputElement::MIN_LENGTH_MAX),
        |e: &PlainTextInputElement| e.min_length.map_or(true, |min| min <= PlainTextInputElement::MIN_LENGTH_MAX),
    ),
    Validator::new(
        "min_length_not_above_max_length",
        "min_length cannot be greater than max_length",
        |e: &PlainTextInputElement| match (e.min_length, e.max_length) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        },
    ),
]);

impl JsonObject for PlainTextInputElement {
    fn object_name(&self) -> &'static str {
        "PlainTextInputElement"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "plain_text_input")
            .field("action_id", &self.action_id)
            .optional_object("placeholder", self.placeholder.as_ref())
            .field("initial_value", &self.initial_value)
            .field("multiline", self.multiline)
            .field("min_length", self.min_length)
            .field("max_length", self.max_length)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}
