//! Button element

use super::{action_id_length, InteractiveElement};
use crate::objects::{ConfirmObject, PlainText};
use blockkit_core::{
    optional_within_length, run_validators, within_length, Attributes, FormationError, JsonObject,
    Validator,
};
use rand::Rng;
use std::fmt;

/// Accepted button styles
pub const BUTTON_STYLES: &[&str] = &["primary", "danger"];

/// Length of the generated `action_id` of a link button
const LINK_ACTION_ID_LENGTH: usize = 16;

/// Visual emphasis of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    /// Green call to action
    Primary,
    /// Red destructive action
    Danger,
}

impl ButtonStyle {
    /// Wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ButtonStyle> for String {
    fn from(style: ButtonStyle) -> Self {
        style.as_str().to_string()
    }
}

/// Interactive button, optionally opening a url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonElement {
    /// Button label
    pub text: PlainText,
    /// Interaction identifier
    pub action_id: String,
    /// URL opened in the user's browser on click
    pub url: Option<String>,
    /// Value sent with the interaction payload
    pub value: Option<String>,
    /// `primary` or `danger`
    pub style: Option<String>,
    /// Confirmation dialog shown before firing
    pub confirm: Option<ConfirmObject>,
}

impl ButtonElement {
    /// Maximum label length
    pub const TEXT_MAX_LENGTH: usize = 300;
    /// Maximum url length
    pub const URL_MAX_LENGTH: usize = 3000;
    /// Maximum value length
    pub const VALUE_MAX_LENGTH: usize = 2000;

    /// Create button
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<PlainText>, action_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action_id: action_id.into(),
            url: None,
            value: None,
            style: None,
            confirm: None,
        }
    }

    /// Button that only opens `url`
    ///
    /// The interaction payload is still sent, so the `action_id` is a random
    /// 16-letter uppercase string and the value is empty.
    #[must_use]
    pub fn link(text: impl Into<PlainText>, url: impl Into<String>) -> Self {
        let mut rng = rand::rng();
        let action_id: String = (0..LINK_ACTION_ID_LENGTH)
            .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
            .collect();
        Self::new(text, action_id).with_url(url).with_value("")
    }

    /// With url
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// With value
    #[inline]
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// With style; accepts [`ButtonStyle`] or a raw string
    #[inline]
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
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

impl ButtonElement {
    fn style_value(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

impl InteractiveElement for ButtonElement {
    fn action_id(&self) -> &str {
        &self.action_id
    }
}

validator_table!(VALIDATORS: ButtonElement => [
    action_id_length(),
    Validator::new(
        "text_length",
        format!("text attribute cannot exceed {} characters", ButtonElement::TEXT_MAX_LENGTH),
        |b: &ButtonElement| within_length(b.text.text(), ButtonElement::TEXT_MAX_LENGTH),
    ),
    Validator::new(
        "url_length",
        format!("url attribute cannot exceed {} characters", ButtonElement::URL_MAX_LENGTH),
        |b: &ButtonElement| optional_within_length(b.url.as_deref(), ButtonElement::URL_MAX_LENGTH),
    ),
    Validator::new(
        "value_length",
        format!("value attribute cannot exceed {} characters", ButtonElement::VALUE_MAX_LENGTH),
        |b: &ButtonElement| {
            optional_within_length(b.value.as_deref(), ButtonElement::VALUE_MAX_LENGTH)
        },
    ),
    Validator::one_of("style_valid", "style", BUTTON_STYLES, ButtonElement::style_value),
]);

impl JsonObject for ButtonElement {
    fn object_name(&self) -> &'static str {
        "ButtonElement"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "button")
            .object("text", &self.text)
            .field("action_id", &self.action_id)
            .field("url", &self.url)
            .field("value", &self.value)
            .field("style", &self.style)
            .optional_object("confirm", self.confirm.as_ref())
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}
