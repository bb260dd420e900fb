//! Overflow menu element

use super::{action_id_length, to_block_form, InteractiveElement};
use crate::objects::{ConfirmObject, OptionObject};
use blockkit_core::{
    run_validators, Attributes, Format, FormationError, JsonMap, JsonObject, Validator,
};

/// Compact "…" button revealing a short list of options
///
/// Options may carry a `url` to act as plain links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowMenuElement {
    /// Interaction identifier
    pub action_id: String,
    /// Menu entries
    pub options: Vec<OptionObject>,
    /// Confirmation dialog shown after a pick
    pub confirm: Option<ConfirmObject>,
}

impl OverflowMenuElement {
    /// Minimum number of options
    pub const OPTIONS_MIN_LENGTH: usize = 2;
    /// Maximum number of options
    pub const OPTIONS_MAX_LENGTH: usize = 5;

    /// Create overflow menu
    #[inline]
    #[must_use]
    pub fn new(action_id: impl Into<String>, options: Vec<OptionObject>) -> Self {
        Self {
            action_id: action_id.into(),
            options,
            confirm: None,
        }
    }

    /// With confirmation dialog
    #[inline]
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmObject) -> Self {
        self.confirm = Some(confirm);
        self
    }
}

impl InteractiveElement for OverflowMenuElement {
    fn action_id(&self) -> &str {
        &self.action_id
    }
}

validator_table!(VALIDATORS: OverflowMenuElement => [
    action_id_length(),
    Validator::new(
        "options_length",
        format!(
            "options attribute must have between {} and {} items",
            OverflowMenuElement::OPTIONS_MIN_LENGTH,
            OverflowMenuElement::OPTIONS_MAX_LENGTH
        ),
        |o: &OverflowMenuElement| {
            (OverflowMenuElement::OPTIONS_MIN_LENGTH..=OverflowMenuElement::OPTIONS_MAX_LENGTH)
                .contains(&o.options.len())
        },
    ),
]);

impl JsonObject for OverflowMenuElement {
    fn object_name(&self) -> &'static str {
        "OverflowMenuElement"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "overflow")
            .field("action_id", &self.action_id)
            .objects("options", &self.options)
            .optional_object("confirm", self.confirm.as_ref())
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }

    fn to_dict_as(&self, _format: Format) -> Result<JsonMap, FormationError> {
        to_block_form(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn options(count: usize) -> Vec<OptionObject> {
        (0..count)
            .map(|i| OptionObject::from_single_value(format!("option_{i}")))
            .collect()
    }

    #[test]
    fn json_form() {
        let overflow = OverflowMenuElement::new(
            "overflow",
            vec![
                OptionObject::from_single_value("one"),
                OptionObject::new("link", "two").with_url("http://google.com"),
            ],
        );
        assert_eq!(
            Value::Object(overflow.to_dict().unwrap()),
            json!({
                "type": "overflow",
                "action_id": "overflow",
                "options": [
                    {"text": {"type": "plain_text", "text": "one", "emoji": true}, "value": "one"},
                    {
                        "text": {"type": "plain_text", "text": "link", "emoji": true},
                        "value": "two",
                        "url": "http://google.com",
                    },
                ],
            })
        );
    }

    #[test]
    fn options_bounds() {
        assert!(OverflowMenuElement::new("o", options(1)).to_dict().is_err());
        assert!(OverflowMenuElement::new("o", options(2)).to_dict().is_ok());
        assert!(OverflowMenuElement::new("o", options(5)).to_dict().is_ok());
        let err = OverflowMenuElement::new("o", options(6)).to_dict().unwrap_err();
        assert_eq!(err.message(), "options attribute must have between 2 and 5 items");
    }
}
