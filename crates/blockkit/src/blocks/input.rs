//! Input block

use super::{block_id_length, LayoutBlock};
use crate::elements::BlockElement;
use crate::objects::PlainText;
use blockkit_core::{
    optional_within_length, run_validators, within_length, Attributes, FormationError, JsonObject,
    Validator,
};

/// Labelled form field collecting user input in a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBlock {
    /// Block identifier
    pub block_id: Option<String>,
    /// Field label
    pub label: PlainText,
    /// Plain-text input, select, multi-select or date picker
    pub element: BlockElement,
    /// Help text under the field
    pub hint: Option<PlainText>,
    /// Allow submitting the view with this field empty
    pub optional: bool,
}

impl InputBlock {
    /// Maximum label length
    pub const LABEL_MAX_LENGTH: usize = 2000;
    /// Maximum hint length
    pub const HINT_MAX_LENGTH: usize = 2000;

    /// Create required input block
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<PlainText>, element: impl Into<BlockElement>) -> Self {
        Self {
            block_id: None,
            label: label.into(),
            element: element.into(),
            hint: None,
            optional: false,
        }
    }

    /// With hint
    #[inline]
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<PlainText>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// With optional flag
    #[inline]
    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// With block id
    #[inline]
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }
}

impl LayoutBlock for InputBlock {
    fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

validator_table!(VALIDATORS: InputBlock => [
    block_id_length(),
    Validator::new(
        "label_length",
        format!("label attribute cannot exceed {} characters", InputBlock::LABEL_MAX_LENGTH),
        |b: &InputBlock| within_length(b.label.text(), InputBlock::LABEL_MAX_LENGTH),
    ),
    Validator::new(
        "hint_length",
        format!("hint attribute cannot exceed {} characters", InputBlock::HINT_MAX_LENGTH),
        |b: &InputBlock| {
            optional_within_length(b.hint.as_ref().map(PlainText::text), InputBlock::HINT_MAX_LENGTH)
        },
    ),
    Validator::new(
        "element_type",
        "element attribute must be a plain-text input, select element, multi-select element, \
         or a datepicker",
        |b: &InputBlock| b.element.is_input(),
    ),
]);

impl JsonObject for InputBlock {
    fn object_name(&self) -> &'static str {
        "InputBlock"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "input")
            .field("block_id", &self.block_id)
            .object("label", &self.label)
            .object("element", &self.element)
            .optional_object("hint", self.hint.as_ref())
            .field("optional", self.optional)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}
