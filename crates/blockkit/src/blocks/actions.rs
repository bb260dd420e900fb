//! Actions block

use super::{block_id_length, LayoutBlock};
use crate::elements::BlockElement;
use blockkit_core::{run_validators, Attributes, FormationError, JsonObject, Validator};

/// Row of interactive elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionsBlock {
    /// Block identifier
    pub block_id: Option<String>,
    /// Buttons, menus and pickers
    pub elements: Vec<BlockElement>,
}

impl ActionsBlock {
    /// Maximum number of elements
    pub const ELEMENTS_MAX_LENGTH: usize = 5;

    /// Create actions block
    #[inline]
    #[must_use]
    pub fn new(elements: Vec<BlockElement>) -> Self {
        Self {
            block_id: None,
            elements,
        }
    }

    /// Append one element
    #[inline]
    #[must_use]
    pub fn with_element(mut self, element: impl Into<BlockElement>) -> Self {
        self.elements.push(element.into());
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

impl LayoutBlock for ActionsBlock {
    fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

validator_table!(VALIDATORS: ActionsBlock => [
    block_id_length(),
    Validator::new(
        "elements_length",
        format!("elements attribute cannot exceed {} elements", ActionsBlock::ELEMENTS_MAX_LENGTH),
        |b: &ActionsBlock| b.elements.len() <= ActionsBlock::ELEMENTS_MAX_LENGTH,
    ),
    Validator::new(
        "elements_interactive",
        "elements attribute must only contain interactive elements",
        |b: &ActionsBlock| b.elements.iter().all(BlockElement::is_interactive),
    ),
]);

impl JsonObject for ActionsBlock {
    fn object_name(&self) -> &'static str {
        "ActionsBlock"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "actions")
            .field("block_id", &self.block_id)
            .objects("elements", &self.elements)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}
