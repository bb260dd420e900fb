//! Divider block

use super::{block_id_length, LayoutBlock};
use blockkit_core::{run_validators, Attributes, FormationError, JsonObject};

/// Horizontal rule between blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DividerBlock {
    /// Block identifier
    pub block_id: Option<String>,
}

impl DividerBlock {
    /// Create divider
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With block id
    #[inline]
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }
}

impl LayoutBlock for DividerBlock {
    fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

validator_table!(VALIDATORS: DividerBlock => [block_id_length()]);

impl JsonObject for DividerBlock {
    fn object_name(&self) -> &'static str {
        "DividerBlock"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "divider")
            .field("block_id", &self.block_id)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}
