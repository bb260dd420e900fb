//! File block

use super::{block_id_length, LayoutBlock};
use blockkit_core::{run_validators, Attributes, FormationError, JsonObject, Validator};

/// Accepted file sources
pub const FILE_SOURCES: &[&str] = &["remote"];

/// Remote file shared into a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    /// Block identifier
    pub block_id: Option<String>,
    /// External id of the remote file
    pub external_id: String,
    /// Always `remote`
    pub source: String,
}

impl FileBlock {
    /// Create file block for a remote file
    #[inline]
    #[must_use]
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            block_id: None,
            external_id: external_id.into(),
            source: "remote".to_string(),
        }
    }

    /// With block id
    #[inline]
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    fn source_value(&self) -> Option<&str> {
        Some(&self.source)
    }
}

impl LayoutBlock for FileBlock {
    fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

validator_table!(VALIDATORS: FileBlock => [
    block_id_length(),
    Validator::one_of("source_valid", "source", FILE_SOURCES, FileBlock::source_value),
]);

impl JsonObject for FileBlock {
    fn object_name(&self) -> &'static str {
        "FileBlock"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "file")
            .field("block_id", &self.block_id)
            .field("external_id", &self.external_id)
            .field("source", &self.source)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[test]
    fn json_form() {
        assert_eq!(
            Value::Object(FileBlock::new("ABCD1").with_block_id("f").to_dict().unwrap()),
            json!({"type": "file", "block_id": "f", "external_id": "ABCD1", "source": "remote"})
        );
    }

    #[test]
    fn source_must_be_remote() {
        let mut block = FileBlock::new("ABCD1");
        block.source = "local".to_string();
        assert_eq!(
            block.to_dict().unwrap_err().message(),
            "source attribute must be one of the following values: remote"
        );
    }
}
