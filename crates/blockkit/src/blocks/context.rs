//! Context block

use super::{block_id_length, LayoutBlock};
use crate::elements::ImageElement;
use crate::objects::{MarkdownText, PlainText, TextObject};
use blockkit_core::{run_validators, Attributes, FormationError, JsonObject, Validator};

/// Item of a context block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextElement {
    /// Small inline image
    Image(ImageElement),
    /// Short text
    Text(TextObject),
}

delegate_json_object!(ContextElement {
    Image(ImageElement),
    Text(TextObject),
});

impl From<PlainText> for ContextElement {
    fn from(text: PlainText) -> Self {
        Self::Text(text.into())
    }
}

impl From<MarkdownText> for ContextElement {
    fn from(text: MarkdownText) -> Self {
        Self::Text(text.into())
    }
}

/// Secondary line of small images and text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextBlock {
    /// Block identifier
    pub block_id: Option<String>,
    /// Images and texts
    pub elements: Vec<ContextElement>,
}

impl ContextBlock {
    /// Maximum number of elements
    pub const ELEMENTS_MAX_LENGTH: usize = 10;

    /// Create context block
    #[inline]
    #[must_use]
    pub fn new(elements: Vec<ContextElement>) -> Self {
        Self {
            block_id: None,
            elements,
        }
    }

    /// Append one element
    #[inline]
    #[must_use]
    pub fn with_element(mut self, element: impl Into<ContextElement>) -> Self {
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

impl LayoutBlock for ContextBlock {
    fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

validator_table!(VALIDATORS: ContextBlock => [
    block_id_length(),
    Validator::new(
        "elements_length",
        format!("elements attribute cannot exceed {} elements", ContextBlock::ELEMENTS_MAX_LENGTH),
        |b: &ContextBlock| b.elements.len() <= ContextBlock::ELEMENTS_MAX_LENGTH,
    ),
]);

impl JsonObject for ContextBlock {
    fn object_name(&self) -> &'static str {
        "ContextBlock"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "context")
            .field("block_id", &self.block_id)
            .objects("elements", &self.elements)
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

    fn elements() -> Vec<ContextElement> {
        vec![
            ImageElement::new("http://google.com", "google").into(),
            PlainText::new("Just text").into(),
        ]
    }

    #[test]
    fn basic_json() {
        assert_eq!(
            Value::Object(ContextBlock::new(elements()).to_dict().unwrap()),
            json!({
                "elements": [
                    {"type": "image", "image_url": "http://google.com", "alt_text": "google"},
                    {"type": "plain_text", "emoji": true, "text": "Just text"},
                ],
                "type": "context",
            })
        );
    }

    #[test]
    fn elements_length() {
        let ten: Vec<_> = elements().into_iter().cycle().take(10).collect();
        assert!(ContextBlock::new(ten).to_dict().is_ok());

        let eleven: Vec<_> = elements().into_iter().cycle().take(11).collect();
        assert_eq!(
            ContextBlock::new(eleven).to_dict().unwrap_err().message(),
            "elements attribute cannot exceed 10 elements"
        );
    }

    #[test]
    fn markdown_element() {
        let block = ContextBlock::new(Vec::new()).with_element(MarkdownText::new("*bold*"));
        assert_eq!(block.to_dict().unwrap()["elements"][0]["type"], "mrkdwn");
    }
}
