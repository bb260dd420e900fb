//! Image block

use super::{block_id_length, LayoutBlock};
use crate::objects::PlainText;
use blockkit_core::{
    optional_within_length, run_validators, within_length, Attributes, FormationError, JsonObject,
    Validator,
};

/// Standalone image with optional title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlock {
    /// Block identifier
    pub block_id: Option<String>,
    /// Publicly hosted image url
    pub image_url: String,
    /// Plain-text summary of the image
    pub alt_text: String,
    /// Caption shown above the image
    pub title: Option<PlainText>,
}

impl ImageBlock {
    /// Maximum url length
    pub const IMAGE_URL_MAX_LENGTH: usize = 3000;
    /// Maximum alt text length
    pub const ALT_TEXT_MAX_LENGTH: usize = 3000;
    /// Maximum title length
    pub const TITLE_MAX_LENGTH: usize = 2000;

    /// Create image block
    #[inline]
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            block_id: None,
            image_url: image_url.into(),
            alt_text: alt_text.into(),
            title: None,
        }
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<PlainText>) -> Self {
        self.title = Some(title.into());
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

impl LayoutBlock for ImageBlock {
    fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

validator_table!(VALIDATORS: ImageBlock => [
    block_id_length(),
    Validator::new(
        "image_url_length",
        format!("image_url attribute cannot exceed {} characters", ImageBlock::IMAGE_URL_MAX_LENGTH),
        |b: &ImageBlock| within_length(&b.image_url, ImageBlock::IMAGE_URL_MAX_LENGTH),
    ),
    Validator::new(
        "alt_text_length",
        format!("alt_text attribute cannot exceed {} characters", ImageBlock::ALT_TEXT_MAX_LENGTH),
        |b: &ImageBlock| within_length(&b.alt_text, ImageBlock::ALT_TEXT_MAX_LENGTH),
    ),
    Validator::new(
        "title_length",
        format!("title attribute cannot exceed {} characters", ImageBlock::TITLE_MAX_LENGTH),
        |b: &ImageBlock| {
            optional_within_length(b.title.as_ref().map(PlainText::text), ImageBlock::TITLE_MAX_LENGTH)
        },
    ),
]);

impl JsonObject for ImageBlock {
    fn object_name(&self) -> &'static str {
        "ImageBlock"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "image")
            .field("block_id", &self.block_id)
            .field("image_url", &self.image_url)
            .field("alt_text", &self.alt_text)
            .optional_object("title", self.title.as_ref())
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
            Value::Object(
                ImageBlock::new("http://google.com", "not really an image")
                    .to_dict()
                    .unwrap()
            ),
            json!({
                "image_url": "http://google.com",
                "alt_text": "not really an image",
                "type": "image",
            })
        );
    }

    #[test]
    fn title_is_plain_text() {
        let block = ImageBlock::new("http://google.com", "alt").with_title("A title");
        assert_eq!(
            Value::Object(block.to_dict().unwrap())["title"],
            json!({"type": "plain_text", "text": "A title", "emoji": true})
        );
    }

    #[test]
    fn image_url_length() {
        assert!(ImageBlock::new("x".repeat(3001), "text").to_dict().is_err());
    }

    #[test]
    fn alt_text_length() {
        assert!(ImageBlock::new("http://google.com", "x".repeat(3000)).to_dict().is_ok());
        assert!(ImageBlock::new("http://google.com", "x".repeat(3001)).to_dict().is_err());
    }

    #[test]
    fn title_length() {
        let block = ImageBlock::new("http://google.com", "text").with_title("x".repeat(3001));
        assert_eq!(
            block.to_dict().unwrap_err().message(),
            "title attribute cannot exceed 2000 characters"
        );
    }
}
