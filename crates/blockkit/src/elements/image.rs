//! Image element

use blockkit_core::{run_validators, within_length, Attributes, FormationError, JsonObject, Validator};

/// Inline image for section and context blocks
///
/// For a block holding only an image see [`crate::blocks::ImageBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    /// Publicly hosted image url
    pub image_url: String,
    /// Plain-text summary of the image
    pub alt_text: String,
}

impl ImageElement {
    /// Maximum url length
    pub const IMAGE_URL_MAX_LENGTH: usize = 3000;
    /// Maximum alt text length
    pub const ALT_TEXT_MAX_LENGTH: usize = 3000;

    /// Create image element
    #[inline]
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

validator_table!(VALIDATORS: ImageElement => [
    Validator::new(
        "image_url_length",
        format!("image_url attribute cannot exceed {} characters", ImageElement::IMAGE_URL_MAX_LENGTH),
        |e: &ImageElement| within_length(&e.image_url, ImageElement::IMAGE_URL_MAX_LENGTH),
    ),
    Validator::new(
        "alt_text_length",
        format!("alt_text attribute cannot exceed {} characters", ImageElement::ALT_TEXT_MAX_LENGTH),
        |e: &ImageElement| within_length(&e.alt_text, ImageElement::ALT_TEXT_MAX_LENGTH),
    ),
]);

impl JsonObject for ImageElement {
    fn object_name(&self) -> &'static str {
        "ImageElement"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "image")
            .field("image_url", &self.image_url)
            .field("alt_text", &self.alt_text)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}
