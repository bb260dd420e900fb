//! Section block

use super::{block_id_length, LayoutBlock};
use crate::elements::BlockElement;
use crate::objects::{MarkdownText, PlainText, TextObject};
use blockkit_core::{
    optional_within_length, run_validators, Attributes, FormationError, JsonObject, Validator,
};

/// Section body or field
///
/// Raw strings become markdown; text objects keep their kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionText(TextObject);

impl From<&str> for SectionText {
    fn from(text: &str) -> Self {
        Self(MarkdownText::new(text).into())
    }
}

impl From<String> for SectionText {
    fn from(text: String) -> Self {
        Self(MarkdownText::new(text).into())
    }
}

impl From<TextObject> for SectionText {
    fn from(text: TextObject) -> Self {
        Self(text)
    }
}

impl From<PlainText> for SectionText {
    fn from(text: PlainText) -> Self {
        Self(text.into())
    }
}

impl From<MarkdownText> for SectionText {
    fn from(text: MarkdownText) -> Self {
        Self(text.into())
    }
}

impl From<SectionText> for TextObject {
    fn from(text: SectionText) -> Self {
        text.0
    }
}

/// Text, optional two-column fields and one accessory element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBlock {
    /// Block identifier
    pub block_id: Option<String>,
    /// Body text
    pub text: Option<TextObject>,
    /// Short texts laid out in two columns
    pub fields: Vec<TextObject>,
    /// Element shown beside the text
    pub accessory: Option<BlockElement>,
}

impl SectionBlock {
    /// Maximum text length
    pub const TEXT_MAX_LENGTH: usize = 3000;
    /// Maximum number of fields
    pub const FIELDS_MAX_LENGTH: usize = 10;
    /// Maximum length of each field
    pub const FIELD_TEXT_MAX_LENGTH: usize = 2000;

    /// Create empty section; give it text or fields before serializing
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Section whose body is markdown
    #[must_use]
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::new().with_text(MarkdownText::new(text))
    }

    /// With body text; raw strings become markdown
    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl Into<SectionText>) -> Self {
        self.text = Some(Into::<SectionText>::into(text).0);
        self
    }

    /// With fields; raw strings become markdown
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SectionText>,
    {
        self.fields = fields
            .into_iter()
            .map(|f| Into::<SectionText>::into(f).0)
            .collect();
        self
    }

    /// With accessory element
    #[inline]
    #[must_use]
    pub fn with_accessory(mut self, accessory: impl Into<BlockElement>) -> Self {
        self.accessory = Some(accessory.into());
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

impl LayoutBlock for SectionBlock {
    fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

validator_table!(VALIDATORS: SectionBlock => [
    block_id_length(),
    Validator::new(
        "text_or_fields_populated",
        "text or fields attribute must be specified",
        |s: &SectionBlock| s.text.is_some() || !s.fields.is_empty(),
    ),
    Validator::new(
        "text_length",
        format!("text attribute cannot exceed {} characters", SectionBlock::TEXT_MAX_LENGTH),
        |s: &SectionBlock| {
            optional_within_length(s.text.as_ref().map(TextObject::text), SectionBlock::TEXT_MAX_LENGTH)
        },
    ),
    Validator::new(
        "fields_length",
        format!("fields attribute cannot exceed {} items", SectionBlock::FIELDS_MAX_LENGTH),
        |s: &SectionBlock| s.fields.len() <= SectionBlock::FIELDS_MAX_LENGTH,
    ),
    Validator::new(
        "field_text_length",
        format!(
            "each field cannot exceed {} characters",
            SectionBlock::FIELD_TEXT_MAX_LENGTH
        ),
        |s: &SectionBlock| {
            s.fields
                .iter()
                .all(|f| f.text().chars().count() <= SectionBlock::FIELD_TEXT_MAX_LENGTH)
        },
    ),
]);

impl JsonObject for SectionBlock {
    fn object_name(&self) -> &'static str {
        "SectionBlock"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "section")
            .field("block_id", &self.block_id)
            .optional_object("text", self.text.as_ref())
            .non_empty_objects("fields", &self.fields)
            .optional_object("accessory", self.accessory.as_ref())
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}
