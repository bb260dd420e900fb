//! Option and option group objects
//!
//! Both render in two shapes selected by [`Format`]: block-kit (labels as
//! nested `plain_text` objects) and the legacy flattened form used by
//! message attachments and dialogs (labels as plain strings).

use super::text::PlainText;
use blockkit_core::{
    optional_within_length, run_validators, within_length, Attributes, Format, FormationError,
    JsonMap, JsonObject, Validator,
};

/// One selectable option in a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionObject {
    /// Label shown to the user
    pub text: PlainText,
    /// Value sent with the interaction payload
    pub value: String,
    /// Secondary line under the label
    pub description: Option<PlainText>,
    /// URL opened when the option is picked from an overflow menu
    pub url: Option<String>,
}

impl OptionObject {
    /// Maximum label length
    pub const TEXT_MAX_LENGTH: usize = 75;
    /// Maximum value length
    pub const VALUE_MAX_LENGTH: usize = 75;
    /// Maximum description length
    pub const DESCRIPTION_MAX_LENGTH: usize = 75;
    /// Maximum url length
    pub const URL_MAX_LENGTH: usize = 3000;

    /// Create option with label and value
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<PlainText>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            description: None,
            url: None,
        }
    }

    /// Option whose label and value are the same string
    #[must_use]
    pub fn from_single_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(value.clone(), value)
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<PlainText>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With url
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Declared fields for the given format
    fn attributes_as(&self, format: Format) -> Attributes<'_> {
        match format {
            Format::Block => Attributes::new()
                .object("text", &self.text)
                .field("value", &self.value)
                .optional_object("description", self.description.as_ref())
                .field("url", &self.url),
            Format::Text => Attributes::new()
                .field("text", self.text.text())
                .field("value", &self.value)
                .field("description", self.description.as_ref().map(PlainText::text))
                .field("url", &self.url),
        }
    }
}

validator_table!(OPTION_VALIDATORS: OptionObject => [
    Validator::new(
        "text_length",
        format!("text attribute cannot exceed {} characters", OptionObject::TEXT_MAX_LENGTH),
        |o: &OptionObject| within_length(o.text.text(), OptionObject::TEXT_MAX_LENGTH),
    ),
    Validator::new(
        "value_length",
        format!("value attribute cannot exceed {} characters", OptionObject::VALUE_MAX_LENGTH),
        |o: &OptionObject| within_length(&o.value, OptionObject::VALUE_MAX_LENGTH),
    ),
    Validator::new(
        "description_length",
        format!(
            "description attribute cannot exceed {} characters",
            OptionObject::DESCRIPTION_MAX_LENGTH
        ),
        |o: &OptionObject| {
            optional_within_length(
                o.description.as_ref().map(PlainText::text),
                OptionObject::DESCRIPTION_MAX_LENGTH,
            )
        },
    ),
    Validator::new(
        "url_length",
        format!("url attribute cannot exceed {} characters", OptionObject::URL_MAX_LENGTH),
        |o: &OptionObject| optional_within_length(o.url.as_deref(), OptionObject::URL_MAX_LENGTH),
    ),
]);

impl JsonObject for OptionObject {
    fn object_name(&self) -> &'static str {
        "Option"
    }

    fn attributes(&self) -> Attributes<'_> {
        self.attributes_as(Format::Block)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &OPTION_VALIDATORS)
    }

    fn to_dict_as(&self, format: Format) -> Result<JsonMap, FormationError> {
        self.validate_json()?;
        let map = self.attributes_as(format).resolve(format)?;
        tracing::trace!(object = self.object_name(), ?format, keys = map.len(), "serialized");
        Ok(map)
    }
}

/// Labelled group of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    /// Group heading
    pub label: PlainText,
    /// Options in this group
    pub options: Vec<OptionObject>,
}

impl OptionGroup {
    /// Maximum label length
    pub const LABEL_MAX_LENGTH: usize = 300;
    /// Maximum number of options
    pub const OPTIONS_MAX_LENGTH: usize = 100;

    /// Create group
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<PlainText>, options: Vec<OptionObject>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }

    fn attributes_as(&self, format: Format) -> Attributes<'_> {
        match format {
            Format::Block => Attributes::new()
                .object("label", &self.label)
                .objects("options", &self.options),
            Format::Text => Attributes::new()
                .field("text", self.label.text())
                .objects("options", &self.options),
        }
    }
}

validator_table!(GROUP_VALIDATORS: OptionGroup => [
    Validator::new(
        "label_length",
        format!("label attribute cannot exceed {} characters", OptionGroup::LABEL_MAX_LENGTH),
        |g: &OptionGroup| within_length(g.label.text(), OptionGroup::LABEL_MAX_LENGTH),
    ),
    Validator::new(
        "options_length",
        format!(
            "options attribute must have between 1 and {} items",
            OptionGroup::OPTIONS_MAX_LENGTH
        ),
        |g: &OptionGroup| (1..=OptionGroup::OPTIONS_MAX_LENGTH).contains(&g.options.len()),
    ),
]);

impl JsonObject for OptionGroup {
    fn object_name(&self) -> &'static str {
        "OptionGroup"
    }

    fn attributes(&self) -> Attributes<'_> {
        self.attributes_as(Format::Block)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &GROUP_VALIDATORS)
    }

    fn to_dict_as(&self, format: Format) -> Result<JsonMap, FormationError> {
        self.validate_json()?;
        let map = self.attributes_as(format).resolve(format)?;
        tracing::trace!(object = self.object_name(), ?format, keys = map.len(), "serialized");
        Ok(map)
    }
}
