//! Block elements
//!
//! Controls nested inside blocks. Every element fixes its `type`
//! discriminator; interactive ones also carry an `action_id` identifying
//! the interaction payload.
//!
//! - [`ImageElement`], [`ButtonElement`]
//! - static, external, user, conversation and channel selects, single and multi
//! - [`OverflowMenuElement`], [`DatePickerElement`], [`PlainTextInputElement`]
//! - [`BlockElement`]: sum of all of the above

mod button;
mod datepicker;
mod image;
mod input;
mod overflow;
mod select;

pub use button::{ButtonElement, ButtonStyle, BUTTON_STYLES};
pub use datepicker::DatePickerElement;
pub use image::ImageElement;
pub use input::PlainTextInputElement;
pub use overflow::OverflowMenuElement;
pub use select::{
    ChannelMultiSelectElement, ChannelSelectElement, ConversationMultiSelectElement,
    ConversationSelectElement, ExternalDataMultiSelectElement, ExternalDataSelectElement,
    StaticMultiSelectElement, StaticSelectElement, UserMultiSelectElement, UserSelectElement,
};

use crate::objects::PlainText;
use blockkit_core::{optional_within_length, within_length, Format, FormationError, JsonMap, JsonObject, Validator};

/// Maximum `action_id` length shared by all interactive elements
pub const ACTION_ID_MAX_LENGTH: usize = 255;

/// Maximum placeholder length shared by selectors and inputs
pub const PLACEHOLDER_MAX_LENGTH: usize = 150;

/// Element that emits an interaction payload
pub trait InteractiveElement {
    /// Identifier sent with the interaction payload
    fn action_id(&self) -> &str;
}

/// Element showing placeholder text before a value is chosen
pub(crate) trait Placeholder {
    fn placeholder(&self) -> Option<&PlainText>;
}

/// `action_id` length check for any interactive element
pub(crate) fn action_id_length<T: InteractiveElement>() -> Validator<T> {
    Validator::new(
        "action_id_length",
        format!("action_id attribute cannot exceed {ACTION_ID_MAX_LENGTH} characters"),
        |e: &T| within_length(e.action_id(), ACTION_ID_MAX_LENGTH),
    )
}

/// Placeholder length check for any selector
pub(crate) fn placeholder_length<T: Placeholder>() -> Validator<T> {
    Validator::new(
        "placeholder_length",
        format!("placeholder attribute cannot exceed {PLACEHOLDER_MAX_LENGTH} characters"),
        |e: &T| {
            optional_within_length(e.placeholder().map(PlainText::text), PLACEHOLDER_MAX_LENGTH)
        },
    )
}

/// Validate, then serialize in block form whatever format the caller asked
/// for; nested options inside block elements are always block-kit shaped.
pub(crate) fn to_block_form<T: JsonObject>(element: &T) -> Result<JsonMap, FormationError> {
    element.validate_json()?;
    element.attributes().resolve(Format::Block)
}

/// Any block element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockElement {
    /// `image`
    Image(ImageElement),
    /// `button`
    Button(ButtonElement),
    /// `static_select`
    StaticSelect(StaticSelectElement),
    /// `multi_static_select`
    StaticMultiSelect(StaticMultiSelectElement),
    /// `external_select`
    ExternalSelect(ExternalDataSelectElement),
    /// `multi_external_select`
    ExternalMultiSelect(ExternalDataMultiSelectElement),
    /// `users_select`
    UserSelect(UserSelectElement),
    /// `multi_users_select`
    UserMultiSelect(UserMultiSelectElement),
    /// `conversations_select`
    ConversationSelect(ConversationSelectElement),
    /// `multi_conversations_select`
    ConversationMultiSelect(ConversationMultiSelectElement),
    /// `channels_select`
    ChannelSelect(ChannelSelectElement),
    /// `multi_channels_select`
    ChannelMultiSelect(ChannelMultiSelectElement),
    /// `overflow`
    Overflow(OverflowMenuElement),
    /// `datepicker`
    DatePicker(DatePickerElement),
    /// `plain_text_input`
    PlainTextInput(PlainTextInputElement),
}

impl BlockElement {
    /// Allowed inside an actions block
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Self::Image(_) | Self::PlainTextInput(_))
    }

    /// Allowed as the element of an input block
    #[must_use]
    pub fn is_input(&self) -> bool {
        !matches!(self, Self::Image(_) | Self::Button(_) | Self::Overflow(_))
    }

    /// Interaction identifier, absent for images
    #[must_use]
    pub fn action_id(&self) -> Option<&str> {
        match self {
            Self::Image(_) => None,
            Self::Button(e) => Some(e.action_id()),
            Self::StaticSelect(e) => Some(e.action_id()),
            Self::StaticMultiSelect(e) => Some(e.action_id()),
            Self::ExternalSelect(e) => Some(e.action_id()),
            Self::ExternalMultiSelect(e) => Some(e.action_id()),
            Self::UserSelect(e) => Some(e.action_id()),
            Self::UserMultiSelect(e) => Some(e.action_id()),
            Self::ConversationSelect(e) => Some(e.action_id()),
            Self::ConversationMultiSelect(e) => Some(e.action_id()),
            Self::ChannelSelect(e) => Some(e.action_id()),
            Self::ChannelMultiSelect(e) => Some(e.action_id()),
            Self::Overflow(e) => Some(e.action_id()),
            Self::DatePicker(e) => Some(e.action_id()),
            Self::PlainTextInput(e) => Some(e.action_id()),
        }
    }
}

delegate_json_object!(BlockElement {
    Image(ImageElement),
    Button(ButtonElement),
    StaticSelect(StaticSelectElement),
    StaticMultiSelect(StaticMultiSelectElement),
    ExternalSelect(ExternalDataSelectElement),
    ExternalMultiSelect(ExternalDataMultiSelectElement),
    UserSelect(UserSelectElement),
    UserMultiSelect(UserMultiSelectElement),
    ConversationSelect(ConversationSelectElement),
    ConversationMultiSelect(ConversationMultiSelectElement),
    ChannelSelect(ChannelSelectElement),
    ChannelMultiSelect(ChannelMultiSelectElement),
    Overflow(OverflowMenuElement),
    DatePicker(DatePickerElement),
    PlainTextInput(PlainTextInputElement),
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::OptionObject;

    #[test]
    fn interactive_classification() {
        let image: BlockElement = ImageElement::new("http://x.com/a.png", "alt").into();
        let button: BlockElement = ButtonElement::new("click", "act").into();
        let input: BlockElement = PlainTextInputElement::new("text").into();

        assert!(!image.is_interactive());
        assert!(button.is_interactive());
        assert!(!input.is_interactive());
    }

    #[test]
    fn input_classification() {
        let button: BlockElement = ButtonElement::new("click", "act").into();
        let overflow: BlockElement = OverflowMenuElement::new(
            "over",
            vec![OptionObject::from_single_value("a"), OptionObject::from_single_value("b")],
        )
        .into();
        let users: BlockElement = UserMultiSelectElement::new("Select users", "users").into();
        let date: BlockElement = DatePickerElement::new("date").into();

        assert!(!button.is_input());
        assert!(!overflow.is_input());
        assert!(users.is_input());
        assert!(date.is_input());
    }

    #[test]
    fn delegates_serialization() {
        let element: BlockElement = ButtonElement::new("click", "act").into();
        assert_eq!(element.object_name(), "ButtonElement");
        assert_eq!(element.action_id(), Some("act"));
        assert_eq!(element.to_dict().unwrap()["type"], "button");
    }

    #[test]
    fn long_action_id_rejected_through_enum() {
        let element: BlockElement = ButtonElement::new("click", "a".repeat(256)).into();
        assert_eq!(
            element.to_dict().unwrap_err().message(),
            "action_id attribute cannot exceed 255 characters"
        );
    }
}
