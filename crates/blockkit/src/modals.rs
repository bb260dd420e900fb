//! Modal views
//!
//! [`ModalView`] is the serialized aggregate; [`ModalBuilder`] assembles one
//! through chained `&mut self` calls. Validation runs on every `to_dict`
//! against the view's current state, so a builder can keep growing after
//! it has been serialized once.

use crate::blocks::{
    ActionsBlock, Block, ContextBlock, DividerBlock, FileBlock, ImageBlock, InputBlock,
    SectionBlock,
};
use crate::objects::PlainText;
use blockkit_core::{
    optional_within_length, run_validators, Attributes, FormationError, JsonObject, Validator,
};

/// Modal surface: title, ordered blocks and submission metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalView {
    /// Header text; required
    pub title: Option<PlainText>,
    /// Ordered content
    pub blocks: Vec<Block>,
    /// Close button text
    pub close: Option<PlainText>,
    /// Submit button text; required when any block is an input
    pub submit: Option<PlainText>,
    /// Opaque string echoed back in submission and action payloads
    pub private_metadata: Option<String>,
    /// Identifier for interactions with this modal
    pub callback_id: Option<String>,
    /// Closing clears the whole view stack
    pub clear_on_close: bool,
    /// Closing sends a `view_closed` event
    pub notify_on_close: bool,
    /// Team-unique custom identifier
    pub external_id: Option<String>,
}

impl ModalView {
    /// Maximum title length
    pub const TITLE_MAX_LENGTH: usize = 24;
    /// Maximum number of blocks
    pub const BLOCKS_MAX_LENGTH: usize = 100;
    /// Maximum close button length
    pub const CLOSE_MAX_LENGTH: usize = 24;
    /// Maximum submit button length
    pub const SUBMIT_MAX_LENGTH: usize = 24;
    /// Maximum private metadata length
    pub const PRIVATE_METADATA_MAX_LENGTH: usize = 3000;
    /// Maximum callback id length
    pub const CALLBACK_ID_MAX_LENGTH: usize = 255;
    /// Maximum external id length
    pub const EXTERNAL_ID_MAX_LENGTH: usize = 255;

    /// Create empty view
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contains at least one input block
    #[must_use]
    pub fn has_input(&self) -> bool {
        self.blocks.iter().any(Block::is_input)
    }
}

fn text_within(text: Option<&PlainText>, max: usize) -> bool {
    optional_within_length(text.map(PlainText::text), max)
}

validator_table!(VALIDATORS: ModalView => [
    Validator::new(
        "title_length",
        format!("title must be between 1 and {} characters", ModalView::TITLE_MAX_LENGTH),
        |m: &ModalView| {
            m.title
                .as_ref()
                .map_or(false, |t| t.text().chars().count() <= ModalView::TITLE_MAX_LENGTH)
        },
    ),
    Validator::new(
        "blocks_length",
        format!("modals must contain between 1 and {} blocks", ModalView::BLOCKS_MAX_LENGTH),
        |m: &ModalView| (1..=ModalView::BLOCKS_MAX_LENGTH).contains(&m.blocks.len()),
    ),
    Validator::new(
        "close_length",
        format!("close cannot exceed {} characters", ModalView::CLOSE_MAX_LENGTH),
        |m: &ModalView| text_within(m.close.as_ref(), ModalView::CLOSE_MAX_LENGTH),
    ),
    Validator::new(
        "submit_length",
        format!("submit cannot exceed {} characters", ModalView::SUBMIT_MAX_LENGTH),
        |m: &ModalView| text_within(m.submit.as_ref(), ModalView::SUBMIT_MAX_LENGTH),
    ),
    Validator::new(
        "submit_required_when_input_block_used",
        "submit is required when an 'input' block is within the blocks array",
        |m: &ModalView| m.submit.is_some() || !m.has_input(),
    ),
    Validator::new(
        "private_metadata_length",
        format!(
            "private_metadata cannot exceed {} characters",
            ModalView::PRIVATE_METADATA_MAX_LENGTH
        ),
        |m: &ModalView| {
            optional_within_length(
                m.private_metadata.as_deref(),
                ModalView::PRIVATE_METADATA_MAX_LENGTH,
            )
        },
    ),
    Validator::new(
        "callback_id_length",
        format!("callback_id cannot exceed {} characters", ModalView::CALLBACK_ID_MAX_LENGTH),
        |m: &ModalView| {
            optional_within_length(m.callback_id.as_deref(), ModalView::CALLBACK_ID_MAX_LENGTH)
        },
    ),
    Validator::new(
        "external_id_length",
        format!("external_id cannot exceed {} characters", ModalView::EXTERNAL_ID_MAX_LENGTH),
        |m: &ModalView| {
            optional_within_length(m.external_id.as_deref(), ModalView::EXTERNAL_ID_MAX_LENGTH)
        },
    ),
]);

impl JsonObject for ModalView {
    fn object_name(&self) -> &'static str {
        "ModalView"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "modal")
            .optional_object("title", self.title.as_ref())
            .objects("blocks", &self.blocks)
            .optional_object("close", self.close.as_ref())
            .optional_object("submit", self.submit.as_ref())
            .field("private_metadata", &self.private_metadata)
            .field("callback_id", &self.callback_id)
            .field("clear_on_close", self.clear_on_close)
            .field("notify_on_close", self.notify_on_close)
            .field("external_id", &self.external_id)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &VALIDATORS)
    }
}

/// Fluent assembler for a [`ModalView`]
///
/// # Example
/// ```rust
/// use blockkit::prelude::*;
///
/// let map = ModalBuilder::new()
///     .title("Feedback")
///     .submit("Send")
///     .input(InputBlock::new("Comments", PlainTextInputElement::new("comments")))
///     .to_dict()
///     .unwrap();
/// assert_eq!(map["type"], "modal");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalBuilder {
    view: ModalView,
}

impl ModalBuilder {
    /// Create builder around an empty view
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set title
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.view.title = Some(PlainText::new(title));
        self
    }

    /// Set close button text
    pub fn close(&mut self, close: impl Into<String>) -> &mut Self {
        self.view.close = Some(PlainText::new(close));
        self
    }

    /// Set submit button text
    pub fn submit(&mut self, submit: impl Into<String>) -> &mut Self {
        self.view.submit = Some(PlainText::new(submit));
        self
    }

    /// Set private metadata
    pub fn private_metadata(&mut self, private_metadata: impl Into<String>) -> &mut Self {
        self.view.private_metadata = Some(private_metadata.into());
        self
    }

    /// Set callback id
    pub fn callback_id(&mut self, callback_id: impl Into<String>) -> &mut Self {
        self.view.callback_id = Some(callback_id.into());
        self
    }

    /// Set clear-on-close flag
    pub fn clear_on_close(&mut self, clear_on_close: bool) -> &mut Self {
        self.view.clear_on_close = clear_on_close;
        self
    }

    /// Set notify-on-close flag
    pub fn notify_on_close(&mut self, notify_on_close: bool) -> &mut Self {
        self.view.notify_on_close = notify_on_close;
        self
    }

    /// Set external id
    pub fn external_id(&mut self, external_id: impl Into<String>) -> &mut Self {
        self.view.external_id = Some(external_id.into());
        self
    }

    /// Append any block
    pub fn block(&mut self, block: impl Into<Block>) -> &mut Self {
        let block = block.into();
        tracing::debug!(kind = block.kind(), position = self.view.blocks.len(), "append block");
        self.view.blocks.push(block);
        self
    }

    /// Append section
    pub fn section(&mut self, section: SectionBlock) -> &mut Self {
        self.block(section)
    }

    /// Append divider without block id
    ///
    /// Use [`ModalBuilder::block`] with [`DividerBlock::with_block_id`] to
    /// give it one.
    pub fn divider(&mut self) -> &mut Self {
        self.block(DividerBlock::new())
    }

    /// Append image
    pub fn image(&mut self, image: ImageBlock) -> &mut Self {
        self.block(image)
    }

    /// Append actions
    pub fn actions(&mut self, actions: ActionsBlock) -> &mut Self {
        self.block(actions)
    }

    /// Append context
    pub fn context(&mut self, context: ContextBlock) -> &mut Self {
        self.block(context)
    }

    /// Append input; the view then needs submit text
    pub fn input(&mut self, input: InputBlock) -> &mut Self {
        self.block(input)
    }

    /// Append remote file
    pub fn file(&mut self, file: FileBlock) -> &mut Self {
        self.block(file)
    }

    /// View assembled so far
    #[inline]
    #[must_use]
    pub fn view(&self) -> &ModalView {
        &self.view
    }

    /// Take the assembled view without validating it
    #[inline]
    #[must_use]
    pub fn build(self) -> ModalView {
        self.view
    }
}

impl JsonObject for ModalBuilder {
    fn object_name(&self) -> &'static str {
        "ModalBuilder"
    }

    fn attributes(&self) -> Attributes<'_> {
        self.view.attributes()
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        let blocks = self.view.blocks.len();
        match self.view.validate_json() {
            Ok(()) => {
                tracing::debug!(blocks, "modal validated");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, blocks, "modal rejected");
                Err(err)
            }
        }
    }
}

impl From<ModalBuilder> for ModalView {
    fn from(builder: ModalBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ButtonElement, PlainTextInputElement, UserMultiSelectElement};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn simple() -> ModalBuilder {
        let mut builder = ModalBuilder::new();
        builder.title("Title").section(SectionBlock::markdown("body"));
        builder
    }

    #[test]
    fn json_form() {
        let modal = ModalBuilder::new()
            .title("Test Check title")
            .submit("Go")
            .section(SectionBlock::new().with_text(PlainText::new(
                "Hi, is a test text block in a section",
            )))
            .divider()
            .input(InputBlock::new(
                "single input",
                PlainTextInputElement::new("plain_text").with_placeholder("Hello, Slack"),
            ))
            .input(InputBlock::new(
                "Label",
                UserMultiSelectElement::new("Select users", "users"),
            ))
            .to_dict()
            .unwrap();

        let expected = json!({
            "type": "modal",
            "clear_on_close": false,
            "notify_on_close": false,
            "title": {"type": "plain_text", "text": "Test Check title", "emoji": true},
            "submit": {"text": "Go", "type": "plain_text", "emoji": true},
            "blocks": [
                {
                    "type": "section",
                    "text": {
                        "type": "plain_text",
                        "text": "Hi, is a test text block in a section",
                        "emoji": true,
                    },
                },
                {"type": "divider"},
                {
                    "type": "input",
                    "label": {"text": "single input", "type": "plain_text", "emoji": true},
                    "element": {
                        "type": "plain_text_input",
                        "placeholder": {"text": "Hello, Slack", "type": "plain_text", "emoji": true},
                        "action_id": "plain_text",
                    },
                    "optional": false,
                },
                {
                    "type": "input",
                    "optional": false,
                    "element": {
                        "type": "multi_users_select",
                        "action_id": "users",
                        "placeholder": {"type": "plain_text", "text": "Select users", "emoji": true},
                    },
                    "label": {"type": "plain_text", "text": "Label", "emoji": true},
                },
            ],
        });
        assert_eq!(Value::Object(modal), expected);
    }

    #[test]
    fn title_required() {
        let mut builder = ModalBuilder::new();
        builder.divider();
        assert_eq!(
            builder.to_dict().unwrap_err().message(),
            "title must be between 1 and 24 characters"
        );
    }

    #[test]
    fn title_boundary() {
        let mut builder = simple();
        builder.title("x".repeat(24));
        assert!(builder.to_dict().is_ok());
        builder.title("x".repeat(25));
        assert!(builder.to_dict().is_err());
        builder.title("");
        assert!(builder.to_dict().is_ok());
    }

    #[test]
    fn divider_with_block_id() {
        let mut builder = simple();
        builder.block(DividerBlock::new().with_block_id("split"));
        let map = builder.to_dict().unwrap();
        assert_eq!(map["blocks"][1], json!({"type": "divider", "block_id": "split"}));
    }

    #[test]
    fn blocks_bounds() {
        let mut builder = ModalBuilder::new();
        builder.title("Empty");
        assert_eq!(
            builder.to_dict().unwrap_err().message(),
            "modals must contain between 1 and 100 blocks"
        );

        for _ in 0..100 {
            builder.divider();
        }
        assert!(builder.to_dict().is_ok());
        builder.divider();
        assert!(builder.to_dict().is_err());
    }

    #[test]
    fn button_text_lengths() {
        let mut builder = simple();
        builder.close("x".repeat(25));
        assert_eq!(
            builder.to_dict().unwrap_err().message(),
            "close cannot exceed 24 characters"
        );

        let mut builder = simple();
        builder.submit("x".repeat(25));
        assert_eq!(
            builder.to_dict().unwrap_err().message(),
            "submit cannot exceed 24 characters"
        );
    }

    #[test]
    fn submit_required_with_input() {
        let mut builder = simple();
        builder.input(InputBlock::new("Name", PlainTextInputElement::new("name")));
        assert_eq!(
            builder.to_dict().unwrap_err().message(),
            "submit is required when an 'input' block is within the blocks array"
        );

        builder.submit("Save");
        assert!(builder.to_dict().is_ok());
    }

    #[test]
    fn metadata_lengths() {
        let mut builder = simple();
        builder.private_metadata("x".repeat(3000)).callback_id("x".repeat(255));
        assert!(builder.to_dict().is_ok());

        builder.private_metadata("x".repeat(3001));
        assert!(builder.to_dict().is_err());

        let mut builder = simple();
        builder.callback_id("x".repeat(256));
        assert!(builder.to_dict().is_err());

        let mut builder = simple();
        builder.external_id("x".repeat(256));
        assert!(builder.to_dict().is_err());
    }

    #[test]
    fn flags_land_on_view() {
        let mut builder = simple();
        builder.clear_on_close(true).notify_on_close(true).external_id("ext-1");
        let map = builder.to_dict().unwrap();
        assert_eq!(map["clear_on_close"], true);
        assert_eq!(map["notify_on_close"], true);
        assert_eq!(map["external_id"], "ext-1");
        assert!(builder.view().notify_on_close);
    }

    #[test]
    fn revalidates_after_mutation() {
        let mut builder = simple();
        assert!(builder.to_dict().is_ok());
        builder.input(InputBlock::new("Name", PlainTextInputElement::new("name")));
        assert!(builder.to_dict().is_err());
    }

    #[test]
    fn nested_block_errors_surface() {
        let mut builder = simple();
        builder.actions(ActionsBlock::new(vec![ButtonElement::new("x".repeat(301), "b").into()]));
        assert_eq!(
            builder.to_dict().unwrap_err().message(),
            "text attribute cannot exceed 300 characters"
        );
    }

    #[test]
    fn build_yields_view() {
        let view: ModalView = simple().into();
        assert_eq!(view.blocks.len(), 1);
        assert_eq!(view.to_dict().unwrap()["title"]["text"], "Title");
    }
}
