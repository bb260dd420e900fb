//! Blockkit - typed block payloads
//!
//! Strongly-typed, self-validating object model for the block-kit JSON
//! consumed by the messaging platform's web API:
//! - Composition objects: text, confirmation dialogs, options, link formatters
//! - Block elements: buttons, selects, overflow menus, date pickers, inputs
//! - Layout blocks: section, divider, image, actions, context, input, file
//! - Legacy attachments, including block-carrying attachments
//! - Modal views and their fluent builder
//!
//! Every type implements [`JsonObject`]: `to_dict` validates the object and
//! everything nested in it, then returns the wire mapping with absent fields
//! dropped. The first violated constraint surfaces as a [`FormationError`].
//!
//! # Example
//!
//! ```rust
//! use blockkit::prelude::*;
//!
//! let section = SectionBlock::markdown("hi").with_block_id("b1");
//! let map = section.to_dict().unwrap();
//! assert_eq!(map["type"], "section");
//! assert_eq!(map["text"]["type"], "mrkdwn");
//!
//! let too_long = ButtonElement::new("x".repeat(301), "click");
//! assert!(too_long.to_dict().is_err());
//! ```

#![warn(unreachable_pub)]

#[macro_use]
mod macros;

pub mod attachments;
pub mod blocks;
pub mod elements;
pub mod modals;
pub mod objects;

// Re-exports for convenience
pub use attachments::{Attachment, AttachmentField, BlockAttachment};
pub use blockkit_core::{
    to_json_string, Format, FormationError, JsonMap, JsonObject, SerializeConfig,
};
pub use blocks::{
    ActionsBlock, Block, ContextBlock, ContextElement, DividerBlock, FileBlock, ImageBlock,
    InputBlock, LayoutBlock, SectionBlock, SectionText,
};
pub use elements::{
    BlockElement, ButtonElement, ButtonStyle, ChannelMultiSelectElement, ChannelSelectElement,
    ConversationMultiSelectElement, ConversationSelectElement, DatePickerElement,
    ExternalDataMultiSelectElement, ExternalDataSelectElement, ImageElement, InteractiveElement,
    OverflowMenuElement, PlainTextInputElement, StaticMultiSelectElement, StaticSelectElement,
    UserMultiSelectElement, UserSelectElement,
};
pub use modals::{ModalBuilder, ModalView};
pub use objects::{
    ChannelLink, ConfirmObject, DateLink, EveryoneLink, HereLink, Link, MarkdownText, ObjectLink,
    OptionGroup, OptionObject, PlainText, TextObject,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building payloads
    pub use crate::{
        ActionsBlock, Block, BlockElement, ButtonElement, ConfirmObject, ContextBlock,
        DividerBlock, FormationError, ImageBlock, ImageElement, InputBlock, JsonObject,
        MarkdownText, ModalBuilder, OptionObject, PlainText, PlainTextInputElement, SectionBlock,
        StaticSelectElement, TextObject,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
