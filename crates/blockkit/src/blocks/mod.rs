//! Layout blocks
//!
//! Top-level units of a message or view. Every block fixes its `type`
//! discriminator and may carry a `block_id` to identify it in interaction
//! payloads.

mod actions;
mod context;
mod divider;
mod file;
mod image;
mod input;
mod section;

pub use actions::ActionsBlock;
pub use context::{ContextBlock, ContextElement};
pub use divider::DividerBlock;
pub use file::{FileBlock, FILE_SOURCES};
pub use image::ImageBlock;
pub use input::InputBlock;
pub use section::{SectionBlock, SectionText};

use blockkit_core::{optional_within_length, Validator};

/// Maximum `block_id` length shared by every block
pub const BLOCK_ID_MAX_LENGTH: usize = 255;

/// Block that may be addressed by id
pub trait LayoutBlock {
    /// Identifier echoed back in interaction payloads
    fn block_id(&self) -> Option<&str>;
}

/// `block_id` length check for any block
pub(crate) fn block_id_length<T: LayoutBlock>() -> Validator<T> {
    Validator::new(
        "block_id_length",
        format!("block_id cannot exceed {BLOCK_ID_MAX_LENGTH} characters"),
        |b: &T| optional_within_length(b.block_id(), BLOCK_ID_MAX_LENGTH),
    )
}

/// Any layout block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `section`
    Section(SectionBlock),
    /// `divider`
    Divider(DividerBlock),
    /// `image`
    Image(ImageBlock),
    /// `actions`
    Actions(ActionsBlock),
    /// `context`
    Context(ContextBlock),
    /// `input`
    Input(InputBlock),
    /// `file`
    File(FileBlock),
}

impl Block {
    /// Collects user input; views containing one need a submit button
    #[inline]
    #[must_use]
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    /// Wire `type` of the wrapped block
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Section(_) => "section",
            Self::Divider(_) => "divider",
            Self::Image(_) => "image",
            Self::Actions(_) => "actions",
            Self::Context(_) => "context",
            Self::Input(_) => "input",
            Self::File(_) => "file",
        }
    }
}

impl LayoutBlock for Block {
    fn block_id(&self) -> Option<&str> {
        match self {
            Self::Section(b) => b.block_id(),
            Self::Divider(b) => b.block_id(),
            Self::Image(b) => b.block_id(),
            Self::Actions(b) => b.block_id(),
            Self::Context(b) => b.block_id(),
            Self::Input(b) => b.block_id(),
            Self::File(b) => b.block_id(),
        }
    }
}

delegate_json_object!(Block {
    Section(SectionBlock),
    Divider(DividerBlock),
    Image(ImageBlock),
    Actions(ActionsBlock),
    Context(ContextBlock),
    Input(InputBlock),
    File(FileBlock),
});
