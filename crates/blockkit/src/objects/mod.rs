//! Composition objects
//!
//! Small building blocks reused across elements and blocks: text, confirm
//! dialogs, options and mention/link markup.

mod confirm;
mod link;
mod option;
mod text;

pub use confirm::ConfirmObject;
pub use link::{ChannelLink, DateLink, EveryoneLink, HereLink, Link, ObjectLink};
pub use option::{OptionGroup, OptionObject};
pub use text::{MarkdownText, PlainText, TextObject};
