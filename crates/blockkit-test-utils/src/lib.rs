//! Testing utilities for the blockkit workspace
//!
//! Shared fixtures, boundary-length strings and tracing setup.

#![allow(missing_docs)]

use blockkit::{
    ButtonElement, ConfirmObject, ImageElement, MarkdownText, OptionGroup, OptionObject,
    PlainText,
};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output to the test harness; honours `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// `len` copies of `a`
pub fn string_of_len(len: usize) -> String {
    "a".repeat(len)
}

pub fn string_51_chars() -> String {
    string_of_len(51)
}

pub fn string_301_chars() -> String {
    string_of_len(301)
}

pub fn string_3001_chars() -> String {
    string_of_len(3001)
}

pub fn plain_text() -> PlainText {
    PlainText::new("some text")
}

pub fn markdown_text() -> MarkdownText {
    MarkdownText::new("*some* text")
}

/// Three options whose labels and values match
pub fn options() -> Vec<OptionObject> {
    ["one", "two", "three"]
        .into_iter()
        .map(OptionObject::from_single_value)
        .collect()
}

/// `n` options labelled `opt-0..n`
pub fn numbered_options(n: usize) -> Vec<OptionObject> {
    (0..n)
        .map(|i| OptionObject::from_single_value(format!("opt-{i}")))
        .collect()
}

pub fn option_groups() -> Vec<OptionGroup> {
    vec![
        OptionGroup::new("first", options()),
        OptionGroup::new("second", numbered_options(2)),
    ]
}

pub fn confirm() -> ConfirmObject {
    ConfirmObject::new("Are you sure?", "This cannot be undone")
}

pub fn button(action_id: &str) -> ButtonElement {
    ButtonElement::new("Click me", action_id).with_value("clicked")
}

pub fn image_element() -> ImageElement {
    ImageElement::new("http://example.com/cat.png", "a cat")
}
