//! Text composition objects
//!
//! Text objects carry no length limit of their own: the limit depends on the
//! containing field (button text, section text, confirm title, ...), so the
//! container validates it.

use blockkit_core::{Attributes, FormationError, JsonMap, JsonObject};

/// `plain_text` object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainText {
    /// Displayed text
    pub text: String,
    /// Escape emoji shortcodes into emoji
    pub emoji: bool,
}

impl PlainText {
    /// Create plain text with emoji rendering enabled
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: true,
        }
    }

    /// With emoji flag
    #[inline]
    #[must_use]
    pub fn with_emoji(mut self, emoji: bool) -> Self {
        self.emoji = emoji;
        self
    }

    /// Text content
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mapping form of a default plain-text object for `text`
    ///
    /// # Errors
    /// Never fails in practice; text objects have no validators.
    pub fn direct_from_string(text: impl Into<String>) -> Result<JsonMap, FormationError> {
        Self::new(text).to_dict()
    }
}

impl JsonObject for PlainText {
    fn object_name(&self) -> &'static str {
        "PlainTextObject"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "plain_text")
            .field("text", &self.text)
            .field("emoji", self.emoji)
    }
}

impl From<&str> for PlainText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for PlainText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// `mrkdwn` object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownText {
    /// Markdown source
    pub text: String,
    /// Skip automatic link and mention parsing
    pub verbatim: bool,
}

impl MarkdownText {
    /// Create markdown text (not verbatim)
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verbatim: false,
        }
    }

    /// With verbatim flag
    #[inline]
    #[must_use]
    pub fn with_verbatim(mut self, verbatim: bool) -> Self {
        self.verbatim = verbatim;
        self
    }

    /// Text content
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mapping form of a default markdown object for `text`
    ///
    /// # Errors
    /// Never fails in practice; text objects have no validators.
    pub fn direct_from_string(text: impl Into<String>) -> Result<JsonMap, FormationError> {
        Self::new(text).to_dict()
    }
}

impl JsonObject for MarkdownText {
    fn object_name(&self) -> &'static str {
        "MarkdownTextObject"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "mrkdwn")
            .field("text", &self.text)
            .field("verbatim", self.verbatim)
    }
}

/// Either kind of text object
///
/// Raw strings convert to plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextObject {
    /// `plain_text`
    Plain(PlainText),
    /// `mrkdwn`
    Markdown(MarkdownText),
}

impl TextObject {
    /// Text content regardless of kind
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(t) => &t.text,
            Self::Markdown(t) => &t.text,
        }
    }
}

delegate_json_object!(TextObject {
    Plain(PlainText),
    Markdown(MarkdownText),
});

impl From<&str> for TextObject {
    fn from(text: &str) -> Self {
        Self::Plain(PlainText::new(text))
    }
}

impl From<String> for TextObject {
    fn from(text: String) -> Self {
        Self::Plain(PlainText::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[test]
    fn plain_text_basic_json() {
        assert_eq!(
            Value::Object(PlainText::new("some text").to_dict().unwrap()),
            json!({"text": "some text", "type": "plain_text", "emoji": true})
        );
        assert_eq!(
            Value::Object(PlainText::new("some text").with_emoji(false).to_dict().unwrap()),
            json!({"text": "some text", "emoji": false, "type": "plain_text"})
        );
    }

    #[test]
    fn plain_text_from_string() {
        let plaintext = PlainText::new("some text");
        assert_eq!(
            plaintext.to_dict().unwrap(),
            PlainText::direct_from_string("some text").unwrap()
        );
    }

    #[test]
    fn markdown_basic_json() {
        assert_eq!(
            Value::Object(MarkdownText::new("some text").to_dict().unwrap()),
            json!({"text": "some text", "type": "mrkdwn", "verbatim": false})
        );
        assert_eq!(
            Value::Object(MarkdownText::new("some text").with_verbatim(true).to_dict().unwrap()),
            json!({"text": "some text", "verbatim": true, "type": "mrkdwn"})
        );
    }

    #[test]
    fn markdown_from_string() {
        let markdown = MarkdownText::new("some text");
        assert_eq!(
            markdown.to_dict().unwrap(),
            MarkdownText::direct_from_string("some text").unwrap()
        );
    }

    #[test]
    fn text_object_delegates() {
        let text: TextObject = MarkdownText::new("hi").into();
        assert_eq!(text.object_name(), "MarkdownTextObject");
        assert_eq!(text.text(), "hi");
        assert_eq!(
            Value::Object(text.to_dict().unwrap()),
            json!({"type": "mrkdwn", "text": "hi", "verbatim": false})
        );
    }

    #[test]
    fn raw_string_normalizes_to_plain_text() {
        let text = TextObject::from("hello");
        assert_eq!(text, TextObject::Plain(PlainText::new("hello")));
    }

    #[test]
    fn display_form() {
        assert_eq!(
            PlainText::new("a").display().to_string(),
            r#"<slack.PlainTextObject: {"type":"plain_text","text":"a","emoji":true}>"#
        );
    }
}
