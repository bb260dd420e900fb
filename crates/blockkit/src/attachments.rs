//! Legacy message attachments
//!
//! Secondary, colour-barred message content predating blocks.
//! [`BlockAttachment`] bridges the two by carrying blocks inside an
//! attachment.

use crate::blocks::Block;
use blockkit_core::{
    enum_message, optional_within_length, run_validators, Attribute, Attributes, FormationError,
    JsonObject, Validator,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Named colours accepted besides hex codes
pub const SEEDED_COLORS: &[&str] = &["danger", "good", "warning"];

/// Attachment fields that may be rendered as markdown
pub const MARKDOWN_FIELDS: &[&str] = &["fields", "pretext", "text"];

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9A-Fa-f]{2}){3}$").expect("hex color regex"));

const COLOR_MESSAGE: &str = "color attribute must be 'good', 'warning', 'danger', or a hex color code";

fn color_valid(color: Option<&str>) -> bool {
    color.map_or(true, |c| SEEDED_COLORS.contains(&c) || HEX_COLOR_RE.is_match(c))
}

/// Title/value pair shown in an attachment's field table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentField {
    /// Bold heading
    pub title: Option<String>,
    /// Field text
    pub value: Option<String>,
    /// Narrow enough to sit beside another field
    pub short: bool,
}

impl AttachmentField {
    /// Create short field
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            value: None,
            short: true,
        }
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// With value
    #[inline]
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// With short flag
    #[inline]
    #[must_use]
    pub fn with_short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }
}

impl Default for AttachmentField {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonObject for AttachmentField {
    fn object_name(&self) -> &'static str {
        "AttachmentField"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("title", &self.title)
            .field("value", &self.value)
            .field("short", self.short)
    }
}

/// Legacy attachment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    /// Main body
    pub text: String,
    /// Plain-text summary for clients that cannot render attachments
    pub fallback: Option<String>,
    /// Field table
    pub fields: Vec<AttachmentField>,
    /// Side bar colour: named or `#RRGGBB`
    pub color: Option<String>,
    /// Which of `fields`, `pretext`, `text` are markdown
    pub mrkdwn_in: Vec<String>,
    /// Bold heading
    pub title: Option<String>,
    /// URL the title links to
    pub title_link: Option<String>,
    /// Text above the attachment
    pub pretext: Option<String>,
    /// Author line
    pub author_name: Option<String>,
    /// URL the author line links to
    pub author_link: Option<String>,
    /// Small author icon
    pub author_icon: Option<String>,
    /// Large image; exclusive with `thumb_url`
    pub image_url: Option<String>,
    /// Thumbnail; exclusive with `image_url`
    pub thumb_url: Option<String>,
    /// Footer text
    pub footer: Option<String>,
    /// Small footer icon
    pub footer_icon: Option<String>,
    /// Epoch timestamp shown in the footer
    pub ts: Option<i64>,
}

impl Attachment {
    /// Maximum footer length
    pub const FOOTER_MAX_LENGTH: usize = 300;

    /// Create attachment with body text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// With fallback text
    #[inline]
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// With field table
    #[inline]
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<AttachmentField>) -> Self {
        self.fields = fields;
        self
    }

    /// With colour
    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// With markdown-enabled fields
    #[must_use]
    pub fn with_markdown_in<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mrkdwn_in = fields.into_iter().map(Into::into).collect();
        self
    }

    /// With title and optional link
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>, link: Option<String>) -> Self {
        self.title = Some(title.into());
        self.title_link = link;
        self
    }

    /// With pretext
    #[inline]
    #[must_use]
    pub fn with_pretext(mut self, pretext: impl Into<String>) -> Self {
        self.pretext = Some(pretext.into());
        self
    }

    /// With author line; a link needs both name and icon
    #[must_use]
    pub fn with_author(
        mut self,
        name: impl Into<String>,
        link: Option<String>,
        icon: Option<String>,
    ) -> Self {
        self.author_name = Some(name.into());
        self.author_link = link;
        self.author_icon = icon;
        self
    }

    /// With large image
    #[inline]
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// With thumbnail
    #[inline]
    #[must_use]
    pub fn with_thumb_url(mut self, url: impl Into<String>) -> Self {
        self.thumb_url = Some(url.into());
        self
    }

    /// With footer and optional icon
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>, icon: Option<String>) -> Self {
        self.footer = Some(footer.into());
        self.footer_icon = icon;
        self
    }

    /// With footer timestamp
    #[inline]
    #[must_use]
    pub fn with_ts(mut self, ts: i64) -> Self {
        self.ts = Some(ts);
        self
    }
}

validator_table!(ATTACHMENT_VALIDATORS: Attachment => [
    Validator::new(
        "footer_length",
        format!("footer attribute cannot exceed {} characters", Attachment::FOOTER_MAX_LENGTH),
        |a: &Attachment| optional_within_length(a.footer.as_deref(), Attachment::FOOTER_MAX_LENGTH),
    ),
    Validator::new(
        "ts_without_footer",
        "ts attribute cannot be present if footer attribute is absent",
        |a: &Attachment| a.ts.is_none() || a.footer.is_some(),
    ),
    Validator::new(
        "markdown_in_valid",
        enum_message("mrkdwn_in", MARKDOWN_FIELDS),
        |a: &Attachment| a.mrkdwn_in.iter().all(|f| MARKDOWN_FIELDS.contains(&f.as_str())),
    ),
    Validator::new("color_valid", COLOR_MESSAGE, |a: &Attachment| color_valid(a.color.as_deref())),
    Validator::new(
        "image_url_and_thumb_url_populated",
        "image_url attribute cannot be present if thumb_url is populated",
        |a: &Attachment| a.image_url.is_none() || a.thumb_url.is_none(),
    ),
    Validator::new(
        "author_link_without_author_name",
        "name must be present if link is present",
        |a: &Attachment| a.author_link.is_none() || a.author_name.is_some(),
    ),
    Validator::new(
        "author_link_without_author_icon",
        "icon must be present if link is present",
        |a: &Attachment| a.author_link.is_none() || a.author_icon.is_some(),
    ),
]);

impl JsonObject for Attachment {
    fn object_name(&self) -> &'static str {
        "Attachment"
    }

    fn attributes(&self) -> Attributes<'_> {
        let mrkdwn_in = if self.mrkdwn_in.is_empty() {
            None
        } else {
            Some(self.mrkdwn_in.as_slice())
        };
        Attributes::new()
            .field("text", &self.text)
            .field("fallback", &self.fallback)
            .non_empty_objects("fields", &self.fields)
            .field("color", &self.color)
            .field("mrkdwn_in", mrkdwn_in.map_or(Attribute::Null, Attribute::from))
            .field("title", &self.title)
            .field("title_link", &self.title_link)
            .field("pretext", &self.pretext)
            .field("author_name", &self.author_name)
            .field("author_link", &self.author_link)
            .field("author_icon", &self.author_icon)
            .field("image_url", &self.image_url)
            .field("thumb_url", &self.thumb_url)
            .field("footer", &self.footer)
            .field("footer_icon", &self.footer_icon)
            .field("ts", self.ts)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &ATTACHMENT_VALIDATORS)
    }
}

/// Attachment carrying blocks instead of legacy fields
///
/// Blocks and a field table cannot be combined, so this type has no
/// `fields` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockAttachment {
    /// Blocks rendered inside the attachment
    pub blocks: Vec<Block>,
    /// Side bar colour: named or `#RRGGBB`
    pub color: Option<String>,
}

impl BlockAttachment {
    /// Create block attachment
    #[inline]
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            color: None,
        }
    }

    /// With colour
    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

validator_table!(BLOCK_ATTACHMENT_VALIDATORS: BlockAttachment => [
    Validator::new("color_valid", COLOR_MESSAGE, |a: &BlockAttachment| color_valid(a.color.as_deref())),
]);

impl JsonObject for BlockAttachment {
    fn object_name(&self) -> &'static str {
        "BlockAttachment"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("color", &self.color)
            .objects("blocks", &self.blocks)
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &BLOCK_ATTACHMENT_VALIDATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{DividerBlock, SectionBlock};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[test]
    fn basic_json() {
        let attachment = Attachment::new("some text")
            .with_fields(vec![AttachmentField::new().with_title("a").with_value("b")])
            .with_color("good")
            .with_markdown_in(["text"]);
        assert_eq!(
            Value::Object(attachment.to_dict().unwrap()),
            json!({
                "text": "some text",
                "fields": [{"title": "a", "value": "b", "short": true}],
                "color": "good",
                "mrkdwn_in": ["text"],
            })
        );
    }

    #[test]
    fn empty_collections_dropped() {
        assert_eq!(
            Value::Object(Attachment::new("t").to_dict().unwrap()),
            json!({"text": "t"})
        );
    }

    #[test]
    fn footer_rules() {
        assert!(Attachment::new("t").with_footer("x".repeat(301), None).to_dict().is_err());
        assert_eq!(
            Attachment::new("t").with_ts(1_234_567_890).to_dict().unwrap_err().message(),
            "ts attribute cannot be present if footer attribute is absent"
        );
        assert!(Attachment::new("t")
            .with_footer("footer", None)
            .with_ts(1_234_567_890)
            .to_dict()
            .is_ok());
    }

    #[test]
    fn markdown_in_values() {
        let err = Attachment::new("t")
            .with_markdown_in(["text", "title"])
            .to_dict()
            .unwrap_err();
        assert_eq!(
            err.message(),
            "mrkdwn_in attribute must be one of the following values: fields, pretext, text"
        );
    }

    #[test]
    fn colors() {
        for color in ["good", "warning", "danger", "#FF00aa", "#000000"] {
            assert!(Attachment::new("t").with_color(color).to_dict().is_ok(), "{color}");
        }
        for color in ["red", "#FFF", "FF00AA", "#GG0000"] {
            assert!(Attachment::new("t").with_color(color).to_dict().is_err(), "{color}");
        }
    }

    #[test]
    fn image_and_thumb_exclusive() {
        let attachment = Attachment::new("t")
            .with_image_url("http://x.com/a.png")
            .with_thumb_url("http://x.com/b.png");
        assert!(attachment.to_dict().is_err());
    }

    #[test]
    fn author_link_requirements() {
        let missing_icon =
            Attachment::new("t").with_author("me", Some("http://x.com".to_string()), None);
        assert_eq!(
            missing_icon.to_dict().unwrap_err().message(),
            "icon must be present if link is present"
        );

        let complete = Attachment::new("t").with_author(
            "me",
            Some("http://x.com".to_string()),
            Some("http://x.com/i.png".to_string()),
        );
        assert!(complete.to_dict().is_ok());
    }

    #[test]
    fn block_attachment_json() {
        let attachment = BlockAttachment::new(vec![
            SectionBlock::markdown("hi").into(),
            DividerBlock::new().into(),
        ])
        .with_color("#36a64f");
        assert_eq!(
            Value::Object(attachment.to_dict().unwrap()),
            json!({
                "color": "#36a64f",
                "blocks": [
                    {"type": "section", "text": {"type": "mrkdwn", "text": "hi", "verbatim": false}},
                    {"type": "divider"},
                ],
            })
        );
    }

    #[test]
    fn block_attachment_color() {
        assert!(BlockAttachment::new(Vec::new()).with_color("blue").to_dict().is_err());
    }
}
