//! Message-formatting links
//!
//! These render straight to the platform's angle-bracket markup instead of
//! a JSON mapping.

use std::fmt::{self, Display, Formatter};

/// URL link, optionally labelled: `<url>` or `<url|text>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target
    pub url: String,
    /// Label; empty renders the bare url
    pub text: String,
}

impl Link {
    /// Create link
    #[inline]
    #[must_use]
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

impl Display for Link {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "<{}>", self.url)
        } else {
            write!(f, "<{}|{}>", self.url, self.text)
        }
    }
}

/// Date rendered in the reader's local time zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLink {
    /// Unix epoch seconds
    pub date: i64,
    /// Token string such as `{date_long}`
    pub date_format: String,
    /// Text shown by clients that cannot format the date
    pub fallback: String,
    /// Optional target the date links to
    pub link: Option<String>,
}

impl DateLink {
    /// Create date link without a target
    #[inline]
    #[must_use]
    pub fn new(date: i64, date_format: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            date,
            date_format: date_format.into(),
            fallback: fallback.into(),
            link: None,
        }
    }

    /// With link target
    #[inline]
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

impl Display for DateLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}^{}", self.date, self.date_format)?;
        if let Some(link) = &self.link {
            write!(f, "^{link}")?;
        }
        write!(f, "|{}>", self.fallback)
    }
}

/// Mention of a channel, user group or user by id
///
/// The id prefix picks the markup: `C`/`G` channels, `S` user groups,
/// anything else a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLink {
    /// Platform object id
    pub object_id: String,
    /// Optional label
    pub text: Option<String>,
}

impl ObjectLink {
    /// Create mention
    #[inline]
    #[must_use]
    pub fn new(object_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            text: None,
        }
    }

    /// With label
    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    fn prefix(&self) -> &'static str {
        match self.object_id.chars().next() {
            Some('C' | 'G') => "#",
            Some('S') => "!subteam^",
            _ => "@",
        }
    }
}

impl Display for ObjectLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let url = format!("{}{}", self.prefix(), self.object_id);
        Link::new(url, self.text.clone().unwrap_or_default()).fmt(f)
    }
}

/// `@channel` mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelLink;

/// `@here` mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HereLink;

/// `@everyone` mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EveryoneLink;

impl From<ChannelLink> for Link {
    fn from(_: ChannelLink) -> Self {
        Self::new("!channel", "channel")
    }
}

impl From<HereLink> for Link {
    fn from(_: HereLink) -> Self {
        Self::new("!here", "here")
    }
}

impl From<EveryoneLink> for Link {
    fn from(_: EveryoneLink) -> Self {
        Self::new("!everyone", "everyone")
    }
}

impl Display for ChannelLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Link::from(*self).fmt(f)
    }
}

impl Display for HereLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Link::from(*self).fmt(f)
    }
}

impl Display for EveryoneLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Link::from(*self).fmt(f)
    }
}
