//! Inline rich text primitives: styled text, links, emoji and mentions.

use crate::{
    error::{Constraint, ValidationResult},
    render::Render,
    validation::{limits, rules},
};
use serde::Serialize;

/// Inline styling applied to a rich text element.
///
/// Only flags that were set are emitted; an empty style is omitted from its
/// element entirely. Text runs and links accept `bold`, `italic`, `strike`
/// and `code`. Mentions accept `bold`, `italic`, `strike`, `highlight`,
/// `client_highlight` and `unlink`.
///
/// # Examples
///
/// ```
/// use blockkit::rich_text::RichTextStyle;
///
/// let style = RichTextStyle::new().bold().code();
/// assert!(!style.is_empty());
/// assert!(RichTextStyle::new().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RichTextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strike: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_highlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unlink: Option<bool>,
}

impl RichTextStyle {
    /// Creates an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bold: None,
            italic: None,
            strike: None,
            code: None,
            highlight: None,
            client_highlight: None,
            unlink: None,
        }
    }

    /// Renders the element in bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    /// Renders the element in italics.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    /// Renders the element struck through.
    #[must_use]
    pub const fn strike(mut self) -> Self {
        self.strike = Some(true);
        self
    }

    /// Renders the element as inline code.
    #[must_use]
    pub const fn code(mut self) -> Self {
        self.code = Some(true);
        self
    }

    /// Highlights a mention.
    #[must_use]
    pub const fn highlight(mut self) -> Self {
        self.highlight = Some(true);
        self
    }

    /// Highlights a mention for the viewing client only.
    #[must_use]
    pub const fn client_highlight(mut self) -> Self {
        self.client_highlight = Some(true);
        self
    }

    /// Renders a mention without a link.
    #[must_use]
    pub const fn unlink(mut self) -> Self {
        self.unlink = Some(true);
        self
    }

    /// Returns `true` if no flag is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bold.is_none()
            && self.italic.is_none()
            && self.strike.is_none()
            && self.code.is_none()
            && self.highlight.is_none()
            && self.client_highlight.is_none()
            && self.unlink.is_none()
    }

    fn for_text(self, context: &'static str) -> ValidationResult<Self> {
        let mention_only = [
            ("highlight", self.highlight),
            ("client_highlight", self.client_highlight),
            ("unlink", self.unlink),
        ];
        reject_flags(context, &mention_only)?;
        Ok(self)
    }

    fn for_mention(self, context: &'static str) -> ValidationResult<Self> {
        reject_flags(context, &[("code", self.code)])?;
        Ok(self)
    }
}

fn reject_flags(
    context: &'static str,
    flags: &[(&'static str, Option<bool>)],
) -> ValidationResult<()> {
    match flags.iter().find(|(_, flag)| flag.is_some()) {
        Some(&(kind, _)) => Err(rules::reject(
            "style",
            Constraint::NotPermitted { kind, context },
        )),
        None => Ok(()),
    }
}

/// A run of literal text.
///
/// # Examples
///
/// ```
/// use blockkit::rich_text::{RichTextStyle, TextRun};
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let run = TextRun::new("careful")
///     .and_then(|run| run.with_style(RichTextStyle::new().italic()))
///     .expect("valid run");
/// assert_eq!(
///     run.to_value().expect("serialisable"),
///     json!({"type": "text", "text": "careful", "style": {"italic": true}})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct TextRun {
    text: String,
    #[serde(skip_serializing_if = "RichTextStyle::is_empty")]
    style: RichTextStyle,
}

impl TextRun {
    /// Creates an unstyled text run.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `text` when it is empty.
    pub fn new(text: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            text: rules::bounded("text", text, 1, usize::MAX)?,
            style: RichTextStyle::new(),
        })
    }

    /// Applies a style to the run.
    ///
    /// # Errors
    ///
    /// Returns [`Constraint::NotPermitted`] when the style sets a
    /// mention-only flag.
    pub fn with_style(mut self, style: RichTextStyle) -> ValidationResult<Self> {
        self.style = style.for_text("text")?;
        Ok(self)
    }

    /// Returns the literal text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A hyperlink, optionally with display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "link")]
pub struct Link {
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "unsafe", skip_serializing_if = "Option::is_none")]
    is_unsafe: Option<bool>,
    #[serde(skip_serializing_if = "RichTextStyle::is_empty")]
    style: RichTextStyle,
}

impl Link {
    /// Creates a link to `url`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `url` when it is empty or longer than
    /// 3000 characters.
    pub fn new(url: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            url: rules::bounded("url", url, 1, limits::URL)?,
            text: None,
            is_unsafe: None,
            style: RichTextStyle::new(),
        })
    }

    /// Sets the text shown in place of the URL.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `text` when it is empty.
    pub fn with_text(mut self, text: impl Into<String>) -> ValidationResult<Self> {
        self.text = Some(rules::bounded("text", text, 1, usize::MAX)?);
        Ok(self)
    }

    /// Marks the link as unsafe, which suppresses the link preview.
    #[must_use]
    pub const fn with_unsafe(mut self, is_unsafe: bool) -> Self {
        self.is_unsafe = Some(is_unsafe);
        self
    }

    /// Applies a style to the link text.
    ///
    /// # Errors
    ///
    /// Returns [`Constraint::NotPermitted`] when the style sets a
    /// mention-only flag.
    pub fn with_style(mut self, style: RichTextStyle) -> ValidationResult<Self> {
        self.style = style.for_text("link")?;
        Ok(self)
    }
}

/// An emoji by shortcode name, without surrounding colons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "emoji")]
pub struct Emoji {
    name: String,
}

impl Emoji {
    /// Creates an emoji reference.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `name` when it is empty.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: rules::bounded("name", name, 1, usize::MAX)?,
        })
    }
}

/// A mention of a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "channel")]
pub struct ChannelMention {
    channel_id: String,
    #[serde(skip_serializing_if = "RichTextStyle::is_empty")]
    style: RichTextStyle,
}

impl ChannelMention {
    /// Creates a mention of the channel `channel_id`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `channel_id` when it is empty.
    pub fn new(channel_id: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            channel_id: rules::bounded("channel_id", channel_id, 1, usize::MAX)?,
            style: RichTextStyle::new(),
        })
    }

    /// Applies a style to the mention.
    ///
    /// # Errors
    ///
    /// Returns [`Constraint::NotPermitted`] when the style sets `code`.
    pub fn with_style(mut self, style: RichTextStyle) -> ValidationResult<Self> {
        self.style = style.for_mention("channel")?;
        Ok(self)
    }
}

/// A mention of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "user")]
pub struct UserMention {
    user_id: String,
    #[serde(skip_serializing_if = "RichTextStyle::is_empty")]
    style: RichTextStyle,
}

impl UserMention {
    /// Creates a mention of the user `user_id`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `user_id` when it is empty.
    pub fn new(user_id: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            user_id: rules::bounded("user_id", user_id, 1, usize::MAX)?,
            style: RichTextStyle::new(),
        })
    }

    /// Applies a style to the mention.
    ///
    /// # Errors
    ///
    /// Returns [`Constraint::NotPermitted`] when the style sets `code`.
    pub fn with_style(mut self, style: RichTextStyle) -> ValidationResult<Self> {
        self.style = style.for_mention("user")?;
        Ok(self)
    }
}

/// A mention of a user group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "user_group")]
pub struct UserGroupMention {
    user_group_id: String,
    #[serde(skip_serializing_if = "RichTextStyle::is_empty")]
    style: RichTextStyle,
}

impl UserGroupMention {
    /// Creates a mention of the user group `user_group_id`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `user_group_id` when it is empty.
    pub fn new(user_group_id: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            user_group_id: rules::bounded("user_group_id", user_group_id, 1, usize::MAX)?,
            style: RichTextStyle::new(),
        })
    }

    /// Applies a style to the mention.
    ///
    /// # Errors
    ///
    /// Returns [`Constraint::NotPermitted`] when the style sets `code`.
    pub fn with_style(mut self, style: RichTextStyle) -> ValidationResult<Self> {
        self.style = style.for_mention("user_group")?;
        Ok(self)
    }
}

/// Any inline rich text element. Each variant serialises its own `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RichTextElement {
    /// Literal text.
    Text(TextRun),
    /// Channel mention.
    Channel(ChannelMention),
    /// Emoji.
    Emoji(Emoji),
    /// Hyperlink.
    Link(Link),
    /// User mention.
    User(UserMention),
    /// User group mention.
    UserGroup(UserGroupMention),
}

impl RichTextElement {
    /// Creates an unstyled text element.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `text` when it is empty.
    pub fn text(text: impl Into<String>) -> ValidationResult<Self> {
        TextRun::new(text).map(Self::Text)
    }

    /// Returns the wire name of the element type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Channel(_) => "channel",
            Self::Emoji(_) => "emoji",
            Self::Link(_) => "link",
            Self::User(_) => "user",
            Self::UserGroup(_) => "user_group",
        }
    }
}

impl Render for RichTextElement {}
impl Render for TextRun {}

impl From<TextRun> for RichTextElement {
    fn from(run: TextRun) -> Self {
        Self::Text(run)
    }
}

impl From<ChannelMention> for RichTextElement {
    fn from(mention: ChannelMention) -> Self {
        Self::Channel(mention)
    }
}

impl From<Emoji> for RichTextElement {
    fn from(emoji: Emoji) -> Self {
        Self::Emoji(emoji)
    }
}

impl From<Link> for RichTextElement {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

impl From<UserMention> for RichTextElement {
    fn from(mention: UserMention) -> Self {
        Self::User(mention)
    }
}

impl From<UserGroupMention> for RichTextElement {
    fn from(mention: UserGroupMention) -> Self {
        Self::UserGroup(mention)
    }
}
