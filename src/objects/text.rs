//! Text composition objects.
//!
//! A [`Text`] is the leaf of almost every payload. Containers do not take a
//! `Text` directly; they take a [`TextLike`] and resolve it through a
//! text slot, which applies the container's own length limit and, for
//! plain-text-only positions, converts styled text to plain text.

use crate::{
    error::{Constraint, ValidationResult},
    render::{Render, is_false},
    validation::{limits, rules},
};
use serde::Serialize;
use std::fmt;

/// Formatting mode of a text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextType {
    /// Unformatted text.
    #[serde(rename = "plain_text")]
    Plain,
    /// Text using the platform's `mrkdwn` formatting syntax.
    #[serde(rename = "mrkdwn")]
    Markdown,
}

impl TextType {
    /// Returns the wire name of the text type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain_text",
            Self::Markdown => "mrkdwn",
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text object, formatted either as plain text or as `mrkdwn`.
///
/// # Invariants
///
/// - content is between 1 and 3000 characters
/// - `emoji` is only ever set on plain text
/// - `verbatim` is only ever set on `mrkdwn` text
///
/// # Examples
///
/// ```
/// use blockkit::objects::Text;
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let text = Text::plain("Hello :wave:").expect("valid text").with_emoji(true);
/// assert_eq!(
///     text.to_value().expect("serialisable"),
///     json!({"type": "plain_text", "text": "Hello :wave:", "emoji": true})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    #[serde(rename = "type")]
    kind: TextType,
    text: String,
    #[serde(skip_serializing_if = "is_false")]
    emoji: bool,
    #[serde(skip_serializing_if = "is_false")]
    verbatim: bool,
}

impl Text {
    /// Creates a text object of the given type.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) for
    /// `text` when the content is empty or longer than 3000 characters.
    pub fn new(kind: TextType, text: impl Into<String>) -> ValidationResult<Self> {
        let content = rules::bounded("text", text, 1, limits::TEXT)?;
        Ok(Self {
            kind,
            text: content,
            emoji: false,
            verbatim: false,
        })
    }

    /// Creates a plain-text object.
    ///
    /// # Errors
    ///
    /// See [`Text::new`].
    pub fn plain(text: impl Into<String>) -> ValidationResult<Self> {
        Self::new(TextType::Plain, text)
    }

    /// Creates a `mrkdwn` text object.
    ///
    /// # Errors
    ///
    /// See [`Text::new`].
    pub fn markdown(text: impl Into<String>) -> ValidationResult<Self> {
        Self::new(TextType::Markdown, text)
    }

    /// Requests that emoji shortcodes are rendered. Ignored for `mrkdwn`.
    #[must_use]
    pub fn with_emoji(mut self, emoji: bool) -> Self {
        self.emoji = emoji && self.kind == TextType::Plain;
        self
    }

    /// Disables automatic link, channel and user parsing. Ignored for plain
    /// text.
    #[must_use]
    pub fn with_verbatim(mut self, verbatim: bool) -> Self {
        self.verbatim = verbatim && self.kind == TextType::Markdown;
        self
    }

    /// Converts the object to plain text, keeping content and emoji flag.
    #[must_use]
    pub fn into_plain(mut self) -> Self {
        self.kind = TextType::Plain;
        self.verbatim = false;
        self
    }

    /// Returns the text type.
    #[must_use]
    pub const fn kind(&self) -> TextType {
        self.kind
    }

    /// Returns the text content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of characters in the content.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if emoji rendering is requested.
    #[must_use]
    pub const fn emoji(&self) -> bool {
        self.emoji
    }

    /// Returns `true` if `mrkdwn` auto-parsing is disabled.
    #[must_use]
    pub const fn verbatim(&self) -> bool {
        self.verbatim
    }
}

impl Render for Text {}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Input accepted wherever a text object is expected.
///
/// Raw strings are converted to a `Text` by the receiving container, which
/// decides the type and validates the length for its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextLike {
    /// A raw string, typed by the receiving container.
    Raw(String),
    /// A fully formed text object.
    Text(Text),
}

impl From<&str> for TextLike {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_owned())
    }
}

impl From<String> for TextLike {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<Text> for TextLike {
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}

/// The text constraints of one field in a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TextSlot {
    field: &'static str,
    max: usize,
    default: TextType,
    plain_only: bool,
}

impl TextSlot {
    /// A field that accepts either text type; raw strings become `mrkdwn`.
    pub(crate) const fn any(field: &'static str, max: usize) -> Self {
        Self {
            field,
            max,
            default: TextType::Markdown,
            plain_only: false,
        }
    }

    /// A field that accepts either text type; raw strings become plain text.
    pub(crate) const fn prefer_plain(field: &'static str, max: usize) -> Self {
        Self {
            field,
            max,
            default: TextType::Plain,
            plain_only: false,
        }
    }

    /// A field that only accepts plain text.
    pub(crate) const fn plain(field: &'static str, max: usize) -> Self {
        Self {
            field,
            max,
            default: TextType::Plain,
            plain_only: true,
        }
    }

    /// Resolves the input into a text object valid for this field.
    pub(crate) fn resolve(self, input: TextLike) -> ValidationResult<Text> {
        let max = self.max.min(limits::TEXT);
        match input {
            TextLike::Raw(raw) => {
                rules::check_length(self.field, &raw, 1, max)?;
                Ok(Text {
                    kind: self.default,
                    text: raw,
                    emoji: false,
                    verbatim: false,
                })
            }
            TextLike::Text(text) => {
                let actual = text.char_len();
                if actual > max {
                    return Err(rules::reject(
                        self.field,
                        Constraint::TooLong { max, actual },
                    ));
                }
                Ok(if self.plain_only {
                    text.into_plain()
                } else {
                    text
                })
            }
        }
    }

    /// Resolves an optional input; `None` stays `None`.
    pub(crate) fn resolve_opt(self, input: Option<TextLike>) -> ValidationResult<Option<Text>> {
        input.map(|inner| self.resolve(inner)).transpose()
    }
}
