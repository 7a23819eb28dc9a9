//! Secondary message attachments with a coloured side bar.

use super::check_blocks;
use crate::{
    blocks::Block,
    config::SurfaceLimits,
    error::{Constraint, ValidationResult},
    render::Render,
    validation::rules,
};
use serde::Serialize;
use std::borrow::Cow;

/// Colour of an attachment's side bar.
///
/// Either one of the platform's named colours or a `#rrggbb` hex code.
///
/// # Examples
///
/// ```
/// use blockkit::surfaces::Color;
///
/// assert_eq!(Color::GOOD.as_str(), "good");
/// assert_eq!(Color::hex("36a64f").expect("valid hex").as_str(), "#36a64f");
/// assert!(Color::hex("#36a64").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Named colour for positive outcomes.
    pub const GOOD: Self = Self(Cow::Borrowed("good"));
    /// Named colour for warnings.
    pub const WARNING: Self = Self(Cow::Borrowed("warning"));
    /// Named colour for failures.
    pub const DANGER: Self = Self(Cow::Borrowed("danger"));
    /// `#ff0000`.
    pub const RED: Self = Self(Cow::Borrowed("#ff0000"));
    /// `#0000ff`.
    pub const BLUE: Self = Self(Cow::Borrowed("#0000ff"));
    /// `#ffff00`.
    pub const YELLOW: Self = Self(Cow::Borrowed("#ffff00"));
    /// `#00ff00`.
    pub const GREEN: Self = Self(Cow::Borrowed("#00ff00"));
    /// `#ff8800`.
    pub const ORANGE: Self = Self(Cow::Borrowed("#ff8800"));
    /// `#8800ff`.
    pub const PURPLE: Self = Self(Cow::Borrowed("#8800ff"));
    /// `#000000`.
    pub const BLACK: Self = Self(Cow::Borrowed("#000000"));

    /// Parses a six-digit hex colour, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`Constraint::InvalidFormat`] for `color` when the value is
    /// not six hexadecimal digits.
    pub fn hex(value: &str) -> ValidationResult<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() == 6 && digits.chars().all(|digit| digit.is_ascii_hexdigit()) {
            return Ok(Self(Cow::Owned(format!("#{digits}"))));
        }
        Err(rules::reject(
            "color",
            Constraint::InvalidFormat {
                value: value.to_owned(),
                expected: "#rrggbb",
            },
        ))
    }

    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A legacy attachment field, shown as a titled value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentField {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    short: bool,
}

impl AttachmentField {
    /// Creates a field.
    ///
    /// # Errors
    ///
    /// Returns [`Constraint::MissingOneOf`] when neither title nor value is
    /// given.
    pub fn new(title: Option<String>, value: Option<String>) -> ValidationResult<Self> {
        rules::require_any(
            "field",
            &["title", "value"],
            &[title.is_some(), value.is_some()],
        )?;
        Ok(Self {
            title,
            value,
            short: false,
        })
    }

    /// Allows the field to share a row with another short field.
    #[must_use]
    pub const fn with_short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }
}

/// Lower-priority content attached below a message.
///
/// # Examples
///
/// ```
/// use blockkit::blocks::SectionBlock;
/// use blockkit::surfaces::{Attachment, Color};
/// use blockkit::render::Render;
///
/// let attachment = Attachment::builder()
///     .with_block(SectionBlock::new("Build passed").expect("valid section"))
///     .with_color(Color::GOOD)
///     .build()
///     .expect("valid attachment");
/// let json = attachment.to_value().expect("serialisable");
/// assert_eq!(json["color"], "good");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<AttachmentField>,
}

impl Attachment {
    /// Starts building an attachment.
    #[must_use]
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }

    /// Returns the blocks in render order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the side bar colour, if any.
    #[must_use]
    pub const fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Render for Attachment {}

/// Builder for [`Attachment`].
#[derive(Debug, Clone, Default)]
pub struct AttachmentBuilder {
    blocks: Vec<Block>,
    color: Option<Color>,
    fields: Vec<AttachmentField>,
}

impl AttachmentBuilder {
    /// Appends a block.
    #[must_use]
    pub fn with_block(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    /// Appends several blocks, keeping their order.
    #[must_use]
    pub fn with_blocks<I, B>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        self.blocks.extend(blocks.into_iter().map(Into::into));
        self
    }

    /// Sets the side bar colour.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Appends a legacy field.
    #[must_use]
    pub fn with_field(mut self, field: AttachmentField) -> Self {
        self.fields.push(field);
        self
    }

    /// Validates and builds the attachment.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the attachment has neither blocks nor
    /// fields, or more than 50 blocks.
    pub fn build(self) -> ValidationResult<Attachment> {
        rules::require_any(
            "attachment",
            &["blocks", "fields"],
            &[!self.blocks.is_empty(), !self.fields.is_empty()],
        )?;
        let limits = SurfaceLimits {
            require_blocks: false,
            ..SurfaceLimits::for_messages()
        };
        check_blocks(&self.blocks, &limits)?;
        Ok(Attachment {
            blocks: self.blocks,
            color: self.color,
            fields: self.fields,
        })
    }
}
