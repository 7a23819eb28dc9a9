//! Rich text containers that group inline elements into paragraphs, lists,
//! code blocks and quotes.
//!
//! Each container tags itself with its own `type`, so a section serialises
//! identically whether it sits directly in a rich text block or inside a
//! list.

use super::RichTextElement;
use crate::{error::ValidationResult, render::Render, validation::rules};
use serde::Serialize;

fn require_elements<T>(field: &str, elements: Vec<T>) -> ValidationResult<Vec<T>> {
    rules::check_count(field, elements.len(), 1, usize::MAX)?;
    Ok(elements)
}

/// A paragraph of inline elements.
///
/// # Examples
///
/// ```
/// use blockkit::rich_text::{RichTextElement, RichTextSection};
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let hello = RichTextElement::text("Hello").expect("valid text");
/// let section = RichTextSection::new([hello]).expect("valid section");
/// assert_eq!(
///     section.to_value().expect("serialisable"),
///     json!({"type": "rich_text_section", "elements": [{"type": "text", "text": "Hello"}]})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "rich_text_section")]
pub struct RichTextSection {
    elements: Vec<RichTextElement>,
}

impl RichTextSection {
    /// Creates a section from its inline elements.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `elements` when none are given.
    pub fn new(elements: impl IntoIterator<Item = RichTextElement>) -> ValidationResult<Self> {
        Ok(Self {
            elements: require_elements("elements", elements.into_iter().collect())?,
        })
    }

    /// Returns the inline elements in order.
    #[must_use]
    pub fn elements(&self) -> &[RichTextElement] {
        &self.elements
    }
}

/// Marker style of a rich text list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    /// Unordered, with bullet markers.
    Bullet,
    /// Numbered.
    Ordered,
}

/// A bulleted or numbered list whose items are sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "rich_text_list")]
pub struct RichTextList {
    style: ListStyle,
    elements: Vec<RichTextSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    indent: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border: Option<u32>,
}

impl RichTextList {
    /// Creates a list of the given style.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `elements` when no item is given.
    pub fn new(
        style: ListStyle,
        items: impl IntoIterator<Item = RichTextSection>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            style,
            elements: require_elements("elements", items.into_iter().collect())?,
            indent: None,
            offset: None,
            border: None,
        })
    }

    /// Sets the nesting depth of the list.
    #[must_use]
    pub const fn with_indent(mut self, indent: u32) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Sets the number of items to skip before numbering starts.
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the border width drawn beside the list.
    #[must_use]
    pub const fn with_border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }

    /// Returns the list style.
    #[must_use]
    pub const fn style(&self) -> ListStyle {
        self.style
    }

    /// Returns the list items in order.
    #[must_use]
    pub fn items(&self) -> &[RichTextSection] {
        &self.elements
    }
}

/// A block of preformatted (code) text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "rich_text_preformatted")]
pub struct RichTextPreformatted {
    elements: Vec<RichTextElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border: Option<u32>,
}

impl RichTextPreformatted {
    /// Creates a preformatted block.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `elements` when none are given.
    pub fn new(elements: impl IntoIterator<Item = RichTextElement>) -> ValidationResult<Self> {
        Ok(Self {
            elements: require_elements("elements", elements.into_iter().collect())?,
            border: None,
        })
    }

    /// Sets the border width.
    #[must_use]
    pub const fn with_border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }
}

/// A quoted passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "rich_text_quote")]
pub struct RichTextQuote {
    elements: Vec<RichTextElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border: Option<u32>,
}

impl RichTextQuote {
    /// Creates a quote.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `elements` when none are given.
    pub fn new(elements: impl IntoIterator<Item = RichTextElement>) -> ValidationResult<Self> {
        Ok(Self {
            elements: require_elements("elements", elements.into_iter().collect())?,
            border: None,
        })
    }

    /// Sets the border width.
    #[must_use]
    pub const fn with_border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }
}

/// Any rich text container.
///
/// Each variant serialises its own `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RichTextObject {
    /// Paragraph.
    Section(RichTextSection),
    /// Bulleted or numbered list.
    List(RichTextList),
    /// Code block.
    Preformatted(RichTextPreformatted),
    /// Quotation.
    Quote(RichTextQuote),
}

impl RichTextObject {
    /// Returns the wire name of the container type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Section(_) => "rich_text_section",
            Self::List(_) => "rich_text_list",
            Self::Preformatted(_) => "rich_text_preformatted",
            Self::Quote(_) => "rich_text_quote",
        }
    }
}

impl Render for RichTextSection {}
impl Render for RichTextList {}
impl Render for RichTextObject {}

impl From<RichTextSection> for RichTextObject {
    fn from(section: RichTextSection) -> Self {
        Self::Section(section)
    }
}

impl From<RichTextList> for RichTextObject {
    fn from(list: RichTextList) -> Self {
        Self::List(list)
    }
}

impl From<RichTextPreformatted> for RichTextObject {
    fn from(block: RichTextPreformatted) -> Self {
        Self::Preformatted(block)
    }
}

impl From<RichTextQuote> for RichTextObject {
    fn from(quote: RichTextQuote) -> Self {
        Self::Quote(quote)
    }
}
