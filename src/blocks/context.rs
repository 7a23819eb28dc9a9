//! Context block: a row of small text and image elements.

use crate::{
    elements::ImageElement,
    error::ValidationResult,
    ids::BlockId,
    objects::{Text, TextLike, TextSlot},
    render::Render,
    validation::{limits, rules},
};
use serde::Serialize;

/// One item of a context block: text or an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContextElement(ContextItem);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
enum ContextItem {
    Text(Text),
    Image(ImageElement),
}

impl ContextElement {
    /// Creates a text item. Raw strings become `mrkdwn` text.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `text` when it is empty or longer than
    /// 3000 characters.
    pub fn text(text: impl Into<TextLike>) -> ValidationResult<Self> {
        TextSlot::any("text", limits::TEXT)
            .resolve(text.into())
            .map(Self::from)
    }

    /// Returns `true` if the item is an image.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self.0, ContextItem::Image(_))
    }
}

impl From<Text> for ContextElement {
    fn from(text: Text) -> Self {
        Self(ContextItem::Text(text))
    }
}

impl From<ImageElement> for ContextElement {
    fn from(image: ImageElement) -> Self {
        Self(ContextItem::Image(image))
    }
}

/// Secondary information shown in small, muted type.
///
/// # Examples
///
/// ```
/// use blockkit::blocks::{ContextBlock, ContextElement};
/// use blockkit::elements::ImageElement;
/// use blockkit::render::Render;
///
/// let avatar = ImageElement::from_url("https://example.com/a.png", "avatar")
///     .expect("valid image");
/// let byline = ContextElement::text("Posted by *Ada*").expect("valid text");
/// let context = ContextBlock::new([avatar.into(), byline]).expect("valid context");
/// let json = context.to_value().expect("serialisable");
/// assert_eq!(json["elements"][0]["type"], "image");
/// assert_eq!(json["elements"][1]["type"], "mrkdwn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "context")]
pub struct ContextBlock {
    elements: Vec<ContextElement>,
    block_id: BlockId,
}

impl ContextBlock {
    /// Creates a context block from its items.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `elements` when fewer than 1 or more
    /// than 10 items are given.
    pub fn new(elements: impl IntoIterator<Item = ContextElement>) -> ValidationResult<Self> {
        let items: Vec<_> = elements.into_iter().collect();
        rules::check_count("elements", items.len(), 1, limits::CONTEXT_ELEMENTS)?;
        Ok(Self {
            elements: items,
            block_id: BlockId::generate(),
        })
    }

    /// Replaces the generated block identifier.
    ///
    /// # Errors
    ///
    /// See [`BlockId::new`].
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> ValidationResult<Self> {
        self.block_id = BlockId::new(block_id)?;
        Ok(self)
    }

    /// Returns the items in order.
    #[must_use]
    pub fn elements(&self) -> &[ContextElement] {
        &self.elements
    }

    /// Returns the block identifier.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        &self.block_id
    }
}

impl Render for ContextBlock {}
