//! Non-interactive blocks: header, image, divider and remote file.

use crate::{
    elements::ImageSource,
    error::ValidationResult,
    ids::BlockId,
    objects::{Text, TextLike, TextSlot},
    render::Render,
    validation::{limits, rules},
};
use serde::Serialize;

/// Large bold heading text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "header")]
pub struct HeaderBlock {
    text: Text,
    block_id: BlockId,
}

impl HeaderBlock {
    /// Creates a header. Styled text is converted to plain text.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `text` when it is empty or longer than
    /// 150 characters.
    pub fn new(text: impl Into<TextLike>) -> ValidationResult<Self> {
        Ok(Self {
            text: TextSlot::plain("text", limits::HEADER_TEXT).resolve(text.into())?,
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

    /// Returns the heading text.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// Returns the block identifier.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        &self.block_id
    }
}

/// A standalone image with optional title.
///
/// # Examples
///
/// ```
/// use blockkit::blocks::ImageBlock;
/// use blockkit::elements::ImageSource;
/// use blockkit::render::Render;
///
/// let source = ImageSource::url("https://example.com/chart.png").expect("valid url");
/// let image = ImageBlock::new(source, "Weekly chart")
///     .and_then(|block| block.with_title("Week 12"))
///     .expect("valid image");
/// let json = image.to_value().expect("serialisable");
/// assert_eq!(json["image_url"], "https://example.com/chart.png");
/// assert_eq!(json["title"]["type"], "plain_text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "image")]
pub struct ImageBlock {
    #[serde(flatten)]
    source: ImageSource,
    alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Text>,
    block_id: BlockId,
}

impl ImageBlock {
    /// Creates an image block.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `alt_text` when it is empty or longer
    /// than 2000 characters.
    pub fn new(source: ImageSource, alt_text: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            source,
            alt_text: rules::bounded("alt_text", alt_text, 1, limits::IMAGE_ALT_TEXT)?,
            title: None,
            block_id: BlockId::generate(),
        })
    }

    /// Sets the title shown above the image. Styled text is converted to
    /// plain text.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `title` when it is empty or longer
    /// than 2000 characters.
    pub fn with_title(mut self, title: impl Into<TextLike>) -> ValidationResult<Self> {
        self.title = Some(TextSlot::plain("title", limits::IMAGE_ALT_TEXT).resolve(title.into())?);
        Ok(self)
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

    /// Returns the image source.
    #[must_use]
    pub const fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Returns the block identifier.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        &self.block_id
    }
}

/// A horizontal rule. Carries nothing but its identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "divider")]
pub struct DividerBlock {
    block_id: BlockId,
}

impl DividerBlock {
    /// Creates a divider with a generated identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Returns the block identifier.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        &self.block_id
    }
}

/// Origin of a file shown in a file block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileSource {
    /// A remote file registered with the platform.
    #[default]
    Remote,
}

/// A remote file, referenced by its external identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "file")]
pub struct FileBlock {
    external_id: String,
    source: FileSource,
    block_id: BlockId,
}

impl FileBlock {
    /// Creates a file block for a remote file.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `external_id` when it is empty.
    pub fn new(external_id: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            external_id: rules::bounded("external_id", external_id, 1, usize::MAX)?,
            source: FileSource::Remote,
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

    /// Returns the external file identifier.
    #[must_use]
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Returns the block identifier.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        &self.block_id
    }
}

impl Render for HeaderBlock {}
impl Render for ImageBlock {}
impl Render for DividerBlock {}
impl Render for FileBlock {}
