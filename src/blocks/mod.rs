//! Layout blocks: the top-level units of a message or view.
//!
//! Every block carries a [`BlockId`]; when none is supplied a random UUID v4
//! is generated, so blocks built without an identifier are still
//! distinguishable in interaction payloads.

mod context;
mod display;
mod interactive;
mod rich_text;
mod section;

pub use context::{ContextBlock, ContextElement};
pub use display::{DividerBlock, FileBlock, FileSource, HeaderBlock, ImageBlock};
pub use interactive::{ActionsBlock, InputBlock, InputBlockBuilder};
pub use rich_text::RichTextBlock;
pub use section::{SectionBlock, SectionBlockBuilder};

use crate::{ids::BlockId, render::Render};
use serde::Serialize;

/// Any block. Each variant serialises its own `type` tag.
///
/// # Examples
///
/// ```
/// use blockkit::blocks::{Block, DividerBlock, HeaderBlock};
///
/// let blocks: Vec<Block> = vec![
///     HeaderBlock::new("Release notes").expect("valid header").into(),
///     DividerBlock::new().into(),
/// ];
/// assert_eq!(blocks[0].type_name(), "header");
/// assert_ne!(blocks[0].block_id(), blocks[1].block_id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Block {
    /// Text with optional fields and accessory.
    Section(SectionBlock),
    /// Heading.
    Header(HeaderBlock),
    /// Standalone image.
    Image(ImageBlock),
    /// Horizontal rule.
    Divider(DividerBlock),
    /// Muted secondary information.
    Context(ContextBlock),
    /// Row of interactive elements.
    Actions(ActionsBlock),
    /// Form field.
    Input(InputBlock),
    /// Remote file.
    File(FileBlock),
    /// Formatted rich text.
    RichText(RichTextBlock),
}

impl Block {
    /// Returns the wire name of the block type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Section(_) => "section",
            Self::Header(_) => "header",
            Self::Image(_) => "image",
            Self::Divider(_) => "divider",
            Self::Context(_) => "context",
            Self::Actions(_) => "actions",
            Self::Input(_) => "input",
            Self::File(_) => "file",
            Self::RichText(_) => "rich_text",
        }
    }

    /// Returns the block identifier.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        match self {
            Self::Section(block) => block.block_id(),
            Self::Header(block) => block.block_id(),
            Self::Image(block) => block.block_id(),
            Self::Divider(block) => block.block_id(),
            Self::Context(block) => block.block_id(),
            Self::Actions(block) => block.block_id(),
            Self::Input(block) => block.block_id(),
            Self::File(block) => block.block_id(),
            Self::RichText(block) => block.block_id(),
        }
    }

    /// Returns `true` for input blocks, which require a submit button when
    /// placed in a modal.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

impl Render for Block {}

impl From<SectionBlock> for Block {
    fn from(block: SectionBlock) -> Self {
        Self::Section(block)
    }
}

impl From<HeaderBlock> for Block {
    fn from(block: HeaderBlock) -> Self {
        Self::Header(block)
    }
}

impl From<ImageBlock> for Block {
    fn from(block: ImageBlock) -> Self {
        Self::Image(block)
    }
}

impl From<DividerBlock> for Block {
    fn from(block: DividerBlock) -> Self {
        Self::Divider(block)
    }
}

impl From<ContextBlock> for Block {
    fn from(block: ContextBlock) -> Self {
        Self::Context(block)
    }
}

impl From<ActionsBlock> for Block {
    fn from(block: ActionsBlock) -> Self {
        Self::Actions(block)
    }
}

impl From<InputBlock> for Block {
    fn from(block: InputBlock) -> Self {
        Self::Input(block)
    }
}

impl From<FileBlock> for Block {
    fn from(block: FileBlock) -> Self {
        Self::File(block)
    }
}

impl From<RichTextBlock> for Block {
    fn from(block: RichTextBlock) -> Self {
        Self::RichText(block)
    }
}

#[cfg(test)]
mod tests;
