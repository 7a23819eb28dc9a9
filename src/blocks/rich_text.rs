//! Rich text block.

use crate::{
    error::ValidationResult, ids::BlockId, render::Render, rich_text::RichTextObject,
    validation::rules,
};
use serde::Serialize;

/// Formatted text built from rich text containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "rich_text")]
pub struct RichTextBlock {
    elements: Vec<RichTextObject>,
    block_id: BlockId,
}

impl RichTextBlock {
    /// Creates a rich text block.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `elements` when no container is given.
    pub fn new<I, O>(elements: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = O>,
        O: Into<RichTextObject>,
    {
        let objects: Vec<RichTextObject> = elements.into_iter().map(Into::into).collect();
        rules::check_count("elements", objects.len(), 1, usize::MAX)?;
        Ok(Self {
            elements: objects,
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

    /// Returns the containers in order.
    #[must_use]
    pub fn elements(&self) -> &[RichTextObject] {
        &self.elements
    }

    /// Returns the block identifier.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        &self.block_id
    }
}

impl Render for RichTextBlock {}
