//! Top-level surfaces: messages, interaction responses and views.
//!
//! A surface bundles an ordered list of blocks with its envelope fields.
//! Block order is preserved exactly; it is the on-screen render order.
//! [`Surface::to_arguments`] exposes the serialised surface as a JSON
//! object map, ready to be passed as the arguments of an API call by an
//! external HTTP client.

mod attachment;
mod message;
mod views;

pub use attachment::{Attachment, AttachmentBuilder, AttachmentField, Color};
pub use message::{
    Message, MessageBuilder, MessageMetadata, MessageResponse, MessageResponseBuilder,
    ResponseType,
};
pub use views::{HomeTabView, HomeTabViewBuilder, ModalView, ModalViewBuilder, View};

use crate::{
    blocks::Block,
    config::SurfaceLimits,
    error::{RenderError, ValidationResult},
    render::Render,
    validation::rules,
};
use serde_json::{Map, Value};

/// A serialisable surface holding blocks.
pub trait Surface: Render {
    /// Returns the blocks in render order.
    fn blocks(&self) -> &[Block];

    /// Serialises the surface into API call arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the surface cannot be serialised to a
    /// JSON object.
    fn to_arguments(&self) -> Result<Map<String, Value>, RenderError> {
        let arguments = self.to_map()?;
        tracing::debug!(
            blocks = self.blocks().len(),
            keys = arguments.len(),
            "rendered surface arguments"
        );
        Ok(arguments)
    }
}

fn check_blocks(blocks: &[Block], limits: &SurfaceLimits) -> ValidationResult<()> {
    rules::check_count("blocks", blocks.len(), limits.min_blocks(), limits.max_blocks)
}

#[cfg(test)]
mod tests;
