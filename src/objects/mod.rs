//! Composition objects: the leaf values embedded in elements and blocks.
//!
//! All types are immutable after construction and serialisable via serde.

mod confirm;
mod dispatch;
mod file;
mod filter;
mod option;
mod text;
mod workflow;

pub use confirm::{ConfirmationDialog, Style};
pub use dispatch::{DispatchActionConfig, TriggerAction};
pub use file::SlackFile;
pub use filter::{ConversationFilter, ConversationFilterBuilder, ConversationKind};
pub use option::{OptionGroup, OptionObject};
pub use text::{Text, TextLike, TextType};
pub use workflow::{InputParameter, Trigger, Workflow};

pub(crate) use option::{require_members, require_plain_options};
pub(crate) use text::TextSlot;

#[cfg(test)]
mod tests;
