//! Blockkit: typed builders for Slack Block Kit payloads.
//!
//! Every value in this crate is validated when it is constructed and is
//! immutable afterwards, so a payload that exists is a payload the platform
//! will accept. Values serialise to Block Kit JSON through [`serde`]; the
//! [`render::Render`] trait wraps `serde_json` for callers who want a JSON
//! tree, map or string.
//!
//! # Layers
//!
//! - [`objects`]: text, options, confirmation dialogs and other leaf
//!   composition objects
//! - [`elements`]: buttons, menus, inputs, pickers and images
//! - [`rich_text`]: inline rich text and its containers
//! - [`blocks`]: section, header, image, divider, context, actions, input,
//!   file and rich text blocks
//! - [`surfaces`]: messages, interaction responses, attachments and views
//!
//! Validation failures are reported as [`error::ValidationError`], naming
//! the offending field and the [`error::Constraint`] it violated. The crate
//! performs no I/O; sending a payload is left to an HTTP client.
//!
//! # Examples
//!
//! ```
//! use blockkit::blocks::{ActionsBlock, SectionBlock};
//! use blockkit::elements::Button;
//! use blockkit::objects::Style;
//! use blockkit::surfaces::{Message, Surface};
//!
//! let approve = Button::builder("Approve", "approve")
//!     .with_style(Style::Primary)
//!     .build()
//!     .expect("valid button");
//! let message = Message::builder("C0123")
//!     .with_block(SectionBlock::new("*Expense report* needs review").expect("valid section"))
//!     .with_block(ActionsBlock::new([approve]).expect("valid actions"))
//!     .build()
//!     .expect("valid message");
//! let arguments = message.to_arguments().expect("serialisable");
//! assert_eq!(arguments["blocks"][1]["elements"][0]["style"], "primary");
//! ```

pub mod blocks;
pub mod config;
pub mod elements;
pub mod error;
pub mod ids;
pub mod objects;
pub mod render;
pub mod rich_text;
pub mod surfaces;
pub mod validation;
