//! Rich text content for the rich text block.
//!
//! Inline [`RichTextElement`]s (styled text, links, emoji and mentions) are
//! grouped into [`RichTextObject`] containers: sections, lists,
//! preformatted blocks and quotes.

mod elements;
mod objects;

pub use elements::{
    ChannelMention, Emoji, Link, RichTextElement, RichTextStyle, TextRun, UserGroupMention,
    UserMention,
};
pub use objects::{
    ListStyle, RichTextList, RichTextObject, RichTextPreformatted, RichTextQuote, RichTextSection,
};

#[cfg(test)]
mod tests;
