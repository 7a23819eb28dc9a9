//! Messages posted to a channel and replies to interaction `response_url`s.

use super::{Attachment, Surface, check_blocks};
use crate::{
    blocks::Block,
    config::SurfaceLimits,
    error::ValidationResult,
    render::{Render, is_false},
    validation::{limits, rules},
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Structured metadata attached to a message, delivered to subscribed apps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageMetadata {
    event_type: String,
    event_payload: Map<String, Value>,
}

impl MessageMetadata {
    /// Creates metadata for an application event.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `event_type` when it is empty or
    /// longer than 255 characters.
    pub fn new(
        event_type: impl Into<String>,
        event_payload: Map<String, Value>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            event_type: rules::bounded("event_type", event_type, 1, limits::IDENTIFIER)?,
            event_payload,
        })
    }

    /// Returns the event type.
    #[must_use]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }
}

/// A message posted to a channel.
///
/// # Examples
///
/// ```
/// use blockkit::blocks::{DividerBlock, HeaderBlock, SectionBlock};
/// use blockkit::surfaces::{Message, Surface};
///
/// let message = Message::builder("C0123")
///     .with_block(HeaderBlock::new("Deploy").expect("valid header"))
///     .with_block(DividerBlock::new())
///     .with_block(SectionBlock::new("All green").expect("valid section"))
///     .with_text("Deploy finished")
///     .build()
///     .expect("valid message");
/// let arguments = message.to_arguments().expect("serialisable");
/// assert_eq!(arguments["channel"], "C0123");
/// assert_eq!(arguments["mrkdwn"], true);
/// assert_eq!(arguments["blocks"][1]["type"], "divider");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_ts: Option<String>,
    mrkdwn: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    unfurl_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unfurl_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<MessageMetadata>,
}

impl Message {
    /// Starts building a message for `channel`.
    #[must_use]
    pub fn builder(channel: impl Into<String>) -> MessageBuilder {
        MessageBuilder {
            channel: channel.into(),
            text: None,
            blocks: Vec::new(),
            attachments: Vec::new(),
            thread_ts: None,
            mrkdwn: true,
            unfurl_links: None,
            unfurl_media: None,
            metadata: None,
            limits: SurfaceLimits::for_messages(),
        }
    }

    /// Returns the target channel.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Returns the fallback text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the attachments in order.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}

impl Render for Message {}

impl Surface for Message {
    fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

/// Builder for [`Message`].
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    channel: String,
    text: Option<String>,
    blocks: Vec<Block>,
    attachments: Vec<Attachment>,
    thread_ts: Option<String>,
    mrkdwn: bool,
    unfurl_links: Option<bool>,
    unfurl_media: Option<bool>,
    metadata: Option<MessageMetadata>,
    limits: SurfaceLimits,
}

impl MessageBuilder {
    /// Sets the fallback text shown in notifications.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

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

    /// Appends an attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Posts the message as a reply in the thread rooted at `thread_ts`.
    #[must_use]
    pub fn with_thread_ts(mut self, thread_ts: impl Into<String>) -> Self {
        self.thread_ts = Some(thread_ts.into());
        self
    }

    /// Enables or disables `mrkdwn` parsing of the fallback text.
    #[must_use]
    pub const fn with_mrkdwn(mut self, mrkdwn: bool) -> Self {
        self.mrkdwn = mrkdwn;
        self
    }

    /// Controls unfurling of text-based links.
    #[must_use]
    pub const fn with_unfurl_links(mut self, unfurl: bool) -> Self {
        self.unfurl_links = Some(unfurl);
        self
    }

    /// Controls unfurling of media links.
    #[must_use]
    pub const fn with_unfurl_media(mut self, unfurl: bool) -> Self {
        self.unfurl_media = Some(unfurl);
        self
    }

    /// Attaches event metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Replaces the default message limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: SurfaceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates and builds the message.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the channel is empty, the block count
    /// is outside the configured limits, the fallback text is too long or a
    /// thread timestamp is empty.
    pub fn build(self) -> ValidationResult<Message> {
        let channel = rules::bounded("channel", self.channel, 1, usize::MAX)?;
        check_blocks(&self.blocks, &self.limits)?;
        let text = rules::bounded_opt("text", self.text, 1, self.limits.max_text_length)?;
        let thread_ts = rules::bounded_opt("thread_ts", self.thread_ts, 1, usize::MAX)?;
        tracing::debug!(%channel, blocks = self.blocks.len(), "built message");
        Ok(Message {
            channel,
            text,
            blocks: self.blocks,
            attachments: self.attachments,
            thread_ts,
            mrkdwn: self.mrkdwn,
            unfurl_links: self.unfurl_links,
            unfurl_media: self.unfurl_media,
            metadata: self.metadata,
        })
    }
}

/// Visibility of an interaction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible to everyone in the channel.
    InChannel,
    /// Visible only to the user who interacted.
    Ephemeral,
}

/// A reply sent to an interaction's `response_url`.
///
/// # Examples
///
/// ```
/// use blockkit::blocks::SectionBlock;
/// use blockkit::surfaces::{MessageResponse, ResponseType, Surface};
///
/// let response = MessageResponse::builder()
///     .with_block(SectionBlock::new("Only you can see this").expect("valid section"))
///     .with_response_type(ResponseType::Ephemeral)
///     .build()
///     .expect("valid response");
/// let arguments = response.to_arguments().expect("serialisable");
/// assert_eq!(arguments["response_type"], "ephemeral");
/// assert_eq!(arguments["replace_original"], false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_ts: Option<String>,
    mrkdwn: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_type: Option<ResponseType>,
    replace_original: bool,
    #[serde(skip_serializing_if = "is_false")]
    delete_original: bool,
}

impl MessageResponse {
    /// Starts building a response.
    #[must_use]
    pub fn builder() -> MessageResponseBuilder {
        MessageResponseBuilder {
            text: None,
            blocks: Vec::new(),
            attachments: Vec::new(),
            thread_ts: None,
            mrkdwn: true,
            response_type: None,
            replace_original: false,
            delete_original: false,
        }
    }

    /// Returns the response visibility, if set.
    #[must_use]
    pub const fn response_type(&self) -> Option<ResponseType> {
        self.response_type
    }
}

impl Render for MessageResponse {}

impl Surface for MessageResponse {
    fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

/// Builder for [`MessageResponse`].
#[derive(Debug, Clone)]
pub struct MessageResponseBuilder {
    text: Option<String>,
    blocks: Vec<Block>,
    attachments: Vec<Attachment>,
    thread_ts: Option<String>,
    mrkdwn: bool,
    response_type: Option<ResponseType>,
    replace_original: bool,
    delete_original: bool,
}

impl MessageResponseBuilder {
    /// Sets the fallback text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a block.
    #[must_use]
    pub fn with_block(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    /// Appends an attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Replies in the thread rooted at `thread_ts`.
    #[must_use]
    pub fn with_thread_ts(mut self, thread_ts: impl Into<String>) -> Self {
        self.thread_ts = Some(thread_ts.into());
        self
    }

    /// Enables or disables `mrkdwn` parsing of the fallback text.
    #[must_use]
    pub const fn with_mrkdwn(mut self, mrkdwn: bool) -> Self {
        self.mrkdwn = mrkdwn;
        self
    }

    /// Sets who can see the response.
    #[must_use]
    pub const fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }

    /// Replaces the message the interaction came from.
    #[must_use]
    pub const fn with_replace_original(mut self, replace: bool) -> Self {
        self.replace_original = replace;
        self
    }

    /// Deletes the message the interaction came from.
    #[must_use]
    pub const fn with_delete_original(mut self, delete: bool) -> Self {
        self.delete_original = delete;
        self
    }

    /// Validates and builds the response.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the response has no text, blocks or
    /// deletion request, holds more than 50 blocks, or its text exceeds
    /// 40 000 characters.
    pub fn build(self) -> ValidationResult<MessageResponse> {
        rules::require_any(
            "response",
            &["text", "blocks", "delete_original"],
            &[
                self.text.is_some(),
                !self.blocks.is_empty(),
                self.delete_original,
            ],
        )?;
        let limits = SurfaceLimits {
            require_blocks: false,
            ..SurfaceLimits::for_messages()
        };
        check_blocks(&self.blocks, &limits)?;
        Ok(MessageResponse {
            text: rules::bounded_opt("text", self.text, 1, limits.max_text_length)?,
            blocks: self.blocks,
            attachments: self.attachments,
            thread_ts: rules::bounded_opt("thread_ts", self.thread_ts, 1, usize::MAX)?,
            mrkdwn: self.mrkdwn,
            response_type: self.response_type,
            replace_original: self.replace_original,
            delete_original: self.delete_original,
        })
    }
}
