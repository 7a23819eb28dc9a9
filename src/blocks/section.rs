//! Section block: body text, a grid of fields and an optional accessory.

use crate::{
    elements::Element,
    error::{Constraint, ValidationResult},
    ids::BlockId,
    objects::{Text, TextLike, TextSlot},
    render::Render,
    validation::{limits, rules},
};
use serde::Serialize;

const TEXT: TextSlot = TextSlot::any("text", limits::SECTION_TEXT);
const FIELD: TextSlot = TextSlot::any("fields", limits::SECTION_FIELD);

/// A block of text, optionally laid out beside an accessory element.
///
/// At least one of text, fields or accessory must be present. Raw strings
/// become `mrkdwn` text.
///
/// # Examples
///
/// ```
/// use blockkit::blocks::SectionBlock;
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let section = SectionBlock::new("Hello, world!").expect("valid section");
/// let json = section.to_value().expect("serialisable");
/// assert_eq!(json["type"], "section");
/// assert_eq!(json["text"], json!({"type": "mrkdwn", "text": "Hello, world!"}));
/// assert_eq!(json["block_id"], section.block_id().as_str());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "section")]
pub struct SectionBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Text>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessory: Option<Element>,
    block_id: BlockId,
}

impl SectionBlock {
    /// Creates a section containing only body text.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `text` when it is empty or longer than
    /// 3000 characters.
    pub fn new(text: impl Into<TextLike>) -> ValidationResult<Self> {
        Self::builder().with_text(text).build()
    }

    /// Starts building a section block.
    #[must_use]
    pub fn builder() -> SectionBlockBuilder {
        SectionBlockBuilder::default()
    }

    /// Returns the body text, if any.
    #[must_use]
    pub const fn text(&self) -> Option<&Text> {
        self.text.as_ref()
    }

    /// Returns the field texts in order.
    #[must_use]
    pub fn fields(&self) -> &[Text] {
        &self.fields
    }

    /// Returns the accessory element, if any.
    #[must_use]
    pub const fn accessory(&self) -> Option<&Element> {
        self.accessory.as_ref()
    }

    /// Returns the block identifier.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        &self.block_id
    }
}

impl Render for SectionBlock {}

/// Builder for [`SectionBlock`].
#[derive(Debug, Clone, Default)]
pub struct SectionBlockBuilder {
    text: Option<TextLike>,
    fields: Vec<TextLike>,
    accessory: Option<Element>,
    block_id: Option<String>,
}

impl SectionBlockBuilder {
    /// Sets the body text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<TextLike>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a field, rendered in a two-column grid.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<TextLike>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Appends several fields.
    #[must_use]
    pub fn with_fields<I, T>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TextLike>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Sets the accessory element shown beside the text.
    #[must_use]
    pub fn with_accessory(mut self, accessory: impl Into<Element>) -> Self {
        self.accessory = Some(accessory.into());
        self
    }

    /// Sets an explicit block identifier.
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    /// Validates and builds the section block.
    ///
    /// # Errors
    ///
    /// Returns a validation error when:
    /// - none of text, fields or accessory is present;
    /// - the text exceeds 3000 characters or a field exceeds 2000;
    /// - more than 10 fields are given;
    /// - the accessory is an element that cannot be placed in a section;
    /// - the block identifier is empty or longer than 255 characters.
    pub fn build(self) -> ValidationResult<SectionBlock> {
        rules::require_any(
            "section",
            &["text", "fields", "accessory"],
            &[
                self.text.is_some(),
                !self.fields.is_empty(),
                self.accessory.is_some(),
            ],
        )?;
        let text = TEXT.resolve_opt(self.text)?;
        rules::check_count("fields", self.fields.len(), 0, limits::SECTION_FIELDS)?;
        let fields = self
            .fields
            .into_iter()
            .map(|field| FIELD.resolve(field))
            .collect::<ValidationResult<Vec<_>>>()?;
        if let Some(element) = &self.accessory
            && !element.is_accessory()
        {
            return Err(rules::reject(
                "accessory",
                Constraint::NotPermitted {
                    kind: element.type_name(),
                    context: "section accessory",
                },
            ));
        }
        Ok(SectionBlock {
            text,
            fields,
            accessory: self.accessory,
            block_id: BlockId::or_generate(self.block_id)?,
        })
    }
}
