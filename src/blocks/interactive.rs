//! Blocks that host interactive elements: actions and input.

use crate::{
    elements::Element,
    error::{Constraint, ValidationError, ValidationResult},
    ids::BlockId,
    objects::{Text, TextLike, TextSlot},
    render::{Render, is_false},
    validation::{limits, rules},
};
use serde::Serialize;

const LABEL: TextSlot = TextSlot::plain("label", limits::INPUT_LABEL);
const HINT: TextSlot = TextSlot::plain("hint", limits::INPUT_LABEL);

fn not_permitted(field: &str, element: &Element, context: &'static str) -> ValidationError {
    rules::reject(
        field,
        Constraint::NotPermitted {
            kind: element.type_name(),
            context,
        },
    )
}

/// A row of interactive elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "actions")]
pub struct ActionsBlock {
    elements: Vec<Element>,
    block_id: BlockId,
}

impl ActionsBlock {
    /// Creates an actions block.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `elements` when fewer than 1 or more
    /// than 25 elements are given, or when an element is not interactive.
    pub fn new<I, E>(elements: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        let items: Vec<Element> = elements.into_iter().map(Into::into).collect();
        rules::check_count("elements", items.len(), 1, limits::ACTIONS_ELEMENTS)?;
        if let Some(element) = items.iter().find(|element| !element.is_actionable()) {
            return Err(not_permitted("elements", element, "actions block"));
        }
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

    /// Returns the elements in order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the block identifier.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        &self.block_id
    }
}

/// A labelled form field collecting user input.
///
/// # Examples
///
/// ```
/// use blockkit::blocks::InputBlock;
/// use blockkit::elements::PlainTextInput;
/// use blockkit::render::Render;
///
/// let field = PlainTextInput::builder("summary").build().expect("valid input");
/// let block = InputBlock::builder("Summary", field)
///     .with_optional(true)
///     .build()
///     .expect("valid block");
/// let json = block.to_value().expect("serialisable");
/// assert_eq!(json["label"]["type"], "plain_text");
/// assert_eq!(json["optional"], true);
/// assert!(json.get("dispatch_action").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "input")]
pub struct InputBlock {
    label: Text,
    element: Element,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<Text>,
    #[serde(skip_serializing_if = "is_false")]
    dispatch_action: bool,
    #[serde(skip_serializing_if = "is_false")]
    optional: bool,
    block_id: BlockId,
}

impl InputBlock {
    /// Starts building an input block around `element`.
    #[must_use]
    pub fn builder(label: impl Into<TextLike>, element: impl Into<Element>) -> InputBlockBuilder {
        InputBlockBuilder {
            label: label.into(),
            element: element.into(),
            hint: None,
            dispatch_action: false,
            optional: false,
            block_id: None,
        }
    }

    /// Returns the label.
    #[must_use]
    pub const fn label(&self) -> &Text {
        &self.label
    }

    /// Returns the input element.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Returns `true` if the field may be left empty.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns the block identifier.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        &self.block_id
    }
}

/// Builder for [`InputBlock`].
#[derive(Debug, Clone)]
pub struct InputBlockBuilder {
    label: TextLike,
    element: Element,
    hint: Option<TextLike>,
    dispatch_action: bool,
    optional: bool,
    block_id: Option<String>,
}

impl InputBlockBuilder {
    /// Sets the hint shown below the element.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<TextLike>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sends a block action when the element's value changes.
    #[must_use]
    pub const fn with_dispatch_action(mut self, dispatch_action: bool) -> Self {
        self.dispatch_action = dispatch_action;
        self
    }

    /// Allows the form to be submitted with this field empty.
    #[must_use]
    pub const fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Sets an explicit block identifier.
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    /// Validates and builds the input block.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the label or hint is empty or longer
    /// than 2000 characters, when the element cannot collect input, or when
    /// the block identifier is invalid.
    pub fn build(self) -> ValidationResult<InputBlock> {
        if !self.element.is_input() {
            return Err(not_permitted("element", &self.element, "input block"));
        }
        Ok(InputBlock {
            label: LABEL.resolve(self.label)?,
            element: self.element,
            hint: HINT.resolve_opt(self.hint)?,
            dispatch_action: self.dispatch_action,
            optional: self.optional,
            block_id: BlockId::or_generate(self.block_id)?,
        })
    }
}

impl Render for ActionsBlock {}
impl Render for InputBlock {}
