//! Buttons and workflow buttons.

use crate::{
    error::ValidationResult,
    ids::ActionId,
    objects::{ConfirmationDialog, Style, Text, TextLike, TextSlot, Workflow},
    render::Render,
    validation::{limits, rules},
};
use serde::Serialize;

const BUTTON_TEXT: TextSlot = TextSlot::plain("text", limits::BUTTON_TEXT);

/// An interactive button.
///
/// # Examples
///
/// ```
/// use blockkit::elements::Button;
/// use blockkit::objects::Style;
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let button = Button::builder("Approve", "approve")
///     .with_value("request-42")
///     .with_style(Style::Primary)
///     .build()
///     .expect("valid button");
/// assert_eq!(
///     button.to_value().expect("serialisable"),
///     json!({
///         "type": "button",
///         "text": {"type": "plain_text", "text": "Approve"},
///         "action_id": "approve",
///         "value": "request-42",
///         "style": "primary"
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "button")]
pub struct Button {
    text: Text,
    action_id: ActionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessibility_label: Option<String>,
}

impl Button {
    /// Starts building a button with its label and action identifier.
    #[must_use]
    pub fn builder(text: impl Into<TextLike>, action_id: impl Into<String>) -> ButtonBuilder {
        ButtonBuilder {
            text: text.into(),
            action_id: action_id.into(),
            url: None,
            value: None,
            style: None,
            confirm: None,
            accessibility_label: None,
        }
    }

    /// Returns the button label.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// Returns the action identifier.
    #[must_use]
    pub const fn action_id(&self) -> &ActionId {
        &self.action_id
    }

    /// Returns the value sent with the interaction payload, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Render for Button {}

/// Builder for [`Button`].
#[derive(Debug, Clone)]
pub struct ButtonBuilder {
    text: TextLike,
    action_id: String,
    url: Option<String>,
    value: Option<String>,
    style: Option<Style>,
    confirm: Option<ConfirmationDialog>,
    accessibility_label: Option<String>,
}

impl ButtonBuilder {
    /// Sets a URL opened in the user's browser when the button is clicked.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the value sent with the interaction payload.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the colour scheme of the button.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Asks for confirmation before dispatching the action.
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmationDialog) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Sets the label read by screen readers instead of the button text.
    #[must_use]
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    /// Validates the fields and builds the button.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the text exceeds 75 characters, the
    /// action identifier is empty or exceeds 255 characters, the URL exceeds
    /// 3000 characters, the value exceeds 2000 characters, or the
    /// accessibility label exceeds 75 characters.
    pub fn build(self) -> ValidationResult<Button> {
        Ok(Button {
            text: BUTTON_TEXT.resolve(self.text)?,
            action_id: ActionId::new(self.action_id)?,
            url: rules::bounded_opt("url", self.url, 1, limits::URL)?,
            value: rules::bounded_opt("value", self.value, 1, limits::BUTTON_VALUE)?,
            style: self.style,
            confirm: self.confirm,
            accessibility_label: rules::bounded_opt(
                "accessibility_label",
                self.accessibility_label,
                1,
                limits::BUTTON_TEXT,
            )?,
        })
    }
}

/// A button that starts a workflow when clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "workflow_button")]
pub struct WorkflowButton {
    text: Text,
    workflow: Workflow,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<ActionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessibility_label: Option<String>,
}

impl WorkflowButton {
    /// Creates a workflow button.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the text is empty or exceeds 75
    /// characters.
    pub fn new(text: impl Into<TextLike>, workflow: Workflow) -> ValidationResult<Self> {
        Ok(Self {
            text: BUTTON_TEXT.resolve(text.into())?,
            workflow,
            action_id: None,
            style: None,
            accessibility_label: None,
        })
    }

    /// Sets an action identifier for the button.
    ///
    /// # Errors
    ///
    /// See [`ActionId::new`].
    pub fn with_action_id(mut self, action_id: impl Into<String>) -> ValidationResult<Self> {
        self.action_id = Some(ActionId::new(action_id)?);
        Ok(self)
    }

    /// Sets the colour scheme of the button.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the label read by screen readers.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the label is empty or exceeds 75
    /// characters.
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> ValidationResult<Self> {
        self.accessibility_label = Some(rules::bounded(
            "accessibility_label",
            label,
            1,
            limits::BUTTON_TEXT,
        )?);
        Ok(self)
    }

    /// Returns the workflow started by the button.
    #[must_use]
    pub const fn workflow(&self) -> &Workflow {
        &self.workflow
    }
}

impl Render for WorkflowButton {}
