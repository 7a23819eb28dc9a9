//! Confirmation dialogs attached to interactive elements.

use super::text::{Text, TextLike, TextSlot};
use crate::{error::ValidationResult, render::Render, validation::limits};
use serde::Serialize;

const TITLE: TextSlot = TextSlot::plain("title", limits::CONFIRM_TITLE);
const BODY: TextSlot = TextSlot::any("text", limits::CONFIRM_TEXT);
const CONFIRM: TextSlot = TextSlot::plain("confirm", limits::CONFIRM_BUTTON);
const DENY: TextSlot = TextSlot::plain("deny", limits::CONFIRM_BUTTON);

/// Colour scheme of the confirm button in a dialog, and of buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Green call-to-action styling.
    Primary,
    /// Red styling for destructive actions.
    Danger,
}

/// A dialog asking the user to confirm an action before it is dispatched.
///
/// # Examples
///
/// ```
/// use blockkit::objects::ConfirmationDialog;
///
/// let dialog = ConfirmationDialog::new(
///     "Are you sure?",
///     "This deletes the *entire* channel history.",
///     "Delete",
///     "Cancel",
/// )
/// .expect("valid dialog");
/// assert_eq!(dialog.title().as_str(), "Are you sure?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationDialog {
    title: Text,
    text: Text,
    confirm: Text,
    deny: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<Style>,
}

impl ConfirmationDialog {
    /// Creates a confirmation dialog.
    ///
    /// `title`, `confirm` and `deny` are always rendered as plain text.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the title exceeds 100 characters,
    /// the body exceeds 300 characters, or either button label exceeds 30
    /// characters.
    pub fn new(
        title: impl Into<TextLike>,
        text: impl Into<TextLike>,
        confirm: impl Into<TextLike>,
        deny: impl Into<TextLike>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            title: TITLE.resolve(title.into())?,
            text: BODY.resolve(text.into())?,
            confirm: CONFIRM.resolve(confirm.into())?,
            deny: DENY.resolve(deny.into())?,
            style: None,
        })
    }

    /// Sets the colour scheme of the confirm button.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Returns the dialog title.
    #[must_use]
    pub const fn title(&self) -> &Text {
        &self.title
    }

    /// Returns the explanatory text.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }
}

impl Render for ConfirmationDialog {}
