//! Option-list elements rendered inline: checkboxes, radio buttons and
//! overflow menus.

use crate::{
    error::ValidationResult,
    ids::ActionId,
    objects::{ConfirmationDialog, OptionObject, require_members, require_plain_options},
    render::{Render, is_false},
    validation::{limits, rules},
};
use serde::Serialize;

/// A group of checkboxes.
///
/// # Invariants
///
/// - holds between 1 and 10 options
/// - every initial option is one of the options
///
/// # Examples
///
/// ```
/// use blockkit::elements::CheckboxGroup;
/// use blockkit::objects::OptionObject;
///
/// let email = OptionObject::new("Email", "email").expect("valid option");
/// let sms = OptionObject::new("SMS", "sms").expect("valid option");
/// let group = CheckboxGroup::builder("channels")
///     .with_options([email.clone(), sms])
///     .with_initial_options([email])
///     .build()
///     .expect("valid group");
/// assert_eq!(group.options().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "checkboxes")]
pub struct CheckboxGroup {
    action_id: ActionId,
    options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    initial_options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialog>,
    #[serde(skip_serializing_if = "is_false")]
    focus_on_load: bool,
}

impl CheckboxGroup {
    /// Starts building a checkbox group.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> CheckboxGroupBuilder {
        CheckboxGroupBuilder {
            action_id: action_id.into(),
            options: Vec::new(),
            initial_options: Vec::new(),
            confirm: None,
            focus_on_load: false,
        }
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &[OptionObject] {
        &self.options
    }

    /// Returns the options checked when the group first renders.
    #[must_use]
    pub fn initial_options(&self) -> &[OptionObject] {
        &self.initial_options
    }
}

impl Render for CheckboxGroup {}

/// Builder for [`CheckboxGroup`].
#[derive(Debug, Clone)]
pub struct CheckboxGroupBuilder {
    action_id: String,
    options: Vec<OptionObject>,
    initial_options: Vec<OptionObject>,
    confirm: Option<ConfirmationDialog>,
    focus_on_load: bool,
}

impl CheckboxGroupBuilder {
    /// Appends a checkbox.
    #[must_use]
    pub fn with_option(mut self, option: OptionObject) -> Self {
        self.options.push(option);
        self
    }

    /// Appends several checkboxes.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = OptionObject>) -> Self {
        self.options.extend(options);
        self
    }

    /// Sets the checkboxes that start out checked.
    #[must_use]
    pub fn with_initial_options(mut self, options: impl IntoIterator<Item = OptionObject>) -> Self {
        self.initial_options = options.into_iter().collect();
        self
    }

    /// Asks for confirmation after a checkbox is toggled.
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmationDialog) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Focuses the element when the view opens.
    #[must_use]
    pub const fn with_focus_on_load(mut self, focus: bool) -> Self {
        self.focus_on_load = focus;
        self
    }

    /// Validates the fields and builds the group.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier is invalid,
    /// when there are fewer than 1 or more than 10 options, or when an
    /// initial option is not one of the options.
    pub fn build(self) -> ValidationResult<CheckboxGroup> {
        let action_id = ActionId::new(self.action_id)?;
        rules::check_count("options", self.options.len(), 1, limits::CHOICE_OPTIONS)?;
        require_members("initial_options", "options", &self.initial_options, |option| {
            self.options.contains(option)
        })?;
        Ok(CheckboxGroup {
            action_id,
            options: self.options,
            initial_options: self.initial_options,
            confirm: self.confirm,
            focus_on_load: self.focus_on_load,
        })
    }
}

/// A group of mutually exclusive radio buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "radio_buttons")]
pub struct RadioButtonGroup {
    action_id: ActionId,
    options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialog>,
    #[serde(skip_serializing_if = "is_false")]
    focus_on_load: bool,
}

impl RadioButtonGroup {
    /// Starts building a radio button group.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> RadioButtonGroupBuilder {
        RadioButtonGroupBuilder {
            action_id: action_id.into(),
            options: Vec::new(),
            initial_option: None,
            confirm: None,
            focus_on_load: false,
        }
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &[OptionObject] {
        &self.options
    }

    /// Returns the option selected when the group first renders.
    #[must_use]
    pub const fn initial_option(&self) -> Option<&OptionObject> {
        self.initial_option.as_ref()
    }
}

impl Render for RadioButtonGroup {}

/// Builder for [`RadioButtonGroup`].
#[derive(Debug, Clone)]
pub struct RadioButtonGroupBuilder {
    action_id: String,
    options: Vec<OptionObject>,
    initial_option: Option<OptionObject>,
    confirm: Option<ConfirmationDialog>,
    focus_on_load: bool,
}

impl RadioButtonGroupBuilder {
    /// Appends a radio button.
    #[must_use]
    pub fn with_option(mut self, option: OptionObject) -> Self {
        self.options.push(option);
        self
    }

    /// Appends several radio buttons.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = OptionObject>) -> Self {
        self.options.extend(options);
        self
    }

    /// Sets the radio button that starts out selected.
    #[must_use]
    pub fn with_initial_option(mut self, option: OptionObject) -> Self {
        self.initial_option = Some(option);
        self
    }

    /// Asks for confirmation after a radio button is selected.
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmationDialog) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Focuses the element when the view opens.
    #[must_use]
    pub const fn with_focus_on_load(mut self, focus: bool) -> Self {
        self.focus_on_load = focus;
        self
    }

    /// Validates the fields and builds the group.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier is invalid,
    /// when there are fewer than 1 or more than 10 options, or when the
    /// initial option is not one of the options.
    pub fn build(self) -> ValidationResult<RadioButtonGroup> {
        let action_id = ActionId::new(self.action_id)?;
        rules::check_count("options", self.options.len(), 1, limits::CHOICE_OPTIONS)?;
        require_members("initial_option", "options", &self.initial_option, |option| {
            self.options.contains(option)
        })?;
        Ok(RadioButtonGroup {
            action_id,
            options: self.options,
            initial_option: self.initial_option,
            confirm: self.confirm,
            focus_on_load: self.focus_on_load,
        })
    }
}

/// A compact menu of up to five actions behind a "more" button.
///
/// Overflow options render plain text only and may carry a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "overflow")]
pub struct OverflowMenu {
    action_id: ActionId,
    options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialog>,
}

impl OverflowMenu {
    /// Creates an overflow menu.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier is invalid,
    /// when there are fewer than 2 or more than 5 options, or when an option
    /// uses `mrkdwn` text.
    pub fn new(
        action_id: impl Into<String>,
        options: impl IntoIterator<Item = OptionObject>,
    ) -> ValidationResult<Self> {
        let id = ActionId::new(action_id)?;
        let collected: Vec<OptionObject> = options.into_iter().collect();
        rules::check_count(
            "options",
            collected.len(),
            limits::OVERFLOW_OPTIONS_MIN,
            limits::OVERFLOW_OPTIONS_MAX,
        )?;
        require_plain_options("options", "overflow menus", &collected)?;
        Ok(Self {
            action_id: id,
            options: collected,
            confirm: None,
        })
    }

    /// Asks for confirmation before dispatching the selected action.
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmationDialog) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &[OptionObject] {
        &self.options
    }
}

impl Render for OverflowMenu {}
