//! Workflow triggers started from workflow buttons.

use crate::{
    error::ValidationResult,
    render::Render,
    validation::{limits, rules},
};
use serde::Serialize;

/// A value passed to a customisable input of a workflow trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputParameter {
    name: String,
    value: String,
}

impl InputParameter {
    /// Creates an input parameter.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `name` is empty.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: rules::bounded("name", name, 1, limits::IDENTIFIER)?,
            value: value.into(),
        })
    }
}

/// A link trigger that starts a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trigger {
    url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    customizable_input_parameters: Vec<InputParameter>,
}

impl Trigger {
    /// Creates a trigger from its link URL.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the URL is empty or longer than 3000
    /// characters.
    pub fn new(url: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            url: rules::bounded("url", url, 1, limits::URL)?,
            customizable_input_parameters: Vec::new(),
        })
    }

    /// Adds a customisable input parameter.
    #[must_use]
    pub fn with_input_parameter(mut self, parameter: InputParameter) -> Self {
        self.customizable_input_parameters.push(parameter);
        self
    }

    /// Returns the trigger URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A workflow started by a workflow button.
///
/// # Examples
///
/// ```
/// use blockkit::objects::{InputParameter, Trigger, Workflow};
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let trigger = Trigger::new("https://slack.com/shortcuts/Ft0123/abc")
///     .expect("valid url")
///     .with_input_parameter(InputParameter::new("ticket", "42").expect("valid name"));
/// let workflow = Workflow::new(trigger);
/// assert_eq!(
///     workflow.to_value().expect("serialisable"),
///     json!({"trigger": {
///         "url": "https://slack.com/shortcuts/Ft0123/abc",
///         "customizable_input_parameters": [{"name": "ticket", "value": "42"}]
///     }})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workflow {
    trigger: Trigger,
}

impl Workflow {
    /// Creates a workflow from its trigger.
    #[must_use]
    pub const fn new(trigger: Trigger) -> Self {
        Self { trigger }
    }

    /// Returns the workflow trigger.
    #[must_use]
    pub const fn trigger(&self) -> &Trigger {
        &self.trigger
    }
}

impl Render for Workflow {}
