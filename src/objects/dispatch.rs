//! Dispatch configuration for text-entry elements.

use crate::{error::ValidationResult, render::Render, validation::rules};
use serde::Serialize;

/// An interaction that makes a text input dispatch a `block_actions` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerAction {
    /// The user pressed enter in the input.
    OnEnterPressed,
    /// The user typed a character in the input.
    OnCharacterEntered,
}

/// Determines when a text-entry element returns an interaction payload.
///
/// Duplicate triggers are collapsed; their order follows declaration order
/// of [`TriggerAction`].
///
/// # Examples
///
/// ```
/// use blockkit::objects::{DispatchActionConfig, TriggerAction};
///
/// let config = DispatchActionConfig::new([
///     TriggerAction::OnEnterPressed,
///     TriggerAction::OnEnterPressed,
/// ])
/// .expect("one distinct trigger");
/// assert_eq!(config.triggers(), &[TriggerAction::OnEnterPressed]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchActionConfig {
    trigger_actions_on: Vec<TriggerAction>,
}

impl DispatchActionConfig {
    /// Creates a dispatch configuration from one or both triggers.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `trigger_actions_on` when no trigger
    /// is supplied.
    pub fn new(triggers: impl IntoIterator<Item = TriggerAction>) -> ValidationResult<Self> {
        let mut distinct: Vec<TriggerAction> = triggers.into_iter().collect();
        distinct.sort_unstable();
        distinct.dedup();
        rules::check_count("trigger_actions_on", distinct.len(), 1, 2)?;
        Ok(Self {
            trigger_actions_on: distinct,
        })
    }

    /// Returns the configured triggers.
    #[must_use]
    pub fn triggers(&self) -> &[TriggerAction] {
        &self.trigger_actions_on
    }
}

impl Render for DispatchActionConfig {}
