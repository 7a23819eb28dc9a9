//! Conversation list filters for conversation select menus.

use crate::{error::ValidationResult, render::Render, validation::rules};
use serde::Serialize;

/// A kind of conversation that can be listed in a conversation select menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationKind {
    /// Direct messages.
    Im,
    /// Multi-person direct messages.
    Mpim,
    /// Private channels.
    Private,
    /// Public channels.
    Public,
}

/// Restricts the conversations offered by a conversation select menu.
///
/// At least one of the three criteria must be set.
///
/// # Examples
///
/// ```
/// use blockkit::objects::{ConversationFilter, ConversationKind};
///
/// let filter = ConversationFilter::builder()
///     .include(ConversationKind::Public)
///     .exclude_bot_users(true)
///     .build()
///     .expect("valid filter");
/// assert_eq!(filter.include(), &[ConversationKind::Public]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    include: Vec<ConversationKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude_external_shared_channels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude_bot_users: Option<bool>,
}

impl ConversationFilter {
    /// Returns a builder for a conversation filter.
    #[must_use]
    pub fn builder() -> ConversationFilterBuilder {
        ConversationFilterBuilder::default()
    }

    /// Returns the included conversation kinds.
    #[must_use]
    pub fn include(&self) -> &[ConversationKind] {
        &self.include
    }
}

impl Render for ConversationFilter {}

/// Builder for [`ConversationFilter`].
#[derive(Debug, Clone, Default)]
pub struct ConversationFilterBuilder {
    include: Vec<ConversationKind>,
    exclude_external_shared_channels: Option<bool>,
    exclude_bot_users: Option<bool>,
}

impl ConversationFilterBuilder {
    /// Adds a conversation kind to include.
    #[must_use]
    pub fn include(mut self, kind: ConversationKind) -> Self {
        self.include.push(kind);
        self
    }

    /// Sets whether shared channels from other organisations are hidden.
    #[must_use]
    pub const fn exclude_external_shared_channels(mut self, exclude: bool) -> Self {
        self.exclude_external_shared_channels = Some(exclude);
        self
    }

    /// Sets whether bot users are hidden.
    #[must_use]
    pub const fn exclude_bot_users(mut self, exclude: bool) -> Self {
        self.exclude_bot_users = Some(exclude);
        self
    }

    /// Builds the filter.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no criterion was set.
    pub fn build(self) -> ValidationResult<ConversationFilter> {
        rules::require_any(
            "filter",
            &[
                "include",
                "exclude_external_shared_channels",
                "exclude_bot_users",
            ],
            &[
                !self.include.is_empty(),
                self.exclude_external_shared_channels.is_some(),
                self.exclude_bot_users.is_some(),
            ],
        )?;
        let mut include = self.include;
        include.sort_unstable();
        include.dedup();
        Ok(ConversationFilter {
            include,
            exclude_external_shared_channels: self.exclude_external_shared_channels,
            exclude_bot_users: self.exclude_bot_users,
        })
    }
}
