//! Select menus and their multi-select variants.
//!
//! Every menu is assembled through an [`ElementBuilder`] whose type
//! parameter holds the fields specific to that kind of menu.

use super::builder::{Common, ElementBuilder};
use crate::{
    error::{Constraint, ValidationResult},
    objects::{
        ConversationFilter, OptionGroup, OptionObject, require_members, require_plain_options,
    },
    render::{Render, is_false},
    validation::{limits, rules},
};
use serde::Serialize;

fn check_max_selected(max_selected_items: Option<u32>) -> ValidationResult<()> {
    if max_selected_items == Some(0) {
        return Err(rules::reject(
            "max_selected_items",
            Constraint::out_of_range("must be at least 1"),
        ));
    }
    Ok(())
}

/// Static option lists: exactly one of plain options or option groups.
#[derive(Debug, Clone, Default)]
struct StaticOptions {
    options: Vec<OptionObject>,
    option_groups: Vec<OptionGroup>,
}

impl StaticOptions {
    fn validate(&self) -> ValidationResult<()> {
        let has_options = !self.options.is_empty();
        let has_groups = !self.option_groups.is_empty();
        rules::check_exclusive("options", has_options, "option_groups", has_groups)?;
        rules::require_any("options", &["options", "option_groups"], &[has_options, has_groups])?;
        rules::check_count("options", self.options.len(), 0, limits::SELECT_OPTIONS)?;
        rules::check_count(
            "option_groups",
            self.option_groups.len(),
            0,
            limits::SELECT_OPTIONS,
        )?;
        require_plain_options("options", "select menus", &self.options)?;
        for (index, group) in self.option_groups.iter().enumerate() {
            require_plain_options(
                &format!("option_groups[{index}].options"),
                "select menus",
                group.options(),
            )?;
        }
        Ok(())
    }

    fn contains(&self, option: &OptionObject) -> bool {
        self.options.contains(option)
            || self
                .option_groups
                .iter()
                .any(|group| group.contains(option))
    }
}

/// Fields collected for a [`StaticSelect`].
#[derive(Debug, Clone, Default)]
pub struct StaticSelectDraft {
    source: StaticOptions,
    initial_option: Option<OptionObject>,
}

/// A single-choice menu over a fixed list of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "static_select")]
pub struct StaticSelect {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    option_groups: Vec<OptionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_option: Option<OptionObject>,
}

impl StaticSelect {
    /// Starts building a static select menu.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<StaticSelectDraft> {
        ElementBuilder::new(action_id)
    }

    /// Returns the ungrouped options.
    #[must_use]
    pub fn options(&self) -> &[OptionObject] {
        &self.options
    }

    /// Returns the option groups.
    #[must_use]
    pub fn option_groups(&self) -> &[OptionGroup] {
        &self.option_groups
    }
}

impl Render for StaticSelect {}

impl ElementBuilder<StaticSelectDraft> {
    /// Appends options to the menu.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = OptionObject>) -> Self {
        self.draft.source.options.extend(options);
        self
    }

    /// Appends option groups to the menu.
    #[must_use]
    pub fn with_option_groups(mut self, groups: impl IntoIterator<Item = OptionGroup>) -> Self {
        self.draft.source.option_groups.extend(groups);
        self
    }

    /// Sets the option selected when the menu first renders.
    #[must_use]
    pub fn with_initial_option(mut self, option: OptionObject) -> Self {
        self.draft.initial_option = Some(option);
        self
    }

    /// Validates the fields and builds the menu.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, when both or neither of options and option groups are
    /// given, when either list exceeds 100 items, when an option uses
    /// `mrkdwn` text, or when the initial option is not one of the options.
    pub fn build(self) -> ValidationResult<StaticSelect> {
        let (common, draft) = self.finish()?;
        draft.source.validate()?;
        require_members("initial_option", "options", &draft.initial_option, |option| {
            draft.source.contains(option)
        })?;
        Ok(StaticSelect {
            common,
            options: draft.source.options,
            option_groups: draft.source.option_groups,
            initial_option: draft.initial_option,
        })
    }
}

/// Fields collected for a [`MultiStaticSelect`].
#[derive(Debug, Clone, Default)]
pub struct MultiStaticSelectDraft {
    source: StaticOptions,
    initial_options: Vec<OptionObject>,
    max_selected_items: Option<u32>,
}

/// A multiple-choice menu over a fixed list of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "multi_static_select")]
pub struct MultiStaticSelect {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    option_groups: Vec<OptionGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    initial_options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
}

impl MultiStaticSelect {
    /// Starts building a multi-select static menu.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<MultiStaticSelectDraft> {
        ElementBuilder::new(action_id)
    }

    /// Returns the options selected when the menu first renders.
    #[must_use]
    pub fn initial_options(&self) -> &[OptionObject] {
        &self.initial_options
    }
}

impl Render for MultiStaticSelect {}

impl ElementBuilder<MultiStaticSelectDraft> {
    /// Appends options to the menu.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = OptionObject>) -> Self {
        self.draft.source.options.extend(options);
        self
    }

    /// Appends option groups to the menu.
    #[must_use]
    pub fn with_option_groups(mut self, groups: impl IntoIterator<Item = OptionGroup>) -> Self {
        self.draft.source.option_groups.extend(groups);
        self
    }

    /// Sets the options selected when the menu first renders.
    #[must_use]
    pub fn with_initial_options(mut self, options: impl IntoIterator<Item = OptionObject>) -> Self {
        self.draft.initial_options = options.into_iter().collect();
        self
    }

    /// Limits how many options may be selected.
    #[must_use]
    pub const fn with_max_selected_items(mut self, max: u32) -> Self {
        self.draft.max_selected_items = Some(max);
        self
    }

    /// Validates the fields and builds the menu.
    ///
    /// # Errors
    ///
    /// As for [`StaticSelect`], and when `max_selected_items` is zero.
    pub fn build(self) -> ValidationResult<MultiStaticSelect> {
        let (common, draft) = self.finish()?;
        draft.source.validate()?;
        require_members("initial_options", "options", &draft.initial_options, |option| {
            draft.source.contains(option)
        })?;
        check_max_selected(draft.max_selected_items)?;
        Ok(MultiStaticSelect {
            common,
            options: draft.source.options,
            option_groups: draft.source.option_groups,
            initial_options: draft.initial_options,
            max_selected_items: draft.max_selected_items,
        })
    }
}

/// Fields collected for an [`ExternalSelect`].
#[derive(Debug, Clone, Default)]
pub struct ExternalSelectDraft {
    initial_option: Option<OptionObject>,
    min_query_length: Option<u32>,
}

/// A single-choice menu whose options are loaded from an external source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "external_select")]
pub struct ExternalSelect {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_query_length: Option<u32>,
}

impl ExternalSelect {
    /// Starts building an external select menu.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<ExternalSelectDraft> {
        ElementBuilder::new(action_id)
    }
}

impl Render for ExternalSelect {}

impl ElementBuilder<ExternalSelectDraft> {
    /// Sets the option selected when the menu first renders.
    #[must_use]
    pub fn with_initial_option(mut self, option: OptionObject) -> Self {
        self.draft.initial_option = Some(option);
        self
    }

    /// Sets how many characters must be typed before options are requested.
    #[must_use]
    pub const fn with_min_query_length(mut self, length: u32) -> Self {
        self.draft.min_query_length = Some(length);
        self
    }

    /// Validates the fields and builds the menu.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid.
    pub fn build(self) -> ValidationResult<ExternalSelect> {
        let (common, draft) = self.finish()?;
        Ok(ExternalSelect {
            common,
            initial_option: draft.initial_option,
            min_query_length: draft.min_query_length,
        })
    }
}

/// Fields collected for a [`MultiExternalSelect`].
#[derive(Debug, Clone, Default)]
pub struct MultiExternalSelectDraft {
    initial_options: Vec<OptionObject>,
    min_query_length: Option<u32>,
    max_selected_items: Option<u32>,
}

/// A multiple-choice menu whose options are loaded from an external source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "multi_external_select")]
pub struct MultiExternalSelect {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    initial_options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_query_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
}

impl MultiExternalSelect {
    /// Starts building a multi-select external menu.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<MultiExternalSelectDraft> {
        ElementBuilder::new(action_id)
    }
}

impl Render for MultiExternalSelect {}

impl ElementBuilder<MultiExternalSelectDraft> {
    /// Sets the options selected when the menu first renders.
    #[must_use]
    pub fn with_initial_options(mut self, options: impl IntoIterator<Item = OptionObject>) -> Self {
        self.draft.initial_options = options.into_iter().collect();
        self
    }

    /// Sets how many characters must be typed before options are requested.
    #[must_use]
    pub const fn with_min_query_length(mut self, length: u32) -> Self {
        self.draft.min_query_length = Some(length);
        self
    }

    /// Limits how many options may be selected.
    #[must_use]
    pub const fn with_max_selected_items(mut self, max: u32) -> Self {
        self.draft.max_selected_items = Some(max);
        self
    }

    /// Validates the fields and builds the menu.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, or when `max_selected_items` is zero.
    pub fn build(self) -> ValidationResult<MultiExternalSelect> {
        let (common, draft) = self.finish()?;
        check_max_selected(draft.max_selected_items)?;
        Ok(MultiExternalSelect {
            common,
            initial_options: draft.initial_options,
            min_query_length: draft.min_query_length,
            max_selected_items: draft.max_selected_items,
        })
    }
}

/// Fields collected for a [`UsersSelect`].
#[derive(Debug, Clone, Default)]
pub struct UsersSelectDraft {
    initial_user: Option<String>,
}

/// A menu listing the users of the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "users_select")]
pub struct UsersSelect {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_user: Option<String>,
}

impl UsersSelect {
    /// Starts building a user select menu.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<UsersSelectDraft> {
        ElementBuilder::new(action_id)
    }
}

impl Render for UsersSelect {}

impl ElementBuilder<UsersSelectDraft> {
    /// Sets the user selected when the menu first renders.
    #[must_use]
    pub fn with_initial_user(mut self, user_id: impl Into<String>) -> Self {
        self.draft.initial_user = Some(user_id.into());
        self
    }

    /// Validates the fields and builds the menu.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier, placeholder or
    /// initial user is invalid.
    pub fn build(self) -> ValidationResult<UsersSelect> {
        let (common, draft) = self.finish()?;
        Ok(UsersSelect {
            common,
            initial_user: rules::bounded_opt(
                "initial_user",
                draft.initial_user,
                1,
                limits::IDENTIFIER,
            )?,
        })
    }
}

/// Fields collected for a [`MultiUsersSelect`].
#[derive(Debug, Clone, Default)]
pub struct MultiUsersSelectDraft {
    initial_users: Vec<String>,
    max_selected_items: Option<u32>,
}

/// A multi-select menu listing the users of the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "multi_users_select")]
pub struct MultiUsersSelect {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    initial_users: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
}

impl MultiUsersSelect {
    /// Starts building a multi-select user menu.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<MultiUsersSelectDraft> {
        ElementBuilder::new(action_id)
    }
}

impl Render for MultiUsersSelect {}

impl ElementBuilder<MultiUsersSelectDraft> {
    /// Sets the users selected when the menu first renders.
    #[must_use]
    pub fn with_initial_users<S: Into<String>>(
        mut self,
        user_ids: impl IntoIterator<Item = S>,
    ) -> Self {
        self.draft.initial_users = user_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Limits how many users may be selected.
    #[must_use]
    pub const fn with_max_selected_items(mut self, max: u32) -> Self {
        self.draft.max_selected_items = Some(max);
        self
    }

    /// Validates the fields and builds the menu.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, or when `max_selected_items` is zero.
    pub fn build(self) -> ValidationResult<MultiUsersSelect> {
        let (common, draft) = self.finish()?;
        check_max_selected(draft.max_selected_items)?;
        Ok(MultiUsersSelect {
            common,
            initial_users: draft.initial_users,
            max_selected_items: draft.max_selected_items,
        })
    }
}

/// Fields collected for a [`ConversationsSelect`].
#[derive(Debug, Clone, Default)]
pub struct ConversationsSelectDraft {
    initial_conversation: Option<String>,
    default_to_current_conversation: bool,
    response_url_enabled: bool,
    filter: Option<ConversationFilter>,
}

/// A menu listing public and private channels, DMs and group DMs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "conversations_select")]
pub struct ConversationsSelect {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_conversation: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    default_to_current_conversation: bool,
    #[serde(skip_serializing_if = "is_false")]
    response_url_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<ConversationFilter>,
}

impl ConversationsSelect {
    /// Starts building a conversation select menu.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<ConversationsSelectDraft> {
        ElementBuilder::new(action_id)
    }
}

impl Render for ConversationsSelect {}

impl ElementBuilder<ConversationsSelectDraft> {
    /// Sets the conversation selected when the menu first renders.
    #[must_use]
    pub fn with_initial_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.draft.initial_conversation = Some(conversation_id.into());
        self
    }

    /// Preselects the conversation the menu was opened from.
    #[must_use]
    pub const fn with_default_to_current_conversation(mut self, enabled: bool) -> Self {
        self.draft.default_to_current_conversation = enabled;
        self
    }

    /// Includes a response URL for the selected conversation in modal
    /// submissions. Only valid in input blocks of modals.
    #[must_use]
    pub const fn with_response_url_enabled(mut self, enabled: bool) -> Self {
        self.draft.response_url_enabled = enabled;
        self
    }

    /// Restricts which conversations are listed.
    #[must_use]
    pub fn with_filter(mut self, filter: ConversationFilter) -> Self {
        self.draft.filter = Some(filter);
        self
    }

    /// Validates the fields and builds the menu.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier, placeholder or
    /// initial conversation is invalid.
    pub fn build(self) -> ValidationResult<ConversationsSelect> {
        let (common, draft) = self.finish()?;
        Ok(ConversationsSelect {
            common,
            initial_conversation: rules::bounded_opt(
                "initial_conversation",
                draft.initial_conversation,
                1,
                limits::IDENTIFIER,
            )?,
            default_to_current_conversation: draft.default_to_current_conversation,
            response_url_enabled: draft.response_url_enabled,
            filter: draft.filter,
        })
    }
}

/// Fields collected for a [`MultiConversationsSelect`].
#[derive(Debug, Clone, Default)]
pub struct MultiConversationsSelectDraft {
    initial_conversations: Vec<String>,
    default_to_current_conversation: bool,
    max_selected_items: Option<u32>,
    filter: Option<ConversationFilter>,
}

/// A multi-select menu listing conversations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "multi_conversations_select")]
pub struct MultiConversationsSelect {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    initial_conversations: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    default_to_current_conversation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<ConversationFilter>,
}

impl MultiConversationsSelect {
    /// Starts building a multi-select conversation menu.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<MultiConversationsSelectDraft> {
        ElementBuilder::new(action_id)
    }
}

impl Render for MultiConversationsSelect {}

impl ElementBuilder<MultiConversationsSelectDraft> {
    /// Sets the conversations selected when the menu first renders.
    #[must_use]
    pub fn with_initial_conversations<S: Into<String>>(
        mut self,
        conversation_ids: impl IntoIterator<Item = S>,
    ) -> Self {
        self.draft.initial_conversations = conversation_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Preselects the conversation the menu was opened from.
    #[must_use]
    pub const fn with_default_to_current_conversation(mut self, enabled: bool) -> Self {
        self.draft.default_to_current_conversation = enabled;
        self
    }

    /// Limits how many conversations may be selected.
    #[must_use]
    pub const fn with_max_selected_items(mut self, max: u32) -> Self {
        self.draft.max_selected_items = Some(max);
        self
    }

    /// Restricts which conversations are listed.
    #[must_use]
    pub fn with_filter(mut self, filter: ConversationFilter) -> Self {
        self.draft.filter = Some(filter);
        self
    }

    /// Validates the fields and builds the menu.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, or when `max_selected_items` is zero.
    pub fn build(self) -> ValidationResult<MultiConversationsSelect> {
        let (common, draft) = self.finish()?;
        check_max_selected(draft.max_selected_items)?;
        Ok(MultiConversationsSelect {
            common,
            initial_conversations: draft.initial_conversations,
            default_to_current_conversation: draft.default_to_current_conversation,
            max_selected_items: draft.max_selected_items,
            filter: draft.filter,
        })
    }
}

/// Fields collected for a [`ChannelsSelect`].
#[derive(Debug, Clone, Default)]
pub struct ChannelsSelectDraft {
    initial_channel: Option<String>,
    response_url_enabled: bool,
}

/// A menu listing the public channels of the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "channels_select")]
pub struct ChannelsSelect {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_channel: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    response_url_enabled: bool,
}

impl ChannelsSelect {
    /// Starts building a channel select menu.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<ChannelsSelectDraft> {
        ElementBuilder::new(action_id)
    }
}

impl Render for ChannelsSelect {}

impl ElementBuilder<ChannelsSelectDraft> {
    /// Sets the channel selected when the menu first renders.
    #[must_use]
    pub fn with_initial_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.draft.initial_channel = Some(channel_id.into());
        self
    }

    /// Includes a response URL for the selected channel in modal
    /// submissions.
    #[must_use]
    pub const fn with_response_url_enabled(mut self, enabled: bool) -> Self {
        self.draft.response_url_enabled = enabled;
        self
    }

    /// Validates the fields and builds the menu.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier, placeholder or
    /// initial channel is invalid.
    pub fn build(self) -> ValidationResult<ChannelsSelect> {
        let (common, draft) = self.finish()?;
        Ok(ChannelsSelect {
            common,
            initial_channel: rules::bounded_opt(
                "initial_channel",
                draft.initial_channel,
                1,
                limits::IDENTIFIER,
            )?,
            response_url_enabled: draft.response_url_enabled,
        })
    }
}

/// Fields collected for a [`MultiChannelsSelect`].
#[derive(Debug, Clone, Default)]
pub struct MultiChannelsSelectDraft {
    initial_channels: Vec<String>,
    max_selected_items: Option<u32>,
}

/// A multi-select menu listing public channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "multi_channels_select")]
pub struct MultiChannelsSelect {
    #[serde(flatten)]
    common: Common,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    initial_channels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
}

impl MultiChannelsSelect {
    /// Starts building a multi-select channel menu.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> ElementBuilder<MultiChannelsSelectDraft> {
        ElementBuilder::new(action_id)
    }
}

impl Render for MultiChannelsSelect {}

impl ElementBuilder<MultiChannelsSelectDraft> {
    /// Sets the channels selected when the menu first renders.
    #[must_use]
    pub fn with_initial_channels<S: Into<String>>(
        mut self,
        channel_ids: impl IntoIterator<Item = S>,
    ) -> Self {
        self.draft.initial_channels = channel_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Limits how many channels may be selected.
    #[must_use]
    pub const fn with_max_selected_items(mut self, max: u32) -> Self {
        self.draft.max_selected_items = Some(max);
        self
    }

    /// Validates the fields and builds the menu.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, or when `max_selected_items` is zero.
    pub fn build(self) -> ValidationResult<MultiChannelsSelect> {
        let (common, draft) = self.finish()?;
        check_max_selected(draft.max_selected_items)?;
        Ok(MultiChannelsSelect {
            common,
            initial_channels: draft.initial_channels,
            max_selected_items: draft.max_selected_items,
        })
    }
}
