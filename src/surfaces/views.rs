//! Modal and home tab views.

use super::{Surface, check_blocks};
use crate::{
    blocks::Block,
    config::SurfaceLimits,
    error::{Constraint, ValidationResult},
    objects::{Text, TextLike, TextSlot},
    render::{Render, is_false},
    validation::{limits, rules},
};
use serde::Serialize;

const TITLE: TextSlot = TextSlot::plain("title", limits::MODAL_TITLE);
const CLOSE: TextSlot = TextSlot::plain("close", limits::MODAL_TITLE);
const SUBMIT: TextSlot = TextSlot::plain("submit", limits::MODAL_TITLE);

/// Envelope fields shared by every view type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
struct ViewEnvelope {
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<String>,
}

impl ViewEnvelope {
    fn validate(self, surface: &SurfaceLimits) -> ValidationResult<Self> {
        check_blocks(&self.blocks, surface)?;
        Ok(Self {
            blocks: self.blocks,
            private_metadata: rules::bounded_opt(
                "private_metadata",
                self.private_metadata,
                0,
                limits::PRIVATE_METADATA,
            )?,
            callback_id: rules::bounded_opt(
                "callback_id",
                self.callback_id,
                1,
                limits::CALLBACK_ID,
            )?,
            external_id: rules::bounded_opt(
                "external_id",
                self.external_id,
                1,
                limits::IDENTIFIER,
            )?,
        })
    }
}

/// A modal dialog opened with `views.open`, `views.update` or `views.push`.
///
/// # Examples
///
/// ```
/// use blockkit::blocks::InputBlock;
/// use blockkit::elements::PlainTextInput;
/// use blockkit::surfaces::{ModalView, Surface};
///
/// let name = PlainTextInput::builder("name").build().expect("valid input");
/// let modal = ModalView::builder("New project")
///     .with_block(InputBlock::builder("Name", name).build().expect("valid block"))
///     .with_submit("Create")
///     .with_callback_id("new-project")
///     .build()
///     .expect("valid modal");
/// let arguments = modal.to_arguments().expect("serialisable");
/// assert_eq!(arguments["type"], "modal");
/// assert_eq!(arguments["submit"]["text"], "Create");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "modal")]
pub struct ModalView {
    title: Text,
    #[serde(flatten)]
    envelope: ViewEnvelope,
    #[serde(skip_serializing_if = "Option::is_none")]
    close: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submit: Option<Text>,
    #[serde(skip_serializing_if = "is_false")]
    clear_on_close: bool,
    #[serde(skip_serializing_if = "is_false")]
    notify_on_close: bool,
    #[serde(skip_serializing_if = "is_false")]
    submit_disabled: bool,
}

impl ModalView {
    /// Starts building a modal with its title.
    #[must_use]
    pub fn builder(title: impl Into<TextLike>) -> ModalViewBuilder {
        ModalViewBuilder {
            title: title.into(),
            envelope: ViewEnvelope::default(),
            close: None,
            submit: None,
            clear_on_close: false,
            notify_on_close: false,
            submit_disabled: false,
            limits: SurfaceLimits::for_views(),
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Text {
        &self.title
    }

    /// Returns the callback identifier, if any.
    #[must_use]
    pub fn callback_id(&self) -> Option<&str> {
        self.envelope.callback_id.as_deref()
    }
}

impl Render for ModalView {}

impl Surface for ModalView {
    fn blocks(&self) -> &[Block] {
        &self.envelope.blocks
    }
}

/// Builder for [`ModalView`].
#[derive(Debug, Clone)]
pub struct ModalViewBuilder {
    title: TextLike,
    envelope: ViewEnvelope,
    close: Option<TextLike>,
    submit: Option<TextLike>,
    clear_on_close: bool,
    notify_on_close: bool,
    submit_disabled: bool,
    limits: SurfaceLimits,
}

impl ModalViewBuilder {
    /// Appends a block.
    #[must_use]
    pub fn with_block(mut self, block: impl Into<Block>) -> Self {
        self.envelope.blocks.push(block.into());
        self
    }

    /// Appends several blocks, keeping their order.
    #[must_use]
    pub fn with_blocks<I, B>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        self.envelope
            .blocks
            .extend(blocks.into_iter().map(Into::into));
        self
    }

    /// Sets the close button label.
    #[must_use]
    pub fn with_close(mut self, close: impl Into<TextLike>) -> Self {
        self.close = Some(close.into());
        self
    }

    /// Sets the submit button label.
    #[must_use]
    pub fn with_submit(mut self, submit: impl Into<TextLike>) -> Self {
        self.submit = Some(submit.into());
        self
    }

    /// Sets a string echoed back in `view_submission` payloads.
    #[must_use]
    pub fn with_private_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.envelope.private_metadata = Some(metadata.into());
        self
    }

    /// Sets the identifier of this view's submissions.
    #[must_use]
    pub fn with_callback_id(mut self, callback_id: impl Into<String>) -> Self {
        self.envelope.callback_id = Some(callback_id.into());
        self
    }

    /// Sets an identifier unique among the team's views.
    #[must_use]
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.envelope.external_id = Some(external_id.into());
        self
    }

    /// Clears the whole view stack when this modal is closed.
    #[must_use]
    pub const fn with_clear_on_close(mut self, clear: bool) -> Self {
        self.clear_on_close = clear;
        self
    }

    /// Sends a `view_closed` event when this modal is closed.
    #[must_use]
    pub const fn with_notify_on_close(mut self, notify: bool) -> Self {
        self.notify_on_close = notify;
        self
    }

    /// Disables submission until an input has a value.
    #[must_use]
    pub const fn with_submit_disabled(mut self, disabled: bool) -> Self {
        self.submit_disabled = disabled;
        self
    }

    /// Replaces the default view limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: SurfaceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates and builds the modal.
    ///
    /// # Errors
    ///
    /// Returns a validation error when:
    /// - the title, close or submit label is empty or longer than 24
    ///   characters;
    /// - the block count is outside the configured limits;
    /// - the modal contains an input block but no submit label;
    /// - the private metadata, callback or external identifier is too long.
    pub fn build(self) -> ValidationResult<ModalView> {
        let title = TITLE.resolve(self.title)?;
        let envelope = self.envelope.validate(&self.limits)?;
        let submit = SUBMIT.resolve_opt(self.submit)?;
        if submit.is_none() && envelope.blocks.iter().any(Block::is_input) {
            return Err(rules::reject("submit", Constraint::Required));
        }
        tracing::debug!(%title, blocks = envelope.blocks.len(), "built modal view");
        Ok(ModalView {
            title,
            envelope,
            close: CLOSE.resolve_opt(self.close)?,
            submit,
            clear_on_close: self.clear_on_close,
            notify_on_close: self.notify_on_close,
            submit_disabled: self.submit_disabled,
        })
    }
}

/// The content of an app's home tab, published with `views.publish`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "home")]
pub struct HomeTabView {
    #[serde(flatten)]
    envelope: ViewEnvelope,
}

impl HomeTabView {
    /// Starts building a home tab view.
    #[must_use]
    pub fn builder() -> HomeTabViewBuilder {
        HomeTabViewBuilder {
            envelope: ViewEnvelope::default(),
            limits: SurfaceLimits::for_views(),
        }
    }
}

impl Render for HomeTabView {}

impl Surface for HomeTabView {
    fn blocks(&self) -> &[Block] {
        &self.envelope.blocks
    }
}

/// Builder for [`HomeTabView`].
#[derive(Debug, Clone)]
pub struct HomeTabViewBuilder {
    envelope: ViewEnvelope,
    limits: SurfaceLimits,
}

impl HomeTabViewBuilder {
    /// Appends a block.
    #[must_use]
    pub fn with_block(mut self, block: impl Into<Block>) -> Self {
        self.envelope.blocks.push(block.into());
        self
    }

    /// Appends several blocks, keeping their order.
    #[must_use]
    pub fn with_blocks<I, B>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        self.envelope
            .blocks
            .extend(blocks.into_iter().map(Into::into));
        self
    }

    /// Sets a string echoed back in interaction payloads.
    #[must_use]
    pub fn with_private_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.envelope.private_metadata = Some(metadata.into());
        self
    }

    /// Sets the identifier of this view's interactions.
    #[must_use]
    pub fn with_callback_id(mut self, callback_id: impl Into<String>) -> Self {
        self.envelope.callback_id = Some(callback_id.into());
        self
    }

    /// Sets an identifier unique among the team's views.
    #[must_use]
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.envelope.external_id = Some(external_id.into());
        self
    }

    /// Replaces the default view limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: SurfaceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates and builds the view.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the block count is outside the
    /// configured limits or an envelope field is too long.
    pub fn build(self) -> ValidationResult<HomeTabView> {
        Ok(HomeTabView {
            envelope: self.envelope.validate(&self.limits)?,
        })
    }
}

/// Either kind of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum View {
    /// Modal dialog.
    Modal(ModalView),
    /// Home tab.
    Home(HomeTabView),
}

impl Render for View {}

impl Surface for View {
    fn blocks(&self) -> &[Block] {
        match self {
            Self::Modal(modal) => modal.blocks(),
            Self::Home(home) => home.blocks(),
        }
    }
}

impl From<ModalView> for View {
    fn from(modal: ModalView) -> Self {
        Self::Modal(modal)
    }
}

impl From<HomeTabView> for View {
    fn from(home: HomeTabView) -> Self {
        Self::Home(home)
    }
}
