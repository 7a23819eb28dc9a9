//! Interactive elements composed from objects.
//!
//! Every element struct serialises with its own `type` tag. Blocks hold
//! elements as [`Element`] values and check which kinds they accept when
//! they are built.

mod builder;
mod button;
mod choice;
mod image;
mod input;
mod picker;
mod select;

pub use builder::ElementBuilder;
pub use button::{Button, ButtonBuilder, WorkflowButton};
pub use choice::{
    CheckboxGroup, CheckboxGroupBuilder, OverflowMenu, RadioButtonGroup, RadioButtonGroupBuilder,
};
pub use image::{ImageElement, ImageSource};
pub use input::{
    EmailInput, EmailInputDraft, EntryBuilder, NumberInput, NumberInputDraft, PlainTextInput,
    PlainTextInputDraft, UrlInput, UrlInputDraft,
};
pub use picker::{
    DatePicker, DatePickerDraft, DateTimePicker, DateTimePickerDraft, TimePicker, TimePickerDraft,
};
pub use select::{
    ChannelsSelect, ChannelsSelectDraft, ConversationsSelect, ConversationsSelectDraft,
    ExternalSelect, ExternalSelectDraft, MultiChannelsSelect, MultiChannelsSelectDraft,
    MultiConversationsSelect, MultiConversationsSelectDraft, MultiExternalSelect,
    MultiExternalSelectDraft, MultiStaticSelect, MultiStaticSelectDraft, MultiUsersSelect,
    MultiUsersSelectDraft, StaticSelect, StaticSelectDraft, UsersSelect, UsersSelectDraft,
};

use crate::render::Render;
use serde::Serialize;

/// Any element. Each variant serialises its own `type` tag.
///
/// # Examples
///
/// ```
/// use blockkit::elements::{Button, Element};
/// use blockkit::render::Render;
///
/// let element: Element = Button::builder("Go", "go").build().expect("valid").into();
/// assert_eq!(element.type_name(), "button");
/// assert_eq!(element.to_value().expect("serialisable")["type"], "button");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Element {
    /// A button.
    Button(Button),
    /// A workflow button.
    WorkflowButton(WorkflowButton),
    /// A checkbox group.
    Checkboxes(CheckboxGroup),
    /// A radio button group.
    RadioButtons(RadioButtonGroup),
    /// An overflow menu.
    Overflow(OverflowMenu),
    /// A static select menu.
    StaticSelect(StaticSelect),
    /// A multi-select static menu.
    MultiStaticSelect(MultiStaticSelect),
    /// An external select menu.
    ExternalSelect(ExternalSelect),
    /// A multi-select external menu.
    MultiExternalSelect(MultiExternalSelect),
    /// A user select menu.
    UsersSelect(UsersSelect),
    /// A multi-select user menu.
    MultiUsersSelect(MultiUsersSelect),
    /// A conversation select menu.
    ConversationsSelect(ConversationsSelect),
    /// A multi-select conversation menu.
    MultiConversationsSelect(MultiConversationsSelect),
    /// A channel select menu.
    ChannelsSelect(ChannelsSelect),
    /// A multi-select channel menu.
    MultiChannelsSelect(MultiChannelsSelect),
    /// A plain-text input.
    PlainTextInput(PlainTextInput),
    /// An email input.
    EmailInput(EmailInput),
    /// A URL input.
    UrlInput(UrlInput),
    /// A number input.
    NumberInput(NumberInput),
    /// A date picker.
    DatePicker(DatePicker),
    /// A time picker.
    TimePicker(TimePicker),
    /// A date-time picker.
    DateTimePicker(DateTimePicker),
    /// An image.
    Image(ImageElement),
}

impl Element {
    /// Returns the wire `type` of the element.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Button(_) => "button",
            Self::WorkflowButton(_) => "workflow_button",
            Self::Checkboxes(_) => "checkboxes",
            Self::RadioButtons(_) => "radio_buttons",
            Self::Overflow(_) => "overflow",
            Self::StaticSelect(_) => "static_select",
            Self::MultiStaticSelect(_) => "multi_static_select",
            Self::ExternalSelect(_) => "external_select",
            Self::MultiExternalSelect(_) => "multi_external_select",
            Self::UsersSelect(_) => "users_select",
            Self::MultiUsersSelect(_) => "multi_users_select",
            Self::ConversationsSelect(_) => "conversations_select",
            Self::MultiConversationsSelect(_) => "multi_conversations_select",
            Self::ChannelsSelect(_) => "channels_select",
            Self::MultiChannelsSelect(_) => "multi_channels_select",
            Self::PlainTextInput(_) => "plain_text_input",
            Self::EmailInput(_) => "email_text_input",
            Self::UrlInput(_) => "url_text_input",
            Self::NumberInput(_) => "number_input",
            Self::DatePicker(_) => "datepicker",
            Self::TimePicker(_) => "timepicker",
            Self::DateTimePicker(_) => "datetimepicker",
            Self::Image(_) => "image",
        }
    }

    /// Returns `true` if the element can be the element of an input block.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        !matches!(
            self,
            Self::Button(_) | Self::WorkflowButton(_) | Self::Overflow(_) | Self::Image(_)
        )
    }

    /// Returns `true` if the element can appear in an actions block.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(
            self,
            Self::Image(_)
                | Self::PlainTextInput(_)
                | Self::EmailInput(_)
                | Self::UrlInput(_)
                | Self::NumberInput(_)
        )
    }

    /// Returns `true` if the element can be the accessory of a section block.
    #[must_use]
    pub const fn is_accessory(&self) -> bool {
        !matches!(
            self,
            Self::DateTimePicker(_)
                | Self::PlainTextInput(_)
                | Self::EmailInput(_)
                | Self::UrlInput(_)
                | Self::NumberInput(_)
        )
    }
}

impl Render for Element {}

impl From<Button> for Element {
    fn from(value: Button) -> Self {
        Self::Button(value)
    }
}

impl From<WorkflowButton> for Element {
    fn from(value: WorkflowButton) -> Self {
        Self::WorkflowButton(value)
    }
}

impl From<CheckboxGroup> for Element {
    fn from(value: CheckboxGroup) -> Self {
        Self::Checkboxes(value)
    }
}

impl From<RadioButtonGroup> for Element {
    fn from(value: RadioButtonGroup) -> Self {
        Self::RadioButtons(value)
    }
}

impl From<OverflowMenu> for Element {
    fn from(value: OverflowMenu) -> Self {
        Self::Overflow(value)
    }
}

impl From<StaticSelect> for Element {
    fn from(value: StaticSelect) -> Self {
        Self::StaticSelect(value)
    }
}

impl From<MultiStaticSelect> for Element {
    fn from(value: MultiStaticSelect) -> Self {
        Self::MultiStaticSelect(value)
    }
}

impl From<ExternalSelect> for Element {
    fn from(value: ExternalSelect) -> Self {
        Self::ExternalSelect(value)
    }
}

impl From<MultiExternalSelect> for Element {
    fn from(value: MultiExternalSelect) -> Self {
        Self::MultiExternalSelect(value)
    }
}

impl From<UsersSelect> for Element {
    fn from(value: UsersSelect) -> Self {
        Self::UsersSelect(value)
    }
}

impl From<MultiUsersSelect> for Element {
    fn from(value: MultiUsersSelect) -> Self {
        Self::MultiUsersSelect(value)
    }
}

impl From<ConversationsSelect> for Element {
    fn from(value: ConversationsSelect) -> Self {
        Self::ConversationsSelect(value)
    }
}

impl From<MultiConversationsSelect> for Element {
    fn from(value: MultiConversationsSelect) -> Self {
        Self::MultiConversationsSelect(value)
    }
}

impl From<ChannelsSelect> for Element {
    fn from(value: ChannelsSelect) -> Self {
        Self::ChannelsSelect(value)
    }
}

impl From<MultiChannelsSelect> for Element {
    fn from(value: MultiChannelsSelect) -> Self {
        Self::MultiChannelsSelect(value)
    }
}

impl From<PlainTextInput> for Element {
    fn from(value: PlainTextInput) -> Self {
        Self::PlainTextInput(value)
    }
}

impl From<EmailInput> for Element {
    fn from(value: EmailInput) -> Self {
        Self::EmailInput(value)
    }
}

impl From<UrlInput> for Element {
    fn from(value: UrlInput) -> Self {
        Self::UrlInput(value)
    }
}

impl From<NumberInput> for Element {
    fn from(value: NumberInput) -> Self {
        Self::NumberInput(value)
    }
}

impl From<DatePicker> for Element {
    fn from(value: DatePicker) -> Self {
        Self::DatePicker(value)
    }
}

impl From<TimePicker> for Element {
    fn from(value: TimePicker) -> Self {
        Self::TimePicker(value)
    }
}

impl From<DateTimePicker> for Element {
    fn from(value: DateTimePicker) -> Self {
        Self::DateTimePicker(value)
    }
}

impl From<ImageElement> for Element {
    fn from(value: ImageElement) -> Self {
        Self::Image(value)
    }
}

#[cfg(test)]
mod tests;
