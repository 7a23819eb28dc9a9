//! Each element type rendered on its own carries its wire `type` tag.

use crate::{
    elements::{
        Button, ChannelsSelect, CheckboxGroup, ConversationsSelect, DatePicker, DateTimePicker,
        EmailInput, ExternalSelect, ImageElement, MultiChannelsSelect, MultiConversationsSelect,
        MultiExternalSelect, MultiStaticSelect, MultiUsersSelect, NumberInput, OverflowMenu,
        PlainTextInput, RadioButtonGroup, StaticSelect, TimePicker, UrlInput, UsersSelect,
        WorkflowButton,
    },
    error::ValidationResult,
    objects::{OptionObject, Trigger, Workflow},
    render::Render,
};
use rstest::rstest;
use serde_json::{Value, json};

fn rendered<T: Render>(element: ValidationResult<T>) -> Value {
    element
        .expect("valid element")
        .to_value()
        .expect("serialisable")
}

fn option(label: &str) -> OptionObject {
    OptionObject::new(label, label.to_lowercase()).expect("valid option")
}

fn option_json(label: &str) -> Value {
    json!({"text": {"type": "plain_text", "text": label}, "value": label.to_lowercase()})
}

fn workflow() -> Workflow {
    Workflow::new(Trigger::new("https://slack.com/shortcuts/Ft01/abc").expect("valid trigger"))
}

#[rstest]
#[case::button(
    rendered(Button::builder("Go", "go").build()),
    json!({"type": "button", "text": {"type": "plain_text", "text": "Go"}, "action_id": "go"})
)]
#[case::workflow_button(
    rendered(WorkflowButton::new("Run", workflow())),
    json!({
        "type": "workflow_button",
        "text": {"type": "plain_text", "text": "Run"},
        "workflow": {"trigger": {"url": "https://slack.com/shortcuts/Ft01/abc"}}
    })
)]
#[case::checkboxes(
    rendered(CheckboxGroup::builder("pick").with_option(option("Red")).build()),
    json!({"type": "checkboxes", "action_id": "pick", "options": [option_json("Red")]})
)]
#[case::radio_buttons(
    rendered(RadioButtonGroup::builder("pick").with_option(option("Red")).build()),
    json!({"type": "radio_buttons", "action_id": "pick", "options": [option_json("Red")]})
)]
#[case::overflow(
    rendered(OverflowMenu::new("more", [option("Edit"), option("Delete")])),
    json!({
        "type": "overflow",
        "action_id": "more",
        "options": [option_json("Edit"), option_json("Delete")]
    })
)]
#[case::static_select(
    rendered(StaticSelect::builder("pick").with_options([option("Red")]).build()),
    json!({"type": "static_select", "action_id": "pick", "options": [option_json("Red")]})
)]
#[case::multi_static_select(
    rendered(MultiStaticSelect::builder("pick").with_options([option("Red")]).build()),
    json!({"type": "multi_static_select", "action_id": "pick", "options": [option_json("Red")]})
)]
#[case::external_select(
    rendered(ExternalSelect::builder("find").build()),
    json!({"type": "external_select", "action_id": "find"})
)]
#[case::multi_external_select(
    rendered(MultiExternalSelect::builder("find").build()),
    json!({"type": "multi_external_select", "action_id": "find"})
)]
#[case::users_select(
    rendered(UsersSelect::builder("who").build()),
    json!({"type": "users_select", "action_id": "who"})
)]
#[case::multi_users_select(
    rendered(MultiUsersSelect::builder("who").build()),
    json!({"type": "multi_users_select", "action_id": "who"})
)]
#[case::conversations_select(
    rendered(ConversationsSelect::builder("where").build()),
    json!({"type": "conversations_select", "action_id": "where"})
)]
#[case::multi_conversations_select(
    rendered(MultiConversationsSelect::builder("where").build()),
    json!({"type": "multi_conversations_select", "action_id": "where"})
)]
#[case::channels_select(
    rendered(ChannelsSelect::builder("where").build()),
    json!({"type": "channels_select", "action_id": "where"})
)]
#[case::multi_channels_select(
    rendered(MultiChannelsSelect::builder("where").build()),
    json!({"type": "multi_channels_select", "action_id": "where"})
)]
#[case::plain_text_input(
    rendered(PlainTextInput::builder("notes").build()),
    json!({"type": "plain_text_input", "action_id": "notes"})
)]
#[case::email_input(
    rendered(EmailInput::builder("email").build()),
    json!({"type": "email_text_input", "action_id": "email"})
)]
#[case::url_input(
    rendered(UrlInput::builder("site").build()),
    json!({"type": "url_text_input", "action_id": "site"})
)]
#[case::number_input(
    rendered(NumberInput::builder("count", false).build()),
    json!({"type": "number_input", "action_id": "count", "is_decimal_allowed": false})
)]
#[case::date_picker(
    rendered(DatePicker::builder("due").build()),
    json!({"type": "datepicker", "action_id": "due"})
)]
#[case::time_picker(
    rendered(TimePicker::builder("at").build()),
    json!({"type": "timepicker", "action_id": "at"})
)]
#[case::date_time_picker(
    rendered(DateTimePicker::builder("when").build()),
    json!({"type": "datetimepicker", "action_id": "when"})
)]
#[case::image(
    rendered(ImageElement::from_url("https://example.com/a.png", "a")),
    json!({"type": "image", "image_url": "https://example.com/a.png", "alt_text": "a"})
)]
fn element_renders_exact_wire_shape(#[case] actual: Value, #[case] expected: Value) {
    assert_eq!(actual, expected);
}
