//! Unit tests for buttons and workflow buttons.

use crate::{
    elements::{Button, WorkflowButton},
    error::Constraint,
    objects::{ConfirmationDialog, Style, Text, TextType, Trigger, Workflow},
    render::Render,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn minimal_button_serialises_text_and_action_id() {
    let button = Button::builder("Click", "click").build().expect("valid button");
    assert_eq!(
        button.to_value().expect("serialisable"),
        json!({
            "type": "button",
            "text": {"type": "plain_text", "text": "Click"},
            "action_id": "click"
        })
    );
}

#[rstest]
fn button_text_is_forced_plain() {
    let button = Button::builder(Text::markdown("*Go*").expect("valid"), "go")
        .build()
        .expect("valid button");
    assert_eq!(button.text().kind(), TextType::Plain);
}

#[rstest]
fn button_with_confirm_embeds_dialog() {
    let dialog = ConfirmationDialog::new("Sure?", "Really delete?", "Yes", "No")
        .expect("valid dialog")
        .with_style(Style::Danger);
    let button = Button::builder("Delete", "delete")
        .with_style(Style::Danger)
        .with_confirm(dialog)
        .build()
        .expect("valid button");
    let json = button.to_value().expect("serialisable");
    assert_eq!(
        json.get("confirm").and_then(|confirm| confirm.get("style")),
        Some(&json!("danger"))
    );
}

#[rstest]
#[case(Button::builder("x".repeat(76), "id"), "text")]
#[case(Button::builder("ok", ""), "action_id")]
#[case(Button::builder("ok", "id").with_value("v".repeat(2001)), "value")]
#[case(Button::builder("ok", "id").with_url("u".repeat(3001)), "url")]
#[case(
    Button::builder("ok", "id").with_accessibility_label("a".repeat(76)),
    "accessibility_label"
)]
fn button_rejects_over_limit_fields(
    #[case] builder: crate::elements::ButtonBuilder,
    #[case] field: &str,
) {
    let error = builder.build().expect_err("invalid button");
    assert_eq!(error.field(), field);
}

#[rstest]
fn button_value_at_limit_is_accepted() {
    let button = Button::builder("ok", "id")
        .with_value("v".repeat(2000))
        .build()
        .expect("value at limit");
    assert_eq!(button.value().map(str::len), Some(2000));
}

#[rstest]
fn workflow_button_serialises_trigger() {
    let workflow = Workflow::new(
        Trigger::new("https://slack.com/shortcuts/Ft01/abc").expect("valid trigger"),
    );
    let button = WorkflowButton::new("Run", workflow)
        .and_then(|button| button.with_accessibility_label("Run the workflow"))
        .expect("valid button");
    assert_eq!(
        button.to_value().expect("serialisable"),
        json!({
            "type": "workflow_button",
            "text": {"type": "plain_text", "text": "Run"},
            "workflow": {"trigger": {"url": "https://slack.com/shortcuts/Ft01/abc"}},
            "accessibility_label": "Run the workflow"
        })
    );
}

#[rstest]
fn workflow_button_rejects_empty_action_id() {
    let workflow = Workflow::new(Trigger::new("https://example.com").expect("valid trigger"));
    let error = WorkflowButton::new("Run", workflow)
        .and_then(|button| button.with_action_id(""))
        .expect_err("empty action id");
    assert_eq!(error.constraint(), &Constraint::TooShort { min: 1, actual: 0 });
}
