//! Unit tests for actions and input blocks.

use crate::{
    blocks::{ActionsBlock, InputBlock},
    elements::{Button, DatePicker, Element, ImageElement, PlainTextInput},
    error::Constraint,
    objects::Text,
    render::Render,
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn button() -> Element {
    Button::builder("Approve", "approve")
        .build()
        .expect("valid button")
        .into()
}

#[fixture]
fn notes() -> PlainTextInput {
    PlainTextInput::builder("notes").build().expect("valid input")
}

// ============================================================================
// Actions
// ============================================================================

#[rstest]
fn actions_keep_element_order(button: Element) {
    let picker: Element = DatePicker::builder("due")
        .build()
        .expect("valid picker")
        .into();
    let actions = ActionsBlock::new([button, picker]).expect("valid actions");
    let names: Vec<&str> = actions.elements().iter().map(Element::type_name).collect();
    assert_eq!(names, ["button", "datepicker"]);
}

#[rstest]
fn actions_require_an_element() {
    let error = ActionsBlock::new(Vec::<Element>::new()).expect_err("empty actions");
    assert_eq!(error.constraint(), &Constraint::TooFew { min: 1, actual: 0 });
}

#[rstest]
fn actions_reject_more_than_25_elements(button: Element) {
    let error = ActionsBlock::new(vec![button; 26]).expect_err("too many");
    assert_eq!(error.constraint(), &Constraint::TooMany { max: 25, actual: 26 });
}

#[rstest]
fn actions_reject_non_interactive_elements(button: Element) {
    let image = ImageElement::from_url("https://example.com/a.png", "a").expect("valid image");
    let error = ActionsBlock::new([button, image.into()]).expect_err("image is not actionable");
    assert_eq!(
        error.constraint(),
        &Constraint::NotPermitted {
            kind: "image",
            context: "actions block"
        }
    );
}

// ============================================================================
// Input
// ============================================================================

#[rstest]
fn input_block_omits_false_flags(notes: PlainTextInput) {
    let block = InputBlock::builder("Notes", notes)
        .with_block_id("notes-block")
        .build()
        .expect("valid block");
    assert_eq!(
        block.to_value().expect("serialisable"),
        json!({
            "type": "input",
            "label": {"type": "plain_text", "text": "Notes"},
            "element": {"type": "plain_text_input", "action_id": "notes"},
            "block_id": "notes-block"
        })
    );
}

#[rstest]
fn input_block_emits_hint_and_dispatch(notes: PlainTextInput) {
    let block = InputBlock::builder(Text::markdown("*Notes*").expect("valid text"), notes)
        .with_hint("Optional detail")
        .with_dispatch_action(true)
        .build()
        .expect("valid block");
    let json = block.to_value().expect("serialisable");
    assert_eq!(
        json.get("label"),
        Some(&json!({"type": "plain_text", "text": "*Notes*"}))
    );
    assert_eq!(
        json.get("hint"),
        Some(&json!({"type": "plain_text", "text": "Optional detail"}))
    );
    assert_eq!(json.get("dispatch_action"), Some(&json!(true)));
    assert!(!block.is_optional());
}

#[rstest]
fn input_block_rejects_buttons(button: Element) {
    let error = InputBlock::builder("Label", button)
        .build()
        .expect_err("button is not an input");
    assert_eq!(error.field(), "element");
}

#[rstest]
fn input_label_limit(notes: PlainTextInput) {
    let error = InputBlock::builder("l".repeat(2001), notes)
        .build()
        .expect_err("label too long");
    assert_eq!(error.field(), "label");
}
