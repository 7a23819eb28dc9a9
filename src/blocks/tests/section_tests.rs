//! Unit tests for section blocks.

use crate::{
    blocks::SectionBlock,
    elements::{Button, DateTimePicker, ImageElement, PlainTextInput},
    error::Constraint,
    objects::{Text, TextType},
    render::Render,
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn button() -> Button {
    Button::builder("Open", "open").build().expect("valid button")
}

#[rstest]
fn raw_text_becomes_markdown() {
    let section = SectionBlock::builder()
        .with_text("Hello, world!")
        .with_block_id("greeting")
        .build()
        .expect("valid section");
    assert_eq!(
        section.to_value().expect("serialisable"),
        json!({
            "type": "section",
            "text": {"type": "mrkdwn", "text": "Hello, world!"},
            "block_id": "greeting"
        })
    );
}

#[rstest]
fn text_and_accessory_both_appear(button: Button) {
    let section = SectionBlock::builder()
        .with_text("Pick one")
        .with_accessory(button)
        .build()
        .expect("valid section");
    let json = section.to_value().expect("serialisable");
    assert!(json.get("text").is_some());
    assert_eq!(
        json.get("accessory").and_then(|accessory| accessory.get("type")),
        Some(&json!("button"))
    );
}

#[rstest]
fn accessory_alone_is_enough(button: Button) {
    let section = SectionBlock::builder()
        .with_accessory(button)
        .build()
        .expect("valid section");
    assert!(section.text().is_none());
    assert!(section.accessory().is_some());
}

#[rstest]
fn empty_section_is_rejected() {
    let error = SectionBlock::builder().build().expect_err("nothing to show");
    assert_eq!(error.field(), "section");
    assert_eq!(
        error.constraint(),
        &Constraint::MissingOneOf {
            fields: &["text", "fields", "accessory"]
        }
    );
}

#[rstest]
fn over_length_text_is_rejected() {
    let error = SectionBlock::new("x".repeat(3001)).expect_err("too long");
    assert_eq!(error.field(), "text");
    assert_eq!(
        error.constraint(),
        &Constraint::TooLong {
            max: 3000,
            actual: 3001
        }
    );
}

#[rstest]
fn fields_keep_their_order_and_type() {
    let section = SectionBlock::builder()
        .with_fields(["*Owner*", "*Due*"])
        .with_field(Text::plain("Friday").expect("valid text"))
        .build()
        .expect("valid section");
    let kinds: Vec<TextType> = section.fields().iter().map(Text::kind).collect();
    assert_eq!(
        kinds,
        [TextType::Markdown, TextType::Markdown, TextType::Plain]
    );
}

#[rstest]
#[case(11, "fields")]
fn too_many_fields_are_rejected(#[case] count: usize, #[case] field: &str) {
    let error = SectionBlock::builder()
        .with_fields((0..count).map(|index| format!("field {index}")))
        .build()
        .expect_err("too many fields");
    assert_eq!(error.field(), field);
}

#[rstest]
fn field_over_two_thousand_characters_is_rejected() {
    let error = SectionBlock::builder()
        .with_field("f".repeat(2001))
        .build()
        .expect_err("field too long");
    assert_eq!(error.field(), "fields");
}

#[rstest]
fn image_accessory_is_allowed() {
    let image = ImageElement::from_url("https://example.com/a.png", "a").expect("valid image");
    assert!(
        SectionBlock::builder()
            .with_text("With picture")
            .with_accessory(image)
            .build()
            .is_ok()
    );
}

#[rstest]
fn input_only_elements_cannot_be_accessories() {
    let input = PlainTextInput::builder("notes").build().expect("valid input");
    let error = SectionBlock::builder()
        .with_text("Notes")
        .with_accessory(input)
        .build()
        .expect_err("not an accessory");
    assert_eq!(error.field(), "accessory");
    assert_eq!(
        error.constraint(),
        &Constraint::NotPermitted {
            kind: "plain_text_input",
            context: "section accessory"
        }
    );
}

#[rstest]
fn date_time_picker_cannot_be_an_accessory() {
    let picker = DateTimePicker::builder("when").build().expect("valid picker");
    assert!(
        SectionBlock::builder()
            .with_accessory(picker)
            .build()
            .is_err()
    );
}

#[rstest]
fn sections_without_ids_get_distinct_ids() {
    let first = SectionBlock::new("one").expect("valid section");
    let second = SectionBlock::new("one").expect("valid section");
    assert_ne!(first.block_id(), second.block_id());
}
