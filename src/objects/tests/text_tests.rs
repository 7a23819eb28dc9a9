//! Unit tests for text objects and text slots.

use crate::{
    error::Constraint,
    objects::{Text, TextLike, TextSlot, TextType},
    render::Render,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn markdown_text_serialises_without_flags() {
    let text = Text::markdown("Hello, world!").expect("valid text");
    assert_eq!(
        text.to_value().expect("serialisable"),
        json!({"type": "mrkdwn", "text": "Hello, world!"})
    );
}

#[rstest]
fn verbatim_is_emitted_for_markdown_only() {
    let markdown = Text::markdown("<#C123>").expect("valid").with_verbatim(true);
    let plain = Text::plain("<#C123>").expect("valid").with_verbatim(true);

    assert_eq!(
        markdown.to_value().expect("serialisable"),
        json!({"type": "mrkdwn", "text": "<#C123>", "verbatim": true})
    );
    assert!(!plain.verbatim());
    assert_eq!(
        plain.to_value().expect("serialisable"),
        json!({"type": "plain_text", "text": "<#C123>"})
    );
}

#[rstest]
fn emoji_is_ignored_for_markdown() {
    let text = Text::markdown(":tada:").expect("valid").with_emoji(true);
    assert!(!text.emoji());
}

#[rstest]
#[case(1, true)]
#[case(3000, true)]
#[case(3001, false)]
fn text_length_boundary(#[case] length: usize, #[case] expected_ok: bool) {
    let result = Text::plain("x".repeat(length));
    assert_eq!(result.is_ok(), expected_ok, "length {length}");
}

#[rstest]
fn empty_text_names_the_field() {
    let error = Text::plain("").expect_err("empty text");
    assert_eq!(error.field(), "text");
    assert_eq!(error.constraint(), &Constraint::TooShort { min: 1, actual: 0 });
}

#[rstest]
fn into_plain_drops_verbatim_and_keeps_content() {
    let text = Text::markdown("*bold*")
        .expect("valid")
        .with_verbatim(true)
        .into_plain();
    assert_eq!(text.kind(), TextType::Plain);
    assert_eq!(text.as_str(), "*bold*");
    assert!(!text.verbatim());
}

#[rstest]
#[case(TextSlot::any("body", 10), TextType::Markdown)]
#[case(TextSlot::prefer_plain("body", 10), TextType::Plain)]
#[case(TextSlot::plain("body", 10), TextType::Plain)]
fn raw_strings_take_the_slot_default(#[case] slot: TextSlot, #[case] expected: TextType) {
    let text = slot.resolve(TextLike::from("hi")).expect("valid");
    assert_eq!(text.kind(), expected);
}

#[rstest]
fn plain_slots_force_plain_text() {
    let styled = Text::markdown("*hi*").expect("valid");
    let text = TextSlot::plain("label", 10)
        .resolve(styled.into())
        .expect("valid");
    assert_eq!(text.kind(), TextType::Plain);
}

#[rstest]
fn prefer_plain_slots_keep_explicit_markdown() {
    let styled = Text::markdown("*hi*").expect("valid");
    let text = TextSlot::prefer_plain("text", 10)
        .resolve(styled.into())
        .expect("valid");
    assert_eq!(text.kind(), TextType::Markdown);
}

#[rstest]
#[case(TextLike::from("x".repeat(11)))]
#[case(TextLike::from(Text::plain("x".repeat(11)).expect("valid base text")))]
fn slot_limit_applies_to_raw_and_built_text(#[case] input: TextLike) {
    let error = TextSlot::plain("label", 10)
        .resolve(input)
        .expect_err("over slot limit");
    assert_eq!(error.field(), "label");
    assert_eq!(
        error.constraint(),
        &Constraint::TooLong {
            max: 10,
            actual: 11
        }
    );
}

#[rstest]
fn resolve_opt_passes_none_through() {
    assert_eq!(TextSlot::plain("hint", 10).resolve_opt(None), Ok(None));
}
