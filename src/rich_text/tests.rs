//! Unit tests for rich text elements and containers.

use super::*;
use crate::{error::Constraint, render::Render};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn greeting() -> RichTextSection {
    let hello = RichTextElement::text("Hello ").expect("valid text");
    let user = UserMention::new("U123").expect("valid user").into();
    RichTextSection::new([hello, user]).expect("valid section")
}

// ============================================================================
// Inline elements
// ============================================================================

#[rstest]
fn unstyled_text_omits_style() {
    let element = RichTextElement::text("plain").expect("valid text");
    assert_eq!(
        element.to_value().expect("serialisable"),
        json!({"type": "text", "text": "plain"})
    );
}

#[rstest]
fn text_run_renders_its_own_tag() {
    let run = TextRun::new("bare").expect("valid run");
    let wrapped = RichTextElement::from(run.clone());
    assert_eq!(
        run.to_value().expect("serialisable"),
        json!({"type": "text", "text": "bare"})
    );
    assert_eq!(
        wrapped.to_value().expect("serialisable"),
        run.to_value().expect("serialisable")
    );
}

#[rstest]
fn link_serialises_unsafe_flag_and_style() {
    let link = Link::new("https://example.com")
        .and_then(|link| link.with_text("example"))
        .and_then(|link| link.with_style(RichTextStyle::new().bold()))
        .expect("valid link")
        .with_unsafe(true);
    assert_eq!(
        RichTextElement::from(link).to_value().expect("serialisable"),
        json!({
            "type": "link",
            "url": "https://example.com",
            "text": "example",
            "unsafe": true,
            "style": {"bold": true}
        })
    );
}

#[rstest]
fn user_group_mention_uses_snake_case_tag() {
    let mention = UserGroupMention::new("S42")
        .and_then(|mention| mention.with_style(RichTextStyle::new().highlight()))
        .expect("valid mention");
    assert_eq!(
        RichTextElement::from(mention).to_value().expect("serialisable"),
        json!({"type": "user_group", "user_group_id": "S42", "style": {"highlight": true}})
    );
}

#[rstest]
fn text_rejects_mention_only_style() {
    let error = TextRun::new("x")
        .and_then(|run| run.with_style(RichTextStyle::new().bold().unlink()))
        .expect_err("unlink is mention only");
    assert_eq!(error.field(), "style");
    assert_eq!(
        error.constraint(),
        &Constraint::NotPermitted {
            kind: "unlink",
            context: "text"
        }
    );
}

#[rstest]
fn mention_rejects_code_style() {
    let result = ChannelMention::new("C1")
        .and_then(|mention| mention.with_style(RichTextStyle::new().code()));
    assert!(result.is_err());
}

#[rstest]
#[case(Emoji::new("").map(RichTextElement::from))]
#[case(RichTextElement::text(""))]
#[case(Link::new("").map(RichTextElement::from))]
#[case(UserMention::new("").map(RichTextElement::from))]
fn empty_inline_values_are_rejected(#[case] result: crate::error::ValidationResult<RichTextElement>) {
    assert!(matches!(
        result.expect_err("empty value").constraint(),
        Constraint::TooShort { min: 1, actual: 0 }
    ));
}

// ============================================================================
// Containers
// ============================================================================

#[rstest]
fn section_requires_an_element() {
    let error = RichTextSection::new([]).expect_err("no elements");
    assert_eq!(error.field(), "elements");
}

#[rstest]
fn list_items_carry_section_tag(greeting: RichTextSection) {
    let list = RichTextList::new(ListStyle::Ordered, [greeting])
        .expect("valid list")
        .with_indent(1)
        .with_offset(2);
    assert_eq!(
        list.to_value().expect("serialisable"),
        json!({
            "type": "rich_text_list",
            "style": "ordered",
            "elements": [{
                "type": "rich_text_section",
                "elements": [
                    {"type": "text", "text": "Hello "},
                    {"type": "user", "user_id": "U123"}
                ]
            }],
            "indent": 1,
            "offset": 2
        })
    );
}

#[rstest]
fn list_requires_an_item() {
    assert!(RichTextList::new(ListStyle::Bullet, []).is_err());
}

#[rstest]
fn quote_and_preformatted_emit_border() {
    let quote: RichTextObject = RichTextQuote::new([RichTextElement::text("q").expect("valid")])
        .expect("valid quote")
        .with_border(1)
        .into();
    let code: RichTextObject =
        RichTextPreformatted::new([RichTextElement::text("fn main() {}").expect("valid")])
            .expect("valid block")
            .into();
    assert_eq!(
        quote.to_value().expect("serialisable"),
        json!({"type": "rich_text_quote", "elements": [{"type": "text", "text": "q"}], "border": 1})
    );
    assert_eq!(
        code.to_value().expect("serialisable").get("type"),
        Some(&json!(code.type_name()))
    );
}
