//! Unit tests for attachments and colours.

use crate::{
    blocks::SectionBlock,
    error::Constraint,
    render::Render,
    surfaces::{Attachment, AttachmentField, Color},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("#36a64f", "#36a64f")]
#[case("36A64F", "#36A64F")]
fn hex_colours_are_normalised(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(Color::hex(raw).expect("valid colour").as_str(), expected);
}

#[rstest]
#[case("")]
#[case("#12345")]
#[case("#12345g")]
#[case("##123456")]
fn invalid_hex_colours_are_rejected(#[case] raw: &str) {
    let error = Color::hex(raw).expect_err("invalid colour");
    assert_eq!(error.field(), "color");
    assert!(matches!(error.constraint(), Constraint::InvalidFormat { .. }));
}

#[rstest]
fn attachment_with_named_colour_and_field() {
    let field = AttachmentField::new(Some("Priority".to_owned()), Some("High".to_owned()))
        .expect("valid field")
        .with_short(true);
    let attachment = Attachment::builder()
        .with_color(Color::DANGER)
        .with_field(field)
        .build()
        .expect("valid attachment");
    assert_eq!(
        attachment.to_value().expect("serialisable"),
        json!({
            "color": "danger",
            "fields": [{"title": "Priority", "value": "High", "short": true}]
        })
    );
}

#[rstest]
fn attachment_keeps_block_order() {
    let attachment = Attachment::builder()
        .with_blocks([
            SectionBlock::new("first").expect("valid section"),
            SectionBlock::new("second").expect("valid section"),
        ])
        .build()
        .expect("valid attachment");
    let texts: Vec<&str> = attachment
        .blocks()
        .iter()
        .filter_map(|block| match block {
            crate::blocks::Block::Section(section) => section.text().map(|text| text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, ["first", "second"]);
    assert!(attachment.color().is_none());
}

#[rstest]
fn empty_attachment_is_rejected() {
    let error = Attachment::builder().build().expect_err("empty attachment");
    assert_eq!(error.field(), "attachment");
}

#[rstest]
fn field_needs_title_or_value() {
    assert!(AttachmentField::new(None, None).is_err());
}
