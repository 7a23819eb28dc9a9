//! Unit tests for messages and interaction responses.

use crate::{
    blocks::{DividerBlock, HeaderBlock, SectionBlock},
    config::SurfaceLimits,
    error::Constraint,
    render::Render,
    surfaces::{Message, MessageMetadata, MessageResponse, ResponseType, Surface},
};
use rstest::{fixture, rstest};
use serde_json::{Map, Value, json};

#[fixture]
fn section() -> SectionBlock {
    SectionBlock::builder()
        .with_text("Hello")
        .with_block_id("hello")
        .build()
        .expect("valid section")
}

// ============================================================================
// Messages
// ============================================================================

#[rstest]
fn minimal_message_arguments(section: SectionBlock) {
    let message = Message::builder("C1")
        .with_block(section)
        .build()
        .expect("valid message");
    assert_eq!(
        Value::Object(message.to_arguments().expect("serialisable")),
        json!({
            "channel": "C1",
            "mrkdwn": true,
            "blocks": [{
                "type": "section",
                "text": {"type": "mrkdwn", "text": "Hello"},
                "block_id": "hello"
            }]
        })
    );
}

#[rstest]
fn message_keeps_envelope_fields(section: SectionBlock) {
    let mut payload = Map::new();
    payload.insert("ticket".to_owned(), json!(42));
    let metadata = MessageMetadata::new("ticket_created", payload).expect("valid metadata");
    let message = Message::builder("C1")
        .with_block(section)
        .with_text("fallback")
        .with_thread_ts("1700000000.000100")
        .with_mrkdwn(false)
        .with_unfurl_links(false)
        .with_metadata(metadata)
        .build()
        .expect("valid message");
    let arguments = message.to_arguments().expect("serialisable");
    assert_eq!(arguments.get("text"), Some(&json!("fallback")));
    assert_eq!(arguments.get("thread_ts"), Some(&json!("1700000000.000100")));
    assert_eq!(arguments.get("mrkdwn"), Some(&json!(false)));
    assert_eq!(arguments.get("unfurl_links"), Some(&json!(false)));
    assert!(arguments.get("unfurl_media").is_none());
    assert_eq!(
        arguments.get("metadata"),
        Some(&json!({"event_type": "ticket_created", "event_payload": {"ticket": 42}}))
    );
}

#[rstest]
fn message_requires_channel(section: SectionBlock) {
    let error = Message::builder("")
        .with_block(section)
        .build()
        .expect_err("empty channel");
    assert_eq!(error.field(), "channel");
}

#[rstest]
fn message_requires_blocks_by_default() {
    let error = Message::builder("C1")
        .with_text("text only")
        .build()
        .expect_err("no blocks");
    assert_eq!(error.field(), "blocks");
    assert_eq!(error.constraint(), &Constraint::TooFew { min: 1, actual: 0 });
}

#[rstest]
fn lenient_limits_allow_text_only_messages() {
    let message = Message::builder("C1")
        .with_text("text only")
        .with_limits(SurfaceLimits::lenient())
        .build()
        .expect("valid message");
    assert!(message.blocks().is_empty());
    assert_eq!(message.text(), Some("text only"));
}

#[rstest]
fn message_rejects_more_than_fifty_blocks() {
    let error = Message::builder("C1")
        .with_blocks((0..51).map(|_| DividerBlock::new()))
        .build()
        .expect_err("too many blocks");
    assert_eq!(
        error.constraint(),
        &Constraint::TooMany {
            max: 50,
            actual: 51
        }
    );
}

#[rstest]
fn message_blocks_keep_order() {
    let message = Message::builder("C1")
        .with_block(HeaderBlock::new("Title").expect("valid header"))
        .with_block(DividerBlock::new())
        .with_block(SectionBlock::new("Body").expect("valid section"))
        .build()
        .expect("valid message");
    let names: Vec<&str> = message.blocks().iter().map(|block| block.type_name()).collect();
    assert_eq!(names, ["header", "divider", "section"]);
}

// ============================================================================
// Responses
// ============================================================================

#[rstest]
fn response_defaults_emit_replace_original(section: SectionBlock) {
    let response = MessageResponse::builder()
        .with_block(section)
        .build()
        .expect("valid response");
    let json = response.to_value().expect("serialisable");
    assert_eq!(json.get("replace_original"), Some(&json!(false)));
    assert!(json.get("response_type").is_none());
    assert!(json.get("delete_original").is_none());
}

#[rstest]
#[case(ResponseType::InChannel, "in_channel")]
#[case(ResponseType::Ephemeral, "ephemeral")]
fn response_type_wire_names(#[case] response_type: ResponseType, #[case] expected: &str) {
    let response = MessageResponse::builder()
        .with_text("done")
        .with_response_type(response_type)
        .build()
        .expect("valid response");
    assert_eq!(response.response_type(), Some(response_type));
    assert_eq!(
        response.to_value().expect("serialisable").get("response_type"),
        Some(&json!(expected))
    );
}

#[rstest]
fn delete_only_response_is_valid() {
    let response = MessageResponse::builder()
        .with_delete_original(true)
        .build()
        .expect("valid response");
    assert_eq!(
        response.to_value().expect("serialisable"),
        json!({"mrkdwn": true, "replace_original": false, "delete_original": true})
    );
}

#[rstest]
fn empty_response_is_rejected() {
    let error = MessageResponse::builder().build().expect_err("nothing to send");
    assert_eq!(error.field(), "response");
}
