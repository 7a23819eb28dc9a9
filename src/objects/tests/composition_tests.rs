//! Unit tests for confirmation dialogs, dispatch configuration, filters,
//! file references and workflow triggers.

use crate::{
    error::Constraint,
    objects::{
        ConfirmationDialog, ConversationFilter, ConversationKind, DispatchActionConfig,
        InputParameter, SlackFile, Style, Text, TextType, Trigger, TriggerAction,
    },
    render::Render,
};
use rstest::rstest;
use serde_json::json;

// ============================================================================
// Confirmation dialogs
// ============================================================================

#[rstest]
fn confirmation_dialog_serialises_all_parts() {
    let dialog = ConfirmationDialog::new("Sure?", "This *cannot* be undone.", "Do it", "Stop")
        .expect("valid dialog")
        .with_style(Style::Primary);
    assert_eq!(
        dialog.to_value().expect("serialisable"),
        json!({
            "title": {"type": "plain_text", "text": "Sure?"},
            "text": {"type": "mrkdwn", "text": "This *cannot* be undone."},
            "confirm": {"type": "plain_text", "text": "Do it"},
            "deny": {"type": "plain_text", "text": "Stop"},
            "style": "primary"
        })
    );
}

#[rstest]
fn confirmation_title_is_forced_plain() {
    let title = Text::markdown("*Sure?*").expect("valid");
    let dialog = ConfirmationDialog::new(title, "body", "Yes", "No").expect("valid dialog");
    assert_eq!(dialog.title().kind(), TextType::Plain);
}

#[rstest]
#[case("t".repeat(101), "b".to_owned(), "ok".to_owned(), "title")]
#[case("t".to_owned(), "b".repeat(301), "ok".to_owned(), "text")]
#[case("t".to_owned(), "b".to_owned(), "c".repeat(31), "confirm")]
fn confirmation_dialog_limits(
    #[case] title: String,
    #[case] body: String,
    #[case] confirm: String,
    #[case] field: &str,
) {
    let error = ConfirmationDialog::new(title, body, confirm, "No").expect_err("over limit");
    assert_eq!(error.field(), field);
}

// ============================================================================
// Dispatch configuration
// ============================================================================

#[rstest]
fn dispatch_config_requires_a_trigger() {
    let error = DispatchActionConfig::new([]).expect_err("no triggers");
    assert_eq!(error.field(), "trigger_actions_on");
}

#[rstest]
fn dispatch_config_serialises_both_triggers_in_order() {
    let config = DispatchActionConfig::new([
        TriggerAction::OnCharacterEntered,
        TriggerAction::OnEnterPressed,
    ])
    .expect("valid config");
    assert_eq!(
        config.to_value().expect("serialisable"),
        json!({"trigger_actions_on": ["on_enter_pressed", "on_character_entered"]})
    );
}

// ============================================================================
// Conversation filters
// ============================================================================

#[rstest]
fn empty_filter_is_rejected() {
    let error = ConversationFilter::builder().build().expect_err("empty filter");
    assert!(matches!(error.constraint(), Constraint::MissingOneOf { .. }));
}

#[rstest]
fn filter_deduplicates_kinds() {
    let filter = ConversationFilter::builder()
        .include(ConversationKind::Private)
        .include(ConversationKind::Im)
        .include(ConversationKind::Private)
        .build()
        .expect("valid filter");
    assert_eq!(
        filter.include(),
        &[ConversationKind::Im, ConversationKind::Private]
    );
}

#[rstest]
fn filter_with_only_exclusion_flag_is_valid() {
    let filter = ConversationFilter::builder()
        .exclude_external_shared_channels(true)
        .build()
        .expect("valid filter");
    assert_eq!(
        filter.to_value().expect("serialisable"),
        json!({"exclude_external_shared_channels": true})
    );
}

// ============================================================================
// Files and workflows
// ============================================================================

#[rstest]
fn slack_file_by_url_uses_url_key() {
    let file = SlackFile::from_url("https://files.example.com/F1").expect("valid url");
    assert_eq!(
        file.to_value().expect("serialisable"),
        json!({"url": "https://files.example.com/F1"})
    );
}

#[rstest]
#[case(SlackFile::from_id(""))]
#[case(SlackFile::from_url(""))]
fn slack_file_rejects_empty_reference(#[case] result: crate::error::ValidationResult<SlackFile>) {
    assert!(result.is_err());
}

#[rstest]
fn trigger_omits_empty_parameters() {
    let trigger = Trigger::new("https://slack.com/shortcuts/Ft1/x").expect("valid trigger");
    assert_eq!(trigger.url(), "https://slack.com/shortcuts/Ft1/x");
    assert_eq!(
        serde_json::to_value(&trigger).expect("serialisable"),
        json!({"url": "https://slack.com/shortcuts/Ft1/x"})
    );
}

#[rstest]
fn input_parameter_requires_name() {
    let error = InputParameter::new("", "value").expect_err("empty name");
    assert_eq!(error.field(), "name");
}
