//! Unit tests for select menus.

use crate::{
    elements::{
        ConversationsSelect, ExternalSelect, MultiChannelsSelect, MultiStaticSelect,
        MultiUsersSelect, StaticSelect, UsersSelect,
    },
    error::Constraint,
    objects::{ConversationFilter, ConversationKind, OptionGroup, OptionObject, Text},
    render::Render,
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn small() -> OptionObject {
    OptionObject::new("Small", "s").expect("valid option")
}

#[fixture]
fn large() -> OptionObject {
    OptionObject::new("Large", "l").expect("valid option")
}

#[rstest]
fn static_select_serialises_placeholder_and_options(small: OptionObject, large: OptionObject) {
    let menu = StaticSelect::builder("size")
        .with_placeholder("Pick one")
        .with_options([small, large])
        .build()
        .expect("valid menu");
    let json = menu.to_value().expect("serialisable");
    assert_eq!(
        json.get("placeholder"),
        Some(&json!({"type": "plain_text", "text": "Pick one"}))
    );
    assert_eq!(json.get("option_groups"), None);
}

#[rstest]
fn static_select_rejects_options_and_groups(small: OptionObject, large: OptionObject) {
    let group = OptionGroup::new("Sizes", [large]).expect("valid group");
    let error = StaticSelect::builder("size")
        .with_options([small])
        .with_option_groups([group])
        .build()
        .expect_err("both sources");
    assert_eq!(
        error.constraint(),
        &Constraint::MutuallyExclusive {
            other: "option_groups"
        }
    );
}

#[rstest]
fn static_select_requires_a_source() {
    let error = StaticSelect::builder("size")
        .build()
        .expect_err("no options");
    assert_eq!(
        error.constraint(),
        &Constraint::MissingOneOf {
            fields: &["options", "option_groups"]
        }
    );
}

#[rstest]
fn static_select_accepts_initial_option_from_group(small: OptionObject, large: OptionObject) {
    let group = OptionGroup::new("Sizes", [small, large.clone()]).expect("valid group");
    let menu = StaticSelect::builder("size")
        .with_option_groups([group])
        .with_initial_option(large)
        .build()
        .expect("initial option drawn from a group");
    assert_eq!(menu.option_groups().len(), 1);
}

#[rstest]
fn static_select_rejects_foreign_initial_option(small: OptionObject, large: OptionObject) {
    let error = StaticSelect::builder("size")
        .with_options([small])
        .with_initial_option(large)
        .build()
        .expect_err("initial option not offered");
    assert_eq!(error.field(), "initial_option");
}

#[rstest]
fn static_select_rejects_markdown_in_groups(small: OptionObject) {
    let styled = OptionObject::new(Text::markdown("*M*").expect("valid"), "m").expect("valid");
    let group = OptionGroup::new("Sizes", [small, styled]).expect("valid group");
    let error = StaticSelect::builder("size")
        .with_option_groups([group])
        .build()
        .expect_err("markdown option");
    assert_eq!(error.field(), "option_groups[0].options[1].text");
}

#[rstest]
fn placeholder_over_150_characters_fails(small: OptionObject) {
    let error = StaticSelect::builder("size")
        .with_placeholder("p".repeat(151))
        .with_options([small])
        .build()
        .expect_err("long placeholder");
    assert_eq!(error.field(), "placeholder");
}

#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(3, true)]
fn multi_select_max_selected_items(small: OptionObject, #[case] max: u32, #[case] expected_ok: bool) {
    let result = MultiStaticSelect::builder("sizes")
        .with_options([small])
        .with_max_selected_items(max)
        .build();
    assert_eq!(result.is_ok(), expected_ok);
}

#[rstest]
fn multi_static_select_keeps_initial_options(small: OptionObject, large: OptionObject) {
    let menu = MultiStaticSelect::builder("sizes")
        .with_options([small.clone(), large])
        .with_initial_options([small.clone()])
        .build()
        .expect("valid menu");
    assert_eq!(menu.initial_options(), &[small]);
}

#[rstest]
fn external_select_emits_min_query_length() {
    let menu = ExternalSelect::builder("search")
        .with_min_query_length(3)
        .build()
        .expect("valid menu");
    assert_eq!(
        menu.to_value().expect("serialisable"),
        json!({"type": "external_select", "action_id": "search", "min_query_length": 3})
    );
}

#[rstest]
fn users_select_emits_initial_user() {
    let menu = UsersSelect::builder("owner")
        .with_initial_user("U123")
        .build()
        .expect("valid menu");
    assert_eq!(
        menu.to_value().expect("serialisable").get("initial_user"),
        Some(&json!("U123"))
    );
}

#[rstest]
fn multi_users_select_emits_initial_users() {
    let menu = MultiUsersSelect::builder("reviewers")
        .with_initial_users(["U1", "U2"])
        .build()
        .expect("valid menu");
    assert_eq!(
        menu.to_value().expect("serialisable").get("initial_users"),
        Some(&json!(["U1", "U2"]))
    );
}

#[rstest]
fn conversations_select_emits_filter_and_flags() {
    let filter = ConversationFilter::builder()
        .include(ConversationKind::Public)
        .exclude_bot_users(true)
        .build()
        .expect("valid filter");
    let menu = ConversationsSelect::builder("target")
        .with_filter(filter)
        .with_default_to_current_conversation(true)
        .with_response_url_enabled(true)
        .build()
        .expect("valid menu");
    let json = menu.to_value().expect("serialisable");
    assert_eq!(json.get("default_to_current_conversation"), Some(&json!(true)));
    assert_eq!(json.get("response_url_enabled"), Some(&json!(true)));
    assert_eq!(
        json.get("filter"),
        Some(&json!({"include": ["public"], "exclude_bot_users": true}))
    );
}

#[rstest]
fn multi_channels_select_omits_unset_fields() {
    let menu = MultiChannelsSelect::builder("channels")
        .build()
        .expect("valid menu");
    assert_eq!(
        menu.to_value().expect("serialisable"),
        json!({"type": "multi_channels_select", "action_id": "channels"})
    );
}
