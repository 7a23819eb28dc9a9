//! Behavioural tests for section block construction and rendering.

use blockkit::{
    blocks::{SectionBlock, SectionBlockBuilder},
    elements::Button,
    error::{Constraint, ValidationError},
    render::Render,
};
use eyre::{Result, eyre};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

#[derive(Default)]
struct SectionWorld {
    builder: Option<SectionBlockBuilder>,
    block: Option<SectionBlock>,
    rendered: Option<Value>,
    last_error: Option<ValidationError>,
}

impl SectionWorld {
    fn rendered(&self) -> Result<&Value> {
        self.rendered
            .as_ref()
            .ok_or_else(|| eyre!("expected a rendered section"))
    }

    fn error(&self) -> Result<&ValidationError> {
        self.last_error
            .as_ref()
            .ok_or_else(|| eyre!("expected a validation error"))
    }
}

#[fixture]
fn world() -> SectionWorld {
    SectionWorld::default()
}

#[given("a section builder with the text \"Hello, world!\"")]
fn hello_world_builder(world: &mut SectionWorld) {
    world.builder = Some(SectionBlock::builder().with_text("Hello, world!"));
}

#[given("a section builder with the text \"Choose an action\"")]
fn choose_action_builder(world: &mut SectionWorld) {
    world.builder = Some(SectionBlock::builder().with_text("Choose an action"));
}

#[given("an empty section builder")]
fn empty_builder(world: &mut SectionWorld) {
    world.builder = Some(SectionBlock::builder());
}

#[given("a section builder with 3001 characters of text")]
fn over_length_builder(world: &mut SectionWorld) {
    world.builder = Some(SectionBlock::builder().with_text("x".repeat(3001)));
}

#[given("the section has a button accessory")]
fn button_accessory(world: &mut SectionWorld) -> Result<()> {
    let builder = world
        .builder
        .take()
        .ok_or_else(|| eyre!("expected a section builder"))?;
    let button = Button::builder("Run", "run").build()?;
    world.builder = Some(builder.with_accessory(button));
    Ok(())
}

#[when("the section is built and rendered")]
fn build_and_render(world: &mut SectionWorld) -> Result<()> {
    let builder = world
        .builder
        .take()
        .ok_or_else(|| eyre!("expected a section builder"))?;
    match builder.build() {
        Ok(block) => {
            world.rendered = Some(block.to_value()?);
            world.block = Some(block);
            world.last_error = None;
        }
        Err(error) => {
            world.block = None;
            world.rendered = None;
            world.last_error = Some(error);
        }
    }
    Ok(())
}

#[then("the rendered section has mrkdwn text \"Hello, world!\"")]
fn hello_world_text(world: &SectionWorld) -> Result<()> {
    assert_eq!(
        world.rendered()?.get("text"),
        Some(&json!({"type": "mrkdwn", "text": "Hello, world!"}))
    );
    Ok(())
}

#[then("the rendered section has mrkdwn text \"Choose an action\"")]
fn choose_action_text(world: &SectionWorld) -> Result<()> {
    assert_eq!(
        world.rendered()?.get("text"),
        Some(&json!({"type": "mrkdwn", "text": "Choose an action"}))
    );
    Ok(())
}

#[then("the rendered section has a generated block id")]
fn generated_block_id(world: &SectionWorld) -> Result<()> {
    let block = world
        .block
        .as_ref()
        .ok_or_else(|| eyre!("expected a built section"))?;
    let rendered_id = world
        .rendered()?
        .get("block_id")
        .and_then(Value::as_str)
        .ok_or_else(|| eyre!("expected a block id"))?;
    assert_eq!(rendered_id, block.block_id().as_str());
    assert_eq!(rendered_id.len(), 36, "block id should be a hyphenated UUID");
    Ok(())
}

#[then("the rendered section has a button accessory")]
fn has_button_accessory(world: &SectionWorld) -> Result<()> {
    let accessory = world
        .rendered()?
        .get("accessory")
        .ok_or_else(|| eyre!("expected an accessory"))?;
    assert_eq!(accessory.get("type"), Some(&json!("button")));
    assert_eq!(accessory.get("action_id"), Some(&json!("run")));
    Ok(())
}

#[then("the section is rejected because content is missing")]
fn rejected_missing_content(world: &SectionWorld) -> Result<()> {
    let error = world.error()?;
    assert!(matches!(
        error.constraint(),
        Constraint::MissingOneOf { fields } if fields.contains(&"accessory")
    ));
    Ok(())
}

#[then("the section is rejected because the text is too long")]
fn rejected_too_long(world: &SectionWorld) -> Result<()> {
    let error = world.error()?;
    assert_eq!(error.field(), "text");
    assert_eq!(
        error.constraint(),
        &Constraint::TooLong {
            max: 3000,
            actual: 3001
        }
    );
    Ok(())
}

#[scenario(
    path = "tests/features/section_block.feature",
    name = "Text-only section renders as mrkdwn"
)]
fn text_only_section(world: SectionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/section_block.feature",
    name = "Section with text and accessory renders both"
)]
fn section_with_accessory(world: SectionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/section_block.feature",
    name = "Section without text or accessory is rejected"
)]
fn empty_section(world: SectionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/section_block.feature",
    name = "Over-length section text is rejected"
)]
fn over_length_section(world: SectionWorld) {
    let _ = world;
}
