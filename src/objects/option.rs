//! Selectable options and option groups.

use super::text::{Text, TextLike, TextSlot, TextType};
use crate::{
    error::{Constraint, ValidationResult},
    render::Render,
    validation::{limits, rules},
};
use serde::Serialize;

const OPTION_TEXT: TextSlot = TextSlot::prefer_plain("text", limits::OPTION_TEXT);
const OPTION_DESCRIPTION: TextSlot = TextSlot::plain("description", limits::OPTION_TEXT);
const GROUP_LABEL: TextSlot = TextSlot::plain("label", limits::OPTION_GROUP_LABEL);

/// A single selectable item in a menu, checkbox group, radio button group
/// or overflow menu.
///
/// Raw strings passed as `text` become plain text, which every container
/// accepts. Pass a `mrkdwn` [`Text`] explicitly for checkbox and radio
/// button groups that should render formatting.
///
/// # Examples
///
/// ```
/// use blockkit::objects::OptionObject;
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let option = OptionObject::new("Medium", "size-m")
///     .and_then(|option| option.with_description("Fits most"))
///     .expect("valid option");
/// assert_eq!(
///     option.to_value().expect("serialisable"),
///     json!({
///         "text": {"type": "plain_text", "text": "Medium"},
///         "value": "size-m",
///         "description": {"type": "plain_text", "text": "Fits most"}
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionObject {
    text: Text,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl OptionObject {
    /// Creates an option from its display text and underlying value.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `text` or `value` is empty or longer
    /// than 75 characters.
    pub fn new(text: impl Into<TextLike>, value: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            text: OPTION_TEXT.resolve(text.into())?,
            value: rules::bounded("value", value, 1, limits::OPTION_TEXT)?,
            description: None,
            url: None,
        })
    }

    /// Adds a plain-text description shown below the option text.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the description is empty or longer
    /// than 75 characters.
    pub fn with_description(mut self, description: impl Into<TextLike>) -> ValidationResult<Self> {
        self.description = Some(OPTION_DESCRIPTION.resolve(description.into())?);
        Ok(self)
    }

    /// Adds a URL opened when the option is clicked (overflow menus only).
    ///
    /// # Errors
    ///
    /// Returns a validation error when the URL is empty or longer than 3000
    /// characters.
    pub fn with_url(mut self, url: impl Into<String>) -> ValidationResult<Self> {
        self.url = Some(rules::bounded("url", url, 1, limits::URL)?);
        Ok(self)
    }

    /// Returns the display text.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// Returns the underlying value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Text> {
        self.description.as_ref()
    }

    /// Returns the URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl Render for OptionObject {}

/// A labelled group of options in a select menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    label: Text,
    options: Vec<OptionObject>,
}

impl OptionGroup {
    /// Creates an option group.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the label is empty or longer than 75
    /// characters, or when `options` holds fewer than 1 or more than 100
    /// items.
    pub fn new(
        label: impl Into<TextLike>,
        options: impl IntoIterator<Item = OptionObject>,
    ) -> ValidationResult<Self> {
        let label_text = GROUP_LABEL.resolve(label.into())?;
        let collected: Vec<OptionObject> = options.into_iter().collect();
        rules::check_count("options", collected.len(), 1, limits::SELECT_OPTIONS)?;
        Ok(Self {
            label: label_text,
            options: collected,
        })
    }

    /// Returns the group label.
    #[must_use]
    pub const fn label(&self) -> &Text {
        &self.label
    }

    /// Returns the grouped options.
    #[must_use]
    pub fn options(&self) -> &[OptionObject] {
        &self.options
    }

    /// Returns `true` if the group contains `option`.
    #[must_use]
    pub fn contains(&self, option: &OptionObject) -> bool {
        self.options.contains(option)
    }
}

impl Render for OptionGroup {}

/// Rejects options whose text is not plain text.
///
/// Select menus and overflow menus only render plain-text options.
pub(crate) fn require_plain_options<'a>(
    field: &str,
    context: &'static str,
    options: impl IntoIterator<Item = &'a OptionObject>,
) -> ValidationResult<()> {
    for (index, option) in options.into_iter().enumerate() {
        if option.text.kind() != TextType::Plain {
            return Err(rules::reject(
                &format!("{field}[{index}].text"),
                Constraint::NotPermitted {
                    kind: "mrkdwn",
                    context,
                },
            ));
        }
    }
    Ok(())
}

/// Requires every value in `selected` to appear in `available`.
pub(crate) fn require_members<'a>(
    field: &str,
    collection: &'static str,
    selected: impl IntoIterator<Item = &'a OptionObject>,
    mut available: impl FnMut(&OptionObject) -> bool,
) -> ValidationResult<()> {
    for option in selected {
        if !available(option) {
            return Err(rules::reject(field, Constraint::NotAMember { collection }));
        }
    }
    Ok(())
}
