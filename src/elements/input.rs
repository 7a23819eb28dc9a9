//! Text-entry elements: plain text, email, URL and number inputs.

use crate::{
    error::{Constraint, ValidationResult},
    ids::ActionId,
    objects::{DispatchActionConfig, Text, TextLike, TextSlot},
    render::{Render, is_false},
    validation::{limits, rules},
};
use serde::Serialize;

const PLACEHOLDER: TextSlot = TextSlot::plain("placeholder", limits::PLACEHOLDER);

/// Fields shared by every text-entry element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Entry {
    action_id: ActionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    dispatch_action_config: Option<DispatchActionConfig>,
    #[serde(skip_serializing_if = "is_false")]
    focus_on_load: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
}

/// Builder for text-entry elements.
///
/// `D` carries the fields specific to one kind of input.
#[derive(Debug, Clone)]
pub struct EntryBuilder<D> {
    action_id: String,
    dispatch_action_config: Option<DispatchActionConfig>,
    focus_on_load: bool,
    placeholder: Option<TextLike>,
    draft: D,
}

impl<D> EntryBuilder<D> {
    const fn new(action_id: String, draft: D) -> Self {
        Self {
            action_id,
            dispatch_action_config: None,
            focus_on_load: false,
            placeholder: None,
            draft,
        }
    }

    /// Makes the input dispatch `block_actions` payloads on the given
    /// triggers.
    #[must_use]
    pub fn with_dispatch_action_config(mut self, config: DispatchActionConfig) -> Self {
        self.dispatch_action_config = Some(config);
        self
    }

    /// Focuses the input when the view opens.
    #[must_use]
    pub const fn with_focus_on_load(mut self, focus: bool) -> Self {
        self.focus_on_load = focus;
        self
    }

    /// Sets the plain-text placeholder shown in the empty input.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<TextLike>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    fn finish(self) -> ValidationResult<(Entry, D)> {
        let entry = Entry {
            action_id: ActionId::new(self.action_id)?,
            dispatch_action_config: self.dispatch_action_config,
            focus_on_load: self.focus_on_load,
            placeholder: PLACEHOLDER.resolve_opt(self.placeholder)?,
        };
        Ok((entry, self.draft))
    }
}

/// Fields collected for a [`PlainTextInput`].
#[derive(Debug, Clone, Default)]
pub struct PlainTextInputDraft {
    initial_value: Option<String>,
    multiline: bool,
    min_length: Option<u32>,
    max_length: Option<u32>,
}

/// A free-form text field, optionally multi-line.
///
/// # Examples
///
/// ```
/// use blockkit::elements::PlainTextInput;
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let input = PlainTextInput::builder("feedback")
///     .with_multiline(true)
///     .with_max_length(500)
///     .build()
///     .expect("valid input");
/// assert_eq!(
///     input.to_value().expect("serialisable"),
///     json!({
///         "type": "plain_text_input",
///         "action_id": "feedback",
///         "multiline": true,
///         "max_length": 500
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "plain_text_input")]
pub struct PlainTextInput {
    #[serde(flatten)]
    entry: Entry,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_value: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<u32>,
}

impl PlainTextInput {
    /// Starts building a plain-text input.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> EntryBuilder<PlainTextInputDraft> {
        EntryBuilder::new(action_id.into(), PlainTextInputDraft::default())
    }

    /// Returns `true` if the input spans several lines.
    #[must_use]
    pub const fn multiline(&self) -> bool {
        self.multiline
    }
}

impl Render for PlainTextInput {}

impl EntryBuilder<PlainTextInputDraft> {
    /// Sets the text the input starts with.
    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.draft.initial_value = Some(value.into());
        self
    }

    /// Renders the input as a multi-line text area.
    #[must_use]
    pub const fn with_multiline(mut self, multiline: bool) -> Self {
        self.draft.multiline = multiline;
        self
    }

    /// Sets the minimum number of characters a submission must contain.
    #[must_use]
    pub const fn with_min_length(mut self, length: u32) -> Self {
        self.draft.min_length = Some(length);
        self
    }

    /// Sets the maximum number of characters a submission may contain.
    #[must_use]
    pub const fn with_max_length(mut self, length: u32) -> Self {
        self.draft.max_length = Some(length);
        self
    }

    /// Validates the fields and builds the input.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, when `min_length` exceeds 3000, when `max_length` is not
    /// between 1 and 3000, when `min_length` exceeds `max_length`, or when
    /// the initial value is longer than the permitted maximum.
    pub fn build(self) -> ValidationResult<PlainTextInput> {
        let (entry, draft) = self.finish()?;
        let ceiling = u32::try_from(limits::PLAIN_TEXT_INPUT).unwrap_or(u32::MAX);
        if let Some(min) = draft.min_length
            && min > ceiling
        {
            return Err(rules::reject(
                "min_length",
                Constraint::out_of_range(format!("{min} exceeds {ceiling}")),
            ));
        }
        if let Some(max) = draft.max_length
            && !(1..=ceiling).contains(&max)
        {
            return Err(rules::reject(
                "max_length",
                Constraint::out_of_range(format!("{max} is not between 1 and {ceiling}")),
            ));
        }
        if let (Some(min), Some(max)) = (draft.min_length, draft.max_length)
            && min > max
        {
            return Err(rules::reject(
                "min_length",
                Constraint::out_of_range(format!("{min} exceeds max_length {max}")),
            ));
        }
        let value_limit = draft.max_length.map_or(limits::PLAIN_TEXT_INPUT, |max| {
            usize::try_from(max).unwrap_or(limits::PLAIN_TEXT_INPUT)
        });
        Ok(PlainTextInput {
            entry,
            initial_value: rules::bounded_opt(
                "initial_value",
                draft.initial_value,
                0,
                value_limit,
            )?,
            multiline: draft.multiline,
            min_length: draft.min_length,
            max_length: draft.max_length,
        })
    }
}

/// Fields collected for an [`EmailInput`].
#[derive(Debug, Clone, Default)]
pub struct EmailInputDraft {
    initial_value: Option<String>,
}

impl EntryBuilder<EmailInputDraft> {
    /// Sets the address the input starts with.
    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.draft.initial_value = Some(value.into());
        self
    }

    /// Validates the fields and builds the input.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, or when the initial value is not an email address.
    pub fn build(self) -> ValidationResult<EmailInput> {
        let (entry, draft) = self.finish()?;
        let initial_value =
            check_format(draft.initial_value, looks_like_email, "an email address")?;
        Ok(EmailInput {
            entry,
            initial_value,
        })
    }
}

/// Fields collected for a [`UrlInput`].
#[derive(Debug, Clone, Default)]
pub struct UrlInputDraft {
    initial_value: Option<String>,
}

impl EntryBuilder<UrlInputDraft> {
    /// Sets the URL the input starts with.
    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.draft.initial_value = Some(value.into());
        self
    }

    /// Validates the fields and builds the input.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, or when the initial value is not an absolute URL.
    pub fn build(self) -> ValidationResult<UrlInput> {
        let (entry, draft) = self.finish()?;
        let initial_value = check_format(draft.initial_value, looks_like_url, "an absolute URL")?;
        Ok(UrlInput {
            entry,
            initial_value,
        })
    }
}

fn check_format(
    value: Option<String>,
    check: fn(&str) -> bool,
    expected: &'static str,
) -> ValidationResult<Option<String>> {
    match value {
        Some(text) if !check(&text) => Err(rules::reject(
            "initial_value",
            Constraint::InvalidFormat {
                value: text,
                expected,
            },
        )),
        other => Ok(other),
    }
}

fn looks_like_email(value: &str) -> bool {
    value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
}

fn looks_like_url(value: &str) -> bool {
    value
        .split_once("://")
        .is_some_and(|(scheme, rest)| !scheme.is_empty() && !rest.is_empty())
}

/// An input that accepts an email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "email_text_input")]
pub struct EmailInput {
    #[serde(flatten)]
    entry: Entry,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_value: Option<String>,
}

impl EmailInput {
    /// Starts building an email input.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> EntryBuilder<EmailInputDraft> {
        EntryBuilder::new(action_id.into(), EmailInputDraft::default())
    }
}

impl Render for EmailInput {}

/// An input that accepts a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "url_text_input")]
pub struct UrlInput {
    #[serde(flatten)]
    entry: Entry,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_value: Option<String>,
}

impl UrlInput {
    /// Starts building a URL input.
    #[must_use]
    pub fn builder(action_id: impl Into<String>) -> EntryBuilder<UrlInputDraft> {
        EntryBuilder::new(action_id.into(), UrlInputDraft::default())
    }
}

impl Render for UrlInput {}

/// Fields collected for a [`NumberInput`].
#[derive(Debug, Clone, Default)]
pub struct NumberInputDraft {
    is_decimal_allowed: bool,
    initial_value: Option<f64>,
    min_value: Option<f64>,
    max_value: Option<f64>,
}

/// An input that accepts whole or decimal numbers.
///
/// Numeric bounds and the initial value are emitted as strings, as the
/// platform expects.
///
/// # Examples
///
/// ```
/// use blockkit::elements::NumberInput;
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let input = NumberInput::builder("guests", false)
///     .with_min_value(1.0)
///     .with_max_value(8.0)
///     .with_initial_value(2.0)
///     .build()
///     .expect("valid input");
/// let json = input.to_value().expect("serialisable");
/// assert_eq!(json["is_decimal_allowed"], json!(false));
/// assert_eq!(json["min_value"], "1");
/// assert_eq!(json["initial_value"], "2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "number_input")]
pub struct NumberInput {
    #[serde(flatten)]
    entry: Entry,
    is_decimal_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_value: Option<String>,
}

impl NumberInput {
    /// Starts building a number input.
    #[must_use]
    pub fn builder(
        action_id: impl Into<String>,
        is_decimal_allowed: bool,
    ) -> EntryBuilder<NumberInputDraft> {
        EntryBuilder::new(
            action_id.into(),
            NumberInputDraft {
                is_decimal_allowed,
                ..NumberInputDraft::default()
            },
        )
    }

    /// Returns `true` if decimal values are accepted.
    #[must_use]
    pub const fn is_decimal_allowed(&self) -> bool {
        self.is_decimal_allowed
    }
}

impl Render for NumberInput {}

impl EntryBuilder<NumberInputDraft> {
    /// Sets the number the input starts with.
    #[must_use]
    pub const fn with_initial_value(mut self, value: f64) -> Self {
        self.draft.initial_value = Some(value);
        self
    }

    /// Sets the smallest accepted number.
    #[must_use]
    pub const fn with_min_value(mut self, value: f64) -> Self {
        self.draft.min_value = Some(value);
        self
    }

    /// Sets the largest accepted number.
    #[must_use]
    pub const fn with_max_value(mut self, value: f64) -> Self {
        self.draft.max_value = Some(value);
        self
    }

    /// Validates the fields and builds the input.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the action identifier or placeholder
    /// is invalid, when a value is not finite, when a value has a fraction
    /// but decimals are disallowed, when `min_value` exceeds `max_value`,
    /// or when the initial value lies outside the bounds.
    pub fn build(self) -> ValidationResult<NumberInput> {
        let (entry, draft) = self.finish()?;
        let decimals = draft.is_decimal_allowed;
        let initial = check_number("initial_value", draft.initial_value, decimals)?;
        let min = check_number("min_value", draft.min_value, decimals)?;
        let max = check_number("max_value", draft.max_value, decimals)?;

        if let (Some(low), Some(high)) = (min, max)
            && low > high
        {
            return Err(rules::reject(
                "min_value",
                Constraint::out_of_range(format!("{low} exceeds max_value {high}")),
            ));
        }
        if let Some(value) = initial
            && (min.is_some_and(|low| value < low) || max.is_some_and(|high| value > high))
        {
            return Err(rules::reject(
                "initial_value",
                Constraint::out_of_range(format!("{value} is outside min_value..=max_value")),
            ));
        }

        Ok(NumberInput {
            entry,
            is_decimal_allowed: decimals,
            initial_value: initial.map(|value| value.to_string()),
            min_value: min.map(|value| value.to_string()),
            max_value: max.map(|value| value.to_string()),
        })
    }
}

fn check_number(
    field: &str,
    value: Option<f64>,
    decimals: bool,
) -> ValidationResult<Option<f64>> {
    let Some(number) = value else {
        return Ok(None);
    };
    if !number.is_finite() {
        return Err(rules::reject(
            field,
            Constraint::out_of_range(format!("{number} is not a finite number")),
        ));
    }
    if !decimals && number.fract().abs() > 0.0 {
        return Err(rules::reject(
            field,
            Constraint::NotPermitted {
                kind: "decimal",
                context: "number inputs that disallow decimals",
            },
        ));
    }
    Ok(Some(number))
}
