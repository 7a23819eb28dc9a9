//! Serialisation of payload values to Block Kit JSON.
//!
//! Every public value type implements [`Render`], which is a thin wrapper
//! over `serde_json`. Field omission is handled by the serde attributes on
//! each type: absent optional fields are skipped, never emitted as `null`.

use crate::error::RenderError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Conversion of a validated value into its wire representation.
///
/// # Examples
///
/// ```
/// use blockkit::blocks::DividerBlock;
/// use blockkit::render::Render;
///
/// let divider = DividerBlock::new()
///     .with_block_id("divider-1")
///     .expect("valid id");
/// let json = divider.to_value().expect("serialisable");
/// assert_eq!(json["type"], "divider");
/// assert_eq!(json["block_id"], "divider-1");
/// ```
pub trait Render: Serialize {
    /// Serialises the value to a JSON tree.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Serialisation`] if serde rejects the value.
    fn to_value(&self) -> Result<Value, RenderError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialises the value to a JSON object map.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NotAnObject`] if the value is not an object.
    fn to_map(&self) -> Result<Map<String, Value>, RenderError> {
        match self.to_value()? {
            Value::Object(map) => Ok(map),
            other => Err(RenderError::NotAnObject(json_kind(&other))),
        }
    }

    /// Serialises the value to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Serialisation`] if serde rejects the value.
    fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialises the value to an indented JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Serialisation`] if serde rejects the value.
    fn to_json_pretty(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Serde predicate used to omit boolean flags that are off.
#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde skip_serializing_if passes fields by reference"
)]
pub(crate) const fn is_false(flag: &bool) -> bool {
    !*flag
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Serialize)]
    struct Flagged {
        #[serde(skip_serializing_if = "is_false")]
        on: bool,
    }

    impl Render for Flagged {}

    impl Render for Vec<u8> {}

    #[rstest]
    #[case(false, "{}")]
    #[case(true, r#"{"on":true}"#)]
    fn false_flags_are_omitted(#[case] on: bool, #[case] expected: &str) {
        let json = Flagged { on }.to_json().expect("serialisable");
        assert_eq!(json, expected);
    }

    #[rstest]
    fn to_map_rejects_non_objects() {
        let error = vec![1_u8, 2].to_map().expect_err("arrays are not objects");
        assert!(matches!(error, RenderError::NotAnObject("an array")));
    }
}
