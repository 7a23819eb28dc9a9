//! Individual validation rule implementations.
//!
//! Each rule is a pure function that checks one aspect of a field. Rules
//! return `Ok(())` (or the accepted value) on success and a
//! [`ValidationError`] naming the field on failure. Lengths are counted in
//! characters, not bytes, matching how the platform counts them.

use crate::error::{Constraint, ValidationError, ValidationResult};

/// Builds a rejection for `field` and records it at debug level.
pub fn reject(field: &str, constraint: Constraint) -> ValidationError {
    tracing::debug!(field, %constraint, "rejected block kit field");
    ValidationError::new(field, constraint)
}

/// Validates that `value` has between `min` and `max` characters.
///
/// # Errors
///
/// Returns [`Constraint::TooShort`] or [`Constraint::TooLong`] when the
/// character count falls outside the bounds.
///
/// # Examples
///
/// ```
/// use blockkit::validation::rules::check_length;
///
/// assert!(check_length("value", "ok", 1, 75).is_ok());
/// assert!(check_length("value", "", 1, 75).is_err());
/// ```
pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> ValidationResult<()> {
    let actual = value.chars().count();
    if actual < min {
        return Err(reject(field, Constraint::TooShort { min, actual }));
    }
    if actual > max {
        return Err(reject(field, Constraint::TooLong { max, actual }));
    }
    Ok(())
}

/// Validates and takes ownership of a bounded string.
///
/// # Errors
///
/// Returns the error produced by [`check_length`].
pub fn bounded(
    field: &str,
    value: impl Into<String>,
    min: usize,
    max: usize,
) -> ValidationResult<String> {
    let owned = value.into();
    check_length(field, &owned, min, max)?;
    Ok(owned)
}

/// Validates an optional bounded string; `None` is always accepted.
///
/// # Errors
///
/// Returns the error produced by [`check_length`] for a present value.
pub fn bounded_opt(
    field: &str,
    value: Option<String>,
    min: usize,
    max: usize,
) -> ValidationResult<Option<String>> {
    value.map(|inner| bounded(field, inner, min, max)).transpose()
}

/// Validates the number of items in a collection field.
///
/// # Errors
///
/// Returns [`Constraint::TooFew`] or [`Constraint::TooMany`] when the count
/// falls outside the bounds.
pub fn check_count(field: &str, actual: usize, min: usize, max: usize) -> ValidationResult<()> {
    if actual < min {
        return Err(reject(field, Constraint::TooFew { min, actual }));
    }
    if actual > max {
        return Err(reject(field, Constraint::TooMany { max, actual }));
    }
    Ok(())
}

/// Rejects `field` when it is present alongside `other`.
///
/// # Errors
///
/// Returns [`Constraint::MutuallyExclusive`] when both are present.
pub fn check_exclusive(
    field: &str,
    present: bool,
    other: &'static str,
    other_present: bool,
) -> ValidationResult<()> {
    if present && other_present {
        return Err(reject(field, Constraint::MutuallyExclusive { other }));
    }
    Ok(())
}

/// Requires at least one of a set of alternative fields.
///
/// `field` names the value being built and is reported as the offender.
///
/// # Errors
///
/// Returns [`Constraint::MissingOneOf`] when none of the alternatives is
/// present.
pub fn require_any(
    field: &str,
    fields: &'static [&'static str],
    present: &[bool],
) -> ValidationResult<()> {
    if present.iter().any(|flag| *flag) {
        return Ok(());
    }
    Err(reject(field, Constraint::MissingOneOf { fields }))
}

/// Requires that `value` is one of the `allowed` wire values.
///
/// # Errors
///
/// Returns [`Constraint::NotAllowed`] when the value is not listed.
pub fn check_allowed(
    field: &str,
    value: &str,
    allowed: &'static [&'static str],
) -> ValidationResult<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(reject(
        field,
        Constraint::NotAllowed {
            value: value.to_owned(),
            allowed,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 1, 3, Some(Constraint::TooShort { min: 1, actual: 0 }))]
    #[case("a", 1, 3, None)]
    #[case("abc", 1, 3, None)]
    #[case("abcd", 1, 3, Some(Constraint::TooLong { max: 3, actual: 4 }))]
    fn check_length_bounds(
        #[case] value: &str,
        #[case] min: usize,
        #[case] max: usize,
        #[case] expected: Option<Constraint>,
    ) {
        let result = check_length("field", value, min, max);
        assert_eq!(result.err().map(|e| e.constraint().clone()), expected);
    }

    #[rstest]
    fn check_length_counts_characters_not_bytes() {
        // Four characters, twelve bytes.
        assert!(check_length("field", "日本語字", 1, 4).is_ok());
    }

    #[rstest]
    fn bounded_opt_accepts_none() {
        assert_eq!(bounded_opt("field", None, 1, 3), Ok(None));
    }

    #[rstest]
    #[case(0, 1, 5, false)]
    #[case(1, 1, 5, true)]
    #[case(5, 1, 5, true)]
    #[case(6, 1, 5, false)]
    fn check_count_bounds(
        #[case] actual: usize,
        #[case] min: usize,
        #[case] max: usize,
        #[case] expected_ok: bool,
    ) {
        assert_eq!(check_count("items", actual, min, max).is_ok(), expected_ok);
    }

    #[rstest]
    fn check_exclusive_rejects_both() {
        let error = check_exclusive("options", true, "option_groups", true)
            .expect_err("both present should fail");
        assert_eq!(error.field(), "options");
        assert_eq!(
            error.constraint(),
            &Constraint::MutuallyExclusive {
                other: "option_groups"
            }
        );
    }

    #[rstest]
    #[case(&[false, false], false)]
    #[case(&[true, false], true)]
    #[case(&[false, true], true)]
    fn require_any_needs_one(#[case] present: &[bool], #[case] expected_ok: bool) {
        let result = require_any("section", &["text", "fields"], present);
        assert_eq!(result.is_ok(), expected_ok);
    }

    #[rstest]
    fn check_allowed_lists_alternatives_in_message() {
        let error = check_allowed("style", "loud", &["primary", "danger"])
            .expect_err("unknown value should fail");
        assert_eq!(
            error.to_string(),
            "invalid `style`: 'loud' is not one of [primary, danger]"
        );
    }
}
