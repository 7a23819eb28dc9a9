//! Error types for payload construction and rendering.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use std::fmt;
use thiserror::Error;

/// Result type for constructors that validate their input.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A field violated one of the Block Kit constraints.
///
/// Every constructor and builder in this crate returns this error when its
/// input is rejected. No partially built value is ever produced.
///
/// # Examples
///
/// ```
/// use blockkit::error::Constraint;
/// use blockkit::objects::Text;
///
/// let error = Text::markdown("").expect_err("empty text is rejected");
/// assert_eq!(error.field(), "text");
/// assert_eq!(error.constraint(), &Constraint::TooShort { min: 1, actual: 0 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid `{field}`: {constraint}")]
pub struct ValidationError {
    field: String,
    constraint: Constraint,
}

impl ValidationError {
    /// Creates a validation error for the named field.
    #[must_use]
    pub fn new(field: impl Into<String>, constraint: Constraint) -> Self {
        Self {
            field: field.into(),
            constraint,
        }
    }

    /// Returns the name of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the violated constraint.
    #[must_use]
    pub const fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// Prefixes the field path with the name of the containing field.
    ///
    /// Used when a nested value is validated on behalf of its parent, so
    /// that a bad option inside `options` reports `options[2].value`.
    #[must_use]
    pub fn within(self, parent: impl fmt::Display) -> Self {
        Self {
            field: format!("{parent}.{}", self.field),
            constraint: self.constraint,
        }
    }
}

/// The rule a field failed to satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Constraint {
    /// The string has more characters than allowed.
    #[error("length {actual} exceeds limit of {max} characters")]
    TooLong {
        /// Maximum allowed number of characters.
        max: usize,
        /// Actual number of characters.
        actual: usize,
    },

    /// The string has fewer characters than required.
    #[error("length {actual} is below minimum of {min} characters")]
    TooShort {
        /// Minimum required number of characters.
        min: usize,
        /// Actual number of characters.
        actual: usize,
    },

    /// The collection holds more items than allowed.
    #[error("{actual} items exceed limit of {max}")]
    TooMany {
        /// Maximum allowed number of items.
        max: usize,
        /// Actual number of items.
        actual: usize,
    },

    /// The collection holds fewer items than required.
    #[error("{actual} items are below minimum of {min}")]
    TooFew {
        /// Minimum required number of items.
        min: usize,
        /// Actual number of items.
        actual: usize,
    },

    /// The value is not one of the accepted values.
    #[error("'{value}' is not one of [{}]", .allowed.join(", "))]
    NotAllowed {
        /// The rejected value.
        value: String,
        /// The accepted values.
        allowed: &'static [&'static str],
    },

    /// The field cannot be combined with another field.
    #[error("cannot be combined with `{other}`")]
    MutuallyExclusive {
        /// The conflicting field.
        other: &'static str,
    },

    /// None of a set of alternative fields was provided.
    #[error("one of [{}] is required", .fields.join(", "))]
    MissingOneOf {
        /// The alternatives, at least one of which must be present.
        fields: &'static [&'static str],
    },

    /// A required field was not provided.
    #[error("is required")]
    Required,

    /// The value does not match the expected format.
    #[error("'{value}' does not match expected format {expected}")]
    InvalidFormat {
        /// The rejected value.
        value: String,
        /// Description of the expected format.
        expected: &'static str,
    },

    /// The value is outside its permitted range.
    #[error("{detail}")]
    OutOfRange {
        /// Description of the violated bound.
        detail: String,
    },

    /// The value's kind cannot be used in this position.
    #[error("`{kind}` is not permitted in {context}")]
    NotPermitted {
        /// The kind of value that was supplied.
        kind: &'static str,
        /// Where it was supplied.
        context: &'static str,
    },

    /// The value must be drawn from another collection field.
    #[error("must be one of the values in `{collection}`")]
    NotAMember {
        /// The collection that should contain the value.
        collection: &'static str,
    },
}

impl Constraint {
    /// Creates an out-of-range constraint with a description of the bound.
    #[must_use]
    pub fn out_of_range(detail: impl Into<String>) -> Self {
        Self::OutOfRange {
            detail: detail.into(),
        }
    }
}

/// Errors that can occur while rendering a payload to JSON.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The value could not be serialised.
    #[error("serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// The value did not serialise to a JSON object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}
