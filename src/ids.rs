//! Identifier newtypes for blocks and interactive elements.
//!
//! Both identifiers are bounded strings echoed back by the platform in
//! interaction payloads. A block identifier is generated from a random UUID
//! when the caller does not supply one.

use crate::{
    error::ValidationResult,
    validation::{limits, rules},
};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identifier of a block within a message or view.
///
/// # Examples
///
/// ```
/// use blockkit::ids::BlockId;
///
/// let first = BlockId::generate();
/// let second = BlockId::generate();
/// assert_ne!(first, second);
/// assert_eq!(BlockId::new("summary").expect("valid id").as_str(), "summary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Creates a block identifier from a caller-supplied value.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `block_id` when the value is empty or
    /// longer than 255 characters.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        rules::bounded("block_id", value, 1, limits::IDENTIFIER).map(Self)
    }

    /// Generates a fresh identifier from a random UUID v4.
    ///
    /// Uniqueness is probabilistic; collisions are not checked.
    #[must_use]
    pub fn generate() -> Self {
        let id = Uuid::new_v4().to_string();
        tracing::trace!(block_id = %id, "generated block id");
        Self(id)
    }

    /// Resolves an optional caller-supplied identifier, generating one when
    /// absent.
    ///
    /// # Errors
    ///
    /// See [`BlockId::new`].
    pub fn or_generate(value: Option<String>) -> ValidationResult<Self> {
        value.map_or_else(|| Ok(Self::generate()), Self::new)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Note: like [`BlockId::generate`], each call yields a new random
/// identifier.
impl Default for BlockId {
    fn default() -> Self {
        Self::generate()
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier correlating an interaction event with the element that
/// produced it.
///
/// Action identifiers must be unique among the elements of one block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ActionId(String);

impl ActionId {
    /// Creates an action identifier.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `action_id` when the value is empty or
    /// longer than 255 characters.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        rules::bounded("action_id", value, 1, limits::IDENTIFIER).map(Self)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ActionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
