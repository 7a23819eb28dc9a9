//! References to image files hosted by the platform.

use crate::{
    error::ValidationResult,
    render::Render,
    validation::{limits, rules},
};
use serde::Serialize;

/// An image file uploaded to the platform, referenced by URL or by ID.
///
/// Exactly one of the two is ever set.
///
/// # Examples
///
/// ```
/// use blockkit::objects::SlackFile;
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let file = SlackFile::from_id("F0123456").expect("valid id");
/// assert_eq!(file.to_value().expect("serialisable"), json!({"id": "F0123456"}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SlackFile {
    /// The `url_private` or permalink of the file.
    #[serde(rename = "url")]
    Url(String),
    /// The file identifier.
    #[serde(rename = "id")]
    Id(String),
}

impl SlackFile {
    /// References a file by its private URL or permalink.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the URL is empty or longer than 3000
    /// characters.
    pub fn from_url(url: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self::Url(rules::bounded("url", url, 1, limits::URL)?))
    }

    /// References a file by its identifier.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the identifier is empty.
    pub fn from_id(id: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self::Id(rules::bounded("id", id, 1, limits::IDENTIFIER)?))
    }
}

impl Render for SlackFile {}
