//! Image element for context blocks and section accessories.

use crate::{
    error::ValidationResult,
    objects::SlackFile,
    render::Render,
    validation::{limits, rules},
};
use serde::Serialize;

/// Where an image is loaded from.
///
/// Serialises as either an `image_url` or a `slack_file` key, so exactly one
/// of the two is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ImageSource {
    /// A publicly hosted image.
    #[serde(rename = "image_url")]
    Url(String),
    /// An image uploaded to the workspace.
    #[serde(rename = "slack_file")]
    File(SlackFile),
}

impl ImageSource {
    /// Creates a source from a public URL.
    ///
    /// # Errors
    ///
    /// Returns a validation error for `image_url` when the URL is empty or
    /// longer than 3000 characters.
    pub fn url(url: impl Into<String>) -> ValidationResult<Self> {
        rules::bounded("image_url", url, 1, limits::URL).map(Self::Url)
    }
}

impl From<SlackFile> for ImageSource {
    fn from(file: SlackFile) -> Self {
        Self::File(file)
    }
}

/// A small inline image.
///
/// # Examples
///
/// ```
/// use blockkit::elements::ImageElement;
/// use blockkit::render::Render;
/// use serde_json::json;
///
/// let image = ImageElement::from_url("https://example.com/cat.png", "A cat")
///     .expect("valid image");
/// assert_eq!(
///     image.to_value().expect("serialisable"),
///     json!({
///         "type": "image",
///         "image_url": "https://example.com/cat.png",
///         "alt_text": "A cat"
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "image")]
pub struct ImageElement {
    #[serde(flatten)]
    source: ImageSource,
    alt_text: String,
}

impl ImageElement {
    /// Creates an image element from any source.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the alt text is empty or longer than
    /// 2000 characters.
    pub fn new(source: ImageSource, alt_text: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            source,
            alt_text: rules::bounded("alt_text", alt_text, 1, limits::IMAGE_ALT_TEXT)?,
        })
    }

    /// Creates an image element from a public URL.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the URL or alt text is invalid.
    pub fn from_url(url: impl Into<String>, alt_text: impl Into<String>) -> ValidationResult<Self> {
        Self::new(ImageSource::url(url)?, alt_text)
    }

    /// Returns the image source.
    #[must_use]
    pub const fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Returns the alt text.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

impl Render for ImageElement {}
