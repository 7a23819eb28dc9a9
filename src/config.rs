//! Surface-level limits applied when messages and views are built.
//!
//! Element and block limits are fixed by the platform and live in
//! [`crate::validation::limits`]. Surface limits differ between messages
//! and views, and callers occasionally need to relax them (for example when
//! assembling a draft that is filled in later), so they are configurable.

use crate::validation::limits;

/// Limits checked by the surface builders.
///
/// # Examples
///
/// ```
/// use blockkit::config::SurfaceLimits;
///
/// let limits = SurfaceLimits::default();
/// assert_eq!(limits.max_blocks, 50);
/// assert!(limits.require_blocks);
///
/// let views = SurfaceLimits::for_views();
/// assert_eq!(views.max_blocks, 100);
///
/// let lenient = SurfaceLimits::lenient();
/// assert!(!lenient.require_blocks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLimits {
    /// Maximum number of top-level blocks.
    pub max_blocks: usize,
    /// Maximum length of the top-level message text, in characters.
    pub max_text_length: usize,
    /// Whether at least one block is required.
    pub require_blocks: bool,
}

impl Default for SurfaceLimits {
    fn default() -> Self {
        Self::for_messages()
    }
}

impl SurfaceLimits {
    /// Limits for messages, attachments and interaction responses.
    #[must_use]
    pub const fn for_messages() -> Self {
        Self {
            max_blocks: limits::MESSAGE_BLOCKS,
            max_text_length: limits::MESSAGE_TEXT,
            require_blocks: true,
        }
    }

    /// Limits for modal and home tab views.
    #[must_use]
    pub const fn for_views() -> Self {
        Self {
            max_blocks: limits::VIEW_BLOCKS,
            ..Self::for_messages()
        }
    }

    /// Limits that allow an empty block list.
    ///
    /// Useful for drafts and tests; the platform rejects empty surfaces.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            require_blocks: false,
            ..Self::for_views()
        }
    }

    /// Returns the minimum number of blocks these limits accept.
    #[must_use]
    pub fn min_blocks(&self) -> usize {
        usize::from(self.require_blocks)
    }
}
