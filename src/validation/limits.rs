//! Published Block Kit field limits, in characters or items.

/// Any text object.
pub const TEXT: usize = 3000;
/// Section block body text.
pub const SECTION_TEXT: usize = 3000;
/// Each section block field.
pub const SECTION_FIELD: usize = 2000;
/// Number of section block fields.
pub const SECTION_FIELDS: usize = 10;
/// Header block text.
pub const HEADER_TEXT: usize = 150;
/// Input block label and hint.
pub const INPUT_LABEL: usize = 2000;
/// Image alt text and image block title.
pub const IMAGE_ALT_TEXT: usize = 2000;
/// Image URLs, button URLs and option URLs.
pub const URL: usize = 3000;
/// Block identifiers and action identifiers.
pub const IDENTIFIER: usize = 255;
/// Elements in a context block.
pub const CONTEXT_ELEMENTS: usize = 10;
/// Elements in an actions block.
pub const ACTIONS_ELEMENTS: usize = 25;

/// Option text, value and description.
pub const OPTION_TEXT: usize = 75;
/// Option group label.
pub const OPTION_GROUP_LABEL: usize = 75;
/// Options in a select menu or option group.
pub const SELECT_OPTIONS: usize = 100;
/// Options in a checkbox or radio button group.
pub const CHOICE_OPTIONS: usize = 10;
/// Minimum options in an overflow menu.
pub const OVERFLOW_OPTIONS_MIN: usize = 2;
/// Maximum options in an overflow menu.
pub const OVERFLOW_OPTIONS_MAX: usize = 5;

/// Confirmation dialog title.
pub const CONFIRM_TITLE: usize = 100;
/// Confirmation dialog body text.
pub const CONFIRM_TEXT: usize = 300;
/// Confirmation dialog button labels.
pub const CONFIRM_BUTTON: usize = 30;

/// Button text and accessibility label.
pub const BUTTON_TEXT: usize = 75;
/// Button value.
pub const BUTTON_VALUE: usize = 2000;
/// Element placeholders.
pub const PLACEHOLDER: usize = 150;
/// Plain-text input `max_length`.
pub const PLAIN_TEXT_INPUT: usize = 3000;

/// Modal title, close and submit labels.
pub const MODAL_TITLE: usize = 24;
/// View private metadata.
pub const PRIVATE_METADATA: usize = 3000;
/// View callback identifier.
pub const CALLBACK_ID: usize = 255;
/// Top-level message text.
pub const MESSAGE_TEXT: usize = 40_000;
/// Blocks in a message.
pub const MESSAGE_BLOCKS: usize = 50;
/// Blocks in a modal or home tab view.
pub const VIEW_BLOCKS: usize = 100;
