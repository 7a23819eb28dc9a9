//! Builder shared by select menus and date/time pickers.

use crate::{
    error::ValidationResult,
    ids::ActionId,
    objects::{ConfirmationDialog, Text, TextLike, TextSlot},
    render::is_false,
    validation::limits,
};
use serde::Serialize;

const PLACEHOLDER: TextSlot = TextSlot::plain("placeholder", limits::PLACEHOLDER);

/// Fields shared by menus and pickers, flattened into their output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(super) struct Common {
    action_id: ActionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmationDialog>,
    #[serde(skip_serializing_if = "is_false")]
    focus_on_load: bool,
}

/// Builder for select menus and pickers.
///
/// `D` carries the fields specific to one kind of element; each element
/// type adds its own setters and a `build` method on its instantiation.
///
/// # Examples
///
/// ```
/// use blockkit::elements::StaticSelect;
/// use blockkit::objects::OptionObject;
///
/// let small = OptionObject::new("Small", "s").expect("valid option");
/// let large = OptionObject::new("Large", "l").expect("valid option");
/// let menu = StaticSelect::builder("size")
///     .with_placeholder("Pick a size")
///     .with_options([small.clone(), large])
///     .with_initial_option(small)
///     .build()
///     .expect("valid menu");
/// assert_eq!(menu.options().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder<D> {
    action_id: String,
    placeholder: Option<TextLike>,
    confirm: Option<ConfirmationDialog>,
    focus_on_load: bool,
    pub(super) draft: D,
}

impl<D: Default> ElementBuilder<D> {
    pub(super) fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            confirm: None,
            focus_on_load: false,
            draft: D::default(),
        }
    }
}

impl<D> ElementBuilder<D> {
    /// Sets the plain-text placeholder shown before a value is chosen.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<TextLike>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Asks for confirmation after a value is chosen.
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmationDialog) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Focuses the element when the view opens.
    #[must_use]
    pub const fn with_focus_on_load(mut self, focus: bool) -> Self {
        self.focus_on_load = focus;
        self
    }

    /// Validates the shared fields and hands back the element-specific ones.
    pub(super) fn finish(self) -> ValidationResult<(Common, D)> {
        let common = Common {
            action_id: ActionId::new(self.action_id)?,
            placeholder: PLACEHOLDER.resolve_opt(self.placeholder)?,
            confirm: self.confirm,
            focus_on_load: self.focus_on_load,
        };
        Ok((common, self.draft))
    }
}
