//! Layout mode detection.
//!
//! The mode is read from the live computed `flex-direction` of the top bar on
//! every call. Nothing caches it: a media query can switch the bar between row
//! and column without any event reaching the stack.

use tabstack_host::Dom;

use crate::instance::Instance;

/// How the bars are currently laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Horizontal bar; a page is always current and height is reserved.
    TabRow,
    /// Vertical bar; no page may be current and height flows naturally.
    Accordion,
}

impl LayoutMode {
    /// Returns true for [`LayoutMode::Accordion`].
    #[must_use]
    pub fn is_accordion(self) -> bool {
        self == Self::Accordion
    }
}

/// Classify `instance` from its top bar's computed style.
pub fn detect<D: Dom>(dom: &D, instance: &Instance<D::Node>) -> LayoutMode {
    if dom
        .computed_style(instance.bars[0].list())
        .flex_direction
        .is_vertical()
    {
        LayoutMode::Accordion
    } else {
        LayoutMode::TabRow
    }
}
