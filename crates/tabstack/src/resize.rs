//! Reacting to viewport size changes.
//!
//! In tab-row layout the container reserves enough height for its tallest
//! page, so switching pages doesn't move whatever follows the container. The
//! reservation is dropped when it would take more than `max_height_rate` of
//! the viewport. Accordion layout never reserves height.

use tabstack_host::{Browser, Dom};

use crate::instance::Instance;
use crate::layout::{self, LayoutMode};
use crate::update::update;

/// Height the container needs to show any page without shifting.
///
/// Bar heights, plus the larger of each bar's adjoining margin and the pages'
/// facing margins, plus the tallest page. Margins are truncated to whole
/// pixels.
pub fn required_height<D: Dom>(dom: &D, instance: &Instance<D::Node>) -> f64 {
    let [top, bottom] = &instance.bars;
    let mut gap_above = dom.computed_style(top.list()).margin_bottom.trunc();
    let mut gap_below = dom.computed_style(bottom.list()).margin_top.trunc();
    let mut tallest: f64 = 0.0;

    for page in &instance.pages {
        let style = dom.computed_style(page);
        gap_above = gap_above.max(style.margin_top.trunc());
        gap_below = gap_below.max(style.margin_bottom.trunc());
        tallest = tallest.max(dom.bounding_rect(page).height());
    }

    dom.offset_height(top.list())
        + dom.offset_height(bottom.list())
        + gap_above
        + gap_below
        + tallest
}

/// The minimum height to reserve, if any.
///
/// ```
/// use tabstack::resize::reserved_height;
///
/// assert_eq!(reserved_height(400.0, 1000.0, 0.8), Some(400.0));
/// assert_eq!(reserved_height(800.0, 1000.0, 0.8), None);
/// ```
pub fn reserved_height(required: f64, viewport_height: f64, max_height_rate: f64) -> Option<f64> {
    (required < viewport_height * max_height_rate).then_some(required)
}

/// Re-evaluate one instance after a resize.
pub(crate) fn react<H: Dom + Browser>(host: &mut H, instance: &mut Instance<H::Node>) {
    if layout::detect(&*host, instance) == LayoutMode::Accordion {
        host.set_min_height(&instance.container, None);
        return;
    }

    let required = required_height(&*host, instance);
    let reserved = reserved_height(
        required,
        host.viewport_height(),
        instance.config.max_height_rate,
    );
    tracing::debug!(required, ?reserved, "Reserving container height");
    host.set_min_height(&instance.container, reserved);

    if instance.selection.is_none() {
        update(host, instance, Some(0));
    }
}
