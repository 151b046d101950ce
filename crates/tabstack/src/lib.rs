//! Tab-row / accordion state machine for heading-partitioned content.
//!
//! A container's direct children are split into pages at each heading of the
//! same level as its first heading. Two identical navigation bars (one above
//! the pages, one below) link to those pages, and exactly one page is
//! current, or none in accordion layout.
//!
//! # Architecture
//!
//! Construction runs once per container:
//!
//! 1. **Extraction** ([`extract`]): wraps the content between headings into
//!    page elements and generates per-page ids.
//! 2. **Bars** ([`bar`]): builds two `ul` navigation lists from the headings.
//!
//! After that, everything is event-driven through [`Stack`]:
//!
//! - clicks, fragment changes and viewport resizes enter via
//!   [`Stack::on_click`], [`Stack::on_hash_change`] and [`Stack::on_resize`];
//! - work that must wait for layout to settle is queued and executed by
//!   [`Stack::run_due`] when the host wakes the stack.
//!
//! The layout mode ([`LayoutMode`]) is never stored. It is read from the
//! computed `flex-direction` of the top bar every time it matters, because
//! media queries can flip it without any event reaching the stack.
//!
//! # Example
//!
//! ```ignore
//! use tabstack::Stack;
//! use tabstack_config::StackConfig;
//!
//! let mut stack = Stack::initialize(host, &containers, StackConfig::default());
//! for (anchor, node) in stack.anchors() {
//!     // attach a click listener that calls stack.on_click(anchor)
//! }
//! ```

pub mod bar;
pub mod extract;
mod instance;
pub mod layout;
pub mod resize;
pub mod resolve;
mod stack;
mod tasks;
#[cfg(test)]
mod testing;
mod token;
mod update;

pub use bar::Bar;
pub use extract::Heading;
pub use instance::{AnchorRef, BarPosition, Instance, InstanceId, Selection};
pub use layout::LayoutMode;
pub use stack::{SETTLE_DELAY, Stack};
