//! Host contracts for tabstack.
//!
//! The core never touches a browser directly. Everything it needs from the
//! page is expressed by two traits:
//!
//! - [`Dom`] - tree mutation and queries, computed style, geometry, scrolling
//! - [`Browser`] - location fragment, history, viewport, clock, and timer wake-ups
//!
//! `tabstack-web` implements both over `web-sys`. [`MockHost`] (behind the
//! `mock` feature) implements both in memory for tests.
//!
//! # Example
//!
//! ```ignore
//! use tabstack_host::{Dom, MockHost};
//!
//! let mut host = MockHost::new();
//! let body = host.body();
//! let h2 = host.create_element("h2");
//! host.append_child(&body, &h2);
//! assert_eq!(host.children(&body), vec![h2]);
//! ```

mod browser;
mod dom;
mod geometry;
#[cfg(feature = "mock")]
mod mock;

pub use browser::Browser;
pub use dom::Dom;
pub use geometry::{ComputedStyle, FlexDirection, PointerEvents, Rect};
#[cfg(feature = "mock")]
pub use mock::{MockHost, MockNode, StyleRule, StyleSelector};
