//! Document tree contract.

use std::fmt::Debug;

use crate::geometry::{ComputedStyle, Rect};

/// Document tree mutation, queries, style and geometry.
///
/// Node handles are cheap to clone and compare by identity. All operations
/// are infallible: a backend that can fail logs and carries on, leaving the
/// tree renderable.
pub trait Dom {
    /// Handle to an element.
    type Node: Clone + PartialEq + Debug;

    /// Element children of `parent`, in document order.
    fn children(&self, parent: &Self::Node) -> Vec<Self::Node>;

    /// Tag name of an element (case as reported by the backend).
    fn tag_name(&self, node: &Self::Node) -> String;

    /// Concatenated text of an element and its descendants.
    fn text_content(&self, node: &Self::Node) -> String;

    /// Replace the children of an element with a single text run.
    fn set_text_content(&mut self, node: &Self::Node, text: &str);

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Append `child` to `parent`, moving it if it is already in the tree.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Insert `child` ahead of every existing child node of `parent`,
    /// including leading text.
    fn prepend_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Detach `node` from its parent. No-op if already detached.
    fn detach(&mut self, node: &Self::Node);

    /// Attribute value, if present.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Remove an attribute.
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Add or remove a CSS class.
    fn set_class(&mut self, node: &Self::Node, class: &str, on: bool);

    /// Returns true if the element carries the class.
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// The parent element, if any.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Look up an attached element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Returns true if `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Fully resolved link target of an anchor.
    fn href(&self, anchor: &Self::Node) -> String;

    /// Computed style of an element.
    fn computed_style(&self, node: &Self::Node) -> ComputedStyle;

    /// Viewport-relative bounding box.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Layout height including borders and padding.
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Set the inline `min-height` in pixels, or clear it with `None`.
    fn set_min_height(&mut self, node: &Self::Node, height: Option<f64>);

    /// Smoothly scroll `node` into view.
    fn scroll_into_view(&mut self, node: &Self::Node);
}
