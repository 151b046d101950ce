//! In-memory host for testing.
//!
//! Provides [`MockHost`], an arena DOM plus a scripted window. Style and
//! geometry come from [`StyleRule`]s rather than a layout engine, so tests
//! state exactly what the core will measure.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use crate::browser::Browser;
use crate::dom::Dom;
use crate::geometry::{ComputedStyle, FlexDirection, PointerEvents, Rect};

/// Handle to a node in a [`MockHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MockNode(usize);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    text: String,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    parent: Option<usize>,
    children: Vec<usize>,
    min_height: Option<f64>,
}

/// Which elements a [`StyleRule`] applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSelector {
    /// Elements with this tag (case-insensitive).
    Tag(String),
    /// Elements carrying this class.
    Class(String),
    /// Elements carrying this attribute, whatever its value.
    Attribute(String),
    /// The element with this id.
    Id(String),
    /// One specific node.
    Node(MockNode),
}

/// Style and geometry overrides. Unset fields leave earlier values alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRule {
    flex_direction: Option<FlexDirection>,
    pointer_events: Option<PointerEvents>,
    margin_top: Option<f64>,
    margin_bottom: Option<f64>,
    top: Option<f64>,
    height: Option<f64>,
}

impl StyleRule {
    /// Create an empty rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `flex-direction`.
    #[must_use]
    pub fn flex_direction(mut self, value: FlexDirection) -> Self {
        self.flex_direction = Some(value);
        self
    }

    /// Set `pointer-events`.
    #[must_use]
    pub fn pointer_events(mut self, value: PointerEvents) -> Self {
        self.pointer_events = Some(value);
        self
    }

    /// Set both vertical margins.
    #[must_use]
    pub fn margins(mut self, top: f64, bottom: f64) -> Self {
        self.margin_top = Some(top);
        self.margin_bottom = Some(bottom);
        self
    }

    /// Set the viewport-relative top edge.
    #[must_use]
    pub fn top(mut self, value: f64) -> Self {
        self.top = Some(value);
        self
    }

    /// Set the rendered height (bounding rect and offset height).
    #[must_use]
    pub fn height(mut self, value: f64) -> Self {
        self.height = Some(value);
        self
    }
}

/// In-memory DOM and window.
///
/// # Example
///
/// ```ignore
/// use tabstack_host::{Dom, MockHost, StyleRule, StyleSelector};
///
/// let mut host = MockHost::new();
/// let body = host.body();
/// let section = host.append_element(&body, "section");
/// host.add_rule(StyleSelector::Tag("section".into()), StyleRule::new().height(40.0));
/// assert_eq!(host.offset_height(&section), 40.0);
/// ```
#[derive(Debug)]
pub struct MockHost {
    nodes: Vec<NodeData>,
    rules: Vec<(StyleSelector, StyleRule)>,
    base_url: String,
    hash: String,
    history: Vec<String>,
    viewport_height: f64,
    now: Duration,
    wake_requests: Vec<Duration>,
    scrolled: Vec<MockNode>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            nodes: vec![NodeData {
                tag: "BODY".to_owned(),
                ..NodeData::default()
            }],
            rules: Vec::new(),
            base_url: "https://example.test/page".to_owned(),
            hash: String::new(),
            history: Vec::new(),
            viewport_height: 800.0,
            now: Duration::ZERO,
            wake_requests: Vec::new(),
            scrolled: Vec::new(),
        }
    }
}

impl MockHost {
    /// Create an empty document with an 800px viewport and no fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document body.
    #[must_use]
    pub fn body(&self) -> MockNode {
        MockNode(0)
    }

    /// Create an element and append it to `parent`.
    pub fn append_element(&mut self, parent: &MockNode, tag: &str) -> MockNode {
        let node = self.create_element(tag);
        self.append_child(parent, &node);
        node
    }

    /// Add a style rule. Later rules override earlier ones.
    pub fn add_rule(&mut self, selector: StyleSelector, rule: StyleRule) {
        self.rules.push((selector, rule));
    }

    /// Set the viewport height.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    /// Replace the URL fragment as a navigation would. Include the `#`.
    pub fn set_hash(&mut self, hash: &str) {
        hash.clone_into(&mut self.hash);
    }

    /// URL including the fragment.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.hash)
    }

    /// URLs pushed onto the history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Nodes scrolled into view, oldest first.
    #[must_use]
    pub fn scrolled(&self) -> &[MockNode] {
        &self.scrolled
    }

    /// Delays passed to `request_wake`, oldest first.
    #[must_use]
    pub fn wake_requests(&self) -> &[Duration] {
        &self.wake_requests
    }

    /// Inline `min-height` of an element.
    #[must_use]
    pub fn min_height(&self, node: &MockNode) -> Option<f64> {
        self.data(*node).min_height
    }

    /// Advance the clock.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    fn data(&self, node: MockNode) -> &NodeData {
        &self.nodes[node.0]
    }

    fn data_mut(&mut self, node: MockNode) -> &mut NodeData {
        &mut self.nodes[node.0]
    }

    fn is_attached(&self, node: MockNode) -> bool {
        let mut current = Some(node.0);
        while let Some(index) = current {
            if index == 0 {
                return true;
            }
            current = self.nodes[index].parent;
        }
        false
    }

    fn matches(&self, node: MockNode, selector: &StyleSelector) -> bool {
        let data = self.data(node);
        match selector {
            StyleSelector::Tag(tag) => data.tag.eq_ignore_ascii_case(tag),
            StyleSelector::Class(class) => data.classes.contains(class),
            StyleSelector::Attribute(name) => data.attributes.contains_key(name),
            StyleSelector::Id(id) => data.attributes.get("id") == Some(id),
            StyleSelector::Node(target) => *target == node,
        }
    }

    /// Fold every matching rule, in insertion order.
    fn resolved(&self, node: MockNode) -> StyleRule {
        let mut out = StyleRule::default();
        for (selector, rule) in &self.rules {
            if !self.matches(node, selector) {
                continue;
            }
            out.flex_direction = rule.flex_direction.or(out.flex_direction);
            out.pointer_events = rule.pointer_events.or(out.pointer_events);
            out.margin_top = rule.margin_top.or(out.margin_top);
            out.margin_bottom = rule.margin_bottom.or(out.margin_bottom);
            out.top = rule.top.or(out.top);
            out.height = rule.height.or(out.height);
        }
        out
    }
}

impl Dom for MockHost {
    type Node = MockNode;

    fn children(&self, parent: &MockNode) -> Vec<MockNode> {
        self.data(*parent)
            .children
            .iter()
            .copied()
            .map(MockNode)
            .collect()
    }

    fn tag_name(&self, node: &MockNode) -> String {
        self.data(*node).tag.clone()
    }

    fn text_content(&self, node: &MockNode) -> String {
        let data = self.data(*node);
        let mut text = data.text.clone();
        for child in &data.children {
            text.push_str(&self.text_content(&MockNode(*child)));
        }
        text
    }

    fn set_text_content(&mut self, node: &MockNode, text: &str) {
        for child in std::mem::take(&mut self.data_mut(*node).children) {
            self.nodes[child].parent = None;
        }
        self.data_mut(*node).text = text.to_owned();
    }

    fn create_element(&mut self, tag: &str) -> MockNode {
        self.nodes.push(NodeData {
            tag: tag.to_ascii_uppercase(),
            ..NodeData::default()
        });
        MockNode(self.nodes.len() - 1)
    }

    fn append_child(&mut self, parent: &MockNode, child: &MockNode) {
        self.detach(child);
        self.nodes[parent.0].children.push(child.0);
        self.nodes[child.0].parent = Some(parent.0);
    }

    fn prepend_child(&mut self, parent: &MockNode, child: &MockNode) {
        self.detach(child);
        self.nodes[parent.0].children.insert(0, child.0);
        self.nodes[child.0].parent = Some(parent.0);
    }

    fn detach(&mut self, node: &MockNode) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent].children.retain(|&c| c != node.0);
        }
    }

    fn attribute(&self, node: &MockNode, name: &str) -> Option<String> {
        self.data(*node).attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &MockNode, name: &str, value: &str) {
        self.data_mut(*node)
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&mut self, node: &MockNode, name: &str) {
        self.data_mut(*node).attributes.remove(name);
    }

    fn set_class(&mut self, node: &MockNode, class: &str, on: bool) {
        let classes = &mut self.data_mut(*node).classes;
        if on {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn has_class(&self, node: &MockNode, class: &str) -> bool {
        self.data(*node).classes.contains(class)
    }

    fn parent(&self, node: &MockNode) -> Option<MockNode> {
        self.data(*node).parent.map(MockNode)
    }

    fn element_by_id(&self, id: &str) -> Option<MockNode> {
        (0..self.nodes.len())
            .map(MockNode)
            .find(|&n| {
                self.data(n).attributes.get("id").is_some_and(|v| v == id) && self.is_attached(n)
            })
    }

    fn contains(&self, ancestor: &MockNode, node: &MockNode) -> bool {
        let mut current = Some(node.0);
        while let Some(index) = current {
            if index == ancestor.0 {
                return true;
            }
            current = self.nodes[index].parent;
        }
        false
    }

    fn href(&self, anchor: &MockNode) -> String {
        match self.attribute(anchor, "href") {
            Some(href) if href.starts_with('#') => format!("{}{href}", self.base_url),
            Some(href) => href,
            None => String::new(),
        }
    }

    fn computed_style(&self, node: &MockNode) -> ComputedStyle {
        let rule = self.resolved(*node);
        ComputedStyle {
            flex_direction: rule.flex_direction.unwrap_or_default(),
            pointer_events: rule.pointer_events.unwrap_or_default(),
            margin_top: rule.margin_top.unwrap_or(0.0),
            margin_bottom: rule.margin_bottom.unwrap_or(0.0),
        }
    }

    fn bounding_rect(&self, node: &MockNode) -> Rect {
        let rule = self.resolved(*node);
        Rect::new(rule.top.unwrap_or(0.0), rule.height.unwrap_or(0.0))
    }

    fn offset_height(&self, node: &MockNode) -> f64 {
        self.resolved(*node).height.unwrap_or(0.0)
    }

    fn set_min_height(&mut self, node: &MockNode, height: Option<f64>) {
        self.data_mut(*node).min_height = height;
    }

    fn scroll_into_view(&mut self, node: &MockNode) {
        self.scrolled.push(*node);
    }
}

impl Browser for MockHost {
    fn location_hash(&self) -> String {
        self.hash.clone()
    }

    fn push_state(&mut self, url: &str) {
        self.history.push(url.to_owned());
        self.hash = url.find('#').map(|i| url[i..].to_owned()).unwrap_or_default();
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn now(&self) -> Duration {
        self.now
    }

    fn request_wake(&mut self, delay: Duration) {
        self.wake_requests.push(delay);
    }
}
