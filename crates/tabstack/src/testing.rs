//! Shared fixtures for unit tests.

use tabstack_config::StackConfig;
use tabstack_host::{Dom, FlexDirection, MockHost, MockNode, StyleRule, StyleSelector};

use crate::stack::Stack;

/// Attribute the default bar token sets.
pub(crate) const BAR_ATTR: &str = "data-nc-tab-bar";
/// Attribute the default current token sets.
pub(crate) const CURRENT_ATTR: &str = "data-nc-current";

/// Append a `section` holding one `h2` plus one `p` per title.
///
/// Each paragraph gets the id `<title>-text`.
pub(crate) fn add_container(host: &mut MockHost, titles: &[&str]) -> MockNode {
    let body = host.body();
    let section = host.append_element(&body, "section");
    for title in titles {
        let heading = host.append_element(&section, "h2");
        host.set_text_content(&heading, title);
        let text = host.append_element(&section, "p");
        host.set_attribute(&text, "id", &format!("{title}-text"));
    }
    section
}

/// Make every bar lay out vertically.
pub(crate) fn make_accordion(host: &mut MockHost) {
    host.add_rule(
        StyleSelector::Attribute(BAR_ATTR.to_owned()),
        StyleRule::new().flex_direction(FlexDirection::Column),
    );
}

/// Make every bar lay out horizontally again.
pub(crate) fn make_tab_row(host: &mut MockHost) {
    host.add_rule(
        StyleSelector::Attribute(BAR_ATTR.to_owned()),
        StyleRule::new().flex_direction(FlexDirection::Row),
    );
}

/// One container with the given titles, default options.
pub(crate) fn single_stack(host: MockHost, titles: &[&str]) -> (Stack<MockHost>, MockNode) {
    let mut host = host;
    let container = add_container(&mut host, titles);
    let stack = Stack::initialize(host, &[container], StackConfig::default());
    (stack, container)
}

/// Page indices carrying the current token, plus the current item indices of each bar.
pub(crate) fn marked(
    stack: &Stack<MockHost>,
    instance: usize,
) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
    let host = stack.host();
    let inst = &stack.instances()[instance];
    let current = |node: &MockNode| host.attribute(node, CURRENT_ATTR).is_some();
    let indices = |nodes: &[MockNode]| {
        nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| current(n))
            .map(|(i, _)| i)
            .collect::<Vec<_>>()
    };
    (
        indices(inst.pages()),
        indices(inst.bar(crate::BarPosition::Top).items()),
        indices(inst.bar(crate::BarPosition::Bottom).items()),
    )
}
