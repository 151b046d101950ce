//! Applying presentation tokens to elements.

use tabstack_config::StyleToken;
use tabstack_host::Dom;

/// Add or remove `token` on `node`.
pub(crate) fn set_token<D: Dom>(dom: &mut D, node: &D::Node, token: &StyleToken, on: bool) {
    match token {
        StyleToken::Class(class) => dom.set_class(node, class, on),
        StyleToken::Data(name) if on => dom.set_attribute(node, name, ""),
        StyleToken::Data(name) => dom.remove_attribute(node, name),
    }
}

/// Returns true if `node` carries `token`.
#[cfg(test)]
pub(crate) fn has_token<D: Dom>(dom: &D, node: &D::Node, token: &StyleToken) -> bool {
    match token {
        StyleToken::Class(class) => dom.has_class(node, class),
        StyleToken::Data(name) => dom.attribute(node, name).is_some(),
    }
}
