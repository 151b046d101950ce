//! Navigation bars.
//!
//! A bar is a `ul` carrying the bar token, holding one `li > a` per page. The
//! anchor links to `#<generated id>` and repeats the heading's text. Each
//! instance builds two bars from the same headings; they share no nodes.

use tabstack_config::StyleToken;
use tabstack_host::Dom;

use crate::extract::Heading;
use crate::token::set_token;

/// One rendered navigation list.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar<N> {
    list: N,
    items: Vec<N>,
    anchors: Vec<N>,
}

impl<N> Bar<N> {
    /// The `ul` element.
    pub fn list(&self) -> &N {
        &self.list
    }

    /// The `li` elements, one per page.
    pub fn items(&self) -> &[N] {
        &self.items
    }

    /// The `a` elements, one per page.
    pub fn anchors(&self) -> &[N] {
        &self.anchors
    }
}

/// Build a detached bar for `headings`.
pub fn build<D: Dom>(
    dom: &mut D,
    headings: &[Heading<D::Node>],
    token: &StyleToken,
) -> Bar<D::Node> {
    let list = dom.create_element("ul");
    set_token(dom, &list, token, true);

    let mut items = Vec::with_capacity(headings.len());
    let mut anchors = Vec::with_capacity(headings.len());
    for heading in headings {
        let label = dom.text_content(&heading.element);
        let anchor = dom.create_element("a");
        dom.set_attribute(&anchor, "href", &format!("#{}", heading.id));
        dom.set_text_content(&anchor, label.trim());

        let item = dom.create_element("li");
        dom.append_child(&item, &anchor);
        dom.append_child(&list, &item);
        items.push(item);
        anchors.push(anchor);
    }

    Bar {
        list,
        items,
        anchors,
    }
}
