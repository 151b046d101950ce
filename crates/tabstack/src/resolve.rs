//! Resolving a URL fragment to a page index.
//!
//! Two steps, first match wins:
//!
//! 1. the fragment is a suffix of one of the top bar's anchor hrefs;
//! 2. the fragment names an element contained in one of the pages.
//!
//! A generated id therefore always beats an author id that happens to be
//! equal to it.

use tabstack_host::Dom;

use crate::instance::Instance;

/// Page index for `hash` (including the leading `#`), if any.
pub fn resolve<D: Dom>(dom: &D, instance: &Instance<D::Node>, hash: &str) -> Option<usize> {
    let found =
        anchor_match(dom, instance, hash).or_else(|| containment_match(dom, instance, hash));
    if found.is_none() && !hash.is_empty() {
        tracing::trace!(hash, "Fragment matches no page");
    }
    found
}

/// Step 1: a generated anchor whose href ends with `hash`.
fn anchor_match<D: Dom>(dom: &D, instance: &Instance<D::Node>, hash: &str) -> Option<usize> {
    if !hash.contains('#') {
        return None;
    }
    instance.bars[0]
        .anchors()
        .iter()
        .position(|anchor| dom.href(anchor).ends_with(hash))
}

/// Step 2: a page containing the element the fragment names.
fn containment_match<D: Dom>(dom: &D, instance: &Instance<D::Node>, hash: &str) -> Option<usize> {
    let id = hash.replacen('#', "", 1);
    if id.is_empty() {
        return None;
    }
    let target = dom.element_by_id(&id)?;
    instance.pages.iter().position(|page| dom.contains(page, &target))
}
