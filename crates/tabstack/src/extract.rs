//! Splitting a container's children into pages.
//!
//! The first direct child that is a heading (`h1`..`h6`) fixes the splitting
//! tag. Every later child with exactly that tag opens a new page; all other
//! children go into the page that is currently open. Children before the first
//! heading are left where they are.

use tabstack_config::StackConfig;
use tabstack_host::Dom;

/// A page heading and the id generated for its page.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading<N> {
    /// The heading element taken from the container.
    pub element: N,
    /// `<hash_prefix><container_id>-<ordinal>`, ordinal starting at 1.
    pub id: String,
}

/// Result of a successful extraction.
#[derive(Debug)]
pub struct Extraction<N> {
    /// One heading per page.
    pub headings: Vec<Heading<N>>,
    /// Detached page wrapper elements, in order.
    pub pages: Vec<N>,
}

/// Returns true for `h1`..`h6`, any case.
pub fn is_heading_tag(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    bytes.len() == 2 && bytes[0].eq_ignore_ascii_case(&b'h') && (b'1'..=b'6').contains(&bytes[1])
}

/// Split `container` into pages.
///
/// Returns `None` when the container has no heading child; the container is
/// left untouched in that case. Otherwise the page wrappers are returned
/// detached, ready for insertion.
pub fn extract<D: Dom>(
    dom: &mut D,
    container: &D::Node,
    container_id: usize,
    config: &StackConfig,
) -> Option<Extraction<D::Node>> {
    let children = dom.children(container);
    let split_tag = children
        .iter()
        .map(|child| dom.tag_name(child))
        .find(|tag| is_heading_tag(tag))?;

    let mut headings = Vec::new();
    let mut pages = Vec::new();
    let mut open: Option<D::Node> = None;

    for child in children {
        if dom.tag_name(&child).eq_ignore_ascii_case(&split_tag) {
            let id = format!("{}{container_id}-{}", config.hash_prefix, headings.len() + 1);
            let page = dom.create_element("div");
            if config.remove_heading_from_page {
                dom.detach(&child);
            } else {
                dom.append_child(&page, &child);
            }
            headings.push(Heading { element: child, id });
            if let Some(done) = open.replace(page) {
                pages.push(done);
            }
        } else if let Some(page) = &open {
            dom.append_child(page, &child);
        }
    }
    pages.extend(open);

    tracing::debug!(
        container_id,
        tag = %split_tag,
        pages = pages.len(),
        "Extracted pages"
    );
    Some(Extraction { headings, pages })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::add_container;
    use pretty_assertions::assert_eq;
    use tabstack_host::MockHost;

    #[test]
    fn test_is_heading_tag() {
        assert!(is_heading_tag("H2"));
        assert!(is_heading_tag("h6"));
        assert!(!is_heading_tag("H7"));
        assert!(!is_heading_tag("HR"));
        assert!(!is_heading_tag("HEADER"));
    }

    #[test]
    fn test_one_page_per_heading() {
        let mut host = MockHost::new();
        let container = add_container(&mut host, &["a", "b", "c"]);

        let extraction = extract(&mut host, &container, 1, &StackConfig::default()).unwrap();

        assert_eq!(extraction.headings.len(), 3);
        assert_eq!(extraction.pages.len(), 3);
        let ids: Vec<_> = extraction.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["tst:1-1", "tst:1-2", "tst:1-3"]);
        for (heading, page) in extraction.headings.iter().zip(&extraction.pages) {
            let children = host.children(page);
            assert_eq!(children.len(), 2);
            assert_eq!(children[0], heading.element);
            assert_eq!(host.tag_name(&children[1]), "P");
        }
        assert!(host.children(&container).is_empty());
    }

    #[test]
    fn test_container_id_and_prefix_in_ids() {
        let mut host = MockHost::new();
        let container = add_container(&mut host, &["a", "b"]);
        let config = StackConfig {
            hash_prefix: "page-".to_owned(),
            ..StackConfig::default()
        };

        let extraction = extract(&mut host, &container, 4, &config).unwrap();

        assert_eq!(extraction.headings[1].id, "page-4-2");
    }

    #[test]
    fn test_remove_heading_from_page() {
        let mut host = MockHost::new();
        let container = add_container(&mut host, &["a", "b"]);
        let config = StackConfig {
            remove_heading_from_page: true,
            ..StackConfig::default()
        };

        let extraction = extract(&mut host, &container, 1, &config).unwrap();

        for (heading, page) in extraction.headings.iter().zip(&extraction.pages) {
            let children = host.children(page);
            assert_eq!(children.len(), 1);
            assert_eq!(host.tag_name(&children[0]), "P");
            assert_eq!(host.parent(&heading.element), None);
        }
    }

    #[test]
    fn test_no_heading_returns_none() {
        let mut host = MockHost::new();
        let body = host.body();
        let container = host.append_element(&body, "section");
        let p = host.append_element(&container, "p");

        assert!(extract(&mut host, &container, 1, &StackConfig::default()).is_none());
        assert_eq!(host.children(&container), vec![p]);
    }

    #[test]
    fn test_first_heading_level_decides_split() {
        let mut host = MockHost::new();
        let body = host.body();
        let container = host.append_element(&body, "section");
        let intro = host.append_element(&container, "p");
        host.append_element(&container, "h3");
        let sub = host.append_element(&container, "h4");
        host.append_element(&container, "h3");

        let extraction = extract(&mut host, &container, 1, &StackConfig::default()).unwrap();

        assert_eq!(extraction.pages.len(), 2);
        assert!(host.children(&extraction.pages[0]).contains(&sub));
        assert_eq!(host.children(&container), vec![intro]);
    }
}
