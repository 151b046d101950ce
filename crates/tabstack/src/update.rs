//! The single point that changes the visible selection.

use tabstack_host::Dom;

use crate::instance::{Instance, Selection};
use crate::token::set_token;

/// Mark `selection` as current on both bars and the pages, and record it.
///
/// Every item and page is written, so the result does not depend on the
/// previous state and repeated calls are harmless. An index past the last
/// page clears the selection.
pub(crate) fn update<D: Dom>(dom: &mut D, instance: &mut Instance<D::Node>, selection: Selection) {
    let selection = selection.filter(|&i| i < instance.pages.len());
    let token = instance.config.current_token();

    for i in 0..instance.pages.len() {
        let on = selection == Some(i);
        for bar in &instance.bars {
            set_token(dom, &bar.items()[i], &token, on);
        }
        set_token(dom, &instance.pages[i], &token, on);
    }
    instance.selection = selection;
    tracing::debug!(?selection, "Updated selection");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{marked, single_stack};
    use pretty_assertions::assert_eq;
    use tabstack_host::MockHost;

    #[test]
    fn test_exactly_one_marked() {
        let (mut stack, _) = single_stack(MockHost::new(), &["a", "b", "c"]);
        for i in 0..3 {
            stack.apply(0, Some(i));
            assert_eq!(marked(&stack, 0), (vec![i], vec![i], vec![i]));
            assert_eq!(stack.instances()[0].selection(), Some(i));
        }
    }

    #[test]
    fn test_idempotent() {
        let (mut stack, _) = single_stack(MockHost::new(), &["a", "b", "c"]);
        stack.apply(0, Some(1));
        let once = marked(&stack, 0);
        stack.apply(0, Some(1));
        assert_eq!(marked(&stack, 0), once);
        assert_eq!(stack.instances()[0].selection(), Some(1));
    }

    #[test]
    fn test_none_clears_everything() {
        let (mut stack, _) = single_stack(MockHost::new(), &["a", "b"]);
        stack.apply(0, Some(1));
        stack.apply(0, None);
        assert_eq!(marked(&stack, 0), (vec![], vec![], vec![]));
        assert_eq!(stack.instances()[0].selection(), None);
    }

    #[test]
    fn test_out_of_range_clears() {
        let (mut stack, _) = single_stack(MockHost::new(), &["a", "b"]);
        stack.apply(0, Some(7));
        assert_eq!(stack.instances()[0].selection(), None);
        assert_eq!(marked(&stack, 0), (vec![], vec![], vec![]));
    }
}
