//! Per-container state.

use std::rc::Rc;

use tabstack_config::StackConfig;

use crate::bar::Bar;
use crate::extract::Heading;

/// Index of the current page, or `None` when nothing is selected.
///
/// `None` is a resting state only in accordion layout.
pub type Selection = Option<usize>;

/// Position of an instance in the stack registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(pub usize);

/// Which of the two bars an anchor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarPosition {
    /// Inserted before the first page.
    Top,
    /// Inserted after the last page.
    Bottom,
}

impl BarPosition {
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
        }
    }
}

/// Identifies one anchor for click dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorRef {
    /// Owning instance.
    pub instance: InstanceId,
    /// Bar holding the anchor.
    pub bar: BarPosition,
    /// Page index the anchor targets.
    pub index: usize,
}

/// One managed container.
///
/// Pages, headings and both bars are index-aligned: `pages[i]`,
/// `headings[i]` and `bars[b].anchors()[i]` all describe page `i`.
#[derive(Debug)]
pub struct Instance<N> {
    pub(crate) container: N,
    pub(crate) config: Rc<StackConfig>,
    pub(crate) headings: Vec<Heading<N>>,
    pub(crate) pages: Vec<N>,
    pub(crate) bars: [Bar<N>; 2],
    pub(crate) selection: Selection,
}

impl<N> Instance<N> {
    /// The container element.
    pub fn container(&self) -> &N {
        &self.container
    }

    /// Extracted headings, in page order.
    pub fn headings(&self) -> &[Heading<N>] {
        &self.headings
    }

    /// Page wrapper elements.
    pub fn pages(&self) -> &[N] {
        &self.pages
    }

    /// Number of pages. Always at least one.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// One of the two bars.
    pub fn bar(&self, position: BarPosition) -> &Bar<N> {
        &self.bars[position.index()]
    }

    /// The current page.
    pub fn selection(&self) -> Selection {
        self.selection
    }
}
