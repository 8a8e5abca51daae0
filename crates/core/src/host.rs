//! The seam between the coordinator and whatever renders the page.
//!
//! The browser implements [`PageHost`] over the live DOM; tests and the
//! terminal preview use [`crate::sim::SimPage`]. Every lookup is fallible
//! in the `Option` sense: an element that is not there is a normal case.

use folio_protocol::{NodeId, Part, Rect, SectionDescriptor, SectionId, ViewportMetrics};

use crate::input::KeyPress;
use crate::interactions::PointerAction;

pub trait PageHost {
    fn metrics(&self) -> ViewportMetrics;

    /// Every `section[id]`, in document order.
    fn sections(&self) -> Vec<SectionDescriptor>;

    /// Elements matching a CSS selector, in document order. Ids are stable
    /// for the page lifetime.
    fn query_all(&self, selector: &str) -> Vec<NodeId>;

    /// Position of `node` among its parent's element children.
    fn sibling_index(&self, node: NodeId) -> usize;

    /// Viewport-relative bounding box, `None` if the node is gone.
    fn rect(&self, node: NodeId) -> Option<Rect>;

    /// Number of descendants of `node` matching `part`.
    fn part_count(&self, node: NodeId, part: Part) -> usize;

    /// Section a link or card points at (`href="#id"` or `data-section`).
    fn anchor_of(&self, node: NodeId) -> Option<SectionId>;

    /// `location.hash` including the leading `#`, if non-empty.
    fn location_hash(&self) -> Option<String>;

    fn prefers_reduced_motion(&self) -> bool;

    /// Uniform sample in [0, 1).
    fn random(&self) -> f64;
}

/// Everything the page reacts to, as reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll,
    Resize,
    HashChange,
    /// Click on a `.nav-link`; default navigation already prevented.
    NavLinkClick(NodeId),
    OverviewCardClick(NodeId),
    /// Click on the disabled "work in progress" nav entry.
    WipClick,
    HamburgerClick,
    ScrollIndicatorClick,
    ScrollTopClick,
    Key(KeyPress),
    Intersection {
        node: NodeId,
        is_intersecting: bool,
        ratio: f64,
    },
    Pointer {
        node: NodeId,
        action: PointerAction,
    },
}
