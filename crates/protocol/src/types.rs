use serde::{Deserialize, Serialize};

use crate::section_id::SectionId;

/// Opaque handle for a DOM element discovered by the host.
///
/// Handles are assigned once and stay valid for the page lifetime; elements
/// that did not exist at discovery time never get one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Viewport-relative bounding box, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Whether any part of the box lies inside a viewport of the given height.
    pub fn overlaps_viewport(&self, window_height: f64) -> bool {
        self.top() < window_height && self.bottom() > 0.0
    }
}

/// Scroll and size metrics of the window and document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportMetrics {
    pub window_height: f64,
    pub document_height: f64,
    pub scroll_y: f64,
}

impl ViewportMetrics {
    pub fn new(window_height: f64, document_height: f64, scroll_y: f64) -> Self {
        Self {
            window_height,
            document_height,
            scroll_y,
        }
    }

    /// Largest reachable scroll offset. Zero when the document fits the window.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.window_height).max(0.0)
    }

    /// Same metrics at a different scroll offset.
    pub fn at(&self, scroll_y: f64) -> Self {
        Self { scroll_y, ..*self }
    }
}

/// Layout of one anchorable section in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<SectionId>, offset_top: f64, offset_height: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
            offset_height,
        }
    }

    pub fn offset_bottom(&self) -> f64 {
        self.offset_top + self.offset_height
    }

    /// Half-open containment: `[offset_top, offset_top + offset_height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_bottom()
    }
}
