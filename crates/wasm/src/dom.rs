//! The live document as a [`PageHost`].

use std::cell::RefCell;
use std::collections::HashMap;

use folio_core::PageHost;
use folio_protocol::{NodeId, Part, Rect, SectionDescriptor, SectionId, Target, ViewportMetrics};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub struct BrowserPage {
    window: Window,
    document: Document,
    /// Elements handed out as `NodeId`s, indexed by id.
    nodes: RefCell<Vec<Element>>,
    /// Script-created elements, keyed by the target that addresses them.
    pub(crate) widgets: HashMap<Target, Element>,
}

impl BrowserPage {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self {
            window,
            document,
            nodes: RefCell::new(Vec::new()),
            widgets: HashMap::new(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Milliseconds on the page's monotonic clock.
    pub fn now(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }

    pub fn node(&self, id: NodeId) -> Option<Element> {
        self.nodes.borrow().get(id.0 as usize).cloned()
    }

    /// The id previously handed out for `element`, if any.
    pub fn node_id(&self, element: &Element) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| n == element)
            .map(|i| NodeId(i as u32))
    }

    pub fn widget(&self, target: &Target) -> Option<&Element> {
        self.widgets.get(target)
    }

    pub fn select(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn intern(&self, element: Element) -> NodeId {
        if let Some(id) = self.node_id(&element) {
            return id;
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(element);
        NodeId(nodes.len() as u32 - 1)
    }
}

/// Elements matching `selector` under `root`, in document order.
pub fn select_all(root: &impl AsRef<JsValue>, selector: &str) -> Vec<Element> {
    let list = if let Some(doc) = root.as_ref().dyn_ref::<Document>() {
        doc.query_selector_all(selector)
    } else if let Some(el) = root.as_ref().dyn_ref::<Element>() {
        el.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let list = match list {
        Ok(list) => list,
        Err(err) => {
            debug!(selector, ?err, "selector rejected");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

impl PageHost for BrowserPage {
    fn metrics(&self) -> ViewportMetrics {
        let window_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let document_height = self
            .document
            .document_element()
            .map_or(window_height, |el| f64::from(el.scroll_height()));
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        ViewportMetrics::new(window_height, document_height, scroll_y)
    }

    fn sections(&self) -> Vec<SectionDescriptor> {
        select_all(&self.document, "section[id]")
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| {
                SectionDescriptor::new(
                    el.id(),
                    f64::from(el.offset_top()),
                    f64::from(el.offset_height()),
                )
            })
            .collect()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        select_all(&self.document, selector)
            .into_iter()
            .map(|el| self.intern(el))
            .collect()
    }

    fn sibling_index(&self, node: NodeId) -> usize {
        let mut index = 0;
        let mut current = self.node(node).and_then(|el| el.previous_element_sibling());
        while let Some(prev) = current {
            index += 1;
            current = prev.previous_element_sibling();
        }
        index
    }

    fn rect(&self, node: NodeId) -> Option<Rect> {
        let el = self.node(node)?;
        if !el.is_connected() {
            return None;
        }
        let r = el.get_bounding_client_rect();
        Some(Rect::new(r.x(), r.y(), r.width(), r.height()))
    }

    fn part_count(&self, node: NodeId, part: Part) -> usize {
        self.node(node)
            .map_or(0, |el| select_all(&el, part.selector()).len())
    }

    fn anchor_of(&self, node: NodeId) -> Option<SectionId> {
        let el = self.node(node)?;
        el.get_attribute("href")
            .and_then(|href| SectionId::from_hash(&href))
            .or_else(|| {
                el.get_attribute("data-section")
                    .filter(|s| !s.is_empty())
                    .map(SectionId::from)
            })
    }

    fn location_hash(&self) -> Option<String> {
        self.window
            .location()
            .hash()
            .ok()
            .filter(|h| h.len() > 1)
    }

    fn prefers_reduced_motion(&self) -> bool {
        matches!(
            self.window.match_media("(prefers-reduced-motion: reduce)"),
            Ok(Some(query)) if query.matches()
        )
    }

    fn random(&self) -> f64 {
        js_sys::Math::random()
    }
}
