//! In-memory page for tests and the terminal preview.
//!
//! `SimPage` lays sections out top to bottom, keeps a flat list of elements
//! with document-space boxes, and records the effect of every applied
//! `DomCommand`. `SimSession` couples it with a [`Portfolio`] and a virtual
//! clock, emulating the browser's frame loop and intersection observer.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use folio_protocol::{
    ClassToken, DomCommand, NodeId, Part, Rect, SectionDescriptor, SectionId, StyleProp, Target,
    ViewportMetrics, Widget,
};

use crate::config::FolioConfig;
use crate::host::{PageEvent, PageHost};
use crate::portfolio::Portfolio;

/// One frame at 60 Hz, rounded.
pub const FRAME_MS: f64 = 16.0;

#[derive(Debug, Clone)]
struct SimElement {
    /// Class selectors this element matches, e.g. `.section-title`.
    classes: Vec<String>,
    top: f64,
    width: f64,
    height: f64,
    sibling_index: usize,
    anchor: Option<SectionId>,
    parts: HashMap<Part, usize>,
}

/// Rendered state of one addressable target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimNodeState {
    pub classes: HashSet<ClassToken>,
    pub styles: HashMap<StyleProp, String>,
    pub text: Option<String>,
}

#[derive(Debug)]
pub struct SimPage {
    window_height: f64,
    scroll_y: f64,
    sections: Vec<SectionDescriptor>,
    elements: Vec<SimElement>,
    hash: Option<String>,
    reduced_motion: bool,
    seed: Cell<u64>,
    state: HashMap<Target, SimNodeState>,
    mounted: Vec<Widget>,
    history: Vec<SectionId>,
}

impl SimPage {
    pub fn new(window_height: f64) -> Self {
        Self {
            window_height,
            scroll_y: 0.0,
            sections: Vec::new(),
            elements: Vec::new(),
            hash: None,
            reduced_motion: false,
            seed: Cell::new(0x2545_f491_4f6c_dd1d),
            state: HashMap::new(),
            mounted: Vec::new(),
            history: Vec::new(),
        }
    }

    /// A page shaped like the portfolio: eight sections with titles, cards,
    /// nav links and the hero subtitle.
    pub fn portfolio(window_height: f64) -> Self {
        let mut page = SimPage::new(window_height)
            .section("home", 900.0)
            .section("overview", 700.0)
            .section("about", 800.0)
            .section("experience", 1200.0)
            .section("skills", 900.0)
            .section("projects", 1000.0)
            .section("education", 600.0)
            .section("contact", 700.0);

        page.element(".hero-subtitle", "home", 400.0, 40.0);
        page.element(".btn", "home", 500.0, 48.0);
        page.element(".profile-image", "home", 200.0, 300.0);
        page.element(".scroll-indicator", "home", 820.0, 40.0);

        let ids: Vec<SectionId> = page.sections.iter().map(|s| s.id.clone()).collect();
        for id in &ids {
            let link = page.element(".nav-link", "home", 0.0, 30.0);
            page.set_anchor(link, id.clone());
        }
        for id in ids.iter().skip(1) {
            page.element(".section-title", id, 60.0, 50.0);
            page.element(".section-subtitle", id, 120.0, 30.0);
        }
        for (i, target) in ["about", "experience", "skills", "projects"].iter().enumerate() {
            let card = page.element(".overview-card", "overview", 200.0 + 110.0 * i as f64, 100.0);
            page.set_anchor(card, SectionId::from(*target));
            page.set_parts(card, Part::Icon, 1);
            page.set_parts(card, Part::SmallItem, 3);
        }
        page.element(".about-text", "about", 200.0, 300.0);
        for i in 0..3 {
            page.element(".highlight-item", "about", 520.0 + 80.0 * f64::from(i), 70.0);
        }
        for i in 0..4 {
            let item = page.element(".timeline-item", "experience", 200.0 + 240.0 * f64::from(i), 220.0);
            page.add_class(item, ".timeline-content");
        }
        for i in 0..4 {
            let cat = page.element(".skill-category", "skills", 200.0 + 170.0 * f64::from(i), 150.0);
            page.set_parts(cat, Part::Icon, 1);
            page.set_parts(cat, Part::SmallItem, 5);
        }
        for i in 0..6 {
            page.element(".skill-tag", "skills", 220.0 + 100.0 * f64::from(i), 24.0);
        }
        for i in 0..3 {
            page.element(".project-card", "projects", 200.0 + 260.0 * f64::from(i), 240.0);
        }
        for i in 0..2 {
            page.element(".education-item", "education", 200.0 + 180.0 * f64::from(i), 160.0);
        }
        for i in 0..3 {
            page.element(".contact-item", "contact", 200.0 + 90.0 * f64::from(i), 80.0);
        }
        for i in 0..3 {
            page.element(".social-link-large", "contact", 500.0 + 60.0 * f64::from(i), 40.0);
        }
        page
    }

    /// Append a section below the existing ones.
    pub fn section(mut self, id: &str, height: f64) -> Self {
        let top = self.sections.last().map_or(0.0, SectionDescriptor::offset_bottom);
        self.sections.push(SectionDescriptor::new(id, top, height));
        self
    }

    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = Some(hash.to_string());
        self
    }

    pub fn with_reduced_motion(mut self) -> Self {
        self.reduced_motion = true;
        self
    }

    /// Add an element matching `class`, placed `offset` pixels into `section`.
    /// Elements in an unknown section sit at the top of the document.
    pub fn element(&mut self, class: &str, section: &str, offset: f64, height: f64) -> NodeId {
        let base = self
            .sections
            .iter()
            .find(|s| s.id == section)
            .map_or(0.0, |s| s.offset_top);
        let sibling_index = self
            .elements
            .iter()
            .filter(|e| e.classes.first().is_some_and(|c| c == class) && e.top >= base)
            .count();
        self.elements.push(SimElement {
            classes: vec![class.to_string()],
            top: base + offset,
            width: 240.0,
            height,
            sibling_index,
            anchor: None,
            parts: HashMap::new(),
        });
        NodeId(self.elements.len() as u32 - 1)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.elements.get_mut(node.0 as usize) {
            el.classes.push(class.to_string());
        }
    }

    pub fn set_anchor(&mut self, node: NodeId, section: SectionId) {
        if let Some(el) = self.elements.get_mut(node.0 as usize) {
            el.anchor = Some(section);
        }
    }

    pub fn set_parts(&mut self, node: NodeId, part: Part, count: usize) {
        if let Some(el) = self.elements.get_mut(node.0 as usize) {
            el.parts.insert(part, count);
        }
    }

    /// User scroll: jump to `y`, clamped to the scrollable range.
    pub fn set_scroll_y(&mut self, y: f64) {
        let max = self.metrics().max_scroll();
        self.scroll_y = y.clamp(0.0, max);
    }

    pub fn set_window_height(&mut self, height: f64) {
        self.window_height = height;
        self.set_scroll_y(self.scroll_y);
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn apply(&mut self, cmds: impl IntoIterator<Item = DomCommand>) {
        for cmd in cmds {
            self.apply_one(cmd);
        }
    }

    fn apply_one(&mut self, cmd: DomCommand) {
        match cmd {
            DomCommand::AddClass { target, class } => {
                self.state.entry(target).or_default().classes.insert(class);
            }
            DomCommand::RemoveClass { target, class } => {
                if let Some(node) = self.state.get_mut(&target) {
                    node.classes.remove(&class);
                }
            }
            DomCommand::SetStyle {
                target,
                property,
                value,
            } => {
                self.state
                    .entry(target)
                    .or_default()
                    .styles
                    .insert(property, value);
            }
            DomCommand::ClearStyle { target, property } => {
                if let Some(node) = self.state.get_mut(&target) {
                    node.styles.remove(&property);
                }
            }
            DomCommand::SetText { target, text } => {
                self.state.entry(target).or_default().text = Some(text);
            }
            DomCommand::ScrollTo { y } => self.set_scroll_y(y),
            DomCommand::PushHistory { section } => {
                self.hash = Some(section.to_hash());
                self.history.push(section);
            }
            DomCommand::Mount(widget) => {
                if !self.mounted.contains(&widget) {
                    self.mounted.push(widget);
                }
            }
            DomCommand::Remove { target } => {
                self.state.remove(&target);
                self.mounted.retain(|w| w.target().as_ref() != Some(&target));
            }
        }
    }

    pub fn node(&self, target: &Target) -> Option<&SimNodeState> {
        self.state.get(target)
    }

    pub fn has_class(&self, target: &Target, class: ClassToken) -> bool {
        self.node(target).is_some_and(|n| n.classes.contains(&class))
    }

    pub fn style(&self, target: &Target, property: StyleProp) -> Option<&str> {
        self.node(target)?.styles.get(&property).map(String::as_str)
    }

    pub fn text(&self, target: &Target) -> Option<&str> {
        self.node(target)?.text.as_deref()
    }

    pub fn is_mounted(&self, pred: impl Fn(&Widget) -> bool) -> bool {
        self.mounted.iter().any(pred)
    }

    pub fn mounted(&self) -> &[Widget] {
        &self.mounted
    }

    pub fn history(&self) -> &[SectionId] {
        &self.history
    }

    /// Nodes matching `class` that carry the revealed marker.
    pub fn revealed(&self, class: &str) -> usize {
        self.query_all(class)
            .into_iter()
            .filter(|n| self.has_class(&Target::Node(*n), ClassToken::Animate))
            .count()
    }

    /// Fraction of `node`'s box inside the viewport.
    pub fn visible_ratio(&self, node: NodeId) -> f64 {
        let Some(rect) = self.rect(node) else {
            return 0.0;
        };
        if rect.h <= 0.0 {
            return 0.0;
        }
        let visible = rect.bottom().min(self.window_height) - rect.top().max(0.0);
        (visible / rect.h).clamp(0.0, 1.0)
    }
}

impl PageHost for SimPage {
    fn metrics(&self) -> ViewportMetrics {
        let document_height = self
            .sections
            .last()
            .map_or(self.window_height, SectionDescriptor::offset_bottom);
        ViewportMetrics::new(self.window_height, document_height, self.scroll_y)
    }

    fn sections(&self) -> Vec<SectionDescriptor> {
        self.sections.clone()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let wanted: Vec<&str> = selector.split(',').map(str::trim).collect();
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.classes.iter().any(|c| wanted.contains(&c.as_str())))
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    fn sibling_index(&self, node: NodeId) -> usize {
        self.elements
            .get(node.0 as usize)
            .map_or(0, |e| e.sibling_index)
    }

    fn rect(&self, node: NodeId) -> Option<Rect> {
        let el = self.elements.get(node.0 as usize)?;
        Some(Rect::new(0.0, el.top - self.scroll_y, el.width, el.height))
    }

    fn part_count(&self, node: NodeId, part: Part) -> usize {
        self.elements
            .get(node.0 as usize)
            .and_then(|e| e.parts.get(&part).copied())
            .unwrap_or(0)
    }

    fn anchor_of(&self, node: NodeId) -> Option<SectionId> {
        self.elements.get(node.0 as usize)?.anchor.clone()
    }

    fn location_hash(&self) -> Option<String> {
        self.hash.clone()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn random(&self) -> f64 {
        // xorshift64*
        let mut x = self.seed.get();
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.seed.set(x);
        (x.wrapping_mul(0x2545_f491_4f6c_dd1d) >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// A [`Portfolio`] running against a [`SimPage`] on a virtual clock.
#[derive(Debug)]
pub struct SimSession {
    pub page: SimPage,
    pub portfolio: Portfolio,
    now: f64,
}

impl SimSession {
    /// Build the coordinator and run its startup against `page` at t = 0.
    pub fn start(page: SimPage, config: FolioConfig) -> Self {
        let mut session = Self {
            page,
            portfolio: Portfolio::new(config),
            now: 0.0,
        };
        let cmds = session.portfolio.init(0.0, &session.page);
        session.page.apply(cmds);
        session
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Deliver one event at the current time.
    pub fn dispatch(&mut self, event: PageEvent) {
        let cmds = self.portfolio.handle(self.now, event, &self.page);
        self.page.apply(cmds);
    }

    /// User scroll to `y`, followed by the scroll event and observer reports.
    pub fn scroll_to(&mut self, y: f64) {
        self.page.set_scroll_y(y);
        self.after_scroll();
    }

    /// Let `ms` of virtual time pass, running frames while a smooth scroll
    /// is in flight and every timer as it falls due.
    pub fn advance(&mut self, ms: f64) {
        let end = self.now + ms;
        loop {
            let cmds = self.portfolio.pump(self.now, &self.page);
            self.page.apply(cmds);
            if self.now >= end {
                break;
            }
            // After a pump every queued deadline lies strictly in the future.
            let next = if self.portfolio.wants_frame() {
                self.now + FRAME_MS
            } else {
                self.portfolio.next_wake().unwrap_or(end)
            };
            self.now = next.min(end).max(self.now);

            if self.portfolio.wants_frame() {
                let before = self.page.scroll_y();
                let cmds = self.portfolio.frame(self.now);
                self.page.apply(cmds);
                if self.page.scroll_y() != before {
                    self.after_scroll();
                }
            }
        }
    }

    fn after_scroll(&mut self) {
        self.dispatch(PageEvent::Scroll);
        for node in self.portfolio.observed() {
            let ratio = self.page.visible_ratio(node);
            if ratio > 0.0 {
                self.dispatch(PageEvent::Intersection {
                    node,
                    is_intersecting: true,
                    ratio,
                });
            }
        }
    }
}
