//! Scroll-position driven navigation state.
//!
//! The coordinator is the single writer of the active section. On every
//! (throttled) scroll tick it resolves the active section, and keeps the
//! progress bar, header markers, section indicator and back-to-top button in
//! step with the scroll offset. Commands are only emitted for values that
//! changed, except the progress width which tracks every tick.

use folio_protocol::{
    ClassToken, DomCommand, SectionDescriptor, SectionId, StyleProp, Target, ViewportMetrics,
};
use tracing::debug;

use crate::config::NavConfig;
use crate::error::FolioError;

/// Percentage of the scrollable range already scrolled, in [0, 100].
///
/// A document that fits the window has nothing to scroll and reports 0.
pub fn progress_percent(metrics: &ViewportMetrics) -> f64 {
    let range = metrics.max_scroll();
    if range <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_y / range * 100.0).clamp(0.0, 100.0)
}

/// Section containing `position`, scanning in document order; first match wins.
///
/// A position past the last section resolves to the last one and a position
/// above the first resolves to the first. A position in a gap between
/// sections resolves to nothing.
pub fn resolve_section(sections: &[SectionDescriptor], position: f64) -> Option<&SectionDescriptor> {
    if let Some(hit) = sections.iter().find(|s| s.contains(position)) {
        return Some(hit);
    }
    let first = sections.first()?;
    let last = sections.last()?;
    if position >= last.offset_bottom() {
        Some(last)
    } else if position < first.offset_top {
        Some(first)
    } else {
        None
    }
}

/// Human label shown in the navbar's section indicator.
pub fn display_name(id: &str) -> String {
    match id {
        "home" => "Introduction".into(),
        "about" => "About Me".into(),
        _ => {
            let mut chars = id.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Colour band of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    Early,
    Middle,
    Late,
    End,
}

impl ProgressBand {
    pub fn for_percent(percent: f64) -> Self {
        if percent < 25.0 {
            ProgressBand::Early
        } else if percent < 50.0 {
            ProgressBand::Middle
        } else if percent < 75.0 {
            ProgressBand::Late
        } else {
            ProgressBand::End
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            ProgressBand::Early => "linear-gradient(90deg, #8b5cf6, #a855f7)",
            ProgressBand::Middle => "linear-gradient(90deg, #a855f7, #c084fc)",
            ProgressBand::Late => "linear-gradient(90deg, #c084fc, #a855f7)",
            ProgressBand::End => "linear-gradient(90deg, #a855f7, #8b5cf6)",
        }
    }
}

/// Header markers plus the same-direction travel used to debounce hiding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderState {
    pub scrolled: bool,
    pub hidden: bool,
    last_y: f64,
    travel: f64,
}

impl HeaderState {
    fn update(&mut self, y: f64, config: &NavConfig) {
        let delta = y - self.last_y;
        self.last_y = y;
        self.scrolled = y > config.scrolled_threshold;

        if delta == 0.0 {
            return;
        }
        if self.travel == 0.0 || self.travel.signum() == delta.signum() {
            self.travel += delta;
        } else {
            self.travel = delta;
        }

        if y <= config.hide_min_scroll {
            self.hidden = false;
        } else if self.travel > config.hide_noise_threshold {
            self.hidden = true;
        } else if self.travel < -config.hide_noise_threshold {
            self.hidden = false;
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationCoordinator {
    config: NavConfig,
    sections: Vec<SectionDescriptor>,
    metrics: ViewportMetrics,
    active: Option<SectionId>,
    header: HeaderState,
    band: Option<ProgressBand>,
    indicator_visible: bool,
    back_to_top_visible: bool,
    menu_open: bool,
}

impl NavigationCoordinator {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            sections: Vec::new(),
            metrics: ViewportMetrics::default(),
            active: None,
            header: HeaderState::default(),
            band: None,
            indicator_visible: false,
            back_to_top_visible: false,
            menu_open: false,
        }
    }

    /// Replace the known layout (startup and after a resize).
    pub fn set_layout(&mut self, metrics: ViewportMetrics, sections: Vec<SectionDescriptor>) {
        debug!(
            sections = sections.len(),
            document_height = metrics.document_height,
            "navigation layout updated"
        );
        self.metrics = metrics;
        self.sections = sections;
    }

    /// All per-tick effects of the window being at `scroll_y`.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Vec<DomCommand> {
        self.metrics.scroll_y = scroll_y;
        let mut cmds = Vec::new();

        let probe = scroll_y + self.config.active_probe_offset;
        if let Some(id) = resolve_section(&self.sections, probe).map(|s| s.id.clone()) {
            cmds.extend(self.activate(&id));
        }

        let percent = progress_percent(&self.metrics);
        cmds.push(DomCommand::style(
            Target::ProgressBar,
            StyleProp::Width,
            format!("{percent}%"),
        ));
        let band = ProgressBand::for_percent(percent);
        if self.band != Some(band) {
            self.band = Some(band);
            cmds.push(DomCommand::style(
                Target::ProgressBar,
                StyleProp::Background,
                band.gradient(),
            ));
        }

        let before = self.header;
        self.header.update(scroll_y, &self.config);
        if before.scrolled != self.header.scrolled {
            cmds.push(DomCommand::set_class(
                Target::Header,
                ClassToken::Scrolled,
                self.header.scrolled,
            ));
        }
        if before.hidden != self.header.hidden {
            cmds.push(DomCommand::set_class(
                Target::Header,
                ClassToken::NavHidden,
                self.header.hidden,
            ));
        }

        let indicator = scroll_y > self.config.indicator_threshold;
        if indicator != self.indicator_visible {
            self.indicator_visible = indicator;
            cmds.push(DomCommand::style(
                Target::SectionIndicator,
                StyleProp::Opacity,
                if indicator { "1" } else { "0" },
            ));
        }

        let back_to_top = scroll_y > self.config.back_to_top_threshold;
        if back_to_top != self.back_to_top_visible {
            self.back_to_top_visible = back_to_top;
            cmds.push(DomCommand::set_class(
                Target::ScrollTopButton,
                ClassToken::Visible,
                back_to_top,
            ));
        }

        cmds
    }

    /// Make `id` the active section: move the `active` marker between nav
    /// links, pulse the new link and relabel the indicator. Empty when `id`
    /// is already active.
    pub fn activate(&mut self, id: &SectionId) -> Vec<DomCommand> {
        if self.active.as_ref() == Some(id) {
            return Vec::new();
        }
        debug!(section = %id, "active section changed");
        let mut cmds = Vec::with_capacity(4);
        if let Some(previous) = self.active.replace(id.clone()) {
            cmds.push(DomCommand::remove_class(
                Target::NavLink(previous),
                ClassToken::Active,
            ));
        }
        cmds.push(DomCommand::add_class(
            Target::NavLink(id.clone()),
            ClassToken::Active,
        ));
        cmds.push(DomCommand::style(
            Target::NavLink(id.clone()),
            StyleProp::Transform,
            "scale(1.05)",
        ));
        cmds.push(DomCommand::text(Target::SectionIndicator, display_name(id)));
        cmds
    }

    /// Scroll offset that puts `id`'s top `offset` pixels below the window top.
    pub fn scroll_target(&self, id: &str, offset: f64) -> Result<f64, FolioError> {
        let section = self
            .section(id)
            .ok_or_else(|| FolioError::UnknownSection(id.to_string()))?;
        let target = (section.offset_top - offset).max(0.0);
        let max = self.metrics.max_scroll();
        Ok(if max > 0.0 { target.min(max) } else { target })
    }

    /// Section bound to digit key `key` (`'1'` is the first shortcut).
    pub fn shortcut(&self, key: char) -> Result<SectionId, FolioError> {
        key.to_digit(10)
            .filter(|d| *d >= 1)
            .and_then(|d| self.config.shortcuts.get(d as usize - 1))
            .cloned()
            .ok_or(FolioError::UnknownShortcut(key))
    }

    /// Flip the mobile menu. Returns the commands and whether it is now open.
    pub fn toggle_menu(&mut self) -> (Vec<DomCommand>, bool) {
        self.menu_open = !self.menu_open;
        let open = self.menu_open;
        (
            vec![
                DomCommand::set_class(Target::Hamburger, ClassToken::Active, open),
                DomCommand::set_class(Target::NavMenu, ClassToken::Active, open),
            ],
            open,
        )
    }

    pub fn close_menu(&mut self) -> Vec<DomCommand> {
        self.menu_open = false;
        vec![
            DomCommand::remove_class(Target::Hamburger, ClassToken::Active),
            DomCommand::remove_class(Target::NavMenu, ClassToken::Active),
        ]
    }

    pub fn section(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn header(&self) -> HeaderState {
        self.header
    }

    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::new("home", 0.0, 800.0),
            SectionDescriptor::new("about", 800.0, 600.0),
            SectionDescriptor::new("experience", 1400.0, 900.0),
            SectionDescriptor::new("contact", 2300.0, 700.0),
        ]
    }

    fn coordinator() -> NavigationCoordinator {
        let mut nav = NavigationCoordinator::new(NavConfig::default());
        nav.set_layout(ViewportMetrics::new(800.0, 3000.0, 0.0), layout());
        nav
    }

    #[test]
    fn top_of_page_is_first_section() {
        let mut nav = coordinator();
        nav.on_scroll(0.0);
        assert_eq!(nav.active().map(SectionId::as_str), Some("home"));
    }

    #[test]
    fn bottom_of_page_is_last_section() {
        let mut nav = coordinator();
        nav.on_scroll(2200.0);
        assert_eq!(nav.active().map(SectionId::as_str), Some("contact"));
    }

    #[test]
    fn overlapping_sections_prefer_lower_index() {
        let sections = vec![
            SectionDescriptor::new("a", 0.0, 500.0),
            SectionDescriptor::new("b", 400.0, 500.0),
        ];
        assert_eq!(resolve_section(&sections, 450.0).map(|s| s.id.as_str()), Some("a"));
    }

    #[test]
    fn gaps_resolve_to_nothing() {
        let sections = vec![
            SectionDescriptor::new("a", 0.0, 100.0),
            SectionDescriptor::new("b", 200.0, 100.0),
        ];
        assert!(resolve_section(&sections, 150.0).is_none());
        assert!(resolve_section(&[], 0.0).is_none());
    }

    #[test]
    fn progress_is_clamped_and_safe_for_short_documents() {
        let m = ViewportMetrics::new(800.0, 3000.0, 0.0);
        assert_eq!(progress_percent(&m.at(-40.0)), 0.0);
        assert!((progress_percent(&m.at(1100.0)) - 50.0).abs() < 1e-9);
        assert_eq!(progress_percent(&m.at(5000.0)), 100.0);
        assert_eq!(progress_percent(&ViewportMetrics::new(900.0, 600.0, 10.0)), 0.0);
    }

    #[test]
    fn active_link_moves_between_links() {
        let mut nav = coordinator();
        nav.on_scroll(0.0);
        let cmds = nav.on_scroll(900.0);
        assert!(cmds.contains(&DomCommand::remove_class(
            Target::NavLink("home".into()),
            ClassToken::Active
        )));
        assert!(cmds.contains(&DomCommand::add_class(
            Target::NavLink("about".into()),
            ClassToken::Active
        )));
        assert!(cmds.contains(&DomCommand::text(Target::SectionIndicator, "About Me")));
        assert!(nav.activate(&"about".into()).is_empty());
    }

    #[test]
    fn header_scrolled_marker_follows_threshold() {
        let mut nav = coordinator();
        let cmds = nav.on_scroll(60.0);
        assert!(cmds.contains(&DomCommand::add_class(Target::Header, ClassToken::Scrolled)));
        let cmds = nav.on_scroll(20.0);
        assert!(cmds.contains(&DomCommand::remove_class(Target::Header, ClassToken::Scrolled)));
    }

    #[test]
    fn header_ignores_jitter_then_hides_and_shows() {
        let mut nav = coordinator();
        nav.on_scroll(500.0);
        assert!(nav.header().hidden);

        // Small reversal below the noise threshold keeps it hidden.
        nav.on_scroll(495.0);
        assert!(nav.header().hidden);
        nav.on_scroll(500.0);
        assert!(nav.header().hidden);

        // Sustained upward travel shows it again.
        nav.on_scroll(494.0);
        nav.on_scroll(485.0);
        assert!(!nav.header().hidden);
    }

    #[test]
    fn header_never_hides_near_top() {
        let mut nav = coordinator();
        nav.on_scroll(100.0);
        assert!(!nav.header().hidden);
    }

    #[test]
    fn band_changes_emit_gradient_once() {
        let mut nav = coordinator();
        let first = nav.on_scroll(0.0);
        let repeat = nav.on_scroll(10.0);
        let count = |cmds: &[DomCommand]| {
            cmds.iter()
                .filter(|c| matches!(c, DomCommand::SetStyle { property: StyleProp::Background, .. }))
                .count()
        };
        assert_eq!(count(&first), 1);
        assert_eq!(count(&repeat), 0);
        assert_eq!(count(&nav.on_scroll(1800.0)), 1);
    }

    #[test]
    fn scroll_target_subtracts_header_offset() {
        let nav = coordinator();
        assert_eq!(nav.scroll_target("about", 60.0).unwrap(), 740.0);
        assert_eq!(nav.scroll_target("home", 60.0).unwrap(), 0.0);
        // Clamped to the reachable range.
        assert_eq!(nav.scroll_target("contact", 0.0).unwrap(), 2200.0);
        assert!(matches!(
            nav.scroll_target("blog", 60.0),
            Err(FolioError::UnknownSection(_))
        ));
    }

    #[test]
    fn digit_shortcuts() {
        let nav = coordinator();
        assert_eq!(nav.shortcut('3').unwrap(), "about");
        assert_eq!(nav.shortcut('1').unwrap(), "home");
        assert!(nav.shortcut('9').is_err());
        assert!(nav.shortcut('0').is_err());
        assert!(nav.shortcut('x').is_err());
    }

    #[test]
    fn menu_toggle_round_trip() {
        let mut nav = coordinator();
        let (cmds, open) = nav.toggle_menu();
        assert!(open);
        assert_eq!(cmds[0], DomCommand::add_class(Target::Hamburger, ClassToken::Active));
        let (_, open) = nav.toggle_menu();
        assert!(!open);
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn display_names() {
        assert_eq!(display_name("home"), "Introduction");
        assert_eq!(display_name("skills"), "Skills");
        assert_eq!(display_name(""), "");
    }
}
