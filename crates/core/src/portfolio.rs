//! The page coordinator.
//!
//! `Portfolio` owns every piece of transient page state and is the only
//! thing the host talks to: it feeds in events and clock readings, and
//! applies the `DomCommand`s that come back. All delayed effects live in one
//! [`Timeline`] that the host drains through [`Portfolio::pump`].

use folio_protocol::{
    ClassToken, DomCommand, NodeId, Part, SectionId, StyleProp, Stylesheet, Target, Widget,
};
use tracing::{debug, info, warn};

use crate::config::FolioConfig;
use crate::easing::Easing;
use crate::easter_egg::{KonamiTracker, RAINBOW_ANIMATION, RAINBOW_MS};
use crate::error::FolioError;
use crate::host::{PageEvent, PageHost};
use crate::input::KeyPress;
use crate::interactions::{
    self, InteractionEffects, InteractionTask, Interactive, MicroInteractions, PointerAction,
};
use crate::modal::{ModalEffects, ModalSequencer, ModalTask};
use crate::nav::NavigationCoordinator;
use crate::rate::{Debounce, DebounceTicket, Throttle};
use crate::reveal::{RevealEngine, StaggeredReveal};
use crate::schedule::Timeline;
use crate::scroll::{ScrollAnimator, ScrollFrame};
use crate::typing::TypingEffect;

pub const KEYBOARD_HINT_TEXT: &str = "Press 1-8 for quick navigation";

const HINT_FADE_IN_MS: f64 = 100.0;
const MENU_LINK_OFFSET: &str = "translateY(-15px)";
const SCROLL_HINT_ANIMATION: &str = "pulse-subtle 3s ease-in-out infinite";

type InitStep = fn(&mut Portfolio, f64, &dyn PageHost) -> Result<Vec<DomCommand>, FolioError>;

#[derive(Debug, Clone, PartialEq)]
enum Task {
    Reveal(NodeId),
    Sweep,
    NavigationComplete,
    EndLinkPulse(SectionId),
    MenuLinkIn(SectionId),
    Typing,
    Modal(ModalTask),
    Interaction(InteractionTask),
    ArmHints,
    ShowHints(u64),
    HideHints(u64),
    RemoveHints(u64),
    Resize(DebounceTicket),
    ScrollIdle(DebounceTicket),
    EndRainbow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hints {
    generation: u64,
    hiding: bool,
}

#[derive(Debug)]
pub struct Portfolio {
    config: FolioConfig,
    nav: NavigationCoordinator,
    reveal: RevealEngine,
    scroll: ScrollAnimator,
    typing: Option<TypingEffect>,
    modal: ModalSequencer,
    interactions: MicroInteractions,
    konami: KonamiTracker,
    timeline: Timeline<Task>,
    scroll_throttle: Throttle,
    sweep_throttle: Throttle,
    hints_throttle: Throttle,
    resize: Debounce,
    scroll_idle: Debounce,
    /// Nav links in document order with the section they point at.
    nav_links: Vec<(NodeId, SectionId)>,
    reduced_motion: bool,
    scrolling: bool,
    hints_armed: bool,
    hints: Option<Hints>,
    hints_issued: u64,
}

impl Portfolio {
    pub fn new(config: FolioConfig) -> Self {
        let nav_cfg = &config.nav;
        Self {
            nav: NavigationCoordinator::new(nav_cfg.clone()),
            reveal: RevealEngine::new(&config.reveal),
            scroll: ScrollAnimator::new(),
            typing: None,
            modal: ModalSequencer::new(config.modal.clone()),
            interactions: MicroInteractions::new(),
            konami: KonamiTracker::new(),
            timeline: Timeline::new(),
            scroll_throttle: Throttle::new(nav_cfg.scroll_throttle_ms),
            sweep_throttle: Throttle::new(nav_cfg.backup_sweep_throttle_ms),
            hints_throttle: Throttle::new(nav_cfg.hints_throttle_ms),
            resize: Debounce::new(nav_cfg.resize_debounce_ms),
            scroll_idle: Debounce::new(nav_cfg.scroll_idle_ms),
            nav_links: Vec::new(),
            reduced_motion: false,
            scrolling: false,
            hints_armed: false,
            hints: None,
            hints_issued: 0,
            config,
        }
    }

    /// Discover the page and build the initial DOM state.
    ///
    /// Each component initializes on its own; one that cannot find what it
    /// needs is logged and skipped while the rest carry on.
    pub fn init(&mut self, now: f64, host: &impl PageHost) -> Vec<DomCommand> {
        let mut cmds = vec![
            DomCommand::style(Target::Body, StyleProp::Opacity, "1"),
            DomCommand::style(Target::Body, StyleProp::Transform, "translateY(0)"),
            DomCommand::Mount(Widget::Stylesheet(Stylesheet::Keyframes)),
            DomCommand::Mount(Widget::Stylesheet(Stylesheet::ScrollPerformance)),
        ];
        self.reduced_motion = host.prefers_reduced_motion();
        if self.reduced_motion {
            info!("reduced motion requested; collapsing animations");
            cmds.push(DomCommand::Mount(Widget::Stylesheet(Stylesheet::ReducedMotion)));
        }
        for node in host.query_all(".scroll-indicator") {
            cmds.push(DomCommand::style(
                Target::Node(node),
                StyleProp::Animation,
                SCROLL_HINT_ANIMATION,
            ));
        }

        let steps: [(&str, InitStep); 5] = [
            ("navigation", Self::init_navigation),
            ("reveal", Self::init_reveal),
            ("typing", Self::init_typing),
            ("previews", Self::init_previews),
            ("interactions", Self::init_interactions),
        ];
        for (name, step) in steps {
            match step(self, now, host) {
                Ok(more) => cmds.extend(more),
                Err(err) => warn!(component = name, %err, "component disabled"),
            }
        }

        let metrics = host.metrics();
        cmds.extend(self.on_scroll_tick(now, metrics.scroll_y));
        self.timeline
            .schedule(now + self.config.nav.hints_start_ms, Task::ArmHints);
        if host.location_hash().is_some() {
            self.timeline
                .schedule(now + self.config.nav.hash_sweep_ms, Task::NavigationComplete);
        }

        info!(
            sections = self.nav.sections().len(),
            reveal_targets = self.reveal.len(),
            interactive = self.interactions.nodes().len(),
            "portfolio initialized"
        );
        cmds
    }

    fn init_navigation(
        &mut self,
        _now: f64,
        host: &dyn PageHost,
    ) -> Result<Vec<DomCommand>, FolioError> {
        let sections = host.sections();
        if sections.is_empty() {
            return Err(FolioError::MissingElement("section[id]".into()));
        }
        self.nav.set_layout(host.metrics(), sections);
        Ok(vec![
            DomCommand::Mount(Widget::ProgressBar),
            DomCommand::Mount(Widget::SectionIndicator),
            DomCommand::Mount(Widget::ScrollTopButton),
        ])
    }

    fn init_reveal(
        &mut self,
        now: f64,
        host: &dyn PageHost,
    ) -> Result<Vec<DomCommand>, FolioError> {
        for (rule_index, rule) in self.config.reveal.rules.iter().enumerate() {
            let nodes = host.query_all(&rule.selector);
            debug!(selector = %rule.selector, count = nodes.len(), "reveal rule");
            for (rank, node) in nodes.into_iter().enumerate() {
                self.reveal
                    .track(node, rule.kind, rule_index, rank, host.sibling_index(node));
            }
        }
        for delay in &self.config.nav.initial_sweeps_ms {
            self.timeline.schedule(now + delay, Task::Sweep);
        }
        Ok(self.reveal.setup_commands())
    }

    fn init_typing(
        &mut self,
        now: f64,
        host: &dyn PageHost,
    ) -> Result<Vec<DomCommand>, FolioError> {
        if host.query_all(".hero-subtitle").is_empty() {
            return Err(FolioError::MissingElement(".hero-subtitle".into()));
        }
        let typing = TypingEffect::new(self.config.typing.clone());
        self.timeline
            .schedule(now + typing.start_delay_ms(), Task::Typing);
        self.typing = Some(typing);
        Ok(vec![DomCommand::Mount(Widget::TypingText)])
    }

    fn init_previews(
        &mut self,
        _now: f64,
        host: &dyn PageHost,
    ) -> Result<Vec<DomCommand>, FolioError> {
        let links = host.query_all(".nav-link");
        if links.is_empty() {
            return Err(FolioError::MissingElement(".nav-link".into()));
        }
        let mut cmds = Vec::new();
        for node in links {
            let Some(section) = host.anchor_of(node) else {
                continue;
            };
            if self.nav.section(&section).is_none() {
                continue;
            }
            cmds.push(DomCommand::Mount(Widget::NavPreview {
                text: interactions::preview_text(&section).to_string(),
                section: section.clone(),
            }));
            self.nav_links.push((node, section));
        }
        Ok(cmds)
    }

    fn init_interactions(
        &mut self,
        _now: f64,
        host: &dyn PageHost,
    ) -> Result<Vec<DomCommand>, FolioError> {
        for kind in Interactive::ALL {
            self.interactions.bind(kind, host.query_all(kind.selector()));
        }
        Ok(Vec::new())
    }

    /// React to one host event. Tasks that fall due immediately are run
    /// before returning.
    pub fn handle(&mut self, now: f64, event: PageEvent, host: &impl PageHost) -> Vec<DomCommand> {
        let mut cmds = Vec::new();
        match event {
            PageEvent::Scroll => cmds.extend(self.on_scroll_event(now, host)),
            PageEvent::Resize => {
                let (ticket, due) = self.resize.call(now);
                self.timeline.schedule(due, Task::Resize(ticket));
            }
            PageEvent::HashChange => self.timeline.schedule(now, Task::NavigationComplete),
            PageEvent::NavLinkClick(node) => {
                if let Some(rect) = host.rect(node) {
                    let fx = self.interactions.ripple(node, rect);
                    cmds.extend(self.apply_interaction(now, fx));
                }
                if self.nav.is_menu_open() {
                    cmds.extend(self.nav.close_menu());
                }
                match host.anchor_of(node) {
                    Some(section) => {
                        cmds.extend(self.navigate(now, &section, self.config.scroll.link_offset, host));
                    }
                    None => debug!(node = node.0, "nav link without a section anchor"),
                }
            }
            PageEvent::OverviewCardClick(node) => {
                if let Some(section) = host.anchor_of(node)
                    && self.nav.section(&section).is_some()
                {
                    let fx = self.interactions.flash(node);
                    cmds.extend(self.apply_interaction(now, fx));
                    cmds.extend(self.navigate(now, &section, self.config.scroll.link_offset, host));
                }
            }
            PageEvent::WipClick => {
                let effects = self.modal.trigger(now);
                let current = self.modal.generation();
                self.timeline
                    .retain(|t| !matches!(t, Task::Modal(m) if m.generation != current));
                cmds.extend(self.apply_modal(effects));
            }
            PageEvent::HamburgerClick => cmds.extend(self.toggle_menu(now)),
            PageEvent::ScrollIndicatorClick => {
                let target = ["about", "experience"]
                    .into_iter()
                    .find_map(|id| self.nav.scroll_target(id, self.config.scroll.link_offset).ok());
                if let Some(y) = target {
                    let duration = self.config.scroll.indicator_duration_ms;
                    cmds.extend(self.smooth_scroll(now, host.metrics().scroll_y, y, duration));
                }
            }
            PageEvent::ScrollTopClick => {
                let duration = self.config.scroll.duration_ms;
                cmds.extend(self.smooth_scroll(now, host.metrics().scroll_y, 0.0, duration));
            }
            PageEvent::Key(press) => cmds.extend(self.on_key(now, press, host)),
            PageEvent::Intersection {
                node,
                is_intersecting,
                ratio,
            } => {
                let outcome = self.reveal.on_intersection(node, is_intersecting, ratio);
                if let Some(reveal) = outcome.reveal {
                    self.schedule_reveal(now, reveal);
                }
            }
            PageEvent::Pointer { node, action } => cmds.extend(self.on_pointer(now, node, action, host)),
        }
        cmds.extend(self.pump(now, host));
        cmds
    }

    /// Run every task due at `now`, earliest first.
    pub fn pump(&mut self, now: f64, host: &impl PageHost) -> Vec<DomCommand> {
        let mut cmds = Vec::new();
        while let Some(task) = self.timeline.pop_due(now) {
            cmds.extend(self.run_task(now, task, host));
        }
        cmds
    }

    /// Deadline of the earliest queued task.
    pub fn next_wake(&self) -> Option<f64> {
        self.timeline.next_deadline()
    }

    /// Advance the smooth scroll in flight.
    pub fn frame(&mut self, now: f64) -> Vec<DomCommand> {
        match self.scroll.frame(now) {
            ScrollFrame::Moving(y) | ScrollFrame::Arrived(y) => vec![DomCommand::ScrollTo { y }],
            ScrollFrame::Idle => Vec::new(),
        }
    }

    pub fn wants_frame(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Reveal whatever is currently on screen, regardless of observer reports.
    pub fn force_reveal(&mut self, now: f64, host: &impl PageHost) -> Vec<DomCommand> {
        self.sweep(now, host);
        self.pump(now, host)
    }

    /// Reveal every tracked element that is still hidden.
    pub fn reveal_all(&mut self, now: f64) -> Vec<DomCommand> {
        let mut cmds = Vec::new();
        for reveal in self.reveal.reveal_all() {
            if reveal.delay_ms <= 0.0 {
                cmds.push(reveal.command());
            } else {
                self.schedule_reveal(now, reveal);
            }
        }
        cmds
    }

    /// Elements the host's intersection observer should watch.
    pub fn observed(&self) -> Vec<NodeId> {
        self.reveal.observed().collect()
    }

    pub fn is_observing(&self, node: NodeId) -> bool {
        self.reveal.is_observed(node)
    }

    /// Elements the host should report pointer transitions for.
    pub fn interactive_nodes(&self) -> Vec<NodeId> {
        self.interactions.nodes()
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn nav(&self) -> &NavigationCoordinator {
        &self.nav
    }

    pub fn reveal(&self) -> &RevealEngine {
        &self.reveal
    }

    pub fn typing(&self) -> Option<&TypingEffect> {
        self.typing.as_ref()
    }

    pub fn modal(&self) -> &ModalSequencer {
        &self.modal
    }

    pub fn pending_tasks(&self) -> usize {
        self.timeline.len()
    }

    fn on_scroll_event(&mut self, now: f64, host: &impl PageHost) -> Vec<DomCommand> {
        let mut cmds = Vec::new();
        if !self.scrolling {
            self.scrolling = true;
            cmds.push(DomCommand::add_class(Target::Body, ClassToken::IsScrolling));
        }
        let (ticket, due) = self.scroll_idle.call(now);
        self.timeline.schedule(due, Task::ScrollIdle(ticket));

        let scroll_y = host.metrics().scroll_y;
        if self.scroll_throttle.admit(now) {
            cmds.extend(self.on_scroll_tick(now, scroll_y));
        }
        if self.sweep_throttle.admit(now) {
            self.sweep(now, host);
        }
        if self.hints_armed && self.hints_throttle.admit(now) {
            cmds.extend(self.update_hints(now, scroll_y));
        }
        cmds
    }

    fn on_scroll_tick(&mut self, now: f64, scroll_y: f64) -> Vec<DomCommand> {
        let before = self.nav.active().cloned();
        let cmds = self.nav.on_scroll(scroll_y);
        self.after_activation(now, before);
        cmds
    }

    /// Queue the link pulse reset if the active section just changed.
    fn after_activation(&mut self, now: f64, before: Option<SectionId>) {
        if let Some(active) = self.nav.active()
            && before.as_ref() != Some(active)
        {
            self.timeline.schedule(
                now + self.config.nav.link_pulse_ms,
                Task::EndLinkPulse(active.clone()),
            );
        }
    }

    fn navigate(
        &mut self,
        now: f64,
        section: &SectionId,
        offset: f64,
        host: &impl PageHost,
    ) -> Vec<DomCommand> {
        let target = match self.nav.scroll_target(section, offset) {
            Ok(y) => y,
            Err(err) => {
                warn!(%err, "navigation ignored");
                return Vec::new();
            }
        };
        debug!(%section, target, "navigating");
        let duration = self.config.scroll.duration_ms;
        let mut cmds = self.smooth_scroll(now, host.metrics().scroll_y, target, duration);

        let before = self.nav.active().cloned();
        cmds.extend(self.nav.activate(section));
        self.after_activation(now, before);

        cmds.push(DomCommand::PushHistory {
            section: section.clone(),
        });
        self.timeline.schedule(
            now + self.config.nav.settle_delay_ms,
            Task::NavigationComplete,
        );
        cmds
    }

    fn smooth_scroll(&mut self, now: f64, from: f64, to: f64, duration_ms: f64) -> Vec<DomCommand> {
        if self.reduced_motion {
            self.scroll.cancel();
            return vec![DomCommand::ScrollTo { y: to }];
        }
        self.scroll
            .start(from, to, now, duration_ms, self.config.scroll.easing);
        Vec::new()
    }

    fn toggle_menu(&mut self, now: f64) -> Vec<DomCommand> {
        let (mut cmds, open) = self.nav.toggle_menu();
        if open {
            let stagger = self.config.nav.menu_stagger_ms;
            for (index, (_, section)) in self.nav_links.iter().enumerate() {
                let link = Target::NavLink(section.clone());
                cmds.push(DomCommand::style(link.clone(), StyleProp::Transform, MENU_LINK_OFFSET));
                cmds.push(DomCommand::style(link, StyleProp::Opacity, "0"));
                self.timeline
                    .schedule(now + index as f64 * stagger, Task::MenuLinkIn(section.clone()));
            }
        }
        cmds
    }

    fn on_key(&mut self, now: f64, press: KeyPress, host: &impl PageHost) -> Vec<DomCommand> {
        let mut cmds = Vec::new();
        if self.konami.feed(press.key) {
            info!("konami code entered");
            cmds.push(DomCommand::style(Target::Body, StyleProp::Animation, RAINBOW_ANIMATION));
            self.timeline.schedule(now + RAINBOW_MS, Task::EndRainbow);
        }
        if press.in_text_field {
            return cmds;
        }
        if let Some(digit) = press.key.digit() {
            match self.nav.shortcut(digit) {
                Ok(section) => {
                    let offset = self.config.scroll.keyboard_offset;
                    cmds.extend(self.navigate(now, &section, offset, host));
                }
                Err(err) => debug!(%err, "shortcut ignored"),
            }
        }
        cmds
    }

    fn on_pointer(
        &mut self,
        now: f64,
        node: NodeId,
        action: PointerAction,
        host: &impl PageHost,
    ) -> Vec<DomCommand> {
        let Some(kind) = self.interactions.kind_of(node) else {
            return Vec::new();
        };
        let small_items = if kind == Interactive::Card && action == PointerAction::Enter {
            host.part_count(node, Part::SmallItem)
        } else {
            0
        };
        let fx = self.interactions.pointer(node, action, small_items);
        let mut cmds = self.apply_interaction(now, fx);
        if kind == Interactive::NavLink
            && matches!(action, PointerAction::Enter | PointerAction::Leave)
            && let Some((_, section)) = self.nav_links.iter().find(|(n, _)| *n == node)
        {
            cmds.extend(interactions::preview(section, action == PointerAction::Enter));
        }
        cmds
    }

    fn update_hints(&mut self, now: f64, scroll_y: f64) -> Vec<DomCommand> {
        if scroll_y > self.config.nav.hints_threshold {
            self.show_hints(now)
        } else {
            self.hide_hints(now)
        }
    }

    fn show_hints(&mut self, now: f64) -> Vec<DomCommand> {
        if self.hints.is_some() {
            return Vec::new();
        }
        self.hints_issued += 1;
        let generation = self.hints_issued;
        self.hints = Some(Hints {
            generation,
            hiding: false,
        });
        self.timeline
            .schedule(now + HINT_FADE_IN_MS, Task::ShowHints(generation));
        self.timeline.schedule(
            now + self.config.nav.hints_visible_ms,
            Task::HideHints(generation),
        );
        vec![DomCommand::Mount(Widget::KeyboardHints {
            text: KEYBOARD_HINT_TEXT.into(),
        })]
    }

    fn hide_hints(&mut self, now: f64) -> Vec<DomCommand> {
        let Some(hints) = self.hints.as_mut() else {
            return Vec::new();
        };
        if hints.hiding {
            return Vec::new();
        }
        hints.hiding = true;
        let generation = hints.generation;
        self.timeline.schedule(
            now + self.config.nav.hints_fade_ms,
            Task::RemoveHints(generation),
        );
        vec![DomCommand::style(Target::KeyboardHints, StyleProp::Opacity, "0")]
    }

    fn current_hints(&self, generation: u64) -> bool {
        self.hints.is_some_and(|h| h.generation == generation)
    }

    fn sweep(&mut self, now: f64, host: &impl PageHost) {
        let window_height = host.metrics().window_height;
        let reveals = self.reveal.force_sweep(window_height, |node| host.rect(node));
        for reveal in reveals {
            self.schedule_reveal(now, reveal);
        }
    }

    fn schedule_reveal(&mut self, now: f64, reveal: StaggeredReveal) {
        self.timeline
            .schedule(now + reveal.delay_ms, Task::Reveal(reveal.node));
    }

    fn apply_interaction(&mut self, now: f64, fx: InteractionEffects) -> Vec<DomCommand> {
        for (delay, task) in fx.delayed {
            self.timeline.schedule(now + delay, Task::Interaction(task));
        }
        fx.commands
    }

    fn apply_modal(&mut self, effects: ModalEffects) -> Vec<DomCommand> {
        for (due, task) in effects.schedule {
            self.timeline.schedule(due, Task::Modal(task));
        }
        effects.commands
    }

    fn run_task(&mut self, now: f64, task: Task, host: &impl PageHost) -> Vec<DomCommand> {
        match task {
            Task::Reveal(node) => {
                vec![DomCommand::add_class(Target::Node(node), ClassToken::Animate)]
            }
            Task::Sweep => {
                self.sweep(now, host);
                Vec::new()
            }
            Task::NavigationComplete => {
                debug!("navigation complete; scheduling sweeps");
                for delay in &self.config.nav.settle_sweeps_ms {
                    self.timeline.schedule(now + delay, Task::Sweep);
                }
                Vec::new()
            }
            Task::EndLinkPulse(section) => vec![DomCommand::style(
                Target::NavLink(section),
                StyleProp::Transform,
                "scale(1)",
            )],
            Task::MenuLinkIn(section) => {
                let link = Target::NavLink(section);
                vec![
                    DomCommand::style(
                        link.clone(),
                        StyleProp::Transition,
                        format!("all 0.25s {}", Easing::DECELERATE.to_css()),
                    ),
                    DomCommand::style(link.clone(), StyleProp::Transform, "translateY(0)"),
                    DomCommand::style(link, StyleProp::Opacity, "1"),
                ]
            }
            Task::Typing => {
                let Some(typing) = self.typing.as_mut() else {
                    return Vec::new();
                };
                let step = typing.tick(host.random());
                self.timeline.schedule(now + step.delay_ms, Task::Typing);
                step.text
                    .map(|text| vec![DomCommand::text(Target::Subtitle, text)])
                    .unwrap_or_default()
            }
            Task::Modal(task) => {
                let effects = self.modal.run(task, now);
                self.apply_modal(effects)
            }
            Task::Interaction(task) => self.interactions.run(task),
            Task::ArmHints => {
                self.hints_armed = true;
                if host.metrics().scroll_y > self.config.nav.hints_threshold {
                    self.show_hints(now)
                } else {
                    Vec::new()
                }
            }
            Task::ShowHints(generation) => {
                if self.current_hints(generation) {
                    vec![DomCommand::style(Target::KeyboardHints, StyleProp::Opacity, "1")]
                } else {
                    Vec::new()
                }
            }
            Task::HideHints(generation) => {
                if self.current_hints(generation) {
                    self.hide_hints(now)
                } else {
                    Vec::new()
                }
            }
            Task::RemoveHints(generation) => {
                if self.current_hints(generation) {
                    self.hints = None;
                    vec![DomCommand::Remove {
                        target: Target::KeyboardHints,
                    }]
                } else {
                    Vec::new()
                }
            }
            Task::Resize(ticket) => {
                if self.resize.fire(ticket) {
                    debug!("resize settled; rediscovering sections");
                    self.nav.set_layout(host.metrics(), host.sections());
                }
                Vec::new()
            }
            Task::ScrollIdle(ticket) => {
                if self.scroll_idle.fire(ticket) {
                    self.scrolling = false;
                    vec![DomCommand::remove_class(Target::Body, ClassToken::IsScrolling)]
                } else {
                    Vec::new()
                }
            }
            Task::EndRainbow => vec![DomCommand::clear_style(Target::Body, StyleProp::Animation)],
        }
    }
}
