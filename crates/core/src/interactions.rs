//! Hover and press feedback for buttons, cards, tags and nav links.
//!
//! Handlers are stateless apart from a per-card hover flag, which decides
//! whether a delayed small-item lift still applies when it comes due.

use std::collections::{HashMap, HashSet};

use folio_protocol::{DomCommand, NodeId, Part, Rect, SectionId, StyleProp, Target, Widget};

use crate::easing::Easing;

/// Element families that get micro-interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interactive {
    Button,
    Card,
    SkillTag,
    ProfileImage,
    NavLink,
}

impl Interactive {
    pub const ALL: [Interactive; 5] = [
        Interactive::Button,
        Interactive::Card,
        Interactive::SkillTag,
        Interactive::ProfileImage,
        Interactive::NavLink,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Interactive::Button => ".btn",
            Interactive::Card => ".overview-card, .skill-category, .timeline-content",
            Interactive::SkillTag => ".skill-tag",
            Interactive::ProfileImage => ".profile-image",
            Interactive::NavLink => ".nav-link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Enter,
    Leave,
    Down,
    Up,
}

/// Follow-up work for the coordinator's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionTask {
    LiftSmallItem { card: NodeId, index: usize },
    RemoveRipple(u64),
    EndFlash(NodeId),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionEffects {
    pub commands: Vec<DomCommand>,
    /// `(delay_ms, task)` pairs, relative to the triggering event.
    pub delayed: Vec<(f64, InteractionTask)>,
}

const SMALL_ITEM_STAGGER_MS: f64 = 30.0;
const RIPPLE_MS: f64 = 600.0;
const FLASH_MS: f64 = 150.0;

#[derive(Debug, Clone, Default)]
pub struct MicroInteractions {
    bindings: HashMap<NodeId, Interactive>,
    hovered: HashSet<NodeId>,
    next_ripple: u64,
}

impl MicroInteractions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `nodes` under `kind`. A node keeps its first binding.
    pub fn bind(&mut self, kind: Interactive, nodes: impl IntoIterator<Item = NodeId>) {
        for node in nodes {
            self.bindings.entry(node).or_insert(kind);
        }
    }

    pub fn kind_of(&self, node: NodeId) -> Option<Interactive> {
        self.bindings.get(&node).copied()
    }

    /// Every bound node, sorted, for the host to attach listeners to.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<_> = self.bindings.keys().copied().collect();
        nodes.sort();
        nodes
    }

    pub fn is_hovered(&self, node: NodeId) -> bool {
        self.hovered.contains(&node)
    }

    /// React to a pointer transition on `node`. `small_items` is the number
    /// of small inner elements of a card.
    pub fn pointer(
        &mut self,
        node: NodeId,
        action: PointerAction,
        small_items: usize,
    ) -> InteractionEffects {
        let Some(kind) = self.kind_of(node) else {
            return InteractionEffects::default();
        };
        let target = Target::Node(node);
        let mut fx = InteractionEffects::default();
        let cmds = &mut fx.commands;

        match (kind, action) {
            (Interactive::Button, PointerAction::Enter) => {
                cmds.push(style(&target, StyleProp::Transform, "translateY(-2px) scale(1.02)"));
                cmds.push(style(&target, StyleProp::Transition, Easing::STANDARD.transition_all(200.0)));
                cmds.push(style(&target, StyleProp::BoxShadow, "0 12px 40px rgba(139, 92, 246, 0.25)"));
            }
            (Interactive::Button, PointerAction::Leave) => {
                cmds.push(style(&target, StyleProp::Transform, "translateY(0) scale(1)"));
                cmds.push(DomCommand::clear_style(target, StyleProp::BoxShadow));
            }
            (Interactive::Button, PointerAction::Down) => {
                cmds.push(style(&target, StyleProp::Transform, "translateY(0) scale(0.98)"));
                cmds.push(style(&target, StyleProp::Transition, Easing::SHARP.transition_all(100.0)));
            }
            (Interactive::Button, PointerAction::Up) => {
                cmds.push(style(&target, StyleProp::Transform, "translateY(-2px) scale(1.02)"));
                cmds.push(style(&target, StyleProp::Transition, Easing::BOUNCE.transition_all(200.0)));
            }

            (Interactive::Card, PointerAction::Enter) => {
                self.hovered.insert(node);
                cmds.push(style(&target, StyleProp::Transform, "translateY(-12px)"));
                cmds.push(style(&target, StyleProp::BoxShadow, "0 25px 50px rgba(139, 92, 246, 0.2)"));
                cmds.push(style(&target, StyleProp::Transition, Easing::STANDARD.transition_all(400.0)));
                let icons = part(node, Part::Icon, None);
                cmds.push(style(&icons, StyleProp::Transform, "scale(1.15) rotate(10deg)"));
                cmds.push(style(&icons, StyleProp::Transition, Easing::BOUNCE.transition_all(300.0)));
                fx.delayed = (0..small_items)
                    .map(|index| {
                        (
                            index as f64 * SMALL_ITEM_STAGGER_MS,
                            InteractionTask::LiftSmallItem { card: node, index },
                        )
                    })
                    .collect();
            }
            (Interactive::Card, PointerAction::Leave) => {
                self.hovered.remove(&node);
                cmds.push(style(&target, StyleProp::Transform, "translateY(0)"));
                cmds.push(DomCommand::clear_style(target, StyleProp::BoxShadow));
                for p in [Part::Icon, Part::SmallItem] {
                    let all = part(node, p, None);
                    cmds.push(DomCommand::clear_style(all.clone(), StyleProp::Transform));
                    cmds.push(style(&all, StyleProp::Transition, Easing::STANDARD.transition_all(300.0)));
                }
            }

            (Interactive::SkillTag, PointerAction::Enter) => {
                cmds.push(style(&target, StyleProp::Transform, "translateY(-3px) scale(1.05)"));
            }
            (Interactive::SkillTag, PointerAction::Leave) => {
                cmds.push(style(&target, StyleProp::Transform, "translateY(0) scale(1)"));
            }

            (Interactive::ProfileImage, PointerAction::Enter) => {
                cmds.push(style(&target, StyleProp::Transform, "scale(1.03)"));
                cmds.push(style(
                    &target,
                    StyleProp::Transition,
                    format!("transform 0.4s {}", Easing::DECELERATE.to_css()),
                ));
            }
            (Interactive::ProfileImage, PointerAction::Leave) => {
                cmds.push(style(&target, StyleProp::Transform, "scale(1)"));
            }

            (Interactive::NavLink, PointerAction::Enter) => {
                cmds.push(style(&target, StyleProp::Transform, "translateY(-1px)"));
                cmds.push(style(&target, StyleProp::Transition, Easing::STANDARD.transition_all(200.0)));
            }
            (Interactive::NavLink, PointerAction::Leave) => {
                cmds.push(style(&target, StyleProp::Transform, "translateY(0)"));
            }

            _ => {}
        }
        fx
    }

    /// Expanding ripple inside a clicked nav link, centred on its box.
    pub fn ripple(&mut self, parent: NodeId, rect: Rect) -> InteractionEffects {
        self.next_ripple += 1;
        let id = self.next_ripple;
        let size = rect.w.max(rect.h);
        InteractionEffects {
            commands: vec![DomCommand::Mount(Widget::Ripple {
                id,
                parent,
                size,
                left: rect.w / 2.0 - size / 2.0,
                top: rect.h / 2.0 - size / 2.0,
            })],
            delayed: vec![(RIPPLE_MS, InteractionTask::RemoveRipple(id))],
        }
    }

    /// Brief press-down of an overview card that was clicked.
    pub fn flash(&self, card: NodeId) -> InteractionEffects {
        InteractionEffects {
            commands: vec![DomCommand::style(
                Target::Node(card),
                StyleProp::Transform,
                "scale(0.98)",
            )],
            delayed: vec![(FLASH_MS, InteractionTask::EndFlash(card))],
        }
    }

    pub fn run(&self, task: InteractionTask) -> Vec<DomCommand> {
        match task {
            InteractionTask::LiftSmallItem { card, index } => {
                if !self.is_hovered(card) {
                    return Vec::new();
                }
                let item = part(card, Part::SmallItem, Some(index));
                vec![
                    style(&item, StyleProp::Transform, "translateY(-2px) scale(1.05)"),
                    style(&item, StyleProp::Transition, Easing::STANDARD.transition_all(200.0)),
                ]
            }
            InteractionTask::RemoveRipple(id) => vec![DomCommand::Remove {
                target: Target::Ripple(id),
            }],
            InteractionTask::EndFlash(card) => {
                vec![DomCommand::clear_style(Target::Node(card), StyleProp::Transform)]
            }
        }
    }
}

/// Show or hide the tooltip under a nav link.
pub fn preview(section: &SectionId, visible: bool) -> Vec<DomCommand> {
    let target = Target::NavPreview(section.clone());
    let (opacity, transform) = if visible {
        ("1", "translateX(-50%) translateY(0)")
    } else {
        ("0", "translateX(-50%) translateY(-5px)")
    };
    vec![
        DomCommand::style(target.clone(), StyleProp::Opacity, opacity),
        DomCommand::style(target, StyleProp::Transform, transform),
    ]
}

/// Tooltip text for a nav link.
pub fn preview_text(section: &str) -> &'static str {
    match section {
        "home" => "Introduction & welcome",
        "overview" => "Professional overview dashboard",
        "about" => "Professional summary",
        "experience" => "Career history & achievements",
        "skills" => "Technical expertise",
        "projects" => "Research & development portfolio",
        "education" => "Academic background",
        "contact" => "Get in touch",
        _ => "Explore this section",
    }
}

fn style(target: &Target, property: StyleProp, value: impl Into<String>) -> DomCommand {
    DomCommand::style(target.clone(), property, value)
}

fn part(of: NodeId, part: Part, index: Option<usize>) -> Target {
    Target::Part { of, part, index }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound() -> MicroInteractions {
        let mut mi = MicroInteractions::new();
        mi.bind(Interactive::Button, [NodeId(1)]);
        mi.bind(Interactive::Card, [NodeId(2), NodeId(3)]);
        mi.bind(Interactive::NavLink, [NodeId(4)]);
        mi
    }

    #[test]
    fn first_binding_wins() {
        let mut mi = bound();
        mi.bind(Interactive::SkillTag, [NodeId(1)]);
        assert_eq!(mi.kind_of(NodeId(1)), Some(Interactive::Button));
        assert_eq!(mi.nodes(), [NodeId(1), NodeId(2), NodeId(3), NodeId(4)]);
    }

    #[test]
    fn unbound_nodes_do_nothing() {
        let mut mi = bound();
        assert_eq!(
            mi.pointer(NodeId(42), PointerAction::Enter, 0),
            InteractionEffects::default()
        );
    }

    #[test]
    fn card_hover_staggers_small_items() {
        let mut mi = bound();
        let fx = mi.pointer(NodeId(2), PointerAction::Enter, 3);
        let delays: Vec<_> = fx.delayed.iter().map(|(d, _)| *d).collect();
        assert_eq!(delays, [0.0, 30.0, 60.0]);
        assert!(mi.is_hovered(NodeId(2)));

        let lift = mi.run(fx.delayed[1].1);
        assert_eq!(lift.len(), 2);
        assert_eq!(
            lift[0].target(),
            Some(&Target::Part {
                of: NodeId(2),
                part: Part::SmallItem,
                index: Some(1)
            })
        );
    }

    #[test]
    fn lift_after_leave_is_dropped() {
        let mut mi = bound();
        let fx = mi.pointer(NodeId(3), PointerAction::Enter, 2);
        mi.pointer(NodeId(3), PointerAction::Leave, 2);
        assert!(mi.run(fx.delayed[1].1).is_empty());
    }

    #[test]
    fn ripple_is_square_and_centred() {
        let mut mi = bound();
        let fx = mi.ripple(NodeId(4), Rect::new(0.0, 0.0, 80.0, 30.0));
        assert_eq!(
            fx.commands[0],
            DomCommand::Mount(Widget::Ripple {
                id: 1,
                parent: NodeId(4),
                size: 80.0,
                left: 0.0,
                top: -25.0,
            })
        );
        assert_eq!(fx.delayed, [(600.0, InteractionTask::RemoveRipple(1))]);
        let next = mi.ripple(NodeId(4), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(next.delayed[0].1, InteractionTask::RemoveRipple(2));
    }

    #[test]
    fn flash_resets_after_delay() {
        let mi = bound();
        let fx = mi.flash(NodeId(2));
        assert_eq!(fx.delayed, [(150.0, InteractionTask::EndFlash(NodeId(2)))]);
        assert_eq!(
            mi.run(InteractionTask::EndFlash(NodeId(2))),
            [DomCommand::clear_style(Target::Node(NodeId(2)), StyleProp::Transform)]
        );
    }

    #[test]
    fn button_press_cycle() {
        let mut mi = bound();
        for action in [
            PointerAction::Enter,
            PointerAction::Down,
            PointerAction::Up,
            PointerAction::Leave,
        ] {
            assert!(!mi.pointer(NodeId(1), action, 0).commands.is_empty());
        }
    }

    #[test]
    fn previews_fall_back_to_generic_text() {
        assert_eq!(preview_text("about"), "Professional summary");
        assert_eq!(preview_text("blog"), "Explore this section");
    }
}
