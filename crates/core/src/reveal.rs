//! One-shot reveal animations for content blocks.
//!
//! Every tracked element moves from hidden to revealed exactly once. Two
//! paths lead there: intersection reports from the host's observer, and a
//! force sweep that measures bounding boxes directly (intersection reports
//! are unreliable while the page is scrolled programmatically). Elements
//! that were absent when the engine was built are never tracked.

use folio_protocol::{ClassToken, DomCommand, NodeId, Rect, RevealKind, Target};
use tracing::debug;

use crate::config::RevealConfig;

/// A reveal that should be applied after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggeredReveal {
    pub node: NodeId,
    pub delay_ms: f64,
}

impl StaggeredReveal {
    pub fn command(&self) -> DomCommand {
        DomCommand::add_class(Target::Node(self.node), ClassToken::Animate)
    }
}

#[derive(Debug, Clone)]
struct Tracked {
    node: NodeId,
    kind: RevealKind,
    /// Index of the rule whose selector matched.
    rule: usize,
    /// Position within that rule's matches (document order).
    rank: usize,
    /// Position among the parent's children.
    sibling_index: usize,
    revealed: bool,
    observed: bool,
}

/// What the host should do in response to one intersection report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntersectionOutcome {
    /// Stop observing the element.
    pub unobserve: bool,
    pub reveal: Option<StaggeredReveal>,
}

#[derive(Debug, Clone)]
pub struct RevealEngine {
    tracked: Vec<Tracked>,
    threshold: f64,
    sibling_stagger_ms: f64,
    sweep_stagger_ms: f64,
    reveal_all_stagger_ms: f64,
}

impl RevealEngine {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            tracked: Vec::new(),
            threshold: config.threshold,
            sibling_stagger_ms: config.sibling_stagger_ms,
            sweep_stagger_ms: config.sweep_stagger_ms,
            reveal_all_stagger_ms: config.reveal_all_stagger_ms,
        }
    }

    /// Start tracking `node`. A node already tracked under an earlier rule
    /// keeps its first registration. Returns whether it was newly tracked.
    pub fn track(
        &mut self,
        node: NodeId,
        kind: RevealKind,
        rule: usize,
        rank: usize,
        sibling_index: usize,
    ) -> bool {
        if self.position(node).is_some() {
            return false;
        }
        self.tracked.push(Tracked {
            node,
            kind,
            rule,
            rank,
            sibling_index,
            revealed: false,
            observed: true,
        });
        true
    }

    /// Reveal-kind classes to apply at startup, one per tracked element.
    pub fn setup_commands(&self) -> Vec<DomCommand> {
        self.tracked
            .iter()
            .map(|t| DomCommand::add_class(Target::Node(t.node), ClassToken::Reveal(t.kind)))
            .collect()
    }

    /// Nodes the host's intersection observer should watch.
    pub fn observed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tracked.iter().filter(|t| t.observed).map(|t| t.node)
    }

    pub fn on_intersection(
        &mut self,
        node: NodeId,
        is_intersecting: bool,
        ratio: f64,
    ) -> IntersectionOutcome {
        let threshold = self.threshold;
        let stagger = self.sibling_stagger_ms;
        let Some(t) = self.find_mut(node) else {
            return IntersectionOutcome::default();
        };
        if !is_intersecting || ratio <= threshold {
            return IntersectionOutcome::default();
        }

        let unobserve = std::mem::replace(&mut t.observed, false);
        if t.revealed {
            return IntersectionOutcome {
                unobserve,
                reveal: None,
            };
        }
        t.revealed = true;
        debug!(node = node.0, ratio, "revealing on intersection");
        IntersectionOutcome {
            unobserve,
            reveal: Some(StaggeredReveal {
                node,
                delay_ms: t.sibling_index as f64 * stagger,
            }),
        }
    }

    /// Reveal every unrevealed element whose box overlaps the viewport.
    ///
    /// Staggered by the element's rank within its rule. Elements the host can
    /// no longer measure are skipped.
    pub fn force_sweep(
        &mut self,
        window_height: f64,
        mut rect_of: impl FnMut(NodeId) -> Option<Rect>,
    ) -> Vec<StaggeredReveal> {
        let stagger = self.sweep_stagger_ms;
        let mut order: Vec<usize> = (0..self.tracked.len()).collect();
        order.sort_by_key(|&i| (self.tracked[i].rule, self.tracked[i].rank));

        let mut reveals = Vec::new();
        for i in order {
            let t = &mut self.tracked[i];
            if t.revealed {
                continue;
            }
            let Some(rect) = rect_of(t.node) else {
                continue;
            };
            if rect.overlaps_viewport(window_height) {
                t.revealed = true;
                reveals.push(StaggeredReveal {
                    node: t.node,
                    delay_ms: t.rank as f64 * stagger,
                });
            }
        }
        if !reveals.is_empty() {
            debug!(count = reveals.len(), "force sweep revealed elements");
        }
        reveals
    }

    /// Reveal everything that is still hidden, staggered by global order.
    pub fn reveal_all(&mut self) -> Vec<StaggeredReveal> {
        let stagger = self.reveal_all_stagger_ms;
        self.tracked
            .iter_mut()
            .enumerate()
            .filter(|(_, t)| !t.revealed)
            .map(|(i, t)| {
                t.revealed = true;
                StaggeredReveal {
                    node: t.node,
                    delay_ms: i as f64 * stagger,
                }
            })
            .collect()
    }

    pub fn is_revealed(&self, node: NodeId) -> bool {
        self.position(node)
            .is_some_and(|i| self.tracked[i].revealed)
    }

    pub fn is_observed(&self, node: NodeId) -> bool {
        self.position(node)
            .is_some_and(|i| self.tracked[i].observed)
    }

    pub fn is_tracked(&self, node: NodeId) -> bool {
        self.position(node).is_some()
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.tracked.iter().filter(|t| t.revealed).count()
    }

    fn position(&self, node: NodeId) -> Option<usize> {
        self.tracked.iter().position(|t| t.node == node)
    }

    fn find_mut(&mut self, node: NodeId) -> Option<&mut Tracked> {
        self.tracked.iter_mut().find(|t| t.node == node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RevealEngine {
        let mut engine = RevealEngine::new(&RevealConfig::default());
        // Two titles (rule 0) and three cards (rule 1), card siblings 0..3.
        engine.track(NodeId(1), RevealKind::SlideInUp, 0, 0, 0);
        engine.track(NodeId(2), RevealKind::SlideInUp, 0, 1, 0);
        engine.track(NodeId(3), RevealKind::FadeInUp, 1, 0, 0);
        engine.track(NodeId(4), RevealKind::FadeInUp, 1, 1, 1);
        engine.track(NodeId(5), RevealKind::FadeInUp, 1, 2, 2);
        engine
    }

    #[test]
    fn setup_assigns_reveal_kind_classes() {
        let cmds = engine().setup_commands();
        assert_eq!(cmds.len(), 5);
        assert_eq!(
            cmds[2],
            DomCommand::add_class(
                Target::Node(NodeId(3)),
                ClassToken::Reveal(RevealKind::FadeInUp)
            )
        );
    }

    #[test]
    fn duplicate_tracking_keeps_first_rule() {
        let mut engine = engine();
        assert!(!engine.track(NodeId(3), RevealKind::ScaleIn, 5, 0, 0));
        assert_eq!(engine.len(), 5);
    }

    #[test]
    fn intersection_below_threshold_is_ignored() {
        let mut engine = engine();
        let outcome = engine.on_intersection(NodeId(4), true, 0.15);
        assert_eq!(outcome, IntersectionOutcome::default());
        assert!(!engine.is_revealed(NodeId(4)));
    }

    #[test]
    fn intersection_reveals_once_and_releases_watch() {
        let mut engine = engine();
        let outcome = engine.on_intersection(NodeId(5), true, 0.4);
        assert!(outcome.unobserve);
        assert_eq!(
            outcome.reveal,
            Some(StaggeredReveal {
                node: NodeId(5),
                delay_ms: 150.0
            })
        );
        assert!(engine.is_revealed(NodeId(5)));
        assert!(!engine.observed().any(|n| n == NodeId(5)));

        let again = engine.on_intersection(NodeId(5), true, 0.9);
        assert_eq!(again, IntersectionOutcome::default());
    }

    #[test]
    fn scrolling_out_never_hides() {
        let mut engine = engine();
        engine.on_intersection(NodeId(1), true, 0.5);
        engine.on_intersection(NodeId(1), false, 0.0);
        assert!(engine.is_revealed(NodeId(1)));
    }

    #[test]
    fn sweep_reveals_only_visible_elements_with_rank_stagger() {
        let mut engine = engine();
        let reveals = engine.force_sweep(800.0, |node| match node.0 {
            1 => Some(Rect::new(0.0, 100.0, 10.0, 10.0)),
            2 => Some(Rect::new(0.0, 1200.0, 10.0, 10.0)),
            4 => Some(Rect::new(0.0, 700.0, 10.0, 200.0)),
            5 => Some(Rect::new(0.0, -50.0, 10.0, 60.0)),
            _ => None,
        });
        let nodes: Vec<_> = reveals.iter().map(|r| (r.node.0, r.delay_ms)).collect();
        assert_eq!(nodes, [(1, 0.0), (4, 100.0), (5, 200.0)]);
        assert!(!engine.is_revealed(NodeId(2)));
        assert!(!engine.is_revealed(NodeId(3)));
    }

    #[test]
    fn repeated_sweeps_are_idempotent() {
        let mut engine = engine();
        let visible = |_| Some(Rect::new(0.0, 10.0, 10.0, 10.0));
        assert_eq!(engine.force_sweep(800.0, visible).len(), 5);
        assert!(engine.force_sweep(800.0, visible).is_empty());
        assert_eq!(engine.revealed_count(), 5);
    }

    #[test]
    fn reveal_all_skips_already_revealed() {
        let mut engine = engine();
        engine.on_intersection(NodeId(2), true, 1.0);
        let reveals = engine.reveal_all();
        assert_eq!(reveals.len(), 4);
        assert!(reveals.iter().all(|r| r.node != NodeId(2)));
        assert_eq!(reveals[1].delay_ms, 100.0);
        assert!(engine.reveal_all().is_empty());
    }

    #[test]
    fn unknown_nodes_are_ignored() {
        let mut engine = engine();
        let outcome = engine.on_intersection(NodeId(99), true, 1.0);
        assert_eq!(outcome, IntersectionOutcome::default());
        assert!(!engine.is_tracked(NodeId(99)));
    }
}
