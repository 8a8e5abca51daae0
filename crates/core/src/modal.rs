//! The "Work in Progress" announcement as a phase table.
//!
//! Every phase is scheduled at an absolute offset from the trigger, so the
//! whole sequence has a fixed length. Each run carries a generation number;
//! tasks belonging to a superseded run are dropped when they come due.

use folio_protocol::{DomCommand, StyleProp, Target, Widget};
use tracing::debug;

use crate::config::ModalConfig;
use crate::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    ShowBackdrop,
    ShowText,
    TypeMessage,
    HideText,
    HideBackdrop,
    Cleanup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalStep {
    Phase(ModalPhase),
    /// Show the first `n` characters of the message.
    Chars(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTask {
    pub generation: u64,
    pub step: ModalStep,
}

/// Commands to apply now plus follow-up tasks with absolute deadlines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalEffects {
    pub commands: Vec<DomCommand>,
    pub schedule: Vec<(f64, ModalTask)>,
}

#[derive(Debug, Clone)]
pub struct ModalSequencer {
    config: ModalConfig,
    generation: u64,
    open: bool,
}

impl ModalSequencer {
    pub fn new(config: ModalConfig) -> Self {
        Self {
            config,
            generation: 0,
            open: false,
        }
    }

    /// The phase table: `(offset from trigger, phase)`.
    pub fn phases(&self) -> [(f64, ModalPhase); 6] {
        let c = &self.config;
        [
            (0.0, ModalPhase::ShowBackdrop),
            (c.text_in_ms, ModalPhase::ShowText),
            (c.typing_at_ms, ModalPhase::TypeMessage),
            (c.text_out_ms, ModalPhase::HideText),
            (c.backdrop_out_ms, ModalPhase::HideBackdrop),
            (c.cleanup_ms, ModalPhase::Cleanup),
        ]
    }

    /// Start a new run. An overlay still on screen is removed first.
    pub fn trigger(&mut self, now: f64) -> ModalEffects {
        let mut commands = Vec::with_capacity(4);
        if self.open {
            debug!(generation = self.generation, "replacing open announcement");
            commands.extend(remove_overlay());
        }
        self.generation += 1;
        self.open = true;
        commands.push(DomCommand::Mount(Widget::Backdrop));
        commands.push(DomCommand::Mount(Widget::Overlay));

        let generation = self.generation;
        let schedule = self
            .phases()
            .into_iter()
            .map(|(offset, phase)| {
                (
                    now + offset,
                    ModalTask {
                        generation,
                        step: ModalStep::Phase(phase),
                    },
                )
            })
            .collect();
        ModalEffects { commands, schedule }
    }

    /// Run a task that came due at `now`.
    pub fn run(&mut self, task: ModalTask, now: f64) -> ModalEffects {
        if task.generation != self.generation || !self.open {
            return ModalEffects::default();
        }
        let mut effects = ModalEffects::default();
        let cmds = &mut effects.commands;
        match task.step {
            ModalStep::Phase(phase) => {
                debug!(?phase, generation = task.generation, "announcement phase");
                match phase {
                    ModalPhase::ShowBackdrop => {
                        cmds.push(DomCommand::style(Target::Backdrop, StyleProp::Opacity, "1"));
                        cmds.push(DomCommand::style(
                            Target::Backdrop,
                            StyleProp::BackdropFilter,
                            "blur(15px)",
                        ));
                        cmds.push(DomCommand::style(
                            Target::Backdrop,
                            StyleProp::Background,
                            "rgba(0, 0, 0, 0.6)",
                        ));
                        cmds.push(DomCommand::style(Target::Overlay, StyleProp::Opacity, "1"));
                    }
                    ModalPhase::ShowText => {
                        cmds.push(DomCommand::style(
                            Target::OverlayText,
                            StyleProp::Transform,
                            "translateY(0)",
                        ));
                        cmds.push(DomCommand::style(Target::OverlayText, StyleProp::Opacity, "1"));
                    }
                    ModalPhase::TypeMessage => {
                        cmds.push(DomCommand::text(Target::OverlayText, ""));
                        effects.schedule.extend(self.next_char(0, now));
                    }
                    ModalPhase::HideText => {
                        cmds.push(DomCommand::style(
                            Target::OverlayText,
                            StyleProp::Transform,
                            "translateY(-20px)",
                        ));
                        cmds.push(DomCommand::style(Target::OverlayText, StyleProp::Opacity, "0"));
                        cmds.push(DomCommand::style(
                            Target::OverlayText,
                            StyleProp::Transition,
                            Easing::SOFT.transition_all(600.0),
                        ));
                    }
                    ModalPhase::HideBackdrop => {
                        cmds.push(DomCommand::style(Target::Backdrop, StyleProp::Opacity, "0"));
                        cmds.push(DomCommand::style(
                            Target::Backdrop,
                            StyleProp::BackdropFilter,
                            "blur(0px)",
                        ));
                        cmds.push(DomCommand::style(
                            Target::Backdrop,
                            StyleProp::Background,
                            "rgba(0, 0, 0, 0)",
                        ));
                        cmds.push(DomCommand::style(Target::Overlay, StyleProp::Opacity, "0"));
                    }
                    ModalPhase::Cleanup => {
                        self.open = false;
                        cmds.extend(remove_overlay());
                    }
                }
            }
            ModalStep::Chars(n) => {
                let typed: String = self.config.message.chars().take(n).collect();
                cmds.push(DomCommand::text(Target::OverlayText, typed));
                effects.schedule.extend(self.next_char(n, now));
            }
        }
        effects
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn next_char(&self, shown: usize, now: f64) -> Option<(f64, ModalTask)> {
        let total = self.config.message.chars().count();
        if shown >= total {
            return None;
        }
        // The first character appears immediately, the rest one interval apart.
        let due = if shown == 0 {
            now
        } else {
            now + self.config.char_interval_ms
        };
        Some((
            due,
            ModalTask {
                generation: self.generation,
                step: ModalStep::Chars(shown + 1),
            },
        ))
    }
}

fn remove_overlay() -> [DomCommand; 2] {
    [
        DomCommand::Remove {
            target: Target::Overlay,
        },
        DomCommand::Remove {
            target: Target::Backdrop,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Timeline;

    /// Drive a sequencer through a timeline until nothing is left, recording
    /// `(time, command)` pairs.
    fn drain(
        modal: &mut ModalSequencer,
        timeline: &mut Timeline<ModalTask>,
        until: f64,
    ) -> Vec<(f64, DomCommand)> {
        let mut out = Vec::new();
        while let Some(due) = timeline.next_deadline() {
            if due > until {
                break;
            }
            while let Some(task) = timeline.pop_due(due) {
                let effects = modal.run(task, due);
                out.extend(effects.commands.into_iter().map(|c| (due, c)));
                for (at, t) in effects.schedule {
                    timeline.schedule(at, t);
                }
            }
        }
        out
    }

    fn start(modal: &mut ModalSequencer, timeline: &mut Timeline<ModalTask>, now: f64) {
        for (at, t) in modal.trigger(now).schedule {
            timeline.schedule(at, t);
        }
    }

    #[test]
    fn phase_table_is_ordered_and_fixed_length() {
        let modal = ModalSequencer::new(ModalConfig::default());
        let phases = modal.phases();
        assert!(phases.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(phases[5], (4500.0, ModalPhase::Cleanup));
    }

    #[test]
    fn full_run_types_message_and_cleans_up() {
        let mut modal = ModalSequencer::new(ModalConfig::default());
        let mut timeline = Timeline::new();
        start(&mut modal, &mut timeline, 0.0);
        let log = drain(&mut modal, &mut timeline, f64::INFINITY);

        let texts: Vec<_> = log
            .iter()
            .filter_map(|(at, c)| match c {
                DomCommand::SetText { text, .. } => Some((*at, text.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(texts.first(), Some(&(1000.0, "")));
        assert_eq!(texts[1], (1000.0, "W"));
        assert_eq!(texts.last(), Some(&(2500.0, "Work in Progress")));

        let (last_at, last) = log.last().cloned().unwrap_or((0.0, DomCommand::ScrollTo { y: 0.0 }));
        assert_eq!(last_at, 4500.0);
        assert!(matches!(last, DomCommand::Remove { .. }));
        assert!(!modal.is_open());
        assert!(timeline.is_empty());
    }

    #[test]
    fn retrigger_removes_existing_and_ignores_stale_tasks() {
        let mut modal = ModalSequencer::new(ModalConfig::default());
        let mut timeline = Timeline::new();
        start(&mut modal, &mut timeline, 0.0);
        drain(&mut modal, &mut timeline, 700.0);

        let effects = modal.trigger(1000.0);
        assert_eq!(
            effects.commands[..2],
            [
                DomCommand::Remove { target: Target::Overlay },
                DomCommand::Remove { target: Target::Backdrop },
            ]
        );
        for (at, t) in effects.schedule {
            timeline.schedule(at, t);
        }

        let log = drain(&mut modal, &mut timeline, f64::INFINITY);
        // Only the second run's cleanup remains; the first run's at 4500 was dropped.
        let removals: Vec<_> = log
            .iter()
            .filter(|(_, c)| matches!(c, DomCommand::Remove { .. }))
            .map(|(at, _)| *at)
            .collect();
        assert_eq!(removals, [5500.0, 5500.0]);
    }

    #[test]
    fn stale_generation_is_a_no_op() {
        let mut modal = ModalSequencer::new(ModalConfig::default());
        modal.trigger(0.0);
        modal.trigger(10.0);
        let stale = ModalTask {
            generation: 1,
            step: ModalStep::Phase(ModalPhase::Cleanup),
        };
        assert_eq!(modal.run(stale, 4500.0), ModalEffects::default());
        assert!(modal.is_open());
    }
}
