//! Rotating hero subtitle: type a phrase, dwell, delete it, move on.

use crate::config::TypingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingState {
    pub phrase_index: usize,
    /// Number of characters currently shown.
    pub char_index: usize,
    pub phase: TypingPhase,
}

/// Outcome of one tick: the new subtitle text (if it changed) and the delay
/// until the next tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingStep {
    pub text: Option<String>,
    pub delay_ms: f64,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    config: TypingConfig,
    state: TypingState,
}

impl TypingEffect {
    pub fn new(config: TypingConfig) -> Self {
        Self {
            config,
            state: TypingState {
                phrase_index: 0,
                char_index: 0,
                phase: TypingPhase::Typing,
            },
        }
    }

    /// Advance one step. `roll` in [0, 1) picks the tick interval inside the
    /// configured jitter band.
    pub fn tick(&mut self, roll: f64) -> TypingStep {
        let roll = roll.clamp(0.0, 1.0);
        let len = self.phrase_len();
        let cfg = &self.config;
        let s = &mut self.state;

        match s.phase {
            TypingPhase::Typing if s.char_index < len => {
                s.char_index += 1;
                TypingStep {
                    text: Some(self.visible_text()),
                    delay_ms: self.config.type_base_ms + roll * self.config.type_jitter_ms,
                }
            }
            TypingPhase::Typing => {
                s.phase = TypingPhase::Pausing;
                TypingStep {
                    text: None,
                    delay_ms: cfg.hold_ms,
                }
            }
            TypingPhase::Pausing => {
                s.phase = TypingPhase::Deleting;
                TypingStep {
                    text: None,
                    delay_ms: cfg.pause_ms,
                }
            }
            TypingPhase::Deleting if s.char_index > 0 => {
                s.char_index -= 1;
                TypingStep {
                    text: Some(self.visible_text()),
                    delay_ms: self.config.delete_base_ms + roll * self.config.delete_jitter_ms,
                }
            }
            TypingPhase::Deleting => {
                s.phase = TypingPhase::Typing;
                s.phrase_index = (s.phrase_index + 1) % cfg.phrases.len().max(1);
                TypingStep {
                    text: None,
                    delay_ms: cfg.advance_ms,
                }
            }
        }
    }

    /// Text currently displayed: the first `char_index` characters.
    pub fn visible_text(&self) -> String {
        self.current_phrase()
            .chars()
            .take(self.state.char_index)
            .collect()
    }

    pub fn current_phrase(&self) -> &str {
        self.config
            .phrases
            .get(self.state.phrase_index)
            .map_or("", String::as_str)
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn start_delay_ms(&self) -> f64 {
        self.config.start_delay_ms
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(phrases: &[&str]) -> TypingEffect {
        TypingEffect::new(TypingConfig {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            ..TypingConfig::default()
        })
    }

    #[test]
    fn types_full_phrase_after_length_ticks() {
        let phrase = "Work in Progress";
        let mut fx = effect(&[phrase, "Next"]);
        let mut last = None;
        for _ in 0..phrase.len() {
            last = fx.tick(0.0).text;
        }
        assert_eq!(last.as_deref(), Some(phrase));
        assert_eq!(fx.visible_text(), phrase);
    }

    #[test]
    fn full_cycle_returns_to_empty_then_advances() {
        let phrase = "Work in Progress";
        let mut fx = effect(&[phrase, "Next"]);
        for _ in 0..phrase.len() {
            fx.tick(0.5);
        }

        let hold = fx.tick(0.5);
        assert_eq!(hold, TypingStep { text: None, delay_ms: 2500.0 });
        assert_eq!(fx.state().phase, TypingPhase::Pausing);
        let pause = fx.tick(0.5);
        assert_eq!(pause.delay_ms, 2000.0);
        assert_eq!(fx.state().phase, TypingPhase::Deleting);

        let mut last = None;
        for _ in 0..phrase.len() {
            last = fx.tick(0.5).text;
        }
        assert_eq!(last.as_deref(), Some(""));
        assert_eq!(fx.state().phrase_index, 0);

        let advance = fx.tick(0.5);
        assert_eq!(advance.delay_ms, 200.0);
        assert_eq!(fx.state().phrase_index, 1);
        assert_eq!(fx.tick(0.0).text.as_deref(), Some("N"));
    }

    #[test]
    fn intervals_stay_inside_jitter_bands() {
        let mut fx = effect(&["ab"]);
        assert_eq!(fx.tick(0.0).delay_ms, 60.0);
        assert!((fx.tick(0.999).delay_ms - 99.96).abs() < 1e-9);
        fx.tick(0.0);
        fx.tick(0.0);
        assert_eq!(fx.tick(1.0).delay_ms, 50.0);
    }

    #[test]
    fn wraps_after_last_phrase() {
        let mut fx = effect(&["a", "b"]);
        // type, hold, pause, delete, advance
        for _ in 0..5 {
            fx.tick(0.0);
        }
        assert_eq!(fx.current_phrase(), "b");
        for _ in 0..5 {
            fx.tick(0.0);
        }
        assert_eq!(fx.current_phrase(), "a");
    }

    #[test]
    fn multibyte_phrases_slice_on_characters() {
        let mut fx = effect(&["héllo"]);
        fx.tick(0.0);
        assert_eq!(fx.tick(0.0).text.as_deref(), Some("hé"));
    }
}
