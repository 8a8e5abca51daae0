//! Tunables for every component of the page script.
//!
//! All fields default to the values the page was designed around, so an
//! empty JSON object (or no config at all) yields the stock behaviour.

use folio_protocol::{RevealKind, SectionId};
use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::FolioError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub scroll: ScrollConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub typing: TypingConfig,
    pub modal: ModalConfig,
}

impl FolioConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let config: FolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        fn positive(name: &str, value: f64) -> Result<(), FolioError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(FolioError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }

        positive("scroll.duration_ms", self.scroll.duration_ms)?;
        positive("scroll.indicator_duration_ms", self.scroll.indicator_duration_ms)?;
        positive("nav.scroll_throttle_ms", self.nav.scroll_throttle_ms)?;
        positive("nav.resize_debounce_ms", self.nav.resize_debounce_ms)?;
        positive("typing.type_base_ms", self.typing.type_base_ms)?;
        positive("typing.delete_base_ms", self.typing.delete_base_ms)?;
        positive("modal.char_interval_ms", self.modal.char_interval_ms)?;

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(FolioError::InvalidConfig(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if self.typing.phrases.is_empty() {
            return Err(FolioError::InvalidConfig(
                "typing.phrases must not be empty".into(),
            ));
        }
        if self.nav.shortcuts.len() > 9 {
            return Err(FolioError::InvalidConfig(format!(
                "nav.shortcuts binds digits 1-9, got {} entries",
                self.nav.shortcuts.len()
            )));
        }
        let m = &self.modal;
        let phases = [
            m.text_in_ms,
            m.typing_at_ms,
            m.text_out_ms,
            m.backdrop_out_ms,
            m.cleanup_ms,
        ];
        if phases.windows(2).any(|w| w[0] > w[1]) {
            return Err(FolioError::InvalidConfig(
                "modal phase offsets must be non-decreasing".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Duration of link and keyboard driven smooth scrolls.
    pub duration_ms: f64,
    /// Distance kept between a section's top and the window top after a
    /// nav-link or overview-card jump (fixed header height).
    pub link_offset: f64,
    /// Same, for keyboard shortcuts.
    pub keyboard_offset: f64,
    /// Duration of the hero scroll-indicator jump.
    pub indicator_duration_ms: f64,
    pub easing: Easing,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 600.0,
            link_offset: 60.0,
            keyboard_offset: 80.0,
            indicator_duration_ms: 800.0,
            easing: Easing::EaseOutCubic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Added to `scrollY` before looking up the active section.
    pub active_probe_offset: f64,
    /// Header gains the `scrolled` marker above this offset.
    pub scrolled_threshold: f64,
    /// Same-direction scroll distance needed before the header hides/shows.
    pub hide_noise_threshold: f64,
    /// The header never hides above this offset.
    pub hide_min_scroll: f64,
    pub scroll_throttle_ms: f64,
    pub backup_sweep_throttle_ms: f64,
    pub hints_throttle_ms: f64,
    pub resize_debounce_ms: f64,
    pub scroll_idle_ms: f64,
    /// Delay between a click navigation and its completion handling.
    pub settle_delay_ms: f64,
    /// Force sweeps after a navigation completes, relative to completion.
    pub settle_sweeps_ms: Vec<f64>,
    /// Force sweeps after page load.
    pub initial_sweeps_ms: Vec<f64>,
    /// Navigation completion after load when the URL carries a hash.
    pub hash_sweep_ms: f64,
    pub indicator_threshold: f64,
    pub back_to_top_threshold: f64,
    pub hints_threshold: f64,
    /// Keyboard hints stay off until this long after startup.
    pub hints_start_ms: f64,
    pub hints_visible_ms: f64,
    pub hints_fade_ms: f64,
    pub link_pulse_ms: f64,
    pub menu_stagger_ms: f64,
    /// Section reached by digit key `n` is `shortcuts[n - 1]`.
    pub shortcuts: Vec<SectionId>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            active_probe_offset: 100.0,
            scrolled_threshold: 50.0,
            hide_noise_threshold: 10.0,
            hide_min_scroll: 120.0,
            scroll_throttle_ms: 16.0,
            backup_sweep_throttle_ms: 500.0,
            hints_throttle_ms: 100.0,
            resize_debounce_ms: 150.0,
            scroll_idle_ms: 150.0,
            settle_delay_ms: 700.0,
            settle_sweeps_ms: vec![100.0, 300.0, 500.0],
            initial_sweeps_ms: vec![200.0, 500.0, 1000.0],
            hash_sweep_ms: 300.0,
            indicator_threshold: 100.0,
            back_to_top_threshold: 300.0,
            hints_threshold: 200.0,
            hints_start_ms: 2000.0,
            hints_visible_ms: 3000.0,
            hints_fade_ms: 300.0,
            link_pulse_ms: 100.0,
            menu_stagger_ms: 40.0,
            shortcuts: [
                "home",
                "overview",
                "about",
                "experience",
                "skills",
                "projects",
                "education",
                "contact",
            ]
            .into_iter()
            .map(SectionId::from)
            .collect(),
        }
    }
}

/// Elements matching `selector` get `kind` at startup and are revealed once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealRule {
    pub selector: String,
    pub kind: RevealKind,
}

impl RevealRule {
    pub fn new(selector: impl Into<String>, kind: RevealKind) -> Self {
        Self {
            selector: selector.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Minimum intersection ratio that reveals an element.
    pub threshold: f64,
    /// Ratios at which the host's observer reports.
    pub observer_thresholds: Vec<f64>,
    pub root_margin: String,
    pub sibling_stagger_ms: f64,
    pub sweep_stagger_ms: f64,
    pub reveal_all_stagger_ms: f64,
    pub rules: Vec<RevealRule>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        use RevealKind::*;
        Self {
            threshold: 0.15,
            observer_thresholds: (0..=10).map(|i| f64::from(i) / 10.0).collect(),
            root_margin: "-30px 0px -50px 0px".into(),
            sibling_stagger_ms: 75.0,
            sweep_stagger_ms: 100.0,
            reveal_all_stagger_ms: 50.0,
            rules: vec![
                RevealRule::new(".section-title", SlideInUp),
                RevealRule::new(".section-subtitle", FadeInUp),
                RevealRule::new(".about-text", FadeInLeft),
                RevealRule::new(".highlight-item", ScaleIn),
                RevealRule::new(".timeline-item", FadeInUp),
                RevealRule::new(".skill-category", ScaleIn),
                RevealRule::new(".project-card", FadeInUp),
                RevealRule::new(".education-item", SlideInUp),
                RevealRule::new(".contact-item", FadeInUp),
                RevealRule::new(".social-link-large", FadeInUp),
                RevealRule::new(".overview-card", ScaleIn),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    /// A typed character waits `type_base_ms + roll * type_jitter_ms`.
    pub type_base_ms: f64,
    pub type_jitter_ms: f64,
    pub delete_base_ms: f64,
    pub delete_jitter_ms: f64,
    /// Dwell on the completed phrase before the pause begins.
    pub hold_ms: f64,
    /// Dwell while paused, before deleting starts.
    pub pause_ms: f64,
    /// Gap between clearing a phrase and typing the next one.
    pub advance_ms: f64,
    pub start_delay_ms: f64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Transforming Data into Strategic Insights".into(),
                "Building Production ML Solutions".into(),
                "Driving Organizational Impact".into(),
                "Mastering Stakeholder Excellence".into(),
            ],
            type_base_ms: 60.0,
            type_jitter_ms: 40.0,
            delete_base_ms: 30.0,
            delete_jitter_ms: 20.0,
            hold_ms: 2500.0,
            pause_ms: 2000.0,
            advance_ms: 200.0,
            start_delay_ms: 2200.0,
        }
    }
}

/// Offsets are measured from the click that opened the announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub message: String,
    pub char_interval_ms: f64,
    pub text_in_ms: f64,
    pub typing_at_ms: f64,
    pub text_out_ms: f64,
    pub backdrop_out_ms: f64,
    pub cleanup_ms: f64,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            message: "Work in Progress".into(),
            char_interval_ms: 100.0,
            text_in_ms: 600.0,
            typing_at_ms: 1000.0,
            text_out_ms: 3200.0,
            backdrop_out_ms: 3700.0,
            cleanup_ms: 4500.0,
        }
    }
}
