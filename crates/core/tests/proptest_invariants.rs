//! Property-based invariant tests for the scroll-driven state machines.
//!
//! 1. Progress stays within [0, 100] and never decreases as scroll grows.
//! 2. Section resolution returns the containing section, and clamps to the
//!    first/last section outside the document.
//! 3. Smooth-scroll samples move monotonically and land exactly on target.
//! 4. A throttle admits calls at least one interval apart.
//! 5. The Konami tracker fires on the full sequence and never without its
//!    final key.

use folio_core::easing::Easing;
use folio_core::easter_egg::{KONAMI, KonamiTracker};
use folio_core::nav::{progress_percent, resolve_section};
use folio_core::rate::Throttle;
use folio_core::scroll::ScrollAnimation;
use folio_core::Key;
use folio_protocol::{SectionDescriptor, ViewportMetrics};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn layout_strategy() -> impl Strategy<Value = Vec<SectionDescriptor>> {
    prop::collection::vec(1.0f64..2000.0, 1..10).prop_map(|heights| {
        let mut top = 0.0;
        heights
            .into_iter()
            .enumerate()
            .map(|(i, h)| {
                let section = SectionDescriptor::new(format!("s{i}"), top, h);
                top += h;
                section
            })
            .collect()
    })
}

fn easing_strategy() -> impl Strategy<Value = Easing> {
    prop_oneof![Just(Easing::Linear), Just(Easing::EaseOutCubic)]
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Up),
        Just(Key::Down),
        Just(Key::Left),
        Just(Key::Right),
        Just(Key::Char('a')),
        Just(Key::Char('b')),
        Just(Key::Other),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Progress bounds and monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn progress_is_bounded(
        window in 1.0f64..3000.0,
        document in 0.0f64..20000.0,
        scroll in -500.0f64..25000.0,
    ) {
        let p = progress_percent(&ViewportMetrics::new(window, document, scroll));
        prop_assert!((0.0..=100.0).contains(&p), "progress {} out of range", p);
        if document <= window {
            prop_assert_eq!(p, 0.0);
        }
    }

    #[test]
    fn progress_never_decreases(
        window in 1.0f64..3000.0,
        document in 0.0f64..20000.0,
        a in 0.0f64..20000.0,
        b in 0.0f64..20000.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let metrics = ViewportMetrics::new(window, document, 0.0);
        prop_assert!(progress_percent(&metrics.at(lo)) <= progress_percent(&metrics.at(hi)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Section resolution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolution_finds_containing_section(
        sections in layout_strategy(),
        frac in 0.0f64..1.0,
    ) {
        let bottom = sections.last().map_or(0.0, SectionDescriptor::offset_bottom);
        let position = frac * bottom;
        let hit = resolve_section(&sections, position);
        prop_assert!(hit.is_some());
        if let Some(hit) = hit {
            prop_assert!(
                hit.contains(position),
                "{:?} does not contain {}", hit, position
            );
        }
    }

    #[test]
    fn resolution_clamps_outside_document(
        sections in layout_strategy(),
        overshoot in 0.0f64..5000.0,
    ) {
        let first = &sections[0];
        let last = &sections[sections.len() - 1];
        prop_assert_eq!(
            resolve_section(&sections, last.offset_bottom() + overshoot).map(|s| &s.id),
            Some(&last.id)
        );
        prop_assert_eq!(
            resolve_section(&sections, first.offset_top - overshoot - 1.0).map(|s| &s.id),
            Some(&first.id)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Smooth-scroll sampling
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_samples_are_monotonic(
        from in 0.0f64..10000.0,
        to in 0.0f64..10000.0,
        duration in 1.0f64..2000.0,
        easing in easing_strategy(),
        steps in 2usize..64,
    ) {
        let anim = ScrollAnimation { from, to, start_ms: 0.0, duration_ms: duration, easing };
        let samples: Vec<f64> = (0..=steps)
            .map(|i| anim.position_at(duration * i as f64 / steps as f64))
            .collect();
        let rising = to >= from;
        for pair in samples.windows(2) {
            if rising {
                prop_assert!(pair[1] >= pair[0] - 1e-9, "{:?}", pair);
            } else {
                prop_assert!(pair[1] <= pair[0] + 1e-9, "{:?}", pair);
            }
        }
        prop_assert!((samples[0] - from).abs() < 1e-9);
        prop_assert_eq!(anim.position_at(duration), to);
        prop_assert_eq!(anim.position_at(duration * 3.0), to);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Throttle spacing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn throttle_spaces_admitted_calls(
        interval in 1.0f64..500.0,
        gaps in prop::collection::vec(0.0f64..200.0, 1..200),
    ) {
        let mut throttle = Throttle::new(interval);
        let mut now = 0.0;
        let mut admitted = Vec::new();
        for gap in gaps {
            now += gap;
            if throttle.admit(now) {
                admitted.push(now);
            }
        }
        for pair in admitted.windows(2) {
            prop_assert!(
                pair[1] - pair[0] >= interval - 1e-9,
                "{:?} closer than {}", pair, interval
            );
        }
        prop_assert!(!admitted.is_empty(), "first call is always admitted");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Konami detection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn konami_fires_after_unrelated_noise(noise in prop::collection::vec(key_strategy(), 0..30)) {
        let mut tracker = KonamiTracker::new();
        for key in noise.into_iter().filter(|k| *k != Key::Up) {
            tracker.feed(key);
        }
        let fired: Vec<bool> = KONAMI.iter().map(|k| tracker.feed(*k)).collect();
        prop_assert_eq!(fired.last().copied(), Some(true));
        prop_assert_eq!(tracker.progress(), 0);
    }

    #[test]
    fn konami_never_fires_without_final_key(keys in prop::collection::vec(key_strategy(), 0..60)) {
        let mut tracker = KonamiTracker::new();
        let last = KONAMI[KONAMI.len() - 1];
        for key in keys.into_iter().filter(|k| *k != last) {
            prop_assert!(!tracker.feed(key));
        }
    }
}
