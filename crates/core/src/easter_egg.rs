//! Konami code detector.

use crate::input::Key;

pub const KONAMI: [Key; 10] = [
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::Char('b'),
    Key::Char('a'),
];

/// Body animation played when the sequence completes, and its length.
pub const RAINBOW_ANIMATION: &str = "rainbow 1s ease-in-out";
pub const RAINBOW_MS: f64 = 1000.0;

#[derive(Debug, Clone, Default)]
pub struct KonamiTracker {
    matched: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key. Returns `true` when it completes the sequence.
    ///
    /// A mismatch restarts matching; the mismatching key itself counts as the
    /// first step if it equals the sequence's first key.
    pub fn feed(&mut self, key: Key) -> bool {
        if KONAMI.get(self.matched) == Some(&key) {
            self.matched += 1;
        } else {
            self.matched = usize::from(KONAMI[0] == key);
        }
        if self.matched == KONAMI.len() {
            self.matched = 0;
            return true;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(tracker: &mut KonamiTracker, keys: &[Key]) -> bool {
        keys.iter().fold(false, |_, k| tracker.feed(*k))
    }

    #[test]
    fn full_sequence_fires_once() {
        let mut tracker = KonamiTracker::new();
        assert!(feed_all(&mut tracker, &KONAMI));
        assert_eq!(tracker.progress(), 0);
        assert!(!tracker.feed(Key::Char('a')));
    }

    #[test]
    fn wrong_key_resets() {
        let mut tracker = KonamiTracker::new();
        feed_all(&mut tracker, &KONAMI[..5]);
        tracker.feed(Key::Char('x'));
        assert_eq!(tracker.progress(), 0);
    }

    #[test]
    fn extra_leading_up_still_matches() {
        let mut tracker = KonamiTracker::new();
        tracker.feed(Key::Up);
        tracker.feed(Key::Up);
        // Third Up breaks the run but starts a new one.
        tracker.feed(Key::Up);
        assert_eq!(tracker.progress(), 1);
        assert!(feed_all(&mut tracker, &KONAMI[1..]));
    }
}
