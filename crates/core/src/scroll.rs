//! Smooth window scrolling driven by animation frames.
//!
//! Position is a function of elapsed wall-clock time, not frame count, so
//! the animation lasts `duration_ms` regardless of the display's refresh
//! rate. Starting a new animation cancels the one in flight: there is only
//! ever one writer of the scroll offset.

use tracing::debug;

use crate::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl ScrollAnimation {
    /// Linear time progress at `now`, clamped to [0, 1].
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Scroll offset for a given linear progress.
    pub fn sample(&self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn position_at(&self, now: f64) -> f64 {
        self.sample(self.progress(now))
    }
}

/// Identifies one started animation; stale tokens never match again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollToken(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollFrame {
    /// Set the offset and request another frame.
    Moving(f64),
    /// Set the offset; the animation is over.
    Arrived(f64),
    Idle,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    active: Option<(ScrollToken, ScrollAnimation)>,
    issued: u64,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin animating from `from` to `to`, cancelling any animation in flight.
    pub fn start(
        &mut self,
        from: f64,
        to: f64,
        now: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> ScrollToken {
        if self.cancel() {
            debug!(to, "superseding in-flight smooth scroll");
        }
        self.issued += 1;
        let token = ScrollToken(self.issued);
        self.active = Some((
            token,
            ScrollAnimation {
                from,
                to,
                start_ms: now,
                duration_ms,
                easing,
            },
        ));
        token
    }

    /// Advance to `now`.
    pub fn frame(&mut self, now: f64) -> ScrollFrame {
        let Some((_, animation)) = self.active else {
            return ScrollFrame::Idle;
        };
        if animation.progress(now) >= 1.0 {
            self.active = None;
            ScrollFrame::Arrived(animation.to)
        } else {
            ScrollFrame::Moving(animation.position_at(now))
        }
    }

    /// Stop the animation in flight, if any. Returns whether one was stopped.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_current(&self, token: ScrollToken) -> bool {
        self.active.is_some_and(|(t, _)| t == token)
    }

    /// Destination of the animation in flight.
    pub fn target(&self) -> Option<f64> {
        self.active.map(|(_, a)| a.to)
    }
}
