//! Easing curves mapping linear progress [0, 1] to eased progress.
//!
//! The same curves feed two consumers: the scroll animator samples them
//! numerically, and the micro-interactions emit them as CSS `transition`
//! timing functions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^3`
    #[default]
    EaseOutCubic,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
    pub const STANDARD: Easing = Easing::bezier(0.25, 0.46, 0.45, 0.94);
    pub const DECELERATE: Easing = Easing::bezier(0.0, 0.0, 0.2, 1.0);
    pub const ACCELERATE: Easing = Easing::bezier(0.4, 0.0, 1.0, 1.0);
    pub const SHARP: Easing = Easing::bezier(0.4, 0.0, 0.6, 1.0);
    /// Overshoots past 1 before settling.
    pub const BOUNCE: Easing = Easing::bezier(0.68, -0.55, 0.265, 1.55);
    pub const SOFT: Easing = Easing::bezier(0.25, 0.1, 0.25, 1.0);

    pub const fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Easing::CubicBezier { x1, y1, x2, y2 }
    }

    /// Eased progress for `t`, which is clamped to [0, 1] first.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_x(t, x1, x2);
                bezier_component(s, y1, y2)
            }
        }
    }

    /// CSS timing-function form.
    pub fn to_css(&self) -> String {
        match *self {
            Easing::Linear => "linear".into(),
            // Closest CSS equivalent of the cubic ease-out polynomial.
            Easing::EaseOutCubic => "cubic-bezier(0.33, 1, 0.68, 1)".into(),
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }

    /// `all <secs>s <curve>`, the transition shorthand used by the hover effects.
    pub fn transition_all(&self, duration_ms: f64) -> String {
        format!("all {}s {}", duration_ms / 1000.0, self.to_css())
    }
}

#[inline]
fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// One axis of a cubic Bézier with endpoints fixed at 0 and 1.
#[inline]
fn bezier_component(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_component_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x equals `x`. Newton first, bisection if
/// the slope is too flat to converge.
fn solve_bezier_x(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_component(s, x1, x2) - x;
        if err.abs() < EPS {
            return s;
        }
        let slope = bezier_component_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let value = bezier_component(s, x1, x2);
        if (value - x).abs() < EPS {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}
