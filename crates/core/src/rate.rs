//! Rate limiting for high-frequency page events.
//!
//! Both limiters are driven by the caller's clock (milliseconds, e.g.
//! `performance.now()`), so they behave identically in the browser, in the
//! terminal preview, and in tests.

/// Leading-edge throttle: the first call fires, calls during the cooldown
/// are dropped (not queued).
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    cooldown_until: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            cooldown_until: None,
        }
    }

    /// Returns `true` if the call at `now` should run.
    pub fn admit(&mut self, now: f64) -> bool {
        if let Some(until) = self.cooldown_until
            && now < until
        {
            return false;
        }
        self.cooldown_until = Some(now + self.interval_ms);
        true
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

/// Ticket handed out by [`Debounce::call`]; only the newest one fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Trailing-edge debounce: each call supersedes the pending one, and the
/// action fires once, `wait_ms` after the last call of a burst.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    latest: u64,
    pending: bool,
}

impl Debounce {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            latest: 0,
            pending: false,
        }
    }

    /// Register a call at `now`. Returns the ticket and the time at which the
    /// caller should check back with [`Debounce::fire`].
    pub fn call(&mut self, now: f64) -> (DebounceTicket, f64) {
        self.latest += 1;
        self.pending = true;
        (DebounceTicket(self.latest), now + self.wait_ms)
    }

    /// Returns `true` exactly once per burst: when `ticket` is the newest one.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.pending && ticket.0 == self.latest {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
