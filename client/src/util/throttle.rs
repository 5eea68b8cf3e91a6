//! Leading + trailing edge throttle for high-frequency browser events.
//!
//! Time is passed in by the caller (milliseconds, any monotonic origin) so the
//! decision logic stays deterministic under test.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Outcome of offering an event to the throttle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThrottleDecision {
    /// Handle the event now.
    Run,
    /// Drop this event but schedule a trailing run after `delay_ms`.
    Defer { delay_ms: f64 },
    /// Drop this event; a trailing run is already pending.
    Skip,
}

#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_run: Option<f64>,
    trailing_pending: bool,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_run: None,
            trailing_pending: false,
        }
    }

    /// Offer an event at `now`.
    pub fn offer(&mut self, now: f64) -> ThrottleDecision {
        match self.last_run {
            Some(last) if now - last < self.interval_ms => {
                if self.trailing_pending {
                    ThrottleDecision::Skip
                } else {
                    self.trailing_pending = true;
                    ThrottleDecision::Defer {
                        delay_ms: self.interval_ms - (now - last),
                    }
                }
            }
            _ => {
                self.last_run = Some(now);
                ThrottleDecision::Run
            }
        }
    }

    /// Record that the deferred trailing run happened at `now`.
    pub fn complete_trailing(&mut self, now: f64) {
        self.trailing_pending = false;
        self.last_run = Some(now);
    }
}
