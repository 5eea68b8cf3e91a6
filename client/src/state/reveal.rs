//! One-shot scroll reveal bookkeeping.
//!
//! Each registered element reveals on its first reported intersection, after
//! its own delay. Later intersections are ignored. Tasks are neither retried
//! nor cancellable.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Class added to an element once revealed.
pub const REVEALED_CLASS: &str = "revealed";
/// Classes marking an element for reveal.
pub const REVEAL_SELECTOR: &str = ".reveal, .reveal-left, .reveal-right, .reveal-scale";
/// Attribute holding a per-element delay in milliseconds.
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";
/// Attribute the browser glue uses to map elements back to their ids.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub usize);

/// Work to do for a newly visible element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTask {
    pub id: RevealId,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug)]
struct Tracked {
    delay_ms: u32,
    revealed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct RevealEngine {
    tracked: Vec<Tracked>,
}

/// Parse a `data-reveal-delay` value; anything invalid means no delay.
pub fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().trim_end_matches("ms").trim().parse::<u32>().ok())
        .unwrap_or(0)
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new element.
    pub fn register(&mut self, delay_ms: u32) -> RevealId {
        self.tracked.push(Tracked {
            delay_ms,
            revealed: false,
        });
        RevealId(self.tracked.len() - 1)
    }

    /// Report that `id` intersects the viewport.
    pub fn on_intersect(&mut self, id: RevealId) -> Option<RevealTask> {
        let tracked = self.tracked.get_mut(id.0)?;
        if tracked.revealed {
            return None;
        }
        tracked.revealed = true;
        Some(RevealTask {
            id,
            delay_ms: tracked.delay_ms,
        })
    }

    /// Reveal everything still pending, in registration order.
    pub fn reveal_all(&mut self) -> Vec<RevealTask> {
        (0..self.tracked.len())
            .filter_map(|i| self.on_intersect(RevealId(i)))
            .map(|task| RevealTask { delay_ms: 0, ..task })
            .collect()
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.tracked.get(id.0).is_some_and(|t| t.revealed)
    }

    pub fn pending(&self) -> usize {
        self.tracked.iter().filter(|t| !t.revealed).count()
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}
