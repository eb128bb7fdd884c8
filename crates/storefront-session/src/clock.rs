//! Maps the runtime's monotonic clock onto wall-clock time.
//!
//! Timers run on `tokio::time::Instant`; notices carry wall-clock stamps.
//! Anchoring both at session start keeps them consistent, including under
//! a paused test clock.

use chrono::{DateTime, TimeDelta, Utc};
use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    anchor: Instant,
    wall: DateTime<Utc>,
}

impl SessionClock {
    /// Anchor at the current instant.
    pub fn start() -> Self {
        Self::anchored(Instant::now(), Utc::now())
    }

    pub fn anchored(anchor: Instant, wall: DateTime<Utc>) -> Self {
        Self { anchor, wall }
    }

    /// Wall-clock time of `at`.
    pub fn wall_time(&self, at: Instant) -> DateTime<Utc> {
        let elapsed = at.saturating_duration_since(self.anchor);
        TimeDelta::from_std(elapsed)
            .ok()
            .and_then(|delta| self.wall.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Instant at which wall-clock time `when` is reached.
    pub fn instant_at(&self, when: DateTime<Utc>) -> Instant {
        match (when - self.wall).to_std() {
            Ok(offset) => self.anchor + offset,
            Err(_) => self.anchor,
        }
    }
}
