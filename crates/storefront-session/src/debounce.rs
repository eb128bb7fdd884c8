//! Trailing-edge debounce.
//!
//! Each trigger pushes the deadline out by the full window; the action runs
//! once, after the window passes with no further triggers.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Restart the quiet window at `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Returns true once, when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending action. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn test_burst_fires_once_after_last_trigger() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(WINDOW);

        for i in 0..5 {
            let at = start + Duration::from_millis(i * 100);
            assert!(!debounce.poll(at));
            debounce.trigger(at);
        }

        let last = start + Duration::from_millis(400);
        assert_eq!(debounce.deadline(), Some(last + WINDOW));
        assert!(!debounce.poll(last + Duration::from_millis(299)));
        assert!(debounce.poll(last + WINDOW));
        assert!(!debounce.poll(last + WINDOW * 2));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(WINDOW);
        assert!(!debounce.cancel());

        debounce.trigger(start);
        assert!(debounce.is_pending());
        assert!(debounce.cancel());
        assert!(!debounce.poll(start + WINDOW));
    }
}
