//! Session settings.

use std::time::Duration;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use storefront_commerce::notice::DEFAULT_NOTICE_TTL_MS;
use storefront_commerce::search::{PriceDefaults, DEFAULT_PAGE_SIZE};

/// Quiet window after the last keystroke before a text search is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Capacity of the UI event queue.
pub const DEFAULT_EVENT_BUFFER: usize = 64;

/// Settings for a storefront session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Debounce window for text input.
    pub debounce: Duration,
    /// Products per page.
    pub page_size: usize,
    /// Price bounds used when the inputs are empty or unparsable.
    pub price_defaults: PriceDefaults,
    /// Drop responses older than the newest applied one.
    pub discard_stale_responses: bool,
    /// How long a notice stays visible.
    pub notice_ttl: Duration,
    /// Capacity of the UI event queue.
    pub event_buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            page_size: DEFAULT_PAGE_SIZE,
            price_defaults: PriceDefaults::default(),
            discard_stale_responses: true,
            notice_ttl: Duration::from_millis(DEFAULT_NOTICE_TTL_MS as u64),
            event_buffer: DEFAULT_EVENT_BUFFER,
        }
    }
}

impl SessionConfig {
    /// Notice TTL as a chrono delta, saturating on overflow.
    pub fn notice_ttl_delta(&self) -> TimeDelta {
        TimeDelta::from_std(self.notice_ttl).unwrap_or(TimeDelta::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(300));
        assert_eq!(config.page_size, 12);
        assert_eq!(config.price_defaults.min, 0);
        assert_eq!(config.price_defaults.max, 1000);
        assert!(config.discard_stale_responses);
        assert_eq!(config.notice_ttl_delta(), TimeDelta::milliseconds(3000));
    }
}
