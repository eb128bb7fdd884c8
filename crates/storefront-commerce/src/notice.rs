//! Transient notices ("Product added to cart", load failures, ...).

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// How long a notice stays on screen by default.
pub const DEFAULT_NOTICE_TTL_MS: i64 = 3000;

/// Notice severity, matching the alert styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Danger,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A dismissible alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind, created_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at,
        }
    }

    /// Whether the notice has been shown for at least `ttl`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now.signed_duration_since(self.created_at) >= ttl
    }
}

/// Queue of visible notices, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notices {
    items: Vec<Notice>,
    ttl: TimeDelta,
}

impl Default for Notices {
    fn default() -> Self {
        Self::with_ttl(TimeDelta::milliseconds(DEFAULT_NOTICE_TTL_MS))
    }
}

impl Notices {
    pub fn with_ttl(ttl: TimeDelta) -> Self {
        Self {
            items: Vec::new(),
            ttl,
        }
    }

    pub fn push(&mut self, notice: Notice) {
        self.items.push(notice);
    }

    /// Drop notices that have outlived the TTL. Returns how many were dropped.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        let ttl = self.ttl;
        self.items.retain(|n| !n.is_expired(now, ttl));
        before - self.items.len()
    }

    /// When the oldest visible notice expires. A TTL too large to add
    /// never expires.
    pub fn next_expiry(&self) -> Option<DateTime<Utc>> {
        self.items
            .iter()
            .filter_map(|n| n.created_at.checked_add_signed(self.ttl))
            .min()
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_notice_expiry() {
        let n = Notice::new("Product added to cart", NoticeKind::Success, at(0));
        let ttl = TimeDelta::milliseconds(3000);
        assert!(!n.is_expired(at(2999), ttl));
        assert!(n.is_expired(at(3000), ttl));
    }

    #[test]
    fn test_prune_keeps_fresh_notices() {
        let mut notices = Notices::default();
        notices.push(Notice::new("first", NoticeKind::Success, at(0)));
        notices.push(Notice::new("second", NoticeKind::Danger, at(2000)));

        assert_eq!(notices.next_expiry(), Some(at(3000)));
        assert_eq!(notices.prune(at(3500)), 1);
        assert_eq!(notices.items()[0].message, "second");
        assert_eq!(notices.prune(at(5000)), 1);
        assert!(notices.is_empty());
        assert_eq!(notices.next_expiry(), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(NoticeKind::Danger.as_str(), "danger");
        assert_eq!(serde_json::to_string(&NoticeKind::Success).unwrap(), "\"success\"");
    }
}
