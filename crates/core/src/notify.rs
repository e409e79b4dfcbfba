//! Transient, auto-dismissing notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }
}

#[derive(Debug, Clone)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl Notifications {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!(text = message.as_str(), "notification shown");
        self.toasts.push_back(Toast {
            message,
            created_at: now,
        });
    }

    /// Drop every toast older than the configured duration.
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.toasts.retain(|toast| toast.age(now) < duration);
    }

    /// Newest toast still on screen.
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}
