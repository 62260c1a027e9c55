//! Event tracking stub. Events are only written to the log.

use std::fmt;

pub const LOG_TARGET: &str = "crawlview::tracking";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedEvent<'a> {
    pub category: &'a str,
    pub action: &'a str,
    pub label: &'a str,
}

impl fmt::Display for TrackedEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event tracked: {} - {} - {}",
            self.category, self.action, self.label
        )
    }
}

pub fn track_event(category: &str, action: &str, label: &str) {
    let event = TrackedEvent {
        category,
        action,
        label,
    };
    log::info!(target: LOG_TARGET, "{event}");
}
