use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Running counters over every container the engine has seen.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    containers_solved: u64,
    containers_skipped: u64,
    children_placed: u64,
    children_overflowed: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_solved(&mut self, placed: usize, overflowed: usize) {
        self.containers_solved = self.containers_solved.saturating_add(1);
        self.children_placed = self.children_placed.saturating_add(placed as u64);
        self.children_overflowed = self.children_overflowed.saturating_add(overflowed as u64);
    }

    pub fn record_skipped(&mut self) {
        self.containers_skipped = self.containers_skipped.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            containers_solved: self.containers_solved,
            containers_skipped: self.containers_skipped,
            children_placed: self.children_placed,
            children_overflowed: self.children_overflowed,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub containers_solved: u64,
    pub containers_skipped: u64,
    pub children_placed: u64,
    pub children_overflowed: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("containers_solved".to_string(), json!(self.containers_solved));
        map.insert("containers_skipped".to_string(), json!(self.containers_skipped));
        map.insert("children_placed".to_string(), json!(self.children_placed));
        map.insert("children_overflowed".to_string(), json!(self.children_overflowed));
        map
    }
}
