//! Pulse-highlight tracking for changed counters.
//!
//! When a poll cycle changes a displayed counter, the UI highlights it for a
//! short fixed duration so the eye is drawn to movement without constant
//! flicker at the polling cadence. This module only does the bookkeeping;
//! styling lives in the UI layer.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::stats::{value_changed, DashboardData, INTEL_SERIES_LEN};

/// How long a pulse highlight stays active after a change.
const PULSE_DURATION: Duration = Duration::from_millis(500);

/// A pulse-capable counter on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    ActiveConversations,
    TotalMessages,
    ScamsDetected,
    /// Index into [`crate::data::INTEL_LABELS`].
    Intel(usize),
}

/// Tracks which counters recently changed.
#[derive(Debug, Clone, Default)]
pub struct Pulses {
    fired: HashMap<Counter, Instant>,
}

impl Pulses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a pulse for one counter, restarting it if already active.
    pub fn trigger(&mut self, counter: Counter) {
        self.fired.insert(counter, Instant::now());
    }

    /// Whether a counter's pulse is still within its display window.
    pub fn is_active(&self, counter: Counter) -> bool {
        self.fired
            .get(&counter)
            .is_some_and(|fired| fired.elapsed() < PULSE_DURATION)
    }

    /// Compare two reconciled view-models and pulse every counter that moved.
    ///
    /// Identical snapshots trigger nothing, so an unchanged counter never
    /// re-pulses on the next cycle.
    pub fn record_changes(&mut self, old: &DashboardData, new: &DashboardData) {
        if value_changed(old.active_conversations, new.active_conversations) {
            self.trigger(Counter::ActiveConversations);
        }
        if value_changed(old.total_messages, new.total_messages) {
            self.trigger(Counter::TotalMessages);
        }
        if value_changed(old.scams_detected, new.scams_detected) {
            self.trigger(Counter::ScamsDetected);
        }
        for i in 0..INTEL_SERIES_LEN {
            if value_changed(old.intel_counts[i], new.intel_counts[i]) {
                self.trigger(Counter::Intel(i));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_and_expiry_window() {
        let mut pulses = Pulses::new();
        assert!(!pulses.is_active(Counter::ScamsDetected));

        pulses.trigger(Counter::ScamsDetected);
        assert!(pulses.is_active(Counter::ScamsDetected));
        assert!(!pulses.is_active(Counter::TotalMessages));
    }

    #[test]
    fn test_identical_snapshots_do_not_pulse() {
        let mut pulses = Pulses::new();
        let data = DashboardData::default();

        pulses.record_changes(&data, &data.clone());
        assert!(!pulses.is_active(Counter::ActiveConversations));
        assert!(!pulses.is_active(Counter::ScamsDetected));
        assert!(!pulses.is_active(Counter::Intel(0)));
    }

    #[test]
    fn test_changed_counters_pulse() {
        let mut pulses = Pulses::new();
        let old = DashboardData::default();
        let mut new = old.clone();
        new.scams_detected = 3;
        new.intel_counts[2] = 1;

        pulses.record_changes(&old, &new);
        assert!(pulses.is_active(Counter::ScamsDetected));
        assert!(pulses.is_active(Counter::Intel(2)));
        assert!(!pulses.is_active(Counter::TotalMessages));
        assert!(!pulses.is_active(Counter::Intel(0)));
    }
}
