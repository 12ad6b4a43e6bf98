//! The reconciled dashboard view-model.
//!
//! [`DashboardData`] holds the last-rendered values for every counter the UI
//! displays. A successful poll cycle replaces it wholesale from one
//! [`StatsSnapshot`]; a failed cycle leaves it untouched, so the display is
//! always stale-but-consistent rather than partially updated.

use std::time::Instant;

use crate::api::StatsSnapshot;

/// Number of scam-type categories in the distribution chart.
pub const SCAM_SERIES_LEN: usize = 5;

/// Number of intelligence categories in the extraction chart.
pub const INTEL_SERIES_LEN: usize = 6;

/// Chart labels for the scam-type distribution, in fixed category order.
pub const SCAM_TYPE_LABELS: [&str; SCAM_SERIES_LEN] =
    ["Banking", "UPI", "Phishing", "Investment", "Romance"];

/// Chart labels for the intelligence-extraction counts, in fixed order.
pub const INTEL_LABELS: [&str; INTEL_SERIES_LEN] =
    ["Bank", "UPI", "Links", "Phone", "Email", "Pattern"];

/// Decide whether a counter change warrants a pulse highlight.
///
/// This is the whole of the change animator: identical consecutive values
/// must not retrigger the pulse, anything else does. The caller replaces the
/// displayed value only when this returns true.
pub fn value_changed(old: u64, new: u64) -> bool {
    old != new
}

/// Last-reconciled scalar and series values, as displayed.
///
/// Mutated only by replacing the whole struct from a fresh snapshot; read by
/// the pulse tracker to compute per-counter deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub active_conversations: u64,
    pub total_messages: u64,
    pub scams_detected: u64,
    /// Average response time in milliseconds.
    pub avg_response_time: f64,
    /// Intelligence-category counts, in [`INTEL_LABELS`] order.
    pub intel_counts: [u64; INTEL_SERIES_LEN],
    /// Scam-type counts, in [`SCAM_TYPE_LABELS`] order.
    pub scam_counts: [u64; SCAM_SERIES_LEN],
    pub last_updated: Instant,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::from_snapshot(&StatsSnapshot::default())
    }
}

impl DashboardData {
    /// Build the view-model from one polled snapshot.
    ///
    /// Missing wire fields have already defaulted to zero during decode, so
    /// this is a plain field mapping with the series laid out in chart order.
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        Self {
            active_conversations: snapshot.active_conversations,
            total_messages: snapshot.total_messages,
            scams_detected: snapshot.scams_detected,
            avg_response_time: snapshot.avg_response_time,
            intel_counts: [
                snapshot.bank_accounts,
                snapshot.upi_ids,
                snapshot.phishing_links,
                snapshot.phone_numbers,
                snapshot.emails,
                snapshot.suspicious_patterns,
            ],
            scam_counts: [
                snapshot.banking_scams,
                snapshot.upi_scams,
                snapshot.phishing_scams,
                snapshot.investment_scams,
                snapshot.romance_scams,
            ],
            last_updated: Instant::now(),
        }
    }

    /// Total intelligence items extracted across all categories.
    pub fn total_intel(&self) -> u64 {
        self.intel_counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_changed() {
        assert!(value_changed(0, 3));
        assert!(value_changed(5, 4));
        assert!(!value_changed(7, 7));
        assert!(!value_changed(0, 0));
    }

    #[test]
    fn test_from_snapshot_series_order() {
        let snapshot = StatsSnapshot {
            scams_detected: 3,
            banking_scams: 3,
            phishing_links: 2,
            suspicious_patterns: 1,
            ..Default::default()
        };

        let data = DashboardData::from_snapshot(&snapshot);
        assert_eq!(data.scams_detected, 3);
        assert_eq!(data.scam_counts, [3, 0, 0, 0, 0]);
        assert_eq!(data.intel_counts, [0, 0, 2, 0, 0, 1]);
        assert_eq!(data.total_intel(), 3);
    }

    #[test]
    fn test_empty_snapshot_is_all_zero() {
        let data = DashboardData::default();
        assert_eq!(data.scam_counts, [0; SCAM_SERIES_LEN]);
        assert_eq!(data.intel_counts, [0; INTEL_SERIES_LEN]);
        assert_eq!(data.avg_response_time, 0.0);
    }
}
