//! Rolling recent-detections feed.
//!
//! The feed is a display artifact, not a detection log: when a poll cycle
//! reports any scams detected, one record is synthesized and pushed at the
//! head, evicting the oldest past capacity. The scam-type tag is derived from
//! the real per-category delta between consecutive snapshots; the confidence,
//! message-count and extraction fields are bounded pseudo-random values that
//! exist purely for display variety.

use std::collections::VecDeque;

use chrono::Local;
use rand::distributions::Alphanumeric;
use rand::Rng;

use super::stats::SCAM_SERIES_LEN;

/// Maximum number of detection rows kept in the feed.
pub const FEED_CAPACITY: usize = 5;

/// Scam category tags, in the fixed chart/category ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScamType {
    Banking,
    Upi,
    Phishing,
    Investment,
    Romance,
}

impl ScamType {
    /// All categories in fixed order, matching the scam-type series layout.
    pub const ALL: [ScamType; SCAM_SERIES_LEN] = [
        ScamType::Banking,
        ScamType::Upi,
        ScamType::Phishing,
        ScamType::Investment,
        ScamType::Romance,
    ];

    /// Badge label for the detections table.
    pub fn label(&self) -> &'static str {
        match self {
            ScamType::Banking => "BANKING",
            ScamType::Upi => "UPI",
            ScamType::Phishing => "PHISHING",
            ScamType::Investment => "INVESTMENT",
            ScamType::Romance => "ROMANCE",
        }
    }
}

/// One row in the recent-detections table.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRecord {
    /// Short display identifier (`conv-xxxxxxxxx`).
    pub id: String,
    pub scam_type: ScamType,
    /// Detection confidence as a whole percentage (60–95).
    pub confidence: u8,
    /// Messages exchanged in the conversation (2–6).
    pub messages: u32,
    /// Intelligence-extraction progress as a whole percentage (10–49).
    pub extraction: u8,
    /// Wall-clock time of the qualifying poll cycle (`HH:MM:SS`).
    pub time: String,
}

impl DetectionRecord {
    /// Synthesize a record for one qualifying poll cycle.
    ///
    /// The category is the one whose counter grew the most since the previous
    /// snapshot; when no per-category growth is visible (the counters did not
    /// move, or moved down), the first category in fixed order is used as a
    /// fallback. The remaining fields are synthetic display values.
    pub fn synthesize(
        old_counts: &[u64; SCAM_SERIES_LEN],
        new_counts: &[u64; SCAM_SERIES_LEN],
    ) -> Self {
        let mut rng = rand::thread_rng();
        let id: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(9)
            .map(|c| (c as char).to_ascii_lowercase())
            .collect();

        Self {
            id: format!("conv-{}", id),
            scam_type: leading_category(old_counts, new_counts),
            confidence: rng.gen_range(60..=95),
            messages: rng.gen_range(2..=6),
            extraction: rng.gen_range(10..=49),
            time: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// The category with the largest positive delta between two snapshots.
///
/// Ties resolve to the earliest category in fixed order; no positive delta at
/// all resolves to the first category.
pub fn leading_category(
    old_counts: &[u64; SCAM_SERIES_LEN],
    new_counts: &[u64; SCAM_SERIES_LEN],
) -> ScamType {
    let mut best = ScamType::ALL[0];
    let mut best_delta = 0u64;

    for (i, scam_type) in ScamType::ALL.iter().enumerate() {
        let delta = new_counts[i].saturating_sub(old_counts[i]);
        if delta > best_delta {
            best = *scam_type;
            best_delta = delta;
        }
    }

    best
}

/// Ordered rolling feed, newest first, at most [`FEED_CAPACITY`] entries.
#[derive(Debug, Clone, Default)]
pub struct DetectionFeed {
    records: VecDeque<DetectionRecord>,
}

impl DetectionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at the head, evicting the tail past capacity.
    pub fn push(&mut self, record: DetectionRecord) {
        if self.records.len() >= FEED_CAPACITY {
            self.records.pop_back();
        }
        self.records.push_front(record);
    }

    /// Records newest first.
    pub fn iter(&self) -> impl Iterator<Item = &DetectionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> DetectionRecord {
        DetectionRecord {
            id: id.to_string(),
            scam_type: ScamType::Banking,
            confidence: 80,
            messages: 3,
            extraction: 25,
            time: "12:00:00".to_string(),
        }
    }

    #[test]
    fn test_feed_caps_at_capacity_newest_first() {
        let mut feed = DetectionFeed::new();
        for i in 0..8 {
            feed.push(record(&format!("conv-{}", i)));
            assert_eq!(feed.len(), (i + 1).min(FEED_CAPACITY));
        }

        let ids: Vec<&str> = feed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["conv-7", "conv-6", "conv-5", "conv-4", "conv-3"]);
    }

    #[test]
    fn test_leading_category_from_delta() {
        let old = [1, 0, 2, 0, 0];
        let new = [1, 0, 5, 1, 0];
        assert_eq!(leading_category(&old, &new), ScamType::Phishing);
    }

    #[test]
    fn test_leading_category_fallback_when_no_growth() {
        let counts = [2, 2, 2, 2, 2];
        assert_eq!(leading_category(&counts, &counts), ScamType::Banking);

        // A shrinking series also falls back to the first category
        assert_eq!(
            leading_category(&[5, 5, 5, 5, 5], &[1, 1, 1, 1, 1]),
            ScamType::Banking
        );
    }

    #[test]
    fn test_leading_category_first_snapshot() {
        // First successful poll diffs against an all-zero baseline
        let old = [0; SCAM_SERIES_LEN];
        let new = [3, 0, 0, 0, 0];
        assert_eq!(leading_category(&old, &new), ScamType::Banking);
    }

    #[test]
    fn test_synthesized_fields_within_documented_ranges() {
        for _ in 0..50 {
            let r = DetectionRecord::synthesize(&[0; SCAM_SERIES_LEN], &[0, 0, 0, 1, 0]);
            assert!(r.id.starts_with("conv-"));
            assert_eq!(r.id.len(), "conv-".len() + 9);
            assert_eq!(r.scam_type, ScamType::Investment);
            assert!((60..=95).contains(&r.confidence));
            assert!((2..=6).contains(&r.messages));
            assert!((10..=49).contains(&r.extraction));
        }
    }
}
