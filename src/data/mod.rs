//! Data models and processing for dashboard state.
//!
//! This module handles the transformation of raw stats snapshots into the
//! view-model the UI renders, plus the bookkeeping around it.
//!
//! ## Submodules
//!
//! - [`stats`]: The reconciled view-model ([`DashboardData`]) and the change
//!   test used to decide whether a counter gets a pulse
//! - [`pulse`]: Pulse-highlight tracking for counters that changed
//! - [`feed`]: The rolling recent-detections feed (capacity 5, newest first)
//!
//! ## Data Flow
//!
//! ```text
//! StatsSnapshot (raw JSON)
//!        │
//!        ▼
//! DashboardData::from_snapshot()
//!        │
//!        ├──▶ Pulses::record_changes() (highlight counters that moved)
//!        │
//!        └──▶ DetectionFeed::push() (when scams_detected > 0)
//! ```

pub mod feed;
pub mod pulse;
pub mod stats;

pub use feed::{DetectionFeed, DetectionRecord, ScamType, FEED_CAPACITY};
pub use pulse::{Counter, Pulses};
pub use stats::{
    value_changed, DashboardData, INTEL_LABELS, INTEL_SERIES_LEN, SCAM_TYPE_LABELS, SCAM_SERIES_LEN,
};
