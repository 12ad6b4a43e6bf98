// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # scamwatch
//!
//! A live terminal dashboard and library for monitoring a scam-detection
//! honeypot API.
//!
//! The dashboard polls the honeypot's aggregate counters at a fixed interval,
//! reconciles them into view-model state (KPI counters, two chart series, a
//! capped rolling detections feed), and offers an on-demand test console that
//! submits a single message to the analysis endpoint.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     UI thread (sync)                         │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal │ │
//! │  │ (state) │    │(reconcile)    │(render) │    │          │ │
//! │  └────▲────┘    └──────────┘    └─────────┘    └──────────┘ │
//! │       │ mpsc events                                          │
//! ├───────┼──────────────────────────────────────────────────────┤
//! │  ┌────┴────┐        tokio runtime (background)               │
//! │  │ worker  │◀── poll_loop (GET /stats) | analyze_loop (POST) │
//! │  └────┬────┘                                                 │
//! │       ▼                                                      │
//! │  ┌─────────┐                                                 │
//! │  │   api   │──── reqwest ───▶ honeypot server                │
//! │  └─────────┘                                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, snapshot reconciliation, view navigation
//! - **[`api`]**: HTTP client for the `/health`, `/stats` and `/analyze`
//!   endpoints, plus the wire types
//! - **[`worker`]**: Background tokio tasks bridging async HTTP to the sync TUI
//! - **[`data`]**: View-model, change-pulse tracking, rolling detections feed
//! - **[`console`]**: The single-flight test-request state machine
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Behavior notes
//!
//! - A failed poll cycle is skipped: the display keeps its last-known-good
//!   values and the next interval tick retries, with no backoff.
//! - At most one analyze request is in flight; the console ignores input and
//!   submissions for the duration.
//! - Detection-feed rows are display artifacts: the scam-type tag derives from
//!   real per-category deltas, but confidence/message/extraction figures are
//!   bounded pseudo-random values for display variety.
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch the default local honeypot server
//! scamwatch
//!
//! # Custom server and a faster polling cadence
//! scamwatch --url http://10.0.0.5:8000 --interval 1
//! ```
//!
//! ### Driving the console state machine
//!
//! ```
//! use scamwatch::console::TestConsole;
//!
//! let mut console = TestConsole::new();
//! for c in "hello".chars() {
//!     console.input_char(c);
//! }
//! let message = console.submit().expect("non-empty input is accepted");
//! assert_eq!(message, "hello");
//! assert!(console.is_submitting());
//! ```
//!
//! ### Talking to the API directly
//!
//! ```no_run
//! use std::time::Duration;
//! use scamwatch::api::ApiClient;
//!
//! # tokio_test::block_on(async {
//! let client = ApiClient::new("http://127.0.0.1:8000", Duration::from_secs(10))?;
//! let snapshot = client.fetch_stats().await?;
//! println!("{} scams detected", snapshot.scams_detected);
//! # Ok::<_, scamwatch::api::ApiError>(())
//! # });
//! ```

pub mod api;
pub mod app;
pub mod console;
pub mod data;
pub mod events;
pub mod ui;
pub mod worker;

// Re-export main types for convenience
pub use api::{AnalysisResult, ApiClient, ApiError, ConnectionStatus, StatsSnapshot};
pub use app::App;
pub use console::{ConsoleOutput, RequestState, TestConsole};
pub use data::{DashboardData, DetectionFeed, DetectionRecord, ScamType};
pub use worker::{ClientEvent, EventReceiver};
