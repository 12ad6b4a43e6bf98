//! Application state and reconciliation logic.

use std::sync::Arc;

use tokio::sync::Notify;

use crate::api::{ConnectionStatus, StatsSnapshot};
use crate::console::TestConsole;
use crate::data::{DashboardData, DetectionFeed, DetectionRecord, Pulses};
use crate::ui::Theme;
use crate::worker::{AnalyzeSender, ClientEvent};

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// KPI cards, charts, and the recent-detections table.
    Dashboard,
    /// Test console for on-demand analyze requests.
    Console,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Dashboard => View::Console,
            View::Console => View::Dashboard,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        // Two views, so previous and next coincide
        self.next()
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Console => "Console",
        }
    }
}

/// Main application state.
///
/// Owns every live handle and counter for the session: the reconciled
/// view-model, the pulse tracker, the detections feed, the test console, and
/// the channels to the background tasks. Created at activation and dropped at
/// teardown; all mutation happens on the UI thread.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    // Connectivity
    pub status: ConnectionStatus,

    // Reconciled view-model; None until the first successful poll
    pub data: Option<DashboardData>,
    pub pulses: Pulses,
    pub feed: DetectionFeed,
    pub poll_error: Option<String>,

    // Test console
    pub console: TestConsole,

    // UI
    pub theme: Theme,

    server: String,
    analyze_tx: AnalyzeSender,
    refresh: Arc<Notify>,
}

impl App {
    /// Create the application context.
    ///
    /// `server` is the configured base URL (displayed in hints), `analyze_tx`
    /// dispatches console submissions to the analyze worker, and `refresh`
    /// wakes the poll loop for an immediate cycle.
    pub fn new(server: String, analyze_tx: AnalyzeSender, refresh: Arc<Notify>) -> Self {
        Self {
            running: true,
            current_view: View::Dashboard,
            show_help: false,
            status: ConnectionStatus::Unknown,
            data: None,
            pulses: Pulses::new(),
            feed: DetectionFeed::new(),
            poll_error: None,
            console: TestConsole::new(),
            theme: Theme::auto_detect(),
            server,
            analyze_tx,
            refresh,
        }
    }

    /// The configured endpoint root.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Apply one event delivered by a background task.
    pub fn handle_client_event(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::Probe(status) => self.status = status,
            ClientEvent::Stats(snapshot) => self.apply_snapshot(snapshot),
            ClientEvent::PollFailed(err) => {
                // Skip the cycle: previously rendered state stays untouched
                self.poll_error = Some(err);
            }
            ClientEvent::Analysis { message, outcome } => {
                self.console.resolve(message, outcome);
            }
        }
    }

    /// Reconcile one successful snapshot into the view-model.
    ///
    /// The full field set is replaced atomically from the snapshot; counters
    /// that moved get a pulse, both chart series are swapped wholesale, and a
    /// detection record is synthesized when the snapshot reports any scams.
    fn apply_snapshot(&mut self, snapshot: StatsSnapshot) {
        let new = DashboardData::from_snapshot(&snapshot);
        let old = self.data.take().unwrap_or_default();

        self.pulses.record_changes(&old, &new);

        if new.scams_detected > 0 {
            self.feed
                .push(DetectionRecord::synthesize(&old.scam_counts, &new.scam_counts));
        }

        self.data = Some(new);
        self.poll_error = None;
    }

    /// Submit the console input for analysis.
    ///
    /// Validation and the single-flight guard live in the console; nothing is
    /// dispatched unless it accepts the submission.
    pub fn submit_test(&mut self) {
        if let Some(message) = self.console.submit() {
            let _ = self.analyze_tx.send(message);
        }
    }

    /// Request an immediate poll cycle (and re-probe).
    pub fn request_refresh(&mut self) {
        self.refresh.notify_one();
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
