//! Background tasks bridging the async HTTP client to the synchronous TUI.
//!
//! Two independent tokio tasks run for the lifetime of the session:
//!
//! - [`poll_loop`]: probes the server once, then fetches `/stats` immediately
//!   and on every interval tick (or sooner, when a refresh is requested).
//!   A failed cycle is reported and skipped; the next tick retries with no
//!   backoff, so the display stays at last-known-good values.
//! - [`analyze_loop`]: serves analyze submissions from the console. The
//!   console's submitting guard already ensures at most one is in flight.
//!
//! Results cross to the UI thread as [`ClientEvent`]s over an unbounded mpsc
//! channel, drained non-blocking on each draw tick. Poll cycles are
//! independent of analyze requests; neither blocks the other.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::Notify;

use crate::api::{AnalysisResult, ApiClient, ConnectionStatus, StatsSnapshot};

/// An event delivered from a background task to the UI thread.
#[derive(Debug)]
pub enum ClientEvent {
    /// Result of a health probe.
    Probe(ConnectionStatus),
    /// One successfully fetched stats snapshot.
    Stats(StatsSnapshot),
    /// A poll cycle failed; the display keeps its previous values.
    PollFailed(String),
    /// An analyze request resolved, successfully or not.
    Analysis {
        message: String,
        outcome: Result<AnalysisResult, String>,
    },
}

/// Sender half used by the UI to dispatch analyze submissions.
pub type AnalyzeSender = mpsc::UnboundedSender<String>;

/// Receiver half drained by the UI thread each tick.
pub type EventReceiver = mpsc::UnboundedReceiver<ClientEvent>;

/// Probe once, then fetch stats immediately and on every interval tick.
///
/// `refresh` wakes the loop early for an immediate cycle (and re-probe).
/// Runs until the task is aborted at TUI teardown.
pub async fn poll_loop(
    client: ApiClient,
    events: mpsc::UnboundedSender<ClientEvent>,
    interval: Duration,
    refresh: Arc<Notify>,
) {
    let _ = events.send(ClientEvent::Probe(client.probe().await));

    loop {
        match client.fetch_stats().await {
            Ok(snapshot) => {
                if events.send(ClientEvent::Stats(snapshot)).is_err() {
                    return;
                }
            }
            Err(e) => {
                if events.send(ClientEvent::PollFailed(e.to_string())).is_err() {
                    return;
                }
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = refresh.notified() => {
                let _ = events.send(ClientEvent::Probe(client.probe().await));
            }
        }
    }
}

/// Serve analyze submissions until the sending side is dropped.
pub async fn analyze_loop(
    client: ApiClient,
    mut submissions: mpsc::UnboundedReceiver<String>,
    events: mpsc::UnboundedSender<ClientEvent>,
) {
    while let Some(message) = submissions.recv().await {
        let outcome = client.analyze(&message).await.map_err(|e| e.to_string());
        if events
            .send(ClientEvent::Analysis { message, outcome })
            .is_err()
        {
            return;
        }
    }
}
