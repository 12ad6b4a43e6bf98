// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tokio::sync::{mpsc, Notify};

mod api;
mod app;
mod console;
mod data;
mod events;
mod ui;
mod worker;

use api::ApiClient;
use app::{App, View};
use worker::EventReceiver;

#[derive(Parser, Debug)]
#[command(name = "scamwatch")]
#[command(about = "Live TUI dashboard for monitoring a scam-detection honeypot API")]
struct Args {
    /// Base URL of the honeypot API server
    #[arg(short, long, default_value = api::DEFAULT_BASE_URL)]
    url: String,

    /// Stats polling interval in seconds
    #[arg(short, long, default_value = "3")]
    interval: u64,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value = "10")]
    timeout: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let client = ApiClient::new(&args.url, Duration::from_secs(args.timeout))
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))?;

    // Background runtime: the TUI runs synchronously on the main thread while
    // the poller and the analyze worker run as tokio tasks.
    let rt = tokio::runtime::Runtime::new()?;

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (analyze_tx, analyze_rx) = mpsc::unbounded_channel();
    let refresh = Arc::new(Notify::new());

    let poller = rt.spawn(worker::poll_loop(
        client.clone(),
        events_tx.clone(),
        Duration::from_secs(args.interval),
        Arc::clone(&refresh),
    ));
    let analyzer = rt.spawn(worker::analyze_loop(client, analyze_rx, events_tx));

    let mut app = App::new(args.url, analyze_tx, refresh);
    let result = run_tui(&mut app, events_rx);

    // The recurring schedule stops here; in-flight requests are not cancelled
    // individually, they just have nowhere left to report to.
    poller.abort();
    analyzer.abort();

    result
}

/// Run the TUI on the current thread until the user quits.
fn run_tui(app: &mut App, events_rx: EventReceiver) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let result = run_app(&mut terminal, app, events_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut events_rx: EventReceiver,
) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 70;
    const MIN_HEIGHT: u16 = 24;

    while app.running {
        // Drain background task results before drawing
        while let Ok(event) = events_rx.try_recv() {
            app.handle_client_event(event);
        }

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(20),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::common::render_tabs(frame, app, chunks[1]);

            match app.current_view {
                View::Dashboard => ui::dashboard::render(frame, app, chunks[2]),
                View::Console => ui::console::render(frame, app, chunks[2]),
            }

            ui::common::render_status_bar(frame, app, chunks[3]);

            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for terminal events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
