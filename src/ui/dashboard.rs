//! Dashboard view rendering.
//!
//! Four KPI cards, the intelligence counter row, the two chart panels
//! (scam-type distribution and intelligence extraction), and the rolling
//! recent-detections table. Counters whose pulse is active render in the
//! theme's pulse style; both charts are redrawn wholesale from the current
//! series with no transition effects.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::{Counter, INTEL_LABELS, SCAM_TYPE_LABELS};

/// Render the Dashboard view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // KPI cards
        Constraint::Length(3), // Intelligence counters
        Constraint::Min(6),    // Charts
        Constraint::Length(8), // Recent detections (5 rows + header + borders)
    ])
    .split(area);

    render_kpi_row(frame, app, chunks[0]);
    render_intel_row(frame, app, chunks[1]);
    render_charts(frame, app, chunks[2]);
    render_detections(frame, app, chunks[3]);
}

fn render_kpi_row(frame: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    let (active, messages, scams, avg_ms) = match app.data {
        Some(ref d) => (
            d.active_conversations.to_string(),
            d.total_messages.to_string(),
            d.scams_detected.to_string(),
            format!("{:.2}ms", d.avg_response_time),
        ),
        None => ("-".into(), "-".into(), "-".into(), "-".into()),
    };

    render_card(
        frame,
        app,
        cards[0],
        "Active Conversations",
        active,
        app.pulses.is_active(Counter::ActiveConversations),
    );
    render_card(
        frame,
        app,
        cards[1],
        "Total Messages",
        messages,
        app.pulses.is_active(Counter::TotalMessages),
    );
    render_card(
        frame,
        app,
        cards[2],
        "Scams Detected",
        scams,
        app.pulses.is_active(Counter::ScamsDetected),
    );
    // Average response time is displayed directly, without pulse treatment
    render_card(frame, app, cards[3], "Avg Response Time", avg_ms, false);
}

fn render_card(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    value: String,
    pulsing: bool,
) {
    let value_style = if pulsing {
        app.theme.pulse
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new(Line::styled(value, value_style))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

fn render_intel_row(frame: &mut Frame, app: &App, area: Rect) {
    let cells = Layout::horizontal([Constraint::Ratio(1, 6); 6]).split(area);

    for (i, label) in INTEL_LABELS.iter().enumerate() {
        let value = match app.data {
            Some(ref d) => d.intel_counts[i].to_string(),
            None => "-".into(),
        };
        render_card(frame, app, cells[i], label, value, app.pulses.is_active(Counter::Intel(i)));
    }
}

fn render_charts(frame: &mut Frame, app: &App, area: Rect) {
    let panels = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(area);

    let (scam_counts, intel_counts) = match app.data {
        Some(ref d) => (d.scam_counts, d.intel_counts),
        None => Default::default(),
    };

    render_bar_chart(
        frame,
        app,
        panels[0],
        " Scam Type Distribution ",
        &SCAM_TYPE_LABELS,
        &scam_counts,
    );
    render_bar_chart(
        frame,
        app,
        panels[1],
        " Intelligence Extracted ",
        &INTEL_LABELS,
        &intel_counts,
    );
}

fn render_bar_chart(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    labels: &[&'static str],
    counts: &[u64],
) {
    let bars: Vec<Bar> = labels
        .iter()
        .zip(counts)
        .map(|(label, &count)| {
            Bar::default()
                .value(count)
                .label(Line::from(*label))
                .style(Style::default().fg(app.theme.highlight))
                .value_style(Style::default().add_modifier(Modifier::BOLD))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_detections(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Recent Detections ({}) ", app.feed.len()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if app.feed.is_empty() {
        let empty = Paragraph::new("No detections yet")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["ID", "Type", "Confidence", "Messages", "Extracted", "Time"])
        .style(app.theme.header)
        .height(1);

    let rows: Vec<Row> = app
        .feed
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.id.clone()).style(Style::default().fg(app.theme.highlight)),
                Cell::from(r.scam_type.label()),
                Cell::from(format!("{}%", r.confidence))
                    .style(Style::default().fg(app.theme.danger)),
                Cell::from(r.messages.to_string()),
                Cell::from(format!("{}%", r.extraction)),
                Cell::from(r.time.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(2), // ID
        Constraint::Fill(2), // Type
        Constraint::Fill(1), // Confidence
        Constraint::Fill(1), // Messages
        Constraint::Fill(1), // Extracted
        Constraint::Fill(1), // Time
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
