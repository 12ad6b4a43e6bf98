//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::api::ConnectionStatus;
use crate::app::{App, View};

/// Render the header bar with the connection badge and update age.
///
/// Displays: status indicator, server status text, total detections, and how
/// long ago the last successful poll landed.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let status_style = app.theme.status_style(app.status);
    let badge = match app.status {
        ConnectionStatus::Unknown => "○",
        ConnectionStatus::Online => "●",
        ConnectionStatus::Offline => "●",
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", badge), status_style),
        Span::styled("SCAMWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(app.status.label(), status_style),
    ];

    if let Some(ref data) = app.data {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{}", data.scams_detected),
            Style::default().fg(app.theme.danger).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" scams │ "));
        spans.push(Span::styled(
            format!("{}", data.total_intel()),
            Style::default().fg(app.theme.highlight),
        ));
        spans.push(Span::raw(" intel items │ "));
        spans.push(Span::raw(format!(
            "updated {:.1}s ago",
            data.last_updated.elapsed().as_secs_f64()
        )));
    } else {
        spans.push(Span::raw(" │ Loading..."));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![Line::from(" 1:Dashboard "), Line::from(" 2:Console ")];

    let selected = match app.current_view {
        View::Dashboard => 0,
        View::Console => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows context-sensitive key hints; a failed poll cycle is surfaced here
/// while the content above stays at last-known-good values.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(ref err) = app.poll_error {
        let paragraph = Paragraph::new(format!(" poll failed: {} (retrying) | q:quit", err))
            .style(Style::default().fg(app.theme.offline));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.current_view {
        View::Dashboard => "Tab:switch r:refresh ?:help q:quit",
        View::Console => {
            if app.console.is_submitting() {
                "Analyzing... | Tab:switch Ctrl+C:quit"
            } else {
                "Type a message | Enter:send Esc:back Tab:switch Ctrl+C:quit"
            }
        }
    };

    let status = format!(" {} | {} | {}", app.current_view.label(), app.server(), controls);
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Views",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Tab ←/→    Switch views"),
        Line::from("  1          Dashboard"),
        Line::from("  2          Console"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r          Poll now and re-probe"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Console",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Enter      Send message for analysis"),
        Line::from("  Esc        Back to dashboard"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?          Toggle help"),
        Line::from("  q Ctrl+C   Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
