//! Test console view rendering.
//!
//! An input line on top and the output area below it. The input box shows a
//! cursor while editable and dims while a request is in flight; the output
//! area renders whatever the console's state machine last produced
//! (placeholder, validation message, pending spinner text, report, or error).

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::console::ConsoleOutput;

/// Render the Console view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Input line
        Constraint::Min(4),    // Output area
    ])
    .split(area);

    render_input(frame, app, chunks[0]);
    render_output(frame, app, chunks[1]);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let submitting = app.console.is_submitting();

    let (title, border_style) = if submitting {
        (
            " Message (analyzing...) ",
            Style::default().fg(app.theme.pending),
        )
    } else {
        (" Message ", Style::default().fg(app.theme.highlight))
    };

    let text = if submitting {
        app.console.input().to_string()
    } else {
        format!("{}_", app.console.input())
    };

    let style = if submitting {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(text).style(style).block(block), area);
}

fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let output = app.console.output();

    let style = match output {
        ConsoleOutput::Invalid | ConsoleOutput::Error(_) => {
            Style::default().fg(app.theme.offline)
        }
        ConsoleOutput::Pending => Style::default().fg(app.theme.pending),
        ConsoleOutput::Report { .. } => Style::default(),
        ConsoleOutput::Empty => Style::default().add_modifier(Modifier::DIM),
    };

    let lines: Vec<Line> = output
        .lines(app.server())
        .into_iter()
        .map(Line::from)
        .collect();

    let block = Block::default()
        .title(" Analysis Output ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new(lines)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(paragraph, area);
}
