//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::api::ConnectionStatus;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for the online connection badge and positive values.
    pub online: Color,
    /// Color for the offline badge and error text.
    pub offline: Color,
    /// Color for scam/danger figures (detections, confidence).
    pub danger: Color,
    /// Color for pending/unknown states.
    pub pending: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for a counter whose pulse is active.
    pub pulse: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            online: Color::Green,
            offline: Color::Red,
            danger: Color::Red,
            pending: Color::Yellow,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            pulse: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            online: Color::Green,
            offline: Color::Red,
            danger: Color::Red,
            pending: Color::Yellow,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            pulse: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a connection status badge
    pub fn status_style(&self, status: ConnectionStatus) -> Style {
        match status {
            ConnectionStatus::Unknown => Style::default().fg(self.pending),
            ConnectionStatus::Online => Style::default().fg(self.online),
            ConnectionStatus::Offline => {
                Style::default().fg(self.offline).add_modifier(Modifier::BOLD)
            }
        }
    }
}
