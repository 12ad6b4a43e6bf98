use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, View};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Ctrl+C quits from anywhere, including console text input
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The console captures keystrokes for its input line
    if app.current_view == View::Console {
        handle_console_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // View switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Right | KeyCode::Char('l') => app.next_view(),

        // Direct view access
        KeyCode::Char('1') => app.set_view(View::Dashboard),
        KeyCode::Char('2') => app.set_view(View::Console),

        // Immediate poll cycle + re-probe
        KeyCode::Char('r') => app.request_refresh(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while the console view is active.
///
/// Editing keys are forwarded to the console, which ignores them while a
/// request is in flight. View-switching keys still work so the dashboard
/// stays reachable mid-request.
fn handle_console_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Submit the current input
        KeyCode::Enter => app.submit_test(),

        // Leave the console
        KeyCode::Esc => app.set_view(View::Dashboard),
        KeyCode::Tab => app.next_view(),
        KeyCode::BackTab => app.prev_view(),

        // Edit the input line
        KeyCode::Backspace => app.console.input_backspace(),
        KeyCode::Char(c) => app.console.input_char(c),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        // Tab bar sits on row 1, after the header
        if mouse.row == 1 {
            // Approximate tab positions: Dashboard (0-12), Console (13-23)
            if mouse.column < 13 {
                app.set_view(View::Dashboard);
            } else if mouse.column < 24 {
                app.set_view(View::Console);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::{mpsc, Notify};

    fn test_app() -> (App, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new("http://127.0.0.1:8000".to_string(), tx, Arc::new(Notify::new()));
        (app, rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::from(code));
    }

    #[test]
    fn test_q_quits_on_dashboard_but_types_in_console() {
        let (mut app, _rx) = test_app();

        app.set_view(View::Console);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.console.input(), "q");

        app.set_view(View::Dashboard);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_enter_submits_console_input() {
        let (mut app, mut rx) = test_app();
        app.set_view(View::Console);

        for c in "hello".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(rx.try_recv().unwrap(), "hello");
        assert!(app.console.is_submitting());

        // A second Enter while submitting dispatches nothing
        press(&mut app, KeyCode::Enter);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_typing_ignored_while_submitting() {
        let (mut app, _rx) = test_app();
        app.set_view(View::Console);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.console.input(), "x");
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('z'));
        assert!(!app.show_help);
    }

    #[test]
    fn test_tab_cycles_views() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.current_view, View::Dashboard);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_view, View::Console);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_view, View::Dashboard);
    }
}
