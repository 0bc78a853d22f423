//! Input handling for the TUI.
//!
//! This module handles keyboard and mouse input and translates it into
//! application actions.

use crate::parameter::Parameter;
use crate::selector::SelectorTarget;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Actions that can be performed based on user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Quit the application
    Quit,
    /// Close the open overlay, or quit when none is open
    Dismiss,
    /// Toggle help panel
    ToggleHelp,
    /// Tap a selector button through its keyboard shortcut
    Tap(SelectorTarget),
    /// Left click at a screen cell
    Click { column: u16, row: u16 },
    /// Terminal was resized
    Resize { width: u16, height: u16 },
    /// No action
    None,
}

/// Wait up to `timeout` for an event and return the corresponding action
pub fn handle_input(timeout: Duration) -> std::io::Result<InputAction> {
    if event::poll(timeout)? {
        let action = match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                map_key_to_action(key_event)
            }
            Event::Mouse(mouse_event) => map_mouse_to_action(mouse_event),
            Event::Resize(width, height) => InputAction::Resize { width, height },
            _ => InputAction::None,
        };
        return Ok(action);
    }
    Ok(InputAction::None)
}

/// Map a key event to an application action
fn map_key_to_action(key_event: KeyEvent) -> InputAction {
    match key_event.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
        KeyCode::Esc => InputAction::Dismiss,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::Quit
        }

        // Selector
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::Tap(SelectorTarget::Main),
        KeyCode::Char('1') | KeyCode::Char('a') | KeyCode::Char('A') => {
            InputAction::Tap(SelectorTarget::Option(Parameter::AirQuality))
        }
        KeyCode::Char('2') | KeyCode::Char('u') | KeyCode::Char('U') => {
            InputAction::Tap(SelectorTarget::Option(Parameter::UvIndex))
        }
        KeyCode::Char('i') | KeyCode::Char('I') => InputAction::Tap(SelectorTarget::Info),

        // Help
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::F(1) => {
            InputAction::ToggleHelp
        }

        _ => InputAction::None,
    }
}

/// Map a mouse event to an application action
fn map_mouse_to_action(mouse_event: MouseEvent) -> InputAction {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => InputAction::Click {
            column: mouse_event.column,
            row: mouse_event.row,
        },
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_quit_actions() {
        assert_eq!(map_key_to_action(key(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(
            map_key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
        assert_eq!(map_key_to_action(key(KeyCode::Esc)), InputAction::Dismiss);
    }

    #[test]
    fn test_selector_shortcuts() {
        assert_eq!(
            map_key_to_action(key(KeyCode::Enter)),
            InputAction::Tap(SelectorTarget::Main)
        );
        assert_eq!(
            map_key_to_action(key(KeyCode::Char('1'))),
            InputAction::Tap(SelectorTarget::Option(Parameter::AirQuality))
        );
        assert_eq!(
            map_key_to_action(key(KeyCode::Char('u'))),
            InputAction::Tap(SelectorTarget::Option(Parameter::UvIndex))
        );
        assert_eq!(
            map_key_to_action(key(KeyCode::Char('i'))),
            InputAction::Tap(SelectorTarget::Info)
        );
    }

    #[test]
    fn test_left_click_only() {
        assert_eq!(
            map_mouse_to_action(mouse(MouseEventKind::Down(MouseButton::Left))),
            InputAction::Click { column: 7, row: 3 }
        );
        assert_eq!(
            map_mouse_to_action(mouse(MouseEventKind::Down(MouseButton::Right))),
            InputAction::None
        );
        assert_eq!(map_mouse_to_action(mouse(MouseEventKind::Moved)), InputAction::None);
    }
}
