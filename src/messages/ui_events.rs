//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Field navigation
    NextField,
    PrevField,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Submission
    Submit,

    // Activity log
    ScrollUp,
    ScrollDown,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, input_mode: InputMode, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Help popup swallows everything
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            KeyCode::Char('s') => Some(UiEvent::Submit),
            KeyCode::PageUp => Some(UiEvent::ScrollUp),
            KeyCode::PageDown => Some(UiEvent::ScrollDown),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_submit_key() {
        let event = key_to_ui_event(press(KeyCode::Char('s')), InputMode::Normal, false);
        assert!(matches!(event, Some(UiEvent::Submit)));
    }

    #[test]
    fn test_editing_mode_captures_chars() {
        let event = key_to_ui_event(press(KeyCode::Char('s')), InputMode::Editing, false);
        assert!(matches!(event, Some(UiEvent::CharInput('s'))));
    }

    #[test]
    fn test_help_popup_closes_on_any_key() {
        let event = key_to_ui_event(press(KeyCode::Char('x')), InputMode::Normal, true);
        assert!(matches!(event, Some(UiEvent::CloseHelp)));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert!(key_to_ui_event(key, InputMode::Normal, false).is_none());
    }
}
