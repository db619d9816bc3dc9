use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Action, Focus};
use crate::edit_mode::EditMode;

/// Maps a key press to an action given the focused pane and edit mode.
pub fn action_for(key: KeyEvent, focus: Focus, edit: &EditMode) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::FocusNext),
        _ => {}
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Char(c) if !ctrl => Some(Action::InputChar(c)),
            _ => None,
        },
        Focus::List if edit.toggle_visible() => match key.code {
            KeyCode::Enter => Some(Action::SaveEdit),
            KeyCode::Char('t') if ctrl => Some(Action::ToggleStatus),
            KeyCode::Backspace => Some(Action::DraftBackspace),
            KeyCode::Delete => Some(Action::Delete),
            KeyCode::Up => Some(Action::SelectPrevious),
            KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Char(c) if !ctrl => Some(Action::DraftChar(c)),
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Enter | KeyCode::Char('e') => Some(Action::BeginEdit),
            KeyCode::Delete | KeyCode::Char('x') => Some(Action::Delete),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            _ => None,
        },
    }
}
