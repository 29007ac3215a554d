use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::action::Action;
use crate::app::InputMode;

/// Map a crossterm terminal event to an action, respecting input mode.
pub fn map_event(event: &Event, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::ForceQuit;
            }

            match input_mode {
                InputMode::Normal => map_key_normal(key),
                InputMode::Count => map_key_count(key),
            }
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(..) => Action::Resize,
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::MoveDown,
        MouseEventKind::ScrollUp => Action::MoveUp,
        MouseEventKind::Down(MouseButton::Left) => Action::ClickAt(mouse.column, mouse.row),
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('g') => Action::GoTop,
        KeyCode::Char('G') => Action::GoBottom,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => Action::NextPage,
        KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => Action::PrevPage,
        KeyCode::Home => Action::FirstPage,
        KeyCode::End => Action::LastPage,
        KeyCode::Char('r') => Action::Reload,
        KeyCode::Char(' ') => Action::ToggleRow,
        KeyCode::Char('a') => Action::ToggleAllOnPage,
        KeyCode::Char('n') => Action::OpenBulkSelect,
        KeyCode::Char('c') => Action::ClearSelection,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Enter => Action::ToggleDetail,
        KeyCode::Esc => Action::NavigateBack,
        _ => Action::None,
    }
}

fn map_key_count(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Enter => Action::CountSubmit,
        KeyCode::Backspace => Action::CountBackspace,
        KeyCode::Char(c) => Action::CountInput(c),
        _ => Action::None,
    }
}
