use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    First,
    Last,
    PageUp,
    PageDown,
    Activate,
    ToggleDisplayMode,
    ToggleHelp,
    Quit,
    Noop,
}

pub fn action_for_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::Noop,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Move(Direction::Right),
        KeyCode::Home | KeyCode::Char('g') => Action::First,
        KeyCode::End | KeyCode::Char('G') => Action::Last,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char('d') => Action::ToggleDisplayMode,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vim_and_arrow_keys_agree() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('j'))),
            action_for_key(key(KeyCode::Down))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('h'))),
            Action::Move(Direction::Left)
        );
    }

    #[test]
    fn activation_and_mode_keys() {
        assert_eq!(action_for_key(key(KeyCode::Enter)), Action::Activate);
        assert_eq!(action_for_key(key(KeyCode::Char(' '))), Action::Activate);
        assert_eq!(
            action_for_key(key(KeyCode::Char('d'))),
            Action::ToggleDisplayMode
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(ev), Action::Quit);
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(ctrl_d), Action::Noop);
    }
}
