use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    PrevSlide,
    NextSlide,
    GoToSlide(usize),
    FocusNext,
    FocusPrev,
    ToggleReadMore,
    Help,
    ClosePopup,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent, help_open: bool) -> Action {
    if help_open {
        return match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::ClosePopup,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::PageDown | KeyCode::Char(' ') => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('h') | KeyCode::Left => Action::PrevSlide,
        KeyCode::Char('l') | KeyCode::Right => Action::NextSlide,
        KeyCode::Char(c @ '1'..='9') => Action::GoToSlide(c as usize - '1' as usize),
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Enter => Action::ToggleReadMore,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_map_to_zero_based_slides() {
        assert_eq!(map_key(key(KeyCode::Char('1')), false), Action::GoToSlide(0));
        assert_eq!(map_key(key(KeyCode::Char('9')), false), Action::GoToSlide(8));
    }

    #[test]
    fn help_popup_swallows_navigation() {
        assert_eq!(map_key(key(KeyCode::Char('l')), true), Action::None);
        assert_eq!(map_key(key(KeyCode::Esc), true), Action::ClosePopup);
        assert_eq!(map_key(key(KeyCode::Esc), false), Action::Quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, true), Action::Quit);
        assert_eq!(map_key(ctrl_c, false), Action::Quit);
    }
}
