use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Fallback bindings for keys no view consumed.
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Tab, _) => Some(AppMessage::ToggleDrawer),
            (KeyCode::Esc, _) => Some(AppMessage::GoHome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('q'))), Some(AppMessage::Quit));
        assert_eq!(
            InputHandler::handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppMessage::Quit)
        );
    }

    #[test]
    fn test_tab_toggles_drawer() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Tab)),
            Some(AppMessage::ToggleDrawer)
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('x'))), None);
    }
}
