use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Heading;

/// What a key press means to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Heading),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Steering - Arrow keys
            KeyCode::Up => KeyAction::Steer(Heading::Up),
            KeyCode::Down => KeyAction::Steer(Heading::Down),
            KeyCode::Left => KeyAction::Steer(Heading::Left),
            KeyCode::Right => KeyAction::Steer(Heading::Right),

            // Steering - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Heading::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Heading::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Heading::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Heading::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
