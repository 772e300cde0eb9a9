//! Input adapter
//!
//! Platform key/touch events are collected here between frames and handed to
//! the simulation as one-shot edges.

use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Up,
    Escape,
    Enter,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` (also used by the native runner)
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            "ArrowUp" | "KeyW" => Key::Up,
            "Escape" => Key::Escape,
            "Enter" | "NumpadEnter" => Key::Enter,
            _ => Key::Other,
        }
    }

    /// Keys that make the player jump
    pub fn is_impulse(&self) -> bool {
        matches!(self, Key::Space | Key::Up)
    }
}

/// A raw platform event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Tap or click anywhere
    Touch,
}

/// Edges collected since the last frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    impulse: bool,
    quit: bool,
    any_key: bool,
}

impl InputState {
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.any_key = true;
                if key.is_impulse() {
                    self.impulse = true;
                }
                if key == Key::Escape {
                    self.quit = true;
                }
            }
            InputEvent::Touch => self.impulse = true,
        }
    }

    /// Consume the gameplay edges for this frame
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            impulse: self.impulse,
            quit: self.quit,
        };
        self.clear();
        input
    }

    /// Consume "any key was pressed" (game-over screen)
    pub fn take_any_key(&mut self) -> bool {
        let pressed = self.any_key;
        self.clear();
        pressed
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_consumed_once() {
        let mut input = InputState::default();
        input.handle(InputEvent::KeyDown(Key::Space));
        input.handle(InputEvent::KeyDown(Key::Space));
        assert_eq!(
            input.take_tick_input(),
            TickInput {
                impulse: true,
                quit: false
            }
        );
        assert_eq!(input.take_tick_input(), TickInput::default());
    }

    #[test]
    fn test_escape_quits_touch_jumps() {
        let mut input = InputState::default();
        input.handle(InputEvent::KeyDown(Key::Escape));
        input.handle(InputEvent::Touch);
        let tick = input.take_tick_input();
        assert!(tick.quit);
        assert!(tick.impulse);
    }

    #[test]
    fn test_any_key() {
        let mut input = InputState::default();
        input.handle(InputEvent::KeyDown(Key::Other));
        assert_eq!(input.take_tick_input(), TickInput::default());

        input.handle(InputEvent::KeyDown(Key::from_code("KeyQ")));
        assert!(input.take_any_key());
        assert!(!input.take_any_key());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Key::from_code("ArrowUp"), Key::Up);
        assert_eq!(Key::from_code("Space"), Key::Space);
        assert_eq!(Key::from_code("Escape"), Key::Escape);
    }
}
