//! Per-frame input snapshots
//!
//! The host samples its windowing backend once per frame and hands the
//! editor an [`InputSnapshot`]. Screen coordinates use a top-left origin.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Mouse / pointer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Keyboard keys the editor binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Delete,
    Backspace,
    Shift,
    Control,
    Alt,
    /// Printable key, lowercase
    Char(char),
}

/// Edge and level state of one button for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Went down this frame
    pub pressed: bool,
    /// Is down this frame (true on the press frame too)
    pub held: bool,
    /// Went up this frame
    pub released: bool,
}

impl ButtonState {
    pub const PRESSED: Self = Self {
        pressed: true,
        held: true,
        released: false,
    };
    pub const HELD: Self = Self {
        pressed: false,
        held: true,
        released: false,
    };
    pub const RELEASED: Self = Self {
        pressed: false,
        held: false,
        released: true,
    };
}

/// Input sampled for a single frame
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Pointer position in screen pixels
    pub pointer: Vec2,
    pub primary: ButtonState,
    pub secondary: ButtonState,
    pub middle: ButtonState,
    /// Keys that went down this frame
    pub keys_pressed: HashSet<Key>,
    /// Keys that are down this frame
    pub keys_held: HashSet<Key>,
    /// Scroll wheel delta, positive away from the user
    pub scroll: f32,
    /// The pointer is over a UI element; scene clicks are ignored
    pub pointer_over_ui: bool,
}

impl InputSnapshot {
    /// Snapshot with the pointer at `pointer` and nothing pressed
    pub fn at(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Default::default()
        }
    }

    pub fn button(&self, button: PointerButton) -> ButtonState {
        match button {
            PointerButton::Primary => self.primary,
            PointerButton::Secondary => self.secondary,
            PointerButton::Middle => self.middle,
        }
    }

    fn button_mut(&mut self, button: PointerButton) -> &mut ButtonState {
        match button {
            PointerButton::Primary => &mut self.primary,
            PointerButton::Secondary => &mut self.secondary,
            PointerButton::Middle => &mut self.middle,
        }
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn key_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    pub fn press(mut self, button: PointerButton) -> Self {
        *self.button_mut(button) = ButtonState::PRESSED;
        self
    }

    pub fn hold(mut self, button: PointerButton) -> Self {
        *self.button_mut(button) = ButtonState::HELD;
        self
    }

    pub fn release(mut self, button: PointerButton) -> Self {
        *self.button_mut(button) = ButtonState::RELEASED;
        self
    }

    /// Key went down this frame (and is therefore held)
    pub fn with_key_pressed(mut self, key: Key) -> Self {
        self.keys_pressed.insert(key);
        self.keys_held.insert(key);
        self
    }

    pub fn with_key_held(mut self, key: Key) -> Self {
        self.keys_held.insert(key);
        self
    }

    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn over_ui(mut self) -> Self {
        self.pointer_over_ui = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_implies_held() {
        let input = InputSnapshot::at(Vec2::ZERO).press(PointerButton::Primary);
        assert!(input.primary.pressed);
        assert!(input.primary.held);
        assert_eq!(input.button(PointerButton::Middle), ButtonState::default());
    }

    #[test]
    fn test_release_is_not_held() {
        let input = InputSnapshot::at(Vec2::ZERO).release(PointerButton::Middle);
        assert!(input.middle.released);
        assert!(!input.middle.held);
    }

    #[test]
    fn test_key_pressed_is_held() {
        let input = InputSnapshot::default().with_key_pressed(Key::Delete);
        assert!(input.key_pressed(Key::Delete));
        assert!(input.key_held(Key::Delete));
        assert!(!input.key_pressed(Key::Char('r')));
    }
}
