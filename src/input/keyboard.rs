//! Keyboard state

use super::codes::{SCANCODE_COUNT, Scancode};
use super::events::PlatformEvent;
use super::state::{ButtonState, ButtonTracker};

/// Press state of every scancode
#[derive(Debug, Clone)]
pub struct KeyboardState {
    keys: Box<[ButtonTracker; SCANCODE_COUNT]>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            keys: Box::new([ButtonTracker::default(); SCANCODE_COUNT]),
        }
    }

    /// Apply a key event; returns false for non-keyboard events
    pub fn handle_event(&mut self, event: &PlatformEvent) -> bool {
        match *event {
            PlatformEvent::KeyDown { scancode } => self.keys[scancode.index()].set_raw(true),
            PlatformEvent::KeyUp { scancode } => self.keys[scancode.index()].set_raw(false),
            _ => return false,
        }
        true
    }

    pub fn advance(&mut self) {
        for key in self.keys.iter_mut() {
            key.advance();
        }
    }

    pub fn state(&self, scancode: Scancode) -> ButtonState {
        self.keys[scancode.index()].state()
    }

    /// Scancodes currently triggered or held
    pub fn down_keys(&self) -> impl Iterator<Item = Scancode> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, key)| key.state().is_down())
            .filter_map(|(code, _)| Scancode::try_from(code as u16).ok())
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}
