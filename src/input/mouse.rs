//! Mouse state

use enum_map::EnumMap;

use super::codes::MouseButton;
use super::events::PlatformEvent;
use super::state::{ButtonState, ButtonTracker};

/// Mouse buttons, wheel and cursor
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    buttons: EnumMap<MouseButton, ButtonTracker>,
    /// Wheel lines received since the last advance, plus the fraction of a
    /// line left over from earlier frames
    pending_wheel: f32,
    /// Wheel lines published for the current frame
    wheel: i32,
    position: [i32; 2],
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a mouse event; returns false for non-mouse events
    pub fn handle_event(&mut self, event: &PlatformEvent) -> bool {
        match *event {
            PlatformEvent::MouseButtonDown { button } => self.buttons[button].set_raw(true),
            PlatformEvent::MouseButtonUp { button } => self.buttons[button].set_raw(false),
            PlatformEvent::MouseWheel { delta } => {
                self.pending_wheel += delta;
            }
            PlatformEvent::MouseMotion { x, y } => self.position = [x, y],
            _ => return false,
        }
        true
    }

    pub fn advance(&mut self) {
        for (_, button) in self.buttons.iter_mut() {
            button.advance();
        }
        // Publish whole lines only; the remainder carries into the next frame
        let lines = self.pending_wheel.round();
        self.wheel = lines as i32;
        self.pending_wheel -= lines;
    }

    pub fn state(&self, button: MouseButton) -> ButtonState {
        self.buttons[button].state()
    }

    pub fn wheel_delta(&self) -> i32 {
        self.wheel
    }

    /// Last reported cursor position in window pixels
    pub fn position(&self) -> [i32; 2] {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(mouse: &mut MouseState, lines: f32) {
        mouse.handle_event(&PlatformEvent::MouseWheel { delta: lines });
    }

    #[test]
    fn test_sub_line_deltas_add_up_within_a_frame() {
        let mut mouse = MouseState::new();
        for _ in 0..10 {
            scroll(&mut mouse, 0.4);
        }
        mouse.advance();
        assert_eq!(mouse.wheel_delta(), 4);

        mouse.advance();
        assert_eq!(mouse.wheel_delta(), 0);
    }

    #[test]
    fn test_slow_scroll_carries_across_frames() {
        let mut mouse = MouseState::new();
        let mut total = 0;
        for _ in 0..10 {
            scroll(&mut mouse, 0.2);
            mouse.advance();
            total += mouse.wheel_delta();
        }
        assert_eq!(total, 2);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut mouse = MouseState::new();
        scroll(&mut mouse, 3.0);
        scroll(&mut mouse, -1.0);
        mouse.advance();
        assert_eq!(mouse.wheel_delta(), 2);
    }
}
