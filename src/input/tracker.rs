//! Frame-to-frame input tracker for keyboard, mouse and controllers

use tracing::{debug, trace};

use super::codes::{ControllerAxis, ControllerButton, ControllerSlot, MouseButton, Scancode};
use super::events::PlatformEvent;
use super::frame::Frame;
use super::gamepad::GamepadState;
use super::keyboard::KeyboardState;
use super::mouse::MouseState;
use super::source::{ControllerBackend, NoControllers};
use super::state::ButtonState;

/// Device class that consumed an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Mouse,
    Controller,
}

/// Tracks every key, mouse button and controller button across frames
///
/// Per frame: feed all events through [`handle_event`](Self::handle_event),
/// call [`update`](Self::update) once, then query. [`begin_frame`](Self::begin_frame)
/// enforces that order through the borrow checker.
#[derive(Debug, Clone)]
pub struct InputTracker {
    keyboard: KeyboardState,
    mouse: MouseState,
    gamepads: GamepadState,
    last_source: Option<InputSource>,
    frame: u64,
}

impl InputTracker {
    /// Creates a tracker with every control idle, opening each controller
    /// slot through `backend` to find what is attached
    pub fn new(backend: &mut impl ControllerBackend) -> Self {
        let mut gamepads = GamepadState::new();
        for slot in ControllerSlot::all() {
            let attached = backend.open(slot);
            gamepads.set_attached(slot, attached);
            if attached {
                debug!(%slot, "Controller found at startup");
            }
        }

        Self {
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            gamepads,
            last_source: None,
            frame: 0,
        }
    }

    /// Ingest one event; returns whether any device consumed it
    pub fn handle_event(&mut self, event: &PlatformEvent) -> bool {
        self.route_event(event).is_some()
    }

    /// Ingest one event and report which device consumed it
    ///
    /// Keyboard is tried first, then mouse, then controllers. Unrecognized
    /// events leave all state untouched.
    pub fn route_event(&mut self, event: &PlatformEvent) -> Option<InputSource> {
        let source = if self.keyboard.handle_event(event) {
            InputSource::Keyboard
        } else if self.mouse.handle_event(event) {
            InputSource::Mouse
        } else if self.gamepads.handle_event(event) {
            InputSource::Controller
        } else {
            trace!(?event, "Ignored event");
            return None;
        };

        trace!(?event, ?source, "Ingested event");
        self.last_source = Some(source);
        Some(source)
    }

    /// Advance every classification by one frame
    ///
    /// Call exactly once per frame, after the frame's events.
    pub fn update(&mut self) {
        self.keyboard.advance();
        self.mouse.advance();
        self.gamepads.advance();
        self.frame += 1;
    }

    /// Start ingesting events for the next frame
    pub fn begin_frame(&mut self) -> Frame<'_> {
        Frame::new(self)
    }

    /// Number of completed frames
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Device that produced the most recent consumed event
    pub fn last_active_source(&self) -> Option<InputSource> {
        self.last_source
    }

    pub fn key_state(&self, key: Scancode) -> ButtonState {
        self.keyboard.state(key)
    }

    pub fn is_key_triggered(&self, key: Scancode) -> bool {
        self.key_state(key).is_triggered()
    }

    pub fn is_key_pressed(&self, key: Scancode) -> bool {
        self.key_state(key).is_held()
    }

    pub fn is_key_released(&self, key: Scancode) -> bool {
        self.key_state(key).is_released()
    }

    /// Keys triggered or held this frame, in scancode order
    pub fn down_keys(&self) -> Vec<Scancode> {
        self.keyboard.down_keys().collect()
    }

    pub fn mouse_button_state(&self, button: MouseButton) -> ButtonState {
        self.mouse.state(button)
    }

    pub fn is_mouse_button_triggered(&self, button: MouseButton) -> bool {
        self.mouse_button_state(button).is_triggered()
    }

    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_button_state(button).is_held()
    }

    pub fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        self.mouse_button_state(button).is_released()
    }

    /// Wheel lines scrolled during the last frame
    pub fn mouse_wheel_delta(&self) -> i32 {
        self.mouse.wheel_delta()
    }

    pub fn mouse_pos_x(&self) -> i32 {
        self.mouse.position()[0]
    }

    pub fn mouse_pos_y(&self) -> i32 {
        self.mouse.position()[1]
    }

    pub fn gamepad_state(&self, slot: ControllerSlot, button: ControllerButton) -> ButtonState {
        self.gamepads.pad(slot).button(button)
    }

    pub fn is_gamepad_triggered(&self, slot: ControllerSlot, button: ControllerButton) -> bool {
        self.gamepad_state(slot, button).is_triggered()
    }

    pub fn is_gamepad_pressed(&self, slot: ControllerSlot, button: ControllerButton) -> bool {
        self.gamepad_state(slot, button).is_held()
    }

    pub fn is_gamepad_released(&self, slot: ControllerSlot, button: ControllerButton) -> bool {
        self.gamepad_state(slot, button).is_released()
    }

    /// Normalized axis value as last reported
    pub fn gamepad_axis(&self, slot: ControllerSlot, axis: ControllerAxis) -> f32 {
        self.gamepads.pad(slot).axis(axis)
    }

    pub fn gamepad_left_trigger(&self, slot: ControllerSlot) -> f32 {
        self.gamepad_axis(slot, ControllerAxis::TriggerLeft)
    }

    pub fn gamepad_right_trigger(&self, slot: ControllerSlot) -> f32 {
        self.gamepad_axis(slot, ControllerAxis::TriggerRight)
    }

    pub fn gamepad_left_stick_x(&self, slot: ControllerSlot) -> f32 {
        self.gamepad_axis(slot, ControllerAxis::LeftX)
    }

    pub fn gamepad_left_stick_y(&self, slot: ControllerSlot) -> f32 {
        self.gamepad_axis(slot, ControllerAxis::LeftY)
    }

    pub fn gamepad_right_stick_x(&self, slot: ControllerSlot) -> f32 {
        self.gamepad_axis(slot, ControllerAxis::RightX)
    }

    pub fn gamepad_right_stick_y(&self, slot: ControllerSlot) -> f32 {
        self.gamepad_axis(slot, ControllerAxis::RightY)
    }

    pub fn is_controller_attached(&self, slot: ControllerSlot) -> bool {
        self.gamepads.pad(slot).is_attached()
    }

    /// Attached controller slots in ascending order
    pub fn active_controllers(&self) -> Vec<ControllerSlot> {
        self.gamepads.active_slots()
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(&mut NoControllers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::source::VirtualControllers;

    fn slot(index: usize) -> ControllerSlot {
        ControllerSlot::new(index).unwrap()
    }

    #[test]
    fn test_dispatch_order_and_source() {
        let mut tracker = InputTracker::default();

        assert_eq!(
            tracker.route_event(&PlatformEvent::KeyDown {
                scancode: Scancode::W
            }),
            Some(InputSource::Keyboard)
        );
        assert_eq!(
            tracker.route_event(&PlatformEvent::MouseWheel { delta: 1.0 }),
            Some(InputSource::Mouse)
        );
        assert_eq!(
            tracker.route_event(&PlatformEvent::ControllerAdded { slot: slot(0) }),
            Some(InputSource::Controller)
        );
        assert_eq!(tracker.last_active_source(), Some(InputSource::Controller));
    }

    #[test]
    fn test_ignored_event_keeps_last_source() {
        let mut tracker = InputTracker::default();
        tracker.handle_event(&PlatformEvent::MouseButtonDown {
            button: MouseButton::Left,
        });

        assert!(!tracker.handle_event(&PlatformEvent::Quit));
        assert!(!tracker.handle_event(&PlatformEvent::Other));
        assert_eq!(tracker.last_active_source(), Some(InputSource::Mouse));
    }

    #[test]
    fn test_startup_enumeration_uses_backend() {
        let mut backend = VirtualControllers::with_attached([slot(1), slot(6)]);
        let tracker = InputTracker::new(&mut backend);

        assert_eq!(tracker.active_controllers(), vec![slot(1), slot(6)]);
        assert!(tracker.is_controller_attached(slot(6)));
        assert!(!tracker.is_controller_attached(slot(0)));
    }

    #[test]
    fn test_wheel_is_published_for_one_frame() {
        let mut tracker = InputTracker::default();
        tracker.handle_event(&PlatformEvent::MouseWheel { delta: 2.0 });
        tracker.handle_event(&PlatformEvent::MouseWheel { delta: 1.0 });
        assert_eq!(tracker.mouse_wheel_delta(), 0);

        tracker.update();
        assert_eq!(tracker.mouse_wheel_delta(), 3);

        tracker.update();
        assert_eq!(tracker.mouse_wheel_delta(), 0);
    }

    #[test]
    fn test_cursor_position_is_kept() {
        let mut tracker = InputTracker::default();
        tracker.handle_event(&PlatformEvent::MouseMotion { x: 300, y: 200 });
        tracker.update();
        tracker.update();

        assert_eq!(tracker.mouse_pos_x(), 300);
        assert_eq!(tracker.mouse_pos_y(), 200);
    }

    #[test]
    fn test_down_keys_lists_triggered_and_held() {
        let mut tracker = InputTracker::default();
        tracker.handle_event(&PlatformEvent::KeyDown {
            scancode: Scancode::D,
        });
        tracker.update();
        tracker.handle_event(&PlatformEvent::KeyDown {
            scancode: Scancode::A,
        });
        tracker.update();

        assert_eq!(tracker.down_keys(), vec![Scancode::A, Scancode::D]);
    }

    #[test]
    fn test_tap_between_updates_is_not_seen() {
        let mut tracker = InputTracker::default();
        let scancode = Scancode::SPACE;
        tracker.handle_event(&PlatformEvent::KeyDown { scancode });
        tracker.handle_event(&PlatformEvent::KeyUp { scancode });
        tracker.update();

        assert_eq!(tracker.key_state(scancode), ButtonState::Idle);
    }

    #[test]
    fn test_update_counts_frames() {
        let mut tracker = InputTracker::default();
        tracker.update();
        tracker.update();
        assert_eq!(tracker.frame_count(), 2);
    }
}
