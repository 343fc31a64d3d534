//! Controller state for every slot

use enum_map::EnumMap;
use tracing::info;

use super::codes::{ControllerAxis, ControllerButton, ControllerSlot, MAX_CONTROLLERS};
use super::events::PlatformEvent;
use super::state::{ButtonState, ButtonTracker};

/// Divisor mapping a signed 16-bit axis reading into [-1.0, 1.0)
const AXIS_SCALE: f32 = 32768.0;

/// Normalize a raw axis reading
pub fn normalize_axis(value: i16) -> f32 {
    f32::from(value) / AXIS_SCALE
}

/// Buttons and axes of one controller slot
#[derive(Debug, Clone, Default)]
pub struct PadState {
    attached: bool,
    buttons: EnumMap<ControllerButton, ButtonTracker>,
    axes: EnumMap<ControllerAxis, f32>,
}

impl PadState {
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn button(&self, button: ControllerButton) -> ButtonState {
        self.buttons[button].state()
    }

    pub fn axis(&self, axis: ControllerAxis) -> f32 {
        self.axes[axis]
    }

    fn advance(&mut self) {
        for (_, button) in self.buttons.iter_mut() {
            button.advance();
        }
    }
}

/// State of all controller slots
#[derive(Debug, Clone, Default)]
pub struct GamepadState {
    pads: [PadState; MAX_CONTROLLERS],
}

impl GamepadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether a slot has a controller, as found at startup
    pub fn set_attached(&mut self, slot: ControllerSlot, attached: bool) {
        self.pads[slot.index()].attached = attached;
    }

    /// Apply a controller event; returns false for non-controller events
    pub fn handle_event(&mut self, event: &PlatformEvent) -> bool {
        match *event {
            PlatformEvent::ControllerAdded { slot } => {
                info!(%slot, "Controller attached");
                self.set_attached(slot, true);
            }
            PlatformEvent::ControllerRemoved { slot } => {
                info!(%slot, "Controller detached");
                self.set_attached(slot, false);
            }
            PlatformEvent::ControllerButtonDown { slot, button } => {
                self.pads[slot.index()].buttons[button].set_raw(true)
            }
            PlatformEvent::ControllerButtonUp { slot, button } => {
                self.pads[slot.index()].buttons[button].set_raw(false)
            }
            PlatformEvent::ControllerAxisMotion { slot, axis, value } => {
                self.pads[slot.index()].axes[axis] = normalize_axis(value)
            }
            _ => return false,
        }
        true
    }

    pub fn advance(&mut self) {
        for pad in &mut self.pads {
            pad.advance();
        }
    }

    pub fn pad(&self, slot: ControllerSlot) -> &PadState {
        &self.pads[slot.index()]
    }

    /// Attached slots in ascending order
    pub fn active_slots(&self) -> Vec<ControllerSlot> {
        ControllerSlot::all()
            .filter(|slot| self.pads[slot.index()].attached)
            .collect()
    }
}
