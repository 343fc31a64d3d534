//! Physical controllers through gilrs
//!
//! gilrs hands out its own gamepad ids; these are mapped onto the fixed
//! controller slots in connection order, and a slot is freed again when its
//! gamepad disconnects.

use gilrs::{Axis, Button, Event, EventType, GamepadId, Gilrs};
use tracing::{debug, warn};

use super::codes::{ControllerAxis, ControllerButton, ControllerSlot, MAX_CONTROLLERS};
use super::events::PlatformEvent;
use super::source::{ControllerBackend, EventSource};

/// Controllers reported by the operating system
pub struct GilrsControllers {
    gilrs: Gilrs,
    slots: SlotTable<GamepadId>,
}

impl GilrsControllers {
    /// Connects to the platform gamepad API and assigns slots to every
    /// gamepad already plugged in
    ///
    /// Platforms gilrs does not support yield a backend with nothing attached.
    pub fn new() -> Result<Self, gilrs::Error> {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => gilrs,
            Err(gilrs::Error::NotImplemented(gilrs)) => {
                warn!("Gamepads are not supported on this platform");
                gilrs
            }
            Err(e) => return Err(e),
        };

        let mut slots = SlotTable::new();
        for (id, gamepad) in gilrs.gamepads() {
            match slots.assign(id) {
                Some(slot) => debug!(%slot, name = gamepad.name(), "Gamepad present"),
                None => warn!(name = gamepad.name(), "No free controller slot, gamepad ignored"),
            }
        }

        Ok(Self { gilrs, slots })
    }
}

impl ControllerBackend for GilrsControllers {
    fn open(&mut self, slot: ControllerSlot) -> bool {
        self.slots.is_assigned(slot)
    }
}

impl EventSource for GilrsControllers {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            if let Some(event) = translate(&mut self.slots, id, event) {
                return Some(event);
            }
        }
        None
    }
}

/// Gamepad id to slot assignment
#[derive(Debug)]
struct SlotTable<Id> {
    slots: [Option<Id>; MAX_CONTROLLERS],
}

impl<Id: Copy + PartialEq> SlotTable<Id> {
    fn new() -> Self {
        Self {
            slots: [None; MAX_CONTROLLERS],
        }
    }

    fn slot_of(&self, id: Id) -> Option<ControllerSlot> {
        let index = self.slots.iter().position(|entry| *entry == Some(id))?;
        ControllerSlot::new(index).ok()
    }

    /// Lowest free slot for `id`, or its current slot if it already has one
    fn assign(&mut self, id: Id) -> Option<ControllerSlot> {
        if let Some(slot) = self.slot_of(id) {
            return Some(slot);
        }
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(id);
        ControllerSlot::new(index).ok()
    }

    fn release(&mut self, id: Id) -> Option<ControllerSlot> {
        let slot = self.slot_of(id)?;
        self.slots[slot.index()] = None;
        Some(slot)
    }

    fn is_assigned(&self, slot: ControllerSlot) -> bool {
        self.slots[slot.index()].is_some()
    }
}

/// Convert one gilrs event; `None` for events with no tracked counterpart
fn translate<Id: Copy + PartialEq>(
    slots: &mut SlotTable<Id>,
    id: Id,
    event: EventType,
) -> Option<PlatformEvent> {
    match event {
        EventType::Connected => {
            let slot = slots.assign(id);
            if slot.is_none() {
                warn!("No free controller slot, gamepad ignored");
            }
            Some(PlatformEvent::ControllerAdded { slot: slot? })
        }
        EventType::Disconnected => slots
            .release(id)
            .map(|slot| PlatformEvent::ControllerRemoved { slot }),
        EventType::ButtonPressed(button, _) => Some(PlatformEvent::ControllerButtonDown {
            slot: slots.slot_of(id)?,
            button: button_for(button)?,
        }),
        EventType::ButtonReleased(button, _) => Some(PlatformEvent::ControllerButtonUp {
            slot: slots.slot_of(id)?,
            button: button_for(button)?,
        }),
        // Analog triggers arrive as button values in 0..=1
        EventType::ButtonChanged(button, value, _) => Some(PlatformEvent::ControllerAxisMotion {
            slot: slots.slot_of(id)?,
            axis: trigger_axis_for(button)?,
            value: axis_to_raw(value),
        }),
        EventType::AxisChanged(axis, value, _) => {
            let (axis, inverted) = axis_for(axis)?;
            let value = if inverted { -value } else { value };
            Some(PlatformEvent::ControllerAxisMotion {
                slot: slots.slot_of(id)?,
                axis,
                value: axis_to_raw(value),
            })
        }
        _ => None,
    }
}

fn button_for(button: Button) -> Option<ControllerButton> {
    Some(match button {
        Button::South => ControllerButton::A,
        Button::East => ControllerButton::B,
        Button::West => ControllerButton::X,
        Button::North => ControllerButton::Y,
        Button::Select => ControllerButton::Back,
        Button::Mode => ControllerButton::Guide,
        Button::Start => ControllerButton::Start,
        Button::LeftThumb => ControllerButton::LeftStick,
        Button::RightThumb => ControllerButton::RightStick,
        Button::LeftTrigger => ControllerButton::LeftShoulder,
        Button::RightTrigger => ControllerButton::RightShoulder,
        Button::DPadUp => ControllerButton::DPadUp,
        Button::DPadDown => ControllerButton::DPadDown,
        Button::DPadLeft => ControllerButton::DPadLeft,
        Button::DPadRight => ControllerButton::DPadRight,
        _ => return None,
    })
}

fn trigger_axis_for(button: Button) -> Option<ControllerAxis> {
    match button {
        Button::LeftTrigger2 => Some(ControllerAxis::TriggerLeft),
        Button::RightTrigger2 => Some(ControllerAxis::TriggerRight),
        _ => None,
    }
}

/// Tracked axis for a gilrs axis, and whether its sign must be flipped
///
/// gilrs reports stick Y positive upwards; tracked axes are positive downwards.
fn axis_for(axis: Axis) -> Option<(ControllerAxis, bool)> {
    match axis {
        Axis::LeftStickX => Some((ControllerAxis::LeftX, false)),
        Axis::LeftStickY => Some((ControllerAxis::LeftY, true)),
        Axis::RightStickX => Some((ControllerAxis::RightX, false)),
        Axis::RightStickY => Some((ControllerAxis::RightY, true)),
        Axis::LeftZ => Some((ControllerAxis::TriggerLeft, false)),
        Axis::RightZ => Some((ControllerAxis::TriggerRight, false)),
        _ => None,
    }
}

/// Rescale a gilrs reading in -1.0..=1.0 to the signed 16-bit range
pub fn axis_to_raw(value: f32) -> i16 {
    let value = value.clamp(-1.0, 1.0);
    let scaled = if value < 0.0 {
        value * 32768.0
    } else {
        value * 32767.0
    };
    scaled.round() as i16
}
