//! Validated identifiers for keys, buttons, axes and controller slots
//!
//! Every identifier is range-checked on construction, so tracker lookups
//! never index past the end of their tables.

use std::fmt;

use enum_map::Enum;

use super::error::InputError;

/// Number of trackable scancodes (full USB HID keyboard usage page)
pub const SCANCODE_COUNT: usize = 512;

/// Number of controller slots tracked
pub const MAX_CONTROLLERS: usize = 8;

/// Physical key identifier, independent of keyboard layout
///
/// Values follow the USB HID keyboard usage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scancode(u16);

impl Scancode {
    pub const A: Self = Self(4);
    pub const B: Self = Self(5);
    pub const C: Self = Self(6);
    pub const D: Self = Self(7);
    pub const E: Self = Self(8);
    pub const F: Self = Self(9);
    pub const G: Self = Self(10);
    pub const H: Self = Self(11);
    pub const I: Self = Self(12);
    pub const J: Self = Self(13);
    pub const K: Self = Self(14);
    pub const L: Self = Self(15);
    pub const M: Self = Self(16);
    pub const N: Self = Self(17);
    pub const O: Self = Self(18);
    pub const P: Self = Self(19);
    pub const Q: Self = Self(20);
    pub const R: Self = Self(21);
    pub const S: Self = Self(22);
    pub const T: Self = Self(23);
    pub const U: Self = Self(24);
    pub const V: Self = Self(25);
    pub const W: Self = Self(26);
    pub const X: Self = Self(27);
    pub const Y: Self = Self(28);
    pub const Z: Self = Self(29);

    pub const NUM_1: Self = Self(30);
    pub const NUM_0: Self = Self(39);

    pub const RETURN: Self = Self(40);
    pub const ESCAPE: Self = Self(41);
    pub const BACKSPACE: Self = Self(42);
    pub const TAB: Self = Self(43);
    pub const SPACE: Self = Self(44);

    pub const F1: Self = Self(58);
    pub const F12: Self = Self(69);

    pub const RIGHT: Self = Self(79);
    pub const LEFT: Self = Self(80);
    pub const DOWN: Self = Self(81);
    pub const UP: Self = Self(82);

    pub const LCTRL: Self = Self(224);
    pub const LSHIFT: Self = Self(225);
    pub const LALT: Self = Self(226);
    pub const LGUI: Self = Self(227);
    pub const RCTRL: Self = Self(228);
    pub const RSHIFT: Self = Self(229);
    pub const RALT: Self = Self(230);
    pub const RGUI: Self = Self(231);

    /// Raw scancode value
    pub fn code(self) -> u16 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u16> for Scancode {
    type Error = InputError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        if (code as usize) < SCANCODE_COUNT {
            Ok(Self(code))
        } else {
            Err(InputError::InvalidScancode(code))
        }
    }
}

impl fmt::Display for Scancode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sc{}", self.0)
    }
}

/// Mouse buttons tracked by the input system
///
/// Raw indices start at 1; index 0 is reserved as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    X1,
    X2,
}

impl MouseButton {
    pub const ALL: [Self; 5] = [Self::Left, Self::Middle, Self::Right, Self::X1, Self::X2];
}

impl TryFrom<u8> for MouseButton {
    type Error = InputError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            1 => Ok(Self::Left),
            2 => Ok(Self::Middle),
            3 => Ok(Self::Right),
            4 => Ok(Self::X1),
            5 => Ok(Self::X2),
            other => Err(InputError::InvalidMouseButton(other)),
        }
    }
}

/// One of the fixed controller connection slots (0..8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerSlot(u8);

impl ControllerSlot {
    pub const FIRST: Self = Self(0);

    /// Validates a slot index
    pub fn new(index: usize) -> Result<Self, InputError> {
        if index < MAX_CONTROLLERS {
            Ok(Self(index as u8))
        } else {
            Err(InputError::InvalidControllerSlot(index))
        }
    }

    /// Every slot in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..MAX_CONTROLLERS as u8).map(Self)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ControllerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standard controller buttons, in platform button-index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum ControllerButton {
    A,
    B,
    X,
    Y,
    Back,
    Guide,
    Start,
    LeftStick,
    RightStick,
    LeftShoulder,
    RightShoulder,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

impl ControllerButton {
    pub const ALL: [Self; 15] = [
        Self::A,
        Self::B,
        Self::X,
        Self::Y,
        Self::Back,
        Self::Guide,
        Self::Start,
        Self::LeftStick,
        Self::RightStick,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::DPadUp,
        Self::DPadDown,
        Self::DPadLeft,
        Self::DPadRight,
    ];
}

impl TryFrom<u8> for ControllerButton {
    type Error = InputError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(InputError::InvalidControllerButton(index))
    }
}

/// Continuous controller axes, in platform axis-index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum ControllerAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    TriggerLeft,
    TriggerRight,
}

impl ControllerAxis {
    pub const ALL: [Self; 6] = [
        Self::LeftX,
        Self::LeftY,
        Self::RightX,
        Self::RightY,
        Self::TriggerLeft,
        Self::TriggerRight,
    ];
}

impl TryFrom<u8> for ControllerAxis {
    type Error = InputError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(InputError::InvalidControllerAxis(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scancode_bounds() {
        assert_eq!(Scancode::try_from(0u16).map(Scancode::code), Ok(0));
        assert_eq!(Scancode::try_from(511u16).map(Scancode::code), Ok(511));
        assert_eq!(
            Scancode::try_from(512u16),
            Err(InputError::InvalidScancode(512))
        );
    }

    #[test]
    fn test_mouse_button_zero_is_invalid() {
        assert_eq!(
            MouseButton::try_from(0u8),
            Err(InputError::InvalidMouseButton(0))
        );
        assert_eq!(MouseButton::try_from(1u8), Ok(MouseButton::Left));
        assert_eq!(MouseButton::try_from(5u8), Ok(MouseButton::X2));
        assert!(MouseButton::try_from(6u8).is_err());
    }

    #[test]
    fn test_controller_slot_bounds() {
        assert_eq!(ControllerSlot::new(7).map(ControllerSlot::index), Ok(7));
        assert_eq!(
            ControllerSlot::new(8),
            Err(InputError::InvalidControllerSlot(8))
        );
        assert_eq!(ControllerSlot::all().count(), MAX_CONTROLLERS);
    }

    #[test]
    fn test_controller_indices() {
        assert_eq!(ControllerButton::try_from(0u8), Ok(ControllerButton::A));
        assert_eq!(ControllerButton::try_from(14u8), Ok(ControllerButton::DPadRight));
        assert!(ControllerButton::try_from(15u8).is_err());

        assert_eq!(ControllerAxis::try_from(4u8), Ok(ControllerAxis::TriggerLeft));
        assert_eq!(
            ControllerAxis::try_from(6u8),
            Err(InputError::InvalidControllerAxis(6))
        );
    }
}
