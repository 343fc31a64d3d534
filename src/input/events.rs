//! Platform events consumed by the input tracker

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::codes::{ControllerAxis, ControllerButton, ControllerSlot, MouseButton, Scancode};

/// Pixels that count as one wheel line for pixel-precise scroll devices
const PIXELS_PER_LINE: f64 = 20.0;

/// One raw event from the window or controller layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    KeyDown {
        scancode: Scancode,
    },
    KeyUp {
        scancode: Scancode,
    },
    MouseButtonDown {
        button: MouseButton,
    },
    MouseButtonUp {
        button: MouseButton,
    },
    /// Vertical wheel movement in lines (positive is away from the user).
    /// Pixel-precise devices report fractions of a line.
    MouseWheel {
        delta: f32,
    },
    /// Cursor position in window pixels
    MouseMotion {
        x: i32,
        y: i32,
    },
    ControllerAdded {
        slot: ControllerSlot,
    },
    ControllerRemoved {
        slot: ControllerSlot,
    },
    ControllerButtonDown {
        slot: ControllerSlot,
        button: ControllerButton,
    },
    ControllerButtonUp {
        slot: ControllerSlot,
        button: ControllerButton,
    },
    ControllerAxisMotion {
        slot: ControllerSlot,
        axis: ControllerAxis,
        /// Raw signed 16-bit reading
        value: i16,
    },
    /// The user asked to close the window
    Quit,
    /// Anything the input layer has no use for
    Other,
}

impl PlatformEvent {
    /// Convert a winit window event
    ///
    /// Returns `None` for events that carry nothing the input layer tracks,
    /// including keys without a scancode.
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CloseRequested => Some(Self::Quit),

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let scancode = scancode_for(code)?;
                Some(match event.state {
                    ElementState::Pressed => Self::KeyDown { scancode },
                    ElementState::Released => Self::KeyUp { scancode },
                })
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = mouse_button_for(*button)?;
                Some(match state {
                    ElementState::Pressed => Self::MouseButtonDown { button },
                    ElementState::Released => Self::MouseButtonUp { button },
                })
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
                };
                Some(Self::MouseWheel { delta })
            }

            WindowEvent::CursorMoved { position, .. } => Some(Self::MouseMotion {
                x: position.x as i32,
                y: position.y as i32,
            }),

            _ => None,
        }
    }
}

fn mouse_button_for(button: winit::event::MouseButton) -> Option<MouseButton> {
    use winit::event::MouseButton as WB;
    match button {
        WB::Left => Some(MouseButton::Left),
        WB::Middle => Some(MouseButton::Middle),
        WB::Right => Some(MouseButton::Right),
        WB::Back => Some(MouseButton::X1),
        WB::Forward => Some(MouseButton::X2),
        WB::Other(_) => None,
    }
}

/// USB HID usage for a winit physical key
pub fn scancode_for(key: KeyCode) -> Option<Scancode> {
    let code: u16 = match key {
        KeyCode::KeyA => 4,
        KeyCode::KeyB => 5,
        KeyCode::KeyC => 6,
        KeyCode::KeyD => 7,
        KeyCode::KeyE => 8,
        KeyCode::KeyF => 9,
        KeyCode::KeyG => 10,
        KeyCode::KeyH => 11,
        KeyCode::KeyI => 12,
        KeyCode::KeyJ => 13,
        KeyCode::KeyK => 14,
        KeyCode::KeyL => 15,
        KeyCode::KeyM => 16,
        KeyCode::KeyN => 17,
        KeyCode::KeyO => 18,
        KeyCode::KeyP => 19,
        KeyCode::KeyQ => 20,
        KeyCode::KeyR => 21,
        KeyCode::KeyS => 22,
        KeyCode::KeyT => 23,
        KeyCode::KeyU => 24,
        KeyCode::KeyV => 25,
        KeyCode::KeyW => 26,
        KeyCode::KeyX => 27,
        KeyCode::KeyY => 28,
        KeyCode::KeyZ => 29,

        KeyCode::Digit1 => 30,
        KeyCode::Digit2 => 31,
        KeyCode::Digit3 => 32,
        KeyCode::Digit4 => 33,
        KeyCode::Digit5 => 34,
        KeyCode::Digit6 => 35,
        KeyCode::Digit7 => 36,
        KeyCode::Digit8 => 37,
        KeyCode::Digit9 => 38,
        KeyCode::Digit0 => 39,

        KeyCode::Enter => 40,
        KeyCode::Escape => 41,
        KeyCode::Backspace => 42,
        KeyCode::Tab => 43,
        KeyCode::Space => 44,
        KeyCode::Minus => 45,
        KeyCode::Equal => 46,
        KeyCode::BracketLeft => 47,
        KeyCode::BracketRight => 48,
        KeyCode::Backslash => 49,
        KeyCode::Semicolon => 51,
        KeyCode::Quote => 52,
        KeyCode::Backquote => 53,
        KeyCode::Comma => 54,
        KeyCode::Period => 55,
        KeyCode::Slash => 56,
        KeyCode::CapsLock => 57,

        KeyCode::F1 => 58,
        KeyCode::F2 => 59,
        KeyCode::F3 => 60,
        KeyCode::F4 => 61,
        KeyCode::F5 => 62,
        KeyCode::F6 => 63,
        KeyCode::F7 => 64,
        KeyCode::F8 => 65,
        KeyCode::F9 => 66,
        KeyCode::F10 => 67,
        KeyCode::F11 => 68,
        KeyCode::F12 => 69,

        KeyCode::PrintScreen => 70,
        KeyCode::ScrollLock => 71,
        KeyCode::Pause => 72,
        KeyCode::Insert => 73,
        KeyCode::Home => 74,
        KeyCode::PageUp => 75,
        KeyCode::Delete => 76,
        KeyCode::End => 77,
        KeyCode::PageDown => 78,

        KeyCode::ArrowRight => 79,
        KeyCode::ArrowLeft => 80,
        KeyCode::ArrowDown => 81,
        KeyCode::ArrowUp => 82,

        KeyCode::NumLock => 83,
        KeyCode::NumpadDivide => 84,
        KeyCode::NumpadMultiply => 85,
        KeyCode::NumpadSubtract => 86,
        KeyCode::NumpadAdd => 87,
        KeyCode::NumpadEnter => 88,
        KeyCode::Numpad1 => 89,
        KeyCode::Numpad2 => 90,
        KeyCode::Numpad3 => 91,
        KeyCode::Numpad4 => 92,
        KeyCode::Numpad5 => 93,
        KeyCode::Numpad6 => 94,
        KeyCode::Numpad7 => 95,
        KeyCode::Numpad8 => 96,
        KeyCode::Numpad9 => 97,
        KeyCode::Numpad0 => 98,
        KeyCode::NumpadDecimal => 99,

        KeyCode::F13 => 104,
        KeyCode::F14 => 105,
        KeyCode::F15 => 106,
        KeyCode::F16 => 107,
        KeyCode::F17 => 108,
        KeyCode::F18 => 109,
        KeyCode::F19 => 110,
        KeyCode::F20 => 111,
        KeyCode::F21 => 112,
        KeyCode::F22 => 113,
        KeyCode::F23 => 114,
        KeyCode::F24 => 115,

        KeyCode::ControlLeft => 224,
        KeyCode::ShiftLeft => 225,
        KeyCode::AltLeft => 226,
        KeyCode::SuperLeft => 227,
        KeyCode::ControlRight => 228,
        KeyCode::ShiftRight => 229,
        KeyCode::AltRight => 230,
        KeyCode::SuperRight => 231,

        _ => return None,
    };

    Scancode::try_from(code).ok()
}
