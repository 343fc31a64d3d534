//! Input identifier errors

use thiserror::Error;

use super::codes::{MAX_CONTROLLERS, SCANCODE_COUNT};

/// Raised when a raw identifier falls outside the range a device tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("scancode {0} is outside the tracked range 0..{max}", max = SCANCODE_COUNT)]
    InvalidScancode(u16),

    #[error("mouse button index {0} is not one of 1 (left) ..= 5 (x2)")]
    InvalidMouseButton(u8),

    #[error("controller slot {0} is outside 0..{max}", max = MAX_CONTROLLERS)]
    InvalidControllerSlot(usize),

    #[error("controller button {0} is not a known button")]
    InvalidControllerButton(u8),

    #[error("controller axis {0} is not a known axis")]
    InvalidControllerAxis(u8),
}
