//! Input tracking
//!
//! Classifies every key, mouse button and controller button once per frame
//! as idle, triggered, held or released:
//!
//! - Raw events only flip a per-control "down" flag
//! - [`InputTracker::update`] turns those flags into the frame's classification
//! - Queries are plain lookups of that classification
//!
//! # Architecture
//!
//! ```text
//! winit WindowEvent ─→ PlatformEvent ─→ EventQueue ─┐
//!                                                   ├─→ Frame ─→ InputTracker
//! controller backend ─→ PlatformEvent ──────────────┘   (handle, then update)
//! (gilrs with the `gamepad` feature)
//! ```
//!
//! # Usage
//!
//! ```
//! use jbe::input::{EventQueue, InputTracker, PlatformEvent, Scancode};
//!
//! let mut tracker = InputTracker::default();
//! let mut queue = EventQueue::new();
//! queue.push(PlatformEvent::KeyDown { scancode: Scancode::F });
//!
//! let mut frame = tracker.begin_frame();
//! frame.drain(&mut queue);
//! frame.finish();
//!
//! assert!(tracker.is_key_triggered(Scancode::F));
//! ```

mod codes;
mod error;
mod events;
mod frame;
mod gamepad;
#[cfg(feature = "gamepad")]
mod hardware;
mod keyboard;
mod mouse;
mod source;
mod state;
mod tracker;

// Re-export public API
pub use codes::{
    ControllerAxis, ControllerButton, ControllerSlot, MAX_CONTROLLERS, MouseButton, SCANCODE_COUNT,
    Scancode,
};
pub use error::InputError;
pub use events::{PlatformEvent, scancode_for};
pub use frame::{Frame, FrameReport};
pub use gamepad::normalize_axis;
#[cfg(feature = "gamepad")]
pub use hardware::{GilrsControllers, axis_to_raw};
pub use source::{ControllerBackend, EventQueue, EventSource, NoControllers, VirtualControllers};
pub use state::{ButtonState, ButtonTracker};
pub use tracker::{InputSource, InputTracker};
