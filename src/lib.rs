//! JBE engine shim
//!
//! Opens a window with winit and tracks keyboard, mouse and controller
//! input frame-to-frame.

/// Windowing, configuration and the demo application
pub mod app;

/// Build-time information (timestamp, target, compiler)
pub mod build_info;

/// Health checks for startup validation and CI
pub mod health;

/// Frame-accurate input tracking
pub mod input;

/// Tracing subscriber setup
pub mod logging;
