//! Application module
//!
//! Handles configuration, the window and the demo event loop.

pub mod config;
mod runner;
mod window;

pub use config::{AppConfig, InputConfig, LoggingConfig, WindowConfig};
pub use runner::{App, DemoAction, demo_actions};
pub use window::{set_fullscreen, window_attributes_from_config};
