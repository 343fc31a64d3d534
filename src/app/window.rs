//! Window configuration and management

use tracing::debug;
use winit::dpi::LogicalSize;
use winit::window::{Fullscreen, Window, WindowAttributes};

use super::config::WindowConfig;

/// Creates window attributes from configuration
pub fn window_attributes_from_config(config: &WindowConfig) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
        .with_decorations(config.decorated);

    if config.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

/// Switches between borderless fullscreen and windowed mode
pub fn set_fullscreen(window: &Window, fullscreen: bool) {
    debug!(fullscreen, "Changing fullscreen mode");
    window.set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
}
