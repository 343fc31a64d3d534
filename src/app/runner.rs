//! Main application handler for the engine test

use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::config::AppConfig;
use super::window::{set_fullscreen, window_attributes_from_config};
use crate::input::{
    ControllerButton, ControllerSlot, EventQueue, InputTracker, PlatformEvent, Scancode,
};

#[cfg(feature = "gamepad")]
type Controllers = crate::input::GilrsControllers;
#[cfg(not(feature = "gamepad"))]
type Controllers = crate::input::NoControllers;

/// Start the platform controller backend; `None` if it fails to start
#[cfg(feature = "gamepad")]
fn open_controllers() -> Option<Controllers> {
    match Controllers::new() {
        Ok(controllers) => Some(controllers),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Controller backend unavailable, continuing without controllers"
            );
            None
        }
    }
}

#[cfg(not(feature = "gamepad"))]
fn open_controllers() -> Option<Controllers> {
    debug!("Built without the gamepad feature, controllers disabled");
    Some(crate::input::NoControllers)
}

/// Demo bindings checked after every input frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    ToggleFullscreen,
    Quit,
}

/// Maps this frame's input to demo actions
///
/// `F` or the first controller's X toggles fullscreen, `Q` or its Y quits.
pub fn demo_actions(input: &InputTracker) -> Vec<DemoAction> {
    let pad = ControllerSlot::FIRST;

    let mut actions = Vec::new();
    if input.is_key_triggered(Scancode::F)
        || input.is_gamepad_triggered(pad, ControllerButton::X)
    {
        actions.push(DemoAction::ToggleFullscreen);
    }
    if input.is_key_triggered(Scancode::Q)
        || input.is_gamepad_triggered(pad, ControllerButton::Y)
    {
        actions.push(DemoAction::Quit);
    }
    actions
}

/// Windowed engine test: one window, input tracking, demo bindings
pub struct App {
    config: AppConfig,
    window: Option<Window>,
    fullscreen: bool,
    events: EventQueue,
    controllers: Option<Controllers>,
    input: InputTracker,
}

impl App {
    /// Creates a new application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting engine test");
        info!(?config.window, "Window configuration");

        let mut controllers = open_controllers();
        let input = match controllers.as_mut() {
            Some(backend) => InputTracker::new(backend),
            None => InputTracker::default(),
        };
        info!(
            controllers = input.active_controllers().len(),
            "Input initialized"
        );

        Self {
            fullscreen: config.window.fullscreen,
            config,
            window: None,
            events: EventQueue::new(),
            controllers,
            input,
        }
    }

    /// Run one input frame over everything queued since the last one
    fn process_input(&mut self) {
        let mut frame = self.input.begin_frame();
        frame.drain(&mut self.events);
        if let Some(controllers) = self.controllers.as_mut() {
            frame.drain(controllers);
        }
        let report = frame.finish();

        if self.config.input.log_events && report.handled > 0 {
            debug!(
                frame = report.frame,
                handled = report.handled,
                ignored = report.ignored,
                "Input frame"
            );
        }
    }

    fn apply_actions(&mut self, event_loop: &ActiveEventLoop) {
        for action in demo_actions(&self.input) {
            match action {
                DemoAction::ToggleFullscreen => {
                    self.fullscreen = !self.fullscreen;
                    if let Some(window) = &self.window {
                        set_fullscreen(window, self.fullscreen);
                    }
                }
                DemoAction::Quit => {
                    info!("Quit requested, exiting");
                    event_loop.exit();
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = window_attributes_from_config(&self.config.window);
        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    window.width = size.width,
                    window.height = size.height,
                    "Window created successfully"
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }

        self.process_input();
        self.apply_actions(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match PlatformEvent::from_window_event(&event) {
            Some(PlatformEvent::Quit) => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            Some(platform_event) => self.events.push(platform_event),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::VirtualControllers;

    #[test]
    fn test_no_actions_without_input() {
        let input = InputTracker::default();
        assert!(demo_actions(&input).is_empty());
    }

    #[test]
    fn test_keyboard_bindings() {
        let mut input = InputTracker::default();
        input.handle_event(&PlatformEvent::KeyDown {
            scancode: Scancode::F,
        });
        input.handle_event(&PlatformEvent::KeyDown {
            scancode: Scancode::Q,
        });
        input.update();
        assert_eq!(
            demo_actions(&input),
            vec![DemoAction::ToggleFullscreen, DemoAction::Quit]
        );

        // Held keys do not repeat the action
        input.update();
        assert!(demo_actions(&input).is_empty());
    }

    #[test]
    fn test_queued_window_events_reach_the_bindings() {
        let mut app = App::new(AppConfig::builtin("test"));
        app.events.push(PlatformEvent::KeyDown {
            scancode: Scancode::Q,
        });
        app.process_input();

        assert!(app.events.is_empty());
        assert_eq!(app.input.frame_count(), 1);
        assert_eq!(demo_actions(&app.input), vec![DemoAction::Quit]);
    }

    #[test]
    fn test_controller_bindings_use_first_slot() {
        let first = ControllerSlot::new(0).unwrap();
        let second = ControllerSlot::new(1).unwrap();
        let mut pads = VirtualControllers::with_attached([first, second]);
        let mut input = InputTracker::new(&mut pads);

        pads.press(second, ControllerButton::Y);
        pads.press(first, ControllerButton::X);
        let mut frame = input.begin_frame();
        frame.drain(&mut pads);
        frame.finish();

        assert_eq!(demo_actions(&input), vec![DemoAction::ToggleFullscreen]);
    }
}
