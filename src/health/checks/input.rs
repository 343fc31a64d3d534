//! Input tracker health check

use crate::health::check::{CheckResult, SystemCheck};
use crate::input::{
    ButtonState, ControllerAxis, ControllerButton, ControllerSlot, InputTracker, MouseButton,
    PlatformEvent, Scancode, VirtualControllers,
};

/// Drives a tracker through a scripted session and verifies the
/// classifications it reports
pub struct InputCheck;

impl InputCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InputCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// Steps of a press cycle: event for the frame (if any), expected state after advance
const PRESS_CYCLE: [(Option<bool>, ButtonState); 5] = [
    (Some(true), ButtonState::Triggered),
    (None, ButtonState::Held),
    (None, ButtonState::Held),
    (Some(false), ButtonState::Released),
    (None, ButtonState::Idle),
];

fn run_cycle(
    tracker: &mut InputTracker,
    event: impl Fn(bool) -> PlatformEvent,
    state: impl Fn(&InputTracker) -> ButtonState,
) -> Result<(), String> {
    for (frame, (down, expected)) in PRESS_CYCLE.iter().enumerate() {
        if let Some(down) = down {
            tracker.handle_event(&event(*down));
        }
        tracker.update();

        let actual = state(tracker);
        if actual != *expected {
            return Err(format!(
                "frame {}: expected {:?}, got {:?}",
                frame + 1,
                expected,
                actual
            ));
        }
    }
    Ok(())
}

impl SystemCheck for InputCheck {
    fn name(&self) -> &'static str {
        "Input"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates press classification, axis scaling and controller hot-plug")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let slot = ControllerSlot::FIRST;
        let mut backend = VirtualControllers::with_attached([slot]);
        let mut tracker = InputTracker::new(&mut backend);

        if tracker.active_controllers() != vec![slot] {
            details.push("  ✗ Startup enumeration missed the attached controller".to_string());
            return CheckResult::fail("Controller enumeration failed").with_details(details);
        }
        details.push("  ✓ Startup enumeration: 1 controller".to_string());

        let cycles = [
            (
                "Keyboard",
                run_cycle(
                    &mut tracker,
                    |down| {
                        let scancode = Scancode::SPACE;
                        if down {
                            PlatformEvent::KeyDown { scancode }
                        } else {
                            PlatformEvent::KeyUp { scancode }
                        }
                    },
                    |t| t.key_state(Scancode::SPACE),
                ),
            ),
            (
                "Mouse",
                run_cycle(
                    &mut tracker,
                    |down| {
                        let button = MouseButton::Left;
                        if down {
                            PlatformEvent::MouseButtonDown { button }
                        } else {
                            PlatformEvent::MouseButtonUp { button }
                        }
                    },
                    |t| t.mouse_button_state(MouseButton::Left),
                ),
            ),
            (
                "Controller",
                run_cycle(
                    &mut tracker,
                    |down| {
                        let button = ControllerButton::A;
                        if down {
                            PlatformEvent::ControllerButtonDown { slot, button }
                        } else {
                            PlatformEvent::ControllerButtonUp { slot, button }
                        }
                    },
                    |t| t.gamepad_state(slot, ControllerButton::A),
                ),
            ),
        ];

        for (device, outcome) in cycles {
            match outcome {
                Ok(()) => details.push(format!("  ✓ {} press cycle", device)),
                Err(e) => {
                    details.push(format!("  ✗ {} press cycle: {}", device, e));
                    return CheckResult::fail(format!("{} classification failed", device))
                        .with_details(details);
                }
            }
        }

        tracker.handle_event(&PlatformEvent::ControllerAxisMotion {
            slot,
            axis: ControllerAxis::LeftX,
            value: i16::MIN,
        });
        if tracker.gamepad_left_stick_x(slot) != -1.0 {
            details.push("  ✗ Axis -32768 did not normalize to -1.0".to_string());
            return CheckResult::fail("Axis normalization failed").with_details(details);
        }
        details.push("  ✓ Axis normalization".to_string());

        tracker.handle_event(&PlatformEvent::ControllerRemoved { slot });
        if !tracker.active_controllers().is_empty() {
            details.push("  ✗ Removed controller still listed".to_string());
            return CheckResult::fail("Controller hot-plug failed").with_details(details);
        }
        details.push("  ✓ Controller hot-plug".to_string());

        if tracker.handle_event(&PlatformEvent::Other) {
            return CheckResult::fail("Unknown event was consumed").with_details(details);
        }

        CheckResult::pass("Input classification operational").with_details(details)
    }
}
