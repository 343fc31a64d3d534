//! Event sources and controller backends feeding the tracker

use std::collections::VecDeque;

use super::codes::{ControllerAxis, ControllerButton, ControllerSlot, MAX_CONTROLLERS};
use super::events::PlatformEvent;

/// Anything that hands out platform events one at a time
pub trait EventSource {
    /// Next pending event, or `None` when nothing is queued. Never blocks.
    fn poll_event(&mut self) -> Option<PlatformEvent>;
}

/// Opens physical controllers during tracker initialization
pub trait ControllerBackend {
    /// Try to open the controller at `slot`; true if one is attached
    fn open(&mut self, slot: ControllerSlot) -> bool;
}

/// FIFO of events pushed by the window callbacks
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<PlatformEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PlatformEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for EventQueue {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.events.pop_front()
    }
}

/// Backend with nothing plugged in
#[derive(Debug, Default, Clone, Copy)]
pub struct NoControllers;

impl ControllerBackend for NoControllers {
    fn open(&mut self, _slot: ControllerSlot) -> bool {
        false
    }
}

impl EventSource for NoControllers {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        None
    }
}

/// Scriptable controllers: a fixed set of attached slots plus queued
/// button, axis and hot-plug events
#[derive(Debug, Default)]
pub struct VirtualControllers {
    attached: [bool; MAX_CONTROLLERS],
    queue: EventQueue,
}

impl VirtualControllers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controllers present when the tracker opens its slots
    pub fn with_attached(slots: impl IntoIterator<Item = ControllerSlot>) -> Self {
        let mut controllers = Self::new();
        for slot in slots {
            controllers.attached[slot.index()] = true;
        }
        controllers
    }

    /// Plug a controller in; queues the hot-plug event
    pub fn connect(&mut self, slot: ControllerSlot) {
        self.attached[slot.index()] = true;
        self.queue.push(PlatformEvent::ControllerAdded { slot });
    }

    /// Unplug a controller; queues the hot-plug event
    pub fn disconnect(&mut self, slot: ControllerSlot) {
        self.attached[slot.index()] = false;
        self.queue.push(PlatformEvent::ControllerRemoved { slot });
    }

    pub fn press(&mut self, slot: ControllerSlot, button: ControllerButton) {
        self.queue.push(PlatformEvent::ControllerButtonDown { slot, button });
    }

    pub fn release(&mut self, slot: ControllerSlot, button: ControllerButton) {
        self.queue.push(PlatformEvent::ControllerButtonUp { slot, button });
    }

    pub fn move_axis(&mut self, slot: ControllerSlot, axis: ControllerAxis, value: i16) {
        self.queue.push(PlatformEvent::ControllerAxisMotion { slot, axis, value });
    }
}

impl ControllerBackend for VirtualControllers {
    fn open(&mut self, slot: ControllerSlot) -> bool {
        self.attached[slot.index()]
    }
}

impl EventSource for VirtualControllers {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.queue.poll_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = EventQueue::new();
        queue.push(PlatformEvent::Quit);
        queue.push(PlatformEvent::Other);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.poll_event(), Some(PlatformEvent::Quit));
        assert_eq!(queue.poll_event(), Some(PlatformEvent::Other));
        assert_eq!(queue.poll_event(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_virtual_controllers_open_attached_slots() {
        let slot = ControllerSlot::new(4).unwrap();
        let mut pads = VirtualControllers::with_attached([slot]);

        assert!(pads.open(slot));
        assert!(!pads.open(ControllerSlot::new(0).unwrap()));
        assert!(!NoControllers.open(slot));
        assert_eq!(NoControllers.poll_event(), None);
    }

    #[test]
    fn test_virtual_controllers_queue_hotplug() {
        let slot = ControllerSlot::new(1).unwrap();
        let mut pads = VirtualControllers::new();
        pads.connect(slot);
        pads.disconnect(slot);

        assert_eq!(pads.poll_event(), Some(PlatformEvent::ControllerAdded { slot }));
        assert_eq!(pads.poll_event(), Some(PlatformEvent::ControllerRemoved { slot }));
        assert!(!pads.open(slot));
    }
}
