//! One frame of input ingestion

use super::events::PlatformEvent;
use super::source::EventSource;
use super::tracker::InputTracker;

/// Counters for a finished frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Frame number after the advance
    pub frame: u64,
    /// Events some device consumed
    pub handled: usize,
    /// Events no device recognized
    pub ignored: usize,
}

/// Exclusive handle on the tracker while a frame's events come in
///
/// The tracker cannot be queried until the frame is finished, and the
/// frame advances the tracker exactly once, on [`finish`](Self::finish)
/// or on drop.
#[must_use = "a frame advances the tracker when finished or dropped"]
pub struct Frame<'a> {
    tracker: &'a mut InputTracker,
    handled: usize,
    ignored: usize,
    advanced: bool,
}

impl<'a> Frame<'a> {
    pub(super) fn new(tracker: &'a mut InputTracker) -> Self {
        Self {
            tracker,
            handled: 0,
            ignored: 0,
            advanced: false,
        }
    }

    /// Ingest one event
    pub fn handle_event(&mut self, event: &PlatformEvent) -> bool {
        let handled = self.tracker.handle_event(event);
        if handled {
            self.handled += 1;
        } else {
            self.ignored += 1;
        }
        handled
    }

    /// Ingest every event `source` has pending; returns how many were consumed
    pub fn drain<S: EventSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut consumed = 0;
        while let Some(event) = source.poll_event() {
            if self.handle_event(&event) {
                consumed += 1;
            }
        }
        consumed
    }

    /// Advance the tracker and report what this frame saw
    pub fn finish(mut self) -> FrameReport {
        self.advance_once();
        FrameReport {
            frame: self.tracker.frame_count(),
            handled: self.handled,
            ignored: self.ignored,
        }
    }

    fn advance_once(&mut self) {
        if !self.advanced {
            self.tracker.update();
            self.advanced = true;
        }
    }
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        self.advance_once();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{EventQueue, Scancode};

    #[test]
    fn test_finish_advances_once() {
        let mut tracker = InputTracker::default();

        let mut frame = tracker.begin_frame();
        frame.handle_event(&PlatformEvent::KeyDown {
            scancode: Scancode::SPACE,
        });
        frame.handle_event(&PlatformEvent::Other);
        let report = frame.finish();

        assert_eq!(
            report,
            FrameReport {
                frame: 1,
                handled: 1,
                ignored: 1
            }
        );
        assert_eq!(tracker.frame_count(), 1);
        assert!(tracker.is_key_triggered(Scancode::SPACE));
    }

    #[test]
    fn test_dropped_frame_still_advances() {
        let mut tracker = InputTracker::default();
        {
            let mut frame = tracker.begin_frame();
            frame.handle_event(&PlatformEvent::KeyDown { scancode: Scancode::E });
        }
        assert_eq!(tracker.frame_count(), 1);
        assert!(tracker.is_key_triggered(Scancode::E));
    }

    #[test]
    fn test_drain_empties_source() {
        let mut tracker = InputTracker::default();
        let mut queue = EventQueue::new();
        queue.push(PlatformEvent::KeyDown { scancode: Scancode::A });
        queue.push(PlatformEvent::Quit);
        queue.push(PlatformEvent::KeyDown { scancode: Scancode::B });

        let mut frame = tracker.begin_frame();
        assert_eq!(frame.drain(&mut queue), 2);
        let report = frame.finish();

        assert!(queue.is_empty());
        assert_eq!(report.handled, 2);
        assert_eq!(report.ignored, 1);
    }
}
