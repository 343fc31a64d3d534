//! Per-control press classification

/// Press classification of a single key or button for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Up, and was up last frame
    #[default]
    Idle,
    /// Went down this frame (edge)
    Triggered,
    /// Down for more than one frame
    Held,
    /// Went up this frame (edge)
    Released,
}

impl ButtonState {
    /// Returns true if button is currently down (triggered or held)
    pub fn is_down(self) -> bool {
        matches!(self, Self::Triggered | Self::Held)
    }

    /// Returns true if button went down this frame
    pub fn is_triggered(self) -> bool {
        matches!(self, Self::Triggered)
    }

    /// Returns true if button was already down last frame and still is
    pub fn is_held(self) -> bool {
        matches!(self, Self::Held)
    }

    /// Returns true if button went up this frame
    pub fn is_released(self) -> bool {
        matches!(self, Self::Released)
    }
}

/// Raw flags and classification for one control
///
/// Event ingestion only touches `raw_down`; `advance` is the only place
/// `state` changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonTracker {
    raw_down: bool,
    was_down: bool,
    state: ButtonState,
}

impl ButtonTracker {
    /// Record a down or up report from the platform
    pub fn set_raw(&mut self, down: bool) {
        self.raw_down = down;
    }

    pub fn raw_down(&self) -> bool {
        self.raw_down
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Advance the classification by one frame
    pub fn advance(&mut self) {
        self.state = match (self.was_down, self.raw_down) {
            (false, true) => ButtonState::Triggered,
            (true, true) => ButtonState::Held,
            (true, false) => ButtonState::Released,
            (false, false) => ButtonState::Idle,
        };
        self.was_down = self.raw_down;
    }
}
