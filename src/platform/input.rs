//! Held-key sampling to edge-triggered tick input
//!
//! The core never polls keys. Hosts sample which keys are held once per
//! tick and let `EdgeTracker` work out which ones were just pressed.

use crate::sim::{Horizontal, TickInput};

/// Keys held down at sample time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub confirm: bool,
    pub up: bool,
    pub down: bool,
}

/// Remembers the previous sample to detect released-to-pressed transitions
#[derive(Debug, Clone, Default)]
pub struct EdgeTracker {
    previous: KeyState,
}

impl EdgeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the input for one tick from the keys currently held
    pub fn sample(&mut self, held: KeyState) -> TickInput {
        let prev = self.previous;
        self.previous = held;
        TickInput {
            horizontal: Horizontal::from_keys(held.left, held.right),
            jump: held.jump && !prev.jump,
            confirm: held.confirm && !prev.confirm,
            up: held.up && !prev.up,
            down: held.down && !prev.down,
        }
    }

    /// Forget held keys, e.g. after the window loses focus
    pub fn reset(&mut self) {
        self.previous = KeyState::default();
    }
}
