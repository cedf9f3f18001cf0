//! Platform abstraction layer
//!
//! Host-side helpers that sit between a window/input backend and the
//! simulation core:
//! - Held-key sampling turned into edge-triggered tick input
//! - Fixed-timestep accumulation

pub mod input;

pub use input::{EdgeTracker, KeyState};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame we will try to catch up on, in seconds
const MAX_FRAME_TIME: f64 = 0.1;

/// Accumulates variable frame times into whole simulation steps
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f64,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's elapsed time and return how many ticks to run
    pub fn push(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop whatever could not be caught up
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    /// Fraction of a tick left over, for render interpolation
    pub fn alpha(&self) -> f64 {
        self.accumulator / SIM_DT
    }
}
