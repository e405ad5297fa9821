//! Fixed timestep pacing
//!
//! The host reports elapsed wall-clock time per frame; the stepper converts
//! it into whole simulation ticks, carrying the remainder forward.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::input::InputLatch;
use crate::sim::{GameState, tick};
use crate::snapshot::RenderFrame;

/// Longest frame the stepper will try to catch up on (seconds)
const MAX_FRAME_DT: f32 = 0.1;

pub struct FixedStepper {
    pub state: GameState,
    pub latch: InputLatch,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStepper {
    pub fn new(state: GameState) -> Self {
        Self::with_max_substeps(state, MAX_SUBSTEPS)
    }

    pub fn with_max_substeps(state: GameState, max_substeps: u32) -> Self {
        Self {
            state,
            latch: InputLatch::new(),
            accumulator: 0.0,
            max_substeps: max_substeps.max(1),
        }
    }

    /// Run simulation ticks for `frame_dt` seconds of host time.
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < self.max_substeps {
            let input = self.latch.peek();
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.latch.clear_actions();
        }

        // Hit the ceiling: drop whole ticks of backlog, keep the fractional phase
        if substeps == self.max_substeps {
            self.accumulator %= SIM_DT;
        }
        substeps
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::capture(&self.state)
    }
}
