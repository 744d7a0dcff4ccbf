//! Frame-to-substep bridge
//!
//! Rendering frames arrive at whatever cadence the host manages; physics
//! prefers a fixed step. The driver banks frame time and advances the
//! simulator in `SIM_DT` substeps, capped at `MAX_SUBSTEPS` per frame to
//! prevent the spiral of death after a long stall.

use serde::{Deserialize, Serialize};

use super::state::SimulationState;
use super::tick::BounceSimulator;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Accumulator for fixed-step integration driven by variable frames
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameDriver {
    accumulator: f64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's delta (seconds); returns the state after all substeps
    ///
    /// Frame deltas are clamped to [0, 0.1]s so a suspended tab or debugger
    /// pause doesn't produce a huge catch-up burst.
    pub fn advance_frame(
        &mut self,
        sim: &mut BounceSimulator,
        frame_dt: f64,
    ) -> SimulationState {
        self.accumulator += frame_dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            sim.advance(SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        sim.state()
    }

    /// Drop any banked frame time (call on reset or unpause)
    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }
}
