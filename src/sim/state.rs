//! Per-run simulation state
//!
//! Everything a host needs to position a marker and update status text.
//! State is a plain `Copy` value; `advance` hands out snapshots, so a
//! caller mutating its copy never affects the simulator.

use serde::{Deserialize, Serialize};

use super::config::PhysicsConfig;

/// Lifecycle of a run
///
/// `Running` transitions to `Settled` exactly once and never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Running,
    Settled,
}

/// Direction of motion, derived for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Falling,
    Rising,
    AtRest,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Falling => "Falling",
            Phase::Rising => "Rising",
            Phase::AtRest => "At rest",
        }
    }
}

/// Mutable per-run state, advanced only by [`tick`](super::tick::tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Altitude above ground (m), clamped to zero on impact
    pub height: f64,
    /// Signed vertical velocity (m/s), positive = upward
    pub velocity: f64,
    /// Ground contacts so far
    pub bounce_count: u32,
    /// Running or settled
    pub status: Status,
}

impl SimulationState {
    /// Initial state for a run: at rest at the drop height
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            height: config.initial_height,
            velocity: 0.0,
            bounce_count: 0,
            status: Status::Running,
        }
    }

    /// Motion phase derived from status and velocity sign
    pub fn phase(&self) -> Phase {
        if self.status == Status::Settled {
            Phase::AtRest
        } else if self.velocity > 0.0 {
            Phase::Rising
        } else {
            Phase::Falling
        }
    }

    /// One-line status text for a HUD or console
    pub fn summary(&self) -> String {
        match self.status {
            Status::Running => format!(
                "Bounce #{} | Height: {:.2}m | Phase: {}",
                self.bounce_count,
                self.height,
                self.phase().as_str()
            ),
            Status::Settled => format!(
                "Simulation complete! {} bounces. Final height: {:.3}m",
                self.bounce_count, self.height
            ),
        }
    }
}
