//! Rebound - a bouncing ball physics simulator
//!
//! Core modules:
//! - `sim`: Deterministic simulation (config, state, stepping, kinematics)
//! - `trace`: Closed-form bounce trace (the "console script" mode)
//! - `viewport`: Meters-to-pixels mapping for embedding hosts

pub mod sim;
pub mod trace;
pub mod viewport;

pub use sim::{BounceSimulator, ConfigError, Phase, PhysicsConfig, SimulationState, Status};

/// Simulation constants
pub mod consts {
    /// Fixed physics timestep (120 Hz)
    pub const SIM_DT: f64 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default gravitational acceleration (m/s²)
    pub const DEFAULT_GRAVITY: f64 = 9.8;
    /// Default coefficient of restitution
    pub const DEFAULT_RESTITUTION: f64 = 0.8;
    /// Default settle threshold (m/s)
    pub const DEFAULT_STOP_VELOCITY: f64 = 0.1;
    /// Default drop height (m)
    pub const DEFAULT_INITIAL_HEIGHT: f64 = 100.0;
}
