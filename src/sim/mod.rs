//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Scalar f64 state only
//! - Variable `dt`, externally timed
//! - No rendering or platform dependencies
//! - Calls to `advance` are sequential and non-reentrant (caller-serialized)

pub mod config;
pub mod driver;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use config::{ConfigError, PhysicsConfig};
pub use driver::FrameDriver;
pub use state::{Phase, SimulationState, Status};
pub use tick::{BounceSimulator, tick};
