//! Variable-timestep integration step
//!
//! Semi-implicit Euler with inelastic ground collisions. The caller's
//! frame loop owns timing; each call advances the state by `dt` seconds.

use serde::{Deserialize, Serialize};

use super::config::{ConfigError, PhysicsConfig};
use super::state::{SimulationState, Status};

/// Advance `state` by `dt` seconds
///
/// Negative `dt` is clamped to zero, so the step is total over all finite
/// inputs; `dt == 0` returns with the state untouched. A settled state is
/// never mutated.
pub fn tick(config: &PhysicsConfig, state: &mut SimulationState, dt: f64) {
    if dt <= 0.0 || state.status == Status::Settled {
        return;
    }

    // A ball on the ground moving slower than the threshold settles before
    // any integration. This covers a zero-height start on the first call
    // (for any dt) and the sub-threshold rebound left by the final bounce.
    if state.height <= 0.0 && state.velocity.abs() < config.stop_velocity_threshold {
        state.height = 0.0;
        state.velocity = 0.0;
        state.status = Status::Settled;
        return;
    }

    // Velocity first, then position from the new velocity
    state.velocity -= config.gravity * dt;
    state.height += state.velocity * dt;

    // Ground contact: clamp, then settle or reflect-and-attenuate
    if state.height <= 0.0 {
        state.height = 0.0;
        if state.velocity.abs() < config.stop_velocity_threshold {
            state.velocity = 0.0;
            state.status = Status::Settled;
        } else {
            state.velocity = -state.velocity * config.restitution;
            state.bounce_count += 1;
        }
    }
}

/// Owns a config/state pair and hands out state snapshots
///
/// Thin convenience wrapper over [`tick`] for hosts that don't want to
/// carry the pair themselves. Single-threaded use only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BounceSimulator {
    config: PhysicsConfig,
    state: SimulationState,
}

impl BounceSimulator {
    /// Validate the config and start a run at the drop height
    pub fn new(config: PhysicsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: SimulationState::new(&config),
            config,
        })
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Current state snapshot
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Advance by `dt` seconds and return the new state
    pub fn advance(&mut self, dt: f64) -> SimulationState {
        tick(&self.config, &mut self.state, dt);
        self.state
    }

    /// Restart with a (possibly new) config
    ///
    /// Idempotent: calling repeatedly with the same config always yields
    /// the same initial state.
    pub fn reset(&mut self, config: PhysicsConfig) -> Result<SimulationState, ConfigError> {
        config.validate()?;
        self.config = config;
        self.state = SimulationState::new(&config);
        Ok(self.state)
    }
}
