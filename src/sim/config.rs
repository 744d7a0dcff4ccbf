//! Physics parameters for a simulation run
//!
//! A `PhysicsConfig` is immutable for the lifetime of a run; starting a
//! run with different parameters means resetting the simulator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("gravity must be a positive finite number, got {0}")]
    Gravity(f64),
    #[error("restitution must be in (0, 1], got {0}")]
    Restitution(f64),
    #[error("stop velocity threshold must be a positive finite number, got {0}")]
    StopVelocity(f64),
    #[error("initial height must be a non-negative finite number, got {0}")]
    InitialHeight(f64),
}

/// Physics parameters (immutable per run)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravitational acceleration magnitude (m/s²)
    pub gravity: f64,
    /// Fraction of speed retained after a bounce, in (0, 1]
    pub restitution: f64,
    /// Impact speeds below this settle the ball for good (m/s)
    pub stop_velocity_threshold: f64,
    /// Drop height at the start of a run (m)
    pub initial_height: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            restitution: DEFAULT_RESTITUTION,
            stop_velocity_threshold: DEFAULT_STOP_VELOCITY,
            initial_height: DEFAULT_INITIAL_HEIGHT,
        }
    }
}

impl PhysicsConfig {
    /// Build a validated config; rejects out-of-range or non-finite values
    pub fn new(
        gravity: f64,
        restitution: f64,
        stop_velocity_threshold: f64,
        initial_height: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            gravity,
            restitution,
            stop_velocity_threshold,
            initial_height,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its documented range
    ///
    /// Fields are public plain data, so anything deserialized or mutated
    /// by hand should pass through here before a run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if !self.restitution.is_finite() || self.restitution <= 0.0 || self.restitution > 1.0 {
            return Err(ConfigError::Restitution(self.restitution));
        }
        if !self.stop_velocity_threshold.is_finite() || self.stop_velocity_threshold <= 0.0 {
            return Err(ConfigError::StopVelocity(self.stop_velocity_threshold));
        }
        if !self.initial_height.is_finite() || self.initial_height < 0.0 {
            return Err(ConfigError::InitialHeight(self.initial_height));
        }
        Ok(())
    }
}
