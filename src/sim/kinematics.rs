//! Closed-form vertical kinematics
//!
//! v = √(2gh), h = v²/(2g), t_fall = √(2h/g), t_rise = v/g.
//!
//! The stepping loop never calls these. They exist so the analytic trace
//! and the integrator can be checked against each other at the transition
//! points (impact and apex).

/// Speed attained falling from rest through `height`
#[inline]
pub fn impact_velocity(gravity: f64, height: f64) -> f64 {
    (2.0 * gravity * height).sqrt()
}

/// Apex height reached leaving the ground with speed `velocity`
#[inline]
pub fn rise_height(gravity: f64, velocity: f64) -> f64 {
    velocity * velocity / (2.0 * gravity)
}

/// Time to fall from rest at `height` to the ground
#[inline]
pub fn fall_time(gravity: f64, height: f64) -> f64 {
    (2.0 * height / gravity).sqrt()
}

/// Time to rise from the ground to an apex at `height`
#[inline]
pub fn rise_time(gravity: f64, height: f64) -> f64 {
    impact_velocity(gravity, height) / gravity
}
