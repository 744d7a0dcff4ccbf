//! Closed-form bounce trace
//!
//! The analytic counterpart of the integrator: fall time, impact velocity
//! and the geometric sequence of post-bounce apex heights, computed
//! without stepping. The integrator's tests pin it against these numbers
//! at every transition point.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::sim::PhysicsConfig;
use crate::sim::kinematics::{fall_time, impact_velocity, rise_height};

/// One row of the analytic trace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceRow {
    /// 1-based bounce number
    pub bounce: u32,
    /// Apex height reached after that bounce (m)
    pub apex_height: f64,
}

/// Lazy sequence of post-bounce apex heights: hₙ = h₀ · e²ⁿ
///
/// For restitution = 1.0 the sequence is constant and never ends; callers
/// cap it (`take`) instead of waiting for it to decay.
pub fn apex_heights(config: PhysicsConfig) -> impl Iterator<Item = BounceRow> {
    let e2 = config.restitution * config.restitution;
    let mut apex = config.initial_height;
    (1u32..).map(move |bounce| {
        apex *= e2;
        BounceRow {
            bounce,
            apex_height: apex,
        }
    })
}

/// Contact index at which the integrator settles
///
/// A contact settles the ball once its impact speed is below the stop
/// threshold, i.e. once the preceding apex drops under the threshold's
/// equivalent height v²/(2g). Returns the number of contacts that still
/// bounce, which is the final `bounce_count`. `None` when restitution is
/// 1.0 and the ball never slows down.
pub fn settle_bounce(config: &PhysicsConfig) -> Option<u32> {
    if config.restitution >= 1.0 {
        return None;
    }
    let cutoff = rise_height(config.gravity, config.stop_velocity_threshold);
    let e2 = config.restitution * config.restitution;

    let mut apex = config.initial_height;
    let mut bounces = 0u32;
    while apex >= cutoff {
        apex *= e2;
        bounces += 1;
    }
    Some(bounces)
}

/// Print the analytic trace, one line per bounce
///
/// Mirrors the simulator run: fall time and impact speed for the initial
/// drop, then apex heights until they fall below the threshold's
/// equivalent height (or `max_bounces` for configs that never settle).
pub fn write_trace(
    config: &PhysicsConfig,
    max_bounces: u32,
    out: &mut impl Write,
) -> io::Result<()> {
    let g = config.gravity;
    let h0 = config.initial_height;

    writeln!(out, "Time to hit ground = {:.4} s", fall_time(g, h0))?;
    writeln!(
        out,
        "Velocity when it hits ground = {:.4} m/s",
        impact_velocity(g, h0)
    )?;

    let cutoff = rise_height(g, config.stop_velocity_threshold);
    for row in apex_heights(*config).take(max_bounces as usize) {
        if row.apex_height < cutoff {
            break;
        }
        writeln!(
            out,
            "Height after bounce #{} = {:.6} m",
            row.bounce, row.apex_height
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apex_sequence_is_geometric() {
        let config = PhysicsConfig::default();
        let rows: Vec<_> = apex_heights(config).take(4).collect();

        assert!((rows[0].apex_height - 64.0).abs() < 1e-9);
        for pair in rows.windows(2) {
            let ratio = pair[1].apex_height / pair[0].apex_height;
            assert!((ratio - 0.64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_apex_sequence_strictly_decreases_below_unit_restitution() {
        let config = PhysicsConfig::default();
        let rows: Vec<_> = apex_heights(config).take(10).collect();
        for pair in rows.windows(2) {
            assert!(pair[1].apex_height < pair[0].apex_height);
        }
    }

    #[test]
    fn test_settle_bounce_reference_scenario() {
        // gravity 9.8, height 100, restitution 0.8, threshold 0.1:
        // 100 · 0.64ⁿ stays above 0.1²/(2·9.8) through n = 27, so 28
        // contacts bounce before the ball settles.
        assert_eq!(settle_bounce(&PhysicsConfig::default()), Some(28));
    }

    #[test]
    fn test_settle_bounce_edge_cases() {
        let elastic = PhysicsConfig::new(9.8, 1.0, 0.1, 100.0).unwrap();
        assert_eq!(settle_bounce(&elastic), None);

        let grounded = PhysicsConfig::new(9.8, 0.8, 0.1, 0.0).unwrap();
        assert_eq!(settle_bounce(&grounded), Some(0));
    }

    #[test]
    fn test_write_trace_output() {
        let config = PhysicsConfig::default();
        let mut buf = Vec::new();
        write_trace(&config, 1000, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Time to hit ground = 4.5175 s");
        assert_eq!(lines[1], "Velocity when it hits ground = 44.2719 m/s");
        assert!(lines[2].starts_with("Height after bounce #1 = 64.0000"));
        // Header plus one line per bounce that still clears the cutoff
        assert_eq!(lines.len(), 2 + 27);
    }

    #[test]
    fn test_write_trace_caps_non_settling_config() {
        let config = PhysicsConfig::new(9.8, 1.0, 0.1, 100.0).unwrap();
        let mut buf = Vec::new();
        write_trace(&config, 5, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2 + 5);
    }
}
