//! Rebound entry point
//!
//! Prints the closed-form bounce trace by default; `--integrate` runs the
//! fixed-timestep simulation instead and reports each ground contact.

use anyhow::Result;
use clap::Parser;

use rebound::consts::*;
use rebound::sim::{BounceSimulator, FrameDriver, PhysicsConfig, Status};
use rebound::trace;

#[derive(Parser, Debug)]
#[command(
    name = "rebound",
    version,
    about = "Bouncing ball simulator: analytic trace or fixed-step integration"
)]
struct Opts {
    /// Gravitational acceleration (m/s²)
    #[arg(long, default_value_t = DEFAULT_GRAVITY)]
    gravity: f64,

    /// Drop height (m)
    #[arg(long, default_value_t = DEFAULT_INITIAL_HEIGHT)]
    height: f64,

    /// Fraction of speed kept per bounce, in (0, 1]
    #[arg(long, default_value_t = DEFAULT_RESTITUTION)]
    restitution: f64,

    /// Impact speed below which the ball settles (m/s)
    #[arg(long, default_value_t = DEFAULT_STOP_VELOCITY)]
    threshold: f64,

    /// Give up after this many bounces (restitution 1.0 never settles)
    #[arg(long, default_value_t = 1000)]
    max_bounces: u32,

    /// Integrate frame by frame instead of printing the closed-form trace
    #[arg(long)]
    integrate: bool,

    /// Simulated frame delta for --integrate (seconds)
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    // Reject a bad configuration before anything runs
    let config = PhysicsConfig::new(opts.gravity, opts.restitution, opts.threshold, opts.height)?;
    log::info!(
        "config: gravity={} restitution={} threshold={} height={}",
        config.gravity,
        config.restitution,
        config.stop_velocity_threshold,
        config.initial_height
    );

    if opts.integrate {
        if opts.frame_dt <= 0.0 {
            anyhow::bail!("--frame-dt must be positive");
        }
        run_integrated(config, opts.frame_dt, opts.max_bounces)
    } else {
        let stdout = std::io::stdout();
        trace::write_trace(&config, opts.max_bounces, &mut stdout.lock())?;
        Ok(())
    }
}

/// Drive the simulator at a fixed frame cadence and log each contact
fn run_integrated(config: PhysicsConfig, frame_dt: f64, max_bounces: u32) -> Result<()> {
    let mut sim = BounceSimulator::new(config)?;
    let mut driver = FrameDriver::new();
    let mut last_bounce = 0;
    let mut elapsed = 0.0;

    loop {
        let state = driver.advance_frame(&mut sim, frame_dt);
        elapsed += frame_dt;

        if state.bounce_count > last_bounce {
            last_bounce = state.bounce_count;
            println!("t={elapsed:8.3}s  {}", state.summary());
        }
        if state.status == Status::Settled {
            println!("t={elapsed:8.3}s  {}", state.summary());
            return Ok(());
        }
        if state.bounce_count >= max_bounces {
            println!("stopped after {max_bounces} bounces without settling");
            return Ok(());
        }
    }
}
