use std::{
    env, thread,
    time::{Duration, Instant},
};

use log::info;

use airframe::{SimConfig, Simulation, StateSnapshot, TelemetrySink, UdpTelemetry};

/// Runs the physics core at its fixed rate and broadcasts a state snapshot
/// every tick. Usage: `airframe_serve [config.yaml]`; the telemetry target
/// can be overridden with AIRFRAME_TELEMETRY.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("loading config from {}", path);
            SimConfig::from_yaml(path)?
        }
        None => SimConfig::default(),
    };

    let target = env::var("AIRFRAME_TELEMETRY")
        .unwrap_or_else(|_| UdpTelemetry::DEFAULT_TARGET.to_string());
    let mut telemetry = UdpTelemetry::new(target.as_str())?;
    info!("sending UDP telemetry to {}", telemetry.target());

    let mut sim = Simulation::new(config)?;
    let tick = Duration::from_secs_f64(sim.config().physics.timestep);
    info!(
        "starting {} at {} Hz",
        sim.config().aircraft.name,
        1.0 / sim.config().physics.timestep
    );

    loop {
        let started = Instant::now();

        sim.step();
        let bytes = StateSnapshot::capture(&sim).to_bytes()?;
        telemetry.send(&bytes);

        // Pace to wall clock; sleep only between ticks.
        if let Some(remaining) = tick.checked_sub(started.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
