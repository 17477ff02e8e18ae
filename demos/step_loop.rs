use airframe::{SimConfig, Simulation};

/// Steps the core for five simulated seconds and prints the state once per
/// second.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = Simulation::new(SimConfig::default())?;

    for second in 1..=5 {
        for _ in 0..60 {
            sim.step();
        }
        let state = sim.state();
        println!(
            "t={:>2}s  u={:7.3} v={:6.3} w={:7.3}  alpha={:+.4} rad",
            second, state.velocity.x, state.velocity.y, state.velocity.z, state.alpha
        );
    }

    Ok(())
}
