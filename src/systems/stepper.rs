use nalgebra::Vector3;

use crate::components::{AircraftState, MassModel};
use crate::resources::SimConfig;
use crate::systems::aerodynamics::AeroCoefficients;
use crate::systems::dynamics::{rotational, translational};
use crate::utils::SimError;

/// Owns the single live `AircraftState` and advances it one fixed tick at
/// a time.
///
/// Each tick evaluates translational then rotational dynamics against a
/// working copy and publishes the copy only after both commit, so an
/// external reader calling `state()` between ticks never sees a partial
/// update. Applied external moments are zero in this core (control-surface
/// actuation is out of scope).
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    mass: MassModel,
    coeffs: AeroCoefficients,
    state: AircraftState,
    tick: u64,
}

impl Simulation {
    /// Builds a simulation from a validated configuration, starting at the
    /// level-cruise trim state.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        Self::with_state(config, AircraftState::default())
    }

    /// Builds a simulation starting from an explicit initial state.
    ///
    /// The state must be finite; divergence is only tolerated once the
    /// simulation itself produces it.
    pub fn with_state(config: SimConfig, state: AircraftState) -> Result<Self, SimError> {
        config.validate()?;
        if !state.is_finite() {
            return Err(SimError::StateError(
                "initial state contains non-finite values".to_string(),
            ));
        }
        let mass = config.aircraft.mass_model()?;
        let coeffs = AeroCoefficients::new(config.aircraft.angle_lookup);

        Ok(Self {
            config,
            mass,
            coeffs,
            state,
            tick: 0,
        })
    }

    /// Read-only snapshot of the current state. Valid between ticks.
    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn mass(&self) -> &MassModel {
        &self.mass
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated time elapsed (s).
    pub fn elapsed(&self) -> f64 {
        self.tick as f64 * self.config.physics.timestep
    }

    /// Advances the simulation by exactly one fixed tick.
    ///
    /// Always completes; numerical divergence under extreme forces is a
    /// property of the model, not an error.
    pub fn step(&mut self) {
        let dt = self.config.physics.timestep;

        // Work on an owned copy; the published state stays untouched until
        // the whole tick commits.
        let mut next = self.state.clone();

        let linear = translational::evaluate(&self.state, &self.mass, &self.coeffs, &self.config);
        next.velocity = linear.velocity;
        next.acceleration = linear.acceleration;
        next.alpha_dot = (linear.alpha - self.state.alpha) / dt;
        next.alpha = linear.alpha;

        // The rotational pass sees the translational update, while
        // next.angular_acceleration still holds last tick's derivatives
        // (the roll equation needs the stale r_dot).
        let angular = rotational::evaluate(&next, &self.mass, &Vector3::zeros(), dt);
        next.rates = angular.rates;
        next.angular_acceleration = angular.angular_acceleration;

        self.state = next;
        self.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// A configuration with every force source zeroed out.
    fn zero_force_config() -> SimConfig {
        let mut config = SimConfig::default();
        config.physics.gravity = 0.0;
        config.physics.air_density = 0.0;
        config.aircraft.thrust = 0.0;
        config.aircraft.cruise_lift = 0.0;
        config
    }

    #[test]
    fn test_single_step_matches_component_evaluation() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        let before = sim.state().clone();

        sim.step();

        let q_s = 0.5 * 1.06 * 36.0 * 36.0 * 16.2;
        let expected_u_dot = (-q_s * 0.045 + 7000.0) / 760.0;
        let dt = 1.0 / 60.0;

        assert_relative_eq!(
            sim.state().velocity.x,
            before.velocity.x + expected_u_dot * dt,
            max_relative = 1e-12
        );
        assert_relative_eq!(sim.state().acceleration.x, expected_u_dot, max_relative = 1e-12);
        assert_eq!(sim.tick(), 1);
    }

    #[test]
    fn test_equilibrium_is_noop() {
        let mut sim = Simulation::new(zero_force_config()).unwrap();
        let before = sim.state().clone();

        sim.step();

        assert_eq!(sim.state().velocity, before.velocity);
        assert_eq!(sim.state().rates, before.rates);
        assert_eq!(sim.state().attitude, before.attitude);
    }

    #[test]
    fn test_determinism() {
        let mut a = Simulation::new(SimConfig::default()).unwrap();
        let mut b = Simulation::new(SimConfig::default()).unwrap();

        for _ in 0..100 {
            a.step();
            b.step();
        }

        // Bit-identical: no hidden randomness or wall-clock dependency.
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_attitude_untouched_without_moments() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();

        for _ in 0..60 {
            sim.step();
        }

        assert_eq!(sim.state().attitude.phi, 0.0);
        assert_eq!(sim.state().attitude.theta, 0.0);
        assert_eq!(sim.state().attitude.psi, 0.0);
        assert_eq!(sim.state().rates, Vector3::zeros());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = SimConfig::default();
        config.aircraft.mass = 0.0;
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_non_finite_initial_state_rejected() {
        let mut state = AircraftState::default();
        state.velocity.x = f64::NAN;
        assert!(Simulation::with_state(SimConfig::default(), state).is_err());
    }

    #[test]
    fn test_ground_start_accelerates_under_thrust() {
        // From rest there is no airspeed, so the only x-axis force is
        // thrust.
        let mut sim =
            Simulation::with_state(SimConfig::default(), AircraftState::at_rest()).unwrap();

        sim.step();

        let dt = 1.0 / 60.0;
        let expected_u_dot = 7000.0 / 760.0;
        assert_relative_eq!(
            sim.state().velocity.x,
            expected_u_dot * dt,
            max_relative = 1e-12
        );
        assert_eq!(sim.state().rates, Vector3::zeros());
    }

    #[test]
    fn test_alpha_dot_backward_difference() {
        // Start with a vertical velocity component so alpha jumps on the
        // first tick.
        let mut state = AircraftState::default();
        state.velocity.z = 2.0;
        let mut sim = Simulation::with_state(SimConfig::default(), state).unwrap();

        sim.step();

        let dt = 1.0 / 60.0;
        let expected_alpha = sim.state().alpha;
        assert_relative_eq!(sim.state().alpha_dot, expected_alpha / dt, max_relative = 1e-12);
    }
}
