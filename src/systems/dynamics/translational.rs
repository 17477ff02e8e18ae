use nalgebra::Vector3;

use crate::components::{AircraftState, MassModel};
use crate::resources::SimConfig;
use crate::systems::aerodynamics::{calculate_aero_forces, AeroCoefficients, AirData};

/// Result of one translational evaluation: the advanced body velocity plus
/// the derivative and alpha to store back into the state.
#[derive(Debug, Clone, Copy)]
pub struct TranslationalUpdate {
    pub velocity: Vector3<f64>,
    pub acceleration: Vector3<f64>,
    pub alpha: f64,
}

/// Sums gravity, thrust, and aerodynamic forces in body axes and advances
/// (u, v, w) by one explicit Euler step.
///
/// All inputs are read from the snapshot `state`; nothing is mutated here.
pub fn evaluate(
    state: &AircraftState,
    mass: &MassModel,
    coeffs: &AeroCoefficients,
    config: &SimConfig,
) -> TranslationalUpdate {
    let (u, v, w) = (state.velocity.x, state.velocity.y, state.velocity.z);
    let (p, q, r) = (state.rates.x, state.rates.y, state.rates.z);
    let (phi, theta) = (state.attitude.phi, state.attitude.theta);
    let m = mass.mass;
    let g = config.physics.gravity;

    let air = AirData::calculate(&state.velocity, config.physics.air_density);
    let aero = calculate_aero_forces(&air, config.aircraft.wing_area, coeffs);

    // Body-axis force balance. Thrust acts along x only; the z aerodynamic
    // force is the fixed cruise-lift approximation, not computed from C_L.
    let f_x = -m * g * theta.sin() + aero.body_x + config.aircraft.thrust;
    let f_y = m * g * phi.sin() * theta.cos() + aero.body_y;
    let f_z = m * g * phi.cos() * theta.cos() + config.aircraft.cruise_lift;

    // Translational derivatives with the gyroscopic cross-terms.
    let acceleration = Vector3::new(
        f_x / m - q * w + r * v,
        f_y / m - r * u + p * w,
        f_z / m - p * v + q * u,
    );

    TranslationalUpdate {
        velocity: state.velocity + acceleration * config.physics.timestep,
        acceleration,
        alpha: air.alpha,
    }
}
