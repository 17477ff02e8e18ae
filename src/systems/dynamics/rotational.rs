use nalgebra::Vector3;

use crate::components::{AircraftState, MassModel};

/// Result of one rotational evaluation: the advanced body rates plus the
/// angular-rate derivative to store back into the state.
#[derive(Debug, Clone, Copy)]
pub struct RotationalUpdate {
    pub rates: Vector3<f64>,
    pub angular_acceleration: Vector3<f64>,
}

/// Sums applied moments with the gyroscopic/inertia-coupling terms and
/// advances (p, q, r) by one explicit Euler step.
///
/// The derivatives are evaluated in the fixed order p_dot, q_dot, r_dot:
/// p_dot consumes the PREVIOUS tick's r_dot (read from the state), while
/// r_dot consumes the p_dot just computed in this call. This asymmetric
/// staleness is load-bearing for behavioral compatibility and must not be
/// reordered.
pub fn evaluate(
    state: &AircraftState,
    mass: &MassModel,
    moments: &Vector3<f64>,
    timestep: f64,
) -> RotationalUpdate {
    let (p, q, r) = (state.rates.x, state.rates.y, state.rates.z);
    let r_dot_prev = state.angular_acceleration.z;

    let p_dot = moments.x
        + (mass.i_yy - mass.i_zz) * q * r
        + mass.i_xz * (r_dot_prev * p + p * q) / mass.i_xx;

    let q_dot =
        moments.y + (mass.i_zz - mass.i_xx) * r * p + mass.i_xz * (r * r - p * p) / mass.i_yy;

    let r_dot =
        moments.z + (mass.i_xx - mass.i_yy) * p * q + mass.i_xz * (p_dot - q * r) / mass.i_zz;

    let angular_acceleration = Vector3::new(p_dot, q_dot, r_dot);

    RotationalUpdate {
        rates: state.rates + angular_acceleration * timestep,
        angular_acceleration,
    }
}
