use serde::{Deserialize, Serialize};

use super::{AeroCoefficients, AirData};

/// Aerodynamic forces for one evaluation, in newtons.
///
/// `body_x` and `body_y` are the resolved body-axis components. The body
/// z-component is not derived from lift in this model; the translational
/// dynamics apply a constant cruise-lift force instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AeroForces {
    /// Drag magnitude along the flow direction.
    pub drag: f64,
    /// Lift magnitude normal to the flow.
    pub lift: f64,
    /// Side force along body y.
    pub side_force: f64,
    /// Resolved body x-axis component: −D·cos(α) + L·sin(α).
    pub body_x: f64,
    /// Body y-axis component (side force applied directly, no rotation).
    pub body_y: f64,
}

/// Combines dynamic pressure, reference area, and the bucketed coefficients
/// into scalar forces, then resolves drag/lift through the angle of attack.
pub fn calculate_aero_forces(
    air: &AirData,
    wing_area: f64,
    coeffs: &AeroCoefficients,
) -> AeroForces {
    let q_s = air.dynamic_pressure * wing_area;

    let drag = q_s * coeffs.drag(air.alpha);
    let lift = q_s * coeffs.lift(air.alpha);
    let side_force = q_s * coeffs.side_force(air.beta);

    AeroForces {
        drag,
        lift,
        side_force,
        body_x: -drag * air.alpha.cos() + lift * air.alpha.sin(),
        body_y: side_force,
    }
}
