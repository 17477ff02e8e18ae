use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Flow quantities derived from the body-axis velocity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AirData {
    /// Airspeed magnitude (m/s).
    pub true_airspeed: f64,
    /// Angle of attack (rad).
    pub alpha: f64,
    /// Sideslip angle (rad).
    pub beta: f64,
    /// Air density used for this evaluation (kg/m³).
    pub density: f64,
    /// Dynamic pressure 0.5·ρ·V² (Pa).
    pub dynamic_pressure: f64,
}

impl AirData {
    /// Computes air data from the body-axis velocity (u, v, w).
    ///
    /// `atan2` handles the zero-velocity case by convention (both angles
    /// come out 0), so there is no degenerate input.
    pub fn calculate(velocity: &Vector3<f64>, density: f64) -> Self {
        let (u, v, w) = (velocity.x, velocity.y, velocity.z);

        let alpha = w.atan2(u);
        let beta = v.atan2((u * u + w * w).sqrt());
        let true_airspeed = velocity.norm();
        let dynamic_pressure = 0.5 * density * true_airspeed * true_airspeed;

        Self {
            true_airspeed,
            alpha,
            beta,
            density,
            dynamic_pressure,
        }
    }
}
