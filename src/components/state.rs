use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Euler attitude of the body frame relative to the earth frame (radians).
///
/// Angles are not wrapped or normalized here; presentation-side wrapping is
/// a consumer concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    /// Roll (phi).
    pub phi: f64,
    /// Pitch (theta).
    pub theta: f64,
    /// Yaw (psi).
    pub psi: f64,
}

impl Default for Attitude {
    fn default() -> Self {
        Self {
            phi: 0.0,
            theta: 0.0,
            psi: 0.0,
        }
    }
}

/// Rigid-body state of the aircraft in body axes.
///
/// This is a plain value type: the stepper works on an owned copy and
/// publishes the whole state at once after a tick commits, so no reader
/// ever observes a half-updated tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Linear velocity in body axes, (u, v, w) (m/s).
    pub velocity: Vector3<f64>,
    /// Angular rates in body axes, (p, q, r) (rad/s).
    pub rates: Vector3<f64>,
    /// Euler attitude (rad).
    pub attitude: Attitude,
    /// Linear acceleration from the last tick, (u_dot, v_dot, w_dot) (m/s^2).
    /// Retained as state for telemetry and the moment model.
    pub acceleration: Vector3<f64>,
    /// Angular acceleration from the last tick, (p_dot, q_dot, r_dot)
    /// (rad/s^2). The roll-rate equation reads the previous tick's r_dot
    /// from here.
    pub angular_acceleration: Vector3<f64>,
    /// Angle of attack from the last tick (rad).
    pub alpha: f64,
    /// Backward-difference rate of change of alpha (rad/s).
    pub alpha_dot: f64,
}

impl Default for AircraftState {
    /// Level-cruise trim state: 36 m/s forward, everything else zero.
    fn default() -> Self {
        Self {
            velocity: Vector3::new(36.0, 0.0, 0.0),
            rates: Vector3::zeros(),
            attitude: Attitude::default(),
            acceleration: Vector3::zeros(),
            angular_acceleration: Vector3::zeros(),
            alpha: 0.0,
            alpha_dot: 0.0,
        }
    }
}

impl AircraftState {
    /// Starts from rest (useful for ground-start scenarios and tests).
    pub fn at_rest() -> Self {
        Self {
            velocity: Vector3::zeros(),
            ..Self::default()
        }
    }

    /// True if every field is finite. Divergence is allowed by the model,
    /// but callers may want to detect it.
    pub fn is_finite(&self) -> bool {
        self.velocity.iter().all(|v| v.is_finite())
            && self.rates.iter().all(|v| v.is_finite())
            && self.attitude.phi.is_finite()
            && self.attitude.theta.is_finite()
            && self.attitude.psi.is_finite()
            && self.acceleration.iter().all(|v| v.is_finite())
            && self.angular_acceleration.iter().all(|v| v.is_finite())
            && self.alpha.is_finite()
            && self.alpha_dot.is_finite()
    }
}
