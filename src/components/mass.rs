use serde::{Deserialize, Serialize};

use crate::utils::SimError;

/// Mass and inertia properties of the airframe.
///
/// The products of inertia are stored raw, as they appear in the moment
/// equations; `i_xz` is negative for this airframe (mass asymmetry about
/// the body x-z plane). `i_xy` and `i_yz` are zero for a conventional
/// symmetric layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass of the aircraft (kg).
    pub mass: f64,
    /// Moment of inertia about the x-axis (kg·m²).
    pub i_xx: f64,
    /// Moment of inertia about the y-axis (kg·m²).
    pub i_yy: f64,
    /// Moment of inertia about the z-axis (kg·m²).
    pub i_zz: f64,
    /// Product of inertia between the x and z axes (kg·m²).
    pub i_xz: f64,
}

impl MassModel {
    /// Creates a validated mass model.
    ///
    /// Fails fast on non-positive mass or diagonal inertia rather than
    /// letting NaN/Infinity propagate through the dynamics.
    pub fn new(mass: f64, i_xx: f64, i_yy: f64, i_zz: f64, i_xz: f64) -> Result<Self, SimError> {
        if !(mass > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "mass must be positive, got {}",
                mass
            )));
        }
        for (name, value) in [("i_xx", i_xx), ("i_yy", i_yy), ("i_zz", i_zz)] {
            if !(value > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !i_xz.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "i_xz must be finite, got {}",
                i_xz
            )));
        }

        Ok(Self {
            mass,
            i_xx,
            i_yy,
            i_zz,
            i_xz,
        })
    }

    /// Representative light-aircraft values (Cessna 172 class).
    pub fn cessna_172() -> Self {
        Self {
            mass: 760.0,
            i_xx: 2424.0,
            i_yy: 2427.0,
            i_zz: 4372.0,
            i_xz: -161.0,
        }
    }
}

impl Default for MassModel {
    fn default() -> Self {
        Self::cessna_172()
    }
}
