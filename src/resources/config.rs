use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::MassModel;
use crate::systems::aerodynamics::AngleLookup;
use crate::utils::{self, SimError};

/// Integration and environment settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed integration step (s).
    pub timestep: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Constant air density (kg/m³). No atmosphere model beyond this.
    pub air_density: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: utils::TIMESTEP,
            gravity: utils::GRAVITY,
            air_density: utils::AIR_DENSITY,
        }
    }
}

/// Airframe parameters: mass properties, geometry, and the fixed-force
/// simplifications of this model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,

    /// Mass properties
    pub mass: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    pub ixz: f64,

    /// Geometry
    pub wing_area: f64,

    /// Constant engine thrust along body x (N); no throttle model.
    pub thrust: f64,
    /// Constant body z aerodynamic force (N), an assumed cruise/zero-alpha
    /// lift condition rather than a value derived from C_L.
    pub cruise_lift: f64,

    /// Unit used when indexing the coefficient buckets.
    #[serde(default)]
    pub angle_lookup: AngleLookup,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        let mass = MassModel::cessna_172();
        Self {
            name: "cessna_172".to_string(),
            mass: mass.mass,
            ixx: mass.i_xx,
            iyy: mass.i_yy,
            izz: mass.i_zz,
            ixz: mass.i_xz,
            wing_area: utils::WING_AREA,
            thrust: utils::ENGINE_THRUST,
            cruise_lift: utils::CRUISE_LIFT,
            angle_lookup: AngleLookup::default(),
        }
    }
}

impl AircraftConfig {
    /// Validates the mass properties into a `MassModel`.
    pub fn mass_model(&self) -> Result<MassModel, SimError> {
        MassModel::new(self.mass, self.ixx, self.iyy, self.izz, self.ixz)
    }
}

/// Top-level simulation configuration, fixed at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub aircraft: AircraftConfig,
}

impl SimConfig {
    /// Loads a configuration from a YAML file.
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let contents = fs::read_to_string(path)?;
        let config: SimConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Fails fast on values the dynamics cannot run with.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.physics.timestep > 0.0) || !self.physics.timestep.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "timestep must be positive and finite, got {}",
                self.physics.timestep
            )));
        }
        if !self.physics.gravity.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "gravity must be finite, got {}",
                self.physics.gravity
            )));
        }
        if !(self.physics.air_density >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "air_density must be non-negative, got {}",
                self.physics.air_density
            )));
        }
        if !(self.aircraft.wing_area >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "wing_area must be non-negative, got {}",
                self.aircraft.wing_area
            )));
        }
        self.aircraft.mass_model().map(|_| ())
    }
}
