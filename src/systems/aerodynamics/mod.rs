mod air_data;
mod coefficients;
mod forces;

pub use air_data::AirData;
pub use coefficients::{AeroCoefficients, AngleLookup};
pub use forces::{calculate_aero_forces, AeroForces};
