mod mass;
mod state;

pub use mass::MassModel;
pub use state::{AircraftState, Attitude};
