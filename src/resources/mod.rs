mod config;

pub use config::{AircraftConfig, PhysicsConfig, SimConfig};
