pub mod components;
pub mod resources;
pub mod server;
pub mod systems;
pub mod utils;

pub use components::{AircraftState, Attitude, MassModel};
pub use resources::SimConfig;
pub use server::{StateSnapshot, TelemetrySink, UdpTelemetry};
pub use systems::Simulation;
pub use utils::SimError;
