pub mod aerodynamics;
pub mod dynamics;
mod stepper;

pub use stepper::Simulation;
