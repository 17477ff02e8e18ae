pub const GRAVITY: f64 = 9.81; // m/s^2

pub const AIR_DENSITY: f64 = 1.06; // kg/m^3
pub const WING_AREA: f64 = 16.2; // m^2

pub const ENGINE_THRUST: f64 = 7000.0; // N, along body x
pub const CRUISE_LIFT: f64 = 9300.0; // N, assumed cruise/zero-alpha body z force

pub const TIMESTEP: f64 = 1.0 / 60.0; // s
