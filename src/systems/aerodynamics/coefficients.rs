use serde::{Deserialize, Serialize};

/// Unit in which the coefficient buckets are indexed.
///
/// The kinematic relations produce alpha/beta in radians, while the bucket
/// breakpoints (2, 4, 5, 8, 9, 16...) are tuned for degrees. `Degrees`
/// compares the radian angle against breakpoints converted to radians;
/// `Radians` compares it against the raw breakpoint values, which
/// reproduces the legacy behavior where almost every lookup lands in the
/// first bucket.
///
/// The comparison converts the breakpoint, never the angle: the
/// radians-to-degrees round trip is not exact at every breakpoint, so an
/// angle built as `x.to_radians()` would otherwise overshoot its own
/// bucket boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleLookup {
    Degrees,
    Radians,
}

impl Default for AngleLookup {
    fn default() -> Self {
        AngleLookup::Degrees
    }
}

impl AngleLookup {
    fn bucket_limit(self, limit: f64) -> f64 {
        match self {
            AngleLookup::Degrees => limit.to_radians(),
            AngleLookup::Radians => limit,
        }
    }
}

/// An ordered set of boundary-inclusive buckets mapping an angle to a
/// dimensionless coefficient. These are deliberate coarse step functions,
/// not curves to interpolate.
struct CoefficientTable {
    buckets: &'static [(f64, f64)],
    above: f64,
}

impl CoefficientTable {
    fn lookup(&self, angle: f64, unit: AngleLookup) -> f64 {
        for &(limit, value) in self.buckets {
            if angle <= unit.bucket_limit(limit) {
                return value;
            }
        }
        self.above
    }
}

/// Drag coefficient vs angle of attack, rough Cessna 172 values.
const DRAG: CoefficientTable = CoefficientTable {
    buckets: &[
        (2.0, 0.045),
        (4.0, 0.050),
        (5.0, 0.055),
        (8.0, 0.075),
        (9.0, 0.090),
        (16.0, 0.11),
    ],
    above: 0.12,
};

/// Lift coefficient vs angle of attack.
const LIFT: CoefficientTable = CoefficientTable {
    buckets: &[
        (2.0, 0.35),
        (4.0, 0.50),
        (5.0, 0.60),
        (6.0, 0.75),
        (9.0, 1.0),
        (16.0, 1.25),
    ],
    above: 1.3,
};

/// Side-force coefficient vs sideslip angle.
const SIDE_FORCE: CoefficientTable = CoefficientTable {
    buckets: &[
        (1.0, 0.0),
        (2.0, 0.014),
        (3.0, 0.028),
        (5.0, 0.042),
        (6.0, 0.070),
        (10.0, 0.11),
    ],
    above: 0.14,
};

/// Angle-bucketed aerodynamic coefficient model.
///
/// Stateless apart from the configured lookup unit; evaluated fresh each
/// tick from the current alpha/beta.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub angle_lookup: AngleLookup,
}

impl AeroCoefficients {
    pub fn new(angle_lookup: AngleLookup) -> Self {
        Self { angle_lookup }
    }

    /// C_D for an angle of attack in radians.
    pub fn drag(&self, alpha: f64) -> f64 {
        DRAG.lookup(alpha, self.angle_lookup)
    }

    /// C_L for an angle of attack in radians.
    pub fn lift(&self, alpha: f64) -> f64 {
        LIFT.lookup(alpha, self.angle_lookup)
    }

    /// C_Y for a sideslip angle in radians.
    pub fn side_force(&self, beta: f64) -> f64 {
        SIDE_FORCE.lookup(beta, self.angle_lookup)
    }
}

impl Default for AeroCoefficients {
    fn default() -> Self {
        Self::new(AngleLookup::default())
    }
}
