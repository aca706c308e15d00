use std::fmt;

use uom::si::{
    angle::radian,
    angular_velocity::radian_per_second,
    f64::{Angle, AngularVelocity, Length, Mass},
    length::meter,
    mass::kilogram,
};

/// Initial conditions and physical properties of one bob.
///
/// Values are taken as given; [`DoublePendulum::new`] rejects non-positive
/// lengths and masses.
///
/// [`DoublePendulum::new`]: crate::DoublePendulum::new
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct BobSpec {
    /// Initial angle from the downward vertical, in radians.
    pub theta0: f64,
    /// Initial angular velocity, in rad/s.
    pub omega0: f64,
    /// Rod length, in meters.
    pub length: f64,
    /// Bob mass, in kilograms.
    pub mass: f64,
}

impl BobSpec {
    /// Creates a bob from SI values.
    #[must_use]
    pub fn new(theta0: f64, omega0: f64, length: f64, mass: f64) -> Self {
        Self {
            theta0,
            omega0,
            length,
            mass,
        }
    }

    /// Creates a bob from dimensioned quantities.
    #[must_use]
    pub fn from_quantities(
        theta0: Angle,
        omega0: AngularVelocity,
        length: Length,
        mass: Mass,
    ) -> Self {
        Self::new(
            theta0.get::<radian>(),
            omega0.get::<radian_per_second>(),
            length.get::<meter>(),
            mass.get::<kilogram>(),
        )
    }
}

/// Identifies one of the two bobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bob {
    /// The bob hanging from the fixed pivot.
    Upper,
    /// The bob hanging from the upper bob.
    Lower,
}

impl fmt::Display for Bob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bob::Upper => f.write_str("upper"),
            Bob::Lower => f.write_str("lower"),
        }
    }
}
