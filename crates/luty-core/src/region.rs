//! Region predicates for selecting systems.

use std::fmt;

use crate::errors::CoreError;
use crate::galaxy::System;

/// A pure, side-effect-free selection predicate over systems.
///
/// Implemented by [`Sector`] and by any `Fn(&System) -> bool`, so other
/// shapes can be substituted without touching the store.
pub trait Region {
    fn contains(&self, system: &System) -> bool;
}

impl<F> Region for F
where
    F: Fn(&System) -> bool,
{
    fn contains(&self, system: &System) -> bool {
        self(system)
    }
}

/// Axis-aligned cube centered on `center` with half-width `radius`.
///
/// A system is inside iff every axis distance is `<= radius`. All six faces
/// are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sector {
    pub center: [i64; 3],
    pub radius: u32,
}

impl Sector {
    #[must_use]
    pub const fn new(center: [i64; 3], radius: u32) -> Self {
        Self { center, radius }
    }

    #[must_use]
    pub const fn around_origin(radius: u32) -> Self {
        Self::new([0, 0, 0], radius)
    }

    /// Parse a center given as `x,y,z`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] unless the input is exactly three
    /// comma-separated integers.
    pub fn parse_center(input: &str) -> Result<[i64; 3], CoreError> {
        let parts = input
            .split(',')
            .map(|part| part.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CoreError::Validation(format!("invalid center '{input}': {e}")))?;

        match parts.as_slice() {
            [x, y, z] => Ok([*x, *y, *z]),
            _ => Err(CoreError::Validation(format!(
                "invalid center '{input}': expected x,y,z"
            ))),
        }
    }
}

impl Region for Sector {
    fn contains(&self, system: &System) -> bool {
        // Widen so extreme coordinates cannot overflow the subtraction.
        let r = i128::from(self.radius);
        let within = |v: i64, c: i64| (i128::from(v) - i128::from(c)).abs() <= r;
        within(system.x, self.center[0])
            && within(system.y, self.center[1])
            && within(system.z, self.center[2])
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.center;
        write!(f, "({x}, {y}, {z}) ±{}", self.radius)
    }
}
