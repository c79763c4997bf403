//! Star systems and the galaxy store.
//!
//! A [`GalaxyStore`] is an ordered list of [`System`]s. Order is file order
//! when the store was loaded from disk, and it is preserved by filtering.
//! Duplicate coordinates are legal.

use std::collections::BTreeMap;
use std::fmt;

use crate::region::Region;

// ---------------------------------------------------------------------------
// SystemKind
// ---------------------------------------------------------------------------

/// Classification of a star system.
///
/// The persisted form is a human-readable label (`"Blue Super Giant"`).
/// [`SystemKind::from_label`] is total: any label outside the table decodes
/// to [`SystemKind::Empty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SystemKind {
    #[default]
    Empty,
    BlueSuperGiant,
    DenseDustCloud,
    MediumDustCloud,
    YellowMainSequence,
}

impl SystemKind {
    /// Every defined kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Empty,
        Self::BlueSuperGiant,
        Self::DenseDustCloud,
        Self::MediumDustCloud,
        Self::YellowMainSequence,
    ];

    /// Canonical persisted label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::BlueSuperGiant => "Blue Super Giant",
            Self::DenseDustCloud => "Dense Dust Cloud",
            Self::MediumDustCloud => "Medium Dust Cloud",
            Self::YellowMainSequence => "Yellow Main Sequence",
        }
    }

    /// Decode a persisted label. Unrecognized labels fall back to `Empty`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Blue Super Giant" => Self::BlueSuperGiant,
            "Dense Dust Cloud" => Self::DenseDustCloud,
            "Medium Dust Cloud" => Self::MediumDustCloud,
            "Yellow Main Sequence" => Self::YellowMainSequence,
            _ => Self::Empty,
        }
    }

    /// Whether `label` is one of the canonical labels.
    #[must_use]
    pub fn is_known_label(label: &str) -> bool {
        Self::ALL.iter().any(|kind| kind.label() == label)
    }
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// A star system at integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct System {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub kind: SystemKind,
}

impl System {
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64, kind: SystemKind) -> Self {
        Self { x, y, z, kind }
    }

    /// Coordinates as floating point, for rendering. Exact within ±2^53.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self) -> [f64; 3] {
        [self.x as f64, self.y as f64, self.z as f64]
    }
}

// ---------------------------------------------------------------------------
// GalaxyStore
// ---------------------------------------------------------------------------

/// In-memory collection of systems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalaxyStore {
    systems: Vec<System>,
}

impl GalaxyStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    pub fn push(&mut self, system: System) {
        self.systems.push(system);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, System> {
        self.systems.iter()
    }

    #[must_use]
    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    /// Select the systems matching `region`, in store order.
    ///
    /// The result borrows from the store; calling again restarts from the
    /// first system.
    pub fn filter<R>(&self, region: &R) -> Vec<&System>
    where
        R: Region + ?Sized,
    {
        self.systems
            .iter()
            .filter(|system| region.contains(system))
            .collect()
    }

    /// Number of systems of each kind. Kinds with no systems are omitted.
    #[must_use]
    pub fn kind_counts(&self) -> BTreeMap<SystemKind, usize> {
        let mut counts = BTreeMap::new();
        for system in &self.systems {
            *counts.entry(system.kind).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<System> for GalaxyStore {
    fn from_iter<I: IntoIterator<Item = System>>(iter: I) -> Self {
        Self {
            systems: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a GalaxyStore {
    type Item = &'a System;
    type IntoIter = std::slice::Iter<'a, System>;

    fn into_iter(self) -> Self::IntoIter {
        self.systems.iter()
    }
}
