//! Tallies of what a release pass freed.

use std::ops::{Add, AddAssign};

/// Counts of owned records released by a teardown.
///
/// `lists` counts top-level chains only: a moon chain is headed by its first
/// moon and is not a separate record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseReport {
    pub stars: usize,
    pub names: usize,
    pub lists: usize,
    pub bodies: usize,
    pub atmospheres: usize,
}

impl ReleaseReport {
    /// Total number of owned records released.
    pub fn allocations(&self) -> usize {
        self.stars + self.names + self.lists + self.bodies + self.atmospheres
    }

    /// True when nothing was released.
    pub fn is_empty(&self) -> bool {
        self.allocations() == 0
    }
}

impl AddAssign for ReleaseReport {
    fn add_assign(&mut self, rhs: Self) {
        self.stars += rhs.stars;
        self.names += rhs.names;
        self.lists += rhs.lists;
        self.bodies += rhs.bodies;
        self.atmospheres += rhs.atmospheres;
    }
}

impl Add for ReleaseReport {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}
