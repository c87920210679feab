//! Inclusive index bounds of a structured grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::contour_error::ContourError;

/// Inclusive grid index bounds `[min0, max0, min1, max1, min2, max2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extent(pub [i64; 6]);

impl Extent {
    pub const fn new(bounds: [i64; 6]) -> Self {
        Extent(bounds)
    }

    /// Extent of a `nx × ny` image in the z = 0 plane, starting at index 0.
    pub fn xy(nx: usize, ny: usize) -> Self {
        Extent([0, nx as i64 - 1, 0, ny as i64 - 1, 0, 0])
    }

    #[inline]
    pub fn min(&self, axis: usize) -> i64 {
        self.0[2 * axis]
    }

    #[inline]
    pub fn max(&self, axis: usize) -> i64 {
        self.0[2 * axis + 1]
    }

    #[inline]
    pub fn is_collapsed(&self, axis: usize) -> bool {
        self.min(axis) == self.max(axis)
    }

    /// Number of samples along `axis` (0 for an inverted range).
    #[inline]
    pub fn dim(&self, axis: usize) -> usize {
        (self.max(axis) - self.min(axis) + 1).max(0) as usize
    }

    pub fn dims(&self) -> [usize; 3] {
        [self.dim(0), self.dim(1), self.dim(2)]
    }

    pub fn number_of_points(&self) -> usize {
        self.dims().iter().product()
    }

    pub fn validate(&self) -> Result<(), ContourError> {
        if (0..3).any(|axis| self.min(axis) > self.max(axis)) {
            return Err(ContourError::InvalidExtent(*self));
        }
        Ok(())
    }

    /// True when `other` lies entirely within `self`.
    pub fn contains(&self, other: &Extent) -> bool {
        (0..3).all(|axis| other.min(axis) >= self.min(axis) && other.max(axis) <= self.max(axis))
    }

    pub fn collapsed_axes(&self) -> usize {
        (0..3).filter(|&axis| self.is_collapsed(axis)).count()
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}, {e}, {g}]")
    }
}
