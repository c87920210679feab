//! PolyLines: append-only output of contour extraction.
//!
//! Points are only ever appended, so a [`PointId`] handed out during a sweep
//! stays valid for the life of the container. When scalar carry-through is
//! enabled, one scalar is appended with every point.

use serde::{Deserialize, Serialize};

use crate::contour_error::ContourError;
use crate::data::point::PointId;

/// Optional per-point scalars carried through from the contoured array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointScalars {
    pub name: Option<String>,
    pub values: Vec<f64>,
}

/// Points, two-point line segments and optional point scalars.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyLines {
    points: Vec<[f64; 3]>,
    lines: Vec<[PointId; 2]>,
    scalars: Option<PointScalars>,
}

impl PolyLines {
    /// Empty output; `compute_scalars` enables the scalar set.
    pub fn new(compute_scalars: bool) -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            scalars: compute_scalars.then(PointScalars::default),
        }
    }

    /// Empty output with room for `estimate` points and lines.
    pub fn with_capacity(compute_scalars: bool, estimate: usize) -> Self {
        Self {
            points: Vec::with_capacity(estimate),
            lines: Vec::with_capacity(estimate),
            scalars: compute_scalars.then(|| PointScalars {
                name: None,
                values: Vec::with_capacity(estimate),
            }),
        }
    }

    /// Append a point (and `value` when scalars are enabled).
    pub fn insert_point(&mut self, x: [f64; 3], value: f64) -> Result<PointId, ContourError> {
        let id = PointId::from_index(self.points.len())?;
        self.points.push(x);
        if let Some(scalars) = self.scalars.as_mut() {
            scalars.values.push(value);
        }
        Ok(id)
    }

    /// Append a segment between two already-inserted points.
    pub(crate) fn insert_line(&mut self, a: PointId, b: PointId) {
        self.lines.push([a, b]);
    }

    #[inline]
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    #[inline]
    pub fn lines(&self) -> &[[PointId; 2]] {
        &self.lines
    }

    #[inline]
    pub fn scalars(&self) -> Option<&PointScalars> {
        self.scalars.as_ref()
    }

    pub fn set_scalars_name(&mut self, name: Option<&str>) {
        if let Some(scalars) = self.scalars.as_mut() {
            scalars.name = name.map(str::to_owned);
        }
    }

    #[inline]
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn number_of_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }

    pub fn point(&self, id: PointId) -> Option<[f64; 3]> {
        self.points.get(id.index()).copied()
    }

    /// Endpoint coordinates of every segment, in line order.
    pub fn segments(&self) -> impl Iterator<Item = ([f64; 3], [f64; 3])> + '_ {
        self.lines
            .iter()
            .map(|&[a, b]| (self.points[a.index()], self.points[b.index()]))
    }

    /// Coordinates as one flat `x, y, z, x, y, z, …` slice.
    pub fn points_flat(&self) -> &[f64] {
        bytemuck::cast_slice(self.points.as_slice())
    }

    /// Line connectivity as flat `a, b, a, b, …` ids.
    pub fn connectivity(&self) -> Vec<u64> {
        self.lines.iter().flatten().map(|p| p.get()).collect()
    }

    /// Axis-aligned `[xmin, xmax, ymin, ymax, zmin, zmax]`, or `None` when empty.
    pub fn bounds(&self) -> Option<[f64; 6]> {
        let first = self.points.first()?;
        let mut b = [first[0], first[0], first[1], first[1], first[2], first[2]];
        for p in &self.points[1..] {
            for axis in 0..3 {
                b[2 * axis] = b[2 * axis].min(p[axis]);
                b[2 * axis + 1] = b[2 * axis + 1].max(p[axis]);
            }
        }
        Some(b)
    }

    /// Concatenate `other` after `self`, shifting its point ids.
    ///
    /// Scalars are concatenated when both sides carry them; the result keeps
    /// scalars only if `self` had them.
    pub fn append(&mut self, other: PolyLines) -> Result<(), ContourError> {
        if self.scalars.is_some() && other.scalars.is_none() {
            return Err(ContourError::ScalarCountMismatch {
                points: other.points.len(),
                scalars: 0,
            });
        }
        let shift = self.points.len();
        let remap = |p: PointId| PointId::from_index(p.index() + shift);
        let lines = other
            .lines
            .iter()
            .map(|&[a, b]| Ok([remap(a)?, remap(b)?]))
            .collect::<Result<Vec<_>, ContourError>>()?;
        self.lines.extend(lines);
        self.points.extend(other.points);
        if let (Some(mine), Some(theirs)) = (self.scalars.as_mut(), other.scalars) {
            mine.values.extend(theirs.values);
        }
        Ok(())
    }

    /// Release excess capacity.
    pub fn squeeze(&mut self) {
        self.points.shrink_to_fit();
        self.lines.shrink_to_fit();
        if let Some(scalars) = self.scalars.as_mut() {
            scalars.values.shrink_to_fit();
        }
    }

    /// Check that every endpoint exists and scalars parallel points.
    pub fn validate_invariants(&self) -> Result<(), ContourError> {
        if let Some(scalars) = &self.scalars {
            if scalars.values.len() != self.points.len() {
                return Err(ContourError::ScalarCountMismatch {
                    points: self.points.len(),
                    scalars: scalars.values.len(),
                });
            }
        }
        for (line, pair) in self.lines.iter().enumerate() {
            if let Some(&point) = pair.iter().find(|p| p.index() >= self.points.len()) {
                return Err(ContourError::DanglingLineEndpoint { line, point });
            }
        }
        Ok(())
    }

    /// Panic on a broken invariant in debug builds or with `check-invariants`.
    pub fn debug_assert_invariants(&self) {
        if cfg!(any(debug_assertions, feature = "check-invariants")) {
            if let Err(e) = self.validate_invariants() {
                panic!("[invariants] PolyLines: {e}");
            }
        }
    }
}
