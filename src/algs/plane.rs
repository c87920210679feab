//! Plane selection for 2D slices of a 3D extent.
//!
//! An image slice has exactly one collapsed axis. The two remaining axes
//! become the sweep's column axis (`axis0`) and row axis (`axis1`):
//!
//! | collapsed | axis0 | axis1 |
//! |-----------|-------|-------|
//! | z         | x     | y     |
//! | y         | x     | z     |
//! | x         | y     | z     |

use crate::contour_error::ContourError;
use crate::data::extent::Extent;

/// Free axes, index ranges, strides and placement of a 2D slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisMapping {
    /// Column axis.
    pub axis0: usize,
    /// Row axis.
    pub axis1: usize,
    /// The axis whose extent is a single index.
    pub collapsed: usize,
    pub min0: i64,
    pub max0: i64,
    pub min1: i64,
    pub max1: i64,
    /// Linear stride for one step along `axis0`.
    pub inc0: usize,
    /// Linear stride for one step along `axis1`.
    pub inc1: usize,
    pub origin: [f64; 3],
    pub spacing: [f64; 3],
    /// Grid index along the collapsed axis.
    pub level: i64,
    /// World coordinate along the collapsed axis.
    pub fixed: f64,
}

impl AxisMapping {
    /// Samples per row.
    #[inline]
    pub fn dim0(&self) -> usize {
        (self.max0 - self.min0 + 1) as usize
    }

    /// Number of rows.
    #[inline]
    pub fn dim1(&self) -> usize {
        (self.max1 - self.min1 + 1) as usize
    }

    /// Grid index of the first sample of the slice.
    pub fn first_index(&self) -> [i64; 3] {
        let mut ijk = [0; 3];
        ijk[self.axis0] = self.min0;
        ijk[self.axis1] = self.min1;
        ijk[self.collapsed] = self.level;
        ijk
    }

    /// Index bounds of the slice as a 3D extent.
    pub fn extent(&self) -> Extent {
        let mut e = [0; 6];
        e[2 * self.axis0] = self.min0;
        e[2 * self.axis0 + 1] = self.max0;
        e[2 * self.axis1] = self.min1;
        e[2 * self.axis1 + 1] = self.max1;
        e[2 * self.collapsed] = self.level;
        e[2 * self.collapsed + 1] = self.level;
        Extent::new(e)
    }

    /// A world-space point with the collapsed coordinate filled in.
    #[inline]
    pub fn base_point(&self) -> [f64; 3] {
        let mut x = [0.0; 3];
        x[self.collapsed] = self.fixed;
        x
    }

    /// World coordinate of grid index `i` (possibly fractional) along `axis`.
    #[inline]
    pub fn world(&self, axis: usize, i: f64) -> f64 {
        self.origin[axis] + self.spacing[axis] * i
    }
}

/// Determine the plane of `extent`.
///
/// `increments` are the per-axis linear strides of the stored array.
/// Fails unless exactly one axis is collapsed.
pub fn select_plane(
    extent: &Extent,
    increments: [usize; 3],
    origin: [f64; 3],
    spacing: [f64; 3],
) -> Result<AxisMapping, ContourError> {
    extent.validate()?;
    let collapsed = extent.collapsed_axes();
    if collapsed != 1 {
        return Err(ContourError::NotPlanar {
            extent: *extent,
            collapsed,
        });
    }

    let (axis0, axis1, flat) = if extent.is_collapsed(2) {
        (0, 1, 2)
    } else if extent.is_collapsed(1) {
        (0, 2, 1)
    } else {
        (1, 2, 0)
    };

    Ok(AxisMapping {
        axis0,
        axis1,
        collapsed: flat,
        min0: extent.min(axis0),
        max0: extent.max(axis0),
        min1: extent.min(axis1),
        max1: extent.max(axis1),
        inc0: increments[axis0],
        inc1: increments[axis1],
        origin,
        spacing,
        level: extent.min(flat),
        fixed: origin[flat] + extent.min(flat) as f64 * spacing[flat],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INC: [usize; 3] = [1, 5, 20];

    #[test]
    fn z_collapsed_uses_xy() {
        let m = select_plane(&Extent::new([0, 4, 0, 3, 2, 2]), INC, [1.0, 2.0, 3.0], [0.5, 0.5, 2.0])
            .unwrap();
        assert_eq!((m.axis0, m.axis1, m.collapsed), (0, 1, 2));
        assert_eq!((m.inc0, m.inc1), (1, 5));
        assert_eq!((m.dim0(), m.dim1()), (5, 4));
        assert_eq!(m.fixed, 7.0);
        assert_eq!(m.base_point(), [0.0, 0.0, 7.0]);
    }

    #[test]
    fn y_collapsed_uses_xz() {
        let m = select_plane(&Extent::new([0, 4, 3, 3, 0, 6]), INC, [0.0; 3], [1.0, 2.0, 1.0]).unwrap();
        assert_eq!((m.axis0, m.axis1, m.collapsed), (0, 2, 1));
        assert_eq!((m.inc0, m.inc1), (1, 20));
        assert_eq!((m.min1, m.max1), (0, 6));
        assert_eq!(m.fixed, 6.0);
    }

    #[test]
    fn x_collapsed_uses_yz() {
        let m = select_plane(&Extent::new([-2, -2, 1, 4, 0, 6]), INC, [10.0, 0.0, 0.0], [1.0; 3])
            .unwrap();
        assert_eq!((m.axis0, m.axis1, m.collapsed), (1, 2, 0));
        assert_eq!((m.min0, m.max0), (1, 4));
        assert_eq!((m.inc0, m.inc1), (5, 20));
        assert_eq!(m.fixed, 8.0);
        assert_eq!(m.first_index(), [-2, 1, 0]);
        assert_eq!(m.extent(), Extent::new([-2, -2, 1, 4, 0, 6]));
    }

    #[test]
    fn volume_is_rejected() {
        let e = Extent::new([0, 2, 0, 2, 0, 2]);
        assert_eq!(
            select_plane(&e, INC, [0.0; 3], [1.0; 3]),
            Err(ContourError::NotPlanar {
                extent: e,
                collapsed: 0
            })
        );
    }

    #[test]
    fn line_is_rejected() {
        let e = Extent::new([0, 5, 1, 1, 0, 0]);
        assert!(matches!(
            select_plane(&e, INC, [0.0; 3], [1.0; 3]),
            Err(ContourError::NotPlanar { collapsed: 2, .. })
        ));
    }

    #[test]
    fn inverted_extent_is_rejected() {
        let e = Extent::new([0, 5, 3, 1, 0, 0]);
        assert_eq!(
            select_plane(&e, INC, [0.0; 3], [1.0; 3]),
            Err(ContourError::InvalidExtent(e))
        );
    }
}
