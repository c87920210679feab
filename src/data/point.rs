//! `PointId`: a strong, zero-cost handle into the output point set
//!
//! Points generated by the sweep are numbered `0, 1, 2, …` in append order.
//! Internally the index is stored as `index + 1` inside a `NonZeroU64`, so the
//! "no crossing" state of an intersection slot, `Option<PointId>`, has the same
//! size as a plain `u64` and never relies on a negative sentinel.

use std::{fmt, num::NonZeroU64};

use crate::contour_error::ContourError;

/// Index of a point in a [`PolyLines`](crate::data::poly_lines::PolyLines)
/// point set.
///
/// # Memory layout
/// This type is `repr(transparent)` over `NonZeroU64`; `Option<PointId>`
/// uses the zero niche for `None`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(into = "u64", try_from = "u64")]
#[repr(transparent)]
pub struct PointId(NonZeroU64);

impl PointId {
    /// Creates a `PointId` for the zero-based `index`.
    ///
    /// Fails with [`ContourError::PointIdOverflow`] when `index + 1` does not
    /// fit in a `u64`.
    ///
    /// ```rust
    /// # use isocontour2d::data::point::PointId;
    /// let p = PointId::from_index(3)?;
    /// assert_eq!(p.index(), 3);
    /// # Ok::<(), isocontour2d::contour_error::ContourError>(())
    /// ```
    #[inline]
    pub fn from_index(index: usize) -> Result<Self, ContourError> {
        u64::try_from(index)
            .ok()
            .and_then(|raw| raw.checked_add(1))
            .and_then(NonZeroU64::new)
            .map(PointId)
            .ok_or(ContourError::PointIdOverflow(index))
    }

    /// Zero-based position in the output point set.
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Zero-based position as a `u64`, for flat connectivity buffers.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get() - 1
    }
}

impl From<PointId> for u64 {
    fn from(p: PointId) -> u64 {
        p.get()
    }
}

impl TryFrom<u64> for PointId {
    type Error = ContourError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        let index = usize::try_from(raw).map_err(|_| ContourError::PointIdOverflow(usize::MAX))?;
        PointId::from_index(index)
    }
}

impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointId").field(&self.get()).finish()
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    // The slot buffers depend on the niche.
    assert_eq_size!(PointId, u64);
    assert_eq_size!(Option<PointId>, u64);
}
