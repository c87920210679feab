//! Regularly sampled image data: extent, placement and point arrays.
//!
//! ## Layout
//! Point arrays are stored x-fastest over the *whole* extent. Increments are
//! measured in values (not tuples), so for an array with `c` components:
//! `inc = [c, c·dim0, c·dim0·dim1]`.
//!
//! ## Update extent
//! An optional update extent selects the sub-region that downstream
//! algorithms process. It must lie inside the whole extent; offsets into the
//! arrays are always taken relative to the whole extent's minimum corner.

use serde::{Deserialize, Serialize};

use crate::contour_error::ContourError;
use crate::data::extent::Extent;
use crate::data::sample::Sample;
use crate::data::scalar_array::ScalarArray;

/// Image data with an origin/spacing placement and named point arrays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawImageData")]
pub struct ImageData {
    extent: Extent,
    update_extent: Option<Extent>,
    origin: [f64; 3],
    spacing: [f64; 3],
    arrays: Vec<ScalarArray>,
    active_scalars: Option<usize>,
}

/// Unchecked wire form, rebuilt through the checked setters.
#[derive(Deserialize)]
struct RawImageData {
    extent: Extent,
    update_extent: Option<Extent>,
    origin: [f64; 3],
    spacing: [f64; 3],
    arrays: Vec<ScalarArray>,
    active_scalars: Option<usize>,
}

impl TryFrom<RawImageData> for ImageData {
    type Error = ContourError;

    fn try_from(raw: RawImageData) -> Result<Self, Self::Error> {
        let mut image = Self::try_new(raw.extent, raw.origin, raw.spacing)?;
        for array in raw.arrays {
            image.add_array(array)?;
        }
        if let Some(index) = raw.active_scalars {
            if index >= image.arrays.len() {
                return Err(ContourError::ActiveScalarsOutOfRange {
                    index,
                    arrays: image.arrays.len(),
                });
            }
            image.active_scalars = Some(index);
        }
        if let Some(update) = raw.update_extent {
            image.set_update_extent(update)?;
        }
        Ok(image)
    }
}

impl ImageData {
    /// Construct an image with no point arrays.
    pub fn try_new(extent: Extent, origin: [f64; 3], spacing: [f64; 3]) -> Result<Self, ContourError> {
        extent.validate()?;
        Ok(Self {
            extent,
            update_extent: None,
            origin,
            spacing,
            arrays: Vec::new(),
            active_scalars: None,
        })
    }

    /// Single-component `nx × ny` image in the z = 0 plane with unit spacing
    /// and `values` (x-fastest) as active scalars.
    pub fn from_xy<T: Sample>(nx: usize, ny: usize, values: Vec<T>) -> Result<Self, ContourError> {
        let mut image = Self::try_new(Extent::xy(nx, ny), [0.0; 3], [1.0; 3])?;
        image.set_scalars(ScalarArray::scalar(values))?;
        Ok(image)
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[inline]
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    #[inline]
    pub fn spacing(&self) -> [f64; 3] {
        self.spacing
    }

    pub fn set_origin(&mut self, origin: [f64; 3]) {
        self.origin = origin;
    }

    pub fn set_spacing(&mut self, spacing: [f64; 3]) {
        self.spacing = spacing;
    }

    /// Region to process; the whole extent unless an update extent is set.
    #[inline]
    pub fn update_extent(&self) -> Extent {
        self.update_extent.unwrap_or(self.extent)
    }

    /// Restrict processing to `update`, which must lie inside the whole extent.
    pub fn set_update_extent(&mut self, update: Extent) -> Result<(), ContourError> {
        update.validate()?;
        if !self.extent.contains(&update) {
            return Err(ContourError::UpdateExtentOutsideData {
                update,
                whole: self.extent,
            });
        }
        self.update_extent = Some(update);
        Ok(())
    }

    pub fn clear_update_extent(&mut self) {
        self.update_extent = None;
    }

    #[inline]
    pub fn number_of_points(&self) -> usize {
        self.extent.number_of_points()
    }

    /// Add a point array; its tuple count must match the number of points.
    /// Returns the array's index.
    pub fn add_array(&mut self, array: ScalarArray) -> Result<usize, ContourError> {
        let expected = self.number_of_points() * array.num_components();
        let found = array.data().len();
        if found != expected {
            return Err(ContourError::ArrayLengthMismatch {
                name: array.name().unwrap_or_default().to_owned(),
                expected,
                found,
            });
        }
        self.arrays.push(array);
        Ok(self.arrays.len() - 1)
    }

    /// Add `array` and mark it as the active scalars.
    pub fn set_scalars(&mut self, array: ScalarArray) -> Result<(), ContourError> {
        let idx = self.add_array(array)?;
        self.active_scalars = Some(idx);
        Ok(())
    }

    /// Active scalars, if any.
    pub fn scalars(&self) -> Option<&ScalarArray> {
        self.active_scalars.and_then(|i| self.arrays.get(i))
    }

    /// First point array named `name`.
    pub fn array(&self, name: &str) -> Option<&ScalarArray> {
        self.arrays.iter().find(|a| a.name() == Some(name))
    }

    /// Resolve a scalar selection: a named array, or the active scalars.
    pub fn select_scalars(&self, selection: Option<&str>) -> Result<&ScalarArray, ContourError> {
        match selection {
            Some(name) => self
                .array(name)
                .ok_or_else(|| ContourError::ScalarsNotFound(name.to_owned())),
            None => self.scalars().ok_or(ContourError::MissingScalars),
        }
    }

    pub fn arrays(&self) -> &[ScalarArray] {
        &self.arrays
    }

    /// Linear strides, in values, for an array with `num_components`.
    pub fn increments(&self, num_components: usize) -> [usize; 3] {
        let [d0, d1, _] = self.extent.dims();
        let inc0 = num_components;
        let inc1 = inc0 * d0;
        [inc0, inc1, inc1 * d1]
    }

    /// Offset, in values, of the first component of sample `ijk`.
    ///
    /// `ijk` must lie inside the whole extent.
    pub fn offset_of(&self, ijk: [i64; 3], num_components: usize) -> usize {
        let inc = self.increments(num_components);
        (0..3)
            .map(|axis| (ijk[axis] - self.extent.min(axis)) as usize * inc[axis])
            .sum()
    }
}
