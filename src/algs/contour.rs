//! Isoline extraction for 2D image slices.
//!
//! [`extract`] is the engine entry point: given a grid, its
//! [`AxisMapping`] and an ordered list of isovalues it returns the contour
//! lines as [`PolyLines`]. [`ContourFilter`] is the configured front end that
//! resolves the scalar array, selects the plane and sizes the output.
//!
//! # Examples
//! ```rust
//! use isocontour2d::algs::contour::{ContourConfig, ContourFilter};
//! use isocontour2d::algs::contour_values::ContourValues;
//! use isocontour2d::data::image::ImageData;
//!
//! let image = ImageData::from_xy(3, 3, vec![0u8, 0, 0, 0, 2, 0, 0, 0, 0])?;
//! let filter = ContourFilter::new(ContourConfig {
//!     values: ContourValues::from_values([1.0]),
//!     ..Default::default()
//! });
//! let lines = filter.execute(&image)?;
//! assert_eq!(lines.number_of_points(), 4);
//! assert_eq!(lines.number_of_lines(), 4);
//! # Ok::<(), isocontour2d::contour_error::ContourError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algs::abort::AbortFlag;
use crate::algs::contour_values::ContourValues;
use crate::algs::plane::{AxisMapping, select_plane};
use crate::algs::sweep::sweep_value;
use crate::contour_error::ContourError;
use crate::data::image::ImageData;
use crate::data::poly_lines::PolyLines;
use crate::data::sample::{Sample, SampleVisitor};

/// Minimum number of points and lines to preallocate.
const MIN_ESTIMATE: usize = 1024;

/// Knobs for [`extract_with`].
#[derive(Clone, Debug, Default)]
pub struct ExtractOptions {
    /// Zero-based component of the scalar array to contour.
    pub component: usize,
    /// Carry the isovalue of every point into the output scalars.
    pub compute_scalars: bool,
    /// Named point array to contour; `None` uses the active scalars.
    pub scalars_selection: Option<String>,
    /// Sweep contour values concurrently (requires the `rayon` feature).
    pub parallel: bool,
    pub abort: AbortFlag,
}

/// Contour the active scalars of `grid` at each of `values`, in order.
pub fn extract(
    grid: &ImageData,
    mapping: &AxisMapping,
    values: &[f64],
    component: usize,
    compute_scalars: bool,
) -> Result<PolyLines, ContourError> {
    let opts = ExtractOptions {
        component,
        compute_scalars,
        ..Default::default()
    };
    extract_with(grid, mapping, values, &opts)
}

/// [`extract`] with scalar selection, cancellation and parallel sweeps.
///
/// All preconditions are checked before the first sweep; on error nothing
/// is returned.
pub fn extract_with(
    grid: &ImageData,
    mapping: &AxisMapping,
    values: &[f64],
    opts: &ExtractOptions,
) -> Result<PolyLines, ContourError> {
    let scalars = grid.select_scalars(opts.scalars_selection.as_deref())?;
    let num_components = scalars.num_components();
    if opts.component >= num_components {
        return Err(ContourError::ComponentOutOfRange {
            component: opts.component,
            num_components,
        });
    }
    let expected = grid.number_of_points() * num_components;
    if scalars.data().len() != expected {
        return Err(ContourError::ArrayLengthMismatch {
            name: scalars.name().unwrap_or_default().to_owned(),
            expected,
            found: scalars.data().len(),
        });
    }
    check_mapping(grid, mapping, num_components)?;
    log::debug!(
        "Contouring {} values over {} {} samples",
        values.len(),
        mapping.dim0() * mapping.dim1(),
        scalars.kind().as_str()
    );

    let start = grid.offset_of(mapping.first_index(), num_components) + opts.component;
    let sweep = SweepValues {
        start,
        mapping,
        values,
        compute_scalars: opts.compute_scalars,
        estimate: estimate_size(mapping.dim0() * mapping.dim1()),
        parallel: opts.parallel,
        abort: &opts.abort,
    };
    let mut out = match scalars.data().visit(sweep) {
        Ok(out) => out,
        Err(ContourError::Aborted) => {
            log::warn!("Contour extraction aborted");
            return Err(ContourError::Aborted);
        }
        Err(e) => return Err(e),
    };
    out.set_scalars_name(scalars.name());
    out.debug_assert_invariants();
    Ok(out)
}

fn check_mapping(
    grid: &ImageData,
    mapping: &AxisMapping,
    num_components: usize,
) -> Result<(), ContourError> {
    let mut axes = [mapping.axis0, mapping.axis1, mapping.collapsed];
    axes.sort_unstable();
    if axes != [0, 1, 2] {
        return Err(ContourError::InvalidAxes([
            mapping.axis0,
            mapping.axis1,
            mapping.collapsed,
        ]));
    }
    let slice = mapping.extent();
    slice.validate()?;
    if !grid.extent().contains(&slice) {
        return Err(ContourError::UpdateExtentOutsideData {
            update: slice,
            whole: grid.extent(),
        });
    }
    let inc = grid.increments(num_components);
    if mapping.inc0 != inc[mapping.axis0] || mapping.inc1 != inc[mapping.axis1] {
        return Err(ContourError::AxisMappingMismatch {
            expected: [inc[mapping.axis0], inc[mapping.axis1]],
            found: [mapping.inc0, mapping.inc1],
        });
    }
    Ok(())
}

/// Preallocation size for a slice of `num_points` samples.
fn estimate_size(num_points: usize) -> usize {
    ((num_points as f64).sqrt() as usize).max(MIN_ESTIMATE)
}

/// Runs every contour value over one native sample type.
struct SweepValues<'a> {
    start: usize,
    mapping: &'a AxisMapping,
    values: &'a [f64],
    compute_scalars: bool,
    estimate: usize,
    parallel: bool,
    abort: &'a AbortFlag,
}

impl SweepValues<'_> {
    fn sequential<T: Sample>(&self, samples: &[T]) -> Result<PolyLines, ContourError> {
        let mut out = PolyLines::with_capacity(self.compute_scalars, self.estimate);
        for &value in self.values {
            self.abort.check()?;
            log::trace!("Contouring value {value}");
            sweep_value(samples, self.start, self.mapping, value, &mut out, self.abort)?;
        }
        Ok(out)
    }

    #[cfg(feature = "rayon")]
    fn concurrent<T: Sample>(&self, samples: &[T]) -> Result<PolyLines, ContourError> {
        use rayon::prelude::*;

        let parts = self
            .values
            .par_iter()
            .map(|&value| {
                log::trace!("Contouring value {value}");
                let mut part = PolyLines::new(self.compute_scalars);
                sweep_value(samples, self.start, self.mapping, value, &mut part, self.abort)?;
                Ok(part)
            })
            .collect::<Result<Vec<_>, ContourError>>()?;

        let mut out = PolyLines::with_capacity(self.compute_scalars, self.estimate);
        for part in parts {
            out.append(part)?;
        }
        Ok(out)
    }

    #[cfg(not(feature = "rayon"))]
    fn concurrent<T: Sample>(&self, samples: &[T]) -> Result<PolyLines, ContourError> {
        log::debug!("Parallel sweeps need the `rayon` feature; running sequentially");
        self.sequential(samples)
    }
}

impl SampleVisitor for SweepValues<'_> {
    type Output = Result<PolyLines, ContourError>;

    fn visit<T: Sample>(self, samples: &[T]) -> Self::Output {
        if self.parallel && self.values.len() > 1 {
            return self.concurrent(samples);
        }
        self.sequential(samples)
    }
}

/// Serializable configuration for [`ContourFilter`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourConfig {
    pub values: ContourValues,
    pub compute_scalars: bool,
    pub array_component: usize,
    pub scalars_selection: Option<String>,
    pub parallel: bool,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            values: ContourValues::default(),
            compute_scalars: true,
            array_component: 0,
            scalars_selection: None,
            parallel: false,
        }
    }
}

impl fmt::Display for ContourConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number Of Contours: {}", self.values.len())?;
        for (i, v) in self.values.iter().enumerate() {
            writeln!(f, "  Value {i}: {v}")?;
        }
        let scalars = if self.compute_scalars { "On" } else { "Off" };
        writeln!(f, "ComputeScalars{scalars}")?;
        if let Some(name) = &self.scalars_selection {
            writeln!(f, "InputScalarsSelection: {name}")?;
        }
        write!(f, "ArrayComponent: {}", self.array_component)
    }
}

/// Contouring filter specialized for images (or slices of images).
#[derive(Clone, Debug, Default)]
pub struct ContourFilter {
    config: ContourConfig,
    abort: AbortFlag,
}

impl ContourFilter {
    pub fn new(config: ContourConfig) -> Self {
        Self {
            config,
            abort: AbortFlag::new(),
        }
    }

    pub fn config(&self) -> &ContourConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ContourConfig {
        &mut self.config
    }

    /// Handle that cancels a running [`execute`](Self::execute) from elsewhere.
    pub fn abort_handle(&self) -> AbortFlag {
        self.abort.clone()
    }

    /// Contour the update extent of `input`.
    pub fn execute(&self, input: &ImageData) -> Result<PolyLines, ContourError> {
        log::debug!("Executing 2D structured contour");

        let scalars = input.select_scalars(self.config.scalars_selection.as_deref())?;
        let num_components = scalars.num_components();
        if self.config.array_component >= num_components {
            return Err(ContourError::ComponentOutOfRange {
                component: self.config.array_component,
                num_components,
            });
        }
        let mapping = select_plane(
            &input.update_extent(),
            input.increments(num_components),
            input.origin(),
            input.spacing(),
        )?;

        let opts = ExtractOptions {
            component: self.config.array_component,
            compute_scalars: self.config.compute_scalars,
            scalars_selection: self.config.scalars_selection.clone(),
            parallel: self.config.parallel,
            abort: self.abort.clone(),
        };
        let mut out = extract_with(input, &mapping, self.config.values.values(), &opts)?;
        out.squeeze();

        log::debug!(
            "Created: {} points, {} lines",
            out.number_of_points(),
            out.number_of_lines()
        );
        Ok(out)
    }
}
