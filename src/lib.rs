#![cfg_attr(docsrs, feature(doc_cfg))]
//! # isocontour2d
//!
//! isocontour2d extracts isolines from 2D slices of regularly sampled image
//! data using synchronized templates: a single row-by-row sweep that computes
//! every edge crossing exactly once, keeps the previous row's crossings in a
//! ping-pong buffer, and closes each 2×2 cell through a fixed case table.
//!
//! ## Features
//! - Plane selection for x-, y- or z-collapsed slices of a 3D extent
//! - One generic sweep for every sample type (`u8` … `f64`), interpolating in `f64`
//! - Multi-component arrays with component selection, named array selection
//! - Optional per-point scalars carrying the isovalue of each point
//! - Cooperative cancellation between rows and contour values
//! - Optional concurrent sweeps over contour values (`rayon` feature)
//!
//! ## Determinism
//!
//! Output is a pure function of the input: points are appended in sweep order,
//! contour values are processed in list order, and the parallel path
//! concatenates per-value results in that same order.
//!
//! ## Classification
//!
//! A sample is outside a contour iff `sample < value`. A sample exactly equal
//! to the isovalue is inside, so a field that only touches the isovalue yields
//! no lines.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! isocontour2d = "0.1"
//! # Optional features:
//! # features = ["rayon"]
//! ```

pub mod algs;
pub mod contour_error;
pub mod data;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::algs::abort::AbortFlag;
    pub use crate::algs::contour::{
        ContourConfig, ContourFilter, ExtractOptions, extract, extract_with,
    };
    pub use crate::algs::contour_values::ContourValues;
    pub use crate::algs::plane::{AxisMapping, select_plane};
    pub use crate::contour_error::ContourError;
    pub use crate::data::extent::Extent;
    pub use crate::data::image::ImageData;
    pub use crate::data::point::PointId;
    pub use crate::data::poly_lines::{PointScalars, PolyLines};
    pub use crate::data::sample::{Sample, SampleKind, ScalarData};
    pub use crate::data::scalar_array::ScalarArray;
}
