//! ContourError: Unified error type for isocontour2d public APIs
//!
//! Every precondition failure is reported through this type before any sweep
//! starts, so a returned error always means "nothing was emitted".

use thiserror::Error;

use crate::data::extent::Extent;
use crate::data::point::PointId;

/// Unified error type for contour extraction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContourError {
    /// An extent has `min > max` along some axis.
    #[error("Invalid extent {0}: min must not exceed max on any axis")]
    InvalidExtent(Extent),
    /// Contouring needs exactly one collapsed axis.
    #[error("Expecting 2D data: extent {extent} has {collapsed} collapsed axes, expected exactly 1")]
    NotPlanar { extent: Extent, collapsed: usize },
    /// The requested update extent reaches outside the stored data.
    #[error("Update extent {update} lies outside data extent {whole}")]
    UpdateExtentOutsideData { update: Extent, whole: Extent },
    /// No scalar array is available for contouring.
    #[error("Scalars must be defined for contouring")]
    MissingScalars,
    /// A named scalar selection did not match any point array.
    #[error("No point array named `{0}`")]
    ScalarsNotFound(String),
    /// The requested component index is not present in the scalar array.
    #[error(
        "Scalars have {num_components} components. ArrayComponent must be smaller than {num_components} (got {component})"
    )]
    ComponentOutOfRange {
        component: usize,
        num_components: usize,
    },
    /// A scalar array was declared with zero components per tuple.
    #[error("Scalar arrays must have at least one component")]
    ZeroComponents,
    /// An array's length does not match `points(extent) * components`.
    #[error("Array `{name}` has {found} values, expected {expected}")]
    ArrayLengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    /// The active scalars index names no stored array.
    #[error("Active scalars index {index} is out of range for {arrays} arrays")]
    ActiveScalarsOutOfRange { index: usize, arrays: usize },
    /// An axis mapping's axes are not a permutation of x, y and z.
    #[error("Axis mapping axes {0:?} must be distinct axes in 0..3")]
    InvalidAxes([usize; 3]),
    /// An axis mapping's strides do not match the scalar array layout.
    #[error("Axis mapping strides {found:?} do not match array increments {expected:?}")]
    AxisMappingMismatch { expected: [usize; 2], found: [usize; 2] },
    /// The output point set outgrew the id space.
    #[error("Point id overflow at index {0}")]
    PointIdOverflow(usize),
    /// A line references a point that was never appended.
    #[error("Line {line} references missing point {point}")]
    DanglingLineEndpoint { line: usize, point: PointId },
    /// Scalar carry-through produced a different count than points.
    #[error("Scalar count {scalars} does not match point count {points}")]
    ScalarCountMismatch { points: usize, scalars: usize },
    /// Extraction was cancelled through an abort flag.
    #[error("Contour extraction aborted")]
    Aborted,
}
