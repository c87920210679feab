//! Data module: image grids, sample arrays and contour output

pub mod extent;
pub mod image;
pub mod point;
pub mod poly_lines;
pub mod sample;
pub mod scalar_array;

pub use extent::Extent;
pub use image::ImageData;
pub use point::PointId;
pub use poly_lines::{PointScalars, PolyLines};
pub use sample::{Sample, SampleAccess, SampleKind, SampleVisitor, ScalarData};
pub use scalar_array::ScalarArray;
