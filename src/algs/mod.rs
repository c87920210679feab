//! Re-export public algorithms.

pub mod abort;
pub mod case_table;
pub mod contour;
pub mod contour_values;
pub mod intersections;
pub mod plane;
pub mod sweep;

pub use contour::{ContourFilter, extract, extract_with};
pub use plane::select_plane;
