#![allow(dead_code)]
use isocontour2d::algs::contour::{ContourConfig, ContourFilter};
use isocontour2d::algs::contour_values::ContourValues;
use isocontour2d::data::image::ImageData;
use isocontour2d::data::point::PointId;
use isocontour2d::data::poly_lines::PolyLines;

pub fn pid(i: usize) -> PointId {
    PointId::from_index(i).unwrap()
}

/// Unit-spaced `nx × ny` z = 0 image with `values` as active scalars.
pub fn grid(nx: usize, ny: usize, values: Vec<f64>) -> ImageData {
    ImageData::from_xy(nx, ny, values).unwrap()
}

/// Contour `image` at `values` with scalars on.
pub fn contour(image: &ImageData, values: &[f64]) -> PolyLines {
    let filter = ContourFilter::new(ContourConfig {
        values: ContourValues::from_values(values.iter().copied()),
        ..Default::default()
    });
    filter.execute(image).unwrap()
}

/// Every segment's endpoints lie on the closure of one common unit cell of a
/// unit-spaced, zero-origin `nx × ny` grid in the z = 0 plane.
pub fn assert_segments_in_one_cell(out: &PolyLines, nx: usize, ny: usize) {
    fn cells(u: f64, n: usize) -> (i64, i64) {
        // Cells [c, c+1] whose closure contains u.
        let lo = (u.ceil() as i64 - 1).max(0);
        let hi = (u.floor() as i64).min(n as i64 - 2);
        (lo, hi)
    }
    for (k, (a, b)) in out.segments().enumerate() {
        let (ax, bx) = (cells(a[0], nx), cells(b[0], nx));
        let (ay, by) = (cells(a[1], ny), cells(b[1], ny));
        let x_ok = ax.0.max(bx.0) <= ax.1.min(bx.1);
        let y_ok = ay.0.max(by.0) <= ay.1.min(by.1);
        assert!(x_ok && y_ok, "segment {k} spans cells: {a:?} -> {b:?}");
    }
}
