//! Row-synchronized sweep for a single contour value.
//!
//! The grid is walked one row at a time. For every sample the crossings on
//! the edge to its right and the edge above it are computed once and stored
//! in the current row buffer; the cells between the previous and the current
//! row are then closed by a case-table lookup. Points are appended to the
//! output in discovery order: per column the horizontal crossing first, then
//! the vertical one, and the last column's vertical crossing after the row.
//!
//! Classification: a sample is *outside* iff `s < value`. Equality, and NaN,
//! count as inside.

use crate::algs::abort::AbortFlag;
use crate::algs::case_table::{CellEdge, LINE_CASES, LineCases, case_index};
use crate::algs::intersections::{CellWindow, IntersectionBuffers};
use crate::algs::plane::AxisMapping;
use crate::contour_error::ContourError;
use crate::data::poly_lines::PolyLines;
use crate::data::sample::SampleAccess;

#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub(crate) fn inside(s: f64, value: f64) -> bool {
    !(s < value)
}

/// Interpolation parameter of `value` between endpoint samples `a` and `b`.
///
/// Equal endpoints, or any non-finite result, mean no usable crossing.
#[inline]
pub(crate) fn edge_fraction(value: f64, a: f64, b: f64) -> Option<f64> {
    if a == b {
        return None;
    }
    let t = (value - a) / (b - a);
    t.is_finite().then_some(t)
}

/// Contour `samples` at `value`, appending points, lines and scalars to `out`.
///
/// `start` is the linear offset of sample `(min0, min1)` of the selected
/// component. `abort` is polled at every row.
pub fn sweep_value<A>(
    samples: &A,
    start: usize,
    m: &AxisMapping,
    value: f64,
    out: &mut PolyLines,
    abort: &AbortFlag,
) -> Result<(), ContourError>
where
    A: SampleAccess + ?Sized,
{
    let cases = &*LINE_CASES;
    let mut buffers = IntersectionBuffers::new(m.dim0());
    let mut x = m.base_point();
    let mut row = start;

    for j in m.min1..=m.max1 {
        abort.check()?;
        let (prev, cur) = buffers.rows_mut((j - m.min1) % 2 == 1);
        let y = m.world(m.axis1, j as f64);
        let has_above = j < m.max1;

        let mut offset = row;
        let mut s1 = samples.sample(offset);
        for (col, i) in (m.min0..m.max0).enumerate() {
            let s0 = s1;
            s1 = samples.sample(offset + m.inc0);
            let in0 = inside(s0, value);

            if in0 != inside(s1, value) {
                if let Some(t) = edge_fraction(value, s0, s1) {
                    x[m.axis0] = m.world(m.axis0, i as f64 + t);
                    x[m.axis1] = y;
                    cur[2 * col] = Some(out.insert_point(x, value)?);
                }
            }
            if has_above {
                let s2 = samples.sample(offset + m.inc1);
                if in0 != inside(s2, value) {
                    if let Some(t) = edge_fraction(value, s0, s2) {
                        x[m.axis0] = m.world(m.axis0, i as f64);
                        x[m.axis1] = y + m.spacing[m.axis1] * t;
                        cur[2 * col + 1] = Some(out.insert_point(x, value)?);
                    }
                }
            }

            if j > m.min1 {
                let window = CellWindow {
                    prev,
                    cur: &*cur,
                    col,
                };
                emit_cell(&window, cases, out);
            }
            offset += m.inc0;
        }

        // Last column: only the edge above it exists.
        if has_above {
            let s2 = samples.sample(offset + m.inc1);
            if inside(s1, value) != inside(s2, value) {
                if let Some(t) = edge_fraction(value, s1, s2) {
                    x[m.axis0] = m.world(m.axis0, m.max0 as f64);
                    x[m.axis1] = y + m.spacing[m.axis1] * t;
                    cur[2 * (m.dim0() - 1) + 1] = Some(out.insert_point(x, value)?);
                }
            }
        }
        row += m.inc1;
    }
    Ok(())
}

fn emit_cell(window: &CellWindow<'_>, cases: &LineCases, out: &mut PolyLines) {
    let present = |e: CellEdge| window.edge(e).is_some();
    let case = case_index(
        present(CellEdge::Bottom),
        present(CellEdge::Left),
        present(CellEdge::Right),
        present(CellEdge::Top),
    );
    for [a, b] in cases.segments(case) {
        if let (Some(a), Some(b)) = (window.edge(a), window.edge(b)) {
            out.insert_line(a, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::point::PointId;

    fn mapping(nx: usize, ny: usize) -> AxisMapping {
        AxisMapping {
            axis0: 0,
            axis1: 1,
            collapsed: 2,
            min0: 0,
            max0: nx as i64 - 1,
            min1: 0,
            max1: ny as i64 - 1,
            inc0: 1,
            inc1: nx,
            origin: [0.0; 3],
            spacing: [1.0; 3],
            level: 0,
            fixed: 0.0,
        }
    }

    fn run(nx: usize, ny: usize, samples: &[f64], value: f64) -> PolyLines {
        let mut out = PolyLines::new(true);
        sweep_value(samples, 0, &mapping(nx, ny), value, &mut out, &AbortFlag::new()).unwrap();
        out
    }

    fn pid(i: usize) -> PointId {
        PointId::from_index(i).unwrap()
    }

    #[test]
    fn equality_counts_as_inside() {
        assert!(inside(1.0, 1.0));
        assert!(!inside(0.999, 1.0));
        assert!(inside(f64::NAN, 1.0));
    }

    #[test]
    fn degenerate_fractions() {
        assert_eq!(edge_fraction(1.0, 2.0, 2.0), None);
        assert_eq!(edge_fraction(1.0, f64::NEG_INFINITY, 3.0), None);
        assert_eq!(edge_fraction(1.0, 0.0, 4.0), Some(0.25));
    }

    #[test]
    fn diamond_around_center() {
        let out = run(3, 3, &[0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0], 1.0);
        assert_eq!(
            out.points(),
            &[
                [1.0, 0.5, 0.0],
                [0.5, 1.0, 0.0],
                [1.5, 1.0, 0.0],
                [1.0, 1.5, 0.0]
            ]
        );
        assert_eq!(
            out.lines(),
            &[
                [pid(0), pid(1)],
                [pid(0), pid(2)],
                [pid(1), pid(3)],
                [pid(2), pid(3)]
            ]
        );
    }

    #[test]
    fn single_column_uses_last_column_path() {
        // 1 × 3 column: only vertical edges exist.
        let out = run(1, 3, &[0.0, 2.0, 0.0], 1.0);
        assert_eq!(out.points(), &[[0.0, 0.5, 0.0], [0.0, 1.5, 0.0]]);
        assert!(out.lines().is_empty());
    }

    #[test]
    fn single_row_emits_points_only() {
        let out = run(3, 1, &[0.0, 2.0, 0.0], 1.0);
        assert_eq!(out.points(), &[[0.5, 0.0, 0.0], [1.5, 0.0, 0.0]]);
        assert!(out.lines().is_empty());
    }

    #[test]
    fn abort_stops_before_output() {
        let flag = AbortFlag::new();
        flag.request();
        let mut out = PolyLines::new(false);
        let err = sweep_value(&[0.0f64, 1.0, 2.0, 3.0][..], 0, &mapping(2, 2), 1.5, &mut out, &flag);
        assert_eq!(err, Err(ContourError::Aborted));
        assert!(out.is_empty());
    }
}
