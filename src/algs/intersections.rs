//! Two-row intersection buffers.
//!
//! Each row buffer holds `2 × dim0` slots. Slot `2i` is the crossing on the
//! horizontal edge right of column `i`; slot `2i + 1` is the crossing on the
//! vertical edge above column `i`. The two buffers swap previous/current
//! roles with the row parity and are never reallocated during a sweep.

use crate::algs::case_table::CellEdge;
use crate::data::point::PointId;

/// Crossing id, or `None` for "no crossing on this edge".
pub type Slot = Option<PointId>;

/// Ping-pong pair of row buffers for one contour value's sweep.
#[derive(Debug)]
pub struct IntersectionBuffers {
    dim0: usize,
    rows: [Vec<Slot>; 2],
}

impl IntersectionBuffers {
    pub fn new(dim0: usize) -> Self {
        Self {
            dim0,
            rows: [vec![None; 2 * dim0], vec![None; 2 * dim0]],
        }
    }

    #[inline]
    pub fn dim0(&self) -> usize {
        self.dim0
    }

    /// `(previous, current)` for a row of the given parity; the current row is
    /// cleared before it is handed out.
    pub fn rows_mut(&mut self, odd: bool) -> (&[Slot], &mut [Slot]) {
        let [a, b] = &mut self.rows;
        let (prev, cur) = if odd { (b, a) } else { (a, b) };
        cur.fill(None);
        (prev.as_slice(), cur.as_mut_slice())
    }
}

/// Read view of the four edges of the cell whose lower-left sample is in
/// column `col`.
#[derive(Clone, Copy)]
pub struct CellWindow<'a> {
    pub prev: &'a [Slot],
    pub cur: &'a [Slot],
    pub col: usize,
}

impl CellWindow<'_> {
    #[inline]
    pub fn edge(&self, edge: CellEdge) -> Slot {
        let i = 2 * self.col;
        match edge {
            CellEdge::Bottom => self.prev[i],
            CellEdge::Left => self.prev[i + 1],
            CellEdge::Right => self.prev[i + 3],
            CellEdge::Top => self.cur[i],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(i: usize) -> PointId {
        PointId::from_index(i).unwrap()
    }

    #[test]
    fn parity_swaps_roles() {
        let mut bufs = IntersectionBuffers::new(2);
        {
            let (_, cur) = bufs.rows_mut(false);
            cur[0] = Some(pid(5));
        }
        let (prev, cur) = bufs.rows_mut(true);
        assert_eq!(prev[0], Some(pid(5)));
        assert!(cur.iter().all(Option::is_none));
    }

    #[test]
    fn current_row_is_cleared() {
        let mut bufs = IntersectionBuffers::new(3);
        bufs.rows_mut(false).1[3] = Some(pid(1));
        bufs.rows_mut(true);
        let (_, cur) = bufs.rows_mut(false);
        assert!(cur.iter().all(Option::is_none));
    }

    #[test]
    fn window_reads_prev_and_cur() {
        let prev = [Some(pid(0)), Some(pid(1)), None, Some(pid(2))];
        let cur = [Some(pid(3)), None, None, None];
        let w = CellWindow {
            prev: &prev,
            cur: &cur,
            col: 0,
        };
        assert_eq!(w.edge(CellEdge::Bottom), Some(pid(0)));
        assert_eq!(w.edge(CellEdge::Left), Some(pid(1)));
        assert_eq!(w.edge(CellEdge::Right), Some(pid(2)));
        assert_eq!(w.edge(CellEdge::Top), Some(pid(3)));
    }
}
