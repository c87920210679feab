//! Line case table for 2×2 cells.
//!
//! A cell is keyed by which of its four edges carry a crossing:
//!
//! ```text
//!            top (current row, slot 2i)
//!          +-----------------+
//!   left   |                 |  right
//! (prev,   |                 | (prev,
//!  2i+1)   |                 |  2i+3)
//!          +-----------------+
//!            bottom (previous row, slot 2i)
//! ```
//!
//! `case = 8·bottom + 4·left + 2·right + top`. Each case holds up to two
//! segments of two endpoints, so the flattened table has `16 × 2 × 2 = 64`
//! slots. Two crossings are joined directly. Four crossings (the saddle)
//! always pair `(bottom, left)` and `(right, top)`; the table does not look at
//! the cell centre to pick the other pairing.

use once_cell::sync::Lazy;

/// One of the four edges of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellEdge {
    Bottom,
    Left,
    Right,
    Top,
}

impl CellEdge {
    /// In case-index bit order, most significant first.
    pub const ALL: [CellEdge; 4] = [CellEdge::Bottom, CellEdge::Left, CellEdge::Right, CellEdge::Top];

    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            CellEdge::Bottom => 8,
            CellEdge::Left => 4,
            CellEdge::Right => 2,
            CellEdge::Top => 1,
        }
    }
}

pub const NUM_CASES: usize = 16;
pub const SLOTS_PER_CASE: usize = 4;
pub const NUM_SLOTS: usize = NUM_CASES * SLOTS_PER_CASE;

/// Immutable, flattened case table.
pub struct LineCases {
    slots: [Option<CellEdge>; NUM_SLOTS],
}

impl LineCases {
    fn build() -> Self {
        let mut slots = [None; NUM_SLOTS];
        for case in 0..NUM_CASES as u8 {
            let crossed: Vec<CellEdge> = CellEdge::ALL
                .into_iter()
                .filter(|e| case & e.bit() != 0)
                .collect();
            // An odd count cannot arise from consistent in/out corners.
            let segments = match crossed.as_slice() {
                &[a, b] => vec![[a, b]],
                [_, _, _, _] => vec![
                    [CellEdge::Bottom, CellEdge::Left],
                    [CellEdge::Right, CellEdge::Top],
                ],
                _ => Vec::new(),
            };
            let base = case as usize * SLOTS_PER_CASE;
            for (k, seg) in segments.iter().enumerate() {
                slots[base + 2 * k] = Some(seg[0]);
                slots[base + 2 * k + 1] = Some(seg[1]);
            }
        }
        Self { slots }
    }

    /// Flattened slot `slot` in `[0, 64)`.
    #[inline]
    pub fn slot(&self, slot: usize) -> Option<CellEdge> {
        self.slots[slot]
    }

    /// Segments for a case index in `[0, 16)`.
    #[inline]
    pub fn segments(&self, case: u8) -> impl Iterator<Item = [CellEdge; 2]> + '_ {
        let base = case as usize * SLOTS_PER_CASE;
        self.slots[base..base + SLOTS_PER_CASE]
            .chunks_exact(2)
            .map_while(|pair| Some([pair[0]?, pair[1]?]))
    }
}

/// The table, built on first use.
pub static LINE_CASES: Lazy<LineCases> = Lazy::new(LineCases::build);

/// Case index from the four crossing flags.
#[inline]
pub fn case_index(bottom: bool, left: bool, right: bool, top: bool) -> u8 {
    (bottom as u8) << 3 | (left as u8) << 2 | (right as u8) << 1 | top as u8
}
