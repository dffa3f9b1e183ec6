//! Stamping skill masks onto the board.
//!
//! A mask is anchored at an [`Origin`] and mapped cell-by-cell into board
//! coordinates according to an [`AlignmentMode`]. Targets that land off the
//! board are clipped silently; everything else becomes [`Cell::Affected`],
//! whatever it held before.

use log::debug;

use crate::bitboard::BitBoard;
use crate::board::Board;
use crate::common::Cell;
use crate::config::BOARD_SIZE;
use crate::shape::ShapeMask;

/// Board cells touched by one overlay.
pub type Footprint = BitBoard<u128, BOARD_SIZE>;

/// Anchor point of a mask on the board.
///
/// Signed so a mask can be anchored partly or fully off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    pub row: isize,
    pub col: isize,
}

impl Origin {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl From<(isize, isize)> for Origin {
    fn from((row, col): (isize, isize)) -> Self {
        Self { row, col }
    }
}

/// How mask-local coordinates map onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentMode {
    /// Mask row 0 sits on the origin row, horizontally centered on its column.
    TopAligned,
    /// Mask center sits on the origin.
    Centered,
}

impl AlignmentMode {
    /// Board coordinate for mask cell (`row`, `col`) of a mask with the given center.
    ///
    /// `None` when the coordinate is not representable as `isize`; such a
    /// cell can never be on the board.
    pub fn target(
        self,
        center: usize,
        row: usize,
        col: usize,
        origin: Origin,
    ) -> Option<(isize, isize)> {
        let center = isize::try_from(center).ok()?;
        let row = isize::try_from(row).ok()?;
        let col = isize::try_from(col).ok()?;
        let dr = match self {
            AlignmentMode::TopAligned => row,
            AlignmentMode::Centered => row - center,
        };
        let dc = col - center;
        Some((origin.row.checked_add(dr)?, origin.col.checked_add(dc)?))
    }
}

/// The in-bounds board cells covered by `mask` anchored at `origin`.
pub fn footprint(mask: &ShapeMask, origin: Origin, mode: AlignmentMode) -> Footprint {
    let mut cells = Footprint::new();
    for (i, j) in mask.iter_on() {
        if let Some((r, c)) = mode.target(mask.center(), i, j, origin) {
            cells.set_clipped(r, c);
        }
    }
    cells
}

/// Mark every in-bounds cell covered by `mask` as affected.
pub fn overlay(board: &mut Board, mask: &ShapeMask, origin: Origin, mode: AlignmentMode) {
    let cells = footprint(mask, origin, mode);
    for (r, c) in cells.iter_set_bits() {
        board.set(r, c, Cell::Affected);
    }
    debug!(
        "overlay {} at ({}, {}) {:?}: {} marked, {} clipped",
        mask.kind(),
        origin.row,
        origin.col,
        mode,
        cells.count_ones(),
        mask.count_on() - cells.count_ones(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{build_cone, build_cross};

    #[test]
    fn top_aligned_keeps_first_row_on_origin() {
        assert_eq!(
            AlignmentMode::TopAligned.target(3, 0, 3, Origin::new(2, 5)),
            Some((2, 5))
        );
        assert_eq!(
            AlignmentMode::TopAligned.target(3, 2, 0, Origin::new(2, 5)),
            Some((4, 2))
        );
    }

    #[test]
    fn centered_puts_center_on_origin() {
        assert_eq!(
            AlignmentMode::Centered.target(3, 3, 3, Origin::new(6, 6)),
            Some((6, 6))
        );
        assert_eq!(
            AlignmentMode::Centered.target(3, 0, 6, Origin::new(0, 0)),
            Some((-3, 3))
        );
    }

    #[test]
    fn target_past_isize_range_is_none() {
        assert_eq!(
            AlignmentMode::TopAligned.target(1, 1, 1, Origin::new(isize::MAX, 0)),
            None
        );
        assert_eq!(
            AlignmentMode::Centered.target(1, 0, 0, Origin::new(0, isize::MIN)),
            None
        );
        assert_eq!(
            AlignmentMode::Centered.target(1, 1, 1, Origin::new(isize::MAX, isize::MIN)),
            Some((isize::MAX, isize::MIN))
        );
    }

    #[test]
    fn footprint_off_board_is_empty() {
        let cross = build_cross(7).unwrap();
        let cells = footprint(&cross, Origin::new(-20, 40), AlignmentMode::Centered);
        assert!(cells.is_empty());
    }

    #[test]
    fn cone_footprint_inside_board_keeps_every_cell() {
        let cone = build_cone(7).unwrap();
        let cells = footprint(&cone, Origin::new(0, 4), AlignmentMode::TopAligned);
        assert_eq!(cells.count_ones(), cone.count_on());
        assert!(cells.get(0, 4).unwrap());
        assert!(!cells.get(0, 3).unwrap());
        // the mask is only 7 wide, so the last row spans columns 1..=7
        assert!(cells.get(6, 1).unwrap());
        assert!(cells.get(6, 7).unwrap());
        assert!(!cells.get(6, 0).unwrap());
        assert!(!cells.get(7, 4).unwrap());
    }
}
