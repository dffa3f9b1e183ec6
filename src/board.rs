//! The game board: a fixed grid of cell markers.

use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::bitboard::{BitBoard, BitBoardError};
use crate::common::{BoardError, Cell};
use crate::config::{ShipPlacement, BOARD_SIZE};
use crate::overlay::{self, AlignmentMode, Origin};
use crate::shape::ShapeMask;
use crate::ship::{Orientation, Ship, ShipType};

type BB = BitBoard<u128, BOARD_SIZE>;

/// A ship laid out on the standard board.
pub type BoardShip = Ship<u128, BOARD_SIZE>;

/// `BOARD_SIZE × BOARD_SIZE` grid of markers, all water when created.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Water; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Marker at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or_else(|| BitBoardError::IndexOutOfBounds { row, col }.into())
    }

    /// Overwrite the marker at (row, col). Positions off the board are ignored.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Numeric markers, for serialization.
    pub fn values(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|r| core::array::from_fn(|c| self.cells[r][c].value()))
    }

    /// Every cell currently holding `cell`.
    pub fn cells_with(&self, cell: Cell) -> BB {
        let mut map = BB::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == cell {
                    map.set_clipped(r as isize, c as isize);
                }
            }
        }
        map
    }

    /// Cells currently showing a ship marker.
    pub fn ship_map(&self) -> BB {
        self.cells_with(Cell::Ship)
    }

    /// Cells covered by an overlay.
    pub fn affected_map(&self) -> BB {
        self.cells_with(Cell::Affected)
    }

    /// Place a ship at (row, col) with the given orientation.
    ///
    /// Both the bounds and the overlap checks run before anything is written,
    /// so a rejected ship leaves the board as it was.
    pub fn place_ship(
        &mut self,
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<BoardShip, BoardError> {
        let ship = BoardShip::new(ship_type, orientation, row, col).inspect_err(|e| {
            warn!("{} at ({}, {}) rejected: {}", ship_type.name(), row, col, e);
        })?;
        if !(self.ship_map() & ship.mask()).is_empty() {
            warn!(
                "{} at ({}, {}) rejected: {}",
                ship_type.name(),
                row,
                col,
                BoardError::ShipOverlaps
            );
            return Err(BoardError::ShipOverlaps);
        }
        for (r, c) in ship.cells() {
            self.set(r, c, Cell::Ship);
        }
        debug!(
            "placed {} at ({}, {}) {:?}",
            ship_type.name(),
            row,
            col,
            orientation
        );
        Ok(ship)
    }

    /// Place a ship described by a fleet entry.
    pub fn place(&mut self, placement: &ShipPlacement) -> Result<BoardShip, BoardError> {
        self.place_ship(
            placement.ship_type,
            placement.orientation,
            placement.row,
            placement.col,
        )
    }

    /// Returns a random non-overlapping (row, col, Orientation) for `ship_type`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let len = ship_type.length();
        if len == 0 || len > BOARD_SIZE {
            return Err(BoardError::UnableToPlaceShip);
        }
        let occupied = self.ship_map();
        for _ in 0..100 {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - len),
                Orientation::Vertical => (BOARD_SIZE - len, BOARD_SIZE - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let ship = BoardShip::new(ship_type, orient, r, c)?;
            if (occupied & ship.mask()).is_empty() {
                return Ok((r, c, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Stamp `mask` onto the board. See [`overlay::overlay`].
    pub fn overlay(&mut self, mask: &ShapeMask, origin: Origin, mode: AlignmentMode) {
        overlay::overlay(self, mask, origin, mode);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Whitespace-separated markers, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  ships: {:?},\n  affected: {:?}\n}}",
            self.ship_map(),
            self.affected_map()
        )
    }
}
