//! Common types: board markers and the errors raised while building boards.

use crate::bitboard::BitBoardError;

/// Value held by a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(into = "u8", try_from = "u8"))]
#[repr(u8)]
pub enum Cell {
    /// Open water.
    #[default]
    Water = 0,
    /// Part of a ship.
    Ship = 3,
    /// Covered by a skill overlay.
    Affected = 5,
}

impl Cell {
    /// Numeric marker printed on the board.
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

impl TryFrom<u8> for Cell {
    type Error = InvalidCellValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Water),
            3 => Ok(Cell::Ship),
            5 => Ok(Cell::Affected),
            other => Err(InvalidCellValue(other)),
        }
    }
}

/// A number outside the {0, 3, 5} marker set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCellValue(pub u8);

impl core::fmt::Display for InvalidCellValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} is not a board marker (expected 0, 3 or 5)", self.0)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship does not fit on the board from its origin.
    ShipOutOfBounds,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
