use crate::overlay::Origin;
use crate::ship::{Orientation, ShipType};

pub const BOARD_SIZE: usize = 10;

/// Side length of the generated skill masks. Must be odd.
pub const SKILL_SIZE: usize = 7;

/// Largest mask side accepted. A centered mask this wide covers the whole
/// board from any cell on it.
pub const MAX_SKILL_SIZE: usize = 2 * BOARD_SIZE + 1;

/// The cone's apex sits on this cell.
pub const CONE_ORIGIN: Origin = Origin::new(0, 4);
pub const CROSS_ORIGIN: Origin = Origin::new(4, 2);
pub const DIAMOND_ORIGIN: Origin = Origin::new(6, 6);

pub const NUM_SHIPS: usize = 2;

/// A ship type together with where it goes on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    pub ship_type: ShipType,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl ShipPlacement {
    pub const fn new(ship_type: ShipType, orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            ship_type,
            orientation,
            row,
            col,
        }
    }
}

pub const FLEET: [ShipPlacement; NUM_SHIPS] = [
    ShipPlacement::new(ShipType::new("Cruiser", 3), Orientation::Horizontal, 2, 1),
    ShipPlacement::new(ShipType::new("Submarine", 3), Orientation::Vertical, 5, 7),
];
