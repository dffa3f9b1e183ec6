//! The fixed demo flow: ships first, then every skill stamped on top.

use alloc::vec::Vec;
use core::fmt;
use log::info;
use rand::Rng;

use crate::board::{Board, BoardShip};
use crate::common::BoardError;
use crate::config::{
    ShipPlacement, CONE_ORIGIN, CROSS_ORIGIN, DIAMOND_ORIGIN, FLEET, SKILL_SIZE,
};
use crate::overlay::{AlignmentMode, Origin};
use crate::shape::{ShapeError, ShapeKind, ShapeMask};

/// One skill to stamp: which shape, where, and how it is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillPlacement {
    pub kind: ShapeKind,
    pub origin: Origin,
    pub alignment: AlignmentMode,
}

impl SkillPlacement {
    /// Placement using the shape's usual anchor.
    pub fn new(kind: ShapeKind, origin: Origin) -> Self {
        Self {
            kind,
            origin,
            alignment: kind.default_alignment(),
        }
    }
}

/// Everything the demo board is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub skill_size: usize,
    pub skills: Vec<SkillPlacement>,
    pub fleet: Vec<ShipPlacement>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            skill_size: SKILL_SIZE,
            skills: alloc::vec![
                SkillPlacement::new(ShapeKind::Cone, CONE_ORIGIN),
                SkillPlacement::new(ShapeKind::Cross, CROSS_ORIGIN),
                SkillPlacement::new(ShapeKind::Diamond, DIAMOND_ORIGIN),
            ],
            fleet: FLEET.to_vec(),
        }
    }
}

/// Errors from building a scenario.
#[derive(Debug, PartialEq, Eq)]
pub enum ScenarioError {
    Board(BoardError),
    Shape(ShapeError),
}

impl From<BoardError> for ScenarioError {
    fn from(err: BoardError) -> Self {
        ScenarioError::Board(err)
    }
}

impl From<ShapeError> for ScenarioError {
    fn from(err: ShapeError) -> Self {
        ScenarioError::Shape(err)
    }
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Board(e) => write!(f, "{}", e),
            ScenarioError::Shape(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScenarioError {}

/// Final board together with the masks that were stamped on it.
#[derive(Debug, Clone)]
pub struct Report {
    pub board: Board,
    pub ships: Vec<BoardShip>,
    pub masks: Vec<ShapeMask>,
}

impl Report {
    /// JSON document with the board rows and every mask by name.
    #[cfg(feature = "std")]
    pub fn to_json(&self) -> serde_json::Value {
        let masks: serde_json::Map<String, serde_json::Value> = self
            .masks
            .iter()
            .map(|m| (m.kind().name().to_string(), serde_json::json!(m.rows())))
            .collect();
        let ships: Vec<serde_json::Value> = self
            .ships
            .iter()
            .map(|s| {
                serde_json::json!({
                    "name": s.ship_type().name(),
                    "origin": s.origin(),
                    "orientation": s.orientation(),
                })
            })
            .collect();
        serde_json::json!({
            "board": self.board.values(),
            "ships": ships,
            "masks": masks,
        })
    }
}

/// Place every ship of `fleet` in order. Stops at the first rejected ship.
pub fn place_fleet(board: &mut Board, fleet: &[ShipPlacement]) -> Result<Vec<BoardShip>, BoardError> {
    fleet.iter().map(|p| board.place(p)).collect()
}

/// Place the ship types of `fleet` at random, non-overlapping positions.
pub fn place_random_fleet<R: Rng>(
    board: &mut Board,
    rng: &mut R,
    fleet: &[ShipPlacement],
) -> Result<Vec<BoardShip>, BoardError> {
    let mut ships = Vec::with_capacity(fleet.len());
    for p in fleet {
        let (r, c, orient) = board.random_placement(rng, p.ship_type)?;
        ships.push(board.place_ship(p.ship_type, orient, r, c)?);
    }
    Ok(ships)
}

/// Build the board: fleet first, then each skill in order. Later skills win
/// on overlapping cells.
pub fn run(config: &ScenarioConfig) -> Result<Report, ScenarioError> {
    let mut board = Board::new();
    let ships = place_fleet(&mut board, &config.fleet)?;
    let mut masks = Vec::with_capacity(config.skills.len());
    for skill in &config.skills {
        let mask = ShapeMask::build(skill.kind, config.skill_size)?;
        board.overlay(&mask, skill.origin, skill.alignment);
        masks.push(mask);
    }
    info!(
        "scenario built: {} ships, {} skills, {} cells affected",
        ships.len(),
        masks.len(),
        board.affected_map().count_ones()
    );
    Ok(Report {
        board,
        ships,
        masks,
    })
}

/// Ships-only variant of [`run`].
pub fn run_fleet(fleet: &[ShipPlacement]) -> Result<Report, ScenarioError> {
    let mut board = Board::new();
    let ships = place_fleet(&mut board, fleet)?;
    Ok(Report {
        board,
        ships,
        masks: Vec::new(),
    })
}
