#![cfg_attr(not(feature = "std"), no_std)]

//! Battleship board with area-of-effect skill overlays.
//!
//! Shapes (cone, cross, diamond) are generated as square masks and stamped
//! onto a fixed 10×10 board next to straight-line ships.

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod overlay;
pub mod scenario;
mod shape;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use overlay::{footprint, overlay, AlignmentMode, Footprint, Origin};
pub use scenario::{Report, ScenarioConfig, ScenarioError, SkillPlacement};
pub use shape::*;
pub use ship::*;
