#![cfg(feature = "std")]

//! Console rendering for boards and masks.

use std::io::{self, Write};

use crate::board::Board;
use crate::shape::ShapeMask;

/// Write the board under its legend, followed by a blank line.
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    writeln!(out, "Board (0=water, 3=ship, 5=affected):")?;
    writeln!(out)?;
    write!(out, "{}", board)?;
    writeln!(out)
}

/// Write a mask under a title naming its shape.
pub fn write_mask<W: Write>(out: &mut W, mask: &ShapeMask) -> io::Result<()> {
    writeln!(
        out,
        "{} mask {}x{} (1=affected, 0=not):",
        mask.kind(),
        mask.size(),
        mask.size()
    )?;
    write!(out, "{}", mask)?;
    writeln!(out)
}

pub fn print_board(board: &Board) -> io::Result<()> {
    write_board(&mut io::stdout().lock(), board)
}

pub fn print_mask(mask: &ShapeMask) -> io::Result<()> {
    write_mask(&mut io::stdout().lock(), mask)
}
