//! Skill shape masks built from coordinate formulas.
//!
//! A mask is an odd-sided square of on/off cells with a single center cell
//! at `(size / 2, size / 2)`. Each [`ShapeKind`] decides membership with its
//! own predicate over `(row, col, center)`.

use alloc::vec::Vec;
use core::fmt;

use crate::config::MAX_SKILL_SIZE;
use crate::overlay::AlignmentMode;

/// The three skill shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum ShapeKind {
    /// Triangle with its apex on row 0, opening downward.
    Cone,
    /// Plus sign through the center.
    Cross,
    /// Rhombus touching the midpoint of every edge.
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cone, ShapeKind::Cross, ShapeKind::Diamond];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cone => "cone",
            ShapeKind::Cross => "cross",
            ShapeKind::Diamond => "diamond",
        }
    }

    /// Cones are anchored by their apex, everything else by its center.
    pub fn default_alignment(self) -> AlignmentMode {
        match self {
            ShapeKind::Cone => AlignmentMode::TopAligned,
            ShapeKind::Cross | ShapeKind::Diamond => AlignmentMode::Centered,
        }
    }

    fn contains(self, row: usize, col: usize, center: usize) -> bool {
        let dr = row.abs_diff(center);
        let dc = col.abs_diff(center);
        match self {
            ShapeKind::Cone => dc <= row,
            ShapeKind::Cross => row == center || col == center,
            ShapeKind::Diamond => dr + dc <= center,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned when a mask size cannot produce a centered shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A mask needs at least one cell.
    EmptySize,
    /// Even sides have no single center cell.
    EvenSize { size: usize },
    /// Wider than [`MAX_SKILL_SIZE`].
    TooLarge { size: usize, max: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::EmptySize => write!(f, "Shape size must be at least 1"),
            ShapeError::EvenSize { size } => {
                write!(f, "Shape size must be odd, got {}", size)
            }
            ShapeError::TooLarge { size, max } => {
                write!(f, "Shape size must be at most {}, got {}", max, size)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}

/// An immutable `size × size` on/off grid.
#[derive(Clone, PartialEq, Eq)]
pub struct ShapeMask {
    kind: ShapeKind,
    size: usize,
    cells: Vec<bool>,
}

impl ShapeMask {
    /// Generate the mask for `kind`. `size` must be odd and no larger than
    /// [`MAX_SKILL_SIZE`].
    pub fn build(kind: ShapeKind, size: usize) -> Result<Self, ShapeError> {
        if size == 0 {
            return Err(ShapeError::EmptySize);
        }
        if size % 2 == 0 {
            return Err(ShapeError::EvenSize { size });
        }
        if size > MAX_SKILL_SIZE {
            return Err(ShapeError::TooLarge {
                size,
                max: MAX_SKILL_SIZE,
            });
        }
        let center = size / 2;
        let cells = (0..size * size)
            .map(|idx| kind.contains(idx / size, idx % size, center))
            .collect();
        Ok(ShapeMask { kind, size, cells })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn center(&self) -> usize {
        self.size / 2
    }

    /// Cell at (row, col), or `None` outside the mask.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    pub fn count_on(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// Positions of the "on" cells in row-major order.
    pub fn iter_on(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(idx, _)| (idx / size, idx % size))
    }

    /// Rows as `0`/`1` values, for serialization.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|&on| u8::from(on)).collect())
            .collect()
    }
}

pub fn build_cone(size: usize) -> Result<ShapeMask, ShapeError> {
    ShapeMask::build(ShapeKind::Cone, size)
}

pub fn build_cross(size: usize) -> Result<ShapeMask, ShapeError> {
    ShapeMask::build(ShapeKind::Cross, size)
}

pub fn build_diamond(size: usize) -> Result<ShapeMask, ShapeError> {
    ShapeMask::build(ShapeKind::Diamond, size)
}

impl fmt::Display for ShapeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for (c, &on) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(on))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ShapeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ShapeMask<{}, {}>:", self.kind, self.size)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cone_apex_is_single_cell() {
        let cone = build_cone(5).unwrap();
        let apex: Vec<_> = cone.iter_on().filter(|&(r, _)| r == 0).collect();
        assert_eq!(apex, vec![(0, 2)]);
    }

    #[test]
    fn size_one_is_a_single_cell() {
        for kind in ShapeKind::ALL {
            let mask = ShapeMask::build(kind, 1).unwrap();
            assert_eq!(mask.count_on(), 1);
            assert_eq!(mask.get(0, 0), Some(true));
        }
    }

    #[test]
    fn get_outside_mask_is_none() {
        let cross = build_cross(3).unwrap();
        assert_eq!(cross.get(3, 0), None);
        assert_eq!(cross.get(0, 3), None);
    }
}
