//! Grid cell value type
//!
//! A cell is three integers: the two horizontal grid coordinates and the
//! elevation plane the claim grid lives on. Binding a cell to a live world
//! position happens only at the boundary, through [`GridCell::from_position`].

use num_traits::Float;
use std::fmt;

use crate::io::configuration::MAX_WORLD_COORDINATE;
use crate::io::error::{Result, TerritoryError};

/// Offsets of the four orthogonal neighbours
const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Offsets of all eight cells at Chebyshev distance one
const SURROUNDING_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (1, -1),
    (1, 1),
];

/// An addressable unit of the 2D claim grid at a fixed elevation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    /// Horizontal x coordinate
    pub x: i32,
    /// Horizontal z coordinate
    pub z: i32,
    /// Elevation plane shared by every cell of one claim grid
    pub plane: i32,
}

impl GridCell {
    /// Create a cell from integer coordinates
    pub const fn new(x: i32, z: i32, plane: i32) -> Self {
        Self { x, z, plane }
    }

    /// Create a cell from a continuous world position
    ///
    /// The position must already be snapped to the grid: every component has
    /// to be a finite whole number that fits in an `i32`, and the horizontal
    /// components must lie within [`MAX_WORLD_COORDINATE`] of the origin.
    ///
    /// # Errors
    ///
    /// Returns [`TerritoryError::MisalignedCell`] if any component carries a
    /// fractional offset, is not finite or is out of range.
    pub fn from_position<F: Float>(x: F, y: F, z: F) -> Result<Self> {
        let misaligned = || TerritoryError::MisalignedCell {
            x: x.to_f64().unwrap_or(f64::NAN),
            y: y.to_f64().unwrap_or(f64::NAN),
            z: z.to_f64().unwrap_or(f64::NAN),
        };

        let snap = |value: F| -> Option<i32> {
            if value.is_finite() && value.fract().is_zero() {
                value.to_i32()
            } else {
                None
            }
        };

        let horizontal = |value: F| {
            snap(value).filter(|v| v.unsigned_abs() <= MAX_WORLD_COORDINATE.unsigned_abs())
        };

        match (horizontal(x), snap(y), horizontal(z)) {
            (Some(cx), Some(cy), Some(cz)) => Ok(Self::new(cx, cz, cy)),
            _ => Err(misaligned()),
        }
    }

    /// Cell offset by `(dx, dz)` on the same plane
    ///
    /// Saturates at the `i32` range.
    #[must_use]
    pub const fn translate(self, dx: i32, dz: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.z.saturating_add(dz),
            self.plane,
        )
    }

    /// All eight cells at Chebyshev distance one, diagonals included
    pub fn neighbors8(self) -> [Self; 8] {
        SURROUNDING_OFFSETS.map(|(dx, dz)| self.translate(dx, dz))
    }

    /// The four orthogonal neighbours
    pub fn neighbors4(self) -> [Self; 4] {
        ORTHOGONAL_OFFSETS.map(|(dx, dz)| self.translate(dx, dz))
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {} @ {})", self.x, self.z, self.plane)
    }
}
