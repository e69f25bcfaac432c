//! Ordered cell sequences with a cached bounding box
//!
//! A path is a drawn trace or a region boundary. Order is meaningful and
//! duplicates are kept; [`Path::distinct`] has to be requested explicitly.

use std::collections::HashSet;

use crate::geometry::cell::GridCell;
use crate::io::error::{Result, TerritoryError};

/// Axis-aligned bounding box over grid coordinates (all bounds inclusive)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    /// Smallest x coordinate
    pub x_min: i32,
    /// Largest x coordinate
    pub x_max: i32,
    /// Smallest z coordinate
    pub z_min: i32,
    /// Largest z coordinate
    pub z_max: i32,
}

impl BoundingBox {
    /// Tight box around a set of cells, absent when there are none
    pub fn around<'a>(cells: impl IntoIterator<Item = &'a GridCell>) -> Option<Self> {
        cells.into_iter().fold(None, |acc, cell| {
            Some(match acc {
                None => Self {
                    x_min: cell.x,
                    x_max: cell.x,
                    z_min: cell.z,
                    z_max: cell.z,
                },
                Some(bounds) => Self {
                    x_min: bounds.x_min.min(cell.x),
                    x_max: bounds.x_max.max(cell.x),
                    z_min: bounds.z_min.min(cell.z),
                    z_max: bounds.z_max.max(cell.z),
                },
            })
        })
    }

    /// Number of columns covered
    pub const fn x_size(&self) -> i32 {
        self.x_max.saturating_sub(self.x_min).saturating_add(1)
    }

    /// Number of rows covered
    pub const fn z_size(&self) -> i32 {
        self.z_max.saturating_sub(self.z_min).saturating_add(1)
    }

    /// Number of cells covered, computed in 64 bits
    pub fn area(&self) -> u64 {
        let width = i64::from(self.x_max) - i64::from(self.x_min) + 1;
        let height = i64::from(self.z_max) - i64::from(self.z_min) + 1;
        width.unsigned_abs().saturating_mul(height.unsigned_abs())
    }

    /// Check if a coordinate pair lies within the box
    pub const fn contains(&self, x: i32, z: i32) -> bool {
        x >= self.x_min && x <= self.x_max && z >= self.z_min && z <= self.z_max
    }

    /// Box grown by `margin` cells on every side
    #[must_use]
    pub const fn expanded(&self, margin: i32) -> Self {
        Self {
            x_min: self.x_min.saturating_sub(margin),
            x_max: self.x_max.saturating_add(margin),
            z_min: self.z_min.saturating_sub(margin),
            z_max: self.z_max.saturating_add(margin),
        }
    }
}

/// Ordered, immutable sequence of grid cells
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    cells: Vec<GridCell>,
    bounds: Option<BoundingBox>,
}

impl Path {
    /// Build a path, computing its bounding box once
    pub fn new(cells: Vec<GridCell>) -> Self {
        let bounds = BoundingBox::around(&cells);
        Self { cells, bounds }
    }

    /// Bounding box, absent iff the path is empty
    pub const fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds
    }

    /// Width of the bounding box, zero when empty
    pub fn x_size(&self) -> i32 {
        self.bounds.map_or(0, |b| b.x_size())
    }

    /// Height of the bounding box, zero when empty
    pub fn z_size(&self) -> i32 {
        self.bounds.map_or(0, |b| b.z_size())
    }

    /// Check membership by value
    pub fn contains(&self, cell: &GridCell) -> bool {
        self.cells.contains(cell)
    }

    /// Cell at a position in the sequence
    ///
    /// # Errors
    ///
    /// Returns [`TerritoryError::IndexOutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<GridCell> {
        self.cells
            .get(index)
            .copied()
            .ok_or(TerritoryError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
    }

    /// First cell in sequence order with the given horizontal coordinates
    pub fn cell_at(&self, x: i32, z: i32) -> Option<GridCell> {
        self.cells.iter().copied().find(|c| c.x == x && c.z == z)
    }

    /// Index of the first occurrence of a cell
    pub fn position(&self, cell: &GridCell) -> Option<usize> {
        self.cells.iter().position(|c| c == cell)
    }

    /// Number of cells, duplicates included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the path has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the last cell, absent for an empty path
    pub fn last_index(&self) -> Option<usize> {
        self.cells.len().checked_sub(1)
    }

    /// First cell of the trace
    pub fn first(&self) -> Option<GridCell> {
        self.cells.first().copied()
    }

    /// Last cell of the trace
    pub fn last(&self) -> Option<GridCell> {
        self.cells.last().copied()
    }

    /// Cells in sequence order
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Iterate cells in sequence order
    pub fn iter(&self) -> std::slice::Iter<'_, GridCell> {
        self.cells.iter()
    }

    /// Copy with duplicates removed, keeping first occurrences in order
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.cells.len());
        self.cells
            .iter()
            .copied()
            .filter(|cell| seen.insert(*cell))
            .collect()
    }

    /// New path holding this path's cells followed by `other`'s
    #[must_use]
    pub fn concat(&self, other: &[GridCell]) -> Self {
        self.cells.iter().chain(other).copied().collect()
    }

    /// Consume the path, returning its cells
    pub fn into_cells(self) -> Vec<GridCell> {
        self.cells
    }
}

impl FromIterator<GridCell> for Path {
    fn from_iter<I: IntoIterator<Item = GridCell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<GridCell>> for Path {
    fn from(cells: Vec<GridCell>) -> Self {
        Self::new(cells)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a GridCell;
    type IntoIter = std::slice::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
