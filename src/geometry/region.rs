//! Claimed regions described solely by their boundary

use crate::geometry::cell::GridCell;
use crate::geometry::path::Path;

/// A claimed region of the grid
///
/// Holds no cell storage of its own. Interior membership is always derived
/// from the outline, which has to be a closed loop for classification to be
/// meaningful. Regions are superseded, never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimedRegion {
    outline: Path,
}

impl ClaimedRegion {
    /// Wrap a boundary path
    pub const fn new(outline: Path) -> Self {
        Self { outline }
    }

    /// The boundary path
    pub const fn outline(&self) -> &Path {
        &self.outline
    }

    /// Check if a cell lies on the boundary
    pub fn contains(&self, cell: &GridCell) -> bool {
        self.outline.contains(cell)
    }

    /// Check if any of the cell's eight neighbours lies on the boundary
    pub fn is_adjacent(&self, cell: GridCell) -> bool {
        cell.neighbors8().iter().any(|n| self.outline.contains(n))
    }
}

impl From<Path> for ClaimedRegion {
    fn from(outline: Path) -> Self {
        Self::new(outline)
    }
}
