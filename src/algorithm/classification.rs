//! Even-odd point classification against a region outline

use crate::geometry::{ClaimedRegion, GridCell};

/// Check if a cell lies inside a region, boundary included
///
/// Cells outside the outline's bounding box are always outside. Otherwise
/// scans the cell's row from the cell to the outline's `x_max` and counts
/// boundary crossings. A run of adjacent boundary cells counts as a single
/// crossing, so boundaries wider than one cell do not flip the parity.
pub fn is_inside(region: &ClaimedRegion, cell: &GridCell) -> bool {
    let outline = region.outline();
    if outline.contains(cell) {
        return true;
    }

    let Some(bounds) = outline.bounding_box() else {
        return false;
    };
    if !bounds.contains(cell.x, cell.z) {
        return false;
    }

    let mut crossings = 0_usize;
    let mut in_run = false;
    for x in cell.x..=bounds.x_max {
        let hit = outline.cell_at(x, cell.z).is_some();
        if hit && !in_run {
            crossings += 1;
        }
        in_run = hit;
    }

    crossings % 2 == 1
}
