//! Interior fill strategies for closed outlines
//!
//! All strategies treat boundary cells as inside. `CrossingNumber` grows from
//! the outline's first cell using even-odd classification; the two
//! fill-from-outside variants flood the exterior instead and take the
//! complement within the outline's bounding box.

use std::collections::{HashSet, VecDeque};

use bitvec::prelude::*;
use ndarray::Array2;
use tracing::debug;

use crate::algorithm::classification::is_inside;
use crate::algorithm::growth::grow_bounded;
use crate::geometry::{BoundingBox, ClaimedRegion, GridCell};
use crate::io::configuration::FillSettings;
use crate::io::error::{Result, TerritoryError};

/// Selectable interior fill algorithm
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FillAlgorithm {
    /// Even-odd classification driving a breadth-first grow from the outline
    CrossingNumber,
    /// Exterior flood over hashed cells, interior is the complement
    FillFromOutside,
    /// Exterior flood over a dense raster of the bounding box
    #[default]
    FillFromOutsideOptimized,
}

/// Fill a region's interior
///
/// Returns distinct cells. With `contain_outline`, every outline cell is
/// guaranteed to be present as well; an empty outline fills nothing.
///
/// # Errors
///
/// Returns [`TerritoryError::GrowthLimitExceeded`] if the crossing-number
/// grow accepts more than `settings.max_cells` cells, or if the flood box of
/// a fill-from-outside variant covers more than `settings.max_cells` cells.
pub fn fill_inside(
    region: &ClaimedRegion,
    contain_outline: bool,
    settings: &FillSettings,
) -> Result<Vec<GridCell>> {
    let outline = region.outline();
    let (Some(bounds), Some(origin)) = (outline.bounding_box(), outline.first()) else {
        return Ok(Vec::new());
    };

    let mut filled = match settings.algorithm {
        FillAlgorithm::CrossingNumber => {
            grow_bounded(origin, |cell| is_inside(region, &cell), settings.max_cells)?
        }
        FillAlgorithm::FillFromOutside => {
            fill_from_outside(region, bounds, origin.plane, settings.max_cells)?
        }
        FillAlgorithm::FillFromOutsideOptimized => {
            fill_from_outside_raster(region, bounds, origin.plane, settings.max_cells)?
        }
    };

    if contain_outline {
        let mut present: HashSet<GridCell> = filled.iter().copied().collect();
        for cell in outline {
            if present.insert(*cell) {
                filled.push(*cell);
            }
        }
    }

    debug!(
        algorithm = ?settings.algorithm,
        outline = outline.len(),
        filled = filled.len(),
        "filled region interior"
    );

    Ok(filled)
}

/// Bounding box expanded by one, refused when it holds more than `max_cells`
fn flood_box(bounds: BoundingBox, max_cells: usize) -> Result<BoundingBox> {
    let outer = bounds.expanded(1);
    if outer.area() > u64::try_from(max_cells).unwrap_or(u64::MAX) {
        return Err(TerritoryError::GrowthLimitExceeded { limit: max_cells });
    }
    Ok(outer)
}

fn fill_from_outside(
    region: &ClaimedRegion,
    bounds: BoundingBox,
    plane: i32,
    max_cells: usize,
) -> Result<Vec<GridCell>> {
    let outer = flood_box(bounds, max_cells)?;
    let walls: HashSet<GridCell> = region
        .outline()
        .iter()
        .map(|c| GridCell::new(c.x, c.z, plane))
        .collect();
    let seed = GridCell::new(outer.x_min, outer.z_min, plane);

    let exterior: HashSet<GridCell> = grow_bounded(
        seed,
        |cell| outer.contains(cell.x, cell.z) && !walls.contains(&cell),
        max_cells,
    )?
    .into_iter()
    .collect();

    Ok((bounds.z_min..=bounds.z_max)
        .flat_map(|z| (bounds.x_min..=bounds.x_max).map(move |x| GridCell::new(x, z, plane)))
        .filter(|cell| !exterior.contains(cell))
        .collect())
}

fn fill_from_outside_raster(
    region: &ClaimedRegion,
    bounds: BoundingBox,
    plane: i32,
    max_cells: usize,
) -> Result<Vec<GridCell>> {
    let outer = flood_box(bounds, max_cells)?;
    let rows = outer.z_size() as usize;
    let cols = outer.x_size() as usize;

    let mut walls = Array2::<bool>::from_elem((rows, cols), false);
    for cell in region.outline() {
        let index = (
            (i64::from(cell.z) - i64::from(outer.z_min)) as usize,
            (i64::from(cell.x) - i64::from(outer.x_min)) as usize,
        );
        if let Some(wall) = walls.get_mut(index) {
            *wall = true;
        }
    }

    let mut exterior = bitvec![0; rows * cols];
    let mut queue = VecDeque::from([(0_usize, 0_usize)]);
    exterior.set(0, true);

    while let Some((row, col)) = queue.pop_front() {
        let neighbors = [
            row.checked_sub(1).map(|r| (r, col)),
            (row + 1 < rows).then_some((row + 1, col)),
            col.checked_sub(1).map(|c| (row, c)),
            (col + 1 < cols).then_some((row, col + 1)),
        ];
        for (r, c) in neighbors.into_iter().flatten() {
            let flat = r * cols + c;
            let blocked = walls.get((r, c)).copied().unwrap_or(true);
            let visited = exterior.get(flat).as_deref() == Some(&true);
            if !blocked && !visited {
                exterior.set(flat, true);
                queue.push_back((r, c));
            }
        }
    }

    let mut filled = Vec::new();
    for row in 1..rows - 1 {
        for col in 1..cols - 1 {
            if exterior.get(row * cols + col).as_deref() != Some(&true) {
                filled.push(GridCell::new(
                    outer.x_min + col as i32,
                    outer.z_min + row as i32,
                    plane,
                ));
            }
        }
    }
    Ok(filled)
}
