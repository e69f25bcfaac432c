//! Breadth-first region growing and outline extraction
//!
//! Growth expands from a seed over orthogonal neighbours, evaluating the
//! occupancy predicate at most once per cell. The predicate must be false on a
//! bounded perimeter around the seed or unbounded growth never finishes; the
//! `_bounded` variants turn that case into [`TerritoryError::GrowthLimitExceeded`].

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::geometry::{ClaimedRegion, GridCell, Path};
use crate::io::error::{Result, TerritoryError};

/// Outcome of one growth pass
struct Growth {
    /// Accepted cells in discovery order
    accepted: Vec<GridCell>,
    /// Cells the predicate rejected
    rejected: HashSet<GridCell>,
}

impl Growth {
    /// Accepted cells with at least one rejected orthogonal neighbour
    fn boundary(&self) -> Vec<GridCell> {
        self.accepted
            .iter()
            .copied()
            .filter(|cell| cell.neighbors4().iter().any(|n| self.rejected.contains(n)))
            .collect()
    }
}

fn run_growth(
    seed: GridCell,
    mut predicate: impl FnMut(GridCell) -> bool,
    limit: Option<usize>,
) -> Result<Growth> {
    let mut accepted = Vec::new();
    let mut rejected = HashSet::new();
    let mut seen = HashSet::from([seed]);
    let mut queue = VecDeque::from([seed]);

    while let Some(current) = queue.pop_front() {
        if !predicate(current) {
            rejected.insert(current);
            continue;
        }

        accepted.push(current);
        if let Some(limit) = limit {
            if accepted.len() > limit {
                return Err(TerritoryError::GrowthLimitExceeded { limit });
            }
        }

        for neighbor in current.neighbors4() {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    trace!(
        seed = %seed,
        accepted = accepted.len(),
        rejected = rejected.len(),
        "region growth finished"
    );

    Ok(Growth { accepted, rejected })
}

/// Grow the predicate-true region containing `seed`
///
/// Returns distinct cells in breadth-first discovery order; empty if the seed
/// itself fails the predicate. Never returns if the true region is unbounded.
pub fn grow(seed: GridCell, predicate: impl FnMut(GridCell) -> bool) -> Vec<GridCell> {
    run_growth(seed, predicate, None)
        .map(|growth| growth.accepted)
        .unwrap_or_default()
}

/// Grow like [`grow`], aborting once more than `max_cells` cells are accepted
///
/// # Errors
///
/// Returns [`TerritoryError::GrowthLimitExceeded`] when the ceiling is passed.
pub fn grow_bounded(
    seed: GridCell,
    predicate: impl FnMut(GridCell) -> bool,
    max_cells: usize,
) -> Result<Vec<GridCell>> {
    run_growth(seed, predicate, Some(max_cells)).map(|growth| growth.accepted)
}

/// Outline of the predicate-true blob containing `seed`
///
/// Boundary cells are grown cells with at least one orthogonal neighbour
/// failing the predicate, kept in discovery order.
pub fn extract_outline(seed: GridCell, predicate: impl FnMut(GridCell) -> bool) -> ClaimedRegion {
    let outline = run_growth(seed, predicate, None)
        .map(|growth| growth.boundary())
        .unwrap_or_default();
    ClaimedRegion::new(Path::new(outline))
}

/// Outline extraction with the same ceiling as [`grow_bounded`]
///
/// # Errors
///
/// Returns [`TerritoryError::GrowthLimitExceeded`] when the ceiling is passed.
pub fn extract_outline_bounded(
    seed: GridCell,
    predicate: impl FnMut(GridCell) -> bool,
    max_cells: usize,
) -> Result<ClaimedRegion> {
    let growth = run_growth(seed, predicate, Some(max_cells))?;
    Ok(ClaimedRegion::new(Path::new(growth.boundary())))
}
