//! Closing a drawn path against an existing region
//!
//! The path is thickened by boundary projection and spliced with the arc of
//! the region's outline between the two attachment cells, giving a loop whose
//! interior is the newly enclosed territory.
//!
//! The arc is taken in stored index order between `start` and `end`. On a
//! non-convex or self-overlapping outline that may be the wrong side of the
//! region; picking the arc geometrically relative to the drawn path is still
//! open.

use tracing::debug;

use crate::algorithm::projection::project_all;
use crate::algorithm::strategy::fill_inside;
use crate::geometry::{ClaimedRegion, GridCell, Path};
use crate::io::configuration::FillSettings;
use crate::io::error::{Result, internal_inconsistency};

/// Why a closing attempt was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The drawn path has no cells
    EmptyPath,
    /// A path endpoint does not touch the outline
    PathDetached,
    /// `start` or `end` is not on the outline
    AnchorOffOutline,
    /// `start` or `end` has no outline cell among its eight neighbours
    AnchorIsolated,
}

/// Check the preconditions of [`close`]
///
/// Returns the first violated requirement, or `None` if the attempt may proceed.
pub fn check_attachment(
    region: &ClaimedRegion,
    path: &Path,
    start: GridCell,
    end: GridCell,
) -> Option<Rejection> {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Some(Rejection::EmptyPath);
    };
    if !region.is_adjacent(first) || !region.is_adjacent(last) {
        return Some(Rejection::PathDetached);
    }
    if !region.contains(&start) || !region.contains(&end) {
        return Some(Rejection::AnchorOffOutline);
    }
    if !region.is_adjacent(start) || !region.is_adjacent(end) {
        return Some(Rejection::AnchorIsolated);
    }
    None
}

/// Build the closed loop formed by a drawn path and the region's outline
///
/// Returns `Ok(None)` for a rejected attempt: an empty path, a path whose
/// endpoints do not touch the outline, or anchors that are not outline cells
/// with an outline neighbour.
///
/// # Errors
///
/// Returns an internal inconsistency error if an anchor confirmed to be on
/// the outline cannot be located in it.
pub fn close(
    region: &ClaimedRegion,
    path: &Path,
    start: GridCell,
    end: GridCell,
) -> Result<Option<Path>> {
    if let Some(rejection) = check_attachment(region, path, start, end) {
        debug!(?rejection, %start, %end, "closing attempt rejected");
        return Ok(None);
    }

    let outline = region.outline();
    let (Some(start_index), Some(end_index)) = (outline.position(&start), outline.position(&end))
    else {
        return Err(internal_inconsistency(
            "close",
            &format!("anchor {start} or {end} missing from outline"),
        ));
    };

    let from = start_index.min(end_index);
    let to = start_index.max(end_index);
    let arc = outline.cells().get(from..=to).ok_or_else(|| {
        internal_inconsistency(
            "close",
            &format!("arc {from}..={to} outside outline of length {}", outline.len()),
        )
    })?;

    let projected = project_all(path);
    debug!(
        projected = projected.len(),
        arc = arc.len(),
        "closing loop assembled"
    );

    Ok(Some(projected.concat(arc)))
}

/// Close a drawn path against a region and fill the enclosed territory
///
/// The loop's outline cells are part of the result only where the fill
/// strategy counts them as inside.
///
/// # Errors
///
/// Propagates errors from [`close`] and from the configured fill strategy.
pub fn fill_closed(
    region: &ClaimedRegion,
    path: &Path,
    start: GridCell,
    end: GridCell,
    settings: &FillSettings,
) -> Result<Option<Vec<GridCell>>> {
    let Some(closed) = close(region, path, start, end)? else {
        return Ok(None);
    };
    fill_inside(&ClaimedRegion::new(closed), false, settings).map(Some)
}
