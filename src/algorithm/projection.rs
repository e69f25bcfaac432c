//! Boundary projection: thickening a drawn trace outward by one cell
//!
//! From each cardinal side, every line crossing the path's bounding box is
//! scanned inward from just outside the box until it meets the path; the cell
//! immediately before the hit is emitted. This bridges single-cell gaps in a
//! free-hand trace before it is spliced with an existing boundary.

use crate::geometry::{GridCell, Path};

/// Cardinal side a projection scans from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Scan along z, starting past `z_max` and moving down
    North,
    /// Scan along z, starting before `z_min` and moving up
    South,
    /// Scan along x, starting before `x_min` and moving up
    East,
    /// Scan along x, starting past `x_max` and moving down
    West,
}

impl Direction {
    /// Projection order used by [`project_all`]
    pub const ALL: [Self; 4] = [Self::East, Self::West, Self::North, Self::South];

    /// Whether the scan advances along the x axis
    const fn scans_x(self) -> bool {
        matches!(self, Self::East | Self::West)
    }

    /// Step taken per scan iteration; the emitted cell sits one step back
    const fn step(self) -> i32 {
        match self {
            Self::South | Self::East => 1,
            Self::North | Self::West => -1,
        }
    }
}

/// Project a path from all four sides into one combined path
///
/// Results are concatenated in [`Direction::ALL`] order; duplicates are kept.
pub fn project_all(path: &Path) -> Path {
    Direction::ALL
        .iter()
        .flat_map(|&direction| project(path, direction))
        .collect()
}

/// Project a path from one side
///
/// Empty when the path is empty. A scan line that never meets the path
/// contributes nothing.
pub fn project(path: &Path, direction: Direction) -> Vec<GridCell> {
    let (Some(bounds), Some(origin)) = (path.bounding_box(), path.first()) else {
        return Vec::new();
    };

    let step = direction.step();
    let (across, along) = if direction.scans_x() {
        ((bounds.z_min, bounds.z_max), (bounds.x_min, bounds.x_max))
    } else {
        ((bounds.x_min, bounds.x_max), (bounds.z_min, bounds.z_max))
    };
    let (start, end) = if step > 0 {
        (along.0.saturating_sub(1), along.1)
    } else {
        (along.1.saturating_add(1), along.0)
    };
    let to_xz = |line: i32, scan: i32| {
        if direction.scans_x() {
            (scan, line)
        } else {
            (line, scan)
        }
    };

    (across.0..=across.1)
        .filter_map(|line| {
            let mut scan = start;
            loop {
                let (x, z) = to_xz(line, scan);
                if path.cell_at(x, z).is_some() {
                    let (ex, ez) = to_xz(line, scan.saturating_sub(step));
                    return Some(GridCell::new(ex, ez, origin.plane));
                }
                if scan == end {
                    return None;
                }
                scan += step;
            }
        })
        .collect()
}
