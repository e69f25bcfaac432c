//! Occupancy maps from PNG images and rendering of claim results
//!
//! Pixel column maps to cell `x`, pixel row to cell `z`.

use std::collections::HashSet;
use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::geometry::GridCell;
use crate::io::configuration::{
    BACKGROUND_COLOR, CLAIMED_COLOR, OCCUPIED_ALPHA_THRESHOLD, TERRITORY_COLOR,
};
use crate::io::error::{Result, TerritoryError};

/// Occupancy map loaded from an image
#[derive(Debug, Clone)]
pub struct OccupancyMap {
    /// Image width in cells
    pub width: u32,
    /// Image height in cells
    pub height: u32,
    /// Claimed cells
    pub occupied: HashSet<GridCell>,
}

/// Load the claimed cells of an occupancy image
///
/// Pixels with alpha at or above the occupancy threshold are claimed.
///
/// # Errors
///
/// Returns an error if the image cannot be opened or decoded
pub fn load_occupancy(path: &Path, plane: i32) -> Result<OccupancyMap> {
    let img = image::open(path).map_err(|e| TerritoryError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    let occupied = rgba_img
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel[3] >= OCCUPIED_ALPHA_THRESHOLD)
        .map(|(x, y, _)| GridCell::new(x as i32, y as i32, plane))
        .collect();

    Ok(OccupancyMap {
        width,
        height,
        occupied,
    })
}

/// Render existing territory and newly claimed cells as a PNG
///
/// Cells outside `width` x `height` are clipped. Newly claimed cells are drawn
/// over territory.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn render_claims(
    width: u32,
    height: u32,
    territory: &HashSet<GridCell>,
    claimed: &[GridCell],
    output_path: &Path,
) -> Result<()> {
    let mut img = ImageBuffer::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

    let layers = territory
        .iter()
        .map(|cell| (cell, TERRITORY_COLOR))
        .chain(claimed.iter().map(|cell| (cell, CLAIMED_COLOR)));
    for (cell, color) in layers {
        let (Ok(x), Ok(y)) = (u32::try_from(cell.x), u32::try_from(cell.z)) else {
            continue;
        };
        if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
            *pixel = Rgba(color);
        }
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TerritoryError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| TerritoryError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
