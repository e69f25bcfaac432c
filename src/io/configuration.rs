//! Engine constants and runtime fill settings

use crate::algorithm::strategy::FillAlgorithm;
use crate::io::error::{Result, invalid_parameter};

// Guard against predicates without a bounded perimeter
/// Default ceiling on cells accepted by a single growth pass
pub const DEFAULT_MAX_GROWTH_CELLS: usize = 1_000_000;

/// Fill algorithm used when none is configured
pub const DEFAULT_FILL_ALGORITHM: FillAlgorithm = FillAlgorithm::FillFromOutsideOptimized;

/// Largest horizontal coordinate magnitude accepted from world positions
pub const MAX_WORLD_COORDINATE: i32 = 30_000_000;

/// Elevation plane assigned to cells loaded from occupancy images
pub const DEFAULT_PLANE: i32 = 0;

/// Alpha value from which an occupancy image pixel counts as claimed
pub const OCCUPIED_ALPHA_THRESHOLD: u8 = 128;

// Rendering colours (RGBA)
/// Colour of previously claimed territory
pub const TERRITORY_COLOR: [u8; 4] = [52, 101, 164, 255];
/// Colour of newly claimed cells
pub const CLAIMED_COLOR: [u8; 4] = [239, 41, 41, 255];
/// Colour of unclaimed cells
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_claimed";

/// Settings consumed by the closing and fill pipeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillSettings {
    /// Interior fill algorithm
    pub algorithm: FillAlgorithm,
    /// Ceiling on cells accepted by any growth pass
    pub max_cells: usize,
}

impl Default for FillSettings {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_FILL_ALGORITHM,
            max_cells: DEFAULT_MAX_GROWTH_CELLS,
        }
    }
}

impl FillSettings {
    /// Settings with the given algorithm and default ceiling
    pub fn with_algorithm(algorithm: FillAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Check the settings are usable
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `max_cells` is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_cells == 0 {
            return Err(invalid_parameter(
                "max_cells",
                &self.max_cells,
                &"growth ceiling must be at least one cell",
            ));
        }
        Ok(())
    }
}
