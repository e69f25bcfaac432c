//! Claim lifecycle: one current region, superseded by each successful closing
//!
//! The occupancy oracle is read many times per submission and must describe a
//! stable snapshot of the world for the duration of the call.

use std::collections::HashSet;

use tracing::{debug, error};

use crate::algorithm::closing::fill_closed;
use crate::algorithm::growth::extract_outline_bounded;
use crate::geometry::{ClaimedRegion, GridCell, Path};
use crate::io::configuration::FillSettings;
use crate::io::error::Result;

/// Read-only view of live claimed/unclaimed status
pub trait OccupancyOracle {
    /// Check if a cell is currently claimed
    fn occupied(&self, cell: GridCell) -> bool;
}

impl OccupancyOracle for HashSet<GridCell> {
    fn occupied(&self, cell: GridCell) -> bool {
        self.contains(&cell)
    }
}

/// Adapter turning a closure into an [`OccupancyOracle`]
pub struct FnOracle<F>(pub F);

impl<F: Fn(GridCell) -> bool> OccupancyOracle for FnOracle<F> {
    fn occupied(&self, cell: GridCell) -> bool {
        (self.0)(cell)
    }
}

/// A player's current claimed region and the settings used to extend it
#[derive(Clone, Debug)]
pub struct ClaimSession {
    region: ClaimedRegion,
    settings: FillSettings,
}

impl ClaimSession {
    /// Start a session from an existing region
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the settings do not validate
    pub fn new(region: ClaimedRegion, settings: FillSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { region, settings })
    }

    /// Start a session from the occupied blob containing `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if the settings do not validate or the blob exceeds
    /// the growth ceiling.
    pub fn from_oracle(
        seed: GridCell,
        oracle: &impl OccupancyOracle,
        settings: FillSettings,
    ) -> Result<Self> {
        settings.validate()?;
        let region =
            extract_outline_bounded(seed, |cell| oracle.occupied(cell), settings.max_cells)?;
        Ok(Self { region, settings })
    }

    /// The current region
    pub const fn region(&self) -> &ClaimedRegion {
        &self.region
    }

    /// The fill settings in use
    pub const fn settings(&self) -> &FillSettings {
        &self.settings
    }

    /// Submit a drawn path anchored at `start` and `end` on the current outline
    ///
    /// On success returns the newly claimed cells and replaces the current
    /// region with the outline of the enlarged territory. A rejected attempt
    /// returns `Ok(None)`. On error the current region is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if closing hits an internal inconsistency or a growth
    /// pass exceeds the configured ceiling.
    pub fn submit(
        &mut self,
        path: &Path,
        start: GridCell,
        end: GridCell,
        oracle: &impl OccupancyOracle,
    ) -> Result<Option<Vec<GridCell>>> {
        match self.attempt(path, start, end, oracle) {
            Ok(Some((claimed, region))) => {
                debug!(
                    claimed = claimed.len(),
                    outline = region.outline().len(),
                    "region superseded"
                );
                self.region = region;
                Ok(Some(claimed))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                error!(error = %e, "claim aborted, keeping previous region");
                Err(e)
            }
        }
    }

    fn attempt(
        &self,
        path: &Path,
        start: GridCell,
        end: GridCell,
        oracle: &impl OccupancyOracle,
    ) -> Result<Option<(Vec<GridCell>, ClaimedRegion)>> {
        let Some(claimed) = fill_closed(&self.region, path, start, end, &self.settings)? else {
            return Ok(None);
        };

        let fresh: HashSet<GridCell> = claimed.iter().copied().collect();
        let region = extract_outline_bounded(
            start,
            |cell| fresh.contains(&cell) || oracle.occupied(cell),
            self.settings.max_cells,
        )?;

        Ok(Some((claimed, region)))
    }
}
