//! Grid geometry value types
//!
//! This module contains the leaf data model:
//! - Grid cells and their neighbourhoods
//! - Ordered paths with cached bounding boxes
//! - Claimed regions identified by their outline

/// Grid cell value type and neighbourhoods
pub mod cell;
/// Ordered cell sequences and bounding boxes
pub mod path;
/// Regions described by a boundary path
pub mod region;

pub use cell::GridCell;
pub use path::{BoundingBox, Path};
pub use region::ClaimedRegion;
