//! Territory painting engine for grid-based claim mechanics
//!
//! Players trace a path of cells; the engine decides whether that path closes
//! off a new region against previously claimed territory and, if so, computes
//! exactly which cells become newly claimed.

#![forbid(unsafe_code)]

/// Projection, closing, classification, growth and fill algorithms
pub mod algorithm;
/// Grid cells, paths and claimed regions
pub mod geometry;
/// Configuration, error handling, image boundary and CLI
pub mod io;

pub use io::error::{Result, TerritoryError};
