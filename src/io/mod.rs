/// Command-line driver
pub mod cli;
/// Engine constants and fill settings
pub mod configuration;
/// Error types
pub mod error;
/// Occupancy image loading and claim rendering
pub mod image;
