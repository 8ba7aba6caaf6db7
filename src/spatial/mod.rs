//! Tile data model and grid placement geometry

/// Row-major grid layout and placement policies
pub mod grid;
/// Acquired tile with derived border annotations
pub mod tile;

pub use grid::{GridSpec, PlacementPolicy};
pub use tile::{BorderFlags, Tile};
