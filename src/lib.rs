//! Composite image reconstruction from individually served square tiles
//!
//! The system acquires equally-sized tiles by sequential index, detects
//! synthetic border markers that identify filler tiles, and composites the
//! remaining tiles onto a single output canvas under a configurable
//! placement policy.

#![forbid(unsafe_code)]

/// Tile acquisition via cache-or-fetch with PNG decoding
pub mod acquire;
/// Reconstruction pipeline and canvas compositing
pub mod algorithm;
/// Pixel-level heuristics: border detection, histograms, similarity scoring
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Tile data model and grid placement geometry
pub mod spatial;

pub use io::error::{Result, StitchError};
