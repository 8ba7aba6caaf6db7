//! Pixel-level heuristics for tile annotation and ordering

/// Border marker detection along tile edges
pub mod classifier;
/// Intensity and per-channel color histograms
pub mod histogram;
/// Similarity scoring between a candidate tile and a reference tile
pub mod similarity;

pub use similarity::{SimilarityMetric, SimilarityScorer};
