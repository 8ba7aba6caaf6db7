//! Reconstruction pipeline and canvas compositing

/// Deterministic tile compositing onto the output canvas
pub mod assembler;
/// Acquisition loop, policy selection, and pipeline orchestration
pub mod executor;

pub use executor::{Reconstruction, ReconstructionConfig};
