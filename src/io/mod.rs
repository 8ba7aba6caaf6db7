//! Input/output operations and error handling
//!
//! This module contains I/O-related functionality including:
//! - Command-line interface and the reconstruction driver
//! - Pixel buffer capability, PNG decode, and canvas export
//! - Progress reporting and error types

/// Command-line interface and reconstruction driver
pub mod cli;
/// Reconstruction constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Pixel buffer capability, PNG decoding, and canvas export
pub mod image;
/// Acquisition and assembly progress reporting
pub mod progress;
