//! Border marker detection along tile edges
//!
//! The true image is surrounded by a one-tile-wide synthetic filler ring
//! whose tiles carry a near-black marker line along at least one edge.
//! Detecting that marker lets the assembler exclude filler tiles before
//! compositing.

use crate::io::configuration::BORDER_CHANNEL_MAX;
use crate::io::image::PixelBuffer;
use crate::spatial::tile::BorderFlags;

/// Whether a single pixel qualifies as a border marker
///
/// A marker pixel is visible (alpha above zero) and near-black in all
/// three color channels.
pub const fn is_marker_pixel(rgba: [u8; 4]) -> bool {
    let [r, g, b, a] = rgba;
    a > 0 && r < BORDER_CHANNEL_MAX && g < BORDER_CHANNEL_MAX && b < BORDER_CHANNEL_MAX
}

/// Inspect all four edges of a tile for border markers
///
/// Each edge is flagged independently when any pixel along it qualifies
/// as a marker; a single matching pixel is sufficient, and no continuity
/// is required. Empty buffers report no borders.
pub fn classify_borders(pixels: &impl PixelBuffer) -> BorderFlags {
    let width = pixels.width();
    let height = pixels.height();

    let mut flags = BorderFlags::default();
    if width == 0 || height == 0 {
        return flags;
    }

    for y in 0..height {
        flags.left |= is_marker_pixel(pixels.pixel(0, y));
        flags.right |= is_marker_pixel(pixels.pixel(width - 1, y));
    }

    for x in 0..width {
        flags.top |= is_marker_pixel(pixels.pixel(x, 0));
        flags.bottom |= is_marker_pixel(pixels.pixel(x, height - 1));
    }

    flags
}
