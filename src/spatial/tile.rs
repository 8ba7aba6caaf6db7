//! Acquired tile with derived border annotations

use image::RgbaImage;

/// Presence of a synthetic border marker on each tile edge
///
/// Edges are independent; a tile may have zero to four edges flagged.
/// A tile with any edge flagged belongs to the filler ring surrounding
/// the reconstructed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderFlags {
    /// Marker present on the left edge
    pub left: bool,
    /// Marker present on the right edge
    pub right: bool,
    /// Marker present on the top edge
    pub top: bool,
    /// Marker present on the bottom edge
    pub bottom: bool,
}

impl BorderFlags {
    /// Whether any edge carries a border marker
    pub const fn any(self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// One acquired square image fragment identified by a sequential index
///
/// All tiles in a reconstruction share identical dimensions; the pipeline
/// rejects any tile whose size differs from the first acquired tile.
pub struct Tile {
    /// 1-based index assigned by the tile source
    pub index: u32,
    /// Decoded RGBA8 pixel data
    pub pixels: RgbaImage,
    /// Border annotations, unset until classification runs
    pub border: Option<BorderFlags>,
}

impl Tile {
    /// Create an unclassified tile from decoded pixels
    pub const fn new(index: u32, pixels: RgbaImage) -> Self {
        Self {
            index,
            pixels,
            border: None,
        }
    }

    /// Tile dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Whether classification flagged any edge of this tile
    ///
    /// Unclassified tiles report `false`.
    pub fn is_border(&self) -> bool {
        self.border.is_some_and(BorderFlags::any)
    }
}
