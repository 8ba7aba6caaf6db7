//! Row-major grid layout and placement policies

use crate::io::error::{Result, invalid_parameter};

/// Rule mapping a tile's position in an ordered sequence to a canvas offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPolicy {
    /// Tiles are consumed in index order and tiled edge to edge
    #[default]
    ExactByIndex,
    /// Border tiles are removed and the remainder tiled at trimmed size
    BorderTrimmed,
    /// Tiles are reordered by visual similarity before exact tiling
    SimilaritySorted,
}

/// Logical row-major arrangement of tiles into a rectangular layout
///
/// `tile_width`/`tile_height` are the *effective* dimensions used for
/// placement math; under border-trimmed placement they are smaller than
/// the physical tile so adjacent tiles abut without duplicated marker
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of grid columns
    pub columns: u32,
    /// Number of grid rows
    pub rows: u32,
    /// Effective tile width used for offsets
    pub tile_width: u32,
    /// Effective tile height used for offsets
    pub tile_height: u32,
}

impl GridSpec {
    /// Create a grid layout, validating its dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is zero.
    pub fn new(columns: u32, rows: u32, tile_width: u32, tile_height: u32) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(invalid_parameter(
                "grid",
                &format!("{columns}x{rows}"),
                &"grid must have at least one column and one row",
            ));
        }
        if tile_width == 0 || tile_height == 0 {
            return Err(invalid_parameter(
                "tile size",
                &format!("{tile_width}x{tile_height}"),
                &"effective tile dimensions must be non-zero",
            ));
        }
        Ok(Self {
            columns,
            rows,
            tile_width,
            tile_height,
        })
    }

    /// Derive the interior grid left after removing the one-tile filler ring
    ///
    /// Shrinks the layout by one column on each side and one row at top and
    /// bottom, and shrinks the effective tile size by `trim` pixels in each
    /// dimension (the marker ring pixels shared between neighbors).
    ///
    /// # Errors
    ///
    /// Returns an error if the grid or the tiles are too small to trim.
    pub fn trimmed(&self, trim: u32) -> Result<Self> {
        if self.columns <= 2 || self.rows <= 2 {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", self.columns, self.rows),
                &"grid has no interior after removing the border ring",
            ));
        }
        if self.tile_width <= trim || self.tile_height <= trim {
            return Err(invalid_parameter(
                "tile size",
                &format!("{}x{}", self.tile_width, self.tile_height),
                &format!("tiles are too small to trim {trim} pixels"),
            ));
        }
        Self::new(
            self.columns - 2,
            self.rows - 2,
            self.tile_width - trim,
            self.tile_height - trim,
        )
    }

    /// Maximum number of tiles this layout can place
    pub const fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Grid cell (column, row) for the tile at 0-based sequence position
    pub const fn cell(&self, position: usize) -> (u32, u32) {
        let col = (position % self.columns as usize) as u32;
        let row = (position / self.columns as usize) as u32;
        (col, row)
    }

    /// Canvas pixel offset for the tile at 0-based sequence position
    pub const fn offset(&self, position: usize) -> (u32, u32) {
        let (col, row) = self.cell(position);
        (col * self.tile_width, row * self.tile_height)
    }

    /// Full canvas dimensions in pixels as (width, height)
    pub const fn canvas_dimensions(&self) -> (u32, u32) {
        (self.columns * self.tile_width, self.rows * self.tile_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_cells() {
        let grid = GridSpec::new(4, 3, 10, 10).unwrap();
        assert_eq!(grid.cell(0), (0, 0));
        assert_eq!(grid.cell(3), (3, 0));
        assert_eq!(grid.cell(4), (0, 1));
        assert_eq!(grid.cell(11), (3, 2));
    }

    #[test]
    fn test_trimmed_grid_loses_ring_and_margins() {
        let grid = GridSpec::new(40, 30, 64, 64).unwrap();
        let interior = grid.trimmed(2).unwrap();
        assert_eq!(interior.columns, 38);
        assert_eq!(interior.rows, 28);
        assert_eq!(interior.tile_width, 62);
        assert_eq!(interior.tile_height, 62);
    }

    #[test]
    fn test_trim_rejects_degenerate_grids() {
        let grid = GridSpec::new(2, 30, 64, 64).unwrap();
        assert!(grid.trimmed(2).is_err());

        let tiny_tiles = GridSpec::new(40, 30, 2, 2).unwrap();
        assert!(tiny_tiles.trimmed(2).is_err());
    }
}
