//! Reconstruction constants and runtime configuration defaults

/// Base URL serving individual tiles as `({index}).png`
pub const DEFAULT_BASE_URL: &str =
    "https://inversionrecruitment.blob.core.windows.net/find-the-code/";

/// Directory used to cache downloaded tiles
pub const DEFAULT_CACHE_DIR: &str = "DownloadedImages";

/// Output path for the assembled canvas
pub const DEFAULT_OUTPUT: &str = "result.png";

// The source grid is a 40x30 row-major layout of 1200 tiles
/// Total number of tiles served by the source
pub const DEFAULT_TILE_COUNT: u32 = 1200;
/// Columns in the full source grid
pub const DEFAULT_GRID_COLUMNS: u32 = 40;
/// Rows in the full source grid
pub const DEFAULT_GRID_ROWS: u32 = 30;

/// Channel value below which a pixel counts as border-marker black
pub const BORDER_CHANNEL_MAX: u8 = 30;

/// Width in pixels of the synthetic marker ring on each flagged edge
pub const BORDER_RING_WIDTH: u32 = 1;

/// Margin subtracted from each tile dimension under border-trimmed placement
///
/// One marker pixel on each side of the tile.
pub const BORDER_TRIM: u32 = 2 * BORDER_RING_WIDTH;

/// Bins in a single-channel intensity histogram
pub const GRAY_HISTOGRAM_BINS: usize = 256;

/// Bins in a concatenated R,G,B histogram
pub const COLOR_HISTOGRAM_BINS: usize = 3 * GRAY_HISTOGRAM_BINS;
