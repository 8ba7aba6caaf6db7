//! Acquisition loop, policy selection, and pipeline orchestration
//!
//! One configurable pipeline covers all placement variants: acquire every
//! index in order, verify the shared-dimension invariant, classify or
//! reorder as the policy requires, then composite. All tiles are acquired
//! before any canvas write occurs.

use crate::acquire::acquirer::TileAcquirer;
use crate::acquire::source::TileSource;
use crate::algorithm::assembler::assemble;
use crate::analysis::classifier::classify_borders;
use crate::analysis::similarity::{SimilarityMetric, SimilarityScorer};
use crate::io::configuration::{
    BORDER_TRIM, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, DEFAULT_TILE_COUNT,
};
use crate::io::error::{Result, StitchError, invalid_parameter};
use crate::spatial::grid::{GridSpec, PlacementPolicy};
use crate::spatial::tile::Tile;
use image::RgbaImage;
use std::cmp::Ordering;

/// Parameters for one reconstruction run
#[derive(Debug, Clone, Copy)]
pub struct ReconstructionConfig {
    /// Columns in the full source grid
    pub columns: u32,
    /// Rows in the full source grid
    pub rows: u32,
    /// First tile index to acquire (indices are 1-based)
    pub first_index: u32,
    /// Number of consecutive tiles to acquire
    pub tile_count: u32,
    /// Rule mapping sequence positions to canvas offsets
    pub policy: PlacementPolicy,
    /// Metric used when the policy orders tiles by similarity
    pub metric: SimilarityMetric,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_COLUMNS,
            rows: DEFAULT_GRID_ROWS,
            first_index: 1,
            tile_count: DEFAULT_TILE_COUNT,
            policy: PlacementPolicy::default(),
            metric: SimilarityMetric::default(),
        }
    }
}

/// Outcome of acquiring one tile, reported to the driver for progress
#[derive(Debug, Clone, Copy)]
pub struct AcquisitionStep {
    /// Index of the tile that was just acquired
    pub index: u32,
    /// Whether the tile bytes came from the local cache
    pub from_cache: bool,
}

/// Drives one reconstruction run from acquisition to the final canvas
pub struct Reconstruction<S: TileSource> {
    acquirer: TileAcquirer<S>,
    config: ReconstructionConfig,
    tiles: Vec<Tile>,
    next_index: u32,
}

impl<S: TileSource> Reconstruction<S> {
    /// Create a run after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the tile count is zero, exceeds the grid
    /// capacity, or the index range would overflow.
    pub fn new(acquirer: TileAcquirer<S>, config: ReconstructionConfig) -> Result<Self> {
        if config.tile_count == 0 {
            return Err(invalid_parameter(
                "tile count",
                &config.tile_count,
                &"at least one tile is required",
            ));
        }

        let capacity = config.columns as u64 * config.rows as u64;
        if u64::from(config.tile_count) > capacity {
            return Err(invalid_parameter(
                "tile count",
                &config.tile_count,
                &format!("exceeds the {}x{} grid capacity", config.columns, config.rows),
            ));
        }

        if config.first_index == 0 {
            return Err(invalid_parameter(
                "first index",
                &config.first_index,
                &"tile indices are 1-based",
            ));
        }
        if config.first_index.checked_add(config.tile_count - 1).is_none() {
            return Err(invalid_parameter(
                "first index",
                &config.first_index,
                &"index range overflows",
            ));
        }

        Ok(Self {
            acquirer,
            config,
            tiles: Vec::with_capacity(config.tile_count as usize),
            next_index: config.first_index,
        })
    }

    /// Number of tiles this run will acquire
    pub const fn total_tiles(&self) -> u32 {
        self.config.tile_count
    }

    /// Acquire the next tile in index order
    ///
    /// Returns `None` once every index has been acquired. Acquisition is
    /// strictly sequential; a failed tile aborts the run with no retry.
    ///
    /// # Errors
    ///
    /// Propagates acquisition failures and rejects tiles whose
    /// dimensions differ from the first acquired tile.
    pub fn acquire_next(&mut self) -> Result<Option<AcquisitionStep>> {
        let last_index = self.config.first_index + (self.config.tile_count - 1);
        if self.next_index > last_index {
            return Ok(None);
        }

        let index = self.next_index;
        let from_cache = self.acquirer.cache().contains(index);
        let tile = self.acquirer.acquire(index)?;

        if let Some(first) = self.tiles.first() {
            let expected = first.dimensions();
            let actual = tile.dimensions();
            if expected != actual {
                return Err(StitchError::DimensionMismatch {
                    index,
                    expected,
                    actual,
                });
            }
        }

        self.tiles.push(tile);
        self.next_index = index + 1;
        Ok(Some(AcquisitionStep { index, from_cache }))
    }

    /// Classify, order, and composite the acquired tiles
    ///
    /// Consumes the run; the canvas is freshly allocated and handed to
    /// the caller for encoding.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTileSet` when nothing was acquired or border
    /// filtering removed every tile, and propagates grid validation
    /// failures.
    pub fn finish(mut self) -> Result<RgbaImage> {
        let first = self.tiles.first().ok_or(StitchError::EmptyTileSet)?;
        let (tile_width, tile_height) = first.dimensions();
        let grid = GridSpec::new(self.config.columns, self.config.rows, tile_width, tile_height)?;

        match self.config.policy {
            PlacementPolicy::ExactByIndex => assemble(&self.tiles, &grid),
            PlacementPolicy::BorderTrimmed => {
                for tile in &mut self.tiles {
                    tile.border = Some(classify_borders(&tile.pixels));
                }
                let interior: Vec<Tile> = self
                    .tiles
                    .into_iter()
                    .filter(|tile| !tile.is_border())
                    .collect();
                let interior_grid = grid.trimmed(BORDER_TRIM)?;
                assemble(&interior, &interior_grid)
            }
            PlacementPolicy::SimilaritySorted => {
                let scorer = SimilarityScorer::new(self.config.metric, &first.pixels);
                let mut keyed: Vec<(f64, Tile)> = self
                    .tiles
                    .into_iter()
                    .map(|tile| (scorer.key(&tile.pixels), tile))
                    .collect();
                // Stable sort keeps index order between equal keys
                keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
                let ordered: Vec<Tile> = keyed.into_iter().map(|(_, tile)| tile).collect();
                assemble(&ordered, &grid)
            }
        }
    }
}
