//! Command-line interface and reconstruction driver

use crate::acquire::acquirer::TileAcquirer;
use crate::acquire::cache::DiskCache;
use crate::acquire::source::HttpTileSource;
use crate::algorithm::executor::{Reconstruction, ReconstructionConfig};
use crate::analysis::similarity::SimilarityMetric;
use crate::io::configuration::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_DIR, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, DEFAULT_OUTPUT,
    DEFAULT_TILE_COUNT,
};
use crate::io::error::{Result, StitchError};
use crate::io::image::export_canvas_as_png;
use crate::io::progress::ProgressManager;
use crate::spatial::grid::PlacementPolicy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Placement policy choices exposed on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Place tiles in index order at full tile size
    Exact,
    /// Drop border tiles and place the interior at trimmed size
    BorderTrimmed,
    /// Reorder tiles by similarity to the first tile, then place exactly
    SimilaritySorted,
}

impl From<PolicyArg> for PlacementPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Exact => Self::ExactByIndex,
            PolicyArg::BorderTrimmed => Self::BorderTrimmed,
            PolicyArg::SimilaritySorted => Self::SimilaritySorted,
        }
    }
}

/// Similarity metric choices exposed on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MetricArg {
    /// Pearson correlation of grayscale intensity histograms
    GrayCorrelation,
    /// Normalized Euclidean distance of per-channel color histograms
    ColorDistance,
}

impl From<MetricArg> for SimilarityMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::GrayCorrelation => Self::GrayscaleCorrelation,
            MetricArg::ColorDistance => Self::ColorDistance,
        }
    }
}

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reconstruct a composite image from indexed square tiles"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Base URL serving tiles as ({index}).png
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory caching downloaded tiles
    #[arg(short, long, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Output path for the assembled image
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of tiles to acquire, starting at index 1
    #[arg(short = 'n', long, default_value_t = DEFAULT_TILE_COUNT)]
    pub tiles: u32,

    /// Columns in the source grid
    #[arg(long, default_value_t = DEFAULT_GRID_COLUMNS)]
    pub columns: u32,

    /// Rows in the source grid
    #[arg(long, default_value_t = DEFAULT_GRID_ROWS)]
    pub rows: u32,

    /// Placement policy
    #[arg(short, long, value_enum, default_value = "border-trimmed")]
    pub policy: PolicyArg,

    /// Similarity metric for similarity-sorted placement
    #[arg(short, long, value_enum, default_value = "gray-correlation")]
    pub metric: MetricArg,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Wait for Enter after saving the result
    #[arg(short, long)]
    pub wait: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one reconstruction run with progress tracking
pub struct ReconstructionDriver {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ReconstructionDriver {
    /// Create a driver from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Acquire, reconstruct, and export according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if any tile is unavailable, the grid invariants
    /// are violated, or the result cannot be written. No partial output
    /// file is produced on failure.
    pub fn run(&mut self) -> Result<()> {
        let source = HttpTileSource::new(self.cli.base_url.clone())?;
        let cache = DiskCache::new(self.cli.cache_dir.clone());
        let acquirer = TileAcquirer::new(source, cache);

        let config = ReconstructionConfig {
            columns: self.cli.columns,
            rows: self.cli.rows,
            first_index: 1,
            tile_count: self.cli.tiles,
            policy: self.cli.policy.into(),
            metric: self.cli.metric.into(),
        };

        let mut reconstruction = Reconstruction::new(acquirer, config)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_acquisition(reconstruction.total_tiles());
        }

        while let Some(step) = reconstruction.acquire_next()? {
            if let Some(ref pm) = self.progress_manager {
                pm.tile_acquired(step.index, step.from_cache);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.stage("Acquisition complete. Starting image reconstruction...");
        }

        let canvas = reconstruction.finish()?;
        export_canvas_as_png(&canvas, &self.cli.output)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish(format!("Result saved to {}", self.cli.output.display()));
        }

        if self.cli.wait {
            Self::wait_for_acknowledgment()?;
        }

        Ok(())
    }

    // Allow print for the interactive exit prompt
    #[allow(clippy::print_stderr)]
    fn wait_for_acknowledgment() -> Result<()> {
        eprintln!("Press Enter to exit.");
        let mut line = String::new();
        std::io::stdin()
            .read_line(&mut line)
            .map_err(|e| StitchError::FileSystem {
                path: PathBuf::from("<stdin>"),
                operation: "read acknowledgment",
                source: e,
            })?;
        Ok(())
    }
}
