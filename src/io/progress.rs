//! Acquisition and assembly progress reporting

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static ACQUISITION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Tiles: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for one reconstruction run
///
/// Shows a single bar across the acquisition loop, then a spinner-free
/// message for the assembly and export stages.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Start the acquisition bar sized to the tile count
    pub fn start_acquisition(&mut self, tile_count: u32) {
        let bar = ProgressBar::new(u64::from(tile_count));
        bar.set_style(ACQUISITION_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Report one acquired tile and whether it came from the cache
    pub fn tile_acquired(&self, index: u32, from_cache: bool) {
        if let Some(ref bar) = self.bar {
            let origin = if from_cache { "cache" } else { "download" };
            bar.set_message(format!("{index} ({origin})"));
            bar.inc(1);
        }
    }

    /// Announce a pipeline stage after acquisition completes
    pub fn stage(&self, message: &'static str) {
        if let Some(ref bar) = self.bar {
            bar.println(message);
        }
    }

    /// Finish the bar with a closing message
    pub fn finish(&mut self, message: String) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(message);
        }
    }
}
