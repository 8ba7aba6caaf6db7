//! Intensity and per-channel color histograms
//!
//! Histograms are the only summary the similarity scorer works from, so
//! both variants preserve the pixel-count invariant: a gray histogram's
//! bins sum to the tile's pixel count, a color histogram's bins sum to
//! three times that (each pixel contributes to one bin per channel).

use crate::io::configuration::{COLOR_HISTOGRAM_BINS, GRAY_HISTOGRAM_BINS};
use crate::io::image::PixelBuffer;

/// Rec.601 luminance of an RGBA pixel, ignoring alpha
pub fn luminance(rgba: [u8; 4]) -> u8 {
    let [r, g, b, _] = rgba;
    let y = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    y.round().clamp(0.0, 255.0) as u8
}

/// 256-bin intensity histogram of a grayscale-converted tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayHistogram {
    bins: Vec<u64>,
}

impl GrayHistogram {
    /// Build the histogram by converting every pixel to luminance
    pub fn from_pixels(pixels: &impl PixelBuffer) -> Self {
        let mut bins = vec![0_u64; GRAY_HISTOGRAM_BINS];
        for y in 0..pixels.height() {
            for x in 0..pixels.width() {
                let bin = luminance(pixels.pixel(x, y)) as usize;
                if let Some(count) = bins.get_mut(bin) {
                    *count += 1;
                }
            }
        }
        Self { bins }
    }

    /// Ordered bin counts, intensity 0 through 255
    pub fn bins(&self) -> &[u64] {
        &self.bins
    }
}

/// 768-bin histogram with 256 bins per channel, concatenated R, G, B
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistogram {
    bins: Vec<u64>,
}

impl ColorHistogram {
    /// Build the histogram; each pixel increments one bin per channel
    pub fn from_pixels(pixels: &impl PixelBuffer) -> Self {
        let mut bins = vec![0_u64; COLOR_HISTOGRAM_BINS];
        for y in 0..pixels.height() {
            for x in 0..pixels.width() {
                let [r, g, b, _] = pixels.pixel(x, y);
                let channels = [
                    r as usize,
                    GRAY_HISTOGRAM_BINS + g as usize,
                    2 * GRAY_HISTOGRAM_BINS + b as usize,
                ];
                for bin in channels {
                    if let Some(count) = bins.get_mut(bin) {
                        *count += 1;
                    }
                }
            }
        }
        Self { bins }
    }

    /// Ordered bin counts, R bins first, then G, then B
    pub fn bins(&self) -> &[u64] {
        &self.bins
    }
}
