//! Similarity scoring between a candidate tile and a reference tile
//!
//! Used only when the reconstruction orders tiles by visual similarity
//! instead of trusting index order. One metric is active per run; both
//! produce an ordering key where the sequence is sorted ascending.

use crate::analysis::histogram::{ColorHistogram, GrayHistogram};
use crate::io::configuration::COLOR_HISTOGRAM_BINS;
use crate::io::image::PixelBuffer;

/// Interchangeable tile comparison metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimilarityMetric {
    /// Pearson correlation of 256-bin luminance histograms; higher is
    /// more similar, range [-1, 1]
    #[default]
    GrayscaleCorrelation,
    /// Euclidean distance of 768-bin color histograms divided by the bin
    /// count; lower is more similar
    ColorDistance,
}

/// Pearson correlation coefficient between two equal-length histograms
///
/// Mean-centered dot product divided by the product of the two norms.
/// Returns 0.0 when either histogram has zero variance (a solid-color
/// tile), rather than propagating the undefined division.
pub fn histogram_correlation(a: &[u64], b: &[u64]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let n = a.len() as f64;
    let mean_a = a.iter().sum::<u64>() as f64 / n;
    let mean_b = b.iter().sum::<u64>() as f64 / n;

    let mut numerator = 0.0;
    let mut variance_a = 0.0;
    let mut variance_b = 0.0;

    for (&count_a, &count_b) in a.iter().zip(b.iter()) {
        let diff_a = count_a as f64 - mean_a;
        let diff_b = count_b as f64 - mean_b;
        numerator += diff_a * diff_b;
        variance_a += diff_a * diff_a;
        variance_b += diff_b * diff_b;
    }

    let denominator = (variance_a * variance_b).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    numerator / denominator
}

/// Normalized Euclidean distance between two color histograms
///
/// The raw distance is divided by the 768-entry bin count. Identical
/// histograms score 0.0.
pub fn histogram_distance(a: &[u64], b: &[u64]) -> f64 {
    let sum_of_squares: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&count_a, &count_b)| {
            let diff = count_a as f64 - count_b as f64;
            diff * diff
        })
        .sum();

    sum_of_squares.sqrt() / COLOR_HISTOGRAM_BINS as f64
}

enum ReferenceHistogram {
    Gray(GrayHistogram),
    Color(ColorHistogram),
}

/// Scores candidate tiles against a fixed reference tile
///
/// The reference histogram is computed once at construction;
/// conventionally the reference is the first acquired tile.
pub struct SimilarityScorer {
    metric: SimilarityMetric,
    reference: ReferenceHistogram,
}

impl SimilarityScorer {
    /// Create a scorer with the reference tile's histogram precomputed
    pub fn new(metric: SimilarityMetric, reference: &impl PixelBuffer) -> Self {
        let reference = match metric {
            SimilarityMetric::GrayscaleCorrelation => {
                ReferenceHistogram::Gray(GrayHistogram::from_pixels(reference))
            }
            SimilarityMetric::ColorDistance => {
                ReferenceHistogram::Color(ColorHistogram::from_pixels(reference))
            }
        };
        Self { metric, reference }
    }

    /// The metric this scorer was configured with
    pub const fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    /// Ordering key for a candidate tile
    ///
    /// Tiles are sorted ascending by this key, matching the source
    /// program's ordering for both metrics.
    pub fn key(&self, candidate: &impl PixelBuffer) -> f64 {
        match &self.reference {
            ReferenceHistogram::Gray(reference) => {
                let histogram = GrayHistogram::from_pixels(candidate);
                histogram_correlation(histogram.bins(), reference.bins())
            }
            ReferenceHistogram::Color(reference) => {
                let histogram = ColorHistogram::from_pixels(candidate);
                histogram_distance(histogram.bins(), reference.bins())
            }
        }
    }
}
