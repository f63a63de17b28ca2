// THEORY:
// The `BrightnessProfiler` summarizes the global exposure of the image: how
// bright it is on average and how spread out the brightness is. The spread
// (population standard deviation of luminance) is what the rest of the engine
// calls "contrast".
//
// Only opaque pixels count. A fully transparent image therefore has no samples,
// and the statistics fall back to zeros rather than NaN: the mean divides by
// max(n, 1) and so does the variance.

use crate::config::{BrightnessConfig, SamplingConfig};
use crate::core_modules::pixel::pixel::{Channel, Luminance};
use crate::core_modules::pixel_sampler::PixelBuffer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrightnessStats {
    /// Mean luminance of opaque pixels (0..255).
    pub average: f64,
    /// Standard deviation of that luminance.
    pub contrast: f64,
    pub is_dark: bool,
    pub is_high_contrast: bool,
}

#[derive(Debug, Clone)]
pub struct BrightnessProfiler {
    alpha_cutoff: Channel,
    dark_threshold: f64,
    high_contrast_threshold: f64,
}

impl Default for BrightnessProfiler {
    fn default() -> Self {
        Self::new(&SamplingConfig::default(), &BrightnessConfig::default())
    }
}

impl BrightnessProfiler {
    pub fn new(sampling: &SamplingConfig, config: &BrightnessConfig) -> Self {
        Self {
            alpha_cutoff: sampling.alpha_cutoff,
            dark_threshold: config.dark_threshold,
            high_contrast_threshold: config.high_contrast_threshold,
        }
    }

    pub fn profile(&self, buffer: &PixelBuffer) -> BrightnessStats {
        let samples: Vec<Luminance> = buffer
            .pixels()
            .filter(|pixel| pixel.is_opaque(self.alpha_cutoff))
            .map(|pixel| pixel.luminance())
            .collect();

        let (average, contrast) = Self::mean_and_std_dev(&samples);
        let stats = BrightnessStats {
            average,
            contrast,
            is_dark: average < self.dark_threshold,
            is_high_contrast: contrast > self.high_contrast_threshold,
        };

        tracing::debug!(
            samples = samples.len(),
            average = stats.average,
            contrast = stats.contrast,
            "Brightness profile extracted"
        );
        stats
    }

    /// Population mean and standard deviation, both zero for an empty slice.
    fn mean_and_std_dev(samples: &[Luminance]) -> (f64, f64) {
        let count = samples.len().max(1) as f64;
        let mean = samples.iter().sum::<f64>() / count;
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
        (mean, variance.sqrt())
    }
}
