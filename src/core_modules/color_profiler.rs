// THEORY:
// The `ColorProfiler` answers "which colors dominate this picture?" with the
// coarsest tool that works: a histogram over quantized RGB bins.
//
// Key architectural principles:
// 1.  **Sparse Sampling**: Only every Nth pixel of the flat buffer is read. On a
//     300x300 canvas with a stride of 20 that is 4500 samples, plenty for a
//     histogram with 512 bins and a fraction of the cost of a full pass.
// 2.  **Background Rejection**: Samples below the alpha cutoff are skipped
//     entirely, so transparent margins never show up as a "color".
// 3.  **Deterministic Ranking**: Bins are kept in first-seen order and then
//     stable-sorted by count, so equal counts rank in the order they were first
//     met in the buffer.

use crate::config::SamplingConfig;
use crate::core_modules::pixel::pixel::{BinKey, Channel};
use crate::core_modules::pixel_sampler::PixelBuffer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One dominant color bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSample {
    /// Quantized red channel (bin floor).
    pub red: Channel,
    /// Quantized green channel (bin floor).
    pub green: Channel,
    /// Quantized blue channel (bin floor).
    pub blue: Channel,
    /// Number of sampled pixels that fell in this bin.
    pub count: u32,
    /// `#rrggbb` of the quantized color.
    pub hex: String,
}

impl ColorSample {
    pub fn new(red: Channel, green: Channel, blue: Channel, count: u32) -> Self {
        Self {
            red,
            green,
            blue,
            count,
            hex: to_hex(red, green, blue),
        }
    }

    pub fn rgb(&self) -> [Channel; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Lowercase, zero-padded `#rrggbb`.
pub fn to_hex(red: Channel, green: Channel, blue: Channel) -> String {
    format!("#{red:02x}{green:02x}{blue:02x}")
}

/// Histogram-based dominant color extractor.
#[derive(Debug, Clone)]
pub struct ColorProfiler {
    stride: usize,
    alpha_cutoff: Channel,
    quantization_step: Channel,
    max_colors: usize,
}

impl Default for ColorProfiler {
    fn default() -> Self {
        Self::new(&SamplingConfig::default())
    }
}

impl ColorProfiler {
    pub fn new(config: &SamplingConfig) -> Self {
        Self {
            stride: config.color_stride.max(1),
            alpha_cutoff: config.alpha_cutoff,
            quantization_step: config.quantization_step.max(1),
            max_colors: config.max_colors,
        }
    }

    /// Dominant colors, most frequent first, at most `max_colors` of them.
    pub fn profile(&self, buffer: &PixelBuffer) -> Vec<ColorSample> {
        // First-seen order of bins, with a lookup into it.
        let mut bins: Vec<(BinKey, u32)> = Vec::new();
        let mut bin_index: HashMap<BinKey, usize> = HashMap::new();

        for pixel in buffer.strided(self.stride) {
            if !pixel.is_opaque(self.alpha_cutoff) {
                continue;
            }
            let key = pixel.bin_key(self.quantization_step);
            match bin_index.get(&key) {
                Some(&index) => bins[index].1 += 1,
                None => {
                    bin_index.insert(key, bins.len());
                    bins.push((key, 1));
                }
            }
        }

        bins.sort_by(|a, b| b.1.cmp(&a.1));
        bins.truncate(self.max_colors);

        let colors: Vec<ColorSample> = bins
            .into_iter()
            .map(|(key, count)| {
                ColorSample::new(
                    (key >> 16) as Channel,
                    (key >> 8) as Channel,
                    key as Channel,
                    count,
                )
            })
            .collect();

        tracing::debug!(
            colors = colors.len(),
            top = colors.first().map(|c| c.hex.as_str()).unwrap_or("none"),
            "Color profile extracted"
        );
        colors
    }
}
