// THEORY:
// The `EdgeProfiler` is a deliberately crude stand-in for shape analysis. It
// never finds contours; it only asks, for every strong luminance step in the
// image, whether the step is about as strong horizontally as vertically
// ("circular-like", as on the rim of a round fruit) or dominated by one axis
// ("linear-like", as along the side of a carrot).
//
// Algorithm (single pass, O(W*H)):
// 1.  Build a luminance plane (channel mean) once, so each pixel is converted a
//     single time even though it is read as a neighbor twice.
// 2.  For every interior pixel take forward differences to the right and below:
//     gx = |L(x,y) - L(x+1,y)|, gy = |L(x,y) - L(x,y+1)|.
// 3.  A pixel whose gradient magnitude sqrt(gx² + gy²) exceeds the threshold is
//     an edge. It is circular-like when |gx - gy| is under the isotropy
//     threshold, linear-like otherwise.
// 4.  Both ratios are divided by max(edge_count, 1), so an edgeless image reports
//     zeros instead of dividing by zero.
//
// Alpha is not consulted: transparent pixels still carry RGB and still form
// gradients.

use crate::config::EdgeConfig;
use crate::core_modules::pixel_sampler::PixelBuffer;
use serde::{Deserialize, Serialize};

/// Aggregate edge statistics for one image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeStats {
    /// Number of interior pixels whose gradient magnitude passed the threshold.
    pub edge_count: u32,
    /// Share of edge pixels with a roughly isotropic gradient.
    pub circular_ratio: f64,
    /// Share of edge pixels with a gradient dominated by one axis.
    pub linear_ratio: f64,
}

#[derive(Debug, Clone)]
pub struct EdgeProfiler {
    magnitude_threshold: f64,
    isotropy_threshold: f64,
}

impl Default for EdgeProfiler {
    fn default() -> Self {
        Self::new(&EdgeConfig::default())
    }
}

impl EdgeProfiler {
    pub fn new(config: &EdgeConfig) -> Self {
        Self {
            magnitude_threshold: config.magnitude_threshold,
            isotropy_threshold: config.isotropy_threshold,
        }
    }

    pub fn profile(&self, buffer: &PixelBuffer) -> EdgeStats {
        let width = buffer.width() as usize;
        let height = buffer.height() as usize;
        if width < 3 || height < 3 {
            return EdgeStats::default();
        }

        let luminance = buffer.luminance_plane();
        let mut edge_count = 0u32;
        let mut circular_edges = 0u32;
        let mut linear_edges = 0u32;

        for y in 1..height - 1 {
            let row = y * width;
            let next_row = row + width;
            for x in 1..width - 1 {
                let current = luminance[row + x];
                let gradient_x = (current - luminance[row + x + 1]).abs();
                let gradient_y = (current - luminance[next_row + x]).abs();
                let magnitude = (gradient_x * gradient_x + gradient_y * gradient_y).sqrt();

                if magnitude > self.magnitude_threshold {
                    edge_count += 1;
                    if (gradient_x - gradient_y).abs() < self.isotropy_threshold {
                        circular_edges += 1;
                    } else {
                        linear_edges += 1;
                    }
                }
            }
        }

        let denominator = edge_count.max(1) as f64;
        let stats = EdgeStats {
            edge_count,
            circular_ratio: circular_edges as f64 / denominator,
            linear_ratio: linear_edges as f64 / denominator,
        };

        tracing::debug!(
            edge_count = stats.edge_count,
            circular_ratio = stats.circular_ratio,
            linear_ratio = stats.linear_ratio,
            "Edge profile extracted"
        );
        stats
    }
}
