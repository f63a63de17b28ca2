// THEORY:
// A `VisualProfile` is everything the engine knows about one image, reduced to
// three small summaries: dominant colors, edge ratios, brightness. It is built
// once by running the three profilers over the same buffer and is never modified
// afterwards; the match engine only reads it.
//
// It is also the diagnostic surface: its `Display` form is what a presentation
// layer shows next to the ranked results.

use crate::config::AnalyzerConfig;
use crate::core_modules::brightness_profiler::{BrightnessProfiler, BrightnessStats};
use crate::core_modules::color_profiler::{ColorProfiler, ColorSample};
use crate::core_modules::edge_profiler::{EdgeProfiler, EdgeStats};
use crate::core_modules::pixel_sampler::PixelBuffer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of swatches shown in the diagnostic summary.
const DISPLAY_COLORS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualProfile {
    colors: Vec<ColorSample>,
    shapes: EdgeStats,
    brightness: BrightnessStats,
}

impl VisualProfile {
    pub fn new(colors: Vec<ColorSample>, shapes: EdgeStats, brightness: BrightnessStats) -> Self {
        Self {
            colors,
            shapes,
            brightness,
        }
    }

    /// Runs the color, edge and brightness profilers over `buffer`.
    pub fn extract(buffer: &PixelBuffer, config: &AnalyzerConfig) -> Self {
        let colors = ColorProfiler::new(&config.sampling).profile(buffer);
        let shapes = EdgeProfiler::new(&config.edges).profile(buffer);
        let brightness =
            BrightnessProfiler::new(&config.sampling, &config.brightness).profile(buffer);
        Self::new(colors, shapes, brightness)
    }

    /// Dominant colors, most frequent first.
    pub fn colors(&self) -> &[ColorSample] {
        &self.colors
    }

    pub fn shapes(&self) -> &EdgeStats {
        &self.shapes
    }

    pub fn brightness(&self) -> &BrightnessStats {
        &self.brightness
    }

    /// True when no color and no edge survived profiling.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.shapes.edge_count == 0
    }
}

impl fmt::Display for VisualProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dominant colors:")?;
        if self.colors.is_empty() {
            write!(f, " none")?;
        }
        for color in self.colors.iter().take(DISPLAY_COLORS) {
            write!(f, " {} ({} px)", color.hex, color.count)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Edges: {} | Circular: {:.1}% | Linear: {:.1}%",
            self.shapes.edge_count,
            self.shapes.circular_ratio * 100.0,
            self.shapes.linear_ratio * 100.0
        )?;
        write!(
            f,
            "Brightness: {:.0} | Contrast: {:.0} | Quality: {} contrast",
            self.brightness.average,
            self.brightness.contrast,
            if self.brightness.is_high_contrast { "High" } else { "Low" }
        )
    }
}
