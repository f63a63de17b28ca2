// THEORY:
// Every threshold used by the profilers and the match engine lives here, once as
// a named constant in `defaults` and once as a field of `AnalyzerConfig`. The
// values are empirical; changing one changes detection behavior.
//
// The config is plain serde data, so a tuned set can be written out with
// `to_json_file`, edited, and loaded back with `from_json_file`. `validate` only
// rejects values the profilers cannot run with (a zero stride, an inverted draw
// range); it does not second-guess tuning.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

/// Default values for every tunable in the pipeline.
pub mod defaults {
    /// Canonical canvas edge length. The image source resamples to this size.
    pub const CANVAS_SIZE: u32 = 300;

    // Color sampling
    pub const COLOR_STRIDE: usize = 20;
    pub const ALPHA_CUTOFF: u8 = 128;
    pub const QUANTIZATION_STEP: u8 = 32;
    pub const MAX_COLORS: usize = 10;

    // Edges
    pub const EDGE_MAGNITUDE_THRESHOLD: f64 = 30.0;
    pub const EDGE_ISOTROPY_THRESHOLD: f64 = 10.0;

    // Brightness
    pub const DARK_THRESHOLD: f64 = 100.0;
    pub const HIGH_CONTRAST_THRESHOLD: f64 = 50.0;

    // Scoring
    pub const TOP_COLORS: usize = 3;
    pub const COLOR_SIMILARITY_THRESHOLD: f64 = 0.7;
    pub const COLOR_WEIGHT: f64 = 0.4;
    pub const ROUND_RATIO_THRESHOLD: f64 = 0.6;
    pub const ELONGATED_RATIO_THRESHOLD: f64 = 0.6;
    pub const CLUSTERED_EDGE_THRESHOLD: u32 = 1000;
    pub const ROUND_CREDIT: f64 = 0.8;
    pub const ELONGATED_CREDIT: f64 = 0.8;
    pub const CLUSTERED_CREDIT: f64 = 0.6;
    pub const SHAPE_WEIGHT: f64 = 0.3;
    pub const SHAPE_REASON_THRESHOLD: f64 = 0.5;
    pub const BRIGHTNESS_BONUS_THRESHOLD: f64 = 120.0;
    pub const BRIGHT_BONUS: f64 = 0.2;
    pub const DIM_BONUS: f64 = 0.1;
    pub const CONFIDENCE_CEILING: f64 = 0.95;
    pub const RETENTION_THRESHOLD: f64 = 0.3;
    pub const MAX_DETECTIONS: usize = 6;
    pub const COUNT_RANGE: (u32, u32) = (1, 3);

    // Freshness and shelf life
    pub const FRESH_BRIGHTNESS_THRESHOLD: f64 = 120.0;
    pub const FRESH_DAYS_ADJUSTMENT: i64 = 2;
    pub const AGING_DAYS_ADJUSTMENT: i64 = -3;
    pub const FRESH_QUANTITY_RANGE: (u32, u32) = (70, 99);
    pub const AGING_QUANTITY_RANGE: (u32, u32) = (30, 69);
}

/// Complete configuration for one analyzer instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyzerConfig {
    pub sampling: SamplingConfig,
    pub edges: EdgeConfig,
    pub brightness: BrightnessConfig,
    pub scoring: ScoringConfig,
    pub freshness: FreshnessConfig,
}

/// Color sampling and quantization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Sample every Nth pixel of the flat buffer.
    pub color_stride: usize,
    /// Pixels with alpha below this are background.
    pub alpha_cutoff: u8,
    /// Width of a quantization bin per channel.
    pub quantization_step: u8,
    /// Number of dominant colors kept.
    pub max_colors: usize,
}

/// Gradient edge classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Gradient magnitude above which a pixel is an edge.
    pub magnitude_threshold: f64,
    /// |gx - gy| below which an edge counts as circular-like.
    pub isotropy_threshold: f64,
}

/// Brightness classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrightnessConfig {
    pub dark_threshold: f64,
    pub high_contrast_threshold: f64,
}

/// Match engine weights, gates and limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub top_colors: usize,
    pub color_similarity_threshold: f64,
    pub color_weight: f64,
    pub round_ratio_threshold: f64,
    pub elongated_ratio_threshold: f64,
    pub clustered_edge_threshold: u32,
    pub round_credit: f64,
    pub elongated_credit: f64,
    pub clustered_credit: f64,
    pub shape_weight: f64,
    pub shape_reason_threshold: f64,
    /// Average luminance above which the bright bonus applies.
    pub brightness_bonus_threshold: f64,
    pub bright_bonus: f64,
    pub dim_bonus: f64,
    pub confidence_ceiling: f64,
    /// Raw scores must exceed this to be reported.
    pub retention_threshold: f64,
    pub max_detections: usize,
    pub count_range: DrawRange,
}

/// Freshness classification and shelf-life synthesis.
///
/// Kept apart from [`ScoringConfig::brightness_bonus_threshold`] even though
/// both default to the same luminance cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreshnessConfig {
    pub fresh_brightness_threshold: f64,
    pub fresh_days_adjustment: i64,
    pub aging_days_adjustment: i64,
    pub fresh_quantity_range: DrawRange,
    pub aging_quantity_range: DrawRange,
}

/// Inclusive integer range for a random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRange {
    pub min: u32,
    pub max: u32,
}

impl DrawRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn as_range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl From<(u32, u32)> for DrawRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self { min, max }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            color_stride: defaults::COLOR_STRIDE,
            alpha_cutoff: defaults::ALPHA_CUTOFF,
            quantization_step: defaults::QUANTIZATION_STEP,
            max_colors: defaults::MAX_COLORS,
        }
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            magnitude_threshold: defaults::EDGE_MAGNITUDE_THRESHOLD,
            isotropy_threshold: defaults::EDGE_ISOTROPY_THRESHOLD,
        }
    }
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            dark_threshold: defaults::DARK_THRESHOLD,
            high_contrast_threshold: defaults::HIGH_CONTRAST_THRESHOLD,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_colors: defaults::TOP_COLORS,
            color_similarity_threshold: defaults::COLOR_SIMILARITY_THRESHOLD,
            color_weight: defaults::COLOR_WEIGHT,
            round_ratio_threshold: defaults::ROUND_RATIO_THRESHOLD,
            elongated_ratio_threshold: defaults::ELONGATED_RATIO_THRESHOLD,
            clustered_edge_threshold: defaults::CLUSTERED_EDGE_THRESHOLD,
            round_credit: defaults::ROUND_CREDIT,
            elongated_credit: defaults::ELONGATED_CREDIT,
            clustered_credit: defaults::CLUSTERED_CREDIT,
            shape_weight: defaults::SHAPE_WEIGHT,
            shape_reason_threshold: defaults::SHAPE_REASON_THRESHOLD,
            brightness_bonus_threshold: defaults::BRIGHTNESS_BONUS_THRESHOLD,
            bright_bonus: defaults::BRIGHT_BONUS,
            dim_bonus: defaults::DIM_BONUS,
            confidence_ceiling: defaults::CONFIDENCE_CEILING,
            retention_threshold: defaults::RETENTION_THRESHOLD,
            max_detections: defaults::MAX_DETECTIONS,
            count_range: defaults::COUNT_RANGE.into(),
        }
    }
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            fresh_brightness_threshold: defaults::FRESH_BRIGHTNESS_THRESHOLD,
            fresh_days_adjustment: defaults::FRESH_DAYS_ADJUSTMENT,
            aging_days_adjustment: defaults::AGING_DAYS_ADJUSTMENT,
            fresh_quantity_range: defaults::FRESH_QUANTITY_RANGE.into(),
            aging_quantity_range: defaults::AGING_QUANTITY_RANGE.into(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| AnalysisError::ConfigParse { source })
    }

    /// Save configuration to a JSON file.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|source| AnalysisError::ConfigParse { source })?;
        std::fs::write(path, json).map_err(|source| AnalysisError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject parameter combinations the profilers cannot run with.
    pub fn validate(&self) -> Result<()> {
        let sampling = &self.sampling;
        if sampling.color_stride == 0 {
            return Err(AnalysisError::invalid_parameter(
                "sampling.color_stride",
                sampling.color_stride,
            ));
        }
        if sampling.quantization_step == 0 {
            return Err(AnalysisError::invalid_parameter(
                "sampling.quantization_step",
                sampling.quantization_step,
            ));
        }

        let edges = &self.edges;
        if !(edges.magnitude_threshold >= 0.0) {
            return Err(AnalysisError::invalid_parameter(
                "edges.magnitude_threshold",
                edges.magnitude_threshold,
            ));
        }
        if !(edges.isotropy_threshold >= 0.0) {
            return Err(AnalysisError::invalid_parameter(
                "edges.isotropy_threshold",
                edges.isotropy_threshold,
            ));
        }

        let scoring = &self.scoring;
        if !(0.0..=1.0).contains(&scoring.color_similarity_threshold) {
            return Err(AnalysisError::invalid_parameter(
                "scoring.color_similarity_threshold",
                scoring.color_similarity_threshold,
            ));
        }
        if !(scoring.confidence_ceiling > 0.0 && scoring.confidence_ceiling <= 1.0) {
            return Err(AnalysisError::invalid_parameter(
                "scoring.confidence_ceiling",
                scoring.confidence_ceiling,
            ));
        }
        if !(scoring.retention_threshold >= 0.0
            && scoring.retention_threshold < scoring.confidence_ceiling)
        {
            return Err(AnalysisError::invalid_parameter(
                "scoring.retention_threshold",
                scoring.retention_threshold,
            ));
        }

        let ranges = [
            ("scoring.count_range", scoring.count_range),
            ("freshness.fresh_quantity_range", self.freshness.fresh_quantity_range),
            ("freshness.aging_quantity_range", self.freshness.aging_quantity_range),
        ];
        for (name, range) in ranges {
            if range.min > range.max {
                return Err(AnalysisError::invalid_parameter(
                    name,
                    format!("{}..={}", range.min, range.max),
                ));
            }
        }
        for (name, range) in &ranges[1..] {
            if range.max > 100 {
                return Err(AnalysisError::invalid_parameter(*name, range.max));
            }
        }

        Ok(())
    }
}
