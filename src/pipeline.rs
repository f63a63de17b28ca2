// THEORY:
// The `pipeline` module is the top-level API of the engine. It wires the stages
// into one call so a caller never touches the profilers or the scorer directly:
//
// 1.  **Shape check**: raw bytes become a `PixelBuffer` or the call fails fast.
// 2.  **Profiling**: color, edge and brightness summaries form a `VisualProfile`.
// 3.  **Matching**: the `MatchEngine` scores the catalog and keeps the best few.
// 4.  **Synthesis**: ranked detections become user-facing `ResultItem`s.
//
// A `FoodAnalyzer` is immutable after construction apart from an atomic counter
// that numbers analyses, so one instance can be shared across threads behind an
// `Arc` (see `parallel_pipeline`).

use crate::config::AnalyzerConfig;
use crate::config::defaults::CANVAS_SIZE;
use crate::core_modules::food_catalog::FoodCatalog;
use crate::core_modules::match_engine::MatchEngine;
use crate::core_modules::pixel_sampler::PixelBuffer;
use crate::core_modules::random_source::RandomSource;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

// Re-export key data structures for the public API.
pub use crate::core_modules::match_engine::{Detection, Freshness, ResultItem};
pub use crate::core_modules::visual_profile::VisualProfile;

/// Everything produced by one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: u64,
    pub profile: VisualProfile,
    /// Ranked, at most `scoring.max_detections` long.
    pub detections: Vec<Detection>,
    /// One per detection, same order.
    pub items: Vec<ResultItem>,
}

impl AnalysisReport {
    pub fn best(&self) -> Option<&ResultItem> {
        self.items.first()
    }
}

/// The main, top-level struct of the engine.
#[derive(Debug)]
pub struct FoodAnalyzer {
    config: AnalyzerConfig,
    catalog: Cow<'static, FoodCatalog>,
    next_analysis_id: AtomicU64,
}

impl Default for FoodAnalyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            catalog: Cow::Borrowed(FoodCatalog::builtin()),
            next_analysis_id: AtomicU64::new(0),
        }
    }
}

impl FoodAnalyzer {
    /// Analyzer over the built-in catalog.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Analyzer over a caller-supplied catalog.
    pub fn with_catalog(config: AnalyzerConfig, catalog: FoodCatalog) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog: Cow::Owned(catalog),
            next_analysis_id: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Profiles a buffer without scoring it.
    pub fn profile(&self, buffer: &PixelBuffer) -> VisualProfile {
        VisualProfile::extract(buffer, &self.config)
    }

    pub fn analyze(&self, buffer: &PixelBuffer, rng: &mut dyn RandomSource) -> AnalysisReport {
        let analysis_id = self.next_analysis_id.fetch_add(1, Ordering::Relaxed);
        let profile = self.profile(buffer);

        let engine = MatchEngine::new(
            &self.catalog,
            self.config.scoring.clone(),
            self.config.freshness.clone(),
        );
        let detections = engine.detect(&profile, rng);
        let items = engine.synthesize(&detections, analysis_id, rng);

        tracing::info!(
            analysis_id,
            detections = detections.len(),
            best = items.first().map(|item| item.name.as_str()).unwrap_or("none"),
            "Analysis complete"
        );

        AnalysisReport {
            analysis_id,
            profile,
            detections,
            items,
        }
    }

    /// Analyzes raw RGBA bytes, rejecting anything that is not canvas-shaped.
    pub fn analyze_frame(
        &self,
        frame: &[u8],
        width: u32,
        height: u32,
        rng: &mut dyn RandomSource,
    ) -> Result<AnalysisReport> {
        let buffer = PixelBuffer::new(frame, width, height)?;
        Ok(self.analyze(&buffer, rng))
    }

    /// Decodes an image file, stretches it to the canvas and analyzes it.
    pub fn analyze_image_file(
        &self,
        path: &Path,
        rng: &mut dyn RandomSource,
    ) -> Result<AnalysisReport> {
        let frame = image_helper::load_canonical(path)?;
        self.analyze_frame(&frame, CANVAS_SIZE, CANVAS_SIZE, rng)
    }

    /// Same as `analyze_image_file` for an encoded image already in memory.
    pub fn analyze_encoded(
        &self,
        bytes: &[u8],
        rng: &mut dyn RandomSource,
    ) -> Result<AnalysisReport> {
        let frame = image_helper::decode_canonical(bytes)?;
        self.analyze_frame(&frame, CANVAS_SIZE, CANVAS_SIZE, rng)
    }
}
