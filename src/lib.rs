// THEORY:
// This file is the main entry point for the `fridge_vision` library crate.
//
// The engine looks at one photo of food and guesses what is in it using nothing
// but pixel statistics: a handful of dominant colors, a rough edge-orientation
// ratio and the overall brightness. Those summaries are scored against a small
// table of known foods, and the best few matches come back with a confidence,
// a freshness guess and a shelf-life estimate.
//
// The public surface is the `FoodAnalyzer` (one image at a time) and the
// `BatchAnalyzer` (many images over a tokio worker pool), plus the
// `AnalyzerConfig` that holds every tunable threshold. The profilers and the
// scorer in `core_modules` are public for callers who want the intermediate
// summaries.

pub mod config;
pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;

pub use config::AnalyzerConfig;
pub use core_modules::food_catalog::{FoodCatalog, FoodSignature, ReferenceColor, ShapeTag};
pub use core_modules::pixel_sampler::PixelBuffer;
pub use core_modules::random_source::{RandomSource, ReplaySource};
pub use error::{AnalysisError, Result};
pub use parallel_pipeline::{BatchAnalyzer, FrameJob};
pub use pipeline::{AnalysisReport, Detection, FoodAnalyzer, Freshness, ResultItem, VisualProfile};
