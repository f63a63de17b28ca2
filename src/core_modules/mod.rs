pub mod brightness_profiler;
pub mod color_profiler;
pub mod edge_profiler;
pub mod food_catalog;
pub mod match_engine;
pub mod pixel;
pub mod pixel_sampler;
pub mod random_source;
pub mod utils;
pub mod visual_profile;
