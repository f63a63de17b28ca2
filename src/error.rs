// THEORY:
// Only structurally invalid input is an error. Degenerate but well-formed images
// (a fully transparent frame, a perfectly uniform one, one that matches nothing)
// produce empty or low-confidence results instead, and never reach this enum.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fridge_vision operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The pixel buffer does not have the canonical RGBA shape.
    #[error(
        "Invalid buffer shape: expected {expected_width}x{expected_height} RGBA \
         ({expected_len} bytes), got {width}x{height} ({actual_len} bytes)"
    )]
    InvalidBufferShape {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
        expected_len: usize,
        actual_len: usize,
    },

    /// Image file could not be opened or decoded.
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: image::ImageError,
    },

    /// A diagnostic image could not be written.
    #[error("Failed to save image to {}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Configuration or catalog file could not be read or written.
    #[error("Configuration file error at {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration or catalog JSON is malformed.
    #[error("Configuration parse error")]
    ConfigParse {
        #[source]
        source: serde_json::Error,
    },

    /// A tunable parameter is outside its valid domain.
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// The batch worker pool dropped a job or a worker panicked.
    #[error("Worker pool error: {reason}")]
    WorkerPool { reason: String },
}

impl AnalysisError {
    pub fn image_load(message: impl Into<String>, source: image::ImageError) -> Self {
        Self::ImageLoad {
            message: message.into(),
            source,
        }
    }

    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    pub fn worker_pool(reason: impl Into<String>) -> Self {
        Self::WorkerPool {
            reason: reason.into(),
        }
    }

    /// True when the caller handed over something unusable, as opposed to an
    /// infrastructure failure inside the engine.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidBufferShape { .. }
                | AnalysisError::ImageLoad { .. }
                | AnalysisError::InvalidParameter { .. }
        )
    }
}
