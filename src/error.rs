//! Error taxonomy for the analyzer and its loader helpers.
//!
//! Degenerate inputs (blank pages, a handful of stroke pixels) are not errors:
//! each stage defines a zero result for them. Only malformed buffers, unusable
//! parameters and loader failures surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid raster shape {width}x{height} with {channels} channel(s)")]
    InvalidShape {
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("raster buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParams { name: &'static str, reason: String },

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
