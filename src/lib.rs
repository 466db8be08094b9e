#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod normalize;
pub mod stages;

// Building blocks – public for tools and tests, but considered internals.
pub mod contours;
pub mod distance;
pub mod edges;
pub mod filters;
pub mod mask;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{
    analyze, AnalyzerParams, BatchResult, FeatureReport, ReportValue, StrokeAnalyzer,
};
pub use crate::classify::{ContinuityClass, DensityClass, ThicknessClass};
pub use crate::error::AnalysisError;
pub use crate::image::RasterImage;

// Detailed diagnostics returned by `analyze_with_diagnostics`.
pub use crate::diagnostics::{AnalysisReport, AnalysisTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use stroke_features::prelude::*;
///
/// # fn main() -> Result<(), AnalysisError> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![255u8; w * h];
/// let img = RasterImage::Grayscale(ImageU8 { w, h, stride: w, data: &gray });
///
/// let report = StrokeAnalyzer::new(AnalyzerParams::default()).analyze(&img)?;
/// println!("density={} ({})", report.density, report.density_class);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::{AnalysisError, AnalyzerParams, FeatureReport, RasterImage, StrokeAnalyzer};
}
