//! Top-level stroke analysis.
//!
//! [`StrokeAnalyzer`] runs the fixed pipeline on one raster: normalize to a
//! bright-on-dark grayscale plus stroke mask, then the five independent
//! estimators (thickness, continuity, smoothness, density/pressure,
//! complexity), then the classifier. Every call owns its intermediates; the
//! analyzer itself holds only parameters, so one instance can be shared
//! across threads.
//!
//! ```no_run
//! use stroke_features::{AnalyzerParams, RasterImage, StrokeAnalyzer};
//!
//! # fn example(pixels: &[u8]) -> Result<(), stroke_features::AnalysisError> {
//! let raster = RasterImage::from_interleaved(640, 480, 1, pixels)?;
//! let analyzer = StrokeAnalyzer::new(AnalyzerParams::default());
//! let report = analyzer.analyze(&raster)?;
//! println!("{} ({})", report.thickness_mean, report.thickness_class);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod params;
pub mod report;

pub use batch::{BatchEntry, BatchFailure, BatchResult};
pub use params::{
    AnalyzerParams, ComplexityParams, ContinuityParams, DensityParams, NormalizeParams,
    SmoothnessParams, ThicknessParams,
};
pub use report::{FeatureReport, ReportValue};

use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{AnalysisReport, AnalysisTrace, InputDescriptor, TimingBreakdown};
use crate::error::AnalysisError;
use crate::image::{ImageView, RasterImage};
use crate::normalize::normalize;
use crate::stages::{
    continuity_from_contours, estimate_density, estimate_pressure, estimate_smoothness,
    estimate_thickness, normalized_entropy, trace_contours,
};
use log::debug;
use std::time::Instant;

/// Stateless analysis pipeline configured by [`AnalyzerParams`].
#[derive(Clone, Debug, Default)]
pub struct StrokeAnalyzer {
    params: AnalyzerParams,
}

impl StrokeAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Analyze one drawing.
    pub fn analyze(&self, raster: &RasterImage<'_>) -> Result<FeatureReport, AnalysisError> {
        self.analyze_with_diagnostics(raster)
            .map(|detailed| detailed.report)
    }

    /// Analyze one drawing and keep stage timings and intermediate statistics.
    ///
    /// Fails with [`AnalysisError::InvalidParams`] before touching the raster
    /// when the parameters cannot produce finite metrics.
    pub fn analyze_with_diagnostics(
        &self,
        raster: &RasterImage<'_>,
    ) -> Result<AnalysisReport, AnalysisError> {
        self.params.validate()?;
        let total_start = Instant::now();
        debug!(
            "StrokeAnalyzer::analyze start w={} h={} channels={}",
            raster.width(),
            raster.height(),
            raster.channels()
        );
        let params = &self.params;
        let mut timings = TimingBreakdown::default();

        let normalized = {
            let start = Instant::now();
            let out = normalize(raster, &params.normalize)?;
            timings.push("normalize", elapsed_ms(start));
            out
        };
        let gray = &normalized.gray;
        let mask = &normalized.mask;

        let thickness = timings.measure("thickness", || {
            estimate_thickness(mask, &params.thickness)
        });
        let (continuity, edge_counts) = timings.measure("continuity", || {
            let (contours, counts) = trace_contours(gray, &params.continuity);
            (continuity_from_contours(&contours, mask), counts)
        });
        let smoothness = timings.measure("smoothness", || {
            estimate_smoothness(gray, mask, &params.smoothness)
        });
        let density = timings.measure("density", || estimate_density(mask, &params.density));
        let stroke_values = mask.select(gray);
        let pressure = timings.measure("pressure", || {
            estimate_pressure(&stroke_values, params.normalize.stroke_threshold)
        });
        let entropy = timings.measure("complexity", || {
            normalized_entropy(&stroke_values, &params.complexity)
        });

        let report = FeatureReport::from_stages(
            &thickness,
            &continuity,
            &smoothness,
            &density,
            &pressure,
            entropy,
        );
        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "StrokeAnalyzer::analyze done stroke_pixels={} segments={} total_ms={:.3}",
            stroke_values.len(),
            continuity.num_segments,
            timings.total_ms
        );

        let trace = AnalysisTrace {
            input: InputDescriptor {
                width: gray.width(),
                height: gray.height(),
                channels: raster.channels(),
                inverted: normalized.inverted,
                stroke_pixels: stroke_values.len(),
            },
            timings,
            edges: edge_counts,
            density_grid: density.grid,
            pressure,
            smoothness,
        };
        Ok(AnalysisReport { report, trace })
    }
}

/// Analyze one drawing with default parameters.
pub fn analyze(raster: &RasterImage<'_>) -> Result<FeatureReport, AnalysisError> {
    StrokeAnalyzer::default().analyze(raster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_lists_every_stage() {
        let mut data = vec![0u8; 30 * 30];
        for y in 10..20 {
            for x in 10..20 {
                data[y * 30 + x] = 180;
            }
        }
        let raster = RasterImage::from_interleaved(30, 30, 1, &data).unwrap();
        let detailed = StrokeAnalyzer::default()
            .analyze_with_diagnostics(&raster)
            .unwrap();
        let labels: Vec<_> = detailed
            .trace
            .timings
            .stages
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            labels,
            ["normalize", "thickness", "continuity", "smoothness", "density", "pressure", "complexity"]
        );
        assert_eq!(detailed.trace.input.stroke_pixels, 100);
        assert!(!detailed.trace.input.inverted);
        assert_eq!(detailed.trace.density_grid.cells.len(), 16);
        assert_eq!(detailed.report.density, round(100.0 / 9.0));
        assert!(detailed.trace.edges.edges > 0);
    }

    fn round(v: f64) -> f64 {
        crate::stages::round_to(v, 2)
    }

    #[test]
    fn free_function_matches_default_analyzer() {
        let data = vec![90u8; 12 * 12];
        let raster = RasterImage::from_interleaved(12, 12, 1, &data).unwrap();
        let a = analyze(&raster).unwrap();
        let b = StrokeAnalyzer::new(AnalyzerParams::default())
            .analyze(&raster)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_scales_fail_instead_of_reporting_nan() {
        let mut data = vec![0u8; 40 * 40];
        for y in 10..30 {
            for x in 10..30 {
                data[y * 40 + x] = 200;
            }
        }
        let raster = RasterImage::from_interleaved(40, 40, 1, &data).unwrap();
        let mut params = AnalyzerParams::default();
        params.complexity.entropy_scale = 0.0;
        params.smoothness.roughness_scale = 0.0;
        let err = StrokeAnalyzer::new(params).analyze(&raster).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidParams { .. }), "{err}");
    }

    #[test]
    fn empty_grid_fails_every_image() {
        let data = vec![90u8; 12 * 12];
        let raster = RasterImage::from_interleaved(12, 12, 1, &data).unwrap();
        let mut params = AnalyzerParams::default();
        params.density.grid_cols = 0;
        let err = StrokeAnalyzer::new(params)
            .analyze_with_diagnostics(&raster)
            .unwrap_err();
        assert!(err.to_string().contains("density.grid_cols"), "{err}");
    }
}
