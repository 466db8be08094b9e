//! Parameter types configuring the analysis stages.
//!
//! Defaults are the thresholds tuned for scanned children's
//! drawings (faint pencil and crayon strokes). Every field can be overridden
//! from JSON; missing fields fall back to the defaults.

use crate::contours::ChainApprox;
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Analyzer-wide parameters, one block per stage.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerParams {
    pub normalize: NormalizeParams,
    pub thickness: ThicknessParams,
    pub continuity: ContinuityParams,
    pub smoothness: SmoothnessParams,
    pub density: DensityParams,
    pub complexity: ComplexityParams,
}

impl AnalyzerParams {
    /// Check every block; the first unusable field is reported.
    ///
    /// Scales must be finite and positive, thresholds finite and
    /// non-negative, grid and histogram sizes non-zero.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        finite("normalize.invert_mean_threshold", self.normalize.invert_mean_threshold)?;
        non_negative("continuity.canny_low", self.continuity.canny_low as f64)?;
        non_negative("continuity.canny_high", self.continuity.canny_high as f64)?;
        non_negative("continuity.min_contour_area", self.continuity.min_contour_area)?;
        positive("smoothness.roughness_scale", self.smoothness.roughness_scale)?;
        non_zero("density.grid_rows", self.density.grid_rows)?;
        non_zero("density.grid_cols", self.density.grid_cols)?;
        non_zero("complexity.histogram_bins", self.complexity.histogram_bins)?;
        positive("complexity.entropy_scale", self.complexity.entropy_scale)?;
        Ok(())
    }
}

fn invalid(name: &'static str, reason: String) -> AnalysisError {
    AnalysisError::InvalidParams { name, reason }
}

fn finite(name: &'static str, v: f64) -> Result<(), AnalysisError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, format!("{v} is not finite")))
    }
}

fn non_negative(name: &'static str, v: f64) -> Result<(), AnalysisError> {
    finite(name, v)?;
    if v < 0.0 {
        return Err(invalid(name, format!("{v} is negative")));
    }
    Ok(())
}

fn positive(name: &'static str, v: f64) -> Result<(), AnalysisError> {
    finite(name, v)?;
    if v <= 0.0 {
        return Err(invalid(name, format!("{v} must be greater than 0")));
    }
    Ok(())
}

fn non_zero(name: &'static str, n: usize) -> Result<(), AnalysisError> {
    if n == 0 {
        return Err(invalid(name, "must be at least 1".to_string()));
    }
    Ok(())
}

/// Grayscale conversion, polarity and stroke mask.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NormalizeParams {
    /// Images with a mean intensity above this are inverted.
    pub invert_mean_threshold: f64,
    /// Pixels strictly brighter than this (after inversion) are strokes.
    pub stroke_threshold: u8,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            invert_mean_threshold: 127.0,
            stroke_threshold: 20,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThicknessParams {
    /// Below this many stroke pixels every thickness metric is 0.
    pub min_stroke_pixels: usize,
}

impl Default for ThicknessParams {
    fn default() -> Self {
        Self {
            min_stroke_pixels: 100,
        }
    }
}

/// Canny thresholds and contour filtering.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContinuityParams {
    /// Hysteresis low threshold on the L1 Sobel magnitude.
    pub canny_low: f32,
    /// Hysteresis high threshold on the L1 Sobel magnitude.
    pub canny_high: f32,
    /// Contours enclosing less area (px²) are treated as noise.
    pub min_contour_area: f64,
    pub chain_approx: ChainApprox,
}

impl Default for ContinuityParams {
    fn default() -> Self {
        Self {
            canny_low: 30.0,
            canny_high: 80.0,
            min_contour_area: 10.0,
            chain_approx: ChainApprox::Simple,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SmoothnessParams {
    /// Roughness at which smoothness drops to 0.5.
    pub roughness_scale: f64,
}

impl Default for SmoothnessParams {
    fn default() -> Self {
        Self {
            roughness_scale: 50.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DensityParams {
    pub grid_rows: usize,
    pub grid_cols: usize,
}

impl Default for DensityParams {
    fn default() -> Self {
        Self {
            grid_rows: 4,
            grid_cols: 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ComplexityParams {
    /// Histogram bins over the 0..=255 intensity range.
    pub histogram_bins: usize,
    /// Divisor mapping entropy in bits to a roughly unit score.
    pub entropy_scale: f64,
}

impl Default for ComplexityParams {
    fn default() -> Self {
        Self {
            histogram_bins: 32,
            entropy_scale: 5.0,
        }
    }
}
