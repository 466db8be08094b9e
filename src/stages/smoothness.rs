//! Stroke smoothness from the spread of derivative responses on stroke pixels.
//!
//! Roughness is the mean of two dispersions measured inside the mask: the
//! standard deviation of the Laplacian and of the Sobel gradient magnitude.
//! It is mapped to `1 / (1 + roughness / scale)`, which is 1 for a perfectly
//! uniform stroke and decays towards 0 as roughness grows.
use super::{mean_std, round_to};
use crate::analyzer::params::SmoothnessParams;
use crate::edges::{laplacian, sobel_gradients};
use crate::image::{GrayImageU8, ImageF32};
use crate::mask::StrokeMask;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SmoothnessStats {
    pub laplacian_roughness: f64,
    pub gradient_roughness: f64,
    /// Score in (0, 1], three decimals.
    pub smoothness: f64,
}

impl Default for SmoothnessStats {
    fn default() -> Self {
        Self {
            laplacian_roughness: 0.0,
            gradient_roughness: 0.0,
            smoothness: 1.0,
        }
    }
}

/// `1 / (1 + roughness / scale)`.
#[inline]
pub fn smoothness_score(roughness: f64, scale: f64) -> f64 {
    1.0 / (1.0 + roughness / scale)
}

pub fn estimate_smoothness(
    gray: &GrayImageU8,
    mask: &StrokeMask,
    params: &SmoothnessParams,
) -> SmoothnessStats {
    if mask.count() == 0 {
        return SmoothnessStats::default();
    }
    let intensities = ImageF32::from_u8(gray);
    let lap = laplacian(&intensities);
    let grad = sobel_gradients(&intensities);

    let dispersion = |values: &[f32]| {
        let selected = mask.select_f32(values);
        mean_std(selected.iter().map(|&v| v as f64)).1
    };
    let laplacian_roughness = dispersion(&lap.data);
    let gradient_roughness = dispersion(&grad.mag.data);
    let roughness = 0.5 * (laplacian_roughness + gradient_roughness);

    SmoothnessStats {
        laplacian_roughness,
        gradient_roughness,
        smoothness: round_to(smoothness_score(roughness, params.roughness_scale), 3),
    }
}
