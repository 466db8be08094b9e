//! Stroke thickness from the Euclidean distance field.
//!
//! Each stroke pixel's distance to the nearest background pixel is a local
//! radius; the local thickness is twice that. Mean, max and spread are taken
//! over all pixels with a positive distance.
use super::{mean_std, round_to};
use crate::analyzer::params::ThicknessParams;
use crate::distance::DistanceField;
use crate::mask::StrokeMask;
use log::debug;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ThicknessStats {
    pub mean: f64,
    pub max: f64,
    pub std: f64,
}

pub fn estimate_thickness(mask: &StrokeMask, params: &ThicknessParams) -> ThicknessStats {
    let stroke_pixels = mask.count();
    if stroke_pixels < params.min_stroke_pixels {
        debug!(
            "thickness: {} stroke pixels (< {}), reporting zeros",
            stroke_pixels, params.min_stroke_pixels
        );
        return ThicknessStats::default();
    }

    let field = DistanceField::compute(mask);
    let diameters: Vec<f64> = field.positive().map(|d| 2.0 * d as f64).collect();
    let max = diameters.iter().copied().fold(0.0f64, f64::max);
    let (mean, std) = mean_std(diameters.iter().copied());

    ThicknessStats {
        mean: round_to(mean, 2),
        max: round_to(max, 2),
        std: round_to(std, 2),
    }
}
