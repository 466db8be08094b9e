//! Stroke continuity from the outer borders of Canny edges.
//!
//! The blurred drawing is edge-detected with low thresholds suited to faint
//! hand-drawn marks; external contours enclosing less than the noise area are
//! dropped. Connectivity is stroke area per unit of traced boundary: thick,
//! continuous strokes score high, thin scattered marks score low.
use super::round_to;
use crate::analyzer::params::ContinuityParams;
use crate::contours::ContourSet;
use crate::edges::{canny, CannyCounts};
use crate::image::{GrayImageU8, ImageF32};
use crate::mask::StrokeMask;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ContinuityStats {
    pub num_segments: usize,
    pub total_length: f64,
    pub mean_length: f64,
    pub connectivity: f64,
}

/// Edge-detect `gray` and keep external contours above the noise area.
pub fn trace_contours(gray: &GrayImageU8, params: &ContinuityParams) -> (ContourSet, CannyCounts) {
    let intensities = ImageF32::from_u8(gray);
    let (edges, counts) = canny(&intensities, params.canny_low, params.canny_high);
    let contours = ContourSet::extract(&edges, params.chain_approx, params.min_contour_area);
    (contours, counts)
}

/// Summarise a contour set against the stroke area.
pub fn continuity_from_contours(contours: &ContourSet, mask: &StrokeMask) -> ContinuityStats {
    let num_segments = contours.len();
    if num_segments == 0 {
        return ContinuityStats::default();
    }
    let total_length = contours.total_length();
    let mean_length = total_length / num_segments as f64;
    let connectivity = if total_length > 0.0 {
        mask.count() as f64 / total_length
    } else {
        0.0
    };
    ContinuityStats {
        num_segments,
        total_length: round_to(total_length, 2),
        mean_length: round_to(mean_length, 2),
        connectivity: round_to(connectivity, 2),
    }
}

pub fn estimate_continuity(
    gray: &GrayImageU8,
    mask: &StrokeMask,
    params: &ContinuityParams,
) -> ContinuityStats {
    let (contours, _) = trace_contours(gray, params);
    continuity_from_contours(&contours, mask)
}
