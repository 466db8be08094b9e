//! Edge processing utilities: image derivatives and a Canny edge detector.
//!
//! - Gradient computation (Sobel) returning `gx`, `gy` and magnitude, plus a
//!   4-neighbour Laplacian for roughness measurements.
//! - Canny pipeline: 3×3 Gaussian blur, Sobel, direction-aligned
//!   non-maximum suppression, hysteresis between a low and a high threshold.
//!
//! Borders are mirrored without repeating the edge pixel (reflect-101).

pub mod grad;
pub mod nms;

pub use grad::{laplacian, sobel_gradients, Grad};
pub use nms::{canny_counts, hysteresis, run_nms, CannyCounts, EdgeMap};

use crate::filters::{apply as apply_filter, GAUSSIAN_3TAP};
use crate::image::ImageF32;

/// Full Canny pass on a float intensity image (0..=255 scale).
pub fn canny(l: &ImageF32, low: f32, high: f32) -> (EdgeMap, CannyCounts) {
    let blurred = apply_filter(&GAUSSIAN_3TAP, l);
    let grad = sobel_gradients(&blurred);
    let labels = run_nms(&grad, low, high);
    let edges = hysteresis(&labels, l.w, l.h);
    let counts = canny_counts(&labels, &edges);
    (edges, counts)
}
