//! Canny-style non-maximum suppression and hysteresis on Sobel gradients.
//!
//! NMS keeps a pixel when its L1 magnitude exceeds the low threshold and is a
//! local maximum along the gradient direction, quantised to 0°, 45°, 90° or
//! 135°. Along the axis directions one side is compared with `>=` so that
//! two-pixel plateaus keep exactly one pixel. Samples outside the image count
//! as zero magnitude.
//!
//! Hysteresis then keeps every candidate 8-connected to a pixel whose
//! magnitude exceeds the high threshold.
use crate::edges::grad::Grad;
use crate::image::GrayImageU8;
use serde::Serialize;

const TAN_22_5_DEG: f32 = 0.414_213_56;

const CANDIDATE: u8 = 1;
const STRONG: u8 = 2;

/// Binary edge map: `255` on edge pixels, `0` elsewhere.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl EdgeMap {
    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    pub fn to_gray(&self) -> GrayImageU8 {
        GrayImageU8::new(self.w, self.h, self.data.clone())
    }
}

/// Summary of one Canny pass, for diagnostics.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CannyCounts {
    pub candidates: usize,
    pub strong: usize,
    pub edges: usize,
}

/// Classify every pixel as suppressed (0), candidate (1) or strong (2).
pub fn run_nms(grad: &Grad, low: f32, high: f32) -> Vec<u8> {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut labels = vec![0u8; w * h];
    if w == 0 || h == 0 {
        return labels;
    }

    let mag: Vec<f32> = (0..w * h).map(|i| grad.l1(i)).collect();
    let at = |x: isize, y: isize| -> f32 {
        if x < 0 || y < 0 || x >= w as isize || y >= h as isize {
            0.0
        } else {
            mag[y as usize * w + x as usize]
        }
    };

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let m = mag[idx];
            if m <= low {
                continue;
            }
            let gx = grad.gx.data[idx];
            let gy = grad.gy.data[idx];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let (xi, yi) = (x as isize, y as isize);

            let is_max = if abs_gy <= abs_gx * TAN_22_5_DEG {
                m > at(xi - 1, yi) && m >= at(xi + 1, yi)
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                m > at(xi, yi - 1) && m >= at(xi, yi + 1)
            } else {
                // Same sign: gradient points along (1, 1) in image coordinates.
                let s: isize = if (gx >= 0.0) == (gy >= 0.0) { 1 } else { -1 };
                m > at(xi - s, yi - 1) && m > at(xi + s, yi + 1)
            };

            if is_max {
                labels[idx] = if m > high { STRONG } else { CANDIDATE };
            }
        }
    }
    labels
}

/// Grow strong pixels through 8-connected candidates.
pub fn hysteresis(labels: &[u8], w: usize, h: usize) -> EdgeMap {
    let mut data = vec![0u8; w * h];
    let mut stack: Vec<usize> = labels
        .iter()
        .enumerate()
        .filter(|&(_, &l)| l == STRONG)
        .map(|(i, _)| i)
        .collect();
    for &i in &stack {
        data[i] = 255;
    }

    while let Some(i) = stack.pop() {
        let (x, y) = (i % w, i / w);
        for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                let j = ny * w + nx;
                if labels[j] != 0 && data[j] == 0 {
                    data[j] = 255;
                    stack.push(j);
                }
            }
        }
    }

    EdgeMap { w, h, data }
}

/// Count NMS outcomes and surviving edges.
pub fn canny_counts(labels: &[u8], edges: &EdgeMap) -> CannyCounts {
    CannyCounts {
        candidates: labels.iter().filter(|&&l| l != 0).count(),
        strong: labels.iter().filter(|&&l| l == STRONG).count(),
        edges: edges.count(),
    }
}
