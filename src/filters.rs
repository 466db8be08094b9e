//! Separable smoothing filters.
//!
//! Border samples are mirrored without repeating the edge pixel
//! (`gfedcb|abcdefgh|gfedcba`). The 3-tap binomial kernel is the
//! 3×3 Gaussian used ahead of edge detection to knock down scanner noise.

use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_3TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 3-tap Gaussian `[1, 2, 1] / 4` (σ ≈ 0.85, a 3×3 kernel).
pub const GAUSSIAN_3TAP: StaticSeparableFilter = StaticSeparableFilter::new(&[0.25, 0.5, 0.25]);

/// Convolve `src` with `filter` horizontally then vertically.
pub fn apply(filter: &dyn SeparableFilter, src: &ImageF32) -> ImageF32 {
    let taps = filter.taps();
    let (w, h) = (src.w, src.h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 || taps.is_empty() {
        return out;
    }
    let radius = (taps.len() / 2) as isize;

    let mut horiz = ImageF32::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = reflect_index(x as isize + k as isize - radius, w);
                acc += tap * src_row[sx];
            }
            *dst = acc;
        }
    }

    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = reflect_index(y as isize + k as isize - radius, h);
            let src_row = horiz.row(sy);
            for (dst, &v) in dst_row.iter_mut().zip(src_row) {
                *dst += tap * v;
            }
        }
    }
    out
}

/// Map `idx` into `0..upper` by reflection about the edge pixels.
pub(crate) fn reflect_index(idx: isize, upper: usize) -> usize {
    if upper <= 1 {
        return 0;
    }
    let period = 2 * (upper as isize - 1);
    let m = idx.rem_euclid(period);
    if m >= upper as isize {
        (period - m) as usize
    } else {
        m as usize
    }
}
