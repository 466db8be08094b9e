//! Exact Euclidean distance transform of a stroke mask.
//!
//! Squared distances come from `imageproc`'s separable transform, run on an
//! image whose foreground is the mask background. Only in-image non-stroke
//! pixels are background; when a mask has no background at all the distance
//! to the image frame is used instead.
use crate::image::{ImageF32, ImageView};
use crate::mask::StrokeMask;
use image::{GrayImage, Luma};
use imageproc::distance_transform::euclidean_squared_distance_transform;

/// Per-pixel Euclidean distance from stroke pixels to the nearest background
/// pixel. Background pixels hold exactly 0. Values are radii, not diameters.
#[derive(Clone, Debug)]
pub struct DistanceField {
    pub field: ImageF32,
}

impl DistanceField {
    pub fn compute(mask: &StrokeMask) -> Self {
        let (w, h) = (mask.w, mask.h);
        let mut field = ImageF32::new(w, h);
        if w == 0 || h == 0 {
            return Self { field };
        }
        if mask.data.iter().all(|&m| m) {
            for y in 0..h {
                for x in 0..w {
                    let d = (x + 1).min(y + 1).min(w - x).min(h - y);
                    field.set(x, y, d as f32);
                }
            }
            return Self { field };
        }

        let background = GrayImage::from_fn(w as u32, h as u32, |x, y| {
            if mask.is_set(x as usize, y as usize) {
                Luma([0])
            } else {
                Luma([255])
            }
        });
        let sq = euclidean_squared_distance_transform(&background);
        for (dst, px) in field.data.iter_mut().zip(sq.pixels()) {
            *dst = px.0[0].sqrt() as f32;
        }
        Self { field }
    }

    #[inline]
    pub fn radius(&self, x: usize, y: usize) -> f32 {
        self.field.get(x, y)
    }

    /// Strictly positive distances in raster order.
    pub fn positive(&self) -> impl Iterator<Item = f32> + '_ {
        self.field.rows().flatten().copied().filter(|&d| d > 0.0)
    }
}
