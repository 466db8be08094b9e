//! Binary stroke mask shared by every analysis stage.

use crate::image::{GrayImageU8, ImageView};

/// `true` where a pixel belongs to a stroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrokeMask {
    pub w: usize,
    pub h: usize,
    pub data: Vec<bool>,
}

impl StrokeMask {
    /// Threshold `gray > threshold`.
    pub fn from_threshold(gray: &GrayImageU8, threshold: u8) -> Self {
        let data = gray.rows().flatten().map(|&v| v > threshold).collect();
        Self {
            w: gray.width(),
            h: gray.height(),
            data,
        }
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x]
    }

    /// Number of stroke pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&m| m).count()
    }

    pub fn total_pixels(&self) -> usize {
        self.w * self.h
    }

    /// Render as a 0/255 grayscale image for inspection.
    pub fn to_gray(&self) -> GrayImageU8 {
        let data = self.data.iter().map(|&m| if m { 255 } else { 0 }).collect();
        GrayImageU8::new(self.w, self.h, data)
    }

    /// Stroke pixels inside the half-open window `[x0, x1) × [y0, y1)`.
    pub fn count_in(&self, x0: usize, x1: usize, y0: usize, y1: usize) -> usize {
        (y0..y1)
            .map(|y| {
                let row = &self.data[y * self.w..(y + 1) * self.w];
                row[x0..x1].iter().filter(|&&m| m).count()
            })
            .sum()
    }

    /// Values of `gray` at stroke pixels, in raster order.
    pub fn select(&self, gray: &GrayImageU8) -> Vec<u8> {
        gray.rows()
            .flatten()
            .zip(&self.data)
            .filter_map(|(&v, &m)| m.then_some(v))
            .collect()
    }

    /// Values of a float buffer at stroke pixels, in raster order.
    pub fn select_f32(&self, values: &[f32]) -> Vec<f32> {
        values
            .iter()
            .zip(&self.data)
            .filter_map(|(&v, &m)| m.then_some(v))
            .collect()
    }
}
