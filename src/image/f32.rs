//! Owned, tightly packed f32 image on the 0..=255 intensity scale.
//!
//! Holds blurred intensities, derivative responses and distance fields.

use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug)]
pub struct ImageF32 {
    pub w: usize,
    pub h: usize,
    /// Row-major samples, `w * h` of them.
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Zero-filled `w × h` buffer.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Promote an 8-bit view, keeping intensities as they are.
    pub fn from_u8<I>(src: &I) -> Self
    where
        I: ImageView<Pixel = u8>,
    {
        let data = src.rows().flatten().map(|&v| v as f32).collect();
        Self {
            w: src.width(),
            h: src.height(),
            data,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    fn width(&self) -> usize {
        self.w
    }

    fn height(&self) -> usize {
        self.h
    }

    fn stride(&self) -> usize {
        self.w
    }

    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.w..(y + 1) * self.w]
    }

    fn as_slice(&self) -> Option<&[f32]> {
        Some(&self.data)
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let w = self.w;
        &mut self.data[y * w..(y + 1) * w]
    }

    fn as_mut_slice(&mut self) -> Option<&mut [f32]> {
        Some(&mut self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageU8;

    #[test]
    fn promotion_skips_stride_padding() {
        let data = [10u8, 20, 0, 30, 40, 0];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let img = ImageF32::from_u8(&view);
        assert_eq!(img.data, vec![10.0, 20.0, 30.0, 40.0]);
        assert_eq!(img.row(1), &[30.0, 40.0]);
        assert_eq!(img.get(1, 0), 20.0);
    }
}
