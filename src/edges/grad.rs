//! First- and second-derivative responses on a single-channel float image.
//!
//! - Convolves a 3×3 kernel pair (`X` and `Y`) with mirrored borders.
//! - Outputs per-pixel `gx`, `gy`, `mag = sqrt(gx^2+gy^2)`.
//! - `laplacian` applies the 4-neighbour second-derivative kernel.
//!
//! Complexity: O(W·H) per pass; memory: three float buffers.
use crate::filters::reflect_index;
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const LAPLACIAN_KERNEL: Kernel3 = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y), positive downwards
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
}

impl Grad {
    /// L1 magnitude `|gx| + |gy|` at linear index `idx`.
    #[inline]
    pub fn l1(&self, idx: usize) -> f32 {
        self.gx.data[idx].abs() + self.gy.data[idx].abs()
    }
}

#[inline]
fn convolve_at(rows: &[&[f32]; 3], x_idx: &[usize; 3], kernel: &Kernel3) -> f32 {
    let mut sum = 0.0;
    for (row, k_row) in rows.iter().zip(kernel.iter()) {
        sum += row[x_idx[0]] * k_row[0] + row[x_idx[1]] * k_row[1] + row[x_idx[2]] * k_row[2];
    }
    sum
}

#[inline]
fn neighbourhood(l: &ImageF32, y: usize) -> [&[f32]; 3] {
    let y = y as isize;
    [
        l.row(reflect_index(y - 1, l.h)),
        l.row(y as usize),
        l.row(reflect_index(y + 1, l.h)),
    ]
}

#[inline]
fn columns(x: usize, w: usize) -> [usize; 3] {
    let x = x as isize;
    [reflect_index(x - 1, w), x as usize, reflect_index(x + 1, w)]
}

fn gradients_with_kernels(l: &ImageF32, kernel_x: &Kernel3, kernel_y: &Kernel3) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let rows = neighbourhood(l, y);
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = columns(x, w);
            let sum_x = convolve_at(&rows, &x_idx, kernel_x);
            let sum_y = convolve_at(&rows, &x_idx, kernel_y);
            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { gx, gy, mag }
}

/// Compute Sobel gradients on a single-channel float image.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    gradients_with_kernels(l, &SOBEL_KERNEL_X, &SOBEL_KERNEL_Y)
}

/// 4-neighbour Laplacian response with mirrored borders.
pub fn laplacian(l: &ImageF32) -> ImageF32 {
    let (w, h) = (l.w, l.h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    for y in 0..h {
        let rows = neighbourhood(l, y);
        let dst = out.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let x_idx = columns(x, w);
            *px = convolve_at(&rows, &x_idx, &LAPLACIAN_KERNEL);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step(w: usize, h: usize, split: usize, hi: f32) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in split..w {
                img.set(x, y, hi);
            }
        }
        img
    }

    #[test]
    fn sobel_responds_horizontally_to_vertical_step() {
        let img = vertical_step(8, 6, 4, 10.0);
        let grad = sobel_gradients(&img);
        // Two columns straddle the step; each sees a full 4 * 10 response.
        assert_eq!(grad.gx.get(3, 3), 40.0);
        assert_eq!(grad.gx.get(4, 3), 40.0);
        assert_eq!(grad.gy.get(3, 3), 0.0);
        assert_eq!(grad.mag.get(3, 3), 40.0);
        assert_eq!(grad.gx.get(1, 3), 0.0);
        assert_eq!(grad.l1(3 * 8 + 3), 40.0);
    }

    #[test]
    fn laplacian_vanishes_on_flat_and_linear_regions() {
        let mut img = ImageF32::new(6, 6);
        for y in 0..6 {
            for x in 0..6 {
                img.set(x, y, 3.0 * x as f32);
            }
        }
        let lap = laplacian(&img);
        for y in 0..6 {
            for x in 1..5 {
                assert_eq!(lap.get(x, y), 0.0);
            }
        }
    }

    #[test]
    fn laplacian_of_impulse_is_negative_centre() {
        let mut img = ImageF32::new(5, 5);
        img.set(2, 2, 1.0);
        let lap = laplacian(&img);
        assert_eq!(lap.get(2, 2), -4.0);
        assert_eq!(lap.get(2, 1), 1.0);
        assert_eq!(lap.get(1, 1), 0.0);
    }

    #[test]
    fn mirrored_border_sees_the_step_beside_it() {
        // Step between columns 0 and 1: column 0 reads column 1 on both sides.
        let img = vertical_step(4, 3, 1, 10.0);
        let grad = sobel_gradients(&img);
        assert_eq!(grad.gx.get(0, 1), 0.0);
        assert_eq!(grad.gx.get(1, 1), 40.0);
        let lap = laplacian(&img);
        assert_eq!(lap.get(0, 1), 20.0);
    }
}
