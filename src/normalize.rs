//! Grayscale normalization: canonical single-channel view, polarity and mask.
//!
//! Drawings arrive either as ink on paper (dark strokes, light background) or
//! the reverse. After conversion to luma, images whose mean intensity exceeds
//! the inversion threshold are inverted, so strokes are always the bright
//! signal. The stroke mask is `gray > stroke_threshold`.

use crate::analyzer::params::NormalizeParams;
use crate::error::AnalysisError;
use crate::image::{ColorImageU8, GrayImageU8, ImageU8, ImageView, RasterImage};
use crate::mask::StrokeMask;
use log::debug;

/// Output of the normalizer: polarity-corrected grayscale and stroke mask.
#[derive(Clone, Debug)]
pub struct Normalized {
    pub gray: GrayImageU8,
    pub mask: StrokeMask,
    /// Whether the luma image was inverted.
    pub inverted: bool,
}

/// Rec.601 luma, rounded to nearest.
#[inline]
pub fn luma(rgb: [u8; 3]) -> u8 {
    let y = 0.299 * rgb[0] as f32 + 0.587 * rgb[1] as f32 + 0.114 * rgb[2] as f32;
    y.round().clamp(0.0, 255.0) as u8
}

fn gray_from_view(img: &ImageU8<'_>) -> GrayImageU8 {
    let data = img.rows().flatten().copied().collect();
    GrayImageU8::new(img.w, img.h, data)
}

fn gray_from_color(img: &ColorImageU8<'_>) -> GrayImageU8 {
    let mut data = Vec::with_capacity(img.w * img.h);
    for y in 0..img.h {
        data.extend(
            img.row(y)
                .chunks_exact(3)
                .map(|px| luma([px[0], px[1], px[2]])),
        );
    }
    GrayImageU8::new(img.w, img.h, data)
}

/// Resolve the raster variant into a single grayscale buffer.
pub fn to_grayscale(raster: &RasterImage<'_>) -> Result<GrayImageU8, AnalysisError> {
    raster.validate()?;
    Ok(match raster {
        RasterImage::Grayscale(img) => gray_from_view(img),
        RasterImage::Color(img) => gray_from_color(img),
    })
}

/// Stage 1: grayscale, auto-invert, threshold.
pub fn normalize(
    raster: &RasterImage<'_>,
    params: &NormalizeParams,
) -> Result<Normalized, AnalysisError> {
    let gray = to_grayscale(raster)?;
    let mean = gray.mean();
    let inverted = mean > params.invert_mean_threshold;
    let gray = if inverted { gray.inverted() } else { gray };
    let mask = StrokeMask::from_threshold(&gray, params.stroke_threshold);
    debug!(
        "normalize w={} h={} mean={:.2} inverted={} stroke_pixels={}",
        gray.width(),
        gray.height(),
        mean,
        inverted,
        mask.count()
    );
    Ok(Normalized {
        gray,
        mask,
        inverted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_ink_on_white_is_inverted() {
        let mut data = vec![255u8; 10 * 10];
        data[55] = 0;
        let raster = RasterImage::from_interleaved(10, 10, 1, &data).unwrap();
        let out = normalize(&raster, &NormalizeParams::default()).unwrap();
        assert!(out.inverted);
        assert_eq!(out.gray.get(5, 5), 255);
        assert_eq!(out.gray.get(0, 0), 0);
        assert_eq!(out.mask.count(), 1);
    }

    #[test]
    fn light_strokes_on_black_are_left_alone() {
        let mut data = vec![0u8; 10 * 10];
        data[11] = 128;
        let raster = RasterImage::from_interleaved(10, 10, 1, &data).unwrap();
        let out = normalize(&raster, &NormalizeParams::default()).unwrap();
        assert!(!out.inverted);
        assert_eq!(out.gray.get(1, 1), 128);
        assert!(out.mask.is_set(1, 1));
    }

    #[test]
    fn color_input_uses_luma_weights() {
        assert_eq!(luma([255, 0, 0]), 76);
        assert_eq!(luma([0, 255, 0]), 150);
        assert_eq!(luma([0, 0, 255]), 29);
        assert_eq!(luma([200, 200, 200]), 200);

        let data = [0u8, 0, 0, 255, 255, 255];
        let raster = RasterImage::from_interleaved(2, 1, 3, &data).unwrap();
        let gray = to_grayscale(&raster).unwrap();
        assert_eq!(gray.data(), &[0, 255]);
    }

    #[test]
    fn strided_grayscale_views_are_packed() {
        let data = [1u8, 2, 99, 3, 4, 99];
        let raster = RasterImage::Grayscale(ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        });
        let gray = to_grayscale(&raster).unwrap();
        assert_eq!(gray.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn empty_raster_is_rejected() {
        let raster = RasterImage::Grayscale(ImageU8 {
            w: 0,
            h: 5,
            stride: 0,
            data: &[],
        });
        let err = normalize(&raster, &NormalizeParams::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidShape { .. }));
    }
}
