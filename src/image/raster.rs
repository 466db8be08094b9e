//! Tagged raster input accepted by the analyzer.
//!
//! Decoders hand over either a single-channel buffer or an interleaved
//! three-channel buffer. The variant is resolved once by the grayscale
//! normalizer, so every later stage only ever sees one canonical shape.

use super::u8::ImageU8;
use crate::error::AnalysisError;

/// Borrowed interleaved 3-channel image (one byte per channel).
#[derive(Clone, Copy, Debug)]
pub struct ColorImageU8<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between consecutive rows (at least `3 * w`).
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> ColorImageU8<'a> {
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + 3 * x;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + 3 * self.w]
    }
}

/// Decoded drawing, either grayscale or color.
#[derive(Clone, Copy, Debug)]
pub enum RasterImage<'a> {
    Grayscale(ImageU8<'a>),
    Color(ColorImageU8<'a>),
}

impl<'a> RasterImage<'a> {
    /// Build a validated raster from a tightly packed interleaved buffer.
    ///
    /// `channels` must be 1 or 3 and `data` must hold at least
    /// `width * height * channels` bytes.
    pub fn from_interleaved(
        width: usize,
        height: usize,
        channels: usize,
        data: &'a [u8],
    ) -> Result<Self, AnalysisError> {
        let raster = match channels {
            1 => RasterImage::Grayscale(ImageU8 {
                w: width,
                h: height,
                stride: width,
                data,
            }),
            3 => RasterImage::Color(ColorImageU8 {
                w: width,
                h: height,
                stride: 3 * width,
                data,
            }),
            _ => {
                return Err(AnalysisError::InvalidShape {
                    width,
                    height,
                    channels,
                })
            }
        };
        raster.validate()?;
        Ok(raster)
    }

    pub fn width(&self) -> usize {
        match self {
            RasterImage::Grayscale(img) => img.w,
            RasterImage::Color(img) => img.w,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            RasterImage::Grayscale(img) => img.h,
            RasterImage::Color(img) => img.h,
        }
    }

    pub fn channels(&self) -> usize {
        match self {
            RasterImage::Grayscale(_) => 1,
            RasterImage::Color(_) => 3,
        }
    }

    /// Check dimensions, stride and buffer length.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let (w, h, channels) = (self.width(), self.height(), self.channels());
        if w == 0 || h == 0 {
            return Err(AnalysisError::InvalidShape {
                width: w,
                height: h,
                channels,
            });
        }
        let (stride, len) = match self {
            RasterImage::Grayscale(img) => (img.stride, img.data.len()),
            RasterImage::Color(img) => (img.stride, img.data.len()),
        };
        if stride < w * channels {
            return Err(AnalysisError::InvalidShape {
                width: w,
                height: h,
                channels,
            });
        }
        let expected = stride * (h - 1) + w * channels;
        if len < expected {
            return Err(AnalysisError::BufferSize {
                expected,
                actual: len,
            });
        }
        Ok(())
    }
}
