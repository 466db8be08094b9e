//! I/O helpers for drawings and JSON.
//!
//! - `load_raster`: decode a TIFF/PNG/JPEG/etc. into an owned buffer that keeps
//!   the grayscale vs. color distinction (alpha is dropped).
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `debug_image_path`: `<stem>_<suffix>.png` names for debug renderings.
//! - `list_images`: files in a directory whose extension is in a list.
use super::raster::RasterImage;
use super::u8::GrayImageU8;
use super::ImageView;
use crate::error::AnalysisError;
use image::{DynamicImage, GrayImage};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Owned decoded drawing with 1 or 3 interleaved channels.
#[derive(Clone, Debug)]
pub struct OwnedRaster {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl OwnedRaster {
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Borrow as a validated `RasterImage`.
    pub fn as_raster(&self) -> Result<RasterImage<'_>, AnalysisError> {
        RasterImage::from_interleaved(self.width, self.height, self.channels, &self.data)
    }
}

impl From<DynamicImage> for OwnedRaster {
    fn from(img: DynamicImage) -> Self {
        let (width, height) = (img.width() as usize, img.height() as usize);
        if img.color().has_color() {
            Self::new(width, height, 3, img.into_rgb8().into_raw())
        } else {
            Self::new(width, height, 1, img.into_luma8().into_raw())
        }
    }
}

/// Load an image from disk, keeping single-channel scans single-channel.
pub fn load_raster(path: &Path) -> Result<OwnedRaster, AnalysisError> {
    let img = image::open(path)?;
    Ok(OwnedRaster::from(img))
}

/// Files directly inside `dir` whose extension matches one of `extensions`
/// (case-insensitive), sorted by path.
pub fn list_images(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, AnalysisError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
        if matches {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// `<dir>/<stem>_<suffix>.png` for a debug rendering of `source`.
pub fn debug_image_path(dir: &Path, source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    dir.join(format!("{stem}_{suffix}.png"))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
