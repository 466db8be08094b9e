//! Parallel analysis of many drawings.
//!
//! Each item is an independent task on the rayon pool. A failing item is
//! logged and recorded with its id; the rest of the batch still runs.
//! Reports and failures keep the input order.

use super::{FeatureReport, StrokeAnalyzer};
use crate::error::AnalysisError;
use crate::image::io::load_raster;
use crate::image::RasterImage;
use log::warn;
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize)]
pub struct BatchEntry {
    pub id: String,
    pub report: FeatureReport,
}

#[derive(Debug, Serialize)]
pub struct BatchFailure {
    pub id: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: AnalysisError,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchResult {
    pub reports: Vec<BatchEntry>,
    pub failures: Vec<BatchFailure>,
}

impl BatchResult {
    fn collect(outcomes: Vec<(String, Result<FeatureReport, AnalysisError>)>) -> Self {
        let mut result = Self::default();
        for (id, outcome) in outcomes {
            match outcome {
                Ok(report) => result.reports.push(BatchEntry { id, report }),
                Err(error) => {
                    warn!("analysis of {id} failed: {error}");
                    result.failures.push(BatchFailure { id, error });
                }
            }
        }
        result
    }

    /// Number of items processed, successful or not.
    pub fn len(&self) -> usize {
        self.reports.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn serialize_display<S: Serializer>(error: &AnalysisError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(error)
}

/// File name used as the id of a drawing loaded from disk.
pub fn path_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl StrokeAnalyzer {
    /// Analyze in-memory rasters tagged with caller ids.
    pub fn analyze_batch<S>(&self, items: &[(S, RasterImage<'_>)]) -> BatchResult
    where
        S: AsRef<str> + Sync,
    {
        let outcomes = items
            .par_iter()
            .map(|(id, raster)| (id.as_ref().to_string(), self.analyze(raster)))
            .collect();
        BatchResult::collect(outcomes)
    }

    /// Load and analyze image files; decode failures are reported per file.
    pub fn analyze_files(&self, paths: &[PathBuf]) -> BatchResult {
        let outcomes = paths
            .par_iter()
            .map(|path| {
                let outcome = load_raster(path)
                    .and_then(|owned| self.analyze(&owned.as_raster()?));
                (path_id(path), outcome)
            })
            .collect();
        BatchResult::collect(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageU8;

    #[test]
    fn failures_keep_their_id_and_order() {
        let good = vec![0u8; 16 * 16];
        let items = vec![
            ("first", RasterImage::from_interleaved(16, 16, 1, &good).unwrap()),
            (
                "broken",
                RasterImage::Grayscale(ImageU8 {
                    w: 0,
                    h: 4,
                    stride: 0,
                    data: &[],
                }),
            ),
            ("last", RasterImage::from_interleaved(16, 16, 1, &good).unwrap()),
        ];
        let result = StrokeAnalyzer::default().analyze_batch(&items);
        assert_eq!(result.len(), 3);
        let ids: Vec<_> = result.reports.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["first", "last"]);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].id, "broken");
        assert!(matches!(
            result.failures[0].error,
            AnalysisError::InvalidShape { .. }
        ));

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["failures"][0]["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid raster shape"));
    }

    #[test]
    fn unreadable_files_become_failures() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("scan.tif");
        std::fs::write(&bogus, b"not an image").unwrap();
        let result = StrokeAnalyzer::default().analyze_files(&[bogus]);
        assert!(result.reports.is_empty());
        assert_eq!(result.failures[0].id, "scan.tif");
        assert!(matches!(result.failures[0].error, AnalysisError::Image(_)));
    }
}
