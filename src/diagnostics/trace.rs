use crate::analyzer::FeatureReport;
use crate::diagnostics::TimingBreakdown;
use crate::edges::CannyCounts;
use crate::stages::{GridDensityMap, PressureStats, SmoothnessStats};
use serde::Serialize;

/// Result of [`StrokeAnalyzer::analyze_with_diagnostics`](crate::StrokeAnalyzer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub report: FeatureReport,
    pub trace: AnalysisTrace,
}

/// Intermediate values the flat report does not carry.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub edges: CannyCounts,
    /// Per-cell stroke density, row-major.
    pub density_grid: GridDensityMap,
    pub pressure: PressureStats,
    pub smoothness: SmoothnessStats,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    /// Whether the grayscale view was inverted to make strokes bright.
    pub inverted: bool,
    pub stroke_pixels: usize,
}
