//! Per-call diagnostics returned alongside a [`FeatureReport`](crate::FeatureReport).
//!
//! `AnalysisReport` bundles the flat report with an `AnalysisTrace`: the input
//! descriptor, stage timings and the intermediate statistics (edge counts,
//! density grid, pressure percentiles, roughness terms) behind the report.

pub mod timing;
pub mod trace;

pub use timing::{StageTiming, TimingBreakdown};
pub use trace::{AnalysisReport, AnalysisTrace, InputDescriptor};
