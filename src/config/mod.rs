//! JSON configuration for the command-line tools.

pub mod report;

pub use report::{load_config, ReportOutputConfig, ReportToolConfig};
