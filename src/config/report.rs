use crate::analyzer::AnalyzerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `stroke_report` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct ReportToolConfig {
    pub input_dir: PathBuf,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub analyzer: AnalyzerParams,
    pub output: ReportOutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReportOutputConfig {
    pub report_json: PathBuf,
    /// When set, stroke masks and edge maps are written here as PNGs.
    #[serde(default)]
    pub debug_dir: Option<PathBuf>,
}

fn default_extensions() -> Vec<String> {
    ["tif", "tiff", "png", "jpg", "jpeg"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn load_config(path: &Path) -> Result<ReportToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: ReportToolConfig = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    config
        .analyzer
        .validate()
        .map_err(|e| format!("Invalid config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        fs::write(
            &path,
            r#"{ "input_dir": "scans", "output": { "report_json": "out/features.json" } }"#,
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("scans"));
        assert_eq!(config.extensions, ["tif", "tiff", "png", "jpg", "jpeg"]);
        assert_eq!(config.analyzer, AnalyzerParams::default());
        assert!(config.output.debug_dir.is_none());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_config(Path::new("/no/such/config.json")).unwrap_err();
        assert!(err.contains("/no/such/config.json"), "{err}");
    }

    #[test]
    fn unusable_analyzer_params_are_rejected_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        fs::write(
            &path,
            r#"{ "input_dir": "scans",
                 "analyzer": { "complexity": { "entropy_scale": 0.0 } },
                 "output": { "report_json": "out/features.json" } }"#,
        )
        .unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.contains("complexity.entropy_scale"), "{err}");
    }
}
