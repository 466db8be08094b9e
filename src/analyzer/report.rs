//! Flat per-image feature record.
//!
//! Serializes to a JSON object whose keys are the Portuguese metric names used
//! by the downstream spreadsheets (`espessura_media` … `classificacao_densidade`),
//! in that order. Labels serialize as their display text.

use crate::classify::{
    classify_connectivity, classify_density, classify_thickness, ContinuityClass, DensityClass,
    ThicknessClass,
};
use crate::stages::{ContinuityStats, DensityStats, PressureStats, SmoothnessStats, ThicknessStats};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureReport {
    #[serde(rename = "espessura_media")]
    pub thickness_mean: f64,
    #[serde(rename = "espessura_max")]
    pub thickness_max: f64,
    #[serde(rename = "espessura_std")]
    pub thickness_std: f64,
    #[serde(rename = "num_segmentos")]
    pub num_segments: usize,
    #[serde(rename = "comprimento_total")]
    pub total_length: f64,
    #[serde(rename = "comprimento_medio")]
    pub mean_length: f64,
    #[serde(rename = "conectividade")]
    pub connectivity: f64,
    #[serde(rename = "suavidade")]
    pub smoothness: f64,
    #[serde(rename = "densidade_tracos")]
    pub density: f64,
    #[serde(rename = "variacao_densidade")]
    pub density_variation: f64,
    #[serde(rename = "densidade_max_regiao")]
    pub density_max_region: f64,
    #[serde(rename = "pressao_forte_pct")]
    pub strong_pressure_pct: f64,
    #[serde(rename = "pressao_media_pct")]
    pub medium_pressure_pct: f64,
    #[serde(rename = "pressao_fraca_pct")]
    pub weak_pressure_pct: f64,
    #[serde(rename = "intensidade_media")]
    pub intensity_mean: f64,
    #[serde(rename = "contraste_pressao")]
    pub pressure_contrast: f64,
    #[serde(rename = "entropia_normalizada")]
    pub normalized_entropy: f64,
    #[serde(rename = "thresholds_pressao")]
    pub pressure_thresholds: String,
    #[serde(rename = "classificacao_espessura")]
    pub thickness_class: ThicknessClass,
    #[serde(rename = "classificacao_continuidade")]
    pub continuity_class: ContinuityClass,
    #[serde(rename = "classificacao_densidade")]
    pub density_class: DensityClass,
}

/// One report cell: a count, a measurement or a label.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Count(usize),
    Number(f64),
    Text(String),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Count(v) => write!(f, "{v}"),
            ReportValue::Number(v) => write!(f, "{v}"),
            ReportValue::Text(v) => f.write_str(v),
        }
    }
}

impl FeatureReport {
    /// Assemble the report from the stage outputs and derive the labels.
    pub fn from_stages(
        thickness: &ThicknessStats,
        continuity: &ContinuityStats,
        smoothness: &SmoothnessStats,
        density: &DensityStats,
        pressure: &PressureStats,
        normalized_entropy: f64,
    ) -> Self {
        Self {
            thickness_mean: thickness.mean,
            thickness_max: thickness.max,
            thickness_std: thickness.std,
            num_segments: continuity.num_segments,
            total_length: continuity.total_length,
            mean_length: continuity.mean_length,
            connectivity: continuity.connectivity,
            smoothness: smoothness.smoothness,
            density: density.density,
            density_variation: density.variation,
            density_max_region: density.max_region,
            strong_pressure_pct: pressure.strong_pct,
            medium_pressure_pct: pressure.medium_pct,
            weak_pressure_pct: pressure.weak_pct,
            intensity_mean: pressure.intensity_mean,
            pressure_contrast: pressure.intensity_std,
            normalized_entropy,
            pressure_thresholds: pressure.thresholds_label(),
            thickness_class: classify_thickness(thickness.mean),
            continuity_class: classify_connectivity(continuity.connectivity),
            density_class: classify_density(density.density),
        }
    }

    /// `(key, value)` pairs in serialization order, for tabular exporters.
    pub fn entries(&self) -> Vec<(&'static str, ReportValue)> {
        use ReportValue::{Count, Number, Text};
        vec![
            ("espessura_media", Number(self.thickness_mean)),
            ("espessura_max", Number(self.thickness_max)),
            ("espessura_std", Number(self.thickness_std)),
            ("num_segmentos", Count(self.num_segments)),
            ("comprimento_total", Number(self.total_length)),
            ("comprimento_medio", Number(self.mean_length)),
            ("conectividade", Number(self.connectivity)),
            ("suavidade", Number(self.smoothness)),
            ("densidade_tracos", Number(self.density)),
            ("variacao_densidade", Number(self.density_variation)),
            ("densidade_max_regiao", Number(self.density_max_region)),
            ("pressao_forte_pct", Number(self.strong_pressure_pct)),
            ("pressao_media_pct", Number(self.medium_pressure_pct)),
            ("pressao_fraca_pct", Number(self.weak_pressure_pct)),
            ("intensidade_media", Number(self.intensity_mean)),
            ("contraste_pressao", Number(self.pressure_contrast)),
            ("entropia_normalizada", Number(self.normalized_entropy)),
            ("thresholds_pressao", Text(self.pressure_thresholds.clone())),
            ("classificacao_espessura", Text(self.thickness_class.to_string())),
            ("classificacao_continuidade", Text(self.continuity_class.to_string())),
            ("classificacao_densidade", Text(self.density_class.to_string())),
        ]
    }
}
