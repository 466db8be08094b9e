//! Pressure proxy from the intensity distribution of stroke pixels.
//!
//! Thresholds adapt to each drawing: the 25th and 75th percentiles of stroke
//! intensity split pixels into weak `[floor, p25)`, medium `[p25, p75)` and
//! strong `[p75, 255]`. Bucket shares are percentages of *stroke* pixels, not
//! of the whole image.
use super::{mean_std, round_to};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PressureStats {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub weak_pct: f64,
    pub medium_pct: f64,
    pub strong_pct: f64,
    /// Mean stroke intensity.
    pub intensity_mean: f64,
    /// Standard deviation of stroke intensity.
    pub intensity_std: f64,
}

impl PressureStats {
    /// Human-readable bucket thresholds, e.g. `Weak:<64, Medium:64-190, Strong:>190`.
    pub fn thresholds_label(&self) -> String {
        format!(
            "Weak:<{:.0}, Medium:{:.0}-{:.0}, Strong:>{:.0}",
            self.p25, self.p25, self.p75, self.p75
        )
    }
}

/// Percentile `q` (0..=100) of an ascending sample, interpolating linearly
/// between closest ranks. Returns 0 for an empty sample.
pub fn percentile(sorted: &[u8], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0] as f64,
        n => {
            let rank = q.clamp(0.0, 100.0) / 100.0 * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            let frac = rank - lo as f64;
            sorted[lo] as f64 + frac * (sorted[hi] as f64 - sorted[lo] as f64)
        }
    }
}

/// `stroke_values` are the intensities under the stroke mask; `floor` is the
/// stroke threshold bounding the weak bucket from below.
pub fn estimate_pressure(stroke_values: &[u8], floor: u8) -> PressureStats {
    if stroke_values.is_empty() {
        return PressureStats::default();
    }
    let mut sorted = stroke_values.to_vec();
    sorted.sort_unstable();
    let p25 = percentile(&sorted, 25.0);
    let p50 = percentile(&sorted, 50.0);
    let p75 = percentile(&sorted, 75.0);

    let (mut weak, mut medium, mut strong) = (0usize, 0usize, 0usize);
    for &v in stroke_values {
        let v = v as f64;
        if v >= p75 {
            strong += 1;
        } else if v >= p25 {
            medium += 1;
        } else if v >= floor as f64 {
            weak += 1;
        }
    }

    let n = stroke_values.len() as f64;
    let pct = |count: usize| round_to(count as f64 / n * 100.0, 2);
    let (mean, std) = mean_std(stroke_values.iter().map(|&v| v as f64));

    PressureStats {
        p25,
        p50,
        p75,
        weak_pct: pct(weak),
        medium_pct: pct(medium),
        strong_pct: pct(strong),
        intensity_mean: round_to(mean, 2),
        intensity_std: round_to(std, 2),
    }
}
