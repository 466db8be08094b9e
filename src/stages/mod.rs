//! Per-image analysis stages.
//!
//! Every stage reads the same normalized grayscale buffer and stroke mask and
//! none depends on another stage's numbers, so they may run in any order.
//! Each stage defines a zero (or, for smoothness, 1.0) result when there is
//! too little stroke signal, which keeps every reported value finite.

pub mod complexity;
pub mod continuity;
pub mod density;
pub mod pressure;
pub mod smoothness;
pub mod thickness;

pub use complexity::normalized_entropy;
pub use continuity::{
    continuity_from_contours, estimate_continuity, trace_contours, ContinuityStats,
};
pub use density::{estimate_density, DensityStats, GridDensityMap};
pub use pressure::{estimate_pressure, percentile, PressureStats};
pub use smoothness::{estimate_smoothness, SmoothnessStats};
pub use thickness::{estimate_thickness, ThicknessStats};

/// Round half away from zero to `decimals` places.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Population mean and standard deviation; `(0, 0)` for an empty sample.
pub fn mean_std<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    let (count, sum) = iter
        .clone()
        .fold((0usize, 0.0f64), |(n, s), v| (n + 1, s + v));
    if count == 0 {
        return (0.0, 0.0);
    }
    let mean = sum / count as f64;
    let var = iter.map(|v| (v - mean) * (v - mean)).sum::<f64>() / count as f64;
    (mean, var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_keeps_requested_decimals() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(0.0005, 3), 0.001);
        assert_eq!(round_to(2.0, 2), 2.0);
    }

    #[test]
    fn mean_std_is_population_based() {
        let (mean, std) = mean_std([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(mean, 5.0);
        assert_eq!(std, 2.0);
        assert_eq!(mean_std(std::iter::empty::<f64>()), (0.0, 0.0));
    }
}
