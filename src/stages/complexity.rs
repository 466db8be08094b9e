//! Tonal complexity: Shannon entropy of the stroke intensity histogram.
use super::round_to;
use crate::analyzer::params::ComplexityParams;

/// Histogram of `values` with `bins` equal-width bins spanning `[0, 255]`;
/// 255 falls into the last bin.
pub fn intensity_histogram(values: &[u8], bins: usize) -> Vec<usize> {
    let mut hist = vec![0usize; bins];
    if bins == 0 {
        return hist;
    }
    let scale = bins as f64 / 255.0;
    for &v in values {
        let bin = ((v as f64 * scale) as usize).min(bins - 1);
        hist[bin] += 1;
    }
    hist
}

/// Entropy (bits) over non-empty bins, divided by `entropy_scale`.
pub fn normalized_entropy(values: &[u8], params: &ComplexityParams) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let hist = intensity_histogram(values, params.histogram_bins);
    let total = values.len() as f64;
    let entropy: f64 = hist
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            p * (1.0 / p).log2()
        })
        .sum();
    round_to(entropy / params.entropy_scale, 3)
}
