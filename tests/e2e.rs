mod common;

use common::synthetic_image::{
    checkerboard_u8, diagonal_stroke_u8, filled_rect_u8, gray_to_rgb,
};
use stroke_features::prelude::*;
use stroke_features::{ContinuityClass, DensityClass, ThicknessClass};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn analyze_gray(width: usize, height: usize, data: &[u8]) -> FeatureReport {
    let raster = RasterImage::from_interleaved(width, height, 1, data).unwrap();
    StrokeAnalyzer::new(AnalyzerParams::default())
        .analyze(&raster)
        .unwrap()
}

#[test]
fn thin_diagonal_stroke_is_thin_sparse_and_single_segment() {
    init_logger();
    let data = diagonal_stroke_u8(100, 100, 10, 90, 128, 0);
    let report = analyze_gray(100, 100, &data);

    assert!(
        (report.thickness_mean - 2.0).abs() <= 0.5,
        "thickness {}",
        report.thickness_mean
    );
    assert_eq!(report.thickness_class, ThicknessClass::Thin);
    assert_eq!(report.num_segments, 1);
    assert!(report.total_length > 0.0);
    assert_eq!(report.mean_length, report.total_length);

    // 160 stroke pixels over one border of about 229 px.
    assert!(
        (report.connectivity - 0.7).abs() < 0.1,
        "connectivity {}",
        report.connectivity
    );
    assert_eq!(report.continuity_class, ContinuityClass::Fragmented);

    assert_eq!(report.density, 1.6);
    assert!(report.density < 5.0);
    assert_eq!(report.density_class, DensityClass::VerySparse);

    assert_eq!(report.strong_pressure_pct, 100.0);
    assert_eq!(report.medium_pressure_pct, 0.0);
    assert_eq!(report.weak_pressure_pct, 0.0);
    assert_eq!(report.intensity_mean, 128.0);
    assert_eq!(report.pressure_contrast, 0.0);
    assert_eq!(report.normalized_entropy, 0.0);
    assert_eq!(
        report.pressure_thresholds,
        "Weak:<128, Medium:128-128, Strong:>128"
    );
    assert!(report.smoothness > 0.0 && report.smoothness < 1.0);
}

#[test]
fn dark_ink_on_white_matches_light_ink_on_black() {
    init_logger();
    let light = diagonal_stroke_u8(100, 100, 10, 90, 128, 0);
    let dark = diagonal_stroke_u8(100, 100, 10, 90, 127, 255);
    assert_eq!(analyze_gray(100, 100, &light), analyze_gray(100, 100, &dark));
}

#[test]
fn gray_rgb_input_matches_single_channel() {
    init_logger();
    let gray = diagonal_stroke_u8(100, 100, 10, 90, 128, 0);
    let rgb = gray_to_rgb(&gray);
    let raster = RasterImage::from_interleaved(100, 100, 3, &rgb).unwrap();
    let from_rgb = StrokeAnalyzer::default().analyze(&raster).unwrap();
    assert_eq!(from_rgb, analyze_gray(100, 100, &gray));
}

#[test]
fn filled_square_is_one_thick_connected_blob() {
    init_logger();
    let data = filled_rect_u8(40, 40, (10, 10), (30, 30), 200, 0);
    let report = analyze_gray(40, 40, &data);

    assert_eq!(report.thickness_mean, 7.7);
    assert_eq!(report.thickness_max, 20.0);
    assert_eq!(report.thickness_class, ThicknessClass::Thick);

    assert_eq!(report.num_segments, 1);
    assert!(
        report.total_length > 55.0 && report.total_length < 80.0,
        "length {}",
        report.total_length
    );
    assert_eq!(report.continuity_class, ContinuityClass::ModeratelyConnected);

    // 25% exactly: the Very Dense bound is exclusive.
    assert_eq!(report.density, 25.0);
    assert_eq!(report.density_class, DensityClass::Dense);
    assert_eq!(report.density_max_region, 100.0);
    assert_eq!(report.density_variation, 43.3);
    assert_eq!(report.strong_pressure_pct, 100.0);
    assert_eq!(report.intensity_mean, 200.0);
}

#[test]
fn checkerboard_splits_pressure_and_entropy() {
    init_logger();
    let data = checkerboard_u8(64, 64, 8);
    let report = analyze_gray(64, 64, &data);

    assert_eq!(report.density, 100.0);
    assert_eq!(report.density_variation, 0.0);
    assert_eq!(report.density_class, DensityClass::VeryDense);
    assert_eq!(report.strong_pressure_pct, 50.0);
    assert_eq!(report.medium_pressure_pct, 50.0);
    assert_eq!(report.weak_pressure_pct, 0.0);
    assert_eq!(report.intensity_mean, 126.0);
    assert_eq!(report.pressure_contrast, 94.0);
    assert_eq!(report.normalized_entropy, 0.2);
    assert_eq!(
        report.pressure_thresholds,
        "Weak:<32, Medium:32-220, Strong:>220"
    );
    assert!(report.thickness_mean > 0.0);
}

#[test]
fn diagnostics_describe_the_input() {
    init_logger();
    let data = diagonal_stroke_u8(100, 100, 10, 90, 127, 255);
    let raster = RasterImage::from_interleaved(100, 100, 1, &data).unwrap();
    let detailed = StrokeAnalyzer::default()
        .analyze_with_diagnostics(&raster)
        .unwrap();
    let input = &detailed.trace.input;
    assert_eq!((input.width, input.height, input.channels), (100, 100, 1));
    assert!(input.inverted);
    assert_eq!(input.stroke_pixels, 160);
    assert_eq!(detailed.trace.pressure.p50, 128.0);
    assert!(detailed.trace.timings.total_ms >= 0.0);

    let json = serde_json::to_value(&detailed).unwrap();
    assert_eq!(json["report"]["num_segmentos"], 1);
    assert_eq!(json["trace"]["input"]["strokePixels"], 160);
}
