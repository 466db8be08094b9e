//! Fixed-breakpoint labels for thickness, connectivity and density.
//!
//! Tables are evaluated top-down and the first matching row wins. Thickness
//! rows test `value < bound` in ascending order; connectivity and density rows
//! test `value > bound` in descending order. The final label catches
//! everything else, so every finite input maps to exactly one label.

use serde::Serialize;
use std::fmt;

macro_rules! labelled_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labelled_enum!(ThicknessClass {
    VeryThin => "Very Thin",
    Thin => "Thin",
    Medium => "Medium",
    Thick => "Thick",
    VeryThick => "Very Thick",
});

labelled_enum!(ContinuityClass {
    HighlyConnected => "Highly Connected",
    Connected => "Connected",
    ModeratelyConnected => "Moderately Connected",
    WeaklyConnected => "Weakly Connected",
    Fragmented => "Fragmented",
});

labelled_enum!(DensityClass {
    VeryDense => "Very Dense",
    Dense => "Dense",
    Moderate => "Moderate",
    Sparse => "Sparse",
    VerySparse => "Very Sparse",
});

const THICKNESS_BELOW: [(f64, ThicknessClass); 4] = [
    (1.5, ThicknessClass::VeryThin),
    (3.0, ThicknessClass::Thin),
    (5.0, ThicknessClass::Medium),
    (8.0, ThicknessClass::Thick),
];

const CONNECTIVITY_ABOVE: [(f64, ContinuityClass); 4] = [
    (15.0, ContinuityClass::HighlyConnected),
    (8.0, ContinuityClass::Connected),
    (4.0, ContinuityClass::ModeratelyConnected),
    (2.0, ContinuityClass::WeaklyConnected),
];

const DENSITY_ABOVE: [(f64, DensityClass); 4] = [
    (25.0, DensityClass::VeryDense),
    (15.0, DensityClass::Dense),
    (8.0, DensityClass::Moderate),
    (3.0, DensityClass::Sparse),
];

pub fn classify_thickness(mean_thickness: f64) -> ThicknessClass {
    THICKNESS_BELOW
        .iter()
        .find(|(bound, _)| mean_thickness < *bound)
        .map_or(ThicknessClass::VeryThick, |&(_, class)| class)
}

pub fn classify_connectivity(connectivity: f64) -> ContinuityClass {
    CONNECTIVITY_ABOVE
        .iter()
        .find(|(bound, _)| connectivity > *bound)
        .map_or(ContinuityClass::Fragmented, |&(_, class)| class)
}

pub fn classify_density(density_pct: f64) -> DensityClass {
    DENSITY_ABOVE
        .iter()
        .find(|(bound, _)| density_pct > *bound)
        .map_or(DensityClass::VerySparse, |&(_, class)| class)
}
