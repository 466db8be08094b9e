//! Contour extraction from binary edge maps.
//!
//! Borders are followed with `imageproc`'s Suzuki–Abe implementation. Only
//! outer borders without a parent are kept: a component sitting inside the
//! hole of another component is skipped, as is every hole border.
//!
//! Polylines are stored as integer pixel coordinates, optionally compressed to
//! their corner points (see [`ChainApprox`]).

mod geometry;

pub use geometry::{arc_length, contour_area, simplify_chain};

use crate::edges::EdgeMap;
use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate on a contour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// How traced chains are stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainApprox {
    /// Keep every boundary pixel.
    None,
    /// Collapse straight horizontal, vertical and diagonal runs to endpoints.
    #[default]
    Simple,
}

/// One traced outer border.
#[derive(Clone, Debug, Serialize)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    /// Enclosed polygon area (shoelace, absolute value).
    pub fn area(&self) -> f64 {
        contour_area(&self.points)
    }

    /// Open-curve arc length (no closing segment).
    pub fn length(&self) -> f64 {
        arc_length(&self.points, false)
    }
}

/// Ordered set of contours surviving the noise-area filter.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ContourSet {
    pub contours: Vec<Contour>,
}

impl ContourSet {
    /// Trace external contours and drop those enclosing less than `min_area`.
    pub fn extract(edges: &EdgeMap, approx: ChainApprox, min_area: f64) -> Self {
        let contours = find_external_contours(edges, approx)
            .into_iter()
            .filter(|c| c.area() >= min_area)
            .collect();
        Self { contours }
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Sum of open arc lengths.
    pub fn total_length(&self) -> f64 {
        self.contours.iter().map(Contour::length).sum()
    }
}

/// Outer borders of all top-level 8-connected edge components, in raster
/// order of their starting pixel.
pub fn find_external_contours(edges: &EdgeMap, approx: ChainApprox) -> Vec<Contour> {
    if edges.w == 0 || edges.h == 0 {
        return Vec::new();
    }
    let Some(image) = GrayImage::from_raw(edges.w as u32, edges.h as u32, edges.data.clone())
    else {
        return Vec::new();
    };

    find_contours::<i32>(&image)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .map(|c| {
            let chain: Vec<Point> = c.points.iter().map(|p| Point::new(p.x, p.y)).collect();
            let points = match approx {
                ChainApprox::None => chain,
                ChainApprox::Simple => simplify_chain(&chain),
            };
            Contour { points }
        })
        .collect()
}
