//! Global stroke coverage and its spatial variation over a coarse grid.
use super::{mean_std, round_to};
use crate::analyzer::params::DensityParams;
use crate::mask::StrokeMask;
use serde::Serialize;

/// Row-major grid of per-cell stroke percentages.
///
/// Cells are `dim / n` pixels wide (tall); the last column (row) extends to
/// the image edge and absorbs the remainder. A cell with no pixels reads 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GridDensityMap {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<f64>,
}

/// Half-open `[start, end)` bounds of cell `i` out of `n` along `dim`.
pub fn cell_bounds(i: usize, n: usize, dim: usize) -> (usize, usize) {
    let step = dim / n;
    let start = i * step;
    let end = if i + 1 == n { dim } else { (i + 1) * step };
    (start, end)
}

impl GridDensityMap {
    pub fn compute(mask: &StrokeMask, rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            let (y0, y1) = cell_bounds(i, rows, mask.h);
            for j in 0..cols {
                let (x0, x1) = cell_bounds(j, cols, mask.w);
                let area = (y1 - y0) * (x1 - x0);
                let density = if area == 0 {
                    0.0
                } else {
                    mask.count_in(x0, x1, y0, y1) as f64 / area as f64 * 100.0
                };
                cells.push(density);
            }
        }
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }

    /// Standard deviation across cells (spatial variation).
    pub fn std(&self) -> f64 {
        mean_std(self.cells.iter().copied()).1
    }

    /// Busiest cell.
    pub fn max(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DensityStats {
    /// Stroke pixels as a percentage of all pixels.
    pub density: f64,
    pub variation: f64,
    pub max_region: f64,
    pub grid: GridDensityMap,
}

pub fn estimate_density(mask: &StrokeMask, params: &DensityParams) -> DensityStats {
    let total = mask.total_pixels();
    let density = if total == 0 {
        0.0
    } else {
        mask.count() as f64 / total as f64 * 100.0
    };
    let grid = GridDensityMap::compute(mask, params.grid_rows, params.grid_cols);
    DensityStats {
        density: round_to(density, 2),
        variation: round_to(grid.std(), 2),
        max_region: round_to(grid.max(), 2),
        grid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(w: usize, h: usize, on: impl Fn(usize, usize) -> bool) -> StrokeMask {
        let data = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .map(|(x, y)| on(x, y))
            .collect();
        StrokeMask { w, h, data }
    }

    #[test]
    fn last_cell_absorbs_remainder() {
        assert_eq!(cell_bounds(0, 4, 10), (0, 2));
        assert_eq!(cell_bounds(2, 4, 10), (4, 6));
        assert_eq!(cell_bounds(3, 4, 10), (6, 10));
        assert_eq!(cell_bounds(3, 4, 3), (0, 3));
    }

    #[test]
    fn single_quadrant_fill() {
        let mask = mask_from(8, 8, |x, y| x < 2 && y < 2);
        let stats = estimate_density(&mask, &DensityParams::default());
        assert_eq!(stats.density, 6.25);
        assert_eq!(stats.grid.cell(0, 0), 100.0);
        assert_eq!(stats.grid.cell(1, 1), 0.0);
        assert_eq!(stats.max_region, 100.0);
        // One of sixteen cells at 100: sqrt(1/16 * 15/16) * 100.
        assert_eq!(stats.variation, 24.21);
    }

    #[test]
    fn tiny_images_have_empty_cells_not_nan() {
        let mask = mask_from(3, 2, |_, _| true);
        let stats = estimate_density(&mask, &DensityParams::default());
        assert_eq!(stats.density, 100.0);
        assert!(stats.grid.cells.iter().all(|c| c.is_finite()));
        assert_eq!(stats.grid.cell(3, 3), 100.0);
        assert_eq!(stats.grid.cell(0, 0), 0.0);
    }
}
