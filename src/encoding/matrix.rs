use core::fmt::{Display, Write};

use crate::materials::ElementMaterials;
use crate::math::Real;
use crate::voxelization::{OccupancyGrid2, OccupancyGrid3};

/// Formats a `grids_i × grids_j` matrix the way it is displayed on a map: one line
/// per row from the last `j` down to `0`, columns comma-separated by increasing `i`.
/// Every line is newline-terminated.
pub fn format_matrix<T, F>(grids_i: usize, grids_j: usize, mut value: F) -> String
where
    T: Display,
    F: FnMut(usize, usize) -> T,
{
    let mut text = String::new();

    for j in (0..grids_j).rev() {
        for i in 0..grids_i {
            if i > 0 {
                text.push(',');
            }
            let _ = write!(text, "{}", value(i, j));
        }
        text.push('\n');
    }

    text
}

/// Formats the values of a 2D grid.
pub fn matrix_2d(grid: &OccupancyGrid2) -> String {
    let [ni, nj] = grid.shape();
    format_matrix(ni, nj, |i, j| grid.get(i, j))
}

/// Formats the material of each cell of a merged 2D grid.
///
/// Cells without any element get the default material.
pub fn material_matrix_2d(grid: &OccupancyGrid2, materials: &ElementMaterials) -> String {
    let [ni, nj] = grid.shape();
    format_matrix(ni, nj, |i, j| materials.material_of(grid.get(i, j)))
}

/// Formats a `grids_i × grids_j` matrix whose cells all hold `fill`.
pub fn empty_matrix(grids_i: usize, grids_j: usize, fill: &str) -> String {
    format_matrix(grids_i, grids_j, |_, _| fill)
}

/// The highest building index of each column of a merged building grid.
pub fn building_id_2d(grid: &OccupancyGrid3) -> OccupancyGrid2 {
    let [ni, nj, nk] = grid.shape();
    let mut result = OccupancyGrid2::new([ni, nj]);

    for i in 0..ni {
        for j in 0..nj {
            let id = (0..nk).map(|k| grid.get(i, j, k)).max().unwrap_or(0);
            result.set(i, j, id);
        }
    }

    result
}

fn rounded_height(layers: &[Real], k: usize) -> u32 {
    layers
        .get(k)
        .map_or(0, |z| z.round_ties_even().max(0.0) as u32)
}

/// The rounded height of the lowest occupied layer of each column, `0` for empty
/// columns.
pub fn building_bottom_2d(grid: &OccupancyGrid3, layers: &[Real]) -> OccupancyGrid2 {
    let [ni, nj, nk] = grid.shape();
    let mut result = OccupancyGrid2::new([ni, nj]);

    for i in 0..ni {
        for j in 0..nj {
            if let Some(k) = (0..nk).find(|k| grid.get(i, j, *k) != 0) {
                result.set(i, j, rounded_height(layers, k));
            }
        }
    }

    result
}

/// The rounded height of the highest occupied layer of each column, `0` for empty
/// columns.
pub fn building_top_2d(grid: &OccupancyGrid3, layers: &[Real]) -> OccupancyGrid2 {
    let [ni, nj, nk] = grid.shape();
    let mut result = OccupancyGrid2::new([ni, nj]);

    for i in 0..ni {
        for j in 0..nj {
            if let Some(k) = (0..nk).rev().find(|k| grid.get(i, j, *k) != 0) {
                result.set(i, j, rounded_height(layers, k));
            }
        }
    }

    result
}
