use core::fmt::Write;

use crate::grid::GridSpec;
use crate::math::{Point2, Real};
use crate::query::{IntersectResult, Region, SectionError};
use crate::shape::TriMesh;
use crate::utils;
use crate::voxelization::{OccupancyGrid2, OccupancyGrid3};

/// Errors preventing a single object from being voxelized.
///
/// These errors never abort a whole generation: the object is skipped instead.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum VoxelizationError {
    /// The mesh couldn't be sectioned by a layer plane.
    #[error(transparent)]
    Section(#[from] SectionError),
    /// A vertex of the mesh has a non-finite coordinate.
    #[error("the vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(u32),
    /// The index `0` is reserved for empty cells.
    #[error("the object index 0 is reserved for empty cells")]
    NullIndex,
}

/// Voxelizes a closed mesh on every layer of `spec`.
///
/// The mesh is sectioned at each layer midpoint, and the lattice points lying inside
/// a section mark the corresponding voxel with `object_index`. Only the lattice points
/// within one cell of the footprint of the mesh are probed. Every hit appends one
/// record `i,j,k,1,object_index` to `log`. Records are enumerated lattice point by
/// lattice point (X-major), then by increasing layer.
///
/// `tolerance` is used as the thickness of the sectioning planes.
pub fn rasterize_3d(
    spec: &GridSpec,
    mesh: &TriMesh,
    object_index: u32,
    tolerance: Real,
    log: &mut String,
) -> Result<OccupancyGrid3, VoxelizationError> {
    if object_index == 0 {
        return Err(VoxelizationError::NullIndex);
    }

    let regions = spec
        .layers()
        .iter()
        .map(|height| {
            match mesh.intersection_with_horizontal_plane(*height, tolerance)? {
                IntersectResult::Intersect(loops) => Ok(Region::from_loops(loops)),
                IntersectResult::Negative | IntersectResult::Positive => Ok(Region::default()),
            }
        })
        .collect::<Result<Vec<_>, SectionError>>()?;

    let dims = spec.dims();
    let footprint = mesh.aabb().loosened_xy(dims.x, dims.y);
    let mut grid = OccupancyGrid3::for_spec(spec);
    let mut num_hits = 0;

    for pt in spec.grid_xy() {
        let sample = Point2::new(pt.x, pt.y);
        if !footprint.contains_xy(&sample) {
            continue;
        }

        for (region, height) in regions.iter().zip(spec.layers()) {
            if !region.contains_point(&sample) {
                continue;
            }

            let (Some((i, j)), Some(k)) =
                (spec.cell_index(sample.x, sample.y), spec.layer_index(*height))
            else {
                log::debug!("projection ({}, {}, {height}) left the grid", sample.x, sample.y);
                continue;
            };

            grid.set(i, j, k, object_index);
            let _ = writeln!(log, "{i},{j},{k},1,{object_index}");
            num_hits += 1;
        }
    }

    log::debug!("object {object_index}: {num_hits} voxels");

    Ok(grid)
}

/// Rasterizes the vertical projection of a surface on the lattice of `spec`.
///
/// A lattice point is marked with `object_index` as soon as it touches the projection
/// of any triangle of the mesh, edges within `tolerance` included.
pub fn rasterize_2d(
    spec: &GridSpec,
    mesh: &TriMesh,
    object_index: u32,
    tolerance: Real,
) -> Result<OccupancyGrid2, VoxelizationError> {
    if object_index == 0 {
        return Err(VoxelizationError::NullIndex);
    }

    if let Some(vid) = mesh
        .vertices()
        .iter()
        .position(|pt| !pt.x.is_finite() || !pt.y.is_finite())
    {
        return Err(VoxelizationError::NonFiniteVertex(vid as u32));
    }

    let triangles: Vec<[Point2<Real>; 3]> = (0..mesh.num_triangles())
        .map(|i| mesh.triangle(i).map(|pt| Point2::new(pt.x, pt.y)))
        .collect();

    let footprint = mesh.aabb().loosened_xy(tolerance, tolerance);
    let mut grid = OccupancyGrid2::for_spec(spec);

    for i in 0..spec.grids_i() {
        for j in 0..spec.grids_j() {
            let sample = spec.lattice_point(i, j);
            if !footprint.contains_xy(&sample) {
                continue;
            }

            let touches = triangles
                .iter()
                .any(|[a, b, c]| utils::point_touches_triangle2d(&sample, a, b, c, tolerance));

            if touches {
                grid.set(i, j, object_index);
            }
        }
    }

    log::debug!("object {object_index}: {} cells", grid.num_occupied());

    Ok(grid)
}
