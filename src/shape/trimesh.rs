use crate::bounding_volume::Aabb;
use crate::math::{Point2, Point3, Real};
use crate::utils::{HashMap, SortedPair};

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that doesn’t exist.
    #[error("the triangle {triangle} references the vertex {vertex} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The faulty triangle.
        triangle: u32,
        /// The vertex index it references.
        vertex: u32,
        /// The number of vertices of the mesh.
        num_vertices: u32,
    },
}

/// A triangle mesh.
///
/// Buildings are expected to be closed meshes (see [`TriMesh::is_closed`]); soils,
/// plants and sources may be open surface patches.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point3<Real>>,
    indices: Vec<[u32; 3]>,
    aabb: Aabb,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point3<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        let num_vertices = vertices.len() as u32;
        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(vertex) = idx.iter().find(|vid| **vid >= num_vertices) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: triangle as u32,
                    vertex: *vertex,
                    num_vertices,
                });
            }
        }

        let aabb = Aabb::from_points(indices.iter().flatten().map(|i| &vertices[*i as usize]));

        Ok(TriMesh {
            vertices,
            indices,
            aabb,
        })
    }

    /// Creates the closed mesh of an axis-aligned box.
    ///
    /// Triangles are wound counter-clockwise when seen from outside the box.
    pub fn cuboid(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        let vertices = vec![
            Point3::new(mins.x, mins.y, mins.z),
            Point3::new(maxs.x, mins.y, mins.z),
            Point3::new(maxs.x, maxs.y, mins.z),
            Point3::new(mins.x, maxs.y, mins.z),
            Point3::new(mins.x, mins.y, maxs.z),
            Point3::new(maxs.x, mins.y, maxs.z),
            Point3::new(maxs.x, maxs.y, maxs.z),
            Point3::new(mins.x, maxs.y, maxs.z),
        ];
        let indices = vec![
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
        ];
        let aabb = Aabb::new(mins.inf(&maxs), mins.sup(&maxs));

        TriMesh {
            vertices,
            indices,
            aabb,
        }
    }

    /// Creates a flat rectangular patch lying at height `z`, made of two triangles.
    pub fn rectangle(mins: Point2<Real>, maxs: Point2<Real>, z: Real) -> Self {
        let vertices = vec![
            Point3::new(mins.x, mins.y, z),
            Point3::new(maxs.x, mins.y, z),
            Point3::new(maxs.x, maxs.y, z),
            Point3::new(mins.x, maxs.y, z),
        ];
        let aabb = Aabb::from_points(&vertices);

        TriMesh {
            vertices,
            indices: vec![[0, 1, 2], [0, 2, 3]],
            aabb,
        }
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point3<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The three vertices of the `i`-th triangle.
    #[inline]
    pub fn triangle(&self, i: usize) -> [Point3<Real>; 3] {
        let idx = self.indices[i];
        [
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        ]
    }

    /// The bounding box of the vertices referenced by this mesh.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Is this mesh closed?
    ///
    /// A mesh is closed when each of its undirected edges is shared by exactly two
    /// triangles. Degenerate triangles (with repeated vertex indices) make it open.
    pub fn is_closed(&self) -> bool {
        let mut edge_use: HashMap<SortedPair<u32>, u32> = HashMap::default();

        for idx in &self.indices {
            if idx[0] == idx[1] || idx[1] == idx[2] || idx[2] == idx[0] {
                return false;
            }

            for k in 0..3 {
                *edge_use
                    .entry(SortedPair::new(idx[k], idx[(k + 1) % 3]))
                    .or_insert(0) += 1;
            }
        }

        edge_use.values().all(|count| *count == 2)
    }
}
