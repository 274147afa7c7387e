/// The result of a plane-intersection operation.
#[derive(Debug, Clone, PartialEq)]
pub enum IntersectResult<T> {
    /// The intersect operation yielded a result, lying in the plane
    Intersect(T),
    /// The shape being intersected is fully contained in the negative half-space of the plane.
    Negative,
    /// The shape being intersected is fully contained in the positive half-space of the plane.
    Positive,
}

/// Errors raised while sectioning a triangle mesh with a plane.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SectionError {
    /// A crossing edge is not shared by exactly two crossing triangles.
    ///
    /// This happens when the mesh is open or non-manifold at the height of the
    /// plane: the section can't be closed into loops.
    #[error("the edge {edge:?} is crossed by {num_triangles} triangle(s) instead of 2; the mesh is open or non-manifold at height {height}")]
    OpenSection {
        /// The vertex indices of the faulty edge.
        edge: (u32, u32),
        /// The number of crossing triangles sharing this edge.
        num_triangles: usize,
        /// The height of the sectioning plane.
        height: f64,
    },
    /// A vertex of the mesh has a non-finite coordinate.
    #[error("the vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(u32),
}
