use crate::math::{Point2, Real};
use crate::query::{IntersectResult, SectionError};
use crate::shape::{Polygon, TriMesh};
use crate::utils::{HashMap, SortedPair};

impl TriMesh {
    /// Computes the closed loops where the horizontal plane `z = height` cuts this mesh.
    ///
    /// Vertices lying less than `epsilon` above the plane are considered below it. This
    /// symbolic shift guarantees that every triangle crossing the plane has exactly two
    /// crossing edges, so that the section of a closed mesh is a set of closed loops.
    /// A plane touching a flat roof from above or running along a flat floor therefore
    /// never yields a degenerate section.
    ///
    /// Crossing points are identified by their edge, which makes the loop chaining
    /// exact: no distance threshold is involved.
    ///
    /// # Result
    /// - `Ok(IntersectResult::Negative)` if the whole mesh lies below the plane,
    /// - `Ok(IntersectResult::Positive)` if the whole mesh lies above the plane,
    /// - `Ok(IntersectResult::Intersect(loops))` otherwise,
    /// - `Err(SectionError::OpenSection)` if the loops can't be closed.
    pub fn intersection_with_horizontal_plane(
        &self,
        height: Real,
        epsilon: Real,
    ) -> Result<IntersectResult<Vec<Polygon>>, SectionError> {
        let vertices = self.vertices();
        let indices = self.indices();

        // 1. Partition the vertices.
        let mut above = vec![false; vertices.len()];
        let mut found_below = false;
        let mut found_above = false;

        for idx in indices {
            for vid in idx {
                let pt = vertices[*vid as usize];
                if !pt.z.is_finite() || !pt.x.is_finite() || !pt.y.is_finite() {
                    return Err(SectionError::NonFiniteVertex(*vid));
                }

                if pt.z - height > epsilon {
                    above[*vid as usize] = true;
                    found_above = true;
                } else {
                    found_below = true;
                }
            }
        }

        // Exit early if `self` isn’t crossed by the plane.
        if !found_above {
            return Ok(IntersectResult::Negative);
        }

        if !found_below {
            return Ok(IntersectResult::Positive);
        }

        // 2. Compute one segment per crossing triangle.
        let mut crossing_points: HashMap<SortedPair<u32>, Point2<Real>> = HashMap::default();
        let mut edge_segments: HashMap<SortedPair<u32>, Vec<usize>> = HashMap::default();
        let mut segments: Vec<[SortedPair<u32>; 2]> = vec![];

        for idx in indices {
            let mut crossing = [SortedPair::new(0, 0); 2];
            let mut num_crossing = 0;

            for k in 0..3 {
                let (ia, ib) = (idx[k], idx[(k + 1) % 3]);
                if above[ia as usize] == above[ib as usize] {
                    continue;
                }

                let key = SortedPair::new(ia, ib);
                let _ = crossing_points.entry(key).or_insert_with(|| {
                    let a = vertices[*key.first() as usize];
                    let b = vertices[*key.second() as usize];
                    let t = ((height - a.z) / (b.z - a.z)).clamp(0.0, 1.0);
                    let pt = a + (b - a) * t;
                    Point2::new(pt.x, pt.y)
                });

                // A triangle with two vertices on one side and one on the other
                // always has exactly two crossing edges.
                crossing[num_crossing] = key;
                num_crossing += 1;
            }

            if num_crossing == 2 {
                let segment_id = segments.len();
                segments.push(crossing);
                for key in crossing {
                    edge_segments.entry(key).or_default().push(segment_id);
                }
            }
        }

        if let Some((edge, segs)) = edge_segments.iter().find(|(_, segs)| segs.len() != 2) {
            return Err(SectionError::OpenSection {
                edge: (*edge.first(), *edge.second()),
                num_triangles: segs.len(),
                height,
            });
        }

        // 3. Chain the segments into closed loops.
        let mut visited = vec![false; segments.len()];
        let mut loops = vec![];

        for first in 0..segments.len() {
            if visited[first] {
                continue;
            }

            let start = segments[first][0];
            let mut current_segment = first;
            let mut current_key = segments[first][1];
            let mut polyline = vec![crossing_points[&start]];
            visited[first] = true;

            while current_key != start {
                polyline.push(crossing_points[&current_key]);

                let shared = &edge_segments[&current_key];
                let next_segment = if shared[0] == current_segment {
                    shared[1]
                } else {
                    shared[0]
                };

                if visited[next_segment] {
                    break;
                }

                visited[next_segment] = true;
                let [ka, kb] = segments[next_segment];
                current_key = if ka == current_key { kb } else { ka };
                current_segment = next_segment;
            }

            if polyline.len() >= 3 {
                loops.push(Polygon::new(polyline));
            }
        }

        Ok(IntersectResult::Intersect(loops))
    }
}
