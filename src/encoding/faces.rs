use core::fmt;

use crate::voxelization::OccupancyGrid3;

/// The exposed faces of one voxel, with their materials.
///
/// `wall_a` is the face normal to X, `wall_b` the face normal to Y and `roof` the face
/// normal to Z, each lying on the negative side of the voxel. An empty string means
/// the face isn't exposed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceRow<'a> {
    /// Index along X.
    pub i: usize,
    /// Index along Y.
    pub j: usize,
    /// Layer index.
    pub k: usize,
    /// Material of the face normal to X.
    pub wall_a: &'a str,
    /// Material of the face normal to Y.
    pub wall_b: &'a str,
    /// Material of the face normal to Z.
    pub roof: &'a str,
}

impl FaceRow<'_> {
    /// Does this row carry no face at all?
    pub fn is_blank(&self) -> bool {
        self.wall_a.is_empty() && self.wall_b.is_empty() && self.roof.is_empty()
    }
}

impl fmt::Display for FaceRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.i, self.j, self.k, self.wall_a, self.wall_b, self.roof
        )
    }
}

fn material(list: &[String], index: u32) -> &str {
    index
        .checked_sub(1)
        .and_then(|i| list.get(i as usize))
        .map_or("", |m| m.as_str())
}

/// Classifies the exposed faces of every voxel of a merged building grid.
///
/// Voxels outside of the grid read as empty. Faces are only ever stored on the
/// negative side of a voxel:
///
/// - an occupied voxel exposes each of its `-X`, `-Y` and `-Z` faces whose neighbor
///   is empty, with its own materials;
/// - an empty voxel with `i > 0` and `j > 0` carries the `+X`, `+Y` and top faces of
///   its occupied negative neighbors, with their materials. When both its `-X` and
///   `-Y` neighbors are occupied, both walls take the material of the `-Y` neighbor.
///
/// Voxels without any exposed face yield no row. Rows are ordered by `i`, then `j`,
/// then `k`.
pub fn classify_faces<'a>(
    grid: &OccupancyGrid3,
    wall: &'a [String],
    roof: &'a [String],
) -> Vec<FaceRow<'a>> {
    let [ni, nj, nk] = grid.shape();
    let mut rows = vec![];

    for i in 0..ni {
        for j in 0..nj {
            for k in 0..nk {
                let (si, sj, sk) = (i as isize, j as isize, k as isize);
                let own = grid.get(i, j, k);
                let neg_x = grid.get_signed(si - 1, sj, sk);
                let neg_y = grid.get_signed(si, sj - 1, sk);
                let neg_z = grid.get_signed(si, sj, sk - 1);

                let row = if own != 0 {
                    let own_wall = material(wall, own);
                    FaceRow {
                        i,
                        j,
                        k,
                        wall_a: if neg_x == 0 { own_wall } else { "" },
                        wall_b: if neg_y == 0 { own_wall } else { "" },
                        roof: if neg_z == 0 { material(roof, own) } else { "" },
                    }
                } else if i > 0 && j > 0 {
                    let (wall_a, wall_b) = match (neg_x != 0, neg_y != 0) {
                        (true, true) => (material(wall, neg_y), material(wall, neg_y)),
                        (true, false) => (material(wall, neg_x), ""),
                        (false, true) => ("", material(wall, neg_y)),
                        (false, false) => ("", ""),
                    };
                    FaceRow {
                        i,
                        j,
                        k,
                        wall_a,
                        wall_b,
                        roof: if neg_z != 0 { material(roof, neg_z) } else { "" },
                    }
                } else {
                    continue;
                };

                if !row.is_blank() {
                    rows.push(row);
                }
            }
        }
    }

    rows
}

/// Formats face rows as the sparse matrix text, one newline-terminated row per face.
pub fn sparse_matrix(rows: &[FaceRow<'_>]) -> String {
    use fmt::Write;

    let mut text = String::new();
    for row in rows {
        let _ = writeln!(text, "{row}");
    }
    text
}
