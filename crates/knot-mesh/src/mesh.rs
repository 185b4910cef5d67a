use knot_core::{KnotError, Result, Validate};
use knot_math::{Aabb3, Point2, Point3, Vector3};

/// Indexed triangle mesh: positions plus a flat triangle index list.
///
/// `normals` and `uvs` are either empty or one entry per position.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Point2>,
}

impl TriangleMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Accumulate face normals onto each vertex and normalize.
    ///
    /// Vertices duplicated along a seam get independent normals.
    pub fn compute_normals(&mut self) {
        let n = self.positions.len();
        self.normals.clear();
        self.normals.resize(n, Vector3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = self.positions[i0];
            let normal = (self.positions[i1] - p0).cross(self.positions[i2] - p0);
            self.normals[i0] += normal;
            self.normals[i1] += normal;
            self.normals[i2] += normal;
        }

        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }

    /// Axis-aligned bounding box of all positions; a zero box when empty.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(self.positions.iter().copied())
            .unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

impl Validate for TriangleMesh {
    /// Check that the index list is whole triangles and every index is in range.
    fn validate(&self) -> Result<()> {
        validate_indices(&self.indices, self.positions.len())
    }
}

/// Check that `indices` forms whole triangles over `vertex_count` vertices.
pub fn validate_indices(indices: &[u32], vertex_count: usize) -> Result<()> {
    if indices.len() % 3 != 0 {
        return Err(KnotError::InvalidParameter(format!(
            "index count {} is not a multiple of 3",
            indices.len()
        )));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(KnotError::InvalidParameter(format!(
            "index {} out of bounds for {} vertices",
            bad, vertex_count
        )));
    }
    Ok(())
}
