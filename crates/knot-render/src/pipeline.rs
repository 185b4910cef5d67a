use bytemuck::{Pod, Zeroable};
use knot_math::{Point2, Point3, Vector3};
use knot_mesh::TriangleMesh;

/// Vertex with f32 data packed for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl GpuVertex {
    /// Create a GPU vertex from mesh vertex data.
    pub fn from_mesh_vertex(pos: Point3, normal: Vector3, uv: Point2) -> Self {
        Self {
            position: pos.as_vec3().to_array(),
            normal: normal.as_vec3().to_array(),
            uv: uv.as_vec2().to_array(),
        }
    }
}

/// Interleaved vertex data and indices ready for GPU upload.
#[derive(Debug, Clone)]
pub struct RenderMesh {
    pub vertices: Vec<GpuVertex>,
    pub indices: Vec<u32>,
}

impl RenderMesh {
    /// Pack a mesh; vertices without a normal or UV get `+Y` and `(0, 0)`.
    pub fn prepare(mesh: &TriangleMesh) -> Self {
        let vertices = mesh
            .positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| {
                let normal = mesh.normals.get(i).copied().unwrap_or(Vector3::Y);
                let uv = mesh.uvs.get(i).copied().unwrap_or(Point2::ZERO);
                GpuVertex::from_mesh_vertex(pos, normal, uv)
            })
            .collect();

        Self {
            vertices,
            indices: mesh.indices.clone(),
        }
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knot_geometry::{CurveParameters, KnotFamily};
    use knot_mesh::tessellate_tube;

    #[test]
    fn test_gpu_vertex_layout() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 32);
    }

    #[test]
    fn test_prepare_defaults_missing_attributes() {
        let mesh = TriangleMesh {
            positions: vec![Point3::new(1.0, 2.0, 3.0)],
            normals: vec![],
            indices: vec![],
            uvs: vec![],
        };
        let render = RenderMesh::prepare(&mesh);
        assert_eq!(render.vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(render.vertices[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(render.vertices[0].uv, [0.0, 0.0]);
    }

    #[test]
    fn test_prepare_tube_byte_sizes() {
        let params = CurveParameters::new(KnotFamily::FigureEight).with_resolution(10, 6);
        let mut mesh = tessellate_tube(&params).unwrap();
        mesh.compute_normals();
        let render = RenderMesh::prepare(&mesh);

        assert_eq!(render.vertex_bytes().len(), 11 * 7 * 32);
        assert_eq!(render.index_bytes().len(), 10 * 6 * 6 * 4);
        assert_eq!(&render.index_bytes()[4..8], &mesh.indices[1].to_ne_bytes());
    }
}
