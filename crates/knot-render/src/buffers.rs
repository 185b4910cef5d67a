//! Flat vertex/index buffers handed to an external renderer.

use std::path::Path;

use knot_core::{KnotError, Result, Validate};
use knot_geometry::{CurveParameters, FrameMode};
use knot_mesh::{tessellate_tube_with, validate_indices, TriangleMesh};
use log::debug;
use serde::{Deserialize, Serialize};

/// Version byte at the start of the binary export.
const BINARY_VERSION: u8 = 1;

/// Positions as flat `f32` triples plus triangle indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TubeBuffers {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl TubeBuffers {
    pub fn from_mesh(mesh: &TriangleMesh) -> Self {
        let vertices = mesh
            .positions
            .iter()
            .flat_map(|p| p.as_vec3().to_array())
            .collect();
        Self {
            vertices,
            indices: mesh.indices.clone(),
        }
    }

    /// Generate a fresh buffer pair with arbitrary-axis frames.
    pub fn generate(params: &CurveParameters) -> Result<Self> {
        Self::generate_with(params, FrameMode::ArbitraryAxis)
    }

    pub fn generate_with(params: &CurveParameters, mode: FrameMode) -> Result<Self> {
        let mesh = tessellate_tube_with(params, mode)?;
        Ok(Self::from_mesh(&mesh))
    }

    /// Number of vertices (not floats).
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// `{"vertices": [...], "indices": [...]}`
    pub fn to_json(&self) -> Result<String> {
        self.validate()?;
        serde_json::to_string(self).map_err(|e| KnotError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let buffers: Self =
            serde_json::from_str(json).map_err(|e| KnotError::Serialization(e.to_string()))?;
        buffers.validate()?;
        Ok(buffers)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        debug!("Wrote {} vertices as JSON to {}", self.vertex_count(), path.display());
        Ok(())
    }

    /// Compact little-endian encoding:
    /// `[u8 version=1][u32 vertex_count][u32 index_count]`
    /// `[vertex_count * 3 * f32 positions][index_count * u32 indices]`
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        self.validate()?;
        let mut buf = Vec::with_capacity(9 + 4 * (self.vertices.len() + self.indices.len()));
        buf.push(BINARY_VERSION);
        buf.extend_from_slice(&(self.vertex_count() as u32).to_le_bytes());
        buf.extend_from_slice(&(self.indices.len() as u32).to_le_bytes());
        for v in &self.vertices {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        for i in &self.indices {
            buf.extend_from_slice(&i.to_le_bytes());
        }
        Ok(buf)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        let truncated = || KnotError::Serialization("truncated binary mesh".into());

        let (&version, rest) = bytes.split_first().ok_or_else(truncated)?;
        if version != BINARY_VERSION {
            return Err(KnotError::Serialization(format!(
                "unsupported binary mesh version {}",
                version
            )));
        }

        let mut words = rest.chunks_exact(4).map(|w| [w[0], w[1], w[2], w[3]]);
        let mut next = || words.next().ok_or_else(truncated);
        let vertex_count = u32::from_le_bytes(next()?) as usize;
        let index_count = u32::from_le_bytes(next()?) as usize;

        let expected = 4 * (2 + 3 * vertex_count + index_count);
        if rest.len() != expected {
            return Err(KnotError::Serialization(format!(
                "binary mesh size mismatch: expected {} bytes, got {}",
                expected + 1,
                bytes.len()
            )));
        }

        let body = &rest[8..];
        let (vertex_bytes, index_bytes) = body.split_at(12 * vertex_count);
        let vertices = vertex_bytes
            .chunks_exact(4)
            .map(|w| f32::from_le_bytes([w[0], w[1], w[2], w[3]]))
            .collect();
        let indices = index_bytes
            .chunks_exact(4)
            .map(|w| u32::from_le_bytes([w[0], w[1], w[2], w[3]]))
            .collect();

        let buffers = Self { vertices, indices };
        buffers.validate()?;
        Ok(buffers)
    }

    pub fn write_binary(&self, path: &Path) -> Result<()> {
        let bytes = self.to_binary()?;
        std::fs::write(path, &bytes)?;
        debug!("Wrote {} bytes of mesh data to {}", bytes.len(), path.display());
        Ok(())
    }
}

impl Validate for TubeBuffers {
    /// Whole `xyz` triples, whole triangles, and every index in range.
    fn validate(&self) -> Result<()> {
        if self.vertices.len() % 3 != 0 {
            return Err(KnotError::InvalidParameter(format!(
                "vertex buffer length {} is not a multiple of 3",
                self.vertices.len()
            )));
        }
        if u32::try_from(self.vertex_count()).is_err() {
            return Err(KnotError::MeshTooLarge {
                vertices: self.vertex_count() as u64,
            });
        }
        validate_indices(&self.indices, self.vertex_count())
    }
}
