//! Tube tessellation: sweep a circular cross-section along a knot curve.
//!
//! Ring `i` sits at `t_i = 2π·i/resolution` for `i` in `0..=resolution`, and
//! column `j` at angle `2π·j/radial_segments` for `j` in `0..=radial_segments`.
//! The last ring and the last column duplicate the first so that the index
//! buffer needs no wrap-around. The frame of the last ring is computed on its
//! own and can differ from the first ring's, so the seam may show a mismatch.

use std::f64::consts::TAU;

use knot_core::{KnotError, Result, Validate};
use knot_geometry::{position, ring_parameters, CurveParameters, FrameEstimator, FrameMode};
use knot_math::{Point2, Point3};
use log::debug;

use crate::TriangleMesh;

/// Builds tube meshes from [`CurveParameters`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TubeTessellator {
    estimator: FrameEstimator,
    mode: FrameMode,
}

impl TubeTessellator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_mode(mut self, mode: FrameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_estimator(mut self, estimator: FrameEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn frame_mode(&self) -> FrameMode {
        self.mode
    }

    /// Ring-major vertex positions, `(resolution+1)·(radial_segments+1)` of them.
    pub fn vertices(&self, params: &CurveParameters) -> Result<Vec<Point3>> {
        params.validate()?;
        check_index_range(params.resolution, params.radial_segments)?;

        let ts = ring_parameters(params.resolution)?;
        let frames = self.estimator.frames_along(params, &ts, self.mode)?;
        let angles = column_angles(params.radial_segments);

        let mut vertices = Vec::with_capacity(ts.len() * angles.len());
        for (&t, frame) in ts.iter().zip(&frames) {
            let center = position(params, t);
            vertices.extend(
                angles
                    .iter()
                    .map(|&angle| center + frame.circle_offset(params.tube_radius, angle)),
            );
        }
        Ok(vertices)
    }

    /// Full mesh: positions, indices, and `(i/resolution, j/radial_segments)` UVs.
    ///
    /// Normals are left empty; call [`TriangleMesh::compute_normals`] if needed.
    pub fn tessellate(&self, params: &CurveParameters) -> Result<TriangleMesh> {
        let positions = self.vertices(params)?;
        let indices = tube_indices(params.resolution, params.radial_segments)?;
        let uvs = grid_uvs(params.resolution, params.radial_segments);

        debug!(
            "Tessellated {} tube ({:?}): {} rings x {} segments -> {} vertices, {} triangles",
            params.family,
            self.mode,
            params.resolution,
            params.radial_segments,
            positions.len(),
            indices.len() / 3
        );

        Ok(TriangleMesh {
            positions,
            normals: Vec::new(),
            indices,
            uvs,
        })
    }
}

/// Vertex positions of the tube using arbitrary-axis frames.
pub fn tube_vertices(params: &CurveParameters) -> Result<Vec<Point3>> {
    TubeTessellator::new().vertices(params)
}

/// Triangle indices for a `resolution x radial_segments` tube grid.
///
/// Depends only on the grid size. For each quad, with row stride
/// `radial_segments + 1`, emits `(a, b, c)` and `(c, b, d)` where `a` is the
/// quad's corner, `b` the same column on the next ring, `c = a + 1`, `d = b + 1`.
pub fn tube_indices(resolution: u32, radial_segments: u32) -> Result<Vec<u32>> {
    if resolution == 0 || radial_segments == 0 {
        return Err(KnotError::InvalidResolution {
            resolution,
            radial_segments,
        });
    }
    check_index_range(resolution, radial_segments)?;

    let stride = radial_segments + 1;
    let mut indices = Vec::with_capacity(resolution as usize * radial_segments as usize * 6);
    for i in 0..resolution {
        for j in 0..radial_segments {
            let a = i * stride + j;
            let b = a + stride;
            let c = a + 1;
            let d = b + 1;
            indices.extend_from_slice(&[a, b, c, c, b, d]);
        }
    }
    Ok(indices)
}

/// Tube mesh using arbitrary-axis frames.
pub fn tessellate_tube(params: &CurveParameters) -> Result<TriangleMesh> {
    TubeTessellator::new().tessellate(params)
}

/// Tube mesh using the given frame mode.
pub fn tessellate_tube_with(params: &CurveParameters, mode: FrameMode) -> Result<TriangleMesh> {
    TubeTessellator::new().with_frame_mode(mode).tessellate(params)
}

fn column_angles(radial_segments: u32) -> Vec<f64> {
    let n = f64::from(radial_segments);
    (0..=radial_segments)
        .map(|j| TAU * f64::from(j) / n)
        .collect()
}

fn grid_uvs(resolution: u32, radial_segments: u32) -> Vec<Point2> {
    let (rows, cols) = (f64::from(resolution), f64::from(radial_segments));
    (0..=resolution)
        .flat_map(|i| {
            (0..=radial_segments).map(move |j| Point2::new(f64::from(i) / rows, f64::from(j) / cols))
        })
        .collect()
}

/// The largest index must fit in a `u32`.
fn check_index_range(resolution: u32, radial_segments: u32) -> Result<()> {
    let vertices = (u64::from(resolution) + 1) * (u64::from(radial_segments) + 1);
    if vertices - 1 > u64::from(u32::MAX) {
        return Err(KnotError::MeshTooLarge { vertices });
    }
    Ok(())
}
