//! Knot parameters: family tag plus numeric knobs.

use std::path::Path;

use knot_core::{KnotError, Result, Validate};
use serde::{Deserialize, Serialize};

use super::KnotFamily;

/// Everything needed to evaluate a knot curve and sweep a tube along it.
///
/// Treated as immutable for one generation pass. Missing JSON fields fall back
/// to [`CurveParameters::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParameters {
    pub family: KnotFamily,
    /// Radius of the circular cross-section.
    pub tube_radius: f64,
    /// Torus knot winding numbers.
    pub p: i32,
    pub q: i32,
    /// Lissajous frequencies.
    pub nx: i32,
    pub ny: i32,
    pub nz: i32,
    /// Celtic star point count (used as `p`).
    pub star_points: i32,
    /// Celtic star skip (used as `q`).
    pub star_skip: i32,
    /// Uniform scale applied to every family.
    pub scale: f64,
    /// Number of rings along the curve.
    pub resolution: u32,
    /// Number of points around each ring.
    pub radial_segments: u32,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            family: KnotFamily::Trefoil,
            tube_radius: 0.3,
            p: 2,
            q: 3,
            nx: 3,
            ny: 2,
            nz: 4,
            star_points: 5,
            star_skip: 2,
            scale: 3.0,
            resolution: 200,
            radial_segments: 20,
        }
    }
}

impl CurveParameters {
    /// Default knobs for the given family.
    pub fn new(family: KnotFamily) -> Self {
        Self {
            family,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_tube_radius(mut self, radius: f64) -> Self {
        self.tube_radius = radius;
        self
    }

    pub fn with_resolution(mut self, resolution: u32, radial_segments: u32) -> Self {
        self.resolution = resolution;
        self.radial_segments = radial_segments;
        self
    }

    pub fn with_torus(mut self, p: i32, q: i32) -> Self {
        self.p = p;
        self.q = q;
        self
    }

    pub fn with_lissajous(mut self, nx: i32, ny: i32, nz: i32) -> Self {
        self.nx = nx;
        self.ny = ny;
        self.nz = nz;
        self
    }

    pub fn with_star(mut self, points: i32, skip: i32) -> Self {
        self.star_points = points;
        self.star_skip = skip;
        self
    }

    /// Parse and validate parameters from JSON.
    ///
    /// An unknown `family` string is reported as
    /// [`KnotError::UnsupportedCurveFamily`] rather than a generic decode error.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| KnotError::Serialization(e.to_string()))?;

        if let Some(tag) = value.get("family").and_then(|v| v.as_str()) {
            tag.parse::<KnotFamily>()?;
        }

        let params: Self =
            serde_json::from_value(value).map_err(|e| KnotError::Serialization(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| KnotError::Serialization(e.to_string()))
    }

    /// Number of vertices a tube built from these parameters will have.
    pub fn vertex_count(&self) -> u64 {
        (u64::from(self.resolution) + 1) * (u64::from(self.radial_segments) + 1)
    }

    /// Number of triangles a tube built from these parameters will have.
    pub fn triangle_count(&self) -> u64 {
        u64::from(self.resolution) * u64::from(self.radial_segments) * 2
    }
}

impl Validate for CurveParameters {
    fn validate(&self) -> Result<()> {
        if self.resolution == 0 || self.radial_segments == 0 {
            return Err(KnotError::InvalidResolution {
                resolution: self.resolution,
                radial_segments: self.radial_segments,
            });
        }
        if !self.tube_radius.is_finite() || self.tube_radius <= 0.0 {
            return Err(KnotError::InvalidParameter(format!(
                "tube radius must be positive and finite, got {}",
                self.tube_radius
            )));
        }
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(KnotError::InvalidParameter(format!(
                "scale must be finite and non-negative, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
