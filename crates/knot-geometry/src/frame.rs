//! Local orthonormal frames along a knot curve.
//!
//! The default frame is the arbitrary-axis construction: a finite-difference
//! tangent crossed with a fixed world axis. It is orthonormal at every sample
//! but not continuous. When `|tangent.y|` crosses 0.9 the reference axis
//! switches from Y to X and the frame flips, which shows up as a twist in the
//! tube. [`FrameMode::RotationMinimizing`] instead transports the first frame
//! along the samples.

use knot_core::{KnotError, Result, Tolerance};
use knot_math::{DQuat, DVec3, Vector3};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::curve::{position, CurveParameters};

/// Orthonormal (tangent, normal, binormal) triple at one curve parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub tangent: Vector3,
    pub normal: Vector3,
    pub binormal: Vector3,
}

impl Frame {
    /// Build a frame from a unit tangent using the arbitrary-axis rule.
    ///
    /// The reference axis is +Y unless `|tangent.y| >= 0.9`, then +X.
    pub fn from_tangent(tangent: Vector3) -> Self {
        let reference = if tangent.y.abs() < 0.9 { DVec3::Y } else { DVec3::X };
        let binormal = tangent.cross(reference).normalize();
        let normal = binormal.cross(tangent);
        Self {
            tangent,
            normal,
            binormal,
        }
    }

    /// Offset of a point at `angle` on a circle of `radius` in the normal plane.
    pub fn circle_offset(&self, radius: f64, angle: f64) -> Vector3 {
        radius * angle.cos() * self.normal + radius * angle.sin() * self.binormal
    }

    /// Whether all three axes are unit length and mutually perpendicular.
    pub fn is_orthonormal(&self, eps: f64) -> bool {
        (self.tangent.length() - 1.0).abs() < eps
            && (self.normal.length() - 1.0).abs() < eps
            && (self.binormal.length() - 1.0).abs() < eps
            && self.tangent.dot(self.normal).abs() < eps
            && self.tangent.dot(self.binormal).abs() < eps
            && self.normal.dot(self.binormal).abs() < eps
    }

    /// Carry this frame onto `tangent` with the smallest rotation that maps
    /// the old tangent to the new one.
    fn transport_to(&self, tangent: Vector3) -> Self {
        let rotation = DQuat::from_rotation_arc(self.tangent, tangent);
        let rotated = rotation * self.normal;
        // Re-project to keep drift from accumulating over many rings.
        let normal = (rotated - tangent * tangent.dot(rotated)).normalize();
        Self {
            tangent,
            normal,
            binormal: tangent.cross(normal),
        }
    }
}

/// How frames are chosen along a sequence of samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameMode {
    /// Independent arbitrary-axis frame per sample; may flip between samples.
    #[default]
    ArbitraryAxis,
    /// Parallel transport of the first sample's frame; no flips, but the last
    /// ring of a closed curve generally does not line up with the first.
    RotationMinimizing,
}

/// Finite-difference frame estimator.
#[derive(Debug, Clone, Copy)]
pub struct FrameEstimator {
    dt: f64,
    tolerance: Tolerance,
    max_widenings: u32,
}

impl FrameEstimator {
    pub const DEFAULT_STEP: f64 = 1e-3;
    /// Each retry multiplies the step by this factor.
    const WIDEN_FACTOR: f64 = 10.0;

    pub fn new() -> Self {
        Self {
            dt: Self::DEFAULT_STEP,
            tolerance: Tolerance::default(),
            max_widenings: 3,
        }
    }

    pub fn with_step(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_widenings(mut self, max_widenings: u32) -> Self {
        self.max_widenings = max_widenings;
        self
    }

    pub fn step(&self) -> f64 {
        self.dt
    }

    /// Unit tangent at `t` from a central difference.
    ///
    /// The chord is measured relative to the size of the two samples, so the
    /// result does not depend on `params.scale`. If the chord is zero-length
    /// the step is widened and retried; once the retries are spent this fails
    /// with [`KnotError::DegenerateTangent`].
    pub fn tangent(&self, params: &CurveParameters, t: f64) -> Result<Vector3> {
        let mut dt = self.dt;
        for attempt in 0..=self.max_widenings {
            let ahead = position(params, t + dt);
            let behind = position(params, t - dt);
            let magnitude = ahead.abs().max_element().max(behind.abs().max_element());
            // A zero or non-finite magnitude counts as degenerate.
            if magnitude > 0.0 && magnitude.is_finite() {
                let delta = ahead / magnitude - behind / magnitude;
                let len = delta.length();
                if !self.tolerance.is_zero(len) {
                    return Ok(delta / len);
                }
            }
            trace!("Zero-length tangent at t={} with dt={} (attempt {})", t, dt, attempt);
            dt *= Self::WIDEN_FACTOR;
        }
        debug!("Tangent degenerate at t={} for {}", t, params.family);
        Err(KnotError::DegenerateTangent { t })
    }

    /// Arbitrary-axis frame at `t`.
    pub fn frame(&self, params: &CurveParameters, t: f64) -> Result<Frame> {
        self.tangent(params, t).map(Frame::from_tangent)
    }

    /// Frames at every parameter in `ts`, in order.
    pub fn frames_along(
        &self,
        params: &CurveParameters,
        ts: &[f64],
        mode: FrameMode,
    ) -> Result<Vec<Frame>> {
        let mut frames: Vec<Frame> = Vec::with_capacity(ts.len());
        for &t in ts {
            let frame = match (mode, frames.last()) {
                (FrameMode::RotationMinimizing, Some(prev)) => {
                    prev.transport_to(self.tangent(params, t)?)
                }
                _ => self.frame(params, t)?,
            };
            frames.push(frame);
        }
        Ok(frames)
    }
}

impl Default for FrameEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Arbitrary-axis frame at `t` with the default step of `1e-3`.
pub fn frame(params: &CurveParameters, t: f64) -> Result<Frame> {
    FrameEstimator::new().frame(params, t)
}
