//! Curve trait and the knot curve families.

mod family;
mod formulas;
mod params;

use std::f64::consts::TAU;

use knot_math::Point3;

pub use family::KnotFamily;
pub use formulas::{celtic, cinquefoil, figure_eight, lissajous, position, torus_knot, trefoil};
pub use params::CurveParameters;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}

/// A knot curve over `[0, 2π]`, evaluated from a set of [`CurveParameters`].
#[derive(Debug, Clone)]
pub struct KnotCurve {
    params: CurveParameters,
}

impl KnotCurve {
    pub fn new(params: CurveParameters) -> Self {
        Self { params }
    }
}

impl Curve for KnotCurve {
    fn point_at(&self, t: f64) -> Point3 {
        position(&self.params, t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}
