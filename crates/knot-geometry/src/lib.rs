//! Knot tube geometry: closed knot curves, frames, and ring sampling.

pub mod curve;
pub mod frame;
pub mod tessellate;

pub use curve::{position, Curve, CurveParameters, KnotCurve, KnotFamily};
pub use frame::{frame, Frame, FrameEstimator, FrameMode};
pub use tessellate::{curve_to_polyline, polyline_length, ring_parameters};
