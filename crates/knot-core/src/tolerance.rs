/// Tolerances for numeric checks along the curve.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Relative chord length below which a finite difference counts as degenerate
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-12;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
        }
    }

    /// Check if a length is zero within linear tolerance (non-finite counts as zero)
    pub fn is_zero(self, v: f64) -> bool {
        !v.is_finite() || v.abs() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
