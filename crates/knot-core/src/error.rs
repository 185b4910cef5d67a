use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnotError {
    #[error("Invalid resolution: {resolution} rings x {radial_segments} radial segments (both must be >= 1)")]
    InvalidResolution { resolution: u32, radial_segments: u32 },

    #[error("Unsupported curve family: {0:?}")]
    UnsupportedCurveFamily(String),

    #[error("Degenerate tangent at t={t}: finite difference has zero length")]
    DegenerateTangent { t: f64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Mesh too large: {vertices} vertices exceed the u32 index range")]
    MeshTooLarge { vertices: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, KnotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = KnotError::InvalidResolution {
            resolution: 0,
            radial_segments: 20,
        };
        assert!(err.to_string().contains("0 rings x 20"));

        let err = KnotError::UnsupportedCurveFamily("hopf".into());
        assert_eq!(err.to_string(), "Unsupported curve family: \"hopf\"");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: KnotError = io.into();
        assert!(matches!(err, KnotError::Io(_)));
    }
}
