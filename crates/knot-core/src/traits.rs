use crate::error::Result;

/// Validate the invariants of an input value before it is used for generation.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
