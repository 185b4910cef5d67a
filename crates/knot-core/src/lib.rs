pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{KnotError, Result};
pub use tolerance::Tolerance;
pub use traits::Validate;
