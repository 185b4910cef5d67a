pub mod buffers;
pub mod pipeline;

// Re-export main types
pub use buffers::TubeBuffers;
pub use pipeline::{GpuVertex, RenderMesh};
