pub mod mesh;
pub mod tube;

pub use mesh::{validate_indices, TriangleMesh};
pub use tube::{tessellate_tube, tessellate_tube_with, tube_indices, tube_vertices, TubeTessellator};
