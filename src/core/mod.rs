pub use lemon_core::*;

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
