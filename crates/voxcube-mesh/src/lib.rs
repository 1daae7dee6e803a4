//! Single-voxel cube mesher: corner table, per-face writers and the builder
//! that ties them into position, UV and index buffers.
#![forbid(unsafe_code)]

pub mod build;
pub mod constants;
pub mod corner;
pub mod emit;
pub mod error;
pub mod face;
pub mod materials;
pub mod mesh_build;

pub use build::{CubeMeshBuilder, build};
pub use corner::{Corner, corner};
pub use emit::{write_face_triangles, write_face_uv, write_face_vertices};
pub use error::MeshError;
pub use face::{Face, FaceRole};
pub use materials::FaceMaterials;
pub use mesh_build::CubeMesh;
pub use voxcube_atlas::{AtlasLayout, Material, UvRect};
