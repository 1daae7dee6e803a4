//! Buffer geometry of a single cube. Every face owns a fixed region.

pub const FACE_COUNT: usize = 6;
pub const VERTS_PER_FACE: usize = 4;
pub const INDICES_PER_FACE: usize = 6; // two triangles
pub const VERTEX_COUNT: usize = FACE_COUNT * VERTS_PER_FACE;
pub const INDEX_COUNT: usize = FACE_COUNT * INDICES_PER_FACE;

/// Half-extent used when nothing else is configured (a unit cube).
pub const DEFAULT_SIZE: f32 = 0.5;
/// Size range an editor slider usually offers. Sizes outside it still build.
pub const REFERENCE_SIZE_MIN: f32 = 0.25;
pub const REFERENCE_SIZE_MAX: f32 = 0.5;
