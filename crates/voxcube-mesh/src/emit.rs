//! Per-face writers into flat vertex, UV and index buffers.
//!
//! Each writer touches only its face's region and validates everything before
//! the first store, so an error never leaves a half-written face behind.

use voxcube_atlas::{AtlasLayout, Material};
use voxcube_geom::{Vec2, Vec3};

use crate::constants::{INDICES_PER_FACE, VERTS_PER_FACE};
use crate::corner::validate_size;
use crate::error::MeshError;
use crate::face::Face;

fn region_mut<'a, T>(
    buf: &'a mut [T],
    start: usize,
    len: usize,
    what: &'static str,
    face: Face,
) -> Result<&'a mut [T], MeshError> {
    let total = buf.len();
    buf.get_mut(start..start + len).ok_or_else(|| {
        log::warn!("{what} buffer of {total} too short for face {face}");
        MeshError::invalid(
            what,
            format!("buffer holds {total} slots, face {face} needs {}", start + len),
        )
    })
}

/// Writes the face's four corners into `positions[face*4 .. face*4+4]`.
pub fn write_face_vertices(face: Face, size: f32, positions: &mut [Vec3]) -> Result<(), MeshError> {
    validate_size(size)?;
    let slots = region_mut(positions, face.vertex_base(), VERTS_PER_FACE, "positions", face)?;
    for (slot, c) in slots.iter_mut().zip(face.corners()) {
        *slot = c.position_unchecked(size);
    }
    Ok(())
}

/// Writes the face's two triangles into `indices[face*6 .. face*6+6]`.
///
/// A disabled face keeps its six slots but every entry is 0, so both triangles
/// collapse onto vertex 0 and cover no area.
pub fn write_face_triangles(face: Face, enabled: bool, indices: &mut [u16]) -> Result<(), MeshError> {
    let slots = region_mut(indices, face.index_base(), INDICES_PER_FACE, "indices", face)?;
    let base = face.vertex_base() as u16;
    for (slot, local) in slots.iter_mut().zip(face.winding()) {
        *slot = if enabled { base + local } else { 0 };
    }
    Ok(())
}

/// Writes the material's atlas tile onto the face's four UV slots.
pub fn write_face_uv(
    face: Face,
    material: Material,
    atlas: &AtlasLayout,
    uvs: &mut [Vec2],
) -> Result<(), MeshError> {
    let rect = atlas.uv_rect(material).map_err(|e| {
        log::warn!("no atlas rect for {material} on face {face}: {e}");
        MeshError::from(e)
    })?;
    let slots = region_mut(uvs, face.vertex_base(), VERTS_PER_FACE, "uvs", face)?;
    slots.copy_from_slice(&face.uv_corners(rect));
    Ok(())
}
