use voxcube_geom::{Aabb, Vec2, Vec3};

use crate::constants::{FACE_COUNT, INDEX_COUNT, INDICES_PER_FACE, VERTEX_COUNT, VERTS_PER_FACE};
use crate::emit::write_face_triangles;
use crate::error::MeshError;
use crate::face::Face;
use crate::materials::FaceMaterials;

/// Fixed-size buffers of one cube, ready to hand to a renderer or collider.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeMesh {
    pub pos: [Vec3; VERTEX_COUNT],
    pub uv: [Vec2; VERTEX_COUNT],
    pub idx: [u16; INDEX_COUNT],
    pub size: f32,
    pub materials: FaceMaterials,
}

impl Default for CubeMesh {
    fn default() -> Self {
        Self {
            pos: [Vec3::ZERO; VERTEX_COUNT],
            uv: [Vec2::ZERO; VERTEX_COUNT],
            idx: [0; INDEX_COUNT],
            size: 0.0,
            materials: FaceMaterials::default(),
        }
    }
}

impl CubeMesh {
    pub fn positions(&self) -> &[Vec3] {
        &self.pos
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uv
    }

    pub fn indices(&self) -> &[u16] {
        &self.idx
    }

    /// Interleaved x,y,z per vertex.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.pos.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Interleaved u,v per vertex.
    pub fn uvs_flat(&self) -> Vec<f32> {
        self.uv.iter().flat_map(|t| t.to_array()).collect()
    }

    pub fn face_positions(&self, face: Face) -> &[Vec3] {
        let b = face.vertex_base();
        &self.pos[b..b + VERTS_PER_FACE]
    }

    pub fn face_uvs(&self, face: Face) -> &[Vec2] {
        let b = face.vertex_base();
        &self.uv[b..b + VERTS_PER_FACE]
    }

    pub fn face_indices(&self, face: Face) -> &[u16] {
        let b = face.index_base();
        &self.idx[b..b + INDICES_PER_FACE]
    }

    /// Switches a face on or off by rewriting only its index region.
    pub fn set_face_enabled(&mut self, face: Face, enabled: bool) -> Result<(), MeshError> {
        log::debug!("face {} -> {}", face, if enabled { "on" } else { "off" });
        write_face_triangles(face, enabled, &mut self.idx)
    }

    /// A disabled face has all six of its indices at 0.
    pub fn is_face_enabled(&self, face: Face) -> bool {
        self.face_indices(face).iter().any(|&i| i != 0)
    }

    pub fn enabled_faces(&self) -> impl Iterator<Item = Face> + '_ {
        Face::ALL.into_iter().filter(|&f| self.is_face_enabled(f))
    }

    /// Index list with disabled faces dropped instead of degenerated.
    pub fn compact_indices(&self) -> Vec<u16> {
        let mut out = Vec::with_capacity(INDEX_COUNT);
        for face in self.enabled_faces() {
            out.extend_from_slice(self.face_indices(face));
        }
        out
    }

    /// Outward unit normal of each face, taken from its first triangle's geometry.
    ///
    /// Corners are divided by the half-extent first so edges have length 2 and
    /// the cross product neither underflows for tiny cubes nor overflows for huge ones.
    pub fn face_normals(&self) -> [Vec3; FACE_COUNT] {
        let unit = |p: Vec3| {
            if self.size > 0.0 && self.size.is_finite() { p / self.size } else { p }
        };
        let mut out = [Vec3::ZERO; FACE_COUNT];
        for face in Face::ALL {
            let b = face.vertex_base();
            let w = face.winding();
            let v0 = unit(self.pos[b + w[0] as usize]);
            let v1 = unit(self.pos[b + w[1] as usize]);
            let v2 = unit(self.pos[b + w[2] as usize]);
            out[face.index()] = (v1 - v0).cross(v2 - v0).normalized();
        }
        out
    }

    /// Flat-shaded per-vertex normals; vertices are not shared between faces.
    pub fn vertex_normals(&self) -> [Vec3; VERTEX_COUNT] {
        let faces = self.face_normals();
        let mut out = [Vec3::ZERO; VERTEX_COUNT];
        for (i, n) in out.iter_mut().enumerate() {
            *n = faces[i / VERTS_PER_FACE];
        }
        out
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(&self.pos).unwrap_or_default()
    }

    /// Number of triangles with non-zero area.
    pub fn visible_triangles(&self) -> usize {
        self.idx
            .chunks_exact(3)
            .filter(|t| t[0] != t[1] && t[1] != t[2] && t[0] != t[2])
            .count()
    }
}
