use voxcube_atlas::AtlasLayout;

use crate::constants::{DEFAULT_SIZE, REFERENCE_SIZE_MAX, REFERENCE_SIZE_MIN};
use crate::corner::validate_size;
use crate::emit::{write_face_triangles, write_face_uv, write_face_vertices};
use crate::error::MeshError;
use crate::face::Face;
use crate::materials::FaceMaterials;
use crate::mesh_build::CubeMesh;

/// Builds cube meshes of one half-extent against one atlas layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubeMeshBuilder {
    size: f32,
    atlas: AtlasLayout,
}

impl Default for CubeMeshBuilder {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            atlas: AtlasLayout::REFERENCE,
        }
    }
}

impl CubeMeshBuilder {
    pub fn new(size: f32) -> Result<Self, MeshError> {
        validate_size(size)?;
        if !(REFERENCE_SIZE_MIN..=REFERENCE_SIZE_MAX).contains(&size) {
            log::debug!(
                "size {} outside the usual {}..={} voxel range",
                size,
                REFERENCE_SIZE_MIN,
                REFERENCE_SIZE_MAX
            );
        }
        Ok(Self {
            size,
            atlas: AtlasLayout::REFERENCE,
        })
    }

    pub fn with_atlas(mut self, atlas: AtlasLayout) -> Result<Self, MeshError> {
        atlas.validate()?;
        self.atlas = atlas;
        Ok(self)
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn atlas(&self) -> &AtlasLayout {
        &self.atlas
    }

    /// Populates vertices, then UVs, then indices (all faces enabled).
    pub fn build(&self, materials: &FaceMaterials) -> Result<CubeMesh, MeshError> {
        let mut mesh = CubeMesh {
            size: self.size,
            materials: *materials,
            ..CubeMesh::default()
        };
        for face in Face::ALL {
            write_face_vertices(face, self.size, &mut mesh.pos)?;
        }
        for (face, material) in materials.iter() {
            write_face_uv(face, material, &self.atlas, &mut mesh.uv)?;
        }
        for face in Face::ALL {
            write_face_triangles(face, true, &mut mesh.idx)?;
        }
        log::debug!(
            "built cube size={} verts={} tris={}",
            self.size,
            mesh.pos.len(),
            mesh.visible_triangles()
        );
        Ok(mesh)
    }

    /// Rebuilds `mesh` in place. On error `mesh` is left as it was.
    pub fn rebuild_into(&self, mesh: &mut CubeMesh, materials: &FaceMaterials) -> Result<(), MeshError> {
        *mesh = self.build(materials)?;
        Ok(())
    }
}

/// One-shot build against the reference atlas.
pub fn build(size: f32, materials: &FaceMaterials) -> Result<CubeMesh, MeshError> {
    CubeMeshBuilder::new(size)?.build(materials)
}
