use voxcube_atlas::Material;

use crate::constants::FACE_COUNT;
use crate::face::{Face, FaceRole};

/// One material per face, indexed by `Face::index`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FaceMaterials {
    by_face: [Material; FACE_COUNT],
}

impl Default for FaceMaterials {
    fn default() -> Self {
        FaceMaterials::grass_block()
    }
}

impl FaceMaterials {
    pub fn uniform(material: Material) -> Self {
        Self {
            by_face: [material; FACE_COUNT],
        }
    }

    pub fn from_roles(top: Material, bottom: Material, side: Material) -> Self {
        let mut by_face = [side; FACE_COUNT];
        for face in Face::ALL {
            by_face[face.index()] = match face.role() {
                FaceRole::Top => top,
                FaceRole::Bottom => bottom,
                FaceRole::Side => side,
            };
        }
        Self { by_face }
    }

    /// Grass on top, dirt underneath, grass-edged dirt around the sides.
    pub fn grass_block() -> Self {
        Self::from_roles(Material::Grass, Material::Dirt, Material::GrassDirt)
    }

    pub fn with_face(mut self, face: Face, material: Material) -> Self {
        self.set(face, material);
        self
    }

    #[inline]
    pub fn set(&mut self, face: Face, material: Material) {
        self.by_face[face.index()] = material;
    }

    #[inline]
    pub fn get(&self, face: Face) -> Material {
        self.by_face[face.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, Material)> + '_ {
        Face::ALL.iter().map(move |&f| (f, self.get(f)))
    }
}
