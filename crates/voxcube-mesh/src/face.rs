use std::fmt;
use std::str::FromStr;

use voxcube_atlas::UvRect;
use voxcube_geom::{Vec2, Vec3};

use crate::constants::{INDICES_PER_FACE, VERTS_PER_FACE};
use crate::corner::Corner;
use crate::error::MeshError;

/// Cube side. The discriminant fixes the face's slot region in every buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Back = 0,
    Right = 1,
    Forward = 2,
    Left = 3,
    Up = 4,
    Down = 5,
}

/// Top/bottom/side classification used when picking materials by role.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FaceRole {
    Top,
    Bottom,
    Side,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Back,
        Face::Right,
        Face::Forward,
        Face::Left,
        Face::Up,
        Face::Down,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    pub fn from_index(i: usize) -> Result<Face, MeshError> {
        Face::ALL
            .get(i)
            .copied()
            .ok_or_else(|| MeshError::invalid("face", format!("index {i} out of range 0..6")))
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Back => "back",
            Face::Right => "right",
            Face::Forward => "forward",
            Face::Left => "left",
            Face::Up => "up",
            Face::Down => "down",
        }
    }

    /// First vertex/UV slot owned by this face.
    #[inline]
    pub fn vertex_base(self) -> usize {
        self.index() * VERTS_PER_FACE
    }

    /// First index slot owned by this face.
    #[inline]
    pub fn index_base(self) -> usize {
        self.index() * INDICES_PER_FACE
    }

    /// Corners written into this face's four vertex slots, in slot order.
    pub fn corners(self) -> [Corner; 4] {
        use Corner::*;
        match self {
            Face::Back => [E, F, A, B],
            Face::Right => [F, H, B, D],
            Face::Forward => [H, G, D, C],
            Face::Left => [G, E, C, A],
            Face::Up => [E, F, G, H],
            Face::Down => [A, B, C, D],
        }
    }

    /// Two triangles as offsets into the face's own four slots.
    ///
    /// Wound so `(v1 - v0) x (v2 - v0)` points out of the cube.
    pub fn winding(self) -> [u16; INDICES_PER_FACE] {
        match self {
            // slots 2,0,1 / 3,2,1
            Face::Back | Face::Right | Face::Forward | Face::Left | Face::Down => {
                [2, 0, 1, 3, 2, 1]
            }
            // E,G,H / F,E,H
            Face::Up => [0, 2, 3, 1, 0, 3],
        }
    }

    /// Unit outward normal.
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Back => Vec3::new(0.0, 0.0, -1.0),
            Face::Right => Vec3::new(1.0, 0.0, 0.0),
            Face::Forward => Vec3::new(0.0, 0.0, 1.0),
            Face::Left => Vec3::new(-1.0, 0.0, 0.0),
            Face::Up => Vec3::UP,
            Face::Down => Vec3::new(0.0, -1.0, 0.0),
        }
    }

    /// Classifies the face into top/bottom/side role for material lookup.
    #[inline]
    pub fn role(self) -> FaceRole {
        match self {
            Face::Up => FaceRole::Top,
            Face::Down => FaceRole::Bottom,
            _ => FaceRole::Side,
        }
    }

    /// Maps a tile rectangle onto this face's four vertex slots.
    ///
    /// The top face is flipped in V relative to the others so its texture reads
    /// upright from above.
    pub fn uv_corners(self, rect: UvRect) -> [Vec2; 4] {
        let (lo, hi) = (rect.lo, rect.hi);
        match self.role() {
            FaceRole::Top => [
                Vec2::new(lo.x, lo.y),
                Vec2::new(hi.x, lo.y),
                Vec2::new(lo.x, hi.y),
                Vec2::new(hi.x, hi.y),
            ],
            FaceRole::Side | FaceRole::Bottom => [
                Vec2::new(lo.x, hi.y),
                Vec2::new(hi.x, hi.y),
                Vec2::new(lo.x, lo.y),
                Vec2::new(hi.x, lo.y),
            ],
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Face::ALL
            .iter()
            .copied()
            .find(|f| f.name() == key)
            .ok_or_else(|| MeshError::invalid("face", format!("unknown label `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_buffers() {
        for f in Face::ALL {
            assert_eq!(f.vertex_base(), f.index() * 4);
            assert_eq!(f.index_base(), f.index() * 6);
        }
        assert_eq!(Face::Up.index_base(), 24);
    }

    #[test]
    fn parse_names() {
        assert_eq!("UP".parse::<Face>().unwrap(), Face::Up);
        assert_eq!(Face::from_index(3).unwrap(), Face::Left);
        assert!("top".parse::<Face>().is_err());
        assert!(Face::from_index(6).is_err());
    }

    #[test]
    fn corners_lie_on_face_plane() {
        for f in Face::ALL {
            let n = f.normal();
            for c in f.corners() {
                let p = c.position_unchecked(1.0);
                assert_eq!(p.dot(n), 1.0, "{f} {c}");
            }
        }
    }
}
