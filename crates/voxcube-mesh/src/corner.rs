use std::fmt;
use std::str::FromStr;

use voxcube_geom::Vec3;

use crate::error::MeshError;

/// Cube corner. Bottom layer is A..D, top layer E..H; x grows A→B, z grows A→C.
///
/// ```text
///        G-------H
///       /|      /|
///      E-------F |
///      | C-----|-D
///      |/      |/
///      A-------B
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Corner {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::A,
        Corner::B,
        Corner::C,
        Corner::D,
        Corner::E,
        Corner::F,
        Corner::G,
        Corner::H,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Result<Corner, MeshError> {
        Corner::ALL
            .get(i)
            .copied()
            .ok_or_else(|| MeshError::invalid("corner", format!("index {i} out of range 0..8")))
    }

    /// Per-axis sign (-1 or +1) of this corner.
    #[inline]
    pub fn signs(self) -> (f32, f32, f32) {
        match self {
            Corner::A => (-1.0, -1.0, -1.0),
            Corner::B => (1.0, -1.0, -1.0),
            Corner::C => (-1.0, -1.0, 1.0),
            Corner::D => (1.0, -1.0, 1.0),
            Corner::E => (-1.0, 1.0, -1.0),
            Corner::F => (1.0, 1.0, -1.0),
            Corner::G => (-1.0, 1.0, 1.0),
            Corner::H => (1.0, 1.0, 1.0),
        }
    }

    /// Position for an already validated half-extent.
    #[inline]
    pub(crate) fn position_unchecked(self, size: f32) -> Vec3 {
        let (sx, sy, sz) = self.signs();
        Vec3::new(sx * size, sy * size, sz * size)
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = (b'A' + *self as u8) as char;
        write!(f, "{c}")
    }
}

impl FromStr for Corner {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Corner::A),
            "B" | "b" => Ok(Corner::B),
            "C" | "c" => Ok(Corner::C),
            "D" | "d" => Ok(Corner::D),
            "E" | "e" => Ok(Corner::E),
            "F" | "f" => Ok(Corner::F),
            "G" | "g" => Ok(Corner::G),
            "H" | "h" => Ok(Corner::H),
            other => Err(MeshError::invalid("corner", format!("unknown label `{other}`"))),
        }
    }
}

/// Rejects half-extents that are zero, negative or not finite.
pub fn validate_size(size: f32) -> Result<(), MeshError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid(
            "size",
            format!("half-extent must be positive and finite, got {size}"),
        ))
    }
}

/// Position of `label` on a cube of half-extent `size` centred at the origin.
pub fn corner(label: Corner, size: f32) -> Result<Vec3, MeshError> {
    validate_size(size)?;
    Ok(label.position_unchecked(size))
}
