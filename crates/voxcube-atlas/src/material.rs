use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::AtlasError;

/// Texture identifier. Discriminants follow the atlas order, four per row.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Dirt = 0,
    GrassDirt = 1,
    Grass = 2,
    Water = 3,

    Leaf = 4,
    Stone = 5,
    Coal = 6,
    Bark = 7,

    TreeCut = 8,
    Wood = 9,
    Brick = 10,
    Lava = 11,

    Sand = 12,
    Mud = 13,
    Bark2 = 14,
    Wood2 = 15,
}

/// Column/row address of a tile in the atlas grid. Row 0 is the bottom row.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TileCoord {
    pub col: u32,
    pub row: u32,
}

impl TileCoord {
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl Material {
    pub const COUNT: usize = 16;

    pub const ALL: [Material; Material::COUNT] = [
        Material::Dirt,
        Material::GrassDirt,
        Material::Grass,
        Material::Water,
        Material::Leaf,
        Material::Stone,
        Material::Coal,
        Material::Bark,
        Material::TreeCut,
        Material::Wood,
        Material::Brick,
        Material::Lava,
        Material::Sand,
        Material::Mud,
        Material::Bark2,
        Material::Wood2,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Result<Material, AtlasError> {
        Material::ALL
            .get(i)
            .copied()
            .ok_or(AtlasError::MaterialIndex(i))
    }

    /// Lowercase key used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Material::Dirt => "dirt",
            Material::GrassDirt => "grassdirt",
            Material::Grass => "grass",
            Material::Water => "water",
            Material::Leaf => "leaf",
            Material::Stone => "stone",
            Material::Coal => "coal",
            Material::Bark => "bark",
            Material::TreeCut => "treecut",
            Material::Wood => "wood",
            Material::Brick => "brick",
            Material::Lava => "lava",
            Material::Sand => "sand",
            Material::Mud => "mud",
            Material::Bark2 => "bark2",
            Material::Wood2 => "wood2",
        }
    }

    /// Tile of this material in the reference 4x4 atlas.
    ///
    /// Kept as an explicit table rather than derived from the discriminant so a
    /// reshuffled atlas only touches this match.
    pub fn tile(self) -> TileCoord {
        match self {
            Material::Dirt => TileCoord::new(0, 3),
            Material::GrassDirt => TileCoord::new(1, 3),
            Material::Grass => TileCoord::new(2, 3),
            Material::Water => TileCoord::new(3, 3),

            Material::Leaf => TileCoord::new(0, 2),
            Material::Stone => TileCoord::new(1, 2),
            Material::Coal => TileCoord::new(2, 2),
            Material::Bark => TileCoord::new(3, 2),

            Material::TreeCut => TileCoord::new(0, 1),
            Material::Wood => TileCoord::new(1, 1),
            Material::Brick => TileCoord::new(2, 1),
            Material::Lava => TileCoord::new(3, 1),

            Material::Sand => TileCoord::new(0, 0),
            Material::Mud => TileCoord::new(1, 0),
            Material::Bark2 => TileCoord::new(2, 0),
            Material::Wood2 => TileCoord::new(3, 0),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Material::ALL
            .iter()
            .copied()
            .find(|m| m.name() == key)
            .ok_or_else(|| AtlasError::UnknownMaterial(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tile_table_matches_row_major_layout() {
        // The explicit table must agree with col = i % 4, row = 3 - i / 4.
        for m in Material::ALL {
            let i = m.index() as u32;
            assert_eq!(m.tile(), TileCoord::new(i % 4, 3 - i / 4), "{m}");
        }
    }

    #[test]
    fn tiles_are_unique() {
        let tiles: HashSet<TileCoord> = Material::ALL.iter().map(|m| m.tile()).collect();
        assert_eq!(tiles.len(), Material::COUNT);
    }

    #[test]
    fn names_parse_back() {
        for m in Material::ALL {
            assert_eq!(m.name().parse::<Material>().unwrap(), m);
        }
        assert_eq!(" Stone ".parse::<Material>().unwrap(), Material::Stone);
        assert_eq!(
            "obsidian".parse::<Material>(),
            Err(AtlasError::UnknownMaterial("obsidian".into()))
        );
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Material::from_index(5).unwrap(), Material::Stone);
        assert_eq!(Material::from_index(16), Err(AtlasError::MaterialIndex(16)));
    }
}
