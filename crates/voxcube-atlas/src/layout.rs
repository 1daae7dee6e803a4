use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxcube_geom::Vec2;

use crate::error::AtlasError;
use crate::material::Material;

/// Pixel geometry of a texture atlas split into equal tiles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtlasLayout {
    pub width: u32,
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl Default for AtlasLayout {
    fn default() -> Self {
        AtlasLayout::REFERENCE
    }
}

/// Normalized (0..1) texture rectangle. `lo` is the minimum corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct UvRect {
    pub lo: Vec2,
    pub hi: Vec2,
}

impl UvRect {
    #[inline]
    pub fn width(&self) -> f32 {
        self.hi.x - self.lo.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.hi.y - self.lo.y
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.lo.x && p.x <= self.hi.x && p.y >= self.lo.y && p.y <= self.hi.y
    }

    /// True when the interiors intersect; rects that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &UvRect) -> bool {
        self.lo.x < other.hi.x
            && other.lo.x < self.hi.x
            && self.lo.y < other.hi.y
            && other.lo.y < self.hi.y
    }
}

impl AtlasLayout {
    /// 512x512 atlas holding a 4x4 grid of 128x128 tiles.
    pub const REFERENCE: AtlasLayout = AtlasLayout {
        width: 512,
        height: 512,
        tile_width: 128,
        tile_height: 128,
    };

    pub const fn new(width: u32, height: u32, tile_width: u32, tile_height: u32) -> Self {
        Self {
            width,
            height,
            tile_width,
            tile_height,
        }
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.width / self.tile_width.max(1)
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.height / self.tile_height.max(1)
    }

    pub fn validate(&self) -> Result<(), AtlasError> {
        if self.width == 0 || self.height == 0 {
            return Err(AtlasError::InvalidLayout(format!(
                "atlas size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(AtlasError::InvalidLayout(format!(
                "tile size {}x{} must be non-zero",
                self.tile_width, self.tile_height
            )));
        }
        if self.tile_width > self.width || self.tile_height > self.height {
            return Err(AtlasError::InvalidLayout(format!(
                "tile {}x{} larger than atlas {}x{}",
                self.tile_width, self.tile_height, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Pixel rectangle `(lo, hi)` of the material's tile.
    pub fn pixel_rect(&self, material: Material) -> Result<([u32; 2], [u32; 2]), AtlasError> {
        self.validate()?;
        let tile = material.tile();
        let out_of_bounds = AtlasError::TileOutOfBounds {
            col: tile.col,
            row: tile.row,
            width: self.width,
            height: self.height,
        };
        // an overflowing edge is necessarily past the atlas edge
        let span = |i: u32, tile_len: u32, limit: u32| {
            let lo = i.checked_mul(tile_len)?;
            let hi = lo.checked_add(tile_len)?;
            (hi <= limit).then_some((lo, hi))
        };
        let (x0, x1) = span(tile.col, self.tile_width, self.width).ok_or(out_of_bounds.clone())?;
        let (y0, y1) = span(tile.row, self.tile_height, self.height).ok_or(out_of_bounds)?;
        Ok(([x0, y0], [x1, y1]))
    }

    /// Normalized UV rectangle of the material's tile.
    pub fn uv_rect(&self, material: Material) -> Result<UvRect, AtlasError> {
        let (lo, hi) = self.pixel_rect(material)?;
        let w = self.width as f32;
        let h = self.height as f32;
        Ok(UvRect {
            lo: Vec2::new(lo[0] as f32 / w, lo[1] as f32 / h),
            hi: Vec2::new(hi[0] as f32 / w, hi[1] as f32 / h),
        })
    }

    /// Parses an `[atlas]` table; missing keys fall back to the reference layout.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: AtlasConfig = toml::from_str(toml_str)?;
        if let Err(e) = cfg.atlas.validate() {
            log::warn!("rejecting atlas config: {}", e);
            return Err(e.into());
        }
        Ok(cfg.atlas)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AtlasConfig {
    #[serde(default)]
    pub atlas: AtlasLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_grid_is_four_by_four() {
        assert_eq!(AtlasLayout::REFERENCE.columns(), 4);
        assert_eq!(AtlasLayout::REFERENCE.rows(), 4);
        assert!(AtlasLayout::REFERENCE.validate().is_ok());
    }

    #[test]
    fn stone_rect() {
        let r = AtlasLayout::REFERENCE.uv_rect(Material::Stone).unwrap();
        assert_eq!(r.lo, Vec2::new(0.25, 0.5));
        assert_eq!(r.hi, Vec2::new(0.5, 0.75));
    }

    #[test]
    fn zero_sizes_rejected() {
        assert!(AtlasLayout::new(0, 512, 128, 128).validate().is_err());
        assert!(AtlasLayout::new(512, 512, 0, 128).validate().is_err());
        assert!(AtlasLayout::new(64, 64, 128, 128).validate().is_err());
    }

    #[test]
    fn small_atlas_tile_out_of_bounds() {
        // 2x2 grid cannot address column 3.
        let layout = AtlasLayout::new(256, 256, 128, 128);
        assert!(layout.uv_rect(Material::Sand).is_ok());
        assert_eq!(
            layout.uv_rect(Material::Water),
            Err(AtlasError::TileOutOfBounds {
                col: 3,
                row: 3,
                width: 256,
                height: 256
            })
        );
    }

    #[test]
    fn huge_tiles_do_not_wrap() {
        let layout = AtlasLayout::new(u32::MAX, u32::MAX, 2_000_000_000, 2_000_000_000);
        assert!(layout.validate().is_ok());
        // two tiles fit per axis: 4e9 <= u32::MAX
        assert!(layout.pixel_rect(Material::Sand).is_ok());
        assert_eq!(
            layout.pixel_rect(Material::Mud).unwrap(),
            ([2_000_000_000, 0], [4_000_000_000, 2_000_000_000])
        );
        for m in [Material::Water, Material::Stone, Material::Dirt] {
            assert!(matches!(
                layout.uv_rect(m),
                Err(AtlasError::TileOutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn edge_sharing_is_not_overlap() {
        let a = AtlasLayout::REFERENCE.uv_rect(Material::Dirt).unwrap();
        let b = AtlasLayout::REFERENCE.uv_rect(Material::GrassDirt).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&a));
    }
}
