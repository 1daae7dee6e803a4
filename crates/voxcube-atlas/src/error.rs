use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtlasError {
    #[error("unknown material `{0}`")]
    UnknownMaterial(String),
    #[error("material index {0} out of range (expected 0..16)")]
    MaterialIndex(usize),
    #[error("invalid atlas layout: {0}")]
    InvalidLayout(String),
    #[error("tile ({col}, {row}) lies outside a {width}x{height} atlas")]
    TileOutOfBounds {
        col: u32,
        row: u32,
        width: u32,
        height: u32,
    },
}
