//! Texture materials and the atlas layout they are packed into.
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod material;

// Re-exports for convenience
pub use error::AtlasError;
pub use layout::{AtlasLayout, UvRect};
pub use material::{Material, TileCoord};
