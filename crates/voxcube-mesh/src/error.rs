use thiserror::Error;
use voxcube_atlas::AtlasError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A label, size, layout or buffer the caller passed in cannot be used.
    #[error("invalid {what}: {detail}")]
    InvalidArgument { what: &'static str, detail: String },
}

impl MeshError {
    pub(crate) fn invalid(what: &'static str, detail: impl Into<String>) -> Self {
        MeshError::InvalidArgument {
            what,
            detail: detail.into(),
        }
    }
}

impl From<AtlasError> for MeshError {
    fn from(e: AtlasError) -> Self {
        let what = match e {
            AtlasError::UnknownMaterial(_) | AtlasError::MaterialIndex(_) => "material",
            AtlasError::InvalidLayout(_) | AtlasError::TileOutOfBounds { .. } => "atlas",
        };
        MeshError::invalid(what, e.to_string())
    }
}
