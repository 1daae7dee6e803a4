use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use voxcube_mesh::constants::DEFAULT_SIZE;
use voxcube_mesh::{AtlasLayout, Face, FaceMaterials, FaceRole, Material};

/// One voxel as described in `voxcube.toml`.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct VoxelConfig {
    pub size: Option<f32>,
    #[serde(default)]
    pub atlas: AtlasLayout,
    #[serde(default)]
    pub materials: MaterialsSection,
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Per-face keys win over role selectors, which win over `all`.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct MaterialsSection {
    pub all: Option<Material>,
    pub top: Option<Material>,
    pub bottom: Option<Material>,
    pub side: Option<Material>,
    pub back: Option<Material>,
    pub right: Option<Material>,
    pub forward: Option<Material>,
    pub left: Option<Material>,
    pub up: Option<Material>,
    pub down: Option<Material>,
}

impl MaterialsSection {
    fn for_face(&self, face: Face) -> Option<Material> {
        match face {
            Face::Back => self.back,
            Face::Right => self.right,
            Face::Forward => self.forward,
            Face::Left => self.left,
            Face::Up => self.up,
            Face::Down => self.down,
        }
    }

    fn for_role(&self, role: FaceRole) -> Option<Material> {
        match role {
            FaceRole::Top => self.top,
            FaceRole::Bottom => self.bottom,
            FaceRole::Side => self.side,
        }
    }

    pub fn resolve(&self) -> FaceMaterials {
        let preset = FaceMaterials::grass_block();
        let mut out = preset;
        for face in Face::ALL {
            let m = self
                .for_face(face)
                .or_else(|| self.for_role(face.role()))
                .or(self.all)
                .unwrap_or_else(|| preset.get(face));
            out.set(face, m);
        }
        out
    }
}

impl VoxelConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: VoxelConfig = toml::from_str(toml_str)?;
        cfg.atlas.validate()?;
        // surface bad face names at load time rather than after building
        cfg.disabled_faces()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn size(&self) -> f32 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    pub fn disabled_faces(&self) -> Result<Vec<Face>, Box<dyn Error>> {
        let mut out = Vec::with_capacity(self.disabled.len());
        for name in &self.disabled {
            out.push(name.parse::<Face>()?);
        }
        Ok(out)
    }
}

pub const CONFIG_FILE: &str = "voxcube.toml";

/// Precedence: CLI flag -> VOXCUBE_CONFIG env -> `voxcube.toml` in CWD or up to 5 parents.
/// `None` means run with built-in defaults.
pub fn resolve_config_path(cli: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli {
        // an explicit path is used even if missing so the read error reaches the user
        return Some(p);
    }
    if let Ok(p) = std::env::var("VOXCUBE_CONFIG") {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return Some(pb);
        }
        log::warn!("VOXCUBE_CONFIG points at missing file {}", pb.display());
    }
    let mut cur = std::env::current_dir().ok()?;
    for _ in 0..5 {
        let check = cur.join(CONFIG_FILE);
        if check.exists() {
            return Some(check);
        }
        if !cur.pop() {
            break;
        }
    }
    None
}
