use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use voxcube_mesh::{CubeMeshBuilder, Face, FaceMaterials, Material};

mod config;
mod obj;
mod report;

use config::VoxelConfig;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Format {
    Summary,
    Obj,
}

#[derive(Parser, Debug)]
#[command(name = "voxcube", about = "Build a textured single-voxel cube mesh")]
struct Args {
    /// Voxel description (TOML). Defaults to VOXCUBE_CONFIG or ./voxcube.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Half-extent of the cube.
    #[arg(long)]
    size: Option<f32>,
    /// Use one material on every face.
    #[arg(long)]
    material: Option<Material>,
    /// Face to switch off after building; repeatable.
    #[arg(long = "disable", value_name = "FACE")]
    disable: Vec<Face>,
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let cfg = match config::resolve_config_path(args.config) {
        Some(path) => {
            log::info!("loading voxel config {}", path.display());
            VoxelConfig::from_path(&path)?
        }
        None => VoxelConfig::default(),
    };

    let size = args.size.unwrap_or_else(|| cfg.size());
    let materials = match args.material {
        Some(m) => FaceMaterials::uniform(m),
        None => cfg.materials.resolve(),
    };
    let builder = CubeMeshBuilder::new(size)?.with_atlas(cfg.atlas)?;
    let mut mesh = builder.build(&materials)?;

    let mut disabled = cfg.disabled_faces()?;
    disabled.extend(args.disable);
    for face in disabled {
        mesh.set_face_enabled(face, false)?;
    }
    log::info!(
        "built cube size={} faces_on={} triangles={}",
        size,
        mesh.enabled_faces().count(),
        mesh.visible_triangles()
    );

    let mut sink: Box<dyn Write> = match &args.out {
        Some(p) => Box::new(BufWriter::new(File::create(p)?)),
        None => Box::new(io::stdout().lock()),
    };
    match args.format {
        Format::Obj => obj::write_obj(&mesh, &mut sink)?,
        Format::Summary => sink.write_all(report::summary(&mesh).as_bytes())?,
    }
    sink.flush()?;
    if let Some(p) = &args.out {
        log::info!("wrote {}", p.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
