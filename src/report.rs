use std::fmt::Write;

use voxcube_geom::Vec2;
use voxcube_mesh::{CubeMesh, Face};

/// Human-readable per-face table of a built cube.
pub fn summary(mesh: &CubeMesh) -> String {
    let mut s = String::new();
    let bb = mesh.bounds();
    let _ = writeln!(
        s,
        "cube size={} bounds=({}, {}, {})..({}, {}, {}) triangles={}/12",
        mesh.size,
        bb.min.x,
        bb.min.y,
        bb.min.z,
        bb.max.x,
        bb.max.y,
        bb.max.z,
        mesh.visible_triangles()
    );
    for face in Face::ALL {
        let corners: String = face.corners().iter().map(|c| c.to_string()).collect();
        let uv = mesh.face_uvs(face);
        let (lo, hi) = uv.iter().fold((uv[0], uv[0]), |(lo, hi), t| {
            (
                Vec2::new(lo.x.min(t.x), lo.y.min(t.y)),
                Vec2::new(hi.x.max(t.x), hi.y.max(t.y)),
            )
        });
        let _ = writeln!(
            s,
            "{:<8} {} {:<10} uv=({:.3}, {:.3})..({:.3}, {:.3}) idx={:?}{}",
            face.name(),
            corners,
            mesh.materials.get(face).name(),
            lo.x,
            lo.y,
            hi.x,
            hi.y,
            mesh.face_indices(face),
            if mesh.is_face_enabled(face) { "" } else { " (off)" }
        );
    }
    s
}
