//! Wavefront OBJ export of a built cube.

use std::io::{self, Write};

use voxcube_mesh::CubeMesh;

/// Writes positions, UVs, flat normals and one `f` line per visible triangle.
/// Disabled faces are skipped rather than written as degenerate triangles.
pub fn write_obj<W: Write>(mesh: &CubeMesh, out: &mut W) -> io::Result<()> {
    writeln!(out, "# voxcube size={}", mesh.size)?;
    for (face, m) in mesh.materials.iter() {
        writeln!(out, "# {face}: {m}")?;
    }
    for p in mesh.positions() {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for t in mesh.uvs() {
        writeln!(out, "vt {} {}", t.x, t.y)?;
    }
    for n in mesh.vertex_normals() {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for tri in mesh.compact_indices().chunks_exact(3) {
        // OBJ is 1-based; v, vt and vn share slots
        let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxcube_mesh::{Face, FaceMaterials, Material, build};

    fn render(mesh: &CubeMesh) -> String {
        let mut buf = Vec::new();
        write_obj(mesh, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn counts_lines() {
        let mesh = build(0.5, &FaceMaterials::uniform(Material::Stone)).unwrap();
        let text = render(&mesh);
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 24);
        assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 24);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 24);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
        assert!(text.contains("f 3/3/3 1/1/1 2/2/2"));
    }

    #[test]
    fn disabled_faces_are_skipped() {
        let mut mesh = build(0.5, &FaceMaterials::default()).unwrap();
        mesh.set_face_enabled(Face::Up, false).unwrap();
        let text = render(&mesh);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 10);
        assert!(!text.contains("f 17/17/17 19/19/19 20/20/20"));
    }
}
