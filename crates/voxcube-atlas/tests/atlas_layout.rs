use proptest::prelude::*;
use voxcube_atlas::{AtlasLayout, Material};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-6
}

#[test]
fn every_rect_inside_unit_square_with_tile_size() {
    let layout = AtlasLayout::REFERENCE;
    for m in Material::ALL {
        let r = layout.uv_rect(m).unwrap();
        assert!(r.lo.x >= 0.0 && r.lo.y >= 0.0, "{m}");
        assert!(r.hi.x <= 1.0 && r.hi.y <= 1.0, "{m}");
        assert!(approx(r.width(), 128.0 / 512.0), "{m}");
        assert!(approx(r.height(), 128.0 / 512.0), "{m}");
    }
}

#[test]
fn no_two_materials_overlap() {
    let layout = AtlasLayout::REFERENCE;
    for a in Material::ALL {
        for b in Material::ALL {
            if a == b {
                continue;
            }
            let ra = layout.uv_rect(a).unwrap();
            let rb = layout.uv_rect(b).unwrap();
            assert!(!ra.overlaps(&rb), "{a} overlaps {b}");
        }
    }
}

#[test]
fn dirt_row_sits_at_top_of_texture_space() {
    let layout = AtlasLayout::REFERENCE;
    let dirt = layout.uv_rect(Material::Dirt).unwrap();
    let wood2 = layout.uv_rect(Material::Wood2).unwrap();
    assert!(approx(dirt.lo.x, 0.0) && approx(dirt.lo.y, 0.75));
    assert!(approx(wood2.lo.x, 0.75) && approx(wood2.lo.y, 0.0));
    assert_eq!(
        layout.pixel_rect(Material::Stone).unwrap(),
        ([128, 256], [256, 384])
    );
}

#[test]
fn toml_defaults_to_reference() {
    assert_eq!(AtlasLayout::from_toml_str("").unwrap(), AtlasLayout::REFERENCE);
    let layout = AtlasLayout::from_toml_str(
        r#"
        [atlas]
        width = 1024
        height = 1024
        tile_width = 256
        tile_height = 256
    "#,
    )
    .unwrap();
    assert_eq!(layout, AtlasLayout::new(1024, 1024, 256, 256));
    let r = layout.uv_rect(Material::Stone).unwrap();
    assert!(approx(r.lo.x, 0.25) && approx(r.lo.y, 0.5));
}

#[test]
fn toml_partial_and_invalid() {
    let layout = AtlasLayout::from_toml_str("[atlas]\nwidth = 1024\ntile_width = 256\n").unwrap();
    assert_eq!(layout, AtlasLayout::new(1024, 512, 256, 128));
    assert!(AtlasLayout::from_toml_str("[atlas]\ntile_height = 0\n").is_err());
    assert!(AtlasLayout::from_toml_str("[atlas]\nwidth = \"wide\"\n").is_err());
}

#[test]
fn oversized_toml_layout_errors_instead_of_wrapping() {
    let layout = AtlasLayout::from_toml_str(
        "[atlas]\nwidth = 4294967295\nheight = 4294967295\ntile_width = 2000000000\ntile_height = 2000000000\n",
    )
    .unwrap();
    assert!(layout.uv_rect(Material::Water).is_err());
    assert!(layout.uv_rect(Material::Sand).is_ok());
}

#[test]
fn toml_typo_rejected() {
    assert!(AtlasLayout::from_toml_str("[atlas]\ntile_widht = 64\n").is_err());
    assert!(AtlasLayout::from_toml_str("[atlass]\nwidth = 64\n").is_err());
}

proptest! {
    // Scaling the whole atlas uniformly leaves normalized rects unchanged.
    #[test]
    fn uniform_scale_preserves_uvs(k in 1u32..16, idx in 0usize..16) {
        let m = Material::from_index(idx).unwrap();
        let base = AtlasLayout::REFERENCE.uv_rect(m).unwrap();
        let scaled = AtlasLayout::new(512 * k, 512 * k, 128 * k, 128 * k).uv_rect(m).unwrap();
        prop_assert!(approx(base.lo.x, scaled.lo.x) && approx(base.lo.y, scaled.lo.y));
        prop_assert!(approx(base.hi.x, scaled.hi.x) && approx(base.hi.y, scaled.hi.y));
    }
}
