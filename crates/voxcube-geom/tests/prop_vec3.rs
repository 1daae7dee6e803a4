use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use voxcube_geom::{Aabb, Vec3};

fn approx_zero_scaled(val: f32, scale: f32, atol: f32, rtol: f32) -> bool {
    val.abs() <= atol + rtol * scale
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e4)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // a·(a×b) = 0 and b·(a×b) = 0, the property the winding checks lean on
    #[test]
    fn vec3_cross_orthogonal(a in arb_vec3(), b in arb_vec3()) {
        let c = a.cross(b);
        prop_assert!(approx_zero_scaled(a.dot(c), a.length() * c.length(), 1e-6, 1e-4));
        prop_assert!(approx_zero_scaled(b.dot(c), b.length() * c.length(), 1e-6, 1e-4));
    }

    #[test]
    fn aabb_center_inside(a in arb_vec3(), b in arb_vec3()) {
        let bb = Aabb::from_points(&[a, b]).unwrap();
        let c = bb.center();
        prop_assert!(c.x >= bb.min.x && c.x <= bb.max.x);
        prop_assert!(c.y >= bb.min.y && c.y <= bb.max.y);
        prop_assert!(c.z >= bb.min.z && c.z <= bb.max.z);
        let e = bb.extents();
        prop_assert!(e.x >= 0.0 && e.y >= 0.0 && e.z >= 0.0);
    }
}
