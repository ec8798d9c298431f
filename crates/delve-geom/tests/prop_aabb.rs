use delve_geom::{Aabb, Vec3};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = i32> {
    -512i32..=512
}

fn span() -> impl Strategy<Value = ((i32, i32, i32), (i32, i32, i32))> {
    (coord(), coord(), coord(), 1i32..=64, 1i32..=64, 1i32..=64)
        .prop_map(|(x, y, z, w, h, d)| ((x, y, z), (x + w, y + h, z + d)))
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (-1e6f32..1e6, -1e6f32..1e6, -1e6f32..1e6).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

#[test]
fn from_cell_negates_depth() {
    assert_eq!(Vec3::from_cell(3, 7, -2), Vec3::new(3.0, -7.0, -2.0));
    assert_eq!(Vec3::from_cell(0, 0, 0), Vec3::ZERO);
}

#[test]
fn single_cell_span_is_unit_box_below_anchor() {
    let b = Aabb::from_cell_span((2, 5, 1), (3, 6, 2));
    assert_eq!(b.min, Vec3::new(2.0, -5.0, 1.0));
    assert_eq!(b.max, Vec3::new(3.0, -4.0, 2.0));
    assert!(!b.is_empty());
}

#[test]
fn cross_follows_right_hand_rule() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(y.cross(x), -Vec3::new(0.0, 0.0, 1.0));
}

proptest! {
    // Extents of a cell span equal its cell counts on every axis
    #[test]
    fn span_extents_match_cell_counts((lo, hi) in span()) {
        let b = Aabb::from_cell_span(lo, hi);
        let e = b.extents();
        prop_assert_eq!(e.x, (hi.0 - lo.0) as f32);
        prop_assert_eq!(e.y, (hi.1 - lo.1) as f32);
        prop_assert_eq!(e.z, (hi.2 - lo.2) as f32);
    }

    // Every cell anchor inside the span lies inside the world box
    #[test]
    fn span_contains_its_cell_anchors((lo, hi) in span()) {
        let b = Aabb::from_cell_span(lo, hi);
        prop_assert!(b.contains(Vec3::from_cell(lo.0, lo.1, lo.2)));
        prop_assert!(b.contains(Vec3::from_cell(hi.0 - 1, hi.1 - 1, hi.2 - 1)));
        prop_assert!(b.contains(b.center()));
    }

    // min/max are order independent
    #[test]
    fn min_max_commute(a in arb_vec3(), b in arb_vec3()) {
        prop_assert_eq!(a.min(b), b.min(a));
        prop_assert_eq!(a.max(b), b.max(a));
    }
}
