use super::*;
use crate::error::MeshError;
use approx::assert_abs_diff_eq;
use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

fn assert_vertex(actual: DVec3, expected: DVec3) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-12);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-12);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = 1e-12);
}

/// Angle of the slice owning vertex `index`, in (-π, π].
fn vertex_angle(mesh: &Mesh, index: u32) -> f64 {
    let v = mesh.vertex(index);
    v.y.atan2(v.x)
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_full_turn_four_slices() {
    let mesh = generate(0.0, TAU, 1.0, 1.0, 4).expect("tube succeeds");
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.index_count(), 24);

    assert_eq!(mesh.vertex(0), DVec3::new(1.0, 0.0, 1.0));
    assert_eq!(mesh.vertex(1), DVec3::new(1.0, 0.0, -1.0));
    assert_vertex(mesh.vertex(2), DVec3::new(0.0, 1.0, 1.0));
    assert_vertex(mesh.vertex(3), DVec3::new(0.0, 1.0, -1.0));
    assert_vertex(mesh.vertex(4), DVec3::new(-1.0, 0.0, 1.0));
    assert_vertex(mesh.vertex(6), DVec3::new(0.0, -1.0, 1.0));

    // The last pair of triangles folds back onto vertices 0 and 1
    assert_eq!(mesh.triangles()[6], [6, 7, 1]);
    assert_eq!(mesh.triangles()[7], [6, 1, 0]);
}

#[test]
fn test_half_turn_two_slices() {
    let mesh = generate(0.0, PI, 0.5, 2.0, 2).expect("tube succeeds");
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.index_count(), 12);

    assert_vertex(mesh.vertex(0), DVec3::new(0.5, 0.0, 2.0));
    assert_vertex(mesh.vertex(1), DVec3::new(0.5, 0.0, -2.0));
    assert_vertex(mesh.vertex(2), DVec3::new(0.0, 0.5, 2.0));
    assert_vertex(mesh.vertex(3), DVec3::new(0.0, 0.5, -2.0));
    assert_abs_diff_eq!(vertex_angle(&mesh, 2), FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn test_zero_radius_is_degenerate_but_well_formed() {
    let mesh = generate(0.0, TAU, 0.0, 1.0, 8).expect("zero radius is allowed");
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.index_count(), 48);
    assert!(mesh.validate());
    for v in mesh.vertices() {
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
    }
}

#[test]
fn test_zero_slices_is_rejected() {
    let err = generate(0.0, TAU, 1.0, 1.0, 0).unwrap_err();
    assert!(matches!(err, MeshError::InvalidArgument { .. }));
    assert!(err.to_string().contains("slices"));
}

#[test]
fn test_huge_slice_count_is_rejected_before_allocating() {
    let err = generate(0.0, TAU, 1.0, 1.0, 2_000_000_000).unwrap_err();
    assert_eq!(
        err,
        MeshError::TooManyVertices {
            count: 4_000_000_000,
            max: config::constants::MAX_MESH_VERTICES as usize,
        }
    );
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn test_buffer_sizes() {
    for slices in 1..=64 {
        let mesh = generate(0.0, TAU, 1.0, 1.0, slices).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * slices as usize);
        assert_eq!(mesh.index_count(), 6 * slices as usize);
    }
}

#[test]
fn test_indices_in_range() {
    for slices in 1..=64 {
        let mesh = generate(0.3, 2.0, 1.5, 0.25, slices).unwrap();
        assert!(mesh.indices().all(|i| i < 2 * slices), "slices = {slices}");
    }
}

#[test]
fn test_last_slice_wraps_to_first() {
    for slices in 1..=16u32 {
        let mesh = generate(0.0, TAU, 1.0, 1.0, slices).unwrap();
        let last = &mesh.triangles()[2 * (slices as usize - 1)..];
        let referenced: Vec<u32> = last.iter().flatten().copied().collect();
        assert!(referenced.contains(&0));
        assert!(referenced.contains(&1));
        assert!(referenced.iter().all(|&i| i < 2 * slices));
    }
}

#[test]
fn test_winding_is_consistent_and_outward() {
    let mesh = generate(0.0, TAU, 1.0, 1.0, 8).unwrap();
    for slice in 0..8 {
        let n0 = mesh.triangle_normal(2 * slice);
        let n1 = mesh.triangle_normal(2 * slice + 1);
        assert!(n0.dot(n1) > 0.0, "slice {slice} triangles disagree");

        // Radial direction at the middle of the quad
        let [a, _, c] = mesh.triangles()[2 * slice];
        let mid = (mesh.vertex(a) + mesh.vertex(c)) * 0.5;
        let outward = DVec3::new(mid.x, mid.y, 0.0);
        assert!(n0.dot(outward) > 0.0, "slice {slice} faces inward");
    }
}

#[test]
fn test_reversed_range_faces_inward() {
    let mesh = generate(TAU, 0.0, 1.0, 1.0, 8).unwrap();
    for slice in 0..8 {
        let n0 = mesh.triangle_normal(2 * slice);
        let n1 = mesh.triangle_normal(2 * slice + 1);
        assert!(n0.dot(n1) > 0.0);

        let [a, _, c] = mesh.triangles()[2 * slice];
        let mid = (mesh.vertex(a) + mesh.vertex(c)) * 0.5;
        assert!(n0.dot(DVec3::new(mid.x, mid.y, 0.0)) < 0.0);
    }
}

#[test]
fn test_radius_and_height() {
    let mesh = generate(0.2, 5.0, 2.5, 0.75, 12).unwrap();
    for (i, v) in mesh.vertices().iter().enumerate() {
        assert_abs_diff_eq!(v.x.hypot(v.y), 2.5, epsilon = 1e-12);
        let expected_z = if i % 2 == 0 { 0.75 } else { -0.75 };
        assert_eq!(v.z, expected_z);
    }
}

#[test]
fn test_top_and_bottom_share_xy() {
    let mesh = generate(0.0, TAU, 1.0, 3.0, 10).unwrap();
    for pair in mesh.vertices().chunks(2) {
        assert_eq!(pair[0].x, pair[1].x);
        assert_eq!(pair[0].y, pair[1].y);
    }
}

#[test]
fn test_angles_evenly_spaced_increasing() {
    let mesh = generate(0.0, PI, 1.0, 1.0, 6).unwrap();
    for i in 0..6 {
        let expected = i as f64 * PI / 6.0;
        assert_abs_diff_eq!(vertex_angle(&mesh, 2 * i), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_angles_evenly_spaced_decreasing() {
    let mesh = generate(FRAC_PI_2, -FRAC_PI_2, 1.0, 1.0, 4).unwrap();
    for i in 0..4 {
        let expected = FRAC_PI_2 - i as f64 * PI / 4.0;
        assert_abs_diff_eq!(vertex_angle(&mesh, 2 * i), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_empty_range_collapses_slices() {
    let mesh = generate(1.0, 1.0, 1.0, 1.0, 4).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert!(mesh.validate());
    for pair in mesh.vertices().chunks(2) {
        assert_eq!(pair[0], mesh.vertex(0));
        assert_eq!(pair[1], mesh.vertex(1));
    }
}

#[test]
fn test_generate_is_deterministic() {
    let a = generate(0.1, 4.0, 1.3, 0.6, 17).unwrap();
    let b = generate(0.1, 4.0, 1.3, 0.6, 17).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_position_buffer(), b.to_position_buffer());
    assert_eq!(a.to_index_buffer_u32(), b.to_index_buffer_u32());
}

// =============================================================================
// PARAMETERS
// =============================================================================

#[test]
fn test_params_default_resolution() {
    let params = TubeParams::new(1.0, 1.0);
    assert_eq!(params.slices, MAX_SLICES);
    assert_eq!(params.range, AngularRange::full());
    assert_eq!(params.generate().unwrap().vertex_count(), 16);
}

#[test]
fn test_params_match_positional_generate() {
    let params = TubeParams::new(0.5, 2.0)
        .with_range(AngularRange::new(0.0, PI))
        .with_slices(3);
    assert_eq!(params.generate().unwrap(), generate(0.0, PI, 0.5, 2.0, 3).unwrap());
}

#[test]
fn test_derived_slice_count() {
    let config = GeneratorConfig::default();
    let params = TubeParams::derived(AngularRange::new(0.0, PI), 1.0, 1.0, &config).unwrap();
    assert_eq!(params.slices, 4);

    let fine = GeneratorConfig::new(32, 1e-9).unwrap();
    let params = TubeParams::derived(AngularRange::new(0.0, PI), 1.0, 1.0, &fine).unwrap();
    assert_eq!(params.slices, 16);

    assert!(TubeParams::derived(AngularRange::new(0.0, 0.01), 1.0, 1.0, &config).is_err());
}

#[test]
fn test_fixed_step_variant() {
    let range = AngularRange::new(0.0, PI);
    let fixed = TubeParams::new(1.0, 1.0)
        .with_range(range)
        .with_slices(5)
        .with_spacing(SliceSpacing::fixed_for(&GeneratorConfig::default()))
        .generate()
        .unwrap();
    let subdivided = TubeParams::new(1.0, 1.0)
        .with_range(range)
        .with_slices(5)
        .generate()
        .unwrap();

    // Fixed step advances an eighth of a turn regardless of the range end
    assert_abs_diff_eq!(vertex_angle(&fixed, 2), FRAC_PI_4, epsilon = 1e-12);
    assert_abs_diff_eq!(vertex_angle(&subdivided, 2), PI / 5.0, epsilon = 1e-12);
    assert_ne!(fixed, subdivided);
    assert_eq!(fixed.triangles(), subdivided.triangles());
}

#[test]
fn test_export_buffers_for_upload() {
    let mesh = generate(0.0, TAU, 1.0, 1.0, 8).unwrap();
    let positions = mesh.to_position_buffer();
    let indices = mesh.to_index_buffer_u16().unwrap();
    assert_eq!(positions.len(), 16 * 3);
    assert_eq!(indices.len(), 48);
    assert_eq!(&positions[0..3], &[1.0, 0.0, 1.0]);
    assert_eq!(&indices[42..48], &[14, 15, 1, 14, 1, 0]);
}
