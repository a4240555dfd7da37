//! End-to-end tests for the 1D LUT pipeline: finalize, composition,
//! and inversion working together.

use lutra_core::BitDepth;
use lutra_ops::lut1d::{
    compose, make_fast_lut1d_from_inverse, ComposeMethod, HalfFlags, InversionQuality, Lut1D,
    TransformDirection,
};
use lutra_ops::{eval_transform, Op, OpVec};

const EPSILON: f32 = 1e-5;

/// A smooth monotonic curve resembling a log shaper.
fn shaper(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / (size - 1) as f32;
            (1.0 + 15.0 * t).ln() / 16.0_f32.ln()
        })
        .collect()
}

#[test]
fn finalized_luts_have_distinct_cache_ids() {
    let mut identity = Lut1D::new(1024).unwrap();
    identity.finalize().unwrap();

    let mut curve = Lut1D::from_values(1024, 1, &shaper(1024)).unwrap();
    curve.finalize().unwrap();

    assert_ne!(identity.cache_id(), curve.cache_id());

    // Same content hashed twice is stable.
    let mut again = Lut1D::from_values(1024, 1, &shaper(1024)).unwrap();
    again.finalize().unwrap();
    assert_eq!(curve.cache_id(), again.cache_id());
}

#[test]
fn compose_with_equal_identity_returns_b() {
    let mut a = Lut1D::new(16).unwrap();
    let b = Lut1D::new(16).unwrap();

    compose(&mut a, &b, ComposeMethod::ResampleNo).unwrap();

    assert_eq!(a.length(), b.length());
    for (x, y) in a.values().iter().zip(b.values()) {
        assert!((x - y).abs() < EPSILON);
    }
}

#[test]
fn resample_big_builds_fine_identity() {
    let mut a = Lut1D::new(4).unwrap();
    let b = Lut1D::new(1024).unwrap();

    compose(&mut a, &b, ComposeMethod::ResampleBig).unwrap();

    assert_eq!(a.length(), 65536);
    assert!(a.is_identity());
    assert!(!a.is_no_op()); // standard domain still quantizes
}

#[test]
fn forward_then_exact_inverse_is_identity() {
    let size = 2048;
    let forward = Lut1D::from_values(size, 1, &shaper(size)).unwrap();

    let mut inverse = forward.inverse();
    inverse.set_inversion_quality(InversionQuality::Exact);
    inverse.finalize().unwrap();

    let mut pixels: Vec<f32> = (0..300).map(|i| i as f32 / 299.0).collect();
    let originals = pixels.clone();

    forward.apply(&mut pixels);
    inverse.apply(&mut pixels);

    for (got, want) in pixels.iter().zip(&originals) {
        assert!((got - want).abs() < 1e-3, "round trip {want} -> {got}");
    }
}

#[test]
fn fast_inverse_of_extended_range_lut_is_half_domain() {
    // A shaper scaled beyond [0,1] forces the half-domain fast LUT.
    let mut inv = Lut1D::from_values(1024, 1, &shaper(1024)).unwrap();
    inv.scale(4.0);
    inv.set_direction(TransformDirection::Inverse);
    inv.finalize().unwrap();

    let fast = make_fast_lut1d_from_inverse(&inv, false).unwrap();

    assert!(fast.half_flags().is_input_half_domain());
    assert_eq!(fast.length(), 65536);
    assert_eq!(fast.direction(), TransformDirection::Forward);
}

#[test]
fn fast_inverse_round_trips_through_forward() {
    let size = 4096;
    let forward = Lut1D::from_values(size, 1, &shaper(size)).unwrap();

    let mut inverse = forward.inverse();
    inverse.set_file_output_bit_depth(BitDepth::U12);
    inverse.finalize().unwrap();
    let fast = make_fast_lut1d_from_inverse(&inverse, false).unwrap();

    for v in [0.02_f32, 0.18, 0.35, 0.62, 0.97] {
        let mut px = [v; 3];
        forward.apply(&mut px);
        fast.apply(&mut px);
        assert!((px[0] - v).abs() < 2e-3, "round trip {v} -> {}", px[0]);
    }
}

#[test]
fn identity_replacements_match_lut_behavior() {
    // Standard identity: residual [0,1] clamp.
    let std_lut = Lut1D::new(1024).unwrap();
    let replacement = std_lut.identity_replacement();

    for v in [-0.5_f32, 0.0, 0.25, 1.0, 1.5] {
        let mut via_lut = [v; 3];
        std_lut.apply(&mut via_lut);
        let mut via_rep = [v; 3];
        replacement.apply(&mut via_rep);
        assert!((via_lut[0] - via_rep[0]).abs() < EPSILON);
    }

    // Half-domain identity: everything passes through.
    let half_lut = Lut1D::with_half_flags(HalfFlags::INPUT_HALF, 65536).unwrap();
    let replacement = half_lut.identity_replacement();
    let mut px = [-4.5_f32, 0.25, 1000.0];
    replacement.apply(&mut px);
    assert_eq!(px, [-4.5, 0.25, 1000.0]);
}

#[test]
fn mixed_chain_evaluates_in_order() {
    let curve = Lut1D::from_values(1024, 1, &shaper(1024)).unwrap();
    let clamp = Lut1D::new(1024).unwrap().identity_replacement();

    let ops: OpVec = vec![Box::new(curve), clamp];

    let mut pixels = [0.18_f32, 0.5, 2.0];
    eval_transform(&mut pixels, &ops);

    // The shaper maps [0,1] into [0,1]; the trailing clamp only matters
    // for the out-of-range input.
    assert!(pixels[0] > 0.0 && pixels[0] < 1.0);
    assert!((pixels[2] - 1.0).abs() < EPSILON);
}

#[test]
fn compose_vec_applies_whole_chain() {
    let mut a = Lut1D::new(256).unwrap();
    let b = Lut1D::from_values(256, 1, &shaper(256)).unwrap();
    let ops: OpVec = vec![Box::new(b.clone())];

    lutra_ops::lut1d::compose_vec(&mut a, &ops).unwrap();

    for row in 0..256 {
        assert!((a.values()[row * 3] - b.values()[row * 3]).abs() < 1e-4);
    }
}
