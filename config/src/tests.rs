//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(1e-9));
}

// =============================================================================
// SMOOTHING TESTS
// =============================================================================

#[test]
fn test_threshold_is_cos_30_degrees() {
    let expected = DEFAULT_CREASE_ANGLE_DEGREES.to_radians().cos();
    assert!((SMOOTHING_THRESHOLD_COS - expected).abs() < 1e-15);
    assert!((SMOOTHING_THRESHOLD_COS - 3.0_f64.sqrt() / 2.0).abs() < 1e-15);
}

#[test]
fn test_right_angle_is_a_crease() {
    // cos 90° = 0 must fall below the default threshold
    assert!(0.0 < SMOOTHING_THRESHOLD_COS);
    // coplanar faces (cos 0° = 1) must pass
    assert!(1.0 >= SMOOTHING_THRESHOLD_COS);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_faces_fits_u32() {
    assert!(MAX_FACES <= u32::MAX as usize);
}

#[test]
fn test_parallel_threshold_is_positive() {
    assert!(PARALLEL_FACE_THRESHOLD > 0);
}
