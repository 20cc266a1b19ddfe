//! Tests for the normals configuration snapshot.

use super::*;

/// Ensures the default configuration is usable.
///
/// # Examples
/// ```
/// use config::constants::NormalsConfig;
/// let cfg = NormalsConfig::default();
/// assert!(cfg.smoothing_threshold_cos <= 1.0);
/// ```
#[test]
fn default_config_is_valid() {
    let cfg = NormalsConfig::default();
    assert!((-1.0..=1.0).contains(&cfg.smoothing_threshold_cos));
    assert_eq!(cfg.parallel_threshold, PARALLEL_FACE_THRESHOLD);
}

/// Validates the constructor rejects thresholds outside the cosine range.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        NormalsConfig::new(1.5, 16).unwrap_err(),
        ConfigError::InvalidThreshold(1.5)
    );
    assert_eq!(
        NormalsConfig::new(-1.01, 16).unwrap_err(),
        ConfigError::InvalidThreshold(-1.01)
    );
    assert!(NormalsConfig::new(f64::NAN, 16).is_err());
    assert!(NormalsConfig::new(-1.0, 16).is_ok());
    assert!(NormalsConfig::new(1.0, 16).is_ok());
}

#[test]
fn crease_angle_round_trips_through_cosine() {
    let cfg = NormalsConfig::from_crease_angle_degrees(45.0).unwrap();
    assert!((cfg.crease_angle_degrees() - 45.0).abs() < 1e-9);
    assert!((cfg.smoothing_threshold_cos - 0.5_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn crease_angle_out_of_range_is_rejected() {
    assert_eq!(
        NormalsConfig::from_crease_angle_degrees(-5.0).unwrap_err(),
        ConfigError::InvalidCreaseAngle(-5.0)
    );
    assert!(NormalsConfig::from_crease_angle_degrees(181.0).is_err());
}

#[test]
fn sequential_never_runs_parallel() {
    let cfg = NormalsConfig::sequential();
    assert!(!cfg.runs_parallel(1_000_000));
    assert_eq!(cfg.smoothing_threshold_cos, SMOOTHING_THRESHOLD_COS);
}

#[test]
fn runs_parallel_at_threshold() {
    let cfg = NormalsConfig::default().with_parallel_threshold(10);
    assert!(!cfg.runs_parallel(9));
    assert!(cfg.runs_parallel(10));
}

#[test]
fn error_messages_name_the_value() {
    let message = ConfigError::InvalidThreshold(2.0).to_string();
    assert!(message.contains("[-1, 1]"));
    assert!(message.contains('2'));
}
