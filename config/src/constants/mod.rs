//! # Configuration Constants
//!
//! Centralized constants for mesh normal computation. Each public item
//! documents its purpose and provides a minimal usage example so that the
//! geometry crates can stay declarative and avoid scattering literals.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point tolerances
//! - **Smoothing**: Crease threshold for per-corner normals
//! - **Limits**: Index-width and parallelism bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// A normal or triangle area whose magnitude falls below this value is
/// treated as having no defined direction.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn has_direction(length: f64) -> bool {
///     length >= EPSILON
/// }
///
/// assert!(!has_direction(1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// SMOOTHING CONSTANTS
// =============================================================================

/// Default crease angle in degrees.
///
/// Adjacent triangles whose normals differ by at most this angle are blended
/// into the same smoothing group.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CREASE_ANGLE_DEGREES;
/// assert_eq!(DEFAULT_CREASE_ANGLE_DEGREES, 30.0);
/// ```
pub const DEFAULT_CREASE_ANGLE_DEGREES: f64 = 30.0;

/// Cosine of the default crease angle (cos 30° = √3⁄2).
///
/// An edge is smooth when the dot product of the two face normals is greater
/// than or equal to this value.
///
/// # Example
///
/// ```rust
/// use config::constants::SMOOTHING_THRESHOLD_COS;
///
/// let expected = 3.0_f64.sqrt() / 2.0;
/// assert!((SMOOTHING_THRESHOLD_COS - expected).abs() < 1e-15);
/// ```
pub const SMOOTHING_THRESHOLD_COS: f64 = 0.866_025_403_784_438_6;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of faces a mesh may hold.
///
/// Face and vertex indices are stored as `u32`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_FACES;
/// assert_eq!(MAX_FACES, u32::MAX as usize);
/// ```
pub const MAX_FACES: usize = u32::MAX as usize;

/// Element count at which per-face and per-vertex passes switch to rayon.
///
/// Below this count the thread-pool overhead outweighs the work.
///
/// # Example
///
/// ```rust
/// use config::constants::PARALLEL_FACE_THRESHOLD;
///
/// let face_count = 100;
/// assert!(face_count < PARALLEL_FACE_THRESHOLD);
/// ```
pub const PARALLEL_FACE_THRESHOLD: usize = 4096;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// NORMALS CONFIGURATION
// =============================================================================

/// Immutable snapshot of the settings used by the normal computations.
///
/// # Examples
/// ```
/// use config::constants::NormalsConfig;
/// let config = NormalsConfig::default();
/// assert!((config.crease_angle_degrees() - 30.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalsConfig {
    /// Minimum dot product between two adjacent face normals for the shared
    /// edge to be smoothed over. Always within `[-1, 1]`.
    pub smoothing_threshold_cos: f64,
    /// Element count at which the parallel code paths are taken.
    pub parallel_threshold: usize,
}

impl NormalsConfig {
    /// Builds a configuration, rejecting thresholds outside `[-1, 1]`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::NormalsConfig;
    /// let cfg = NormalsConfig::new(0.5, 1024).expect("valid config");
    /// assert_eq!(cfg.parallel_threshold, 1024);
    /// assert!(NormalsConfig::new(1.5, 1024).is_err());
    /// ```
    pub fn new(
        smoothing_threshold_cos: f64,
        parallel_threshold: usize,
    ) -> Result<Self, ConfigError> {
        if !(-1.0..=1.0).contains(&smoothing_threshold_cos) {
            return Err(ConfigError::InvalidThreshold(smoothing_threshold_cos));
        }
        Ok(Self {
            smoothing_threshold_cos,
            parallel_threshold,
        })
    }

    /// Builds a configuration from a crease angle in degrees (`0..=180`).
    ///
    /// # Examples
    /// ```
    /// use config::constants::NormalsConfig;
    /// let cfg = NormalsConfig::from_crease_angle_degrees(90.0).expect("valid angle");
    /// assert!(cfg.smoothing_threshold_cos.abs() < 1e-12);
    /// ```
    pub fn from_crease_angle_degrees(degrees: f64) -> Result<Self, ConfigError> {
        if !(0.0..=180.0).contains(&degrees) {
            return Err(ConfigError::InvalidCreaseAngle(degrees));
        }
        let cosine = degrees.to_radians().cos().clamp(-1.0, 1.0);
        Self::new(cosine, PARALLEL_FACE_THRESHOLD)
    }

    /// Default configuration that never takes the parallel code paths.
    ///
    /// # Examples
    /// ```
    /// use config::constants::NormalsConfig;
    /// assert_eq!(NormalsConfig::sequential().parallel_threshold, usize::MAX);
    /// ```
    pub fn sequential() -> Self {
        Self::default().with_parallel_threshold(usize::MAX)
    }

    /// Returns a copy with a different parallelism cut-over.
    pub fn with_parallel_threshold(self, parallel_threshold: usize) -> Self {
        Self {
            parallel_threshold,
            ..self
        }
    }

    /// Crease angle in degrees corresponding to the threshold cosine.
    pub fn crease_angle_degrees(&self) -> f64 {
        self.smoothing_threshold_cos.acos().to_degrees()
    }

    /// Whether a pass over `count` elements should run on the rayon pool.
    #[inline]
    pub fn runs_parallel(&self, count: usize) -> bool {
        count >= self.parallel_threshold
    }
}

impl Default for NormalsConfig {
    fn default() -> Self {
        Self {
            smoothing_threshold_cos: SMOOTHING_THRESHOLD_COS,
            parallel_threshold: PARALLEL_FACE_THRESHOLD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the threshold cosine is outside `[-1, 1]` or NaN.
    InvalidThreshold(f64),
    /// Raised when the crease angle is outside `[0, 180]` degrees or NaN.
    InvalidCreaseAngle(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold(value) => {
                write!(f, "smoothing threshold cosine must be within [-1, 1]: {value}")
            }
            ConfigError::InvalidCreaseAngle(value) => {
                write!(f, "crease angle must be within [0, 180] degrees: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
