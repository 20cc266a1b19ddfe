//! # Config Crate
//!
//! Centralized configuration constants for mesh normal computation.
//! The crease threshold, numerical tolerances and the parallelism cut-over
//! are defined here so the geometry crates never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{NormalsConfig, EPSILON, SMOOTHING_THRESHOLD_COS};
//!
//! // Use EPSILON to decide whether a normal has a defined direction
//! let length: f64 = 1e-12;
//! assert!(length < EPSILON);
//!
//! // The default configuration smooths across edges of up to 30 degrees
//! let config = NormalsConfig::default();
//! assert_eq!(config.smoothing_threshold_cos, SMOOTHING_THRESHOLD_COS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `NormalsConfig` can only hold usable values
//! - **No Dependencies**: Pure Rust, no external crates

pub mod constants;

#[cfg(test)]
mod tests;
