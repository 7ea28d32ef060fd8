//! Centralized configuration values shared across the revolved mesh crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::f64::consts::TAU;
use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when comparing generated coordinates.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-10;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Number of slices a full revolution is divided into when the slice count
/// is derived from an angular range instead of being given explicitly.
///
/// # Examples
/// ```
/// use config::constants::MAX_SLICES;
/// let step = std::f64::consts::TAU / MAX_SLICES as f64;
/// assert!((step - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// ```
pub const MAX_SLICES: u32 = 8;

// =============================================================================
// BUFFER LAYOUT CONSTANTS
// =============================================================================

/// Number of `f32` components per vertex in an exported position buffer.
pub const COORDS_PER_VERTEX: usize = 3;

/// Number of vertices addressable by a 16-bit index buffer.
///
/// # Examples
/// ```
/// use config::constants::MAX_U16_VERTICES;
/// assert_eq!(MAX_U16_VERTICES - 1, u16::MAX as usize);
/// ```
pub const MAX_U16_VERTICES: usize = 1 << 16;

/// Largest vertex count a single generated mesh may have.
///
/// Generators refuse larger slice counts with an error before allocating,
/// instead of aborting on an allocation of several gigabytes.
///
/// # Examples
/// ```
/// use config::constants::{MAX_MESH_VERTICES, MAX_U16_VERTICES};
/// assert!(MAX_MESH_VERTICES > MAX_U16_VERTICES as u64);
/// assert!(MAX_MESH_VERTICES <= u32::MAX as u64);
/// ```
pub const MAX_MESH_VERTICES: u64 = 1 << 24;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default flat color when none is specified (light gray).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Immutable snapshot of generator settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Slices per full revolution used to derive slice counts from ranges.
    pub max_slices: u32,
    /// Numeric tolerance propagated into geometry checks.
    pub tolerance: f64,
}

impl GeneratorConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// resolution and tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(16, 1.0e-6).expect("valid config");
    /// assert_eq!(cfg.max_slices, 16);
    /// ```
    pub fn new(max_slices: u32, tolerance: f64) -> Result<Self, ConfigError> {
        if max_slices == 0 {
            return Err(ConfigError::InvalidMaxSlices(max_slices));
        }
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            max_slices,
            tolerance,
        })
    }

    /// Angle covered by one slice of a full revolution, in radians.
    pub fn slice_angle(&self) -> f64 {
        TAU / self.max_slices as f64
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_slices: MAX_SLICES,
            tolerance: EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when a full revolution would contain no slices.
    #[error("max_slices must be >= 1: {0}")]
    InvalidMaxSlices(u32),
    /// Raised when tolerance is zero, negative or NaN.
    #[error("tolerance must be positive: {0}")]
    InvalidTolerance(f64),
}
