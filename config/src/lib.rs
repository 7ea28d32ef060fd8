//! # Config Crate
//!
//! Centralized configuration constants for revolved mesh generation.
//! Every tunable number the generators and shape builders rely on is
//! defined here, so sibling crates never share mutable statics.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GeneratorConfig, MAX_SLICES};
//!
//! let cfg = GeneratorConfig::default();
//! assert_eq!(cfg.max_slices, MAX_SLICES);
//!
//! // A full revolution at the default resolution covers MAX_SLICES slices.
//! let step = cfg.slice_angle();
//! assert!((step * MAX_SLICES as f64 - std::f64::consts::TAU).abs() < 1e-12);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit Parameters**: Configuration is passed by value, never read from globals
//! - **Validated**: Runtime configuration is checked when it is built

pub mod constants;
