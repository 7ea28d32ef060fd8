//! # Angular Parameters
//!
//! The angular range a revolved surface sweeps, how many slices subdivide
//! it, and how the per-slice angle is computed.

use crate::error::{MeshError, MeshResult};
use config::constants::{GeneratorConfig, EPSILON};
use log::warn;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Angular sweep in radians.
///
/// `end > start` is the expected orientation, but it is not enforced: a
/// reversed range sweeps clockwise and a zero-width range collapses every
/// slice onto one angle. Ranges wider than a full turn are kept as given
/// (no wrap normalization).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularRange {
    /// First angle, radians.
    pub start: f64,
    /// Last angle, radians.
    pub end: f64,
}

impl AngularRange {
    /// Creates a range from `start` to `end`.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// A full counter-clockwise revolution starting at angle 0.
    pub fn full() -> Self {
        Self::new(0.0, TAU)
    }

    /// Signed width of the range.
    #[inline]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// The same sweep traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Derives the slice count for this range at a resolution of
    /// `max_slices` slices per full revolution:
    /// `round(span / (2π / max_slices))`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidArgument`] when `max_slices` is zero or
    /// the range rounds to fewer than one slice.
    ///
    /// # Example
    ///
    /// ```rust
    /// use revolve_mesh::AngularRange;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(AngularRange::new(0.0, PI).derive_slices(8).unwrap(), 4);
    /// assert!(AngularRange::new(0.0, 0.1).derive_slices(8).is_err());
    /// ```
    pub fn derive_slices(&self, max_slices: u32) -> MeshResult<u32> {
        self.derive_slices_within(max_slices, EPSILON)
    }

    /// Derives the slice count using a shared generator configuration. The
    /// configuration's tolerance decides when a range counts as a whole
    /// number of slices.
    pub fn derive_slices_with(&self, config: &GeneratorConfig) -> MeshResult<u32> {
        self.derive_slices_within(config.max_slices, config.tolerance)
    }

    fn derive_slices_within(&self, max_slices: u32, tolerance: f64) -> MeshResult<u32> {
        if max_slices == 0 {
            return Err(MeshError::invalid_argument(
                "max_slices must be >= 1 to derive a slice count",
            ));
        }

        let step = TAU / max_slices as f64;
        let raw = (self.span() / step).round();
        if !(1.0..=u32::MAX as f64).contains(&raw) {
            return Err(MeshError::invalid_argument(format!(
                "range [{}, {}] yields {} slices at {} slices per turn",
                self.start, self.end, raw, max_slices
            )));
        }

        let slices = raw as u32;
        if (slices as f64 * step - self.span()).abs() > tolerance {
            warn!(
                "range [{}, {}] is not a whole number of {}-per-turn slices; using {}",
                self.start, self.end, max_slices, slices
            );
        }
        Ok(slices)
    }
}

impl Default for AngularRange {
    fn default() -> Self {
        Self::full()
    }
}

/// How the angle of each slice is computed.
///
/// A mesh is always generated with exactly one spacing rule; the two are
/// never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SliceSpacing {
    /// Uniform subdivision of the given range:
    /// `θᵢ = start + i · (end - start) / slices`.
    #[default]
    Subdivide,
    /// A step that does not depend on the range:
    /// `θᵢ = start + i · step`. With `step = 2π / MAX_SLICES` the slice
    /// count only truncates how many steps of a full circle are taken, and
    /// `end` is ignored.
    FixedStep {
        /// Signed angle between consecutive slices, radians.
        step: f64,
    },
}

impl SliceSpacing {
    /// Fixed-step spacing of one slice of a `max_slices` revolution.
    pub fn fixed_for(config: &GeneratorConfig) -> Self {
        Self::FixedStep {
            step: config.slice_angle(),
        }
    }

    /// Angle between consecutive slices.
    #[inline]
    pub fn step(&self, range: AngularRange, slices: u32) -> f64 {
        match *self {
            Self::Subdivide => range.span() / slices as f64,
            Self::FixedStep { step } => step,
        }
    }

    /// Angle of slice `index`.
    #[inline]
    pub fn angle(&self, range: AngularRange, slices: u32, index: u32) -> f64 {
        match *self {
            Self::Subdivide => range.start + index as f64 * range.span() / slices as f64,
            Self::FixedStep { step } => range.start + index as f64 * step,
        }
    }

    /// The range `slices` slices actually sweep: `range` itself when
    /// subdividing, `start..start + slices · step` for a fixed step.
    pub fn swept_range(&self, range: AngularRange, slices: u32) -> AngularRange {
        match *self {
            Self::Subdivide => range,
            Self::FixedStep { step } => {
                AngularRange::new(range.start, range.start + slices as f64 * step)
            }
        }
    }

    /// The range and spacing that visit the same `slices` angles as
    /// `range`, last slice first.
    ///
    /// The result is always a fixed step of `-step`, starting at the angle
    /// of slice `slices - 1`, so slice `i` of the walk sits on slice
    /// `slices - 1 - i` of the forward sweep.
    ///
    /// # Example
    ///
    /// ```rust
    /// use revolve_mesh::{AngularRange, SliceSpacing};
    /// use std::f64::consts::PI;
    ///
    /// let range = AngularRange::new(0.0, PI);
    /// let (back, spacing) = SliceSpacing::Subdivide.walk_back(range, 4);
    /// assert!((spacing.angle(back, 4, 0) - 3.0 * PI / 4.0).abs() < 1e-12);
    /// assert!(spacing.angle(back, 4, 3).abs() < 1e-12);
    /// ```
    pub fn walk_back(&self, range: AngularRange, slices: u32) -> (AngularRange, SliceSpacing) {
        let step = self.step(range, slices);
        let last = self.angle(range, slices, slices.saturating_sub(1));
        (
            AngularRange::new(last, range.start),
            Self::FixedStep { step: -step },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_full_range() {
        let range = AngularRange::full();
        assert_eq!(range.start, 0.0);
        assert_abs_diff_eq!(range.span(), TAU);
        assert_eq!(AngularRange::default(), range);
    }

    #[test]
    fn test_reversed_range_has_negative_span() {
        let range = AngularRange::new(0.0, PI).reversed();
        assert_eq!(range.start, PI);
        assert_abs_diff_eq!(range.span(), -PI);
    }

    #[test]
    fn test_derive_slices_full_turn() {
        assert_eq!(AngularRange::full().derive_slices(8).unwrap(), 8);
        assert_eq!(AngularRange::full().derive_slices(32).unwrap(), 32);
    }

    #[test]
    fn test_derive_slices_rounds() {
        // 0.6 of a slice rounds up, 0.4 of a slice rounds down
        let step = TAU / 8.0;
        assert_eq!(AngularRange::new(0.0, 2.6 * step).derive_slices(8).unwrap(), 3);
        assert_eq!(AngularRange::new(0.0, 2.4 * step).derive_slices(8).unwrap(), 2);
    }

    #[test]
    fn test_derive_slices_with_config() {
        let config = GeneratorConfig::default();
        let range = AngularRange::new(0.0, FRAC_PI_2);
        assert_eq!(range.derive_slices_with(&config).unwrap(), 2);
    }

    #[test]
    fn test_derive_slices_rejects_zero() {
        let err = AngularRange::new(0.0, 0.1).derive_slices(8).unwrap_err();
        assert!(matches!(err, MeshError::InvalidArgument { .. }));

        assert!(AngularRange::new(1.0, 1.0).derive_slices(8).is_err());
        assert!(AngularRange::full().reversed().derive_slices(8).is_err());
        assert!(AngularRange::full().derive_slices(0).is_err());
        assert!(AngularRange::new(0.0, f64::NAN).derive_slices(8).is_err());
    }

    #[test]
    fn test_subdivide_spacing() {
        let range = AngularRange::new(0.0, PI);
        let spacing = SliceSpacing::Subdivide;
        assert_abs_diff_eq!(spacing.step(range, 2), FRAC_PI_2);
        assert_abs_diff_eq!(spacing.angle(range, 2, 1), FRAC_PI_2);
    }

    #[test]
    fn test_fixed_step_ignores_range_end() {
        let range = AngularRange::new(0.0, PI);
        let spacing = SliceSpacing::fixed_for(&GeneratorConfig::default());
        assert_abs_diff_eq!(spacing.step(range, 2), FRAC_PI_4);
        assert_abs_diff_eq!(spacing.angle(range, 2, 1), FRAC_PI_4);
        assert_abs_diff_eq!(spacing.angle(range, 100, 6), 6.0 * FRAC_PI_4);
    }

    #[test]
    fn test_swept_range() {
        let range = AngularRange::new(0.5, PI);
        assert_eq!(SliceSpacing::Subdivide.swept_range(range, 3), range);

        let fixed = SliceSpacing::FixedStep { step: FRAC_PI_4 };
        let swept = fixed.swept_range(range, 5);
        assert_eq!(swept.start, 0.5);
        assert_abs_diff_eq!(swept.end, 0.5 + 5.0 * FRAC_PI_4);
    }

    #[test]
    fn test_walk_back_visits_forward_angles() {
        let range = AngularRange::new(0.25, PI);
        for spacing in [SliceSpacing::Subdivide, SliceSpacing::FixedStep { step: FRAC_PI_4 }] {
            let (back, back_spacing) = spacing.walk_back(range, 5);
            for i in 0..5 {
                assert_abs_diff_eq!(
                    back_spacing.angle(back, 5, i),
                    spacing.angle(range, 5, 4 - i),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_walk_back_single_slice() {
        let range = AngularRange::new(1.0, 2.0);
        let (back, spacing) = SliceSpacing::Subdivide.walk_back(range, 1);
        assert_eq!(spacing.angle(back, 1, 0), 1.0);
    }
}
