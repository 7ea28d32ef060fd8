//! # Shape Nodes
//!
//! Plain-data descriptions of the composite shapes. All values are explicit:
//! there is no shared radius, height or slice count between shapes.

use config::constants::MAX_SLICES;
use revolve_mesh::{AngularRange, Facing, SliceSpacing};
use serde::{Deserialize, Serialize};

fn default_slices() -> u32 {
    MAX_SLICES
}

fn default_capped() -> bool {
    true
}

/// A composite revolved shape.
///
/// Omitted `range`, `slices`, `spacing` and `facing` fields deserialize to
/// a full revolution, [`MAX_SLICES`] slices, uniform subdivision and
/// [`Facing::Up`].
///
/// ## JSON
///
/// ```text
/// { "type": "pipe", "inner_radius": 0.7, "outer_radius": 0.9, "half_height": 1.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeNode {
    /// Open tube without caps.
    Tube {
        /// Angular sweep.
        #[serde(default)]
        range: AngularRange,
        /// Wall radius.
        radius: f64,
        /// Half of the wall height.
        half_height: f64,
        /// Slice count.
        #[serde(default = "default_slices")]
        slices: u32,
        /// Slice spacing rule.
        #[serde(default)]
        spacing: SliceSpacing,
    },

    /// Flat annulus.
    Ring {
        /// Angular sweep.
        #[serde(default)]
        range: AngularRange,
        /// Radius of the hole.
        inner_radius: f64,
        /// Radius of the rim.
        outer_radius: f64,
        /// Height of the ring plane.
        z: f64,
        /// Slice count.
        #[serde(default = "default_slices")]
        slices: u32,
        /// Side the ring faces.
        #[serde(default)]
        facing: Facing,
    },

    /// Flat circular cap.
    Disc {
        /// Angular sweep.
        #[serde(default)]
        range: AngularRange,
        /// Rim radius.
        radius: f64,
        /// Height of the disc plane.
        z: f64,
        /// Slice count.
        #[serde(default = "default_slices")]
        slices: u32,
        /// Side the disc faces.
        #[serde(default)]
        facing: Facing,
    },

    /// Tube closed by an upward disc on top and a downward disc below.
    CappedCylinder {
        /// Angular sweep.
        #[serde(default)]
        range: AngularRange,
        /// Wall and cap radius.
        radius: f64,
        /// Half of the wall height.
        half_height: f64,
        /// Slice count shared by wall and caps.
        #[serde(default = "default_slices")]
        slices: u32,
    },

    /// Double-walled cylinder: an outer tube facing away from the axis, an
    /// inner tube facing towards it and, when `capped`, annular caps.
    Pipe {
        /// Angular sweep of the outer wall.
        #[serde(default)]
        range: AngularRange,
        /// Radius of the inner wall.
        inner_radius: f64,
        /// Radius of the outer wall.
        outer_radius: f64,
        /// Half of the wall height.
        half_height: f64,
        /// Slice count shared by every part.
        #[serde(default = "default_slices")]
        slices: u32,
        /// Slice spacing rule shared by both walls.
        #[serde(default)]
        spacing: SliceSpacing,
        /// Whether to close the top and bottom with rings.
        #[serde(default = "default_capped")]
        capped: bool,
    },
}

impl ShapeNode {
    /// Full-revolution open tube at the default resolution.
    pub fn tube(radius: f64, half_height: f64) -> Self {
        Self::Tube {
            range: AngularRange::full(),
            radius,
            half_height,
            slices: MAX_SLICES,
            spacing: SliceSpacing::Subdivide,
        }
    }

    /// Full-revolution upward ring at the default resolution.
    pub fn ring(inner_radius: f64, outer_radius: f64, z: f64) -> Self {
        Self::Ring {
            range: AngularRange::full(),
            inner_radius,
            outer_radius,
            z,
            slices: MAX_SLICES,
            facing: Facing::Up,
        }
    }

    /// Full-revolution upward disc at the default resolution.
    pub fn disc(radius: f64, z: f64) -> Self {
        Self::Disc {
            range: AngularRange::full(),
            radius,
            z,
            slices: MAX_SLICES,
            facing: Facing::Up,
        }
    }

    /// Full-revolution capped cylinder at the default resolution.
    pub fn capped_cylinder(radius: f64, half_height: f64) -> Self {
        Self::CappedCylinder {
            range: AngularRange::full(),
            radius,
            half_height,
            slices: MAX_SLICES,
        }
    }

    /// Full-revolution capped pipe at the default resolution.
    pub fn pipe(inner_radius: f64, outer_radius: f64, half_height: f64) -> Self {
        Self::Pipe {
            range: AngularRange::full(),
            inner_radius,
            outer_radius,
            half_height,
            slices: MAX_SLICES,
            spacing: SliceSpacing::Subdivide,
            capped: true,
        }
    }

    /// Short name of the shape kind, as used in serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tube { .. } => "tube",
            Self::Ring { .. } => "ring",
            Self::Disc { .. } => "disc",
            Self::CappedCylinder { .. } => "capped_cylinder",
            Self::Pipe { .. } => "pipe",
        }
    }
}
