//! Flat RGBA colors.

use config::constants::DEFAULT_COLOR;
use serde::{Deserialize, Serialize};

/// A flat RGBA color, components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Opaque red.
    pub const RED: Self = Self([1.0, 0.0, 0.0, 1.0]);
    /// Opaque yellow.
    pub const YELLOW: Self = Self([1.0, 1.0, 0.0, 1.0]);

    /// Creates a color from its components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    /// The components as an array, ready for a uniform upload.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(DEFAULT_COLOR)
    }
}

impl From<[f32; 4]> for Color {
    fn from(value: [f32; 4]) -> Self {
        Self(value)
    }
}
