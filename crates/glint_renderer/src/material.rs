//! Surface shading attributes.

use glint_math::Vec3;

/// Color type alias (linear RGB, components typically 0-1)
pub type Color = Vec3;

/// Shading attributes shared by every object kind.
///
/// The diffuse response and the reflectivity weight are combined without an
/// energy-conservation check, so a strongly lit mirror can exceed 1.0 per
/// channel. Display clamping is left to the presentation side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse surface color, modulates ambient and direct light.
    pub diffuse_color: Color,
    /// Weight of the mirror-reflected contribution, in [0, 1].
    pub reflectivity: f32,
}

impl Material {
    /// Create a new material. `reflectivity` is clamped to [0, 1].
    pub fn new(diffuse_color: Color, reflectivity: f32) -> Self {
        Self {
            diffuse_color,
            reflectivity: reflectivity.clamp(0.0, 1.0),
        }
    }

    /// A purely diffuse material (no reflection).
    pub fn diffuse(diffuse_color: Color) -> Self {
        Self::new(diffuse_color, 0.0)
    }
}
