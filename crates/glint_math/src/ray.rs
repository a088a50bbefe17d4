use crate::Vec3;

/// A parametric ray in 3D space.
///
/// Represents the line `origin + t * direction` for `t >= 0`. Primary rays
/// built by the camera have unit-length directions; intersection routines
/// tolerate non-unit directions, in which case `t` is a ray parameter rather
/// than a Euclidean distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
