//! Infinite plane primitive.

use crate::{object::Hit, Material};
use glint_math::{Ray, Vec3};

/// An infinite plane, defined by a point on the plane and its unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

impl Plane {
    /// Create a new plane. `normal` must be unit length.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal,
            material,
        }
    }

    /// Intersect a ray with this plane.
    ///
    /// Rays parallel to the plane and intersections behind the origin are
    /// misses. The reported normal faces the incoming ray so that shading
    /// works from either side.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let denominator = self.normal.dot(ray.direction);
        if denominator.abs() < 1e-6 {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denominator;
        if t < 0.0 {
            return None;
        }

        let normal = if denominator < 0.0 {
            self.normal
        } else {
            -self.normal
        };

        Some(Hit {
            t,
            position: ray.at(t),
            normal,
        })
    }
}
