//! Sphere primitive for ray tracing.

use crate::{object::Hit, Material};
use glint_math::{Ray, Vec3};

/// A sphere primitive.
///
/// The scene-construction side is responsible for supplying a positive
/// radius; the intersection routine assumes a well-formed sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Intersect a ray with this sphere.
    ///
    /// On a hit, fills in the hit position and the outward unit normal.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let t = intersect_ray_sphere(ray.origin, ray.direction, self.center, self.radius)?;
        let position = ray.at(t);
        let normal = (position - self.center).normalize();

        Some(Hit {
            t,
            position,
            normal,
        })
    }
}

/// Closed-form ray-sphere intersection.
///
/// Returns the smallest non-negative ray parameter of the intersection, or
/// `None` on a miss. If the ray origin is inside the sphere the parameter is
/// clamped to zero, reporting the origin itself rather than the exit point.
///
/// `direction` need not be unit length; the returned parameter is a distance
/// only when it is.
pub fn intersect_ray_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let m = origin - center;
    let a = direction.length_squared();
    let b = m.dot(direction);
    let c = m.dot(m) - radius * radius;

    // Origin outside the sphere and pointing away: cheap rejection.
    if c > 0.0 && b > 0.0 {
        return None;
    }

    let discriminant = b * b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    Some(((-b - discriminant.sqrt()) / a).max(0.0))
}
