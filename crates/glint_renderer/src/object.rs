//! Intersectable scene objects.

use crate::{Material, Plane, Sphere};
use glint_math::{Ray, Vec3};

/// Result of intersecting a ray with a single object.
///
/// `position` and `normal` are always populated; a miss is represented by
/// the absence of a `Hit` rather than a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter at the intersection (a distance when the ray direction
    /// is unit length).
    pub t: f32,
    /// Point of intersection.
    pub position: Vec3,
    /// Unit surface normal at the intersection.
    pub normal: Vec3,
}

/// An object that can be intersected by rays.
///
/// A closed set of kinds dispatched by match; each kind carries its geometric
/// parameters and a `Material`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
}

impl Object {
    /// Intersect a ray with this object.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Object::Sphere(sphere) => sphere.intersect(ray),
            Object::Plane(plane) => plane.intersect(ray),
        }
    }

    /// Shading attributes of this object.
    pub fn material(&self) -> &Material {
        match self {
            Object::Sphere(sphere) => &sphere.material,
            Object::Plane(plane) => &plane.material,
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<Plane> for Object {
    fn from(plane: Plane) -> Self {
        Object::Plane(plane)
    }
}
