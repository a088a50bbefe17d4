//! Scene container and ray queries.

use crate::{Color, Object};
use glint_math::{Ray, Vec3};

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// A closest-hit query result: a surface hit plus the index of the hit
/// object in the scene's object arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    /// Index of the hit object in the scene.
    pub object: usize,
    /// Ray parameter at the intersection.
    pub t: f32,
    /// Point of intersection.
    pub position: Vec3,
    /// Unit surface normal at the intersection.
    pub normal: Vec3,
}

/// An ordered collection of intersectable objects.
///
/// Objects live in a contiguous arena; hits refer back to them by index.
/// The scene is read-only for the duration of a render call.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Object>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene and return its index.
    pub fn add(&mut self, object: impl Into<Object>) -> usize {
        self.objects.push(object.into());
        self.objects.len() - 1
    }

    /// Get an object by index.
    pub fn object(&self, index: usize) -> &Object {
        &self.objects[index]
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest intersection along a ray.
    ///
    /// Linear scan over all objects, fine for a small handful; a large scene
    /// would want an acceleration structure instead. When two hits have the
    /// same parameter the earliest-added object wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<SceneHit> {
        let mut best: Option<SceneHit> = None;

        for (index, object) in self.objects.iter().enumerate() {
            if let Some(hit) = object.intersect(ray) {
                if best.map_or(true, |b| hit.t < b.t) {
                    best = Some(SceneHit {
                        object: index,
                        t: hit.t,
                        position: hit.position,
                        normal: hit.normal,
                    });
                }
            }
        }

        best
    }

    /// Test whether anything blocks the ray within `max_distance`.
    ///
    /// Unlike `closest_hit` this does not care which object is nearest, so it
    /// returns as soon as any intersection is found. The distance bound keeps
    /// objects beyond the light source from casting shadows.
    pub fn is_occluded(&self, ray: &Ray, max_distance: f32) -> bool {
        for object in &self.objects {
            if let Some(hit) = object.intersect(ray) {
                if hit.t < max_distance {
                    return true;
                }
            }
        }

        false
    }
}
