//! Recursive Whitted-style tracer and shading model.

use crate::{Color, Light, Scene, SceneHit};
use glint_math::{Ray, Vec3};

/// Offset applied along the surface normal when spawning shadow and
/// reflection rays, so they start outside the surface they originate from.
/// Must stay small relative to scene scale. The offset is along the normal
/// rather than the new ray direction, which may be nearly tangential.
pub const RAY_EPSILON: f32 = 1e-3;

/// Lighting and tracing parameters for one frame.
///
/// Threaded explicitly through every call; the tracer holds no global state,
/// so independent frames (and tests) can run concurrently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// The single point light of the scene.
    pub light: Light,
    /// Ambient light, added unconditionally. A stand-in for indirect light;
    /// without it any surface facing away from the light is pitch black.
    pub ambient: Color,
    /// Color returned for rays that hit nothing.
    pub background: Color,
    /// Maximum number of reflective bounces per primary ray.
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            light: Light::new(Vec3::new(-100.0, 100.0, 20.0), Color::splat(0.9)),
            ambient: Color::splat(0.2),
            background: Color::ZERO,
            max_depth: 8,
        }
    }
}

/// Trace a ray through the scene and return its color.
///
/// This is the single recursive entry point: reflection rays spawned by
/// [`shade`] come back through here with an incremented depth, so the
/// recursion is bounded by `config.max_depth` regardless of scene topology.
/// A miss resolves to the background color.
pub fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig, depth: u32) -> Color {
    match scene.closest_hit(ray) {
        Some(hit) => shade(ray, &hit, scene, config, depth),
        None => config.background,
    }
}

/// Compute the color at a hit point.
///
/// Ambient light always applies. The lambertian direct term applies when the
/// light is on the visible side of the surface and the shadow ray towards it
/// is unobstructed; the occlusion test is bounded by the distance to the
/// light so objects behind it cannot cast shadows. A reflective surface adds
/// the recursively traced mirror ray, weighted by its reflectivity, as long
/// as the depth bound has not been reached.
pub fn shade(ray: &Ray, hit: &SceneHit, scene: &Scene, config: &RenderConfig, depth: u32) -> Color {
    let material = scene.object(hit.object).material();

    let to_light = config.light.position - hit.position;
    let light_dir = to_light.normalize();
    let cos_angle = light_dir.dot(hit.normal);

    let mut light = config.ambient;

    // The shadow ray is only cast once the facing test passes.
    if cos_angle > 0.0 {
        let shadow_ray = Ray::new(hit.position + hit.normal * RAY_EPSILON, light_dir);
        if !scene.is_occluded(&shadow_ray, to_light.length()) {
            light += config.light.color * cos_angle;
        }
    }

    let mut result = material.diffuse_color * light;

    // Zero reflectivity must skip the recursion entirely, not just scale the
    // contribution to nothing.
    if depth < config.max_depth && material.reflectivity > 0.0 {
        let reflection = Ray::new(
            hit.position + hit.normal * RAY_EPSILON,
            reflect(ray.direction, hit.normal),
        );
        result += trace(&reflection, scene, config, depth + 1) * material.reflectivity;
    }

    result
}

/// Mirror-reflect a vector about a unit normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};

    fn close(a: Color, b: Color) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_miss_returns_exact_background() {
        let config = RenderConfig {
            background: Color::new(0.1, 0.2, 0.3),
            ..Default::default()
        };

        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(Vec3::ONE)));

        // Ray pointing away from the only object.
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(trace(&ray, &scene, &config, 0), config.background);
    }

    #[test]
    fn test_reflect_mirrors_about_normal() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert!(close(r, Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_shadow_suppresses_direct_term() {
        let diffuse = Color::new(0.4, 0.5, 0.6);
        let config = RenderConfig {
            light: Light::new(Vec3::new(0.0, 100.0, 0.0), Color::splat(0.9)),
            ambient: Color::splat(0.2),
            background: Color::ZERO,
            max_depth: 8,
        };

        // Receiver sphere whose top surface sits at the origin, plus an
        // opaque occluder covering the line to the light.
        let mut scene = Scene::new();
        let receiver = scene.add(Sphere::new(
            Vec3::new(0.0, -5.0, 0.0),
            5.0,
            Material::diffuse(diffuse),
        ));
        scene.add(Sphere::new(
            Vec3::new(0.0, 50.0, 0.0),
            10.0,
            Material::diffuse(Color::ONE),
        ));

        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = scene.closest_hit(&ray).expect("must hit receiver");
        assert_eq!(hit.object, receiver);
        assert!(close(hit.normal, Vec3::Y));

        // Only the ambient term survives.
        let color = shade(&ray, &hit, &scene, &config, 0);
        assert!(close(color, diffuse * config.ambient));
    }

    #[test]
    fn test_lit_surface_gets_lambertian_term() {
        let diffuse = Color::new(0.4, 0.5, 0.6);
        let config = RenderConfig {
            light: Light::new(Vec3::new(0.0, 100.0, 0.0), Color::splat(0.9)),
            ambient: Color::splat(0.2),
            background: Color::ZERO,
            max_depth: 8,
        };

        let mut scene = Scene::new();
        scene.add(Sphere::new(
            Vec3::new(0.0, -5.0, 0.0),
            5.0,
            Material::diffuse(diffuse),
        ));

        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = scene.closest_hit(&ray).expect("must hit");

        // Normal points straight at the light, cos = 1.
        let color = shade(&ray, &hit, &scene, &config, 0);
        assert!(close(color, diffuse * (config.ambient + config.light.color)));
    }

    #[test]
    fn test_zero_reflectivity_performs_no_recursion() {
        let diffuse = Color::new(0.4, 0.5, 0.6);
        // Infinite background: if the reflection branch ran at all, even
        // weighted by zero, the reflection ray would miss into it and
        // 0 * inf = NaN would poison the result. Skipping the recursion
        // keeps the color finite and exactly diffuse.
        let config = RenderConfig {
            light: Light::new(Vec3::new(0.0, 0.0, -100.0), Color::splat(0.9)),
            ambient: Color::splat(0.2),
            background: Color::splat(f32::INFINITY),
            max_depth: 8,
        };

        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::ZERO, 1.0, Material::new(diffuse, 0.0)));

        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = scene.closest_hit(&ray).expect("must hit");

        let color = shade(&ray, &hit, &scene, &config, 0);
        assert!(color.is_finite());
        assert!(close(color, diffuse * (config.ambient + config.light.color)));
    }

    #[test]
    fn test_reflection_weighted_by_reflectivity() {
        let diffuse = Color::new(0.4, 0.5, 0.6);
        let background = Color::new(1.0, 2.0, 3.0);
        let reflectivity = 0.5;
        let config = RenderConfig {
            light: Light::new(Vec3::new(0.0, 0.0, -100.0), Color::splat(0.9)),
            ambient: Color::splat(0.2),
            background,
            max_depth: 8,
        };

        let mut scene = Scene::new();
        scene.add(Sphere::new(
            Vec3::ZERO,
            1.0,
            Material::new(diffuse, reflectivity),
        ));

        // Head-on hit: the reflection ray goes straight back out to the
        // background, so the reflected term is exactly background-colored.
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = scene.closest_hit(&ray).expect("must hit");

        let color = shade(&ray, &hit, &scene, &config, 0);
        let expected = diffuse * (config.ambient + config.light.color) + background * reflectivity;
        assert!(close(color, expected));
    }

    #[test]
    fn test_depth_bound_skips_reflection() {
        let diffuse = Color::new(0.4, 0.5, 0.6);
        let config = RenderConfig {
            light: Light::new(Vec3::new(0.0, 0.0, -100.0), Color::splat(0.9)),
            ambient: Color::splat(0.2),
            background: Color::splat(10.0),
            max_depth: 4,
        };

        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::ZERO, 1.0, Material::new(diffuse, 1.0)));

        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = scene.closest_hit(&ray).expect("must hit");

        // At the depth bound, a fully reflective surface shades exactly like
        // a diffuse one.
        let color = shade(&ray, &hit, &scene, &config, config.max_depth);
        assert!(close(color, diffuse * (config.ambient + config.light.color)));
    }

    #[test]
    fn test_facing_mirrors_terminate() {
        // Two fully reflective spheres facing each other; the reflected ray
        // bounces between them until the depth bound cuts it off.
        let mirror = Material::new(Color::splat(0.1), 1.0);
        let config = RenderConfig {
            max_depth: 8,
            ..Default::default()
        };

        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, mirror));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, mirror));

        // Start between the mirrors so the reflection ping-pongs along the
        // axis until the depth bound cuts it off.
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let color = trace(&ray, &scene, &config, 0);

        assert!(color.is_finite());
        // Eight bounces of an 0.1-grey mirror cannot blow up.
        assert!(color.length() < 10.0);
    }
}
