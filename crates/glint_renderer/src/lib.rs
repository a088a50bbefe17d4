//! Glint - CPU Whitted-style ray tracing
//!
//! A recursive ray tracer: one primary ray per pixel, lambertian direct
//! lighting gated by shadow rays, and mirror reflections followed
//! recursively up to a fixed depth bound.
//!
//! Scene construction and image presentation are the caller's concern; the
//! renderer takes a read-only scene, camera, and lighting configuration and
//! produces a linear-color pixel buffer.

mod camera;
mod error;
mod material;
mod object;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod tracer;

pub use camera::Camera;
pub use error::CameraError;
pub use material::{Color, Material};
pub use object::{Hit, Object};
pub use plane::Plane;
pub use renderer::{color_to_rgba, render_frame, FrameBuffer};
pub use scene::{Light, Scene, SceneHit};
pub use sphere::{intersect_ray_sphere, Sphere};
pub use tracer::{shade, trace, RenderConfig, RAY_EPSILON};

/// Re-export Ray and Vec3 from glint_math
pub use glint_math::{Ray, Vec3};
