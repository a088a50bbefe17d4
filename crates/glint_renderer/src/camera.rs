//! Camera and primary ray generation.

use crate::CameraError;
use glint_math::{Ray, Vec3};

/// Pin-hole camera with a derived orthonormal basis.
///
/// Built once per frame from an eye point, a look target, a world up vector
/// and a vertical field of view. Degenerate configurations are rejected at
/// construction, see [`CameraError`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    width: u32,
    height: u32,

    position: Vec3,
    forward: Vec3,
    left: Vec3,
    up: Vec3,

    aspect_ratio: f32,
    // tan(vfov / 2), computed once
    half_fov_tan: f32,
}

impl Camera {
    /// Create a camera looking from `eye` towards `target`.
    ///
    /// `vfov_degrees` is the vertical field of view. Fails when either
    /// output dimension is zero, when `target` coincides with `eye`, or when
    /// `world_up` is parallel to the look direction.
    pub fn new(
        width: u32,
        height: u32,
        eye: Vec3,
        target: Vec3,
        world_up: Vec3,
        vfov_degrees: f32,
    ) -> Result<Self, CameraError> {
        if width == 0 || height == 0 {
            return Err(CameraError::InvalidResolution { width, height });
        }

        let look = target - eye;
        if look.length_squared() < 1e-12 {
            return Err(CameraError::DegenerateLookDirection);
        }
        let forward = look.normalize();

        let side = world_up.cross(forward);
        if side.length_squared() < 1e-12 {
            return Err(CameraError::DegenerateUp);
        }
        let left = side.normalize();
        let up = forward.cross(left);

        Ok(Self {
            width,
            height,
            position: eye,
            forward,
            left,
            up,
            aspect_ratio: width as f32 / height as f32,
            half_fov_tan: (vfov_degrees.to_radians() / 2.0).tan(),
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Generate the primary ray through pixel (x, y).
    ///
    /// Pixel coordinates are mapped to normalized device coordinates in
    /// [-1, 1]; y grows upwards, so y = 0 is the bottom scanline. The
    /// returned direction is unit length.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let ndc_x = 2.0 * (x as f32 / self.width as f32) - 1.0;
        let ndc_y = 2.0 * (y as f32 / self.height as f32) - 1.0;

        let direction = (self.forward
            + self.half_fov_tan * ndc_y * self.up
            + self.half_fov_tan * self.aspect_ratio * ndc_x * self.left)
            .normalize();

        Ray::new(self.position, direction)
    }
}
