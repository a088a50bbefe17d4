//! Frame rendering.
//!
//! Casts one primary ray per pixel and traces it through the scene. Rows are
//! independent, so they are rendered in parallel with rayon; the scene,
//! camera, and config are read-only for the duration of the call.

use crate::tracer::{trace, RenderConfig};
use crate::{Camera, Color, Scene};
use rayon::prelude::*;
use std::time::Instant;

/// A row-major buffer of linear-color pixels.
///
/// Row 0 is the bottom scanline (the camera's NDC y grows upwards).
/// No gamma encoding is applied; that belongs to whatever presents the
/// buffer, see [`color_to_rgba`].
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with the given color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Convert a linear color to 8-bit RGBA for display (gamma 2.0 + clamp).
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let encode = |c: f32| (255.0 * c.max(0.0).sqrt().min(1.0)) as u8;
    [encode(color.x), encode(color.y), encode(color.z), 255]
}

/// Render one frame.
///
/// Produces the full `width * height` pixel buffer for the camera's output
/// dimensions. Each pixel is a pure function of the camera, scene, and
/// config, so any pixel may be computed before any other; the buffer is
/// complete when this returns. Never mutates the scene.
pub fn render_frame(camera: &Camera, scene: &Scene, config: &RenderConfig) -> FrameBuffer {
    let start = Instant::now();

    let width = camera.width() as usize;
    let mut frame = FrameBuffer::new(camera.width(), camera.height(), config.background);

    frame
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = camera.primary_ray(x as u32, y as u32);
                *pixel = trace(&ray, scene, config, 0);
            }
        });

    log::debug!(
        "rendered {}x{} frame ({} objects) in {:.1} ms",
        frame.width,
        frame.height,
        scene.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    frame
}
