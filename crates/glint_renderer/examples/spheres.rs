//! Renders the classic five-sphere scene and saves it as a PNG.

use glint_renderer::{
    color_to_rgba, render_frame, Camera, Color, Material, Plane, RenderConfig, Scene, Sphere, Vec3,
};
use std::time::Instant;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let width = 1280;
    let height = 720;

    let scene = build_scene();
    let camera = Camera::new(
        width,
        height,
        Vec3::new(0.0, 0.0, -10.0), // eye
        Vec3::ZERO,                 // target
        Vec3::Y,                    // world up
        45.0,                       // vertical fov
    )
    .expect("camera configuration is valid");

    let config = RenderConfig::default();

    log::info!("rendering {}x{}, {} objects", width, height, scene.len());
    let start = Instant::now();
    let frame = render_frame(&camera, &scene, &config);
    log::info!("rendered in {:.1} ms", start.elapsed().as_secs_f64() * 1000.0);

    // The frame buffer's row 0 is the bottom scanline; PNG rows go top-down.
    let mut out = image::RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let rgba = color_to_rgba(frame.get(x, height - 1 - y));
            out.put_pixel(x, y, image::Rgba(rgba));
        }
    }

    out.save("spheres.png").expect("failed to write spheres.png");
    log::info!("saved spheres.png");
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Blue sphere to the left
    scene.add(Sphere::new(
        Vec3::new(-3.2, 0.0, 0.0),
        1.5,
        Material::new(Color::new(0.2, 0.3, 1.0), 0.5),
    ));
    // Green sphere in the middle and up a bit
    scene.add(Sphere::new(
        Vec3::new(0.0, 2.0, 0.0),
        1.5,
        Material::new(Color::new(0.2, 0.9, 0.3), 0.5),
    ));
    // Red sphere to the right
    scene.add(Sphere::new(
        Vec3::new(3.2, 0.0, 0.0),
        1.5,
        Material::new(Color::new(0.8, 0.4, 0.1), 0.5),
    ));
    // Smaller dark mirror sphere
    scene.add(Sphere::new(
        Vec3::new(0.0, -1.0, 0.0),
        1.0,
        Material::new(Color::splat(0.1), 0.9),
    ));
    // Light gray ground plane, no reflection
    scene.add(Plane::new(
        Vec3::new(0.0, -3.0, 0.0),
        Vec3::Y,
        Material::diffuse(Color::splat(0.8)),
    ));

    scene
}
