//! Reference scene built in code.
//!
//! Renders the four-sphere reference scene (the same one shipped as
//! scenes/reference.json) and saves it as a PNG.

use glint_core::{Albedo, Camera, Light, Material, Object, Scene, Sphere};
use glint_math::Vec3;
use glint_renderer::render;
use std::f32::consts::FRAC_PI_2;

fn main() {
    env_logger::init();

    let scene = build_scene();
    scene.validate().expect("reference scene is valid");

    let (width, height) = (1024, 768);
    println!("Rendering {}x{}...", width, height);

    let start = std::time::Instant::now();
    let frame = render(&scene, width, height);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "reference.png";
    frame.save_png(filename).expect("failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let camera = Camera::new(Vec3::ZERO, FRAC_PI_2, Vec3::new(0.2, 0.3, 0.4));
    let mut scene = Scene::new(camera);

    let ivory = scene.add_material(Material::new(
        Vec3::new(0.4, 0.4, 0.3),
        Albedo::new(0.6, 0.3, 0.3),
        50.0,
    ));
    let rubber = scene.add_material(Material::new(
        Vec3::new(0.3, 0.1, 0.1),
        Albedo::new(0.9, 0.1, 0.0),
        10.0,
    ));
    let mirror = scene.add_material(Material::new(
        Vec3::ONE,
        Albedo::new(0.0, 10.0, 0.8),
        1425.0,
    ));

    scene.add_object(Object::Sphere(Sphere::new(Vec3::new(-4.5, 0.0, -8.0), 2.0, ivory)));
    scene.add_object(Object::Sphere(Sphere::new(Vec3::new(-2.0, 2.5, -5.0), 1.0, mirror)));
    scene.add_object(Object::Sphere(Sphere::new(Vec3::new(0.5, -0.5, -9.0), 3.0, rubber)));
    scene.add_object(Object::Sphere(Sphere::new(Vec3::new(8.0, 5.0, -12.0), 4.0, mirror)));

    scene.add_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5));
    scene.add_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8));
    scene.add_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7));

    scene
}
