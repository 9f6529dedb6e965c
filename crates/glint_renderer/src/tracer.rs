//! Recursive ray tracing driver.

use glint_core::Scene;
use glint_math::{reflect, Ray, Vec3};

use crate::intersect::{offset_origin, scene_intersect};
use crate::shade::shade;

/// Reflection recursion cap.
///
/// The terminal check is `depth > MAX_DEPTH`, so a call at depth
/// `MAX_DEPTH` still spawns one more reflection ray: mirrors bounce
/// five times, not four. Deliberate, and covered by a regression test.
pub const MAX_DEPTH: u32 = 4;

/// Compute the color seen along a ray.
///
/// Local Phong shading at the nearest hit, plus a recursive mirror
/// bounce when the material's reflective weight is positive. Misses
/// and the depth cap both resolve to the camera background. The
/// returned color is unclamped.
pub fn cast_ray(scene: &Scene, ray: &Ray, depth: u32) -> Vec3 {
    if depth > MAX_DEPTH {
        return scene.camera.background;
    }

    let Some(collision) = scene_intersect(scene, ray) else {
        return scene.camera.background;
    };

    // Index is in range for any scene that passed validation.
    let material = scene.material(collision.object.material_index());
    let mut color = shade(scene, ray.direction, &collision, material);

    if material.albedo.reflect > 0.0 {
        let reflect_dir = reflect(ray.direction, collision.normal).normalize();
        let reflect_origin = offset_origin(collision.point, collision.normal, reflect_dir);
        let reflected = cast_ray(scene, &Ray::new(reflect_origin, reflect_dir), depth + 1);
        color += reflected * material.albedo.reflect;
    }

    color
}
