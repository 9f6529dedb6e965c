//! Local Phong illumination with hard shadows.

use glint_core::{Material, Scene};
use glint_math::{reflect, Ray, Vec3};

use crate::intersect::{offset_origin, scene_intersect, Collision};

/// Shade a hit point under every unoccluded light.
///
/// For each light a shadow ray is cast from a biased origin; a hit
/// strictly closer than the light drops that light's contribution
/// entirely (hard shadows, no partial occlusion). The remaining lights
/// accumulate a diffuse term weighted by the cosine of incidence and a
/// Phong specular term raised to the material's exponent.
///
/// `direction` is the unit direction of the viewing ray that produced
/// `collision`. The result is intentionally unclamped; tone mapping is
/// the frame renderer's job.
pub fn shade(
    scene: &Scene,
    direction: Vec3,
    collision: &Collision<'_>,
    material: &Material,
) -> Vec3 {
    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;

    for light in &scene.lights {
        let to_light = light.position - collision.point;
        let light_distance = to_light.length();
        let light_dir = to_light / light_distance;

        // Occlusion test: anything between the point and the light
        // kills this light's contribution.
        let shadow_origin = offset_origin(collision.point, collision.normal, light_dir);
        let shadow_ray = Ray::new(shadow_origin, light_dir);
        if let Some(blocker) = scene_intersect(scene, &shadow_ray) {
            if blocker.t < light_distance {
                continue;
            }
        }

        diffuse_intensity += light_dir.dot(collision.normal).max(0.0) * light.intensity;
        specular_intensity += reflect(light_dir, collision.normal)
            .dot(direction)
            .max(0.0)
            .powf(material.specular_exponent)
            * light.intensity;
    }

    material.diffuse_color * (diffuse_intensity * material.albedo.diffuse)
        + Vec3::ONE * (specular_intensity * material.albedo.specular)
}
