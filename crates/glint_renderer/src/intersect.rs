//! Ray-object intersection and the nearest-hit scene query.

use glint_core::{Object, Scene, Sphere};
use glint_math::{Ray, Vec3};

/// Offset applied to secondary-ray origins, in world units.
///
/// Shadow and reflection rays start a hair off the surface so
/// floating-point rounding cannot make them re-hit the surface they
/// just left ("shadow acne"). The same bias is used for both kinds of
/// secondary ray.
pub const RAY_BIAS: f32 = 0.001;

/// Capability seam for anything a ray can hit.
///
/// Adding a new shape means a new [`Object`] variant plus an
/// `Intersectable` impl; the scene query below is unchanged.
pub trait Intersectable {
    /// Nearest positive hit distance along the ray, if any.
    ///
    /// The ray direction must be unit length, so the returned `t` is a
    /// world-space distance.
    fn intersect(&self, ray: &Ray) -> Option<f32>;
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Geometric test: project the origin-to-center vector onto the
        // ray, then compare the perpendicular distance to the radius.
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;

        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let mut t0 = tca - thc;
        let t1 = tca + thc;

        // Near root behind the origin (or origin inside the sphere):
        // fall back to the far root.
        if t0 < 0.0 {
            t0 = t1;
        }
        if t0 < 0.0 {
            // Sphere entirely behind the origin.
            return None;
        }

        Some(t0)
    }
}

impl Intersectable for Object {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Object::Sphere(sphere) => sphere.intersect(ray),
        }
    }
}

/// Nearest intersection of a ray with scene geometry.
///
/// Transient: created by [`scene_intersect`], consumed by the shading
/// and tracing code within the same cast, never persisted. Borrows the
/// hit object from the scene.
#[derive(Debug, Clone, Copy)]
pub struct Collision<'a> {
    /// The object that was hit
    pub object: &'a Object,

    /// Distance from the ray origin to the hit point (>= 0)
    pub t: f32,

    /// World-space hit point
    pub point: Vec3,

    /// Unit surface normal, pointing away from the object's interior
    pub normal: Vec3,
}

/// Find the nearest object the ray hits, if any.
///
/// Objects are scanned in scene order with the best distance starting
/// at infinity; an exact distance tie keeps the earlier object, so
/// results are deterministic for a given scene.
pub fn scene_intersect<'a>(scene: &'a Scene, ray: &Ray) -> Option<Collision<'a>> {
    let mut best_t = f32::INFINITY;
    let mut best: Option<&Object> = None;

    for object in &scene.objects {
        if let Some(t) = object.intersect(ray) {
            if t < best_t {
                best_t = t;
                best = Some(object);
            }
        }
    }

    best.map(|object| {
        let point = ray.at(best_t);
        let normal = match object {
            Object::Sphere(sphere) => (point - sphere.center).normalize(),
        };
        Collision {
            object,
            t: best_t,
            point,
            normal,
        }
    })
}

/// Bias a secondary ray's origin off the surface.
///
/// The offset goes along the normal when the new direction leaves the
/// surface on the normal's side, against it otherwise, so the ray
/// always starts on the side it is heading towards.
#[inline]
pub fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3) -> Vec3 {
    if direction.dot(normal) >= 0.0 {
        point + normal * RAY_BIAS
    } else {
        point - normal * RAY_BIAS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Albedo, Camera, Light, Material, Scene};
    use std::f32::consts::FRAC_PI_2;

    fn one_sphere_scene(center: Vec3, radius: f32) -> Scene {
        let mut scene = Scene::new(Camera::new(Vec3::ZERO, FRAC_PI_2, Vec3::ZERO));
        let m = scene.add_material(Material::new(Vec3::ONE, Albedo::new(1.0, 0.0, 0.0), 10.0));
        scene.add_object(Object::Sphere(Sphere::new(center, radius, m)));
        scene.add_light(Light::new(Vec3::new(0.0, 10.0, 0.0), 1.0));
        scene
    }

    #[test]
    fn test_ray_at_center_hits_at_distance_minus_radius() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let t = sphere.intersect(&ray).unwrap();
        // |origin - center| - radius = 5 - 1
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_ray_passing_beside_misses() {
        let sphere = Sphere::new(Vec3::new(0.0, 3.0, -5.0), 1.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_returns_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // From the center the near root is at -2, so the far root wins.
        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_scene_intersect_picks_nearest() {
        let mut scene = one_sphere_scene(Vec3::new(0.0, 0.0, -10.0), 1.0);
        scene.add_object(Object::Sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, 0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let collision = scene_intersect(&scene, &ray).unwrap();

        assert!((collision.t - 4.0).abs() < 1e-5);
        assert_eq!(collision.point, ray.at(collision.t));
    }

    #[test]
    fn test_scene_intersect_tie_keeps_first_object() {
        // Two identical spheres: the one added first wins the tie.
        let mut scene = one_sphere_scene(Vec3::new(0.0, 0.0, -5.0), 1.0);
        scene.add_object(Object::Sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, 0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let collision = scene_intersect(&scene, &ray).unwrap();

        assert!(std::ptr::eq(collision.object, &scene.objects[0]));
    }

    #[test]
    fn test_scene_intersect_empty_scene_is_none() {
        let scene = Scene::new(Camera::new(Vec3::ZERO, FRAC_PI_2, Vec3::ZERO));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(scene_intersect(&scene, &ray).is_none());
    }

    #[test]
    fn test_collision_normal_is_unit_and_outward() {
        let scene = one_sphere_scene(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let collision = scene_intersect(&scene, &ray).unwrap();
        assert!((collision.normal.length() - 1.0).abs() < 1e-5);
        // Front of the sphere faces the camera: normal points back at +z.
        assert!((collision.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_offset_origin_side_follows_direction() {
        let point = Vec3::ZERO;
        let normal = Vec3::Y;

        let above = offset_origin(point, normal, Vec3::new(1.0, 0.5, 0.0));
        assert!(above.y > 0.0);

        let below = offset_origin(point, normal, Vec3::new(1.0, -0.5, 0.0));
        assert!(below.y < 0.0);

        assert!((above.y.abs() - RAY_BIAS).abs() < 1e-7);
    }
}
