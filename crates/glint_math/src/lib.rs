// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
pub use ray::Ray;

/// Reflect `v` about the normal `n`.
///
/// Computes `v - 2 * dot(v, n) * n`. `n` must be unit length for the
/// reflection law to hold.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_normalize_is_idempotent_on_unit_vectors() {
        let d = Vec3::new(1.0, -2.0, 0.5).normalize();
        assert!((d.length() - 1.0).abs() < 1e-6);

        // Normalizing an already-unit vector changes nothing.
        let renormalized = d.normalize();
        assert!((renormalized - d).length() < 1e-6);
    }

    #[test]
    fn test_reflect_preserves_incident_angle() {
        // Reflection law: dot(reflect(v, n), n) == -dot(v, n) for unit n.
        let v = Vec3::new(0.7, -1.3, 2.1);
        let n = Vec3::new(0.2, 1.0, -0.4).normalize();
        let r = reflect(v, n);

        assert!((r.dot(n) + v.dot(n)).abs() < 1e-5);
        // Reflection also preserves length.
        assert!((r.length() - v.length()).abs() < 1e-5);
    }

    #[test]
    fn test_reflect_head_on() {
        // A ray hitting a surface straight on bounces straight back.
        let v = Vec3::new(0.0, 0.0, -1.0);
        let n = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(reflect(v, n), Vec3::new(0.0, 0.0, 1.0));
    }
}
