//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::hit::{RayHit, SceneEntity};
use crate::{Material, Ray};
use prism_math::DVec3;

/// A sphere primitive.
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl SceneEntity for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t0 = -b - sqrtd;
        let t1 = -b + sqrtd;

        // Prefer the near root unless it lies behind the origin
        let root = if t0 > 0.0 && t0 < t1 { t0 } else { t1 };
        let t = root / (2.0 * a);
        if t <= 0.0 {
            return None;
        }

        let position = ray.at(t);
        let outward_normal = (position - self.center).normalize();
        Some(RayHit::new(ray, t, outward_normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn sphere_at(center: DVec3, radius: f64) -> Sphere {
        Sphere::new(center, radius, Arc::new(Material::diffuse(Color::splat(0.5))))
    }

    #[test]
    fn test_sphere_hit_front_face() {
        let sphere = sphere_at(DVec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        let hit = sphere.intersect(&ray).expect("axis ray should hit");

        // center_distance - radius
        assert!((hit.t - 4.0).abs() < 1e-9);
        assert!((hit.position - DVec3::new(0.0, 0.0, 4.0)).length() < 1e-9);

        // Normal is parallel to (hit - center) and points outward
        let expected = (hit.position - sphere.center()).normalize();
        assert!((hit.normal - expected).length() < 1e-9);
        assert!(hit.front_face());
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = sphere_at(DVec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(DVec3::ZERO, -DVec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_miss_offset() {
        let sphere = sphere_at(DVec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(DVec3::new(3.0, 0.0, 0.0), DVec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = sphere_at(DVec3::ZERO, 2.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        let hit = sphere.intersect(&ray).expect("ray from inside should exit");

        assert!((hit.t - 2.0).abs() < 1e-9);
        assert!((hit.normal - DVec3::X).length() < 1e-9);
        // Outward normal and incident agree, so this is a back-face hit
        assert!(!hit.front_face());
    }

    #[test]
    fn test_sphere_unnormalized_direction() {
        let sphere = sphere_at(DVec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0));

        let hit = sphere.intersect(&ray).expect("scaled direction should hit");

        assert!((hit.t - 2.0).abs() < 1e-9);
        assert!((hit.position.z - 4.0).abs() < 1e-9);
    }
}
