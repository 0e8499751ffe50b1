//! Infinite plane primitive.

use std::sync::Arc;

use crate::hit::{RayHit, SceneEntity, HIT_EPSILON, PARALLEL_EPSILON};
use crate::{Material, Ray};
use prism_math::DVec3;

/// An infinite plane through `center` facing along `normal`.
pub struct Plane {
    center: DVec3,
    /// Unit normal
    normal: DVec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(center: DVec3, normal: DVec3, material: Arc<Material>) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            material,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }
}

impl SceneEntity for Plane {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let denom = self.normal.dot(ray.direction());

        // Ray runs parallel to the plane
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.center - ray.origin()).dot(self.normal) / denom;
        if t <= HIT_EPSILON {
            return None;
        }

        Some(RayHit::new(ray, t, self.normal, &self.material))
    }
}
