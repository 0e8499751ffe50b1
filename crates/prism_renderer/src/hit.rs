//! SceneEntity trait and RayHit for ray-primitive intersection.

use crate::{Material, Ray};
use prism_math::DVec3;

/// Below this magnitude a ray direction counts as parallel to a surface.
pub const PARALLEL_EPSILON: f64 = 1.401_298_464_324_817e-45;

/// Plane hits must lie strictly beyond this parameter.
pub const HIT_EPSILON: f64 = 1.401_298_464_324_817e-45;

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone, Copy)]
pub struct RayHit<'a> {
    /// Point of intersection
    pub position: DVec3,
    /// Geometric surface normal (unit length, not flipped toward the ray)
    pub normal: DVec3,
    /// Direction of the ray that produced the hit
    pub incident: DVec3,
    /// Ray parameter of the hit; always strictly positive
    pub t: f64,
    /// Material of the struck surface
    pub material: &'a Material,
}

impl<'a> RayHit<'a> {
    /// Build a hit for `ray` at parameter `t`.
    pub fn new(ray: &Ray, t: f64, normal: DVec3, material: &'a Material) -> Self {
        Self {
            position: ray.at(t),
            normal,
            incident: ray.direction(),
            t,
            material,
        }
    }

    /// Squared distance from `point` to the hit position.
    #[inline]
    pub fn distance_squared_from(&self, point: DVec3) -> f64 {
        (self.position - point).length_squared()
    }

    /// Whether the incident ray arrives against the normal (from the front).
    #[inline]
    pub fn front_face(&self) -> bool {
        self.incident.dot(self.normal) < 0.0
    }
}

/// Trait for geometry that can be placed in a scene and hit by rays.
pub trait SceneEntity: Send + Sync {
    /// Find the nearest intersection of `ray` with this entity, if any.
    ///
    /// Implementations return only hits with `t > 0`.
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>>;
}
