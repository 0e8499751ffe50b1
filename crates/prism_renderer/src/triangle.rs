//! Triangle primitive for ray tracing.
//!
//! Uses the geometric (plane then inside-outside) intersection test. The
//! counter-clockwise winding of `v0, v1, v2` defines the front face.

use std::sync::Arc;

use crate::hit::{RayHit, SceneEntity, PARALLEL_EPSILON};
use crate::{Material, Ray};
use prism_math::DVec3;

/// A triangle primitive.
pub struct Triangle {
    /// Vertices
    v0: DVec3,
    v1: DVec3,
    v2: DVec3,
    /// Pre-computed face normal (unit length, right-hand rule)
    normal: DVec3,
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3, material: Arc<Material>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    pub fn vertices(&self) -> [DVec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Whether `p` (on the triangle's plane) lies left of the edge `from -> to`
    /// when viewed against the face normal.
    #[inline]
    fn inside_edge(&self, from: DVec3, to: DVec3, p: DVec3) -> bool {
        self.normal.dot((to - from).cross(p - from)) >= 0.0
    }
}

impl SceneEntity for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let n_dot_dir = self.normal.dot(ray.direction());

        // Ray is parallel to the triangle's plane
        if n_dot_dir.abs() < PARALLEL_EPSILON {
            return None;
        }

        let d = -self.normal.dot(self.v0);
        let t = -(self.normal.dot(ray.origin()) + d) / n_dot_dir;
        if t <= 0.0 {
            return None;
        }

        let p = ray.at(t);
        if !self.inside_edge(self.v0, self.v1, p)
            || !self.inside_edge(self.v1, self.v2, p)
            || !self.inside_edge(self.v2, self.v0, p)
        {
            return None;
        }

        Some(RayHit::new(ray, t, self.normal, &self.material))
    }
}
