//! Scene container and visibility queries.

use crate::hit::{RayHit, SceneEntity};
use crate::{PointLight, Ray, SceneOptions};
use prism_math::DVec3;

/// A renderable scene: entities, point lights, and options.
///
/// A scene is assembled up front and only read while rendering.
pub struct Scene {
    options: SceneOptions,
    entities: Vec<Box<dyn SceneEntity>>,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Create an empty scene with the given options.
    pub fn new(options: SceneOptions) -> Self {
        Self {
            options,
            entities: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add an entity that should be rendered.
    pub fn add_entity(&mut self, entity: impl SceneEntity + 'static) {
        self.entities.push(Box::new(entity));
        log::debug!("Added entity #{}", self.entities.len());
    }

    /// Add a point light that should be computed.
    pub fn add_point_light(&mut self, light: PointLight) {
        log::debug!("Added point light at {:?}", light.position);
        self.lights.push(light);
    }

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Nearest hit along `ray` over every entity.
    ///
    /// Hits are ranked by squared distance from the ray origin; a hit at
    /// zero distance is discarded.
    pub fn closest_hit(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let origin = ray.origin();
        let mut closest: Option<(f64, RayHit<'_>)> = None;

        for entity in &self.entities {
            let Some(hit) = entity.intersect(ray) else {
                continue;
            };

            let dist_sq = hit.distance_squared_from(origin);
            if dist_sq <= 0.0 {
                continue;
            }
            if closest.as_ref().map_or(true, |(best, _)| dist_sq < *best) {
                closest = Some((dist_sq, hit));
            }
        }

        closest.map(|(_, hit)| hit)
    }

    /// Whether something blocks the segment from a surface point to `light`.
    ///
    /// The shadow ray starts at `point` pushed off the surface along `normal`
    /// by `bias`. A blocker counts only when it is strictly closer to `point`
    /// than the light is.
    pub fn is_occluded(&self, point: DVec3, normal: DVec3, bias: f64, light: &PointLight) -> bool {
        let to_light = light.position - point;
        let shadow_ray = Ray::new(point + normal * bias, to_light.normalize());

        self.closest_hit(&shadow_ray)
            .is_some_and(|blocker| blocker.distance_squared_from(point) < to_light.length_squared())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneOptions::default())
    }
}
