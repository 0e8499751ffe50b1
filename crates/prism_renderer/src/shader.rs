//! Recursive Whitted-style shading.
//!
//! Diffuse surfaces take direct light from every unoccluded point light.
//! Mirrors and dielectrics spawn secondary rays until `MAX_DEPTH`.

use crate::{Color, Material, Ray, RayHit, Scene};
use prism_math::DVec3;

/// Recursion depth at which shading returns black.
pub const MAX_DEPTH: u32 = 4;

/// Offset applied along the normal to shadow, reflected and refracted ray
/// origins so they do not re-hit the surface they leave.
pub const SURFACE_BIAS: f64 = 0.001;

impl Scene {
    /// Compute the color seen along `ray` at recursion `depth`.
    ///
    /// Misses return black.
    pub fn shade(&self, ray: &Ray, depth: u32) -> Color {
        if depth >= MAX_DEPTH {
            log::trace!("Depth cap reached for ray {:?}", ray);
            return Color::ZERO;
        }

        let Some(hit) = self.closest_hit(ray) else {
            return Color::ZERO;
        };

        match *hit.material {
            Material::Diffuse { color } => self.shade_diffuse(&hit, color),
            // Pure mirror: the reflected color passes through unattenuated
            Material::Reflective { .. } => self.shade(&reflected_ray(&hit), depth + 1),
            Material::Refractive {
                refractive_index, ..
            } => self.shade_refractive(&hit, refractive_index, depth),
        }
    }

    /// Lambertian direct lighting summed over all unoccluded lights.
    fn shade_diffuse(&self, hit: &RayHit<'_>, albedo: Color) -> Color {
        self.lights()
            .iter()
            .filter(|light| !self.is_occluded(hit.position, hit.normal, SURFACE_BIAS, light))
            .fold(Color::ZERO, |acc, light| {
                let to_light = (light.position - hit.position).normalize();
                acc + albedo * light.color * hit.normal.dot(to_light).max(0.0)
            })
    }

    /// Fresnel-weighted blend of the reflected and transmitted colors.
    fn shade_refractive(&self, hit: &RayHit<'_>, refractive_index: f64, depth: u32) -> Color {
        let interface = Interface::new(hit.incident, hit.normal, refractive_index);

        let refract_color = match interface.transmitted_direction(hit.incident) {
            Some(direction) if interface.reflectance < 1.0 => {
                // Bias toward the side the transmitted ray travels into
                let origin = if hit.front_face() {
                    hit.position - hit.normal * SURFACE_BIAS
                } else {
                    hit.position + hit.normal * SURFACE_BIAS
                };
                self.shade(&Ray::new(origin, direction), depth + 1)
            }
            _ => Color::ZERO,
        };

        let reflect_color = self.shade(&reflected_ray(hit), depth + 1);

        reflect_color * interface.reflectance + refract_color * (1.0 - interface.reflectance)
    }
}

/// Mirror reflection of `incident` about `normal`.
#[inline]
fn reflect(incident: DVec3, normal: DVec3) -> DVec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Secondary ray for a perfect mirror bounce off `hit`.
fn reflected_ray(hit: &RayHit<'_>) -> Ray {
    let origin = if hit.front_face() {
        hit.position + hit.normal * SURFACE_BIAS
    } else {
        hit.position - hit.normal * SURFACE_BIAS
    };
    Ray::new(origin, reflect(hit.incident, hit.normal).normalize())
}

/// Refraction terms at a dielectric boundary, oriented for the side the
/// incident ray arrives from.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Interface {
    /// Normal facing the incident side
    normal: DVec3,
    /// Non-negative cosine of the incidence angle
    cos_i: f64,
    /// etai / etat
    eta: f64,
    /// Fraction of light reflected, 1.0 under total internal reflection
    reflectance: f64,
}

impl Interface {
    fn new(incident: DVec3, normal: DVec3, refractive_index: f64) -> Self {
        let cos = incident.dot(normal).clamp(-1.0, 1.0);

        // Negative cosine: entering from outside. Otherwise leaving the medium.
        let (cos_i, normal, etai, etat) = if cos < 0.0 {
            (-cos, normal, 1.0, refractive_index)
        } else {
            (cos, -normal, refractive_index, 1.0)
        };

        let eta = etai / etat;
        let sin_t = eta * (1.0 - cos_i * cos_i).max(0.0).sqrt();
        let reflectance = if sin_t >= 1.0 {
            1.0
        } else {
            fresnel_reflectance(cos_i, etai, etat)
        };

        Self {
            normal,
            cos_i,
            eta,
            reflectance,
        }
    }

    /// Direction of the transmitted ray, or `None` under total internal reflection.
    fn transmitted_direction(&self, incident: DVec3) -> Option<DVec3> {
        let k = 1.0 - self.eta * self.eta * (1.0 - self.cos_i * self.cos_i);
        if k < 0.0 {
            return None;
        }
        Some((self.eta * incident + (self.eta * self.cos_i - k.sqrt()) * self.normal).normalize())
    }
}

/// Unpolarized reflectance as the average of the s and p terms.
///
/// Both terms use the incidence cosine on each side of the boundary, not the
/// transmitted cosine. At grazing incidence the terms are 0/0 and the
/// surface is treated as fully reflective.
fn fresnel_reflectance(cos_i: f64, etai: f64, etat: f64) -> f64 {
    let denom = etat * cos_i + etai * cos_i;
    if denom == 0.0 {
        return 1.0;
    }

    let rs = (etat * cos_i - etai * cos_i) / denom;
    let rp = (etai * cos_i - etat * cos_i) / (etai * cos_i + etat * cos_i);
    (rs * rs + rp * rp) / 2.0
}
