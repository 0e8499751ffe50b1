//! Prism Renderer - recursive CPU ray tracing
//!
//! A Whitted-style ray tracer: primary rays from a pinhole camera, direct
//! Lambertian lighting with hard shadows, perfect mirrors, and Fresnel
//! weighted dielectrics.

mod hit;
mod plane;
mod sphere;
mod triangle;
mod scene;
mod shader;
mod camera;
mod renderer;

pub use hit::{RayHit, SceneEntity, HIT_EPSILON, PARALLEL_EPSILON};
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use scene::Scene;
pub use shader::{MAX_DEPTH, SURFACE_BIAS};
pub use camera::{ImagePlane, FIELD_OF_VIEW_DEGREES};
pub use renderer::{color_to_rgba, ImageBuffer};

/// Re-export scene description values from prism_core
pub use prism_core::{Color, Material, MaterialType, PointLight, SceneError, SceneOptions};

/// Re-export DVec3 and Ray from prism_math
pub use prism_math::{DVec3, Ray};
