//! Prism Core - scene description values for the Prism ray tracer.
//!
//! This crate provides the renderer-agnostic pieces of a scene:
//!
//! - **Materials**: `Material` (diffuse, reflective, refractive)
//! - **Lights**: `PointLight`
//! - **Options**: `SceneOptions` and the errors raised while validating them
//!
//! # Example
//!
//! ```
//! use prism_core::{Color, Material, PointLight, SceneOptions};
//! use prism_math::DVec3;
//!
//! let glass = Material::refractive(Color::ONE, 1.5);
//! let key = PointLight::new(DVec3::new(2.0, 2.0, 2.0), Color::ONE);
//! let options = SceneOptions::from_json(r#"{ "aa_multiplier": 2 }"#).unwrap();
//!
//! assert_eq!(glass.refractive_index(), 1.5);
//! assert_eq!(key.position.x, 2.0);
//! assert_eq!(options.aa_multiplier, 2);
//! ```

pub mod light;
pub mod material;
pub mod options;

// Re-export commonly used types
pub use light::PointLight;
pub use material::{Color, Material, MaterialType};
pub use options::{SceneError, SceneOptions, SceneResult};
