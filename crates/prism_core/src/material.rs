//! Surface materials.
//!
//! A material only tags a surface for the shader; it performs no
//! computation of its own.

use prism_math::DVec3;
use serde::{Deserialize, Serialize};

/// Color type alias (linear RGB stored in x, y, z).
pub type Color = DVec3;

/// Discriminant of a [`Material`], for callers that only need the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialType {
    Diffuse,
    Reflective,
    Refractive,
}

/// A surface material.
///
/// Each variant carries only the parameters its shading model reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    /// Lambertian surface lit directly by point lights.
    Diffuse { color: Color },
    /// Perfect mirror.
    Reflective { color: Color },
    /// Dielectric that splits light into reflected and transmitted parts.
    Refractive { color: Color, refractive_index: f64 },
}

impl Material {
    /// Create a diffuse material with the given base color.
    pub fn diffuse(color: Color) -> Self {
        Self::Diffuse { color }
    }

    /// Create a mirror material.
    pub fn reflective(color: Color) -> Self {
        Self::Reflective { color }
    }

    /// Create a dielectric material.
    ///
    /// - `refractive_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn refractive(color: Color, refractive_index: f64) -> Self {
        Self::Refractive {
            color,
            refractive_index,
        }
    }

    pub fn material_type(&self) -> MaterialType {
        match self {
            Self::Diffuse { .. } => MaterialType::Diffuse,
            Self::Reflective { .. } => MaterialType::Reflective,
            Self::Refractive { .. } => MaterialType::Refractive,
        }
    }

    /// Base color of the surface.
    pub fn color(&self) -> Color {
        match *self {
            Self::Diffuse { color }
            | Self::Reflective { color }
            | Self::Refractive { color, .. } => color,
        }
    }

    /// Index of refraction. Only meaningful for refractive materials; the
    /// other variants report vacuum (1.0).
    pub fn refractive_index(&self) -> f64 {
        match *self {
            Self::Refractive {
                refractive_index, ..
            } => refractive_index,
            _ => 1.0,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5)) // Grey default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_type_tags() {
        assert_eq!(
            Material::diffuse(Color::ONE).material_type(),
            MaterialType::Diffuse
        );
        assert_eq!(
            Material::reflective(Color::ONE).material_type(),
            MaterialType::Reflective
        );
        assert_eq!(
            Material::refractive(Color::ONE, 1.5).material_type(),
            MaterialType::Refractive
        );
    }

    #[test]
    fn test_refractive_index_defaults_to_vacuum() {
        assert_eq!(Material::diffuse(Color::ONE).refractive_index(), 1.0);
        assert_eq!(Material::reflective(Color::ONE).refractive_index(), 1.0);
        assert_eq!(Material::refractive(Color::ONE, 1.33).refractive_index(), 1.33);
    }

    #[test]
    fn test_color_accessor() {
        let red = Color::new(1.0, 0.0, 0.0);
        assert_eq!(Material::diffuse(red).color(), red);
        assert_eq!(Material::refractive(red, 1.5).color(), red);
    }

    #[test]
    fn test_deserialize_tagged_material() {
        let json = r#"{ "type": "refractive", "color": [1.0, 1.0, 1.0], "refractive_index": 1.4 }"#;
        let material: Material = serde_json::from_str(json).unwrap();

        assert_eq!(material, Material::refractive(Color::ONE, 1.4));
    }

    #[test]
    fn test_unknown_material_type_is_rejected() {
        let json = r#"{ "type": "glossy", "color": [1.0, 1.0, 1.0] }"#;
        assert!(serde_json::from_str::<Material>(json).is_err());
    }
}
