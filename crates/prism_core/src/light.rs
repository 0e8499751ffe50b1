//! Point light sources.

use prism_math::DVec3;
use serde::{Deserialize, Serialize};

use crate::material::Color;

/// A zero-size emitter. Its contribution does not fall off with distance;
/// only occlusion removes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// World-space position
    pub position: DVec3,

    /// Color and intensity (RGB, unclamped)
    pub color: Color,
}

impl PointLight {
    pub fn new(position: DVec3, color: Color) -> Self {
        Self { position, color }
    }
}
