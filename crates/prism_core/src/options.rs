//! Rendering options consumed by the scene.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building scene options.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Anti-aliasing multiplier must be at least 1, got {0}")]
    InvalidAaMultiplier(u32),

    #[error("Options parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Options that tune a render.
///
/// Only the anti-aliasing sample multiplier is configurable. Field of view,
/// recursion depth and surface bias are renderer constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    /// Sub-samples per axis per pixel (1 disables anti-aliasing)
    pub aa_multiplier: u32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self { aa_multiplier: 1 }
    }
}

impl SceneOptions {
    /// Create validated options.
    pub fn new(aa_multiplier: u32) -> SceneResult<Self> {
        let options = Self { aa_multiplier };
        options.validate()?;
        Ok(options)
    }

    /// Parse options from a JSON document such as `{"aa_multiplier": 2}`.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        log::debug!("Parsed scene options: {:?}", options);
        Ok(options)
    }

    pub fn validate(&self) -> SceneResult<()> {
        if self.aa_multiplier == 0 {
            return Err(SceneError::InvalidAaMultiplier(self.aa_multiplier));
        }
        Ok(())
    }

    /// Whether more than one sample is taken per pixel.
    pub fn is_antialiased(&self) -> bool {
        self.aa_multiplier > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disables_antialiasing() {
        let options = SceneOptions::default();
        assert_eq!(options.aa_multiplier, 1);
        assert!(!options.is_antialiased());
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let err = SceneOptions::new(0).unwrap_err();
        assert!(matches!(err, SceneError::InvalidAaMultiplier(0)));
    }

    #[test]
    fn test_from_json() {
        let options = SceneOptions::from_json(r#"{ "aa_multiplier": 3 }"#).unwrap();
        assert_eq!(options.aa_multiplier, 3);
        assert!(options.is_antialiased());
    }

    #[test]
    fn test_from_json_missing_field_uses_default() {
        let options = SceneOptions::from_json("{}").unwrap();
        assert_eq!(options, SceneOptions::default());
    }

    #[test]
    fn test_from_json_validates() {
        let err = SceneOptions::from_json(r#"{ "aa_multiplier": 0 }"#).unwrap_err();
        assert!(matches!(err, SceneError::InvalidAaMultiplier(0)));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = SceneOptions::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SceneError::Config(_)));
    }
}
