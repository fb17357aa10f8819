use whitted_math::Vec3;

use crate::error::{SceneError, SceneResult};

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    position: Vec3,
    intensity: f32,
}

impl Light {
    /// Create a point light; `intensity` must be finite and positive.
    pub fn new(position: Vec3, intensity: f32) -> SceneResult<Self> {
        if !intensity.is_finite() || intensity <= 0.0 {
            return Err(SceneError::InvalidIntensity(intensity));
        }
        Ok(Self {
            position,
            intensity,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }
}
