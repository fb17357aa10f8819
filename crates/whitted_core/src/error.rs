//! Errors raised while assembling a scene.
//!
//! Rendering itself has no failure modes; every value that could make it
//! misbehave is rejected here, when the material, primitive or light is built.

use thiserror::Error;

/// Errors that can occur while constructing scene entities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("refractive index must be finite and positive, got {0}")]
    InvalidRefractiveIndex(f32),

    #[error("specular exponent must be finite and non-negative, got {0}")]
    InvalidSpecularExponent(f32),

    #[error("albedo weights must be finite and non-negative, got {0:?}")]
    NegativeAlbedo([f32; 4]),

    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    #[error("light intensity must be finite and positive, got {0}")]
    InvalidIntensity(f32),

    #[error("plane normal has zero length")]
    DegenerateNormal,
}

pub type SceneResult<T> = Result<T, SceneError>;
