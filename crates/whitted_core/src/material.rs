//! Surface materials for the Whitted shading model.

use whitted_math::{Interval, Vec3};

use crate::error::{SceneError, SceneResult};

/// Color type alias (linear RGB, meaningfully in 0-1)
pub type Color = Vec3;

/// Mixing weights for the four light transport terms.
///
/// The weights are independent coefficients, not a probability distribution,
/// so they need not sum to one (a mirror can carry a specular weight of 10).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Albedo {
    pub diffuse: f32,
    pub specular: f32,
    pub reflection: f32,
    pub refraction: f32,
}

impl Albedo {
    pub const fn new(diffuse: f32, specular: f32, reflection: f32, refraction: f32) -> Self {
        Self {
            diffuse,
            specular,
            reflection,
            refraction,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.diffuse, self.specular, self.reflection, self.refraction]
    }
}

impl From<[f32; 4]> for Albedo {
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

/// Phong-style material with reflection and refraction weights.
///
/// Immutable once built; primitives hold their own copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    diffuse_color: Color,
    specular_exponent: f32,
    refractive_index: f32,
    albedo: Albedo,
}

impl Material {
    /// Create a material, rejecting parameters the tracer cannot handle.
    ///
    /// - `refractive_index`: must be > 0 (1.0 = vacuum, no bending)
    /// - `specular_exponent`: Phong shininess, >= 0
    /// - `albedo`: all four weights >= 0
    pub fn new(
        diffuse_color: Color,
        specular_exponent: f32,
        refractive_index: f32,
        albedo: impl Into<Albedo>,
    ) -> SceneResult<Self> {
        let albedo = albedo.into();

        if !refractive_index.is_finite() || refractive_index <= 0.0 {
            return Err(SceneError::InvalidRefractiveIndex(refractive_index));
        }
        if !specular_exponent.is_finite() || !Interval::NON_NEGATIVE.contains(specular_exponent) {
            return Err(SceneError::InvalidSpecularExponent(specular_exponent));
        }
        let weights = albedo.to_array();
        if weights
            .iter()
            .any(|w| !w.is_finite() || !Interval::NON_NEGATIVE.contains(*w))
        {
            return Err(SceneError::NegativeAlbedo(weights));
        }

        Ok(Self {
            diffuse_color,
            specular_exponent,
            refractive_index,
            albedo,
        })
    }

    /// Purely diffuse material: albedo (1, 0, 0, 0), no bending.
    pub fn diffuse(color: Color) -> Self {
        Self {
            diffuse_color: color,
            specular_exponent: 0.0,
            refractive_index: 1.0,
            albedo: Albedo::new(1.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn diffuse_color(&self) -> Color {
        self.diffuse_color
    }

    pub fn specular_exponent(&self) -> f32 {
        self.specular_exponent
    }

    pub fn refractive_index(&self) -> f32 {
        self.refractive_index
    }

    pub fn albedo(&self) -> Albedo {
        self.albedo
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5))
    }
}
