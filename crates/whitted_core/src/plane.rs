//! Infinite plane primitive.

use whitted_math::{Ray, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::{Material, Primitive};

/// Below this, a ray is treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite, one-sided plane through `point` facing along `normal`.
///
/// Like a sphere, a plane always reports its outward normal, whichever side
/// the ray arrives from. A hit from behind therefore faces away from the ray
/// and lights on that side contribute no diffuse term.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a plane; `normal` is normalized and must not be zero.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> SceneResult<Self> {
        let normal = normal.try_normalize().ok_or(SceneError::DegenerateNormal)?;
        Ok(Self {
            point,
            normal,
            material,
        })
    }

}

impl Primitive for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !t.is_finite() || t < 0.0 {
            return None;
        }
        Some(t)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
