//! Primitive trait and HitRecord for ray-object intersection.

use whitted_math::{Ray, Vec3};

use crate::Material;

/// Record of the nearest ray-object intersection found by a scene query.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Distance along the ray
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal at `point`
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
}

/// Trait for analytic surfaces that can be hit by rays.
pub trait Primitive: Send + Sync {
    /// Distance along `ray` to this primitive, if it is hit in front of the
    /// ray origin.
    ///
    /// `ray.direction` must already be normalized. The returned root is not
    /// compared against hits on other primitives; the scene does that.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Material attached to this primitive.
    fn material(&self) -> &Material;
}
