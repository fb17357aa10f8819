//! Scene container and nearest-hit query.
//!
//! A scene is assembled once through [`SceneBuilder`] and is read-only from
//! then on, so a single `&Scene` can be shared by every pixel of a render.

use whitted_math::{Ray, Vec3};

use crate::error::SceneResult;
use crate::{HitRecord, Light, Material, Plane, Primitive, Sphere};

/// Hits farther away than this are treated as background.
pub const MAX_DISTANCE: f32 = 1000.0;

/// An ordered set of primitives plus the point lights that illuminate them.
pub struct Scene {
    primitives: Vec<Box<dyn Primitive>>,
    lights: Vec<Light>,
    max_distance: f32,
}

impl Scene {
    /// Start building a scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    /// Find the nearest primitive along `ray`.
    ///
    /// Primitives are scanned in insertion order and a candidate only
    /// replaces the running best when it is strictly closer, so on an exact
    /// tie the first primitive inserted wins. Returns `None` when nothing is
    /// hit closer than the scene's visibility cutoff; the ray escapes to the
    /// background.
    pub fn trace(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut closest_so_far = f32::INFINITY;
        let mut nearest: Option<&dyn Primitive> = None;

        for primitive in &self.primitives {
            if let Some(t) = primitive.intersect(ray) {
                if t < closest_so_far {
                    closest_so_far = t;
                    nearest = Some(primitive.as_ref());
                }
            }
        }

        let primitive = nearest?;
        if closest_so_far >= self.max_distance {
            return None;
        }

        let point = ray.at(closest_so_far);
        Some(HitRecord {
            t: closest_so_far,
            point,
            normal: primitive.normal_at(point),
            material: primitive.material(),
        })
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Visibility cutoff used by [`Scene::trace`].
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Collects primitives and lights before any ray is traced.
pub struct SceneBuilder {
    primitives: Vec<Box<dyn Primitive>>,
    lights: Vec<Light>,
    max_distance: f32,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            max_distance: MAX_DISTANCE,
        }
    }

    /// Add any primitive. Order matters only for exact distance ties.
    pub fn add_primitive(&mut self, primitive: Box<dyn Primitive>) -> &mut Self {
        self.primitives.push(primitive);
        self
    }

    /// Add a sphere, validating its radius.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: Material) -> SceneResult<&mut Self> {
        let sphere = Sphere::new(center, radius, material)?;
        Ok(self.add_primitive(Box::new(sphere)))
    }

    /// Add an infinite plane, validating its normal.
    pub fn add_plane(&mut self, point: Vec3, normal: Vec3, material: Material) -> SceneResult<&mut Self> {
        let plane = Plane::new(point, normal, material)?;
        Ok(self.add_primitive(Box::new(plane)))
    }

    /// Add a point light, validating its intensity.
    pub fn add_light(&mut self, position: Vec3, intensity: f32) -> SceneResult<&mut Self> {
        self.lights.push(Light::new(position, intensity)?);
        Ok(self)
    }

    /// Override the visibility cutoff (default [`MAX_DISTANCE`]).
    pub fn with_max_distance(&mut self, max_distance: f32) -> &mut Self {
        self.max_distance = max_distance;
        self
    }

    /// Freeze the collected primitives and lights into a [`Scene`].
    pub fn build(&mut self) -> Scene {
        log::debug!(
            "Built scene with {} primitives and {} lights",
            self.primitives.len(),
            self.lights.len()
        );
        Scene {
            primitives: std::mem::take(&mut self.primitives),
            lights: std::mem::take(&mut self.lights),
            max_distance: self.max_distance,
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
