//! Sphere primitive for ray tracing.

use whitted_math::{Ray, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::{Material, Primitive};

/// Geometry of a line crossing a sphere.
///
/// `tca` is the projection of the origin-to-center vector onto the ray
/// direction and `thc` is half the chord length, so the two crossings are at
/// `tca - thc` and `tca + thc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub tca: f32,
    pub thc: f32,
}

impl Chord {
    pub fn near(&self) -> f32 {
        self.tca - self.thc
    }

    pub fn far(&self) -> f32 {
        self.tca + self.thc
    }
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere; `radius` must be finite and positive.
    pub fn new(center: Vec3, radius: f32, material: Material) -> SceneResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Where the line carrying `ray` crosses the sphere, ignoring whether the
    /// crossings are in front of the origin. `None` if the line misses.
    pub fn chord(&self, ray: &Ray) -> Option<Chord> {
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }
        // d2 can dip slightly below zero through cancellation; that only
        // lengthens the chord by a rounding error
        let thc = (r2 - d2).sqrt();
        Some(Chord { tca, thc })
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let chord = self.chord(ray)?;

        // Origin inside or past the near side: fall back to the far root
        let mut t = chord.near();
        if t < 0.0 {
            t = chord.far();
        }
        if t < 0.0 {
            return None;
        }
        Some(t)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, Material::default()).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let t = sphere.intersect(&ray).expect("ray aimed at the center must hit");
        assert!((t - 4.0).abs() < 1e-5);

        let normal = sphere.normal_at(ray.at(t));
        assert!((normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere.intersect(&ray).is_none());
        assert!(sphere.chord(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // The line crosses the sphere but both roots are negative
        let chord = sphere.chord(&ray).unwrap();
        assert!(chord.far() < 0.0);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, Material::default()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_tangent_ray() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 1.0, -5.0));
        // Grazes the bottom of the sphere at (0, 0, -5)
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let chord = sphere.chord(&ray).expect("tangent ray is a hit");
        assert!(chord.thc.abs() < 1e-3);
        assert!((chord.near() - chord.far()).abs() < 2e-3);

        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_intersect_ignores_previous_hits() {
        // The root is reported even though some caller may already have a
        // closer hit; there is no bound to pass in.
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -500.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!((sphere.intersect(&ray).unwrap() - 499.0).abs() < 1e-3);
    }

    #[test]
    fn test_chord_through_center() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let center = Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let radius = rng.gen_range(0.5..3.0);
            let sphere = Sphere::new(center, radius, Material::default()).unwrap();

            // Origin well outside the sphere, aimed through its center
            let offset = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
            .try_normalize()
            .unwrap_or(Vec3::X);
            let origin = center + offset * (radius + rng.gen_range(1.0..10.0));
            let ray = Ray::new(origin, (center - origin).normalize());

            let chord = sphere.chord(&ray).unwrap();
            assert!(chord.thc <= radius + 1e-3);
            assert!(((chord.far() - chord.near()) - 2.0 * chord.thc).abs() < 1e-4);
            assert!((chord.thc - radius).abs() < 1e-2);

            // Reversing the ray from the far side gives the same chord length
            let exit = ray.at(chord.far());
            let back = Ray::new(exit + ray.direction() * 5.0, -ray.direction());
            let back_chord = sphere.chord(&back).unwrap();
            assert!((back_chord.thc - chord.thc).abs() < 1e-2);
        }
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(
            Sphere::new(Vec3::ZERO, 0.0, Material::default()).unwrap_err(),
            SceneError::InvalidRadius(0.0)
        );
        assert!(Sphere::new(Vec3::ZERO, -1.0, Material::default()).is_err());
        assert!(Sphere::new(Vec3::ZERO, f32::NAN, Material::default()).is_err());
    }
}
