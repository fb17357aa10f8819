//! Local (direct) illumination with hard shadows.

use whitted_core::{HitRecord, Light, Scene};
use whitted_math::{Ray, Vec3};

use crate::optics::{offset_origin, reflect};

/// Light intensity gathered at a surface point, before material weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightSample {
    pub diffuse: f32,
    pub specular: f32,
}

/// Whether something sits strictly between `point` and `light`.
///
/// The shadow ray starts `bias` off the surface on the light's side. Anything hit
/// beyond the light does not count.
pub fn is_shadowed(scene: &Scene, point: Vec3, normal: Vec3, light: &Light, bias: f32) -> bool {
    let to_light = light.position() - point;
    let light_distance = to_light.length();
    let light_dir = to_light.normalize_or_zero();

    let shadow_origin = offset_origin(point, normal, light_dir, bias);
    match scene.trace(&Ray::new(shadow_origin, light_dir)) {
        Some(blocker) => (blocker.point - shadow_origin).length() < light_distance,
        None => false,
    }
}

/// Sum the diffuse and Phong specular intensity of every unoccluded light.
///
/// `direction` is the normalized direction of the ray that produced `hit`.
pub fn direct_illumination(scene: &Scene, hit: &HitRecord<'_>, direction: Vec3, bias: f32) -> LightSample {
    let exponent = hit.material.specular_exponent();
    let mut sample = LightSample::default();

    for light in scene.lights() {
        if is_shadowed(scene, hit.point, hit.normal, light, bias) {
            continue;
        }

        let light_dir = (light.position() - hit.point).normalize_or_zero();
        sample.diffuse += light.intensity() * hit.normal.dot(light_dir).max(0.0);

        let highlight = (-reflect(-light_dir, hit.normal)).dot(direction).max(0.0);
        sample.specular += highlight.powf(exponent) * light.intensity();
    }

    sample
}
