//! Recursive Whitted illumination.
//!
//! Every hit combines four terms: diffuse and specular light from the scene's
//! point lights, plus the colour seen along the mirror-reflected and the
//! refracted ray. The two secondary rays recurse until `max_depth` is
//! exceeded, at which point the background colour stands in.

use whitted_core::{Color, Scene};
use whitted_math::{Ray, Vec3};

use crate::optics::{offset_origin, reflect, refract};
use crate::shading::direct_illumination;
use crate::RenderConfig;

/// Compute the colour seen along a ray.
///
/// `direction` must be normalized. `depth` is 0 for primary rays and grows by
/// one per reflection or refraction bounce.
pub fn shade(origin: Vec3, direction: Vec3, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }

    let Some(hit) = scene.trace(&Ray::new(origin, direction)) else {
        return config.background;
    };

    let material = hit.material;
    let albedo = material.albedo();

    // A zero weight would zero the term anyway, so skip the recursion
    let reflect_color = if albedo.reflection != 0.0 {
        let reflect_dir = reflect(direction, hit.normal).normalize_or_zero();
        let reflect_orig = offset_origin(hit.point, hit.normal, reflect_dir, config.bias);
        shade(reflect_orig, reflect_dir, scene, depth + 1, config)
    } else {
        Color::ZERO
    };

    // Total internal reflection leaves the refracted term black
    let refract_color = if albedo.refraction != 0.0 {
        match refract(direction, hit.normal, material.refractive_index()) {
            Some(refract_dir) => {
                let refract_dir = refract_dir.normalize_or_zero();
                let refract_orig = offset_origin(hit.point, hit.normal, refract_dir, config.bias);
                shade(refract_orig, refract_dir, scene, depth + 1, config)
            }
            None => Color::ZERO,
        }
    } else {
        Color::ZERO
    };

    let light = direct_illumination(scene, &hit, direction, config.bias);

    material.diffuse_color() * light.diffuse * albedo.diffuse
        + Color::ONE * light.specular * albedo.specular
        + reflect_color * albedo.reflection
        + refract_color * albedo.refraction
}
