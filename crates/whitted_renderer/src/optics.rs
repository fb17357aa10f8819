//! Reflection, refraction and secondary-ray origin helpers.

use whitted_math::Vec3;

/// Reflect `incident` about `normal`: `I - 2N(I·N)`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract `incident` through a surface with outward `normal` using Snell's law.
///
/// `refractive_index` is the index of the medium behind the surface. When the
/// ray is leaving the medium (it travels along the outward normal) the index
/// ratio is inverted and the normal flipped. Returns `None` on total internal
/// reflection.
pub fn refract(incident: Vec3, normal: Vec3, refractive_index: f32) -> Option<Vec3> {
    let mut cos_i = -incident.dot(normal).clamp(-1.0, 1.0);
    let mut eta_i = 1.0;
    let mut eta_t = refractive_index;
    let mut n = normal;

    if cos_i < 0.0 {
        // Inside the object
        cos_i = -cos_i;
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -normal;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some(incident * eta + n * (eta * cos_i - k.sqrt()))
}

/// Nudge a secondary ray origin off the surface, onto the side `direction`
/// leaves towards, so the new ray does not hit the surface it starts on.
#[inline]
pub fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3, bias: f32) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * bias
    } else {
        point + normal * bias
    }
}
