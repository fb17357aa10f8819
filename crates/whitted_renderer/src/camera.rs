//! Pinhole camera for primary ray generation.

use serde::Deserialize;
use whitted_math::{Ray, Vec3};

use crate::error::{RenderError, RenderResult};
use crate::renderer::pixel_count;

/// Largest image, in pixels, a camera may ask for (8192 x 8192).
pub const MAX_PIXELS: usize = 1 << 26;

/// Camera looking down -Z from `eye`, with a vertical field of view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Camera {
    #[serde(rename = "width")]
    pub image_width: u32,
    #[serde(rename = "height")]
    pub image_height: u32,

    eye: Vec3,
    fov: f32, // Vertical field of view in radians
}

impl Camera {
    /// Create a new camera with default settings (1024x768, 45 degree fov).
    pub fn new() -> Self {
        Self {
            image_width: 1024,
            image_height: 768,
            eye: Vec3::ZERO,
            fov: std::f32::consts::FRAC_PI_4,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the vertical field of view, in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set the eye position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Reject resolutions that are empty or too large to allocate, and
    /// fields of view that do not open a frustum.
    pub fn validate(&self) -> RenderResult<()> {
        let pixels = pixel_count(self.image_width, self.image_height);
        if !pixels.is_some_and(|n| n > 0 && n <= MAX_PIXELS) {
            return Err(RenderError::InvalidSettings(format!(
                "resolution must be non-zero and at most {MAX_PIXELS} pixels, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return Err(RenderError::InvalidSettings(format!(
                "fov must be within (0, pi) radians, got {}",
                self.fov
            )));
        }
        if !self.eye.is_finite() {
            return Err(RenderError::InvalidSettings(format!(
                "eye must be finite, got {}",
                self.eye
            )));
        }
        Ok(())
    }

    /// Normalized direction through the center of pixel (i, j).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn primary_direction(&self, i: u32, j: u32) -> Vec3 {
        let width = self.image_width as f32;
        let height = self.image_height as f32;
        let half_height = (self.fov / 2.0).tan();

        let x = (2.0 * (i as f32 + 0.5) / width - 1.0) * half_height * width / height;
        let y = -(2.0 * (j as f32 + 0.5) / height - 1.0) * half_height;
        Vec3::new(x, y, -1.0).normalize()
    }

    /// Primary ray for pixel (i, j).
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        Ray::new(self.eye, self.primary_direction(i, j))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_looks_down_negative_z() {
        let camera = Camera::new().with_resolution(101, 101);
        let dir = camera.primary_direction(50, 50);
        assert!((dir - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_directions_are_normalized() {
        let camera = Camera::new().with_resolution(64, 48);
        for (i, j) in [(0, 0), (63, 0), (0, 47), (63, 47), (17, 30)] {
            let dir = camera.primary_direction(i, j);
            assert!((dir.length() - 1.0).abs() < 1e-5);
            assert!(dir.z < 0.0);
        }
    }

    #[test]
    fn test_corners_are_symmetric() {
        let camera = Camera::new().with_resolution(64, 48);
        let top_left = camera.primary_direction(0, 0);
        let bottom_right = camera.primary_direction(63, 47);

        // Top-left points up and left; image rows go downwards
        assert!(top_left.x < 0.0 && top_left.y > 0.0);
        assert!((top_left.x + bottom_right.x).abs() < 1e-6);
        assert!((top_left.y + bottom_right.y).abs() < 1e-6);
    }

    #[test]
    fn test_fov_spans_edges() {
        let camera = Camera::new().with_resolution(2, 2).with_fov(std::f32::consts::FRAC_PI_2);
        // Pixel centers sit halfway to the edge, where tan(fov / 2) = 1
        let dir = camera.primary_direction(1, 0);
        let expected = Vec3::new(0.5, 0.5, -1.0).normalize();
        assert!((dir - expected).length() < 1e-6);
    }

    #[test]
    fn test_validate_resolution_bounds() {
        assert!(Camera::new().validate().is_ok());
        assert!(Camera::new().with_resolution(8192, 8192).validate().is_ok());

        for (width, height) in [(0, 5), (5, 0), (8193, 8192), (70_000, 70_000), (u32::MAX, u32::MAX)] {
            assert!(
                matches!(
                    Camera::new().with_resolution(width, height).validate(),
                    Err(RenderError::InvalidSettings(_))
                ),
                "{width}x{height} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_fov() {
        assert!(Camera::new().with_fov(0.0).validate().is_err());
        assert!(Camera::new().with_fov(4.0).validate().is_err());
        assert!(Camera::new().with_fov(f32::NAN).validate().is_err());
        assert!(Camera::new().with_eye(Vec3::splat(f32::INFINITY)).validate().is_err());
    }

    #[test]
    fn test_get_ray_starts_at_eye() {
        let eye = Vec3::new(0.0, 1.0, 2.0);
        let camera = Camera::new().with_resolution(8, 8).with_eye(eye);
        assert_eq!(camera.get_ray(3, 3).origin(), eye);
    }
}
